use crate::core::connection::DbConnection;

// Borrows the connection for its whole lifetime, never owns it.
// Open/close bookkeeping stays with the caller.
pub struct DbClient<'a> {
    conn: &'a dyn DbConnection,
}

impl<'a> DbClient<'a> {
    pub fn new(conn: &'a dyn DbConnection) -> DbClient<'a> {
        DbClient { conn }
    }

    pub fn open_connection(&self) {
        self.conn.open();
    }

    pub fn use_connection(&self, query: &str) -> String {
        self.conn.exec_query(query)
    }

    pub fn close_connection(&self) {
        self.conn.close();
    }
}
