#[cfg_attr(test, mockall::automock)]
pub trait DbConnection {
    fn open(&self);
    fn close(&self);
    fn exec_query(&self, query: &str) -> String;
}

pub struct DirectConnection;

impl DbConnection for DirectConnection {
    fn open(&self) {}

    fn close(&self) {}

    fn exec_query(&self, _query: &str) -> String {
        String::from("real result")
    }
}
