// INTEGRATION TESTS

#[allow(non_snake_case)]
#[cfg(test)]
pub mod client {
    use dbgate::core::{
        client::DbClient,
        connection::{DbConnection, DirectConnection},
        constants::queries,
    };

    #[test]
    fn test_db_client__full_session_against_direct_connection() {
        let conn = DirectConnection;
        let client = DbClient::new(&conn);

        client.open_connection();
        let result = client.use_connection(queries::USERS_QUERY);
        client.close_connection();

        assert_eq!(result, "real result");
    }

    #[test]
    fn test_direct_connection__exec_query_ignores_query_text() {
        let conn = DirectConnection;

        assert_eq!(conn.exec_query(queries::SHORT_QUERY), "real result");
        assert_eq!(conn.exec_query(""), "real result");
    }

    #[test]
    fn test_db_client__calls_are_independent() {
        let conn = DirectConnection;
        let client = DbClient::new(&conn);

        // no open-before-use tracking in the client
        let result = client.use_connection(queries::USERS_QUERY);

        assert_eq!(result, "real result");
    }
}
