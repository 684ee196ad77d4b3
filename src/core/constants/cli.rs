pub const QUERY_FLAG: &str = "-q";
