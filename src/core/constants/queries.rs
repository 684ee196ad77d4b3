pub const USERS_QUERY: &str = "Select * from users";
pub const SHORT_QUERY: &str = "Select";
