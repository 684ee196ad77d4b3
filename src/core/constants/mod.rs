pub mod cli;
pub mod queries;
