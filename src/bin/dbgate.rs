use std::env;
use std::process;

use dbgate::cli::util::get_flag_val;
use dbgate::core::client::DbClient;
use dbgate::core::connection::DirectConnection;
use dbgate::core::constants::{cli, queries};

fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let query = if args.len() > 1 {
        match get_flag_val::<String>(&args, cli::QUERY_FLAG) {
            Ok(val) => val,
            Err(e) => {
                eprintln!("{}", serde_json::to_string(&e).unwrap());
                process::exit(1);
            }
        }
    } else {
        String::from(queries::USERS_QUERY)
    };

    let conn = DirectConnection;
    let client = DbClient::new(&conn);

    client.open_connection();
    let result = client.use_connection(&query);
    client.close_connection();

    println!("{}", result);

    Ok(())
}
