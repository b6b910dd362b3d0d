use crate::db::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod scraper;

#[cfg(test)]
mod tests;

const DEFAULT_PORT: u16 = 8000;

fn main() {
    let db_path = std::env::var("HOUSING_DB").unwrap_or_else(|_| "housing.sqlite3".to_string());
    let db = Database::new(db_path);

    if let Err(e) = init_db(&db) {
        eprintln!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }

    let port = match std::env::var("PORT") {
        Ok(raw) => match raw.parse::<u16>() {
            Ok(port) => port,
            Err(_) => {
                eprintln!("❌ PORT must be a number between 0 and 65535, got: {raw}");
                std::process::exit(1);
            }
        },
        Err(_) => DEFAULT_PORT,
    };

    let addr: SocketAddr = match format!("0.0.0.0:{port}").parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("❌ Invalid listen address: {e}");
            std::process::exit(1);
        }
    };

    println!("Starting housing API at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &db) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
