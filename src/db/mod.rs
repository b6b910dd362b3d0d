pub mod connection;
pub mod housing;
pub mod refreshes;

pub use connection::{init_db, Database};
