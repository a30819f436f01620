//! SQLite store backing the sales tools.

mod connection;
mod queries;
pub mod seed;

pub use connection::Database;
pub use seed::seed_demo_data;
