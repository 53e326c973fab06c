mod config;
mod db;

pub use config::ConfigError;
pub use db::DatabaseError;
