pub mod config;
pub mod errors;
pub mod graphql;
pub mod json_schema;
pub mod language;
pub mod outcome;
pub mod server;
pub mod tools;
pub mod transport;
