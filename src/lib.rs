pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod store;
