pub mod auth;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;
