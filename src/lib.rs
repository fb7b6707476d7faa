//! Gatehouse
//! Mission: Bearer-token authentication service with an OAuth2 password login

pub mod auth;
pub mod config;
pub mod middleware;
pub mod routes;
