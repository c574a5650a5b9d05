//! # Userdir REST
//!
//! Thin axum routing layer over the directory service: `/users`,
//! `/users/{id}`, and health endpoints. All domain behavior lives behind
//! [`userdir_service::DirectoryService`].

pub mod controllers;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
