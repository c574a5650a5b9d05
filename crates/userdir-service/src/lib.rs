//! # Userdir Service
//!
//! Consumer-facing read API: list the cached user collection, or fetch one
//! user enriched with posts pulled fresh from upstream at read time.

pub mod directory_service;
pub mod directory_service_impl;

pub use directory_service::DirectoryService;
pub use directory_service_impl::DirectoryServiceImpl;
