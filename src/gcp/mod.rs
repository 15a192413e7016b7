//! Google API plumbing
//!
//! Authentication and HTTP transport shared by the project-management
//! request handler.
//!
//! # Module Structure
//!
//! - [`auth`] - Credentials (Application Default Credentials or an explicit token)
//! - [`http`] - HTTP utilities for REST API calls

pub mod auth;
pub mod http;
