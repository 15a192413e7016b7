//! Typed clients for Firebase project-management app resources
//!
//! - [`project_management`] - Web, iOS and Android app clients
//! - [`gcp`] - Credentials and HTTP transport
//! - [`config`] - Persistent settings for the `fbapps` binary

pub mod config;
pub mod gcp;
pub mod project_management;
