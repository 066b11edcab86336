//! Portfolio website backend
//!
//! Serves project and biography data as JSON under `/api/`, and a pre-built
//! single-page application with shell fallback for every other path.

pub mod api;
pub mod config;
pub mod fixture;
pub mod handler;
pub mod http;
pub mod logger;
pub mod resolver;
pub mod server;
