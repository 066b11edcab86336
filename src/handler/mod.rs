//! Request handler module
//!
//! Request dispatch: the API namespace first, then the static/SPA fallback chain.

pub mod router;
pub mod spa;

// Re-export main entry point
pub use router::handle_request;
