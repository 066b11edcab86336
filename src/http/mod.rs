//! HTTP protocol layer module
//!
//! Protocol-level helpers shared by the API and the static/SPA router:
//! content types, `ETag`s, response builders and CORS headers.

pub mod cache;
pub mod cors;
pub mod mime;
pub mod path;
pub mod response;

pub use cors::CorsRequest;
pub use response::{
    apply_server_header, build_304_response, build_file_response, build_options_response,
    strip_body,
};
