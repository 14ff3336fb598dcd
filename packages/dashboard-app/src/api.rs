//! HTTP client for the third-party quote provider
//!
//! Neither call is needed to render the dashboard; both are optional
//! collaborators used by the search widget and the JSON passthrough.

pub mod client;
pub mod types;

pub use client::*;
pub use types::SymbolMatch;
