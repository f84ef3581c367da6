//! # API - talks to the BharatArchive REST API
//!

pub mod client;
pub mod endpoint;
