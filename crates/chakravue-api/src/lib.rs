//! HTTP client for the ChakraVue doctor backend.
//!
//! Implements the `DoctorApi` seam over reqwest. Read failures fold to
//! empty values here, so nothing past this crate sees a transport error.

pub mod client;
pub mod config;
mod decode;

pub use crate::client::ApiClient;
pub use crate::config::ApiConfig;
