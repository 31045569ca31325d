//! REST client for the marketplace backend.

pub mod client;

pub use client::ApiClient;
