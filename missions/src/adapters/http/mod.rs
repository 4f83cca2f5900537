//! HTTP adapter
//!
//! reqwest implementation of the JSON fetch helper.

pub mod client;

pub use client::HttpJsonClient;
