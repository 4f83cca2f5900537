//! Domain layer
//!
//! Contains the remote data shapes and the fetch contract, with no I/O.
//! - `entities`: typed views of the JSON returned by each API
//! - `ports`: trait definitions for external dependencies

pub mod entities;
pub mod ports;
