#![doc = include_str!("../README.md")]
#![deny(missing_debug_implementations)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]

pub mod blocking;
pub mod error;
pub mod proto;

// re-export dependencies that are used in the public API of our crate
pub use ssh_encoding;
