//! SSH agent reply header structures

pub mod code;
pub mod error;
pub mod header;

pub use self::code::*;
pub use self::error::{ProtoError as Error, ProtoResult as Result, *};
pub use self::header::*;
