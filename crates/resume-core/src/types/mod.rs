//! Core types for resume-parser.

mod message;
mod profile;

pub use message::*;
pub use profile::*;
