//! Status codes and errors shared by the flagscan crates.
//!
//! The [`Code`] classification is always available. The [`Status`] error, which owns its
//! description, its arguments and its cause, requires the `alloc` feature.
#![no_std]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod code;

#[cfg(feature = "alloc")]
pub mod render;

#[cfg(feature = "alloc")]
pub mod status;

pub use code::Code;

#[cfg(feature = "alloc")]
pub use render::{DEFAULT_INDENTS, Plain, Render, Rendered};

#[cfg(feature = "alloc")]
pub use status::{Cause, Status, cause_of, code_of};
