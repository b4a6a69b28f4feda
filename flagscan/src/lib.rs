//! flagscan, a `no_std` command line flag scanner.
//!
//! The scanner walks the tokens of a command line and reports each flag, with its header, its
//! name and its value, to a callback. It does not know which flags are expected nor how their
//! values should be interpreted.
//!
//! ```
//! use flagscan::{Separator, Spec, Status};
//!
//! let argv = ["-v", "--level=3", "--out", "a.txt", "--", "input"];
//! let mut verbose = false;
//!
//! let rest = flagscan::scan(&argv, |spec: Spec<'_>| {
//!     match (spec.name, spec.separator) {
//!         ("v", Separator::None) => verbose = true,
//!         ("level" | "out", _) => {}
//!         _ => return Err(Status::invalid_argument("unknown flag").with_arg(spec.name)),
//!     }
//!     Ok(())
//! })?;
//!
//! assert!(verbose);
//! assert_eq!(rest, ["input"]);
//! # Ok::<(), Status>(())
//! ```
#![no_std]
#![deny(missing_docs)]

extern crate alloc;

pub use flagscan_parser as parser;
pub use flagscan_status as status;

pub mod binary;
pub mod hex;
pub mod statemachine;

pub use parser::{ScannedArgs, Scanner, Separator, Spec, scan};
pub use status::{Code, Status};
