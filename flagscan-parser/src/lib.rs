#![no_std]

pub mod lexer;
pub mod parser;
pub mod scanner;

pub use lexer::{cut, split};
pub use parser::ScannedArgs;
pub use scanner::{Error, Scanner, Separator, Spec, TERMINATOR, scan};
