//! # Rap
//!
//! A tiny s-expression assembler and the stack machine that runs it.
//!
//! A line of Rap assembly compiles to a [`mach::Program`], a flat vector of
//! 32-bit words. The first word is the number of frame cells the code needs;
//! instructions follow, each a tag word and its operands.
//! ```
//! use rap::mach::{compile, Runtime, Val};
//! let program = compile("(sub (int 7) (int 2))").unwrap();
//! let mut runtime = Runtime::new(Vec::<u8>::new());
//! assert_eq!(runtime.run(&program), Ok(Val::Integer(5)));
//! ```
//!
//! Run the `rap` executable for an interactive prompt, or hand it a file
//! with one line of assembly per line.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

pub mod lang;
pub mod mach;
