//! # Rap
//!
//! Reads Rap assembly a line at a time, compiles each line to bytecode
//! and runs it.
//!

mod term;

fn main() {
    term::main();
}
