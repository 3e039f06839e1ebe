/*!
## Rust Machine Module

This Rust module is a compiler and virtual machine for Rap assembly.

*/

/// Index of a word within a [`Program`].
pub type Address = usize;
/// The unit of bytecode.
pub type Word = i32;
/// Jump displacements are measured in bytes.
pub const WORD_BYTES: usize = std::mem::size_of::<Word>();
/// Most frame cells a program may ask for.
pub const MAX_FRAME: usize = u16::max_value() as usize;

mod compile;
mod listing;
mod opcode;
mod operation;
mod program;
mod routine;
mod runtime;
mod stack;
mod val;

pub use compile::compile;
pub use listing::Listing;
pub use opcode::Opcode;
pub use operation::Operation;
pub use program::Program;
pub use routine::NativeFn;
pub use routine::Routine;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::Val;

#[cfg(test)]
mod tests;
