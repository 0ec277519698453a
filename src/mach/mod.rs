/*!
## Rust Machine Module

This Rust module is a compiler and register virtual machine for doggo.

*/

pub type Address = usize;
pub type Word = i32;

mod compile;
mod link;
mod listing;
mod opcode;
mod program;
mod runtime;
mod stack;

#[cfg(test)]
mod tests;

pub use compile::compile;
pub use link::Link;
pub use link::SCRATCH;
pub use listing::Listing;
pub use opcode::Opcode;
pub use program::Patch;
pub use program::Program;
pub use program::PLACEHOLDER;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
