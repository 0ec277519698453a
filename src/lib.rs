//! # doggo
//!
//! A compiler and virtual machine for the doggo language.
//!
//! Source text is split into whitespace-delimited tokens, compiled in a
//! single pass into bytecode for a two-register machine, then executed.
//! ```
//! use doggo::lang::{lex, Dialect};
//! use doggo::mach::{compile, Event, Runtime};
//!
//! let program = compile(lex("lassie AWOO 5 lassie WOOF 6"), Dialect::Doggo).unwrap();
//! let mut runtime = Runtime::new(program);
//! assert_eq!(runtime.execute(5000), Event::Print(11));
//! assert_eq!(runtime.execute(5000), Event::Stopped);
//! ```

#[path = "doc/language.rs"]
#[allow(non_snake_case)]
pub mod _Language;

pub mod lang;
pub mod mach;
