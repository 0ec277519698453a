use super::{Address, Link, Opcode, Stack, Word};
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// Operand written for jump targets not yet known. Never a valid target.
pub const PLACEHOLDER: Word = Word::MIN;

/// A jump operand waiting for its target.
///
/// Consumed by `Program::patch`, so a site cannot be patched twice.
#[must_use]
#[derive(Debug, PartialEq, Eq)]
pub struct Patch(Address);

impl Patch {
    pub fn address(&self) -> Address {
        self.0
    }
}

/// ## Compiled program
///
/// The code buffer of opcode and operand words plus the variable
/// symbols that produced it. Addresses are word indices.

#[derive(Debug)]
pub struct Program {
    code: Stack<Word>,
    link: Link,
}

impl Default for Program {
    fn default() -> Program {
        Program::new()
    }
}

impl Program {
    pub fn new() -> Program {
        Program {
            code: Stack::new("PROGRAM TOO LARGE", Word::max_value() as usize),
            link: Link::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn code(&self) -> &[Word] {
        self.code.as_slice()
    }

    pub fn get(&self, addr: Address) -> Option<Word> {
        self.code.get(addr).copied()
    }

    pub fn link(&self) -> &Link {
        &self.link
    }

    /// The address the next emitted word will occupy.
    pub fn label(&self) -> Address {
        self.code.len()
    }

    pub fn symbol(&mut self, name: &str) -> Word {
        self.link.symbol(name)
    }

    pub fn push(&mut self, op: Opcode) -> Result<()> {
        debug_assert!(!op.has_operand(), "{} needs an operand", op);
        self.code.push(op.into())
    }

    pub fn push_operand(&mut self, op: Opcode, operand: Word) -> Result<()> {
        debug_assert!(op.has_operand(), "{} takes no operand", op);
        self.code.push(op.into())?;
        self.code.push(operand)
    }

    /// Emit `SET 1, JMPP addr`.
    pub fn push_jump(&mut self, addr: Address) -> Result<()> {
        self.push_operand(Opcode::Set, 1)?;
        self.push_operand(Opcode::Jmpp, word_for(addr)?)
    }

    /// Emit `JMPP` with a placeholder target.
    pub fn push_jmpp_later(&mut self) -> Result<Patch> {
        self.push_operand(Opcode::Jmpp, PLACEHOLDER)?;
        let addr = self.label() - 1;
        self.link.link_later(addr);
        Ok(Patch(addr))
    }

    /// Emit `SET 1, JMPP` with a placeholder target.
    pub fn push_jump_later(&mut self) -> Result<Patch> {
        self.push_operand(Opcode::Set, 1)?;
        self.push_jmpp_later()
    }

    pub fn patch(&mut self, patch: Patch, target: Address) -> Result<()> {
        let target = word_for(target)?;
        self.link.linked(patch.0)?;
        match self.code.get_mut(patch.0) {
            Some(word) if *word == PLACEHOLDER => {
                *word = target;
                Ok(())
            }
            _ => Err(error!(InternalError; format!("NO PLACEHOLDER AT {}", patch.0))),
        }
    }

    /// Verify every placeholder has been patched.
    pub fn finish(&self) -> Result<()> {
        self.link.link()
    }
}

fn word_for(addr: Address) -> Result<Word> {
    Word::try_from(addr).map_err(|_| error!(OutOfMemory; "PROGRAM TOO LARGE"))
}
