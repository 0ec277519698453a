use super::{Address, Word};
use crate::error;
use crate::lang::Error;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Memory address shared by the addition expansion. Never a variable.
pub const SCRATCH: Word = 0;

/// ## Variable memory and jump bookkeeping
///
/// Variables get addresses from 1 upward in the order they are first
/// referenced. Every jump emitted with a placeholder target is tracked
/// until it is patched.

#[derive(Debug, Default)]
pub struct Link {
    symbols: HashMap<Rc<str>, Word>,
    names: Vec<Rc<str>>,
    unlinked: BTreeSet<Address>,
}

impl Link {
    pub fn new() -> Link {
        Link::default()
    }

    pub fn symbol(&mut self, name: &str) -> Word {
        if let Some(addr) = self.symbols.get(name) {
            return *addr;
        }
        let name: Rc<str> = name.into();
        self.names.push(name.clone());
        let addr = self.names.len() as Word;
        self.symbols.insert(name, addr);
        addr
    }

    pub fn name_for(&self, addr: Word) -> Option<&str> {
        if addr < 1 {
            return None;
        }
        self.names.get(addr as usize - 1).map(|name| &**name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Memory words needed to run: every variable plus the scratch slot.
    pub fn memory_size(&self) -> usize {
        self.names.len() + 1
    }

    pub fn link_later(&mut self, addr: Address) {
        let inserted = self.unlinked.insert(addr);
        debug_assert!(inserted);
    }

    pub fn linked(&mut self, addr: Address) -> Result<()> {
        if self.unlinked.remove(&addr) {
            Ok(())
        } else {
            Err(error!(InternalError; format!("JUMP AT {} ALREADY LINKED", addr)))
        }
    }

    pub fn link(&self) -> Result<()> {
        match self.unlinked.iter().next() {
            None => Ok(()),
            Some(addr) => Err(error!(InternalError; format!("UNLINKED JUMP AT {}", addr))),
        }
    }
}
