use super::{Address, Opcode, Program, Word};
use crate::error;
use crate::lang::Error;
use std::convert::TryFrom;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// ## Virtual machine
///
/// Runs a linked `Program` against zeroed memory. Execution proceeds in
/// bursts: `execute` returns whenever there is output, the program ends,
/// an error occurs, or the cycle budget is spent.

#[derive(Debug)]
pub struct Runtime {
    program: Program,
    memory: Vec<Word>,
    pc: Address,
    r0: Word,
    r1: Word,
    cycles: u64,
    interrupted: bool,
}

#[derive(Debug, PartialEq)]
pub enum Event {
    Stopped,
    Running,
    Print(Word),
    Error(Error),
}

impl Runtime {
    pub fn new(program: Program) -> Runtime {
        let memory = vec![0; program.link().memory_size()];
        Runtime {
            program,
            memory,
            pc: 0,
            r0: 0,
            r1: 0,
            cycles: 0,
            interrupted: false,
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn memory(&self) -> &[Word] {
        &self.memory
    }

    pub fn registers(&self) -> (Address, Word, Word) {
        (self.pc, self.r0, self.r1)
    }

    /// Instructions executed so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn is_stopped(&self) -> bool {
        self.pc >= self.program.len()
    }

    /// Stop at the start of the next `execute`.
    pub fn interrupt(&mut self) {
        self.interrupted = true;
    }

    pub fn execute(&mut self, cycles: usize) -> Event {
        if self.cycles == 0 && self.pc == 0 {
            debug!(
                words = self.program.len(),
                memory = self.memory.len(),
                "program started"
            );
        }
        if self.interrupted {
            self.interrupted = false;
            self.halt();
            return Event::Error(error!(Break));
        }
        for _ in 0..cycles {
            match self.step() {
                Ok(None) => {}
                Ok(Some(Event::Stopped)) => {
                    debug!(cycles = self.cycles, "program stopped");
                    return Event::Stopped;
                }
                Ok(Some(event)) => return event,
                Err(error) => {
                    debug!(pc = self.pc, error = %error, "program failed");
                    self.halt();
                    return Event::Error(error);
                }
            }
        }
        Event::Running
    }

    fn halt(&mut self) {
        self.pc = self.program.len();
    }

    fn step(&mut self) -> Result<Option<Event>> {
        let addr = self.pc;
        let word = match self.program.get(addr) {
            Some(word) => word,
            None => return Ok(Some(Event::Stopped)),
        };
        self.pc += 1;
        self.cycles += 1;
        let op = Opcode::try_from(word).map_err(|word| {
            error!(InternalError; format!("INVALID INSTRUCTION {} AT {}", word, addr))
        })?;
        trace!(addr = addr, op = %op, r0 = self.r0, r1 = self.r1, "step");
        match op {
            Opcode::Set => self.r0 = self.operand()?,
            Opcode::Swap => std::mem::swap(&mut self.r0, &mut self.r1),
            Opcode::Sub => self.r0 = self.r0.wrapping_sub(self.r1),
            Opcode::Mul => self.r0 = self.r0.wrapping_mul(self.r1),
            Opcode::Load => {
                let cell = self.operand()?;
                let value = *self.cell(cell)?;
                self.r0 = value;
            }
            Opcode::Save => {
                let cell = self.operand()?;
                let r0 = self.r0;
                *self.cell(cell)? = r0;
            }
            Opcode::Jmpp => {
                let target = self.operand()?;
                if self.r0 > 0 {
                    self.pc = Address::try_from(target).map_err(|_| {
                        error!(InternalError; format!("INVALID JUMP {} AT {}", target, addr))
                    })?;
                }
            }
            Opcode::Print => return Ok(Some(Event::Print(self.r0))),
        }
        Ok(None)
    }

    fn operand(&mut self) -> Result<Word> {
        match self.program.get(self.pc) {
            Some(word) => {
                self.pc += 1;
                Ok(word)
            }
            None => Err(error!(InternalError; format!("MISSING OPERAND AT {}", self.pc))),
        }
    }

    fn cell(&mut self, addr: Word) -> Result<&mut Word> {
        if let Ok(index) = usize::try_from(addr) {
            if let Some(cell) = self.memory.get_mut(index) {
                return Ok(cell);
            }
        }
        Err(error!(InternalError; format!("INVALID ADDRESS {}", addr)))
    }
}
