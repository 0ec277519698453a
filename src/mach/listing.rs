use super::{Opcode, Program, SCRATCH};
use std::convert::TryFrom;

/// ## Disassembly of a compiled program
///
/// One instruction per line: address, mnemonic, operand, and the
/// variable name for memory operands.

#[derive(Debug, Clone, Copy)]
pub struct Listing<'a> {
    program: &'a Program,
}

impl<'a> Listing<'a> {
    pub fn new(program: &'a Program) -> Listing<'a> {
        Listing { program }
    }
}

impl<'a> std::fmt::Display for Listing<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code = self.program.code();
        let mut addr = 0;
        while addr < code.len() {
            write!(f, "{:04}  ", addr)?;
            let op = match Opcode::try_from(code[addr]) {
                Ok(op) => op,
                Err(word) => {
                    writeln!(f, "??? {}", word)?;
                    addr += 1;
                    continue;
                }
            };
            addr += 1;
            if !op.has_operand() {
                writeln!(f, "{}", op)?;
                continue;
            }
            let operand = match code.get(addr) {
                Some(operand) => *operand,
                None => {
                    writeln!(f, "{} ?", op)?;
                    continue;
                }
            };
            addr += 1;
            match op {
                Opcode::Load | Opcode::Save if operand == SCRATCH => {
                    writeln!(f, "{:<5} {} (scratch)", op, operand)?
                }
                Opcode::Load | Opcode::Save => match self.program.link().name_for(operand) {
                    Some(name) => writeln!(f, "{:<5} {} ({})", op, operand, name)?,
                    None => writeln!(f, "{:<5} {}", op, operand)?,
                },
                _ => writeln!(f, "{:<5} {}", op, operand)?,
            }
        }
        Ok(())
    }
}
