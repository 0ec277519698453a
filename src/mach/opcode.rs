use super::Word;
use std::convert::TryFrom;

/// ## Virtual machine instruction set
///
/// The doggo virtual machine has two general registers, `r0` and `r1`.
/// Four instructions carry one inline operand word; the rest carry none.
///
/// For example: `x AWOO 3 ARF y` compiles to
/// `[LOAD y, SWAP, SET 3, MUL, SAVE x]`
///
/// There is no ADD and no unconditional jump. Addition is negation by
/// `MUL` followed by `SUB`; an unconditional jump is `SET 1, JMPP`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Opcode {
    /// `r0 = operand`
    Set = 0,
    /// Exchange `r0` and `r1`.
    Swap = 1,
    /// `r0 = r0 - r1`
    Sub = 2,
    /// `r0 = r0 * r1`
    Mul = 3,
    /// `r0 = memory[operand]`
    Load = 4,
    /// `memory[operand] = r0`
    Save = 5,
    /// Branch to operand if `r0 > 0`.
    Jmpp = 6,
    /// Write `r0` to the output.
    Print = 7,
}

impl Opcode {
    pub fn has_operand(self) -> bool {
        use Opcode::*;
        match self {
            Set | Load | Save | Jmpp => true,
            Swap | Sub | Mul | Print => false,
        }
    }
}

impl From<Opcode> for Word {
    fn from(op: Opcode) -> Word {
        op as Word
    }
}

impl TryFrom<Word> for Opcode {
    type Error = Word;

    fn try_from(word: Word) -> Result<Opcode, Word> {
        use Opcode::*;
        Ok(match word {
            0 => Set,
            1 => Swap,
            2 => Sub,
            3 => Mul,
            4 => Load,
            5 => Save,
            6 => Jmpp,
            7 => Print,
            _ => return Err(word),
        })
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        f.pad(match self {
            Set => "SET",
            Swap => "SWAP",
            Sub => "SUB",
            Mul => "MUL",
            Load => "LOAD",
            Save => "SAVE",
            Jmpp => "JMPP",
            Print => "PRINT",
        })
    }
}
