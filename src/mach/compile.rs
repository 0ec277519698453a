use super::{Opcode, Program, Stack, Word, SCRATCH};
use crate::error;
use crate::lang::{Dialect, Error, Operator, TokenStream, Word as Keyword};
use std::num::IntErrorKind;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

const MAX_DEPTH: usize = 256;
const MAX_EXPRESSION_LEN: usize = 0xFFFF;

/// Compile a whole program unit.
///
/// Parsing and code generation happen in one pass. Forward jumps are
/// emitted with placeholder targets and patched once the target is known.
pub fn compile(tokens: TokenStream, dialect: Dialect) -> Result<Program> {
    let mut compiler = Compiler {
        tokens,
        dialect,
        prog: Program::new(),
        depth: 0,
    };
    while !compiler.tokens.is_empty() {
        compiler.statement()?;
    }
    compiler.prog.finish()?;
    debug!(
        words = compiler.prog.len(),
        variables = compiler.prog.link().len(),
        "compiled program"
    );
    Ok(compiler.prog)
}

enum Atom {
    Literal(Word),
    Var(String),
}

struct Compiler {
    tokens: TokenStream,
    dialect: Dialect,
    prog: Program,
    depth: usize,
}

impl Compiler {
    fn statement(&mut self) -> Result<()> {
        if self.depth >= MAX_DEPTH {
            return Err(error!(OutOfMemory, self.tokens.line(); "STATEMENTS NESTED TOO DEEPLY"));
        }
        self.depth += 1;
        let result = if self.tokens.try_get(self.dialect.word(Keyword::If)) {
            self.if_then()
        } else if self.tokens.try_get(self.dialect.word(Keyword::While)) {
            self.while_do()
        } else {
            self.assign_or_print()
        };
        self.depth -= 1;
        result
    }

    /// Statements up to `end`, which is consumed. `on_else` is called
    /// when the else keyword appears at this level.
    fn block<F>(&mut self, end: Keyword, mut on_else: F) -> Result<()>
    where
        F: FnMut(&mut Compiler, usize) -> Result<()>,
    {
        let end = self.dialect.word(end);
        let else_word = self.dialect.word(Keyword::Else);
        loop {
            if self.tokens.try_get(end) {
                return Ok(());
            }
            if self.tokens.is_empty() {
                return Err(error!(SyntaxError, self.tokens.line(); format!("EXPECTED {}", end)));
            }
            let line = self.tokens.line();
            if self.tokens.try_get(else_word) {
                on_else(self, line)?;
            } else {
                self.statement()?;
            }
        }
    }

    fn if_then(&mut self) -> Result<()> {
        self.expression()?;
        self.tokens.expect(self.dialect.word(Keyword::Then))?;
        let to_then = self.prog.push_jmpp_later()?;
        let to_else = self.prog.push_jump_later()?;
        let then_start = self.prog.label();
        let mut else_branch = None;
        self.block(Keyword::EndIf, |this, line| {
            if else_branch.is_some() {
                return Err(error!(SyntaxError, line; "DUPLICATE ELSE"));
            }
            let to_end = this.prog.push_jump_later()?;
            else_branch = Some((to_end, this.prog.label()));
            Ok(())
        })?;
        let end = self.prog.label();
        self.prog.patch(to_then, then_start)?;
        match else_branch {
            Some((to_end, else_start)) => {
                self.prog.patch(to_else, else_start)?;
                self.prog.patch(to_end, end)
            }
            None => self.prog.patch(to_else, end),
        }
    }

    fn while_do(&mut self) -> Result<()> {
        let start = self.prog.label();
        self.expression()?;
        self.tokens.expect(self.dialect.word(Keyword::Do))?;
        // No arithmetic on the condition: negating i32::MIN wraps.
        let to_body = self.prog.push_jmpp_later()?;
        let to_end = self.prog.push_jump_later()?;
        let body = self.prog.label();
        self.prog.patch(to_body, body)?;
        let else_word = self.dialect.word(Keyword::Else);
        self.block(Keyword::EndWhile, |_, line| {
            Err(error!(SyntaxError, line; format!("UNEXPECTED {}", else_word)))
        })?;
        self.prog.push_jump(start)?;
        let end = self.prog.label();
        self.prog.patch(to_end, end)
    }

    fn assign_or_print(&mut self) -> Result<()> {
        let token = self.tokens.next()?;
        if self.tokens.try_get(self.dialect.word(Keyword::Assign)) {
            if self.dialect.is_reserved(&token.text) || token.text.parse::<Word>().is_ok() {
                return Err(error!(SyntaxError, token.line; "EXPECTED VARIABLE"));
            }
            self.expression()?;
            let addr = self.prog.symbol(&token.text);
            self.prog.push_operand(Opcode::Save, addr)
        } else {
            self.tokens.unget(token);
            self.expression()?;
            self.prog.push(Opcode::Print)
        }
    }

    /// `atom [op expr]`, right associative with no precedence.
    ///
    /// The right side is computed first and swapped into `r1`, then the
    /// left atom is loaded into `r0`. Chains are gathered first and
    /// emitted from the right, which gives the same code as recursing.
    fn expression(&mut self) -> Result<()> {
        let mut chain: Stack<(Atom, Operator)> =
            Stack::new("EXPRESSION TOO COMPLEX", MAX_EXPRESSION_LEN);
        let last = loop {
            let atom = self.atom()?;
            match self.dialect.operator(self.tokens.peek()) {
                Some(op) => {
                    self.tokens.next()?;
                    chain.push((atom, op))?;
                }
                None => break atom,
            }
        };
        self.load(last)?;
        while let Some((atom, op)) = chain.pop() {
            self.prog.push(Opcode::Swap)?;
            self.load(atom)?;
            self.binary(op)?;
        }
        Ok(())
    }

    fn atom(&mut self) -> Result<Atom> {
        if self.tokens.is_empty() {
            return Err(error!(SyntaxError, self.tokens.line(); "EXPECTED EXPRESSION"));
        }
        let token = self.tokens.next()?;
        if self.dialect.is_reserved(&token.text) {
            return Err(error!(SyntaxError, token.line; "EXPECTED EXPRESSION"));
        }
        match token.text.parse::<Word>() {
            Ok(val) => Ok(Atom::Literal(val)),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(error!(Overflow, token.line; format!("LITERAL {}", token.text)))
                }
                _ => Ok(Atom::Var(token.text)),
            },
        }
    }

    fn load(&mut self, atom: Atom) -> Result<()> {
        match atom {
            Atom::Literal(val) => self.prog.push_operand(Opcode::Set, val),
            Atom::Var(name) => {
                let addr = self.prog.symbol(&name);
                self.prog.push_operand(Opcode::Load, addr)
            }
        }
    }

    /// Left operand in `r0`, right operand in `r1`.
    fn binary(&mut self, op: Operator) -> Result<()> {
        match op {
            Operator::Plus => {
                // left - (-right)
                self.prog.push_operand(Opcode::Save, SCRATCH)?;
                self.prog.push_operand(Opcode::Set, -1)?;
                self.prog.push(Opcode::Mul)?;
                self.prog.push(Opcode::Swap)?;
                self.prog.push_operand(Opcode::Load, SCRATCH)?;
                self.prog.push(Opcode::Sub)
            }
            Operator::Minus | Operator::Greater => self.prog.push(Opcode::Sub),
            Operator::Multiply => self.prog.push(Opcode::Mul),
            Operator::Less => {
                self.prog.push(Opcode::Swap)?;
                self.prog.push(Opcode::Sub)
            }
        }
    }
}
