use super::Error;
use crate::error;
use std::collections::VecDeque;

type Result<T> = std::result::Result<T, Error>;

/// A whitespace-delimited word of source text and the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub line: usize,
}

impl Token {
    pub fn new<T: Into<String>>(text: T, line: usize) -> Token {
        Token {
            text: text.into(),
            line,
        }
    }
}

/// ## Forward-only token stream
///
/// Peeking past the end yields the empty string. A consumed token
/// can be pushed back to undo a speculative read.

#[derive(Debug, Default)]
pub struct TokenStream {
    tokens: VecDeque<Token>,
    last_line: usize,
}

impl TokenStream {
    pub fn new<T: IntoIterator<Item = Token>>(tokens: T) -> TokenStream {
        TokenStream {
            tokens: tokens.into_iter().collect(),
            last_line: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Line of the next token, or of the last consumed one at end of input.
    pub fn line(&self) -> usize {
        match self.tokens.front() {
            Some(token) => token.line,
            None => self.last_line,
        }
    }

    pub fn peek(&self) -> &str {
        match self.tokens.front() {
            Some(token) => &token.text,
            None => "",
        }
    }

    pub fn next(&mut self) -> Result<Token> {
        match self.tokens.pop_front() {
            Some(token) => {
                self.last_line = token.line;
                Ok(token)
            }
            None => Err(error!(SyntaxError, self.last_line; "UNEXPECTED END OF PROGRAM")),
        }
    }

    pub fn try_get(&mut self, s: &str) -> bool {
        if self.is_empty() || self.peek() != s {
            return false;
        }
        if let Some(token) = self.tokens.pop_front() {
            self.last_line = token.line;
        }
        true
    }

    pub fn unget(&mut self, token: Token) {
        self.tokens.push_front(token)
    }

    pub fn expect(&mut self, s: &str) -> Result<()> {
        if let Some(token) = self.tokens.pop_front() {
            self.last_line = token.line;
            if token.text == s {
                return Ok(());
            }
        }
        Err(error!(SyntaxError, self.last_line; format!("EXPECTED {}", s)))
    }
}
