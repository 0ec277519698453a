use super::stream::{Token, TokenStream};

/// Split source text into whitespace-delimited tokens, keeping line numbers.
pub fn lex(s: &str) -> TokenStream {
    TokenStream::new(
        s.lines()
            .enumerate()
            .flat_map(|(index, line)| line.split_whitespace().map(move |w| Token::new(w, index + 1))),
    )
}
