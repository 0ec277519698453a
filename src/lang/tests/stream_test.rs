use crate::lang::*;

#[test]
fn test_peek_does_not_consume() {
    let mut s = lex("a b");
    assert_eq!(s.peek(), "a");
    assert_eq!(s.peek(), "a");
    assert_eq!(s.next().unwrap().text, "a");
    assert_eq!(s.peek(), "b");
}

#[test]
fn test_peek_past_end_is_empty() {
    let mut s = lex("a");
    s.next().unwrap();
    assert!(s.is_empty());
    assert_eq!(s.peek(), "");
}

#[test]
fn test_next_past_end_fails() {
    let mut s = lex("a\nb");
    s.next().unwrap();
    s.next().unwrap();
    let e = s.next().unwrap_err();
    assert_eq!(e.code(), ErrorCode::SyntaxError);
    assert_eq!(e.line(), Some(2));
    assert_eq!(e.to_string(), "SYNTAX ERROR IN LINE 2; UNEXPECTED END OF PROGRAM");
}

#[test]
fn test_try_get() {
    let mut s = lex("AWOO 5");
    assert!(!s.try_get("5"));
    assert!(s.try_get("AWOO"));
    assert!(s.try_get("5"));
    assert!(!s.try_get(""));
    assert!(s.is_empty());
}

#[test]
fn test_unget_restores_order() {
    let mut s = lex("x y");
    let x = s.next().unwrap();
    assert_eq!(s.peek(), "y");
    s.unget(x);
    assert_eq!(s.len(), 2);
    assert_eq!(s.next().unwrap().text, "x");
    assert_eq!(s.next().unwrap().text, "y");
}

#[test]
fn test_expect() {
    let mut s = lex("VUH\nBOW");
    assert!(s.expect("VUH").is_ok());
    let e = s.expect("VUH").unwrap_err();
    assert_eq!(e.to_string(), "SYNTAX ERROR IN LINE 2; EXPECTED VUH");
    let e = s.expect("ARRUF").unwrap_err();
    assert_eq!(e.to_string(), "SYNTAX ERROR IN LINE 2; EXPECTED ARRUF");
}

#[test]
fn test_dialect_spelling() {
    assert_eq!(Dialect::Doggo.word(Word::If), "RUF?");
    assert_eq!(Dialect::English.word(Word::EndWhile), "ENDWHILE");
    assert_eq!(Dialect::Doggo.operator("YIP"), Some(Operator::Less));
    assert_eq!(Dialect::English.operator("YIP"), None);
    assert!(Dialect::Doggo.is_reserved("BORF"));
    assert!(!Dialect::Doggo.is_reserved("borf"));
    assert_eq!("English".parse::<Dialect>(), Ok(Dialect::English));
    assert!("klingon".parse::<Dialect>().is_err());
    assert_eq!(Dialect::default().to_string(), "doggo");
}
