mod common;
use common::*;

#[test]
fn test_sum() {
    let source = r#"
        lassie AWOO 5
        luna AWOO 6
        bailey AWOO lassie WOOF luna
        bailey
    "#;
    assert_eq!(exec_doggo(source), "11\n");
}

#[test]
fn test_if_greater() {
    let source = r#"
        roi AWOO 5
        RUF? roi YAP 2 VUH
            roi AWOO roi ARF 3
        ROWH
            roi AWOO roi WOOF 100
        ARRUF
        roi
    "#;
    assert_eq!(exec_doggo(source), "15\n");
}

#[test]
fn test_if_less() {
    let source = r#"
        roi AWOO 5
        RUF? roi YIP 2 VUH
            roi AWOO roi ARF 3
        ROWH
            roi AWOO roi WOOF 100
        ARRUF
        roi
    "#;
    assert_eq!(exec_doggo(source), "105\n");
}

#[test]
fn test_while() {
    let source = r#"
        quark AWOO 6 BARK 2
        gromit AWOO 5
        milo AWOO 0
        GRRR milo YIP gromit BOW
            quark AWOO quark WOOF 3
            milo AWOO milo WOOF 1
        BORF
        quark
    "#;
    assert_eq!(exec_doggo(source), "19\n");
}

#[test]
fn test_very_important_code() {
    let source = r#"
        samantha AWOO 1
        hooch AWOO 500
        einstein AWOO 10
        fuji AWOO 0
        GRRR fuji YIP hooch BOW
            samantha AWOO samantha WOOF 3
            RUF? samantha YAP 100 VUH
              samantha AWOO samantha BARK 1
            ROWH
              einstein AWOO einstein WOOF 1
              samantha AWOO samantha ARF einstein
            ARRUF
            fuji AWOO fuji WOOF 1
        BORF
        GRRR fuji YAP 0 BOW
            samantha AWOO samantha WOOF 375
            fuji AWOO fuji BARK 3
        BORF
        samantha
    "#;
    assert_eq!(exec_doggo(source), "64185\n");
}

#[test]
fn test_single_expression() {
    assert_eq!(exec_doggo("3 WOOF 2"), "5\n");
}

#[test]
fn test_english_words_are_variables() {
    assert_eq!(exec_doggo("IF AWOO 4 IF"), "4\n");
}
