mod common;
use common::*;
use doggo::lang::{lex, Dialect};
use doggo::mach::{compile, Runtime};

#[test]
fn test_literals_and_variables() {
    assert_eq!(exec("5"), "5\n");
    assert_eq!(exec("-17"), "-17\n");
    assert_eq!(exec("x ASSIGN 5 x"), "5\n");
    assert_eq!(exec("never_assigned"), "0\n");
}

#[test]
fn test_addition() {
    for &(a, b) in &[(2, 3), (-2, 3), (2, -3), (-2, -3), (0, 7), (7, 0), (0, 0)] {
        assert_eq!(exec(&format!("{} + {}", a, b)), format!("{}\n", a + b));
    }
}

#[test]
fn test_subtraction() {
    for &(a, b) in &[(2, 3), (-2, 3), (2, -3), (-2, -3), (0, 7), (7, 0), (0, 0)] {
        assert_eq!(exec(&format!("{} - {}", a, b)), format!("{}\n", a - b));
    }
}

#[test]
fn test_multiplication() {
    for &(a, b) in &[(2, 3), (-2, 3), (2, -3), (-2, -3), (0, 7), (7, 0), (1, -1)] {
        assert_eq!(exec(&format!("{} * {}", a, b)), format!("{}\n", a * b));
    }
}

#[test]
fn test_comparisons_return_difference() {
    assert_eq!(exec("3 < 5"), "2\n");
    assert_eq!(exec("5 < 3"), "-2\n");
    assert_eq!(exec("5 > 3"), "2\n");
    assert_eq!(exec("3 > 5"), "-2\n");
    assert_eq!(exec("4 < 4"), "0\n");
}

#[test]
fn test_right_associative() {
    assert_eq!(exec("2 - 3 - 4"), "3\n");
    assert_eq!(exec("2 * 3 + 4"), "14\n");
    assert_eq!(exec("10 - 2 * 3"), "4\n");
    assert_eq!(exec("1 < 2 + 3"), "4\n");
}

#[test]
fn test_nested_addition_scratch() {
    assert_eq!(exec("1 + 2 + 3"), "6\n");
    assert_eq!(exec("a ASSIGN 10 b ASSIGN 20 c ASSIGN 30 a + b + c"), "60\n");
    assert_eq!(exec("1 + 2 + 3 + 4 + 5 + 6 + 7 + 8 + 9 + 10"), "55\n");
    assert_eq!(exec("x ASSIGN 4 x + x * x + x"), "36\n");
    assert_eq!(exec("-1 + -2 + -3"), "-6\n");
}

#[test]
fn test_long_chain() {
    let source = format!("0{}", " + 1".repeat(10000));
    let program = compile(lex(&source), Dialect::English).unwrap();
    assert_eq!(exec_n(&mut Runtime::new(program), 1_000_000), "10000\n");
}

#[test]
fn test_variables_share_nothing_with_scratch() {
    assert_eq!(exec("x ASSIGN 7 y ASSIGN 1 + 2 x y"), "7\n3\n");
}

#[test]
fn test_deterministic() {
    let source = "1 + 2 3 * 4 IF 1 THEN 9 ENDIF";
    let first = exec(source);
    assert_eq!(first, "3\n12\n9\n");
    assert_eq!(exec(source), first);
}
