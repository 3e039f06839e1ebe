mod common;
use common::*;

#[test]
fn test_counter() {
    let line = "(int 0) (loop (ifn (le (getl 0) (int 9)) (brk)) (setl 0 (inc (getl 0))))";
    assert_eq!(run(line), int(10));
}

#[test]
fn test_loop_prints_each_pass() {
    let line = "(int 0) (loop (ifn (le (getl 0) (int 2)) (brk)) \
                (call `printInt (getl 0)) (setl 0 (inc (getl 0))))";
    assert_eq!(exec(line), ("0\n1\n2\n".to_string(), int(3)));
}

#[test]
fn test_factorial() {
    let line = "(int 1) (int 1) (loop (ifn (le (getl 1) (int 5)) (brk)) \
                (setl 0 (mul (getl 0) (getl 1))) (setl 1 (inc (getl 1))))";
    assert_eq!(run(line), int(120));
}

#[test]
fn test_nested_loops() {
    let line = "(int 0) (int 0) (loop (ifn (le (getl 1) (int 2)) (brk)) (int 0) \
                (loop (ifn (le (getl 2) (int 3)) (brk)) (setl 0 (inc (getl 0))) \
                (setl 2 (inc (getl 2)))) (setl 1 (inc (getl 1))))";
    assert_eq!(run(line), int(12));
}

#[test]
fn test_brk_with_values_on_stack() {
    let line = "(int 0) (loop (int 5) (int 6) (setl 0 (inc (getl 0))) \
                (ifn (le (getl 0) (int 2)) (brk)))";
    assert_eq!(run(line), int(3));
}

#[test]
fn test_brk_must_be_in_loop() {
    assert_eq!(error("(brk)"), "SYNTAX ERROR IN (1..4); BRK OUTSIDE LOOP");
    assert_eq!(
        error("(int 0) (ifn (le (int 1) (int 0)) (brk))"),
        "SYNTAX ERROR IN (35..38); BRK OUTSIDE LOOP"
    );
}

#[test]
fn test_loop_needs_a_body() {
    assert_eq!(error("(loop)"), "SYNTAX ERROR IN (5..6); EXPRESSION EXPECTED");
}
