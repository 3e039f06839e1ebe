mod common;
use common::*;

#[test]
fn test_ifn_runs_body_when_false() {
    assert_eq!(
        run("(int 0) (ifn (le (int 5) (int 3)) (setl 0 (int 1)))"),
        int(1)
    );
}

#[test]
fn test_ifn_skips_body_when_true() {
    assert_eq!(
        run("(int 0) (ifn (le (int 3) (int 5)) (setl 0 (int 1)))"),
        int(0)
    );
}

#[test]
fn test_ifn_drops_body_values() {
    let line = "(int 0) (ifn (le (int 9) (int 1)) (int 7) (int 8)) (setl 0 (inc (getl 0)))";
    assert_eq!(run(line), int(1));
    let line = "(int 0) (ifn (le (int 1) (int 9)) (int 7) (int 8)) (setl 0 (inc (getl 0)))";
    assert_eq!(run(line), int(1));
}

#[test]
fn test_ifn_with_empty_body() {
    assert_eq!(run("(int 4) (ifn (le (int 9) (int 1)))"), int(4));
}

#[test]
fn test_nested_ifn() {
    let line = "(int 0) (ifn (le (int 2) (int 1)) (ifn (le (int 3) (int 1)) (setl 0 (int 2))))";
    assert_eq!(run(line), int(2));
    let line = "(int 0) (ifn (le (int 2) (int 1)) (ifn (le (int 1) (int 3)) (setl 0 (int 2))))";
    assert_eq!(run(line), int(0));
}

#[test]
fn test_ifn_leaves_no_value() {
    assert_eq!(
        error("(inc (ifn (le (int 1) (int 2)) (int 3)))"),
        "SYNTAX ERROR IN (5..39); VALUE EXPECTED"
    );
}
