use super::*;
use crate::mach::{Opcode, WORD_BYTES};

#[test]
fn test_subtract_order() {
    assert_eq!(words("(sub (int 7) (int 2))"), vec![2, 0, 7, 0, 2, 1, 8]);
    assert_eq!(run("(sub (int 7) (int 2))"), Ok(Val::Integer(5)));
}

#[test]
fn test_routine_push_is_one_word() {
    assert_eq!(
        words("(call `printInt (int 42))"),
        vec![2, 6, 0, 42, 7, 2, 8]
    );
    assert_eq!(words("`subtractInt"), vec![1, 5, 8]);
}

#[test]
fn test_ifn_skips_body_when_true() {
    assert_eq!(
        words("(ifn (le (int 5) (int 3)) (int 7))"),
        vec![2, 0, 5, 0, 3, 4, 12, 24, 0, 7, 9, 1, 8]
    );
}

#[test]
fn test_jump_operands_are_bytes() {
    let program = compile("(loop (brk) (brk))").unwrap();
    assert_eq!(
        program.words(),
        &[0, 10, 32, 10, 24, 9, 0, 10, -24, 8]
    );
    for ins in program.listing() {
        if let Some(disp) = ins.operand.filter(|_| ins.opcode.map_or(false, Opcode::is_jump)) {
            assert_eq!(disp % WORD_BYTES as i32, 0);
        }
    }
}

#[test]
fn test_break_sites_share_a_target() {
    let program = compile("(int 0) (loop (ifn (le (getl 0) (int 3)) (brk)) (brk))").unwrap();
    let targets: Vec<usize> = program
        .listing()
        .filter(|ins| ins.opcode == Some(Opcode::Jump))
        .filter(|ins| ins.operand.map_or(false, |d| d > 0))
        .filter_map(|ins| ins.target())
        .collect();
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0], targets[1]);
    assert_eq!(program.opcode(targets[0]), Some(Opcode::Return));
}

#[test]
fn test_nested_loops_patch_independently() {
    assert_eq!(
        words("(int 0) (loop (loop (brk)) (brk))"),
        vec![1, 0, 0, 10, 24, 9, 0, 10, -16, 10, 24, 9, 0, 10, -40, 8]
    );
    assert_eq!(run("(int 0) (loop (loop (brk)) (brk))"), Ok(Val::Integer(0)));
}

#[test]
fn test_brk_drops_loop_values() {
    assert_eq!(
        words("(loop (int 1) (brk))"),
        vec![1, 0, 1, 9, 1, 10, 24, 9, 1, 10, -32, 8]
    );
}

#[test]
fn test_counting_loop() {
    let source = "(int 0) (loop (setl 0 (inc (getl 0))) (ifn (le (getl 0) (int 4)) (brk)))";
    assert_eq!(
        words(source),
        vec![3, 0, 0, 13, 0, 3, 14, 0, 13, 0, 0, 4, 4, 12, 24, 10, 32, 9, 0, 9, 0, 10, -72, 8]
    );
    assert_eq!(run(source), Ok(Val::Integer(5)));
}

#[test]
fn test_brk_outside_loop() {
    let e = compile("(brk)").unwrap_err();
    assert_eq!(e.to_string(), "SYNTAX ERROR IN (1..4); BRK OUTSIDE LOOP");
    assert!(compile("(loop (brk)) (brk)").is_err());
}
