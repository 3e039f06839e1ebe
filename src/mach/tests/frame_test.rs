use super::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

enum Expr {
    Int(i32),
    Inc(Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
}

impl Expr {
    fn random(rng: &mut StdRng, depth: usize) -> Expr {
        if depth == 0 {
            return Expr::Int(rng.gen_range(0..10));
        }
        match rng.gen_range(0..4) {
            0 => Expr::Int(rng.gen_range(0..10)),
            1 => Expr::Inc(Box::new(Expr::random(rng, depth - 1))),
            2 => Expr::Sub(
                Box::new(Expr::random(rng, depth - 1)),
                Box::new(Expr::random(rng, depth - 1)),
            ),
            _ => Expr::Mul(
                Box::new(Expr::random(rng, depth - 1)),
                Box::new(Expr::random(rng, depth - 1)),
            ),
        }
    }

    fn source(&self) -> String {
        match self {
            Expr::Int(n) => format!("(int {})", n),
            Expr::Inc(a) => format!("(inc {})", a.source()),
            Expr::Sub(a, b) => format!("(sub {} {})", a.source(), b.source()),
            Expr::Mul(a, b) => format!("(mul {} {})", a.source(), b.source()),
        }
    }

    /// Highest stack the expression reaches above its base.
    fn peak(&self) -> usize {
        match self {
            Expr::Int(_) => 1,
            Expr::Inc(a) => a.peak(),
            Expr::Sub(a, b) | Expr::Mul(a, b) => a.peak().max(1 + b.peak()),
        }
    }

    fn eval(&self) -> Option<i32> {
        match self {
            Expr::Int(n) => Some(*n),
            Expr::Inc(a) => a.eval()?.checked_add(1),
            Expr::Sub(a, b) => a.eval()?.checked_sub(b.eval()?),
            Expr::Mul(a, b) => a.eval()?.checked_mul(b.eval()?),
        }
    }
}

#[test]
fn test_frame_size_matches_reference_stack() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let count = rng.gen_range(1..4);
        let exprs: Vec<Expr> = (0..count).map(|_| Expr::random(&mut rng, 5)).collect();
        let source: Vec<String> = exprs.iter().map(Expr::source).collect();
        let source = source.join(" ");
        let peak = exprs
            .iter()
            .enumerate()
            .map(|(base, e)| base + e.peak())
            .max()
            .unwrap_or(0);
        let program = compile(&source).unwrap();
        assert_eq!(program.frame_size(), peak, "{}", source);
        let values: Option<Vec<i32>> = exprs.iter().map(Expr::eval).collect();
        match values {
            Some(values) => assert_eq!(run(&source), Ok(Val::Integer(values[0])), "{}", source),
            None => assert!(run(&source).unwrap_err().is_fault(), "{}", source),
        }
    }
}

#[test]
fn test_ifn_leaves_height_unchanged() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let a = rng.gen_range(0..6);
        let b = rng.gen_range(0..6);
        let source = format!(
            "(int 0) (ifn (le (int {}) (int {})) (setl 0 (int 1)) (int 9) (int 9)) (getl 0)",
            a, b
        );
        let expected = if a <= b { 0 } else { 1 };
        assert_eq!(run(&source), Ok(Val::Integer(expected)), "{}", source);
    }
}
