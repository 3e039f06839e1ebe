use super::Routine;

/// ## Runtime values
///
/// `False` and `True` are tags of their own, never integers.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Val {
    Absent,
    False,
    True,
    Integer(i32),
    Routine(&'static Routine),
}

impl Default for Val {
    fn default() -> Val {
        Val::Absent
    }
}

impl From<bool> for Val {
    fn from(b: bool) -> Val {
        if b {
            Val::True
        } else {
            Val::False
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Val::*;
        match self {
            Absent => write!(f, "none"),
            False => write!(f, "false"),
            True => write!(f, "true"),
            Integer(n) => write!(f, "{}", n),
            Routine(r) => write!(f, "`{}", r.name()),
        }
    }
}
