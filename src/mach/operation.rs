use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Integer operations shared by instructions and routines

pub struct Operation {}

impl Operation {
    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_sub(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            _ => Err(error!(TypeMismatch; "INTEGERS EXPECTED")),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_mul(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            _ => Err(error!(TypeMismatch; "INTEGERS EXPECTED")),
        }
    }

    pub fn increment(val: Val) -> Result<Val> {
        match val {
            Val::Integer(n) => match n.checked_add(1) {
                Some(i) => Ok(Val::Integer(i)),
                None => Err(error!(Overflow)),
            },
            _ => Err(error!(TypeMismatch; "INTEGER EXPECTED")),
        }
    }

    pub fn less_equal(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => Ok(Val::from(l <= r)),
            _ => Err(error!(TypeMismatch; "INTEGERS EXPECTED")),
        }
    }
}
