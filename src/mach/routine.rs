use super::{Opcode, Operation, Val};
use crate::error;
use crate::lang::Error;
use std::io::Write;

type Result<T> = std::result::Result<T, Error>;

/// Calling convention for native routines.
///
/// `argv[0]` holds the routine itself on entry and must hold the result on
/// success. `argv[1..argc]` are the arguments; checking them is the
/// routine's job.
pub type NativeFn = fn(out: &mut dyn Write, argc: usize, argv: &mut [Val]) -> Result<()>;

/// ## Native routines known to the compiler
///
/// Each routine has its own push instruction, so a symbol reference costs a
/// single tag word.

pub struct Routine {
    name: &'static str,
    opcode: Opcode,
    func: NativeFn,
}

static ROUTINES: [Routine; 2] = [
    Routine {
        name: "subtractInt",
        opcode: Opcode::FunctionSubtractInt,
        func: subtract_int,
    },
    Routine {
        name: "printInt",
        opcode: Opcode::FunctionPrintInt,
        func: print_int,
    },
];

impl Routine {
    /// Exact name lookup. A prefix of a routine name does not resolve.
    pub fn resolve(name: &str) -> Option<&'static Routine> {
        ROUTINES.iter().find(|r| r.name == name)
    }

    pub fn for_opcode(opcode: Opcode) -> Option<&'static Routine> {
        ROUTINES.iter().find(|r| r.opcode == opcode)
    }

    pub fn all() -> &'static [Routine] {
        &ROUTINES
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    pub fn call(&self, out: &mut dyn Write, argc: usize, argv: &mut [Val]) -> Result<()> {
        if argc == 0 || argc > argv.len() {
            return Err(error!(InternalError; "BAD ARGUMENT WINDOW"));
        }
        (self.func)(out, argc, &mut argv[..argc])
    }
}

impl PartialEq for Routine {
    fn eq(&self, other: &Routine) -> bool {
        self.name == other.name
    }
}

impl std::fmt::Debug for Routine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Routine({})", self.name)
    }
}

fn subtract_int(_out: &mut dyn Write, argc: usize, argv: &mut [Val]) -> Result<()> {
    if argc != 3 {
        return Err(error!(RoutineFailed; "subtractInt TAKES 2 ARGUMENTS"));
    }
    argv[0] = Operation::subtract(argv[1], argv[2])?;
    Ok(())
}

fn print_int(out: &mut dyn Write, argc: usize, argv: &mut [Val]) -> Result<()> {
    if argc != 2 {
        return Err(error!(RoutineFailed; "printInt TAKES 1 ARGUMENT"));
    }
    let n = match argv[1] {
        Val::Integer(n) => n,
        _ => return Err(error!(TypeMismatch; "printInt EXPECTS AN INTEGER")),
    };
    let s = format!("{}\n", n);
    if out.write_all(s.as_bytes()).is_err() {
        return Err(error!(RoutineFailed; "printInt FAILED TO WRITE"));
    }
    argv[0] = Val::Integer(s.len() as i32);
    Ok(())
}
