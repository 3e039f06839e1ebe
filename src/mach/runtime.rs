use super::{
    Address, Listing, Opcode, Operation, Program, Routine, Stack, Val, Word, MAX_FRAME, WORD_BYTES,
};
use crate::error;
use crate::lang::Error;
use std::io::Write;

type Result<T> = std::result::Result<T, Error>;

/// ## Virtual machine
///
/// Executes one [`Program`] per call. Output from native routines, and the
/// instruction trace when enabled, goes to the writer the runtime owns.

pub struct Runtime<W: Write = std::io::Stdout> {
    out: W,
    tron: bool,
}

enum Flow {
    Next(Address),
    Return,
}

impl Default for Runtime<std::io::Stdout> {
    fn default() -> Self {
        Runtime::new(std::io::stdout())
    }
}

impl<W: Write> Runtime<W> {
    pub fn new(out: W) -> Runtime<W> {
        Runtime { out, tron: false }
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Trace every executed instruction to the output.
    pub fn set_trace(&mut self, tron: bool) {
        self.tron = tron;
    }

    /// Run `program` and return what it left in frame cell 0.
    pub fn run(&mut self, program: &Program) -> Result<Val> {
        let mut argv = [Val::Absent];
        self.execute(program, &mut argv)?;
        Ok(argv[0])
    }

    /// Run `program` with the native calling convention: the result is
    /// written to `argv[0]`.
    pub fn execute(&mut self, program: &Program, argv: &mut [Val]) -> Result<()> {
        if argv.is_empty() {
            return Err(error!(InternalError; "NO RETURN SLOT").in_address(0));
        }
        if program.frame_size() > MAX_FRAME {
            return Err(error!(StackOverflow; "FRAME TOO LARGE").in_address(0));
        }
        let mut frame: Stack<Val> = Stack::new(program.frame_size(), "FRAME TOO SMALL");
        let mut pc: Address = 1;
        loop {
            if self.tron {
                if let Err(e) = self.trace(program, pc) {
                    return Err(e.in_address(pc));
                }
            }
            match self.step(program, &mut frame, pc) {
                Ok(Flow::Next(next)) => pc = next,
                Ok(Flow::Return) => {
                    argv[0] = frame.first();
                    return Ok(());
                }
                Err(e) => return Err(e.in_address(pc)),
            }
        }
    }

    fn trace(&mut self, program: &Program, pc: Address) -> Result<()> {
        let written = match Listing::at(program, pc).next() {
            Some(ins) => writeln!(self.out, "[{}] {}", pc, ins.mnemonic()),
            None => writeln!(self.out, "[{}] ???", pc),
        };
        match written {
            Ok(()) => Ok(()),
            Err(_) => Err(error!(InternalError; "TRACE OUTPUT FAILED")),
        }
    }

    fn operand(program: &Program, pc: Address) -> Result<Word> {
        match program.word(pc + 1) {
            Some(w) => Ok(w),
            None => Err(error!(IllegalInstruction; "MISSING OPERAND")),
        }
    }

    fn count(program: &Program, pc: Address) -> Result<usize> {
        let w = Self::operand(program, pc)?;
        if w < 0 {
            return Err(error!(IllegalInstruction; "NEGATIVE OPERAND"));
        }
        Ok(w as usize)
    }

    fn jump(program: &Program, pc: Address) -> Result<Address> {
        let disp = Self::operand(program, pc)?;
        if disp % WORD_BYTES as Word != 0 {
            return Err(error!(IllegalInstruction; "MISALIGNED JUMP"));
        }
        let target = pc as i64 + i64::from(disp / WORD_BYTES as Word);
        if target < 1 || target as usize >= program.len() {
            return Err(error!(IllegalInstruction; "JUMP OUT OF PROGRAM"));
        }
        Ok(target as Address)
    }

    fn step(&mut self, program: &Program, frame: &mut Stack<Val>, pc: Address) -> Result<Flow> {
        let opcode = match program.word(pc) {
            None => return Err(error!(IllegalInstruction; "RAN OFF THE END")),
            Some(tag) => match Opcode::from_word(tag) {
                Some(opcode) => opcode,
                None => return Err(error!(IllegalInstruction; "UNKNOWN TAG")),
            },
        };
        let next = pc + opcode.len();
        match opcode {
            Opcode::Int => {
                let n = Self::operand(program, pc)?;
                frame.push(Val::Integer(n))?;
            }
            Opcode::SubtractInt => {
                let rhs = frame.pop()?;
                let lhs = frame.last_mut()?;
                *lhs = Operation::subtract(*lhs, rhs)?;
            }
            Opcode::MultiplyInt => {
                let rhs = frame.pop()?;
                let lhs = frame.last_mut()?;
                *lhs = Operation::multiply(*lhs, rhs)?;
            }
            Opcode::IncrementInt => {
                let top = frame.last_mut()?;
                *top = Operation::increment(*top)?;
            }
            Opcode::LessEqualInt => {
                let rhs = frame.pop()?;
                let lhs = frame.last_mut()?;
                *lhs = Operation::less_equal(*lhs, rhs)?;
            }
            Opcode::FunctionSubtractInt | Opcode::FunctionPrintInt => {
                match Routine::for_opcode(opcode) {
                    Some(routine) => frame.push(Val::Routine(routine))?,
                    None => return Err(error!(InternalError; "NO ROUTINE FOR TAG")),
                }
            }
            Opcode::Call => {
                let argc = Self::count(program, pc)?;
                if argc == 0 {
                    return Err(error!(IllegalInstruction; "CALL WITHOUT ROUTINE"));
                }
                let argv = frame.window_mut(argc)?;
                let routine = match argv[0] {
                    Val::Routine(routine) => routine,
                    _ => return Err(error!(TypeMismatch; "CALL TARGET IS NOT A ROUTINE")),
                };
                routine.call(&mut self.out, argc, argv)?;
                frame.drop_n(argc - 1)?;
            }
            Opcode::Return => return Ok(Flow::Return),
            Opcode::Drop => {
                let n = Self::count(program, pc)?;
                frame.drop_n(n)?;
            }
            Opcode::Jump => return Ok(Flow::Next(Self::jump(program, pc)?)),
            Opcode::JumpF | Opcode::JumpT => {
                let taken = match frame.pop()? {
                    Val::False => opcode == Opcode::JumpF,
                    Val::True => opcode == Opcode::JumpT,
                    _ => false,
                };
                if taken {
                    return Ok(Flow::Next(Self::jump(program, pc)?));
                }
                Self::operand(program, pc)?;
            }
            Opcode::GetLocal => {
                let offset = Self::count(program, pc)?;
                let val = frame.get(offset)?;
                frame.push(val)?;
            }
            Opcode::SetLocal => {
                let offset = Self::count(program, pc)?;
                let val = frame.pop()?;
                frame.set(offset, val)?;
            }
        }
        Ok(Flow::Next(next))
    }
}
