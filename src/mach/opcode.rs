use super::Word;

/// ## Virtual machine instruction set
///
/// The Rap virtual machine has no registers. Every operation is performed
/// on the frame, which doubles as the local variables and the stack.
///
/// For example: `(sub (int 7) (int 2))` compiles to
/// `[INT 7, INT 2, SUBINT, RETURN]`
///
/// Each instruction is a tag word followed by a fixed number of operand
/// words. Jump operands are byte displacements from the jump's own tag.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    // *** Stack manipulation
    /// Push the operand as an integer.
    Int = 0,
    /// Push the `subtractInt` routine.
    FunctionSubtractInt = 5,
    /// Push the `printInt` routine.
    FunctionPrintInt = 6,
    /// Retreat the stack by the operand without looking at the values.
    Drop = 9,
    /// Push a copy of the frame cell named by the operand.
    GetLocal = 13,
    /// Pop into the frame cell named by the operand.
    SetLocal = 14,

    // *** Arithmetic, result replaces the left operand
    SubtractInt = 1,
    MultiplyInt = 2,
    IncrementInt = 3,
    LessEqualInt = 4,

    // *** Branch control
    /// Call the routine found `operand` cells below the top; the cells
    /// above it are the arguments.
    Call = 7,
    /// Copy frame cell 0 to the caller and stop.
    Return = 8,
    Jump = 10,
    /// Pop, and branch if the value was `False`.
    JumpF = 11,
    /// Pop, and branch if the value was `True`.
    JumpT = 12,
}

impl Opcode {
    pub fn word(self) -> Word {
        self as Word
    }

    pub fn from_word(word: Word) -> Option<Opcode> {
        use Opcode::*;
        Some(match word {
            0 => Int,
            1 => SubtractInt,
            2 => MultiplyInt,
            3 => IncrementInt,
            4 => LessEqualInt,
            5 => FunctionSubtractInt,
            6 => FunctionPrintInt,
            7 => Call,
            8 => Return,
            9 => Drop,
            10 => Jump,
            11 => JumpF,
            12 => JumpT,
            13 => GetLocal,
            14 => SetLocal,
            _ => return None,
        })
    }

    /// Operand words following the tag.
    pub fn operands(self) -> usize {
        use Opcode::*;
        match self {
            Int | Call | Drop | Jump | JumpF | JumpT | GetLocal | SetLocal => 1,
            SubtractInt | MultiplyInt | IncrementInt | LessEqualInt | FunctionSubtractInt
            | FunctionPrintInt | Return => 0,
        }
    }

    /// Tag plus operands.
    pub fn len(self) -> usize {
        1 + self.operands()
    }

    pub fn is_jump(self) -> bool {
        matches!(self, Opcode::Jump | Opcode::JumpF | Opcode::JumpT)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Opcode::*;
        match self {
            Int => write!(f, "INT"),
            SubtractInt => write!(f, "SUBINT"),
            MultiplyInt => write!(f, "MULINT"),
            IncrementInt => write!(f, "INCINT"),
            LessEqualInt => write!(f, "LEINT"),
            FunctionSubtractInt => write!(f, "FNSUBINT"),
            FunctionPrintInt => write!(f, "FNPRINTINT"),
            Call => write!(f, "CALL"),
            Return => write!(f, "RETURN"),
            Drop => write!(f, "DROP"),
            Jump => write!(f, "JUMP"),
            JumpF => write!(f, "JUMPF"),
            JumpT => write!(f, "JUMPT"),
            GetLocal => write!(f, "GETL"),
            SetLocal => write!(f, "SETL"),
        }
    }
}
