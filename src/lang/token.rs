/// ## Lexical tokens of Rap assembly

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    Open,
    Close,
    Opcode(Keyword),
    Whitespace,
    Colon,
    Int(i32),
    /// `$` followed by hex digits; the compiler parses the digits.
    HexInt,
    Float,
    HexFloat,
    /// `` ` `` followed by a name.
    Symbol,
    Get,
    Set,
    End,
}

impl Token {
    /// The integer a token carries: the literal's value, or the keyword's
    /// table index.
    pub fn value(&self) -> Option<i32> {
        match self {
            Token::Int(n) => Some(*n),
            Token::Opcode(k) => Some(k.index() as i32),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Open => write!(f, "("),
            Close => write!(f, ")"),
            Opcode(k) => write!(f, "{}", k),
            Whitespace => write!(f, " "),
            Colon => write!(f, ":"),
            Int(n) => write!(f, "{}", n),
            HexInt => write!(f, "$HEX"),
            Float => write!(f, "FLOAT"),
            HexFloat => write!(f, "$FLOAT"),
            Symbol => write!(f, "`SYMBOL"),
            Get => write!(f, "?"),
            Set => write!(f, "!"),
            End => write!(f, "END"),
        }
    }
}

/// ## Opcode keywords
///
/// The discriminant of each keyword is its index in [`Keyword::ALL`], which
/// is also the order the lexer searches.

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Int,
    T,
    F,
    Z,
    Flt,
    Dbl,
    Move,
    Swap,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    Inc,
    Dec,
    Not,
    And,
    Or,
    Xor,
    Shl,
    Shr,
    Rol,
    Ror,
    Call,
    Ret,
    If,
    Ifn,
    Ifeq,
    Ifne,
    Iflt,
    Ifgt,
    Ifle,
    Ifge,
    Loop,
    Brk,
    Cont,
    Getl,
    Setl,
    Le,
}

pub const KEYWORD_COUNT: usize = 39;

const _: () = assert!(Keyword::ALL.len() == KEYWORD_COUNT);
const _: () = assert!(Keyword::Le as usize == KEYWORD_COUNT - 1);

impl Keyword {
    pub const ALL: [Keyword; KEYWORD_COUNT] = {
        use Keyword::*;
        [
            Int, T, F, Z, Flt, Dbl, //
            Move, Swap, //
            Neg, Add, Sub, Mul, Div, Inc, Dec, //
            Not, And, Or, Xor, Shl, Shr, Rol, Ror, //
            Call, Ret, //
            If, Ifn, Ifeq, Ifne, Iflt, Ifgt, Ifle, Ifge, //
            Loop, Brk, Cont, //
            Getl, Setl, //
            Le,
        ]
    };

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Keyword> {
        Keyword::ALL.get(index).copied()
    }

    /// Exact, case-sensitive lookup.
    pub fn from_string(s: &str) -> Option<Keyword> {
        Keyword::ALL.iter().copied().find(|k| k.as_str() == s)
    }

    pub fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Int => "int",
            T => "t",
            F => "f",
            Z => "z",
            Flt => "flt",
            Dbl => "dbl",
            Move => "move",
            Swap => "swap",
            Neg => "neg",
            Add => "add",
            Sub => "sub",
            Mul => "mul",
            Div => "div",
            Inc => "inc",
            Dec => "dec",
            Not => "not",
            And => "and",
            Or => "or",
            Xor => "xor",
            Shl => "shl",
            Shr => "shr",
            Rol => "rol",
            Ror => "ror",
            Call => "call",
            Ret => "ret",
            If => "if",
            Ifn => "ifn",
            Ifeq => "ifeq",
            Ifne => "ifne",
            Iflt => "iflt",
            Ifgt => "ifgt",
            Ifle => "ifle",
            Ifge => "ifge",
            Loop => "loop",
            Brk => "brk",
            Cont => "cont",
            Getl => "getl",
            Setl => "setl",
            Le => "le",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
