use super::Column;

type Address = usize;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    column: Column,
    address: Option<Address>,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
}

/// Which half of the toolchain reported an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Detected while lexing or compiling; nothing was executed.
    Compile,
    /// Detected while executing; the invocation was abandoned.
    Runtime,
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            column: 0..0,
            address: None,
            message: "",
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub fn kind(&self) -> ErrorKind {
        if self.address.is_some() {
            ErrorKind::Runtime
        } else {
            ErrorKind::Compile
        }
    }

    pub fn is_fault(&self) -> bool {
        self.kind() == ErrorKind::Runtime
    }

    pub fn in_column(&self, column: &Column) -> Error {
        debug_assert_eq!(self.column, 0..0);
        Error {
            code: self.code,
            column: column.clone(),
            address: self.address,
            message: self.message,
        }
    }

    /// Faults are located by the word address of the instruction that raised
    /// them. An address already present is kept.
    pub fn in_address(&self, address: Address) -> Error {
        Error {
            code: self.code,
            column: self.column.clone(),
            address: self.address.or(Some(address)),
            message: self.message,
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            column: self.column.clone(),
            address: self.address,
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError = 2,
    IllegalCharacter = 3,
    UnknownOpcode = 4,
    NotImplemented = 5,
    Overflow = 6,
    UndefinedSymbol = 8,
    OutOfRange = 9,
    TypeMismatch = 13,
    StackUnderflow = 20,
    StackOverflow = 21,
    IllegalAddress = 22,
    IllegalInstruction = 23,
    RoutineFailed = 24,
    InternalError = 51,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "SYNTAX ERROR",
            3 => "ILLEGAL CHARACTER",
            4 => "UNKNOWN OPCODE",
            5 => "NOT IMPLEMENTED",
            6 => "OVERFLOW",
            8 => "UNDEFINED SYMBOL",
            9 => "OUT OF RANGE",
            13 => "TYPE MISMATCH",
            20 => "STACK UNDERFLOW",
            21 => "STACK OVERFLOW",
            22 => "ILLEGAL ADDRESS",
            23 => "ILLEGAL INSTRUCTION",
            24 => "ROUTINE FAILED",
            51 => "INTERNAL ERROR",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(address) = self.address {
            suffix.push_str(&format!(" AT {}", address));
        } else if (0..0) != self.column {
            suffix.push_str(&format!(" IN ({}..{})", self.column.start, self.column.end));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_compile_error() {
        let e = error!(SyntaxError, ..&(3..5); "OPCODE EXPECTED");
        assert_eq!(e.to_string(), "SYNTAX ERROR IN (3..5); OPCODE EXPECTED");
        assert_eq!(e.kind(), ErrorKind::Compile);
    }

    #[test]
    fn test_display_runtime_fault() {
        let e = error!(TypeMismatch; "CALL TARGET IS NOT A ROUTINE").in_address(7);
        assert_eq!(e.to_string(), "TYPE MISMATCH AT 7; CALL TARGET IS NOT A ROUTINE");
        assert!(e.is_fault());
        assert_eq!(e.in_address(9).address(), Some(7));
    }

    #[test]
    fn test_display_bare_code() {
        assert_eq!(error!(Overflow).to_string(), "OVERFLOW");
    }
}
