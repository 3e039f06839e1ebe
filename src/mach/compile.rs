use super::{Address, Opcode, Program, Routine, Word, MAX_FRAME, WORD_BYTES};
use crate::error;
use crate::lang::{next_token, Column, Error, Keyword, Lexeme, Token};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// Deepest expression nesting the compiler will recurse into.
const MAX_DEPTH: usize = 256;

/// Compile one line of Rap assembly.
///
/// The line is a sequence of expressions. A return instruction is appended
/// after the last one, and the header word records how many frame cells the
/// code touches.
pub fn compile(source: &str) -> Result<Program> {
    Compiler::compile(source)
}

struct Compiler<'a> {
    source: &'a str,
    cursor: usize,
    token: Token,
    token_len: usize,
    sp: usize,
    max_sp: usize,
    code: Vec<Word>,
    breaks: Vec<Address>,
    loop_sp: Option<usize>,
    depth: usize,
}

impl<'a> Compiler<'a> {
    fn compile(source: &'a str) -> Result<Program> {
        let mut this = Compiler {
            source,
            cursor: 0,
            token: Token::End,
            token_len: 0,
            sp: 0,
            max_sp: 0,
            code: vec![0],
            breaks: vec![],
            loop_sp: None,
            depth: 0,
        };
        this.start()?;
        while this.token != Token::Close && this.token != Token::End {
            this.expression()?;
        }
        if this.token != Token::End {
            return Err(error!(SyntaxError, ..&this.column(); "UNBALANCED PARENTHESES"));
        }
        this.emit(Opcode::Return, &[])?;
        debug_assert!(this.breaks.is_empty());
        if this.max_sp > MAX_FRAME {
            return Err(error!(Overflow; "FRAME TOO LARGE"));
        }
        let frame = this.word(this.max_sp)?;
        this.code[0] = frame;
        Ok(Program::from_words(this.code))
    }

    // *** Token stream

    fn column(&self) -> Column {
        self.cursor..self.cursor + self.token_len
    }

    fn read(&mut self) -> Result<()> {
        let Lexeme { token, len } = next_token(self.source, self.cursor)?;
        self.token = token;
        self.token_len = len;
        Ok(())
    }

    fn start(&mut self) -> Result<()> {
        self.read()?;
        self.skip_spaces()
    }

    fn next(&mut self) -> Result<()> {
        self.cursor += self.token_len;
        self.read()
    }

    fn skip_spaces(&mut self) -> Result<()> {
        while self.token == Token::Whitespace {
            self.next()?;
        }
        Ok(())
    }

    /// Consume the current token, which must be `expected`, and any spaces
    /// after it.
    fn skip(&mut self, expected: Token, message: &'static str) -> Result<()> {
        if self.token != expected {
            return Err(error!(SyntaxError, ..&self.column(); message));
        }
        self.next()?;
        self.skip_spaces()
    }

    fn skip_opcode(&mut self, keyword: Keyword) -> Result<()> {
        self.skip(Token::Opcode(keyword), "OPCODE EXPECTED")
    }

    fn integer(&mut self) -> Result<i32> {
        let col = self.column();
        let value = match self.token {
            Token::Int(n) => n,
            Token::HexInt => {
                let digits = &self.source[col.start + 1..col.end];
                match u32::from_str_radix(digits, 16) {
                    Ok(n) => n as i32,
                    Err(_) => return Err(error!(Overflow, ..&col; "HEX LITERAL TOO LARGE")),
                }
            }
            Token::Float | Token::HexFloat => {
                return Err(error!(NotImplemented, ..&col; "FLOATING POINT LITERAL"))
            }
            _ => return Err(error!(SyntaxError, ..&col; "INTEGER EXPECTED")),
        };
        self.next()?;
        self.skip_spaces()?;
        Ok(value)
    }

    fn offset(&mut self) -> Result<(Column, usize)> {
        let col = self.column();
        match self.token {
            Token::Int(n) => {
                self.next()?;
                self.skip_spaces()?;
                Ok((col, n as usize))
            }
            _ => Err(error!(SyntaxError, ..&col; "LOCAL OFFSET EXPECTED")),
        }
    }

    // *** Emitting

    fn word(&self, n: usize) -> Result<Word> {
        match Word::try_from(n) {
            Ok(w) => Ok(w),
            Err(_) => Err(error!(Overflow, ..&self.column(); "OPERAND TOO LARGE")),
        }
    }

    fn pc(&self) -> Address {
        self.code.len()
    }

    fn emit(&mut self, opcode: Opcode, operands: &[Word]) -> Result<()> {
        debug_assert_eq!(opcode.operands(), operands.len());
        self.code.push(opcode.word());
        self.code.extend_from_slice(operands);
        Ok(())
    }

    fn grow(&mut self) {
        self.sp += 1;
        self.max_sp = self.max_sp.max(self.sp);
    }

    fn shrink(&mut self, n: usize) -> Result<()> {
        match self.sp.checked_sub(n) {
            Some(sp) => {
                self.sp = sp;
                Ok(())
            }
            None => Err(error!(InternalError, ..&self.column(); "STACK TRACKING UNDERFLOW")),
        }
    }

    /// Values pushed since the stack was `sp` high.
    fn pushed_since(&self, sp: usize) -> Result<usize> {
        match self.sp.checked_sub(sp) {
            Some(n) => Ok(n),
            None => Err(error!(InternalError, ..&self.column(); "STACK TRACKING UNDERFLOW")),
        }
    }

    fn displacement(&self, from: Address, to: Address) -> Result<Word> {
        let words = to as i64 - from as i64;
        match Word::try_from(words * WORD_BYTES as i64) {
            Ok(w) => Ok(w),
            Err(_) => Err(error!(Overflow, ..&self.column(); "JUMP TOO FAR")),
        }
    }

    fn emit_jump(&mut self, opcode: Opcode, target: Address) -> Result<()> {
        let disp = self.displacement(self.pc(), target)?;
        self.emit(opcode, &[disp])
    }

    /// Fill in the operand of the jump at `site`, which must still hold its
    /// zero placeholder.
    fn patch(&mut self, site: Address, opcode: Opcode, target: Address) -> Result<()> {
        let disp = self.displacement(site, target)?;
        match self.code.get(site..site + 2) {
            Some([tag, 0]) if *tag == opcode.word() => {
                self.code[site + 1] = disp;
                Ok(())
            }
            _ => Err(error!(InternalError, ..&self.column(); "PATCH SITE MISMATCH")),
        }
    }

    fn emit_drop(&mut self, n: usize) -> Result<()> {
        let w = self.word(n)?;
        self.emit(Opcode::Drop, &[w])
    }

    // *** Grammar

    fn expression(&mut self) -> Result<()> {
        if self.depth >= MAX_DEPTH {
            return Err(error!(SyntaxError, ..&self.column(); "EXPRESSION TOO COMPLEX"));
        }
        self.depth += 1;
        let result = self.nested_expression();
        self.depth -= 1;
        result
    }

    fn nested_expression(&mut self) -> Result<()> {
        let col = self.column();
        match self.token {
            Token::Open => {
                self.skip(Token::Open, "( EXPECTED")?;
                let keyword = match self.token {
                    Token::Opcode(keyword) => keyword,
                    _ => return Err(error!(SyntaxError, ..&self.column(); "OPCODE EXPECTED")),
                };
                self.dispatch(keyword)?;
                match self.token {
                    Token::Close => self.skip(Token::Close, ") EXPECTED"),
                    Token::End => Err(error!(SyntaxError, ..&self.column(); ") EXPECTED")),
                    _ => Err(error!(SyntaxError, ..&self.column(); "TOO MANY ARGUMENTS")),
                }
            }
            Token::Symbol => self.symbol(),
            Token::Opcode(_) | Token::Colon | Token::Get | Token::Set => {
                Err(error!(NotImplemented, ..&col; "SHORTHAND NOTATION"))
            }
            _ => Err(error!(SyntaxError, ..&col; "EXPRESSION EXPECTED")),
        }
    }

    /// An expression that leaves exactly one value behind.
    fn operand(&mut self) -> Result<()> {
        let start = self.cursor;
        let sp = self.sp;
        self.expression()?;
        if self.sp != sp + 1 {
            let col = start..self.cursor;
            return Err(error!(SyntaxError, ..&col; "VALUE EXPECTED"));
        }
        Ok(())
    }

    fn dispatch(&mut self, keyword: Keyword) -> Result<()> {
        use Keyword::*;
        match keyword {
            Int => self.r#int(),
            Sub => self.binary(keyword, Opcode::SubtractInt),
            Mul => self.binary(keyword, Opcode::MultiplyInt),
            Le => self.binary(keyword, Opcode::LessEqualInt),
            Inc => self.r#inc(),
            Call => self.r#call(),
            Ifn => self.r#ifn(),
            Loop => self.r#loop(),
            Brk => self.r#brk(),
            Getl => self.r#getl(),
            Setl => self.r#setl(),
            T | F | Z | Flt | Dbl | Move | Swap | Neg | Add | Div | Dec | Not | And | Or | Xor
            | Shl | Shr | Rol | Ror | Ret | If | Ifeq | Ifne | Iflt | Ifgt | Ifle | Ifge | Cont => {
                Err(error!(NotImplemented, ..&self.column()))
            }
        }
    }

    fn symbol(&mut self) -> Result<()> {
        let col = self.column();
        let name = &self.source[col.start + 1..col.end];
        let routine = match Routine::resolve(name) {
            Some(routine) => routine,
            None => return Err(error!(UndefinedSymbol, ..&col)),
        };
        self.emit(routine.opcode(), &[])?;
        self.grow();
        self.skip(Token::Symbol, "SYMBOL EXPECTED")
    }

    fn r#int(&mut self) -> Result<()> {
        self.skip_opcode(Keyword::Int)?;
        let value = self.integer()?;
        self.emit(Opcode::Int, &[value])?;
        self.grow();
        Ok(())
    }

    fn binary(&mut self, keyword: Keyword, opcode: Opcode) -> Result<()> {
        self.skip_opcode(keyword)?;
        self.operand()?;
        self.operand()?;
        self.emit(opcode, &[])?;
        self.shrink(1)
    }

    fn r#inc(&mut self) -> Result<()> {
        self.skip_opcode(Keyword::Inc)?;
        self.operand()?;
        self.emit(Opcode::IncrementInt, &[])
    }

    fn r#getl(&mut self) -> Result<()> {
        self.skip_opcode(Keyword::Getl)?;
        let (col, offset) = self.offset()?;
        if offset >= self.sp {
            return Err(error!(OutOfRange, ..&col; "LOCAL NOT YET DEFINED"));
        }
        let w = self.word(offset)?;
        self.emit(Opcode::GetLocal, &[w])?;
        self.grow();
        Ok(())
    }

    fn r#setl(&mut self) -> Result<()> {
        self.skip_opcode(Keyword::Setl)?;
        let (col, offset) = self.offset()?;
        self.operand()?;
        self.shrink(1)?;
        if offset >= self.sp {
            return Err(error!(OutOfRange, ..&col; "LOCAL NOT YET DEFINED"));
        }
        let w = self.word(offset)?;
        self.emit(Opcode::SetLocal, &[w])
    }

    fn r#call(&mut self) -> Result<()> {
        self.skip_opcode(Keyword::Call)?;
        let mut argc = 0;
        loop {
            self.operand()?;
            argc += 1;
            if self.token == Token::Close {
                break;
            }
        }
        let w = self.word(argc)?;
        self.emit(Opcode::Call, &[w])?;
        self.shrink(argc - 1)
    }

    fn r#ifn(&mut self) -> Result<()> {
        self.skip_opcode(Keyword::Ifn)?;
        self.operand()?;
        let site = self.pc();
        self.emit(Opcode::JumpT, &[0])?;
        self.shrink(1)?;
        let sp = self.sp;
        while self.token != Token::Close {
            self.expression()?;
        }
        let n = self.pushed_since(sp)?;
        self.emit_drop(n)?;
        self.shrink(n)?;
        let end = self.pc();
        self.patch(site, Opcode::JumpT, end)
    }

    fn r#loop(&mut self) -> Result<()> {
        self.skip_opcode(Keyword::Loop)?;
        let breaks = self.breaks.len();
        let sp = self.sp;
        let outer_sp = self.loop_sp.replace(sp);
        let start = self.pc();
        loop {
            self.expression()?;
            if self.token == Token::Close {
                break;
            }
        }
        let n = self.pushed_since(sp)?;
        self.emit_drop(n)?;
        self.emit_jump(Opcode::Jump, start)?;
        self.shrink(n)?;
        let end = self.pc();
        while self.breaks.len() > breaks {
            if let Some(site) = self.breaks.pop() {
                self.patch(site, Opcode::Jump, end)?;
            }
        }
        self.loop_sp = outer_sp;
        Ok(())
    }

    fn r#brk(&mut self) -> Result<()> {
        let col = self.column();
        let loop_sp = match self.loop_sp {
            Some(sp) => sp,
            None => return Err(error!(SyntaxError, ..&col; "BRK OUTSIDE LOOP")),
        };
        self.skip_opcode(Keyword::Brk)?;
        let n = self.pushed_since(loop_sp)?;
        if n > 0 {
            self.emit_drop(n)?;
        }
        self.breaks.push(self.pc());
        self.emit(Opcode::Jump, &[0])
    }
}
