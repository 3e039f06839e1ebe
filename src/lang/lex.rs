use super::{token::*, Column, Error};

type Result<T> = std::result::Result<T, Error>;

/// One token plus the number of source bytes it covers.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Lexeme {
    pub token: Token,
    pub len: usize,
}

/// Classify the token starting at `cursor`. The caller advances the cursor
/// by `len` once it has consumed the token. The end of `source` and a NUL
/// byte both read as end of input.
pub fn next_token(source: &str, cursor: usize) -> Result<Lexeme> {
    RapLexer {
        src: source.as_bytes(),
        start: cursor,
    }
    .lexeme()
}

/// Every token of `source` up to, but not including, end of input.
pub fn lex(source: &str) -> Result<Vec<(Token, Column)>> {
    let mut tokens = vec![];
    let mut cursor = 0;
    loop {
        let Lexeme { token, len } = next_token(source, cursor)?;
        if token == Token::End {
            return Ok(tokens);
        }
        tokens.push((token, cursor..cursor + len));
        cursor += len;
    }
}

// Locale independent, ASCII only.
fn is_lower(c: u8) -> bool {
    c.is_ascii_lowercase()
}

fn is_upper(c: u8) -> bool {
    c.is_ascii_uppercase()
}

fn is_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

fn is_hex_digit(c: u8) -> bool {
    is_digit(c) || (b'a'..=b'f').contains(&c)
}

fn is_symbol_char(c: u8) -> bool {
    is_lower(c) || is_upper(c) || is_digit(c) || c == b'_'
}

struct RapLexer<'a> {
    src: &'a [u8],
    start: usize,
}

impl<'a> RapLexer<'a> {
    /// Byte `n` past the token start; NUL past the end of the line.
    fn peek(&self, n: usize) -> u8 {
        self.src.get(self.start + n).copied().unwrap_or(0)
    }

    fn run(&self, from: usize, pred: fn(u8) -> bool) -> usize {
        let mut n = from;
        while pred(self.peek(n)) {
            n += 1;
        }
        n
    }

    fn fail(&self, len: usize, message: &'static str) -> Error {
        let col = self.start..self.start + len.max(1);
        error!(IllegalCharacter, ..&col; message)
    }

    fn ok(&self, token: Token, len: usize) -> Result<Lexeme> {
        Ok(Lexeme { token, len })
    }

    fn lexeme(&self) -> Result<Lexeme> {
        match self.peek(0) {
            b'a'..=b'z' => self.opcode(),
            b'0'..=b'9' => self.number(),
            b'$' => self.hex_number(),
            b'`' => self.symbol(),
            b'(' => self.ok(Token::Open, 1),
            b')' => self.ok(Token::Close, 1),
            b':' => self.ok(Token::Colon, 1),
            b'?' => self.ok(Token::Get, 1),
            b'!' => self.ok(Token::Set, 1),
            b' ' | b'\t' | b'\r' | b'\n' => self.ok(Token::Whitespace, 1),
            0 => self.ok(Token::End, 0),
            _ => Err(self.fail(1, "UNEXPECTED CHARACTER")),
        }
    }

    fn opcode(&self) -> Result<Lexeme> {
        let n = self.run(1, is_lower);
        let next = self.peek(n);
        if is_upper(next) || is_digit(next) {
            return Err(self.fail(n + 1, "MALFORMED OPCODE"));
        }
        let word = &self.src[self.start..self.start + n];
        let keyword = std::str::from_utf8(word)
            .ok()
            .and_then(Keyword::from_string);
        match keyword {
            Some(keyword) => self.ok(Token::Opcode(keyword), n),
            None => {
                let col = self.start..self.start + n;
                Err(error!(UnknownOpcode, ..&col))
            }
        }
    }

    fn number(&self) -> Result<Lexeme> {
        let n = self.run(1, is_digit);
        if self.peek(n) == b'.' && is_digit(self.peek(n + 1)) {
            let n = self.run(n + 1, is_digit);
            if is_symbol_char(self.peek(n)) {
                return Err(self.fail(n + 1, "MALFORMED NUMBER"));
            }
            return self.ok(Token::Float, n);
        }
        if is_symbol_char(self.peek(n)) {
            return Err(self.fail(n + 1, "MALFORMED NUMBER"));
        }
        let mut value: i32 = 0;
        for i in 0..n {
            let digit = i32::from(self.peek(i) - b'0');
            value = match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
                Some(v) => v,
                None => {
                    let col = self.start..self.start + n;
                    return Err(error!(Overflow, ..&col; "INTEGER LITERAL TOO LARGE"));
                }
            };
        }
        self.ok(Token::Int(value), n)
    }

    fn hex_number(&self) -> Result<Lexeme> {
        let mut n = self.run(1, is_hex_digit);
        if n == 1 {
            return Err(self.fail(2, "HEX DIGITS EXPECTED"));
        }
        let mut token = Token::HexInt;
        if self.peek(n) == b'.' && is_hex_digit(self.peek(n + 1)) {
            n = self.run(n + 1, is_hex_digit);
            token = Token::HexFloat;
        }
        if is_symbol_char(self.peek(n)) {
            return Err(self.fail(n + 1, "MALFORMED HEX NUMBER"));
        }
        self.ok(token, n)
    }

    fn symbol(&self) -> Result<Lexeme> {
        let n = self.run(1, is_symbol_char);
        if n == 1 {
            return Err(self.fail(1, "SYMBOL NAME EXPECTED"));
        }
        self.ok(Token::Symbol, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first(s: &str) -> Result<Lexeme> {
        next_token(s, 0)
    }

    #[test]
    fn test_single_characters() {
        assert_eq!(first("(").unwrap(), Lexeme { token: Token::Open, len: 1 });
        assert_eq!(first("?x").unwrap().token, Token::Get);
        assert_eq!(first("!").unwrap().token, Token::Set);
        assert_eq!(first("\t").unwrap().token, Token::Whitespace);
        assert_eq!(first("").unwrap(), Lexeme { token: Token::End, len: 0 });
        assert_eq!(first("\0rest").unwrap().token, Token::End);
    }

    #[test]
    fn test_cursor_is_absolute() {
        let e = next_token("(int #)", 5).unwrap_err();
        assert_eq!(e.column(), 5..6);
    }

    #[test]
    fn test_opcode_followed_by_digit() {
        assert!(first("int2").is_err());
        assert!(first("intX").is_err());
        assert_eq!(first("int)").unwrap().len, 3);
    }
}
