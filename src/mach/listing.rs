use super::{Address, Opcode, Program, Word, WORD_BYTES};

/// ## Disassembly of a [`Program`]
///
/// Walks the instruction words after the header. Unknown tags are listed as
/// a single word so a corrupt program can still be inspected.

#[derive(Debug, Clone)]
pub struct Listing<'a> {
    program: &'a Program,
    addr: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub addr: Address,
    pub opcode: Option<Opcode>,
    pub tag: Word,
    pub operand: Option<Word>,
}

impl<'a> Listing<'a> {
    pub fn new(program: &'a Program) -> Listing<'a> {
        Listing { program, addr: 1 }
    }

    /// Start decoding at `addr` instead of the first instruction.
    pub fn at(program: &'a Program, addr: Address) -> Listing<'a> {
        Listing { program, addr }
    }
}

impl<'a> Iterator for Listing<'a> {
    type Item = Instruction;

    fn next(&mut self) -> Option<Self::Item> {
        let addr = self.addr;
        let tag = self.program.word(addr)?;
        let opcode = Opcode::from_word(tag);
        let operand = match opcode {
            Some(op) if op.operands() > 0 => self.program.word(addr + 1),
            _ => None,
        };
        self.addr += opcode.map(Opcode::len).unwrap_or(1);
        Some(Instruction {
            addr,
            opcode,
            tag,
            operand,
        })
    }
}

impl Instruction {
    /// Absolute word address a jump lands on.
    pub fn target(&self) -> Option<Address> {
        match (self.opcode, self.operand) {
            (Some(op), Some(disp)) if op.is_jump() => {
                let words = disp as isize / WORD_BYTES as isize;
                let target = self.addr as isize + words;
                if target < 0 {
                    None
                } else {
                    Some(target as Address)
                }
            }
            _ => None,
        }
    }
}

impl Instruction {
    /// The instruction without its address.
    pub fn mnemonic(&self) -> String {
        match self.opcode {
            None => format!("??? {}", self.tag),
            Some(op) => match (self.operand, self.target()) {
                (Some(n), Some(target)) => format!("{} {} ; -> {:04}", op, n, target),
                (Some(n), None) => format!("{} {}", op, n),
                (None, _) if op.operands() > 0 => format!("{} ???", op),
                (None, _) => op.to_string(),
            },
        }
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:04}  {}", self.addr, self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_shows_jump_targets() {
        let program = Program::from_words(vec![1, 0, 3, 10, -8, 8]);
        let lines: Vec<String> = program.listing().map(|i| i.to_string()).collect();
        assert_eq!(
            lines,
            vec!["0001  INT 3", "0003  JUMP -8 ; -> 0001", "0005  RETURN"]
        );
    }

    #[test]
    fn test_listing_unknown_tag() {
        let program = Program::from_words(vec![0, 99, 8]);
        let lines: Vec<String> = program.listing().map(|i| i.to_string()).collect();
        assert_eq!(lines, vec!["0001  ??? 99", "0002  RETURN"]);
    }
}
