use super::{Address, Listing, Opcode, Word};

/// ## Compiled bytecode
///
/// Word 0 is the number of frame cells the code needs. Instructions start
/// at word 1.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    words: Vec<Word>,
}

impl Program {
    /// Wraps raw words without checking them. The interpreter faults on
    /// anything malformed.
    pub fn from_words(words: Vec<Word>) -> Program {
        Program { words }
    }
    pub fn words(&self) -> &[Word] {
        &self.words
    }
    pub fn len(&self) -> usize {
        self.words.len()
    }
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
    pub fn frame_size(&self) -> usize {
        self.words
            .first()
            .map(|&w| if w < 0 { 0 } else { w as usize })
            .unwrap_or(0)
    }
    pub fn word(&self, addr: Address) -> Option<Word> {
        self.words.get(addr).copied()
    }
    pub fn listing(&self) -> Listing<'_> {
        Listing::new(self)
    }
    pub fn opcode(&self, addr: Address) -> Option<Opcode> {
        self.word(addr).and_then(Opcode::from_word)
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "FRAME {}", self.frame_size())?;
        for line in self.listing() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
