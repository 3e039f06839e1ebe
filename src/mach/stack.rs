use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited frame
///
/// A fixed number of cells and a cursor. Cells below the cursor are live and
/// may be addressed by offset; cells at or above it keep whatever was last
/// popped off them.

pub struct Stack<T> {
    overflow_message: &'static str,
    cells: Vec<T>,
    top: usize,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", &self.cells[..self.top])
    }
}

impl<T: Clone + Default> Stack<T> {
    pub fn new(size: usize, overflow_message: &'static str) -> Stack<T> {
        Stack {
            overflow_message,
            cells: vec![T::default(); size],
            top: 0,
        }
    }
    fn underflow_error(&self) -> Error {
        error!(StackUnderflow)
    }
    fn range_error(&self) -> Error {
        error!(IllegalAddress; "LOCAL OFFSET OUT OF RANGE")
    }
    pub fn len(&self) -> usize {
        self.top
    }
    pub fn is_empty(&self) -> bool {
        self.top == 0
    }
    /// The first cell, live or not.
    pub fn first(&self) -> T {
        self.cells.first().cloned().unwrap_or_default()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        match self.cells.get_mut(self.top) {
            Some(cell) => {
                *cell = val;
                self.top += 1;
                Ok(())
            }
            None => Err(error!(StackOverflow; self.overflow_message)),
        }
    }
    pub fn pop(&mut self) -> Result<T> {
        if self.top == 0 {
            return Err(self.underflow_error());
        }
        self.top -= 1;
        Ok(self.cells[self.top].clone())
    }
    pub fn drop_n(&mut self, len: usize) -> Result<()> {
        if len > self.top {
            Err(self.underflow_error())
        } else {
            self.top -= len;
            Ok(())
        }
    }
    pub fn last_mut(&mut self) -> Result<&mut T> {
        if self.top == 0 {
            return Err(self.underflow_error());
        }
        Ok(&mut self.cells[self.top - 1])
    }
    pub fn get(&self, offset: usize) -> Result<T> {
        if offset < self.top {
            Ok(self.cells[offset].clone())
        } else {
            Err(self.range_error())
        }
    }
    pub fn set(&mut self, offset: usize, val: T) -> Result<()> {
        if offset < self.top {
            self.cells[offset] = val;
            Ok(())
        } else {
            Err(self.range_error())
        }
    }
    /// The top `len` live cells, bottom first.
    pub fn window_mut(&mut self, len: usize) -> Result<&mut [T]> {
        if len > self.top {
            return Err(self.underflow_error());
        }
        let base = self.top - len;
        Ok(&mut self.cells[base..self.top])
    }
}
