#![deny(warnings)]

mod error;
mod linked;
mod resizable;

pub use error::StackError;
pub use linked::LinkedStack;
pub use resizable::{ResizableStack, DEFAULT_CAPACITY, MAX_CAPACITY};

/// Last-in first-out container.
///
/// `pop` and `peek` only ever observe the most recently pushed element that
/// hasn't been popped yet. Touching an empty stack is an error, never a default.
pub trait Stack<T> {
    fn push(&mut self, item: T) -> Result<(), StackError>;
    fn pop(&mut self) -> Result<T, StackError>;
    fn peek(&self) -> Result<&T, StackError>;
    fn clear(&mut self) -> Result<(), StackError>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
