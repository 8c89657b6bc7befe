use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("stack is empty")]
    EmptyStackAccess,
    #[error("stack capacity would exceed the maximum of {max}")]
    CapacityExceeded { max: usize },
    #[error("stack is corrupt and cannot be used")]
    CorruptedState,
}
