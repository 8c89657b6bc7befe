use crate::{Stack, StackError};

pub const DEFAULT_CAPACITY: usize = 50;
pub const MAX_CAPACITY: usize = 10_000;

/// Stack over a contiguous buffer that doubles when full, up to a hard ceiling.
///
/// Popped slots are reset to `None` so the buffer never holds on to values the
/// stack no longer owns. Every operation first checks that the buffer was fully
/// built; a stack whose construction or growth failed halfway answers
/// `StackError::CorruptedState` from then on.
pub struct ResizableStack<T> {
    slots: Vec<Option<T>>,
    top: usize,
    max_capacity: usize,
    integrity_ok: bool,
}

impl<T> ResizableStack<T> {
    pub fn new() -> Self {
        ResizableStack {
            slots: (0..DEFAULT_CAPACITY).map(|_| None).collect(),
            top: 0,
            max_capacity: MAX_CAPACITY,
            integrity_ok: true,
        }
    }

    pub fn with_capacity(initial: usize) -> Result<Self, StackError> {
        Self::with_limits(initial, MAX_CAPACITY)
    }

    pub fn with_limits(initial: usize, max_capacity: usize) -> Result<Self, StackError> {
        let mut stack = ResizableStack {
            slots: Vec::new(),
            top: 0,
            max_capacity,
            integrity_ok: false,
        };
        stack.check_capacity(initial)?;
        stack.grow_to(initial)?;
        stack.integrity_ok = true;
        Ok(stack)
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    fn check_integrity(&self) -> Result<(), StackError> {
        if self.integrity_ok {
            Ok(())
        } else {
            Err(StackError::CorruptedState)
        }
    }

    fn check_capacity(&self, wanted: usize) -> Result<(), StackError> {
        if wanted > self.max_capacity {
            return Err(StackError::CapacityExceeded { max: self.max_capacity });
        }
        Ok(())
    }

    fn grow_to(&mut self, capacity: usize) -> Result<(), StackError> {
        let extra = capacity.saturating_sub(self.slots.len());
        if self.slots.try_reserve_exact(extra).is_err() {
            self.integrity_ok = false;
            return Err(StackError::CorruptedState);
        }
        self.slots.resize_with(capacity, || None);
        Ok(())
    }

    // double the buffer when full, the last step is clamped to max_capacity
    fn ensure_capacity(&mut self) -> Result<(), StackError> {
        if self.top < self.slots.len() {
            return Ok(());
        }
        self.check_capacity(self.slots.len() + 1)?;
        let doubled = (self.slots.len() * 2).max(1).min(self.max_capacity);
        self.grow_to(doubled)
    }
}

impl<T> Default for ResizableStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> for ResizableStack<T> {
    fn push(&mut self, item: T) -> Result<(), StackError> {
        self.check_integrity()?;
        self.ensure_capacity()?;
        self.slots[self.top] = Some(item);
        self.top += 1;
        Ok(())
    }

    fn pop(&mut self) -> Result<T, StackError> {
        self.check_integrity()?;
        if self.top == 0 {
            return Err(StackError::EmptyStackAccess);
        }
        self.top -= 1;
        self.slots[self.top].take().ok_or(StackError::CorruptedState)
    }

    fn peek(&self) -> Result<&T, StackError> {
        self.check_integrity()?;
        if self.top == 0 {
            return Err(StackError::EmptyStackAccess);
        }
        self.slots[self.top - 1].as_ref().ok_or(StackError::CorruptedState)
    }

    fn clear(&mut self) -> Result<(), StackError> {
        self.check_integrity()?;
        for slot in self.slots[..self.top].iter_mut() {
            *slot = None;
        }
        self.top = 0;
        Ok(())
    }

    fn len(&self) -> usize {
        self.top
    }
}
