use crate::{Stack, StackError};

struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

/// Unbounded stack backed by a chain of heap nodes.
pub struct LinkedStack<T> {
    top: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> LinkedStack<T> {
    pub fn new() -> Self {
        LinkedStack { top: None, len: 0 }
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> for LinkedStack<T> {
    fn push(&mut self, item: T) -> Result<(), StackError> {
        let node = Box::new(Node { data: item, next: self.top.take() });
        self.top = Some(node);
        self.len += 1;
        Ok(())
    }

    fn pop(&mut self) -> Result<T, StackError> {
        let node = self.top.take().ok_or(StackError::EmptyStackAccess)?;
        self.top = node.next;
        self.len -= 1;
        Ok(node.data)
    }

    fn peek(&self) -> Result<&T, StackError> {
        self.top
            .as_ref()
            .map(|node| &node.data)
            .ok_or(StackError::EmptyStackAccess)
    }

    fn clear(&mut self) -> Result<(), StackError> {
        // unlink one node at a time, dropping the whole chain at once recurses
        let mut cur = self.top.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
        self.len = 0;
        Ok(())
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        let _ = self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_chain_drops() {
        let mut s = LinkedStack::new();
        for i in 0..200_000 {
            s.push(i).unwrap();
        }
        assert_eq!(s.len(), 200_000);
        drop(s);
    }
}
