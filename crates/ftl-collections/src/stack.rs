//! Singly linked LIFO stack.

use std::fmt;

struct Node<T> {
    value: T,
    below: Option<Box<Node<T>>>,
}

/// A last-in first-out stack of heap-allocated nodes.
///
/// `push` and `pop` are O(1) and never move existing elements. Dropping
/// the stack frees its nodes in a loop, so very deep stacks do not
/// overflow the call stack.
///
/// The stack is deliberately not [`Clone`]; move it instead.
pub struct Stack<T> {
    top: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Stack<T> {
    /// An empty stack.
    pub const fn new() -> Self {
        Self { top: None, len: 0 }
    }

    /// Put `value` on top.
    pub fn push(&mut self, value: T) {
        let below = self.top.take();
        self.top = Some(Box::new(Node { value, below }));
        self.len += 1;
    }

    /// Remove and return the top element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        let node = self.top.take()?;
        let Node { value, below } = *node;
        self.top = below;
        self.len -= 1;
        Some(value)
    }

    /// The top element.
    pub fn peek(&self) -> Option<&T> {
        self.top.as_deref().map(|node| &node.value)
    }

    /// The top element, mutably.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.top.as_deref_mut().map(|node| &mut node.value)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if the stack holds nothing.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every element.
    pub fn clear(&mut self) {
        let mut next = self.top.take();
        while let Some(mut node) = next {
            next = node.below.take();
        }
        self.len = 0;
    }

    /// Iterate from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.top.as_deref(),
            remaining: self.len,
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Pushes in iteration order, so the last item ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Top-to-bottom iterator returned by [`Stack::iter`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.next?;
        self.next = node.below.as_deref();
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
