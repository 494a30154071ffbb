//! Doubly linked list with generation-checked positions.
//!
//! # Layout
//!
//! Nodes live in a slot arena (`Vec<Node<T>>`). Slot 0 is the ghost node:
//! it holds no value, its `next` is the first element and its `prev` is
//! the last, so the links form a cycle through it and `end()` is simply
//! slot 0.
//!
//! ```text
//!   slot 0 (ghost) ──next──▶ head ──▶ ... ──▶ tail ──next──▶ slot 0
//!          ◀──prev──────────────────────────────────────────
//! ```
//!
//! Removed slots go on a free list and are reused by later pushes. Every
//! removal bumps the slot's generation, so a [`Position`] taken before
//! the removal no longer matches and is rejected with
//! [`ListError::StalePosition`].

use std::fmt;
use std::iter::FusedIterator;

use smallvec::SmallVec;

use crate::error::ListError;

/// Slot index of the ghost node.
const GHOST: usize = 0;

struct Node<T> {
    value: Option<T>,
    prev: usize,
    next: usize,
    generation: u32,
}

impl<T> Node<T> {
    fn ghost() -> Self {
        Self {
            value: None,
            prev: GHOST,
            next: GHOST,
            generation: 0,
        }
    }
}

/// A handle to one element of a [`List`], or to its end.
///
/// Positions are plain copyable values; they do not borrow the list.
/// A position stays valid until its element is removed, and only refers
/// to the list that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    index: usize,
    generation: u32,
}

impl Position {
    const END: Position = Position {
        index: GHOST,
        generation: 0,
    };

    /// `true` for the one-past-the-last position.
    pub fn is_end(&self) -> bool {
        self.index == GHOST
    }
}

/// A doubly linked list.
///
/// Besides the usual deque operations at both ends, elements can be
/// reached and erased through [`Position`]s: [`begin`](List::begin) and
/// [`end`](List::end) delimit the list, [`next`](List::next) and
/// [`prev`](List::prev) step between elements, and
/// [`erase`](List::erase) removes one in O(1).
///
/// ```
/// use ftl_collections::List;
///
/// let mut list: List<i32> = (1..=5).collect();
/// let second = list.next(list.begin()).unwrap();
/// let after = list.erase(second).unwrap();
/// assert_eq!(list.get(after), Some(&3));
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5]);
/// ```
pub struct List<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> List<T> {
    /// An empty list.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::ghost()],
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if the list holds nothing.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append `value` after the last element.
    pub fn push_back(&mut self, value: T) {
        let tail = self.nodes[GHOST].prev;
        self.link_between(value, tail, GHOST);
    }

    /// Insert `value` before the first element.
    pub fn push_front(&mut self, value: T) {
        let head = self.nodes[GHOST].next;
        self.link_between(value, GHOST, head);
    }

    /// Remove and return the last element.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.nodes[GHOST].prev;
        (tail != GHOST).then(|| self.unlink(tail))
    }

    /// Remove and return the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.nodes[GHOST].next;
        (head != GHOST).then(|| self.unlink(head))
    }

    /// The first element.
    pub fn front(&self) -> Option<&T> {
        self.nodes[self.nodes[GHOST].next].value.as_ref()
    }

    /// The first element, mutably.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let head = self.nodes[GHOST].next;
        self.nodes[head].value.as_mut()
    }

    /// The last element.
    pub fn back(&self) -> Option<&T> {
        self.nodes[self.nodes[GHOST].prev].value.as_ref()
    }

    /// The last element, mutably.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let tail = self.nodes[GHOST].prev;
        self.nodes[tail].value.as_mut()
    }

    /// Remove every element.
    ///
    /// All outstanding positions other than `end()` become stale.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Position of the first element, or `end()` when empty.
    pub fn begin(&self) -> Position {
        self.position(self.nodes[GHOST].next)
    }

    /// The position one past the last element.
    pub fn end(&self) -> Position {
        Position::END
    }

    /// The position after `pos`.
    ///
    /// # Errors
    ///
    /// [`ListError::EndPosition`] if `pos` is `end()`,
    /// [`ListError::StalePosition`] if its element is gone.
    pub fn next(&self, pos: Position) -> Result<Position, ListError> {
        let index = self.resolve_element(pos)?;
        Ok(self.position(self.nodes[index].next))
    }

    /// The position before `pos`. `prev(end())` is the last element.
    ///
    /// # Errors
    ///
    /// [`ListError::BeforeBegin`] if `pos` is the first element (or `end()`
    /// of an empty list), [`ListError::StalePosition`] if its element is
    /// gone.
    pub fn prev(&self, pos: Position) -> Result<Position, ListError> {
        let index = self.resolve(pos)?;
        let prev = self.nodes[index].prev;
        if prev == GHOST {
            return Err(ListError::BeforeBegin);
        }
        Ok(self.position(prev))
    }

    /// The element at `pos`, or `None` for `end()` and stale positions.
    pub fn get(&self, pos: Position) -> Option<&T> {
        let index = self.resolve(pos).ok()?;
        self.nodes[index].value.as_ref()
    }

    /// The element at `pos` mutably, or `None` for `end()` and stale
    /// positions.
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        let index = self.resolve(pos).ok()?;
        self.nodes[index].value.as_mut()
    }

    /// Remove the element at `pos` and return it.
    ///
    /// # Errors
    ///
    /// Same as [`List::erase`].
    pub fn remove(&mut self, pos: Position) -> Result<T, ListError> {
        let index = self.resolve_element(pos)?;
        Ok(self.unlink(index))
    }

    /// Remove the element at `pos`, returning the position that followed
    /// it.
    ///
    /// # Errors
    ///
    /// [`ListError::EndPosition`] if `pos` is `end()`,
    /// [`ListError::StalePosition`] if its element is already gone.
    pub fn erase(&mut self, pos: Position) -> Result<Position, ListError> {
        let index = self.resolve_element(pos)?;
        let next = self.nodes[index].next;
        drop(self.unlink(index));
        Ok(self.position(next))
    }

    /// Remove the elements in `[first, last)` and return `last`.
    ///
    /// An empty range (`first == last`) removes nothing.
    ///
    /// # Errors
    ///
    /// [`ListError::StalePosition`] if either position is stale,
    /// [`ListError::InvalidRange`] if `last` does not follow `first`.
    /// Nothing is removed in either case.
    pub fn erase_range(&mut self, first: Position, last: Position) -> Result<Position, ListError> {
        let mut cursor = self.resolve(first)?;
        let stop = self.resolve(last)?;
        while cursor != stop {
            if cursor == GHOST {
                return Err(ListError::InvalidRange);
            }
            cursor = self.nodes[cursor].next;
        }

        let mut cursor = first.index;
        while cursor != stop {
            let next = self.nodes[cursor].next;
            drop(self.unlink(cursor));
            cursor = next;
        }
        Ok(last)
    }

    /// Front-to-back iterator. Also iterates back-to-front via
    /// [`DoubleEndedIterator`].
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.nodes[GHOST].next,
            back: self.nodes[GHOST].prev,
            remaining: self.len,
        }
    }

    /// Front-to-back iterator over mutable references. Also iterates
    /// back-to-front via [`DoubleEndedIterator`].
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let front = self.nodes[GHOST].next;
        let back = self.nodes[GHOST].prev;
        let remaining = self.len;
        let mut pieces = SmallVec::new();
        if let Some((_, elements)) = self.nodes.split_first_mut() {
            pieces.push((GHOST + 1, elements));
        }
        IterMut {
            pieces,
            front,
            back,
            remaining,
        }
    }

    fn position(&self, index: usize) -> Position {
        Position {
            index,
            generation: self.nodes[index].generation,
        }
    }

    /// Slot of a live element or the ghost.
    fn resolve(&self, pos: Position) -> Result<usize, ListError> {
        match self.nodes.get(pos.index) {
            Some(node)
                if node.generation == pos.generation
                    && (pos.index == GHOST || node.value.is_some()) =>
            {
                Ok(pos.index)
            }
            _ => Err(ListError::StalePosition { index: pos.index }),
        }
    }

    /// Slot of a live element; `end()` is rejected.
    fn resolve_element(&self, pos: Position) -> Result<usize, ListError> {
        match self.resolve(pos)? {
            GHOST => Err(ListError::EndPosition),
            index => Ok(index),
        }
    }

    fn link_between(&mut self, value: T, prev: usize, next: usize) {
        let index = match self.free.pop() {
            Some(index) => {
                let node = &mut self.nodes[index];
                node.value = Some(value);
                node.prev = prev;
                node.next = next;
                index
            }
            None => {
                self.nodes.push(Node {
                    value: Some(value),
                    prev,
                    next,
                    generation: 0,
                });
                self.nodes.len() - 1
            }
        };
        self.nodes[prev].next = index;
        self.nodes[next].prev = index;
        self.len += 1;
    }

    /// Detach a live element's slot and hand back its value.
    fn unlink(&mut self, index: usize) -> T {
        let Node { prev, next, .. } = self.nodes[index];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;

        let node = &mut self.nodes[index];
        node.generation = node.generation.wrapping_add(1);
        node.prev = GHOST;
        node.next = GHOST;
        self.free.push(index);
        self.len -= 1;
        match node.value.take() {
            Some(value) => value,
            None => unreachable!("slot {index} was linked without a value"),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

/// Borrowing iterator returned by [`List::iter`].
pub struct Iter<'a, T> {
    list: &'a List<T>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.nodes[self.front];
        self.front = node.next;
        self.remaining -= 1;
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.list.nodes[self.back];
        self.back = node.prev;
        self.remaining -= 1;
        node.value.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Unvisited stretches of the slot arena, sorted by first slot index.
/// A list whose link order follows slot order stays in one piece.
type Pieces<'a, T> = SmallVec<[(usize, &'a mut [Node<T>]); 4]>;

/// Mutable iterator returned by [`List::iter_mut`].
///
/// Walks the links lazily. Each visited node is split off the arena
/// stretch holding it, so the yielded borrows stay disjoint.
pub struct IterMut<'a, T> {
    pieces: Pieces<'a, T>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    /// Detach slot `index` from the unvisited stretches.
    fn take_node(&mut self, index: usize) -> Option<&'a mut Node<T>> {
        let at = self
            .pieces
            .partition_point(|(start, _)| *start <= index)
            .checked_sub(1)?;
        let (start, piece) = self.pieces.remove(at);
        let (left, rest) = piece.split_at_mut(index - start);
        let (node, right) = rest.split_first_mut()?;
        if !right.is_empty() {
            self.pieces.insert(at, (index + 1, right));
        }
        if !left.is_empty() {
            self.pieces.insert(at, (start, left));
        }
        Some(node)
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.take_node(self.front)?;
        self.front = node.next;
        self.remaining -= 1;
        node.value.as_mut()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.take_node(self.back)?;
        self.back = node.prev;
        self.remaining -= 1;
        node.value.as_mut()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator returned by `List::into_iter`.
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T: Clone>(list: &List<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn push_and_pop_both_ends() {
        let mut list = List::new();
        list.push_back(2);
        list.push_back(3);
        list.push_front(1);
        assert_eq!(collect(&list), [1, 2, 3]);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), Some(3));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_back(), None);
        assert_eq!(list.pop_front(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn empty_list_begin_is_end() {
        let list: List<u8> = List::new();
        assert_eq!(list.begin(), list.end());
        assert!(list.begin().is_end());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.prev(list.end()), Err(ListError::BeforeBegin));
    }

    #[test]
    fn stepping_through_positions() {
        let list: List<char> = "abc".chars().collect();
        let a = list.begin();
        let b = list.next(a).unwrap();
        let c = list.next(b).unwrap();
        assert_eq!(list.get(b), Some(&'b'));
        assert_eq!(list.next(c).unwrap(), list.end());
        assert_eq!(list.next(list.end()), Err(ListError::EndPosition));
        assert_eq!(list.prev(list.end()).unwrap(), c);
        assert_eq!(list.prev(b).unwrap(), a);
        assert_eq!(list.prev(a), Err(ListError::BeforeBegin));
        assert_eq!(list.get(list.end()), None);
    }

    #[test]
    fn erase_returns_following_position() {
        let mut list: List<i32> = (1..=4).collect();
        let second = list.next(list.begin()).unwrap();
        let third = list.erase(second).unwrap();
        assert_eq!(list.get(third), Some(&3));
        assert_eq!(collect(&list), [1, 3, 4]);

        let last = list.prev(list.end()).unwrap();
        assert_eq!(list.erase(last).unwrap(), list.end());
        assert_eq!(collect(&list), [1, 3]);
    }

    #[test]
    fn erase_end_is_rejected() {
        let mut list: List<i32> = (1..=2).collect();
        let end = list.end();
        assert_eq!(list.erase(end), Err(ListError::EndPosition));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn erased_positions_go_stale() {
        let mut list: List<i32> = (1..=3).collect();
        let first = list.begin();
        list.erase(first).unwrap();
        assert_eq!(
            list.erase(first),
            Err(ListError::StalePosition { index: first.index })
        );
        assert_eq!(list.get(first), None);

        // the freed slot is reused, but the old position stays stale
        list.push_back(9);
        assert_eq!(list.get(first), None);
        assert_eq!(collect(&list), [2, 3, 9]);
    }

    #[test]
    fn erase_range_removes_half_open_span() {
        let mut list: List<i32> = (1..=6).collect();
        let first = list.next(list.begin()).unwrap();
        let mut last = first;
        for _ in 0..3 {
            last = list.next(last).unwrap();
        }
        assert_eq!(list.erase_range(first, last).unwrap(), last);
        assert_eq!(collect(&list), [1, 5, 6]);
        assert_eq!(list.get(last), Some(&5));
    }

    #[test]
    fn erase_range_to_end_and_empty_range() {
        let mut list: List<i32> = (1..=4).collect();
        let begin = list.begin();
        assert_eq!(list.erase_range(begin, begin).unwrap(), begin);
        assert_eq!(list.len(), 4);

        let second = list.next(begin).unwrap();
        let end = list.end();
        assert_eq!(list.erase_range(second, end).unwrap(), end);
        assert_eq!(collect(&list), [1]);
    }

    #[test]
    fn backwards_range_is_invalid() {
        let mut list: List<i32> = (1..=4).collect();
        let first = list.begin();
        let third = list.next(list.next(first).unwrap()).unwrap();
        assert_eq!(list.erase_range(third, first), Err(ListError::InvalidRange));
        assert_eq!(collect(&list), [1, 2, 3, 4]);
        assert_eq!(
            list.erase_range(list.end(), first),
            Err(ListError::InvalidRange)
        );
    }

    #[test]
    fn iterates_both_directions() {
        let list: List<i32> = (1..=5).collect();
        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [5, 4, 3, 2, 1]);
        let mut it = list.iter();
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&5));
        assert_eq!(it.len(), 3);
        assert_eq!(it.copied().collect::<Vec<_>>(), [2, 3, 4]);
    }

    #[test]
    fn iter_mut_follows_link_order() {
        let mut list = List::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);
        for v in list.iter_mut() {
            *v *= 10;
        }
        assert_eq!(collect(&list), [10, 20, 30]);
    }

    #[test]
    fn iter_mut_over_reused_slots() {
        let mut list: List<i32> = (0..8).collect();
        let mut pos = list.begin();
        while !pos.is_end() {
            pos = list.erase(pos).unwrap();
            if !pos.is_end() {
                pos = list.next(pos).unwrap();
            }
        }
        // freed slots come back in reverse, scattering link order
        for v in [10, 20, 30, 40] {
            list.push_front(v);
        }
        assert_eq!(collect(&list), [40, 30, 20, 10, 1, 3, 5, 7]);

        let mut it = list.iter_mut();
        assert_eq!(it.len(), 8);
        *it.next().unwrap() += 1;
        *it.next_back().unwrap() += 1;
        for v in it.rev() {
            *v = -*v;
        }
        assert_eq!(collect(&list), [41, -30, -20, -10, -1, -3, -5, 8]);
    }

    #[test]
    fn iter_mut_on_empty_list() {
        let mut list: List<u8> = List::new();
        assert_eq!(list.iter_mut().next(), None);
        list.push_back(1);
        list.pop_back();
        assert_eq!(list.iter_mut().next_back(), None);
    }

    #[test]
    fn clone_and_equality() {
        let list: List<String> = ["x", "y"].iter().map(|s| s.to_string()).collect();
        let mut copy = list.clone();
        assert_eq!(copy, list);
        copy.push_back("z".into());
        assert_ne!(copy, list);
        copy.pop_back();
        if let Some(front) = copy.front_mut() {
            front.push('!');
        }
        assert_ne!(copy, list);
        assert_eq!(format!("{list:?}"), r#"["x", "y"]"#);
    }

    #[test]
    fn owned_iteration_drains() {
        let list: List<i32> = (1..=3).collect();
        let mut it = list.into_iter();
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn clear_stales_every_position() {
        let mut list: List<i32> = (1..=3).collect();
        let begin = list.begin();
        list.clear();
        assert!(list.is_empty());
        assert!(matches!(list.next(begin), Err(ListError::StalePosition { .. })));
        list.push_back(7);
        assert_eq!(list.get(begin), None);
        assert_eq!(list.front(), Some(&7));
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::VecDeque;

        #[derive(Clone, Debug)]
        enum Op {
            PushBack(i8),
            PushFront(i8),
            PopBack,
            PopFront,
            EraseAt(usize),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                any::<i8>().prop_map(Op::PushBack),
                any::<i8>().prop_map(Op::PushFront),
                Just(Op::PopBack),
                Just(Op::PopFront),
                (0usize..8).prop_map(Op::EraseAt),
            ]
        }

        proptest! {
            #[test]
            fn behaves_like_vecdeque(ops in prop::collection::vec(op(), 0..80)) {
                let mut list = List::new();
                let mut model = VecDeque::new();
                for op in ops {
                    match op {
                        Op::PushBack(v) => {
                            list.push_back(v);
                            model.push_back(v);
                        }
                        Op::PushFront(v) => {
                            list.push_front(v);
                            model.push_front(v);
                        }
                        Op::PopBack => prop_assert_eq!(list.pop_back(), model.pop_back()),
                        Op::PopFront => prop_assert_eq!(list.pop_front(), model.pop_front()),
                        Op::EraseAt(n) if n < model.len() => {
                            let mut pos = list.begin();
                            for _ in 0..n {
                                pos = list.next(pos).unwrap();
                            }
                            list.erase(pos).unwrap();
                            model.remove(n);
                        }
                        Op::EraseAt(_) => {}
                    }
                    prop_assert_eq!(list.len(), model.len());
                    prop_assert!(list.iter().eq(model.iter()));
                    prop_assert!(list.iter().rev().eq(model.iter().rev()));
                    prop_assert!(list.iter_mut().map(|v| *v).eq(model.iter().copied()));
                    prop_assert!(list.iter_mut().rev().map(|v| *v).eq(model.iter().rev().copied()));
                }
            }
        }
    }
}
