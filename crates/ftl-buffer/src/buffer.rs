//! Fixed-capacity storage with an explicitly constructed live prefix.
//!
//! A [`StorageBuffer`] is the backing block of a container. It reserves
//! `capacity` slots at creation and never grows. Elements are built into
//! the slots with [`construct`](StorageBuffer::construct) /
//! [`construct_from`](StorageBuffer::construct_from) and torn down with
//! [`destruct`](StorageBuffer::destruct). The live elements always form
//! the prefix `[0, len)`.

use std::fmt;
use std::ops::Range;

use crate::error::BufferError;

/// A block of `capacity` element slots with a tracked live prefix.
///
/// The buffer is exclusively owned by its container. It can be moved out
/// with [`take`](StorageBuffer::take), which leaves an empty buffer behind.
/// It is not `Clone`; the owning container copies elements itself.
///
/// Dropping the buffer drops exactly the live elements, in slot order.
pub struct StorageBuffer<T> {
    /// Live elements. Reserved up front; pushes never exceed `capacity`,
    /// so it is never reallocated.
    slots: Vec<T>,
    /// Number of slots reserved at creation.
    capacity: usize,
}

impl<T> StorageBuffer<T> {
    /// Create an empty buffer with no reserved slots.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            capacity: 0,
        }
    }

    /// Reserve room for `capacity` elements without constructing any.
    ///
    /// A capacity of zero allocates nothing. Returns
    /// [`BufferError::AllocationFailed`] if the block cannot be obtained.
    pub fn with_capacity(capacity: usize) -> Result<Self, BufferError> {
        let mut slots = Vec::new();
        if capacity > 0 {
            slots
                .try_reserve_exact(capacity)
                .map_err(|_| BufferError::AllocationFailed {
                    requested: capacity,
                    element_size: std::mem::size_of::<T>(),
                })?;
        }
        Ok(Self { slots, capacity })
    }

    /// Clone `value` into every slot of `range`.
    ///
    /// The live count grows by one per constructed element, so the call may
    /// be repeated to grow the live prefix incrementally.
    ///
    /// # Panics
    ///
    /// Panics if `range` does not start at the first unconstructed slot or
    /// extends past the capacity.
    pub fn construct(&mut self, range: Range<usize>, value: &T)
    where
        T: Clone,
    {
        self.check_construct_range(&range);
        for _ in range {
            self.slots.push(value.clone());
        }
    }

    /// Move successive items of `source` into the slots of `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is not a valid construction range (see
    /// [`construct`](StorageBuffer::construct)) or if `source` yields fewer
    /// than `range.len()` items. Elements constructed before the source ran
    /// dry stay live.
    pub fn construct_from<I>(&mut self, range: Range<usize>, source: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.check_construct_range(&range);
        let wanted = range.len();
        let mut source = source.into_iter();
        for built in 0..wanted {
            match source.next() {
                Some(value) => self.slots.push(value),
                None => panic!("source sequence exhausted after {built} of {wanted} elements"),
            }
        }
    }

    /// Drop the live elements in `range`, in forward order.
    ///
    /// The live count shrinks by one per dropped element.
    ///
    /// # Panics
    ///
    /// Panics if `range` is not a trailing sub-range of the live prefix.
    pub fn destruct(&mut self, range: Range<usize>) {
        assert!(
            range.start <= range.end && range.end == self.slots.len(),
            "destruct range {}..{} is not a live suffix of 0..{}",
            range.start,
            range.end,
            self.slots.len(),
        );
        self.slots.truncate(range.start);
    }

    /// Drop every live element, keeping the reserved slots.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Move the whole buffer out, leaving an empty capacity-0 buffer behind.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Consume the buffer, returning the live elements.
    pub fn into_vec(self) -> Vec<T> {
        self.slots
    }

    /// Total reserved slot count. Fixed for the lifetime of the buffer.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// `true` when no element is live, regardless of capacity.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Reserved slots that hold no element.
    pub fn remaining(&self) -> usize {
        self.capacity - self.slots.len()
    }

    /// Size of the reserved block in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.capacity * std::mem::size_of::<T>()
    }

    /// The live elements.
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// The live elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    fn check_construct_range(&self, range: &Range<usize>) {
        assert!(
            range.start == self.slots.len(),
            "construction must start at slot {}, got {}",
            self.slots.len(),
            range.start,
        );
        assert!(
            range.start <= range.end && range.end <= self.capacity,
            "construct range {}..{} exceeds capacity {}",
            range.start,
            range.end,
            self.capacity,
        );
    }
}

impl<T> Default for StorageBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for StorageBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageBuffer")
            .field("capacity", &self.capacity)
            .field("constructed", &self.slots.len())
            .finish()
    }
}
