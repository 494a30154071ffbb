//! Contiguous random-access cursors.
//!
//! A cursor is a position inside one backing array, the safe counterpart
//! of a raw element pointer: `cursor + n` addresses the element `n` slots
//! further along, `b - a` is the signed element distance, and comparisons
//! follow address order. Unlike a pointer, a cursor remembers the array it
//! walks, so dereferencing a position outside it panics instead of reading
//! stray memory.
//!
//! [`ContiguousIter`] is the shared, `Copy` cursor. [`ContiguousIterMut`]
//! hands out `&mut T` and is therefore move-only; use
//! [`reborrow`](ContiguousIterMut::reborrow) to keep it while passing a
//! copy along.
//!
//! A default-constructed cursor is *null*: it walks no array, equals only
//! other null cursors, orders before every real cursor and cannot be
//! dereferenced.
//!
//! Cursors built over different sub-slices of one array still compare and
//! measure by element address, so `new(&data, 1)` equals
//! `new(&data[1..], 0)`. Zero-sized elements share one address; for them
//! comparison falls back to the base slice and position.
//!
//! Generic code that only needs to move and measure cursors can be written
//! against [`RandomAccessCursor`] together with [`advance`] and
//! [`distance`].

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Deref, DerefMut, Index, IndexMut, Sub, SubAssign};

/// Movement and measurement shared by all random-access cursors.
pub trait RandomAccessCursor {
    /// Move by `n` elements; negative `n` moves backwards.
    fn advance_by(&mut self, n: isize);

    /// Signed number of elements from `self` to `other`.
    ///
    /// Both cursors must walk the same array.
    fn distance_to(&self, other: &Self) -> isize;
}

/// Signed element count from `first` to `last`.
pub fn distance<C: RandomAccessCursor>(first: &C, last: &C) -> isize {
    first.distance_to(last)
}

/// Move `cursor` by `n` elements.
pub fn advance<C: RandomAccessCursor>(cursor: &mut C, n: isize) {
    cursor.advance_by(n);
}

/// Resolve `pos` to a slot of an array of length `len`.
fn slot(len: usize, pos: isize) -> Option<usize> {
    usize::try_from(pos).ok().filter(|&i| i < len)
}

/// Address-order key: null sorts first, then by element address.
fn address_key<T>(base: Option<&[T]>, pos: isize) -> Option<(usize, isize)> {
    let base = base?;
    if std::mem::size_of::<T>() == 0 {
        Some((base.as_ptr() as usize, pos))
    } else {
        Some((base.as_ptr().wrapping_offset(pos) as usize, 0))
    }
}

/// `true` if both slices lie in one array (their address ranges touch),
/// or both are absent.
fn same_array<T>(a: Option<&[T]>, b: Option<&[T]>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) if std::mem::size_of::<T>() == 0 => std::ptr::eq(a, b),
        (Some(a), Some(b)) => {
            let (a, b) = (a.as_ptr_range(), b.as_ptr_range());
            a.start <= b.end && b.start <= a.end
        }
        _ => false,
    }
}

/// Signed element count from `(from, from_pos)` to `(to, to_pos)`.
fn element_distance<T>(from: Option<&[T]>, from_pos: isize, to: Option<&[T]>, to_pos: isize) -> isize {
    assert!(same_array(from, to), "cursors walk different arrays");
    let size = std::mem::size_of::<T>();
    let base_offset = match (from, to) {
        (Some(from), Some(to)) if size > 0 => {
            (to.as_ptr() as isize - from.as_ptr() as isize) / size as isize
        }
        _ => 0,
    };
    base_offset + to_pos - from_pos
}

fn out_of_range(pos: isize, len: Option<usize>) -> ! {
    match len {
        Some(len) => panic!("cursor position {pos} is outside 0..{len}"),
        None => panic!("dereferenced a null cursor"),
    }
}

// ── Shared cursor ────────────────────────────────────────────────

/// Shared random-access cursor over a contiguous array.
pub struct ContiguousIter<'a, T> {
    base: Option<&'a [T]>,
    pos: isize,
}

impl<'a, T> ContiguousIter<'a, T> {
    /// Cursor at `pos` within `base`. `pos == base.len()` is the end position.
    pub fn new(base: &'a [T], pos: usize) -> Self {
        Self {
            base: Some(base),
            pos: pos as isize,
        }
    }

    /// The null cursor.
    pub const fn null() -> Self {
        Self { base: None, pos: 0 }
    }

    /// `true` for a default-constructed cursor.
    pub fn is_null(&self) -> bool {
        self.base.is_none()
    }

    /// Offset from the first element of the backing array.
    pub fn position(&self) -> isize {
        self.pos
    }

    /// The element under the cursor, or `None` if out of range or null.
    pub fn get(&self) -> Option<&'a T> {
        self.at(0)
    }

    /// The element `n` slots away, i.e. `*(self + n)`.
    pub fn at(&self, n: isize) -> Option<&'a T> {
        let base = self.base?;
        let i = slot(base.len(), self.pos + n)?;
        Some(&base[i])
    }

    /// Address of the element under the cursor. Null for a null cursor.
    ///
    /// The address may be one past the end; it is never dereferenced here.
    pub fn as_ptr(&self) -> *const T {
        match self.base {
            Some(base) => base.as_ptr().wrapping_offset(self.pos),
            None => std::ptr::null(),
        }
    }

    /// Pre-increment: step forward one element.
    pub fn increment(&mut self) -> &mut Self {
        self.pos += 1;
        self
    }

    /// Pre-decrement: step back one element.
    pub fn decrement(&mut self) -> &mut Self {
        self.pos -= 1;
        self
    }

    /// `true` if both cursors walk one array (or are both null), even
    /// through different sub-slices of it.
    pub fn same_buffer(&self, other: &Self) -> bool {
        same_array(self.base, other.base)
    }

    /// Iterate the half-open range `[self, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `end` walks another array or the range is not inside the
    /// slice `self` was built over.
    pub fn iter_to(self, end: Self) -> std::slice::Iter<'a, T> {
        let stop = self.pos + self.distance_to(&end);
        let base = self.base.unwrap_or(&[]);
        let (Ok(start), Ok(stop)) = (usize::try_from(self.pos), usize::try_from(stop)) else {
            panic!("cursor range {}..{stop} starts before the array", self.pos);
        };
        base[start..stop].iter()
    }

    fn key(&self) -> Option<(usize, isize)> {
        address_key(self.base, self.pos)
    }
}

impl<T> Clone for ContiguousIter<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ContiguousIter<'_, T> {}

impl<T> Default for ContiguousIter<'_, T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> fmt::Debug for ContiguousIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContiguousIter")
            .field("address", &self.as_ptr())
            .field("position", &self.pos)
            .finish()
    }
}

impl<T> Deref for ContiguousIter<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self.get() {
            Some(v) => v,
            None => out_of_range(self.pos, self.base.map(<[T]>::len)),
        }
    }
}

impl<T> Index<isize> for ContiguousIter<'_, T> {
    type Output = T;

    fn index(&self, n: isize) -> &T {
        match self.at(n) {
            Some(v) => v,
            None => out_of_range(self.pos + n, self.base.map(<[T]>::len)),
        }
    }
}

impl<T> PartialEq for ContiguousIter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for ContiguousIter<'_, T> {}

impl<T> PartialOrd for ContiguousIter<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for ContiguousIter<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl<T> AddAssign<isize> for ContiguousIter<'_, T> {
    fn add_assign(&mut self, n: isize) {
        self.pos += n;
    }
}

impl<T> SubAssign<isize> for ContiguousIter<'_, T> {
    fn sub_assign(&mut self, n: isize) {
        self.pos -= n;
    }
}

impl<T> Add<isize> for ContiguousIter<'_, T> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<'a, T> Add<ContiguousIter<'a, T>> for isize {
    type Output = ContiguousIter<'a, T>;

    fn add(self, cursor: ContiguousIter<'a, T>) -> ContiguousIter<'a, T> {
        cursor + self
    }
}

impl<T> Sub<isize> for ContiguousIter<'_, T> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

impl<T> Sub for ContiguousIter<'_, T> {
    type Output = isize;

    fn sub(self, rhs: Self) -> isize {
        rhs.distance_to(&self)
    }
}

impl<T> RandomAccessCursor for ContiguousIter<'_, T> {
    fn advance_by(&mut self, n: isize) {
        *self += n;
    }

    fn distance_to(&self, other: &Self) -> isize {
        element_distance(self.base, self.pos, other.base, other.pos)
    }
}

// ── Mutable cursor ───────────────────────────────────────────────

/// Mutable random-access cursor over a contiguous array.
pub struct ContiguousIterMut<'a, T> {
    base: Option<&'a mut [T]>,
    pos: isize,
}

impl<'a, T> ContiguousIterMut<'a, T> {
    /// Cursor at `pos` within `base`. `pos == base.len()` is the end position.
    pub fn new(base: &'a mut [T], pos: usize) -> Self {
        Self {
            base: Some(base),
            pos: pos as isize,
        }
    }

    /// The null cursor.
    pub const fn null() -> Self {
        Self { base: None, pos: 0 }
    }

    /// `true` for a default-constructed cursor.
    pub fn is_null(&self) -> bool {
        self.base.is_none()
    }

    /// Offset from the first element of the backing array.
    pub fn position(&self) -> isize {
        self.pos
    }

    /// The element under the cursor.
    pub fn get(&self) -> Option<&T> {
        self.at(0)
    }

    /// The element under the cursor, mutably.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.at_mut(0)
    }

    /// The element `n` slots away.
    pub fn at(&self, n: isize) -> Option<&T> {
        let base = self.base.as_deref()?;
        let i = slot(base.len(), self.pos + n)?;
        Some(&base[i])
    }

    /// The element `n` slots away, mutably.
    pub fn at_mut(&mut self, n: isize) -> Option<&mut T> {
        let pos = self.pos + n;
        let base = self.base.as_deref_mut()?;
        let i = slot(base.len(), pos)?;
        Some(&mut base[i])
    }

    /// Consume the cursor, returning the element under it for the full
    /// lifetime of the borrow.
    pub fn into_mut(self) -> Option<&'a mut T> {
        let base = self.base?;
        let i = slot(base.len(), self.pos)?;
        Some(&mut base[i])
    }

    /// Address of the element under the cursor. Null for a null cursor.
    pub fn as_ptr(&self) -> *const T {
        match self.base.as_deref() {
            Some(base) => base.as_ptr().wrapping_offset(self.pos),
            None => std::ptr::null(),
        }
    }

    /// Pre-increment: step forward one element.
    pub fn increment(&mut self) -> &mut Self {
        self.pos += 1;
        self
    }

    /// Pre-decrement: step back one element.
    pub fn decrement(&mut self) -> &mut Self {
        self.pos -= 1;
        self
    }

    /// A shorter-lived mutable cursor at the same position.
    pub fn reborrow(&mut self) -> ContiguousIterMut<'_, T> {
        ContiguousIterMut {
            base: self.base.as_deref_mut(),
            pos: self.pos,
        }
    }

    /// A shared cursor at the same position.
    pub fn as_iter(&self) -> ContiguousIter<'_, T> {
        ContiguousIter {
            base: self.base.as_deref(),
            pos: self.pos,
        }
    }

    fn key(&self) -> Option<(usize, isize)> {
        address_key(self.base.as_deref(), self.pos)
    }

    fn base_len(&self) -> Option<usize> {
        self.base.as_deref().map(<[T]>::len)
    }
}

impl<T> Default for ContiguousIterMut<'_, T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> fmt::Debug for ContiguousIterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContiguousIterMut")
            .field("address", &self.as_ptr())
            .field("position", &self.pos)
            .finish()
    }
}

impl<T> Deref for ContiguousIterMut<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self.get() {
            Some(v) => v,
            None => out_of_range(self.pos, self.base_len()),
        }
    }
}

impl<T> DerefMut for ContiguousIterMut<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        let (pos, len) = (self.pos, self.base_len());
        match self.get_mut() {
            Some(v) => v,
            None => out_of_range(pos, len),
        }
    }
}

impl<T> Index<isize> for ContiguousIterMut<'_, T> {
    type Output = T;

    fn index(&self, n: isize) -> &T {
        match self.at(n) {
            Some(v) => v,
            None => out_of_range(self.pos + n, self.base_len()),
        }
    }
}

impl<T> IndexMut<isize> for ContiguousIterMut<'_, T> {
    fn index_mut(&mut self, n: isize) -> &mut T {
        let (pos, len) = (self.pos + n, self.base_len());
        match self.at_mut(n) {
            Some(v) => v,
            None => out_of_range(pos, len),
        }
    }
}

impl<T> PartialEq for ContiguousIterMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for ContiguousIterMut<'_, T> {}

impl<T> PartialOrd for ContiguousIterMut<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for ContiguousIterMut<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl<T> AddAssign<isize> for ContiguousIterMut<'_, T> {
    fn add_assign(&mut self, n: isize) {
        self.pos += n;
    }
}

impl<T> SubAssign<isize> for ContiguousIterMut<'_, T> {
    fn sub_assign(&mut self, n: isize) {
        self.pos -= n;
    }
}

impl<T> Add<isize> for ContiguousIterMut<'_, T> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<T> Sub<isize> for ContiguousIterMut<'_, T> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

impl<T> RandomAccessCursor for ContiguousIterMut<'_, T> {
    fn advance_by(&mut self, n: isize) {
        *self += n;
    }

    fn distance_to(&self, other: &Self) -> isize {
        element_distance(self.base.as_deref(), self.pos, other.base.as_deref(), other.pos)
    }
}
