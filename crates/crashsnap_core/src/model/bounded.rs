//! Fixed-capacity containers used throughout the report model.
//!
//! Every container here has a capacity fixed at compile time so that each
//! report section maps onto a fixed-size block on disk.

use std::fmt;
use thiserror::Error;

/// Returned when an item is pushed into a full container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("capacity of {capacity} items exceeded")]
pub struct CapacityExceeded {
    /// The container's capacity.
    pub capacity: usize,
}

/// A string stored inline in an `N`-byte buffer.
///
/// `N` counts the NUL terminator, so at most `N - 1` bytes of text are kept.
/// Longer input is truncated on a UTF-8 character boundary; input containing
/// a NUL byte is cut at that byte. Nothing ever overflows the buffer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundedStr<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> BoundedStr<N> {
    /// Maximum number of text bytes this string can hold.
    pub const MAX_LEN: usize = N - 1;

    /// Creates a string, truncating `s` to fit.
    #[must_use]
    pub fn new(s: &str) -> Self {
        let mut out = Self::default();
        out.set(s);
        out
    }

    /// Replaces the contents, truncating `s` to fit.
    pub fn set(&mut self, s: &str) {
        let s = s.split('\0').next().unwrap_or_default();
        let kept = truncate_on_boundary(s, Self::MAX_LEN);
        self.buf = [0; N];
        self.buf[..kept.len()].copy_from_slice(kept.as_bytes());
        self.len = kept.len();
    }

    /// Builds a string from raw bytes as captured, never failing.
    ///
    /// Bytes from the first NUL on are dropped. A multibyte character cut
    /// off at the end is dropped too; any other invalid sequence becomes
    /// U+FFFD, and the result is then truncated to fit.
    #[must_use]
    pub fn from_text_bytes(bytes: &[u8]) -> Self {
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        let bytes = &bytes[..end];
        match std::str::from_utf8(bytes) {
            Ok(text) => Self::new(text),
            Err(e) if e.error_len().is_none() => {
                Self::new(std::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default())
            }
            Err(_) => Self::new(&String::from_utf8_lossy(bytes)),
        }
    }

    /// Returns the text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }

    /// Returns the NUL-padded buffer as laid out on disk.
    #[must_use]
    pub fn as_padded_bytes(&self) -> &[u8; N] {
        &self.buf
    }

    /// Returns the text length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn truncate_on_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

impl<const N: usize> Default for BoundedStr<N> {
    fn default() -> Self {
        Self {
            buf: [0; N],
            len: 0,
        }
    }
}

impl<const N: usize> From<&str> for BoundedStr<N> {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl<const N: usize> PartialEq<str> for BoundedStr<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for BoundedStr<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<const N: usize> fmt::Debug for BoundedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> fmt::Display for BoundedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered list holding at most `N` items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedVec<T, const N: usize> {
    items: Vec<T>,
}

impl<T, const N: usize> BoundedVec<T, N> {
    /// The fixed capacity.
    pub const CAPACITY: usize = N;

    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends an item.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityExceeded`] (and drops `item`) when the list is full.
    pub fn try_push(&mut self, item: T) -> Result<(), CapacityExceeded> {
        if self.items.len() >= N {
            return Err(CapacityExceeded { capacity: N });
        }
        self.items.push(item);
        Ok(())
    }

    /// Builds a list from an iterator, keeping the first `N` items.
    pub fn from_iter_truncated<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().take(N).collect(),
        }
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if no more items fit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() >= N
    }

    /// Returns the items as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T, const N: usize> Default for BoundedVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedVec<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Errors from assembling a [`RingBuffer`] out of raw parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingError {
    /// The slot vector does not have exactly `capacity` entries.
    #[error("expected {capacity} slots, got {actual}")]
    SlotCount {
        /// Required number of slots.
        capacity: usize,
        /// Number of slots supplied.
        actual: usize,
    },
    /// `count` is larger than the capacity.
    #[error("count {count} exceeds capacity {capacity}")]
    CountOutOfRange {
        /// The supplied count.
        count: usize,
        /// The ring capacity.
        capacity: usize,
    },
    /// `first_index` does not name a slot while the ring is non-empty.
    #[error("first index {first_index} outside 0..{capacity}")]
    FirstIndexOutOfRange {
        /// The supplied oldest-entry slot.
        first_index: usize,
        /// The ring capacity.
        capacity: usize,
    },
}

/// A fixed-capacity circular buffer.
///
/// Once full, each push overwrites the oldest entry. The buffer tracks how
/// many slots hold live entries (`count`) and which slot holds the oldest
/// one (`first_index`); [`RingBuffer::iter`] walks `count` slots from
/// `first_index`, wrapping at the capacity, so callers always see entries
/// oldest-first no matter where they physically sit.
#[derive(Debug, Clone, PartialEq)]
pub struct RingBuffer<T, const N: usize> {
    slots: Vec<T>,
    count: usize,
    first_index: usize,
}

impl<T: Default + Clone, const N: usize> RingBuffer<T, N> {
    /// The fixed capacity.
    pub const CAPACITY: usize = N;

    /// Creates an empty ring with every slot defaulted.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![T::default(); N],
            count: 0,
            first_index: 0,
        }
    }

    /// Reassembles a ring from its physical slots.
    ///
    /// This is the shape a live capture buffer is snapshotted in.
    ///
    /// # Errors
    ///
    /// Returns a [`RingError`] if `slots.len() != N`, `count > N`, or
    /// `first_index >= N` while `count > 0`.
    pub fn from_raw_parts(slots: Vec<T>, count: usize, first_index: usize) -> Result<Self, RingError> {
        if slots.len() != N {
            return Err(RingError::SlotCount {
                capacity: N,
                actual: slots.len(),
            });
        }
        if count > N {
            return Err(RingError::CountOutOfRange { count, capacity: N });
        }
        if count > 0 && first_index >= N {
            return Err(RingError::FirstIndexOutOfRange {
                first_index,
                capacity: N,
            });
        }
        // An empty ring keeps no meaningful oldest slot; fold it into range.
        let first_index = if count == 0 { first_index % N } else { first_index };
        Ok(Self {
            slots,
            count,
            first_index,
        })
    }
}

impl<T, const N: usize> RingBuffer<T, N> {
    /// Appends an entry, overwriting the oldest one when full.
    pub fn push(&mut self, item: T) {
        if self.count < N {
            let slot = (self.first_index + self.count) % N;
            self.slots[slot] = item;
            self.count += 1;
        } else {
            self.slots[self.first_index] = item;
            self.first_index = (self.first_index + 1) % N;
        }
    }

    /// Iterates over live entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.count).map(move |i| &self.slots[(self.first_index + i) % N])
    }

    /// Returns the number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if no entries are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Physical layout: every slot, the live count and the oldest slot.
    pub(crate) fn raw_parts(&self) -> (&[T], usize, usize) {
        (&self.slots, self.count, self.first_index)
    }
}

impl<T: Default + Clone, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
