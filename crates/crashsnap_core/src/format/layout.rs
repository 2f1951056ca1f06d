//! Primitive field codec for fixed-size blocks.
//!
//! Every field is written explicitly, one after another, with no padding.
//! Numeric fields follow the block's [`ByteOrder`]; strings and bytes are
//! order-independent.

use crate::error::{CoreError, CoreResult};
use crate::model::BoundedStr;
use std::fmt;

/// Byte order of numeric fields in a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Least significant byte first.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

impl ByteOrder {
    /// Converts the header's `big_endian` flag.
    #[must_use]
    pub const fn from_flag(big_endian: i32) -> Self {
        if big_endian == 0 {
            Self::Little
        } else {
            Self::Big
        }
    }

    /// Returns the header's `big_endian` flag.
    #[must_use]
    pub const fn as_flag(self) -> i32 {
        match self {
            Self::Little => 0,
            Self::Big => 1,
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Little => f.write_str("little-endian"),
            Self::Big => f.write_str("big-endian"),
        }
    }
}

/// Appends fields to a block.
#[derive(Debug)]
pub(crate) struct LayoutWriter {
    buf: Vec<u8>,
    order: ByteOrder,
}

macro_rules! put_numeric {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            pub(crate) fn $name(&mut self, value: $ty) {
                match self.order {
                    ByteOrder::Little => self.buf.extend_from_slice(&value.to_le_bytes()),
                    ByteOrder::Big => self.buf.extend_from_slice(&value.to_be_bytes()),
                }
            }
        )*
    };
}

impl LayoutWriter {
    pub(crate) fn with_capacity(capacity: usize, order: ByteOrder) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            order,
        }
    }

    put_numeric! {
        put_i32: i32,
        put_i64: i64,
        put_u64: u64,
        put_f32: f32,
        put_f64: f64,
    }

    pub(crate) fn put_bool(&mut self, value: bool) {
        self.buf.push(u8::from(value));
    }

    /// Writes the full NUL-padded buffer.
    pub(crate) fn put_str<const N: usize>(&mut self, value: &BoundedStr<N>) {
        self.buf.extend_from_slice(value.as_padded_bytes());
    }

    /// Writes a list count. Counts are bounded by compile-time capacities.
    pub(crate) fn put_count(&mut self, count: usize) {
        self.put_i32(i32::try_from(count).unwrap_or(i32::MAX));
    }

    pub(crate) fn put_zeros(&mut self, len: usize) {
        self.buf.resize(self.buf.len() + len, 0);
    }

    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Reads fields from a block.
#[derive(Debug)]
pub(crate) struct LayoutReader<'a> {
    bytes: &'a [u8],
    cursor: usize,
    order: ByteOrder,
}

macro_rules! get_numeric {
    ($($name:ident: $ty:ty),* $(,)?) => {
        $(
            pub(crate) fn $name(&mut self) -> CoreResult<$ty> {
                let bytes = self.take_array()?;
                Ok(match self.order {
                    ByteOrder::Little => <$ty>::from_le_bytes(bytes),
                    ByteOrder::Big => <$ty>::from_be_bytes(bytes),
                })
            }
        )*
    };
}

impl<'a> LayoutReader<'a> {
    pub(crate) fn new(bytes: &'a [u8], order: ByteOrder) -> Self {
        Self {
            bytes,
            cursor: 0,
            order,
        }
    }

    pub(crate) fn order(&self) -> ByteOrder {
        self.order
    }

    pub(crate) fn remaining(&self) -> usize {
        self.bytes.len() - self.cursor
    }

    pub(crate) fn take(&mut self, len: usize) -> CoreResult<&'a [u8]> {
        if len > self.remaining() {
            return Err(CoreError::corrupted(format!(
                "unexpected end of block at offset {}: need {len} bytes, {} left",
                self.cursor,
                self.remaining()
            )));
        }
        let slice = &self.bytes[self.cursor..self.cursor + len];
        self.cursor += len;
        Ok(slice)
    }

    fn take_array<const W: usize>(&mut self) -> CoreResult<[u8; W]> {
        let slice = self.take(W)?;
        slice
            .try_into()
            .map_err(|_| CoreError::corrupted(format!("invalid {W}-byte field")))
    }

    get_numeric! {
        get_i32: i32,
        get_i64: i64,
        get_u64: u64,
        get_f32: f32,
        get_f64: f64,
    }

    /// Any non-zero byte reads as `true`.
    pub(crate) fn get_bool(&mut self) -> CoreResult<bool> {
        Ok(self.take(1)?[0] != 0)
    }

    /// Reads an `N`-byte NUL-padded string.
    ///
    /// Text that is not valid UTF-8 is decoded lossily; only a missing
    /// terminator is an error.
    pub(crate) fn get_str<const N: usize>(&mut self) -> CoreResult<BoundedStr<N>> {
        let offset = self.cursor;
        let raw = self.take(N)?;
        if !raw.contains(&0) {
            return Err(CoreError::corrupted(format!(
                "string at offset {offset} has no terminator within {N} bytes"
            )));
        }
        Ok(BoundedStr::from_text_bytes(raw))
    }

    /// Reads a list count and checks it against `capacity`.
    pub(crate) fn get_count(&mut self, capacity: usize) -> CoreResult<usize> {
        let offset = self.cursor;
        let raw = self.get_i32()?;
        usize::try_from(raw)
            .ok()
            .filter(|&count| count <= capacity)
            .ok_or_else(|| {
                CoreError::corrupted(format!(
                    "count {raw} at offset {offset} outside 0..={capacity}"
                ))
            })
    }

    pub(crate) fn skip(&mut self, len: usize) -> CoreResult<()> {
        self.take(len).map(|_| ())
    }
}

/// A value with a fixed encoded size.
pub(crate) trait FixedLayout: Sized {
    /// Exact number of bytes [`FixedLayout::encode`] produces.
    const ENCODED_LEN: usize;

    fn encode(&self, w: &mut LayoutWriter);

    fn decode(r: &mut LayoutReader<'_>) -> CoreResult<Self>;
}

/// Encodes `value` into a fresh block.
pub(crate) fn encode_block<T: FixedLayout>(value: &T, order: ByteOrder) -> Vec<u8> {
    let mut w = LayoutWriter::with_capacity(T::ENCODED_LEN, order);
    value.encode(&mut w);
    debug_assert_eq!(w.len(), T::ENCODED_LEN);
    w.into_bytes()
}

/// Decodes a block that must be exactly `T::ENCODED_LEN` bytes.
pub(crate) fn decode_block<T: FixedLayout>(bytes: &[u8], order: ByteOrder) -> CoreResult<T> {
    if bytes.len() != T::ENCODED_LEN {
        return Err(CoreError::corrupted(format!(
            "block is {} bytes, layout needs {}",
            bytes.len(),
            T::ENCODED_LEN
        )));
    }
    let mut r = LayoutReader::new(bytes, order);
    let value = T::decode(&mut r)?;
    debug_assert_eq!(r.remaining(), 0);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_fields_follow_byte_order() {
        let mut le = LayoutWriter::with_capacity(4, ByteOrder::Little);
        le.put_i32(0x0102_0304);
        assert_eq!(le.into_bytes(), vec![4, 3, 2, 1]);

        let mut be = LayoutWriter::with_capacity(4, ByteOrder::Big);
        be.put_i32(0x0102_0304);
        assert_eq!(be.into_bytes(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn numeric_round_trip_in_both_orders() {
        for order in [ByteOrder::Little, ByteOrder::Big] {
            let mut w = LayoutWriter::with_capacity(32, order);
            w.put_i64(-42);
            w.put_u64(u64::MAX - 1);
            w.put_f32(1.5);
            w.put_f64(-0.25);
            let bytes = w.into_bytes();

            let mut r = LayoutReader::new(&bytes, order);
            assert_eq!(r.get_i64().unwrap(), -42);
            assert_eq!(r.get_u64().unwrap(), u64::MAX - 1);
            assert_eq!(r.get_f32().unwrap(), 1.5);
            assert_eq!(r.get_f64().unwrap(), -0.25);
            assert_eq!(r.remaining(), 0);
        }
    }

    #[test]
    fn strings_are_nul_padded_to_capacity() {
        let mut w = LayoutWriter::with_capacity(8, ByteOrder::Little);
        w.put_str(&BoundedStr::<8>::new("abc"));
        assert_eq!(w.into_bytes(), b"abc\0\0\0\0\0".to_vec());
    }

    #[test]
    fn string_without_terminator_is_corrupted() {
        let mut r = LayoutReader::new(b"abcd", ByteOrder::Little);
        let err = r.get_str::<4>().unwrap_err();
        assert!(matches!(err, CoreError::Corrupted { .. }));
    }

    #[test]
    fn string_with_invalid_utf8_is_decoded_lossily() {
        let mut bytes = [0u8; 16];
        bytes[..3].copy_from_slice(&[b'a', 0xff, b'b']);
        bytes[8..10].copy_from_slice(&[b'x', 0xc3]);

        let mut r = LayoutReader::new(&bytes, ByteOrder::Little);
        assert_eq!(r.get_str::<8>().unwrap(), "a\u{fffd}b");
        assert_eq!(r.get_str::<8>().unwrap(), "x");
    }

    #[test]
    fn bytes_after_terminator_are_ignored() {
        let mut r = LayoutReader::new(b"ab\0z", ByteOrder::Little);
        assert_eq!(r.get_str::<4>().unwrap(), "ab");
    }

    #[test]
    fn count_is_range_checked() {
        let mut w = LayoutWriter::with_capacity(8, ByteOrder::Little);
        w.put_i32(-1);
        w.put_i32(9);
        let bytes = w.into_bytes();

        let mut r = LayoutReader::new(&bytes, ByteOrder::Little);
        assert!(r.get_count(8).is_err());
        assert!(r.get_count(8).is_err());
    }

    #[test]
    fn reading_past_the_block_is_corrupted() {
        let mut r = LayoutReader::new(&[1, 2], ByteOrder::Little);
        assert!(r.get_i32().is_err());
    }

    #[test]
    fn header_flag_conversion() {
        assert_eq!(ByteOrder::from_flag(0), ByteOrder::Little);
        assert_eq!(ByteOrder::from_flag(1), ByteOrder::Big);
        assert_eq!(ByteOrder::from_flag(7), ByteOrder::Big);
        assert_eq!(ByteOrder::Big.as_flag(), 1);
    }
}
