use std::fmt;

use crate::error::Error;

/// Sequence of individual bits, e.g. a Huffman code or an encoded text
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn append(&mut self, other: &BitString) {
        self.bits.extend_from_slice(&other.bits);
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn starts_with(&self, prefix: &BitString) -> bool {
        self.bits.starts_with(&prefix.bits)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in self.bits.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// State for writing individual bits into a byte buffer
pub struct BitWriter {
    /// completely written bytes
    bytes: Vec<u8>,
    /// buffer of individual bits not yet written
    buffer: u8,
    /// how many bits are waiting to be written
    buffer_space_used: u8,
}

impl BitWriter {
    pub fn with_capacity(bit_count: usize) -> BitWriter {
        BitWriter {
            bytes: Vec::with_capacity(bit_count.div_ceil(8)),
            buffer: 0,
            buffer_space_used: 0,
        }
    }

    /// write a single bit, most significant bit of each byte first
    pub fn write_bit(&mut self, bit: bool) {
        if bit {
            self.buffer |= 0b10000000_u8 >> self.buffer_space_used;
        }
        self.buffer_space_used += 1;
        if self.buffer_space_used == 8 {
            self.bytes.push(self.buffer);
            self.buffer_space_used = 0;
            self.buffer = 0; // depended upon in into_bytes()
        }
    }

    pub fn write_bits(&mut self, bits: &BitString) {
        for bit in bits.iter() {
            self.write_bit(bit);
        }
    }

    /// Returns all written bytes.
    ///
    /// If there are non-byte-aligned bits still in the buffer,
    /// they are appended with 0 padding to the next byte.
    pub fn into_bytes(mut self) -> Vec<u8> {
        if self.buffer_space_used != 0 {
            self.bytes.push(self.buffer);
        }
        self.bytes
    }
}

/// State for reading individual bits from a byte slice, MSB first
pub struct BitReader<'a> {
    bytes: &'a [u8],
    /// index of the next bit to be read
    position: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(bytes: &'a [u8]) -> BitReader<'a> {
        BitReader { bytes, position: 0 }
    }

    pub fn remaining_bits(&self) -> usize {
        self.bytes.len() * 8 - self.position
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        let byte = self.bytes.get(self.position / 8)?;
        let bit = byte & (0b10000000_u8 >> (self.position % 8)) != 0;
        self.position += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining_bits();
        (remaining, Some(remaining))
    }
}

/// Packs bits into bytes, bit 0 of the string becomes bit 7 of the first
/// byte. The last byte is padded with 0 bits.
pub fn pack(bits: &BitString) -> Vec<u8> {
    let mut writer = BitWriter::with_capacity(bits.len());
    writer.write_bits(bits);
    writer.into_bytes()
}

/// Reverses [`pack`], keeping exactly `bit_length` bits.
pub fn unpack(bytes: &[u8], bit_length: usize) -> crate::Result<BitString> {
    let reader = BitReader::new(bytes);
    let available = reader.remaining_bits();
    if available < bit_length {
        return Err(Error::PayloadShorterThanBitLength(available, bit_length));
    }
    Ok(reader.take(bit_length).collect())
}
