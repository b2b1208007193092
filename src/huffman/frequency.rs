use std::collections::btree_map::{BTreeMap, Entry};

use crate::error::Error;

use super::Symbol;

const TREE_FILE_MAGIC: &[u8; 4] = b"HUFT";
const TREE_FILE_VERSION: u8 = 1;
const ENTRY_SIZE: usize = 4 + 8;

/// Number of occurrences of every symbol of a text.
///
/// Iteration is in ascending symbol order, which keeps tree construction
/// deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    frequencies: BTreeMap<Symbol, usize>,
}

impl FrequencyTable {
    pub fn from_text(text: &str) -> Self {
        let mut frequencies = BTreeMap::new();
        for symbol in text.chars() {
            *frequencies.entry(symbol).or_insert(0) += 1;
        }
        Self { frequencies }
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    pub fn frequency(&self, symbol: Symbol) -> Option<usize> {
        self.frequencies.get(&symbol).copied()
    }

    /// Number of symbols in the text the table was counted from
    pub fn total(&self) -> usize {
        self.frequencies.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, usize)> + '_ {
        self.frequencies.iter().map(|(&symbol, &frequency)| (symbol, frequency))
    }

    /// Tree file layout, integers little endian:
    ///
    /// | field   | size                      |
    /// |---------|---------------------------|
    /// | magic   | 4 bytes, `HUFT`           |
    /// | version | u8                        |
    /// | count   | u32                       |
    /// | entries | count x (u32 char, u64 n) |
    pub fn serialize(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(9 + self.len() * ENTRY_SIZE);
        bytes.extend_from_slice(TREE_FILE_MAGIC);
        bytes.push(TREE_FILE_VERSION);
        bytes.extend_from_slice(&(self.len() as u32).to_le_bytes());
        for (symbol, frequency) in self.iter() {
            bytes.extend_from_slice(&u32::from(symbol).to_le_bytes());
            bytes.extend_from_slice(&(frequency as u64).to_le_bytes());
        }
        bytes
    }

    pub fn deserialize(bytes: &[u8]) -> crate::Result<Self> {
        let mut reader = FieldReader { bytes };
        if reader.take::<4>("magic")? != *TREE_FILE_MAGIC {
            return Err(Error::InvalidTreeFileMagic);
        }
        let [version] = reader.take::<1>("version")?;
        if version != TREE_FILE_VERSION {
            return Err(Error::UnsupportedTreeFileVersion(version));
        }
        let count = u32::from_le_bytes(reader.take("count")?);

        let mut frequencies = BTreeMap::new();
        // the root of the tree carries the sum of all frequencies
        let mut total: usize = 0;
        for _ in 0..count {
            let value = u32::from_le_bytes(reader.take("symbol")?);
            let symbol = char::from_u32(value).ok_or(Error::InvalidSymbolInTreeFile(value))?;
            let frequency = usize::try_from(u64::from_le_bytes(reader.take("frequency")?))
                .map_err(|_| Error::FrequencyOverflowInTreeFile(symbol))?;
            if frequency == 0 {
                return Err(Error::ZeroFrequencyInTreeFile(symbol));
            }
            total = total
                .checked_add(frequency)
                .ok_or(Error::FrequencyOverflowInTreeFile(symbol))?;
            match frequencies.entry(symbol) {
                Entry::Occupied(_) => return Err(Error::DuplicateSymbolInTreeFile(symbol)),
                Entry::Vacant(entry) => {
                    entry.insert(frequency);
                }
            }
        }
        if !reader.bytes.is_empty() {
            return Err(Error::TrailingBytesInTreeFile(reader.bytes.len()));
        }
        Ok(Self { frequencies })
    }
}

impl FromIterator<(Symbol, usize)> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = (Symbol, usize)>>(iter: T) -> Self {
        Self {
            frequencies: iter.into_iter().collect(),
        }
    }
}

struct FieldReader<'a> {
    bytes: &'a [u8],
}

impl FieldReader<'_> {
    fn take<const N: usize>(&mut self, field: &'static str) -> crate::Result<[u8; N]> {
        if self.bytes.len() < N {
            return Err(Error::TruncatedTreeFile(field));
        }
        let (head, tail) = self.bytes.split_at(N);
        self.bytes = tail;
        let mut field_bytes = [0; N];
        field_bytes.copy_from_slice(head);
        Ok(field_bytes)
    }
}
