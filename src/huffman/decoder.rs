use crate::binary_stream::BitString;
use crate::error::Error;

use super::tree::{HuffmanTree, NodeKind};

pub struct HuffmanDecoder<'a> {
    tree: &'a HuffmanTree,
}

impl<'a> HuffmanDecoder<'a> {
    pub fn new(tree: &'a HuffmanTree) -> Self {
        Self { tree }
    }

    /// Walks the tree once per bit, `0` to the left and `1` to the right,
    /// emitting a symbol whenever a leaf is reached.
    ///
    /// A tree made of a single leaf carries no information in the bits, the
    /// symbol is repeated as often as it was counted.
    pub fn decode(&self, bits: &BitString) -> crate::Result<String> {
        let root = self.tree.root();
        if let NodeKind::Leaf { symbol } = root.kind() {
            return Self::repeat_symbol(symbol, root.frequency());
        }

        // at most one symbol per bit
        let mut decoded = String::with_capacity(bits.len());
        let mut current = root;
        let mut bits_since_last_symbol = 0;
        for take_right in bits.iter() {
            let NodeKind::Inner { left, right } = current.kind() else {
                unreachable!("walk is reset at every leaf");
            };
            current = self.tree.node(if take_right { right } else { left });
            bits_since_last_symbol += 1;
            if let NodeKind::Leaf { symbol } = current.kind() {
                decoded.push(symbol);
                current = root;
                bits_since_last_symbol = 0;
            }
        }
        if bits_since_last_symbol > 0 {
            return Err(Error::PayloadEndsInsideCode(bits_since_last_symbol));
        }
        Ok(decoded)
    }

    // the count comes from the tree file, allocation failures are reported
    fn repeat_symbol(symbol: char, count: usize) -> crate::Result<String> {
        let mut decoded = String::new();
        count
            .checked_mul(symbol.len_utf8())
            .and_then(|size| decoded.try_reserve_exact(size).ok())
            .ok_or(Error::DecodedTextTooLarge(count))?;
        decoded.extend(std::iter::repeat(symbol).take(count));
        Ok(decoded)
    }
}
