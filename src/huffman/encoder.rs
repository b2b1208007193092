use std::collections::BTreeSet;

use crate::binary_stream::BitString;

use super::code::CodeTable;
use super::Symbol;

/// Result of replacing every symbol of a text by its code word
pub struct Encoding {
    pub bits: BitString,
    /// Symbols without a code word; they were replaced by the fallback code
    /// and will not survive decoding.
    pub missing_symbols: BTreeSet<Symbol>,
}

impl Encoding {
    pub fn is_lossless(&self) -> bool {
        self.missing_symbols.is_empty()
    }
}

pub struct HuffmanEncoder<'a> {
    codes: &'a CodeTable,
}

impl<'a> HuffmanEncoder<'a> {
    pub fn new(codes: &'a CodeTable) -> Self {
        Self { codes }
    }

    pub fn encode(&self, text: &str) -> Encoding {
        let mut bits = BitString::new();
        let mut missing_symbols = BTreeSet::new();
        for symbol in text.chars() {
            match self.codes.code(symbol) {
                Some(code) => bits.append(code),
                None => {
                    if missing_symbols.insert(symbol) {
                        self.warn_about_missing_symbol(symbol);
                    }
                    if let Some((_, code)) = self.codes.fallback_code() {
                        bits.append(code);
                    }
                }
            }
        }
        Encoding {
            bits,
            missing_symbols,
        }
    }

    fn warn_about_missing_symbol(&self, symbol: Symbol) {
        match self.codes.fallback_code() {
            Some((substitute, _)) => log::warn!(
                "Symbol {:?} is not part of the tree, encoding it as {:?}. Decoding will not restore it.",
                symbol,
                substitute
            ),
            None => log::warn!("Symbol {:?} is not part of the tree, dropping it", symbol),
        }
    }
}

#[cfg(test)]
mod test {
    use super::HuffmanEncoder;
    use crate::huffman::{CodeTable, FrequencyTable, HuffmanTree};

    fn codes_for(text: &str) -> CodeTable {
        let tree = HuffmanTree::new(&FrequencyTable::from_text(text)).expect("tree");
        CodeTable::from_tree(&tree)
    }

    #[test]
    fn test_encode_concatenates_codes_in_source_order() {
        let codes = codes_for("aaaa bbbb cccc\n");
        let encoding = HuffmanEncoder::new(&codes).encode("ab c\n");
        assert_eq!(encoding.bits.to_string(), "011000111000");
        assert!(encoding.is_lossless());
    }

    #[test]
    fn test_encode_single_symbol_text() {
        let codes = codes_for("aaaa");
        let encoding = HuffmanEncoder::new(&codes).encode("aaaa");
        assert_eq!(encoding.bits.to_string(), "1111");
    }

    #[test]
    fn test_missing_symbol_is_replaced_by_space_code() {
        let codes = codes_for("aaaa bbbb cccc\n");
        let encoding = HuffmanEncoder::new(&codes).encode("axa");
        assert_eq!(encoding.bits.to_string(), "0100101");
        assert!(!encoding.is_lossless());
        assert_eq!(encoding.missing_symbols.into_iter().collect::<Vec<_>>(), vec!['x']);
    }

    #[test]
    fn test_missing_symbol_without_space_uses_smallest_symbol() {
        // b:0, a:1, fallback is 'a'
        let codes = codes_for("aab");
        let encoding = HuffmanEncoder::new(&codes).encode("ab!?");
        assert_eq!(encoding.bits.to_string(), "1011");
        assert_eq!(
            encoding.missing_symbols.into_iter().collect::<Vec<_>>(),
            vec!['!', '?']
        );
    }

    #[test]
    fn test_missing_symbols_are_reported_once() {
        let codes = codes_for("ab");
        let encoding = HuffmanEncoder::new(&codes).encode("zzzz");
        assert_eq!(encoding.bits.len(), 4);
        assert_eq!(encoding.missing_symbols.len(), 1);
    }
}
