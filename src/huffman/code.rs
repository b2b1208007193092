use std::collections::BTreeMap;
use std::fmt;

use crate::binary_stream::BitString;

use super::tree::{HuffmanTree, Node, NodeKind};
use super::Symbol;

/// Code word of every symbol in a tree: `0` for each step to the left,
/// `1` for each step to the right.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, BitString>,
}

fn fill_table(
    table: &mut BTreeMap<Symbol, BitString>,
    node: &Node,
    tree: &HuffmanTree,
    current_pattern: BitString,
) {
    match node.kind() {
        NodeKind::Leaf { symbol } => {
            table.insert(symbol, current_pattern);
        }
        NodeKind::Inner { left, right } => {
            let mut left_pattern = current_pattern.clone();
            left_pattern.push(false);
            let mut right_pattern = current_pattern;
            right_pattern.push(true);
            fill_table(table, tree.node(left), tree, left_pattern);
            fill_table(table, tree.node(right), tree, right_pattern);
        }
    }
}

impl CodeTable {
    pub fn from_tree(tree: &HuffmanTree) -> CodeTable {
        let mut codes = BTreeMap::new();
        match tree.root().kind() {
            // an empty code could not be written, a lone symbol gets "1"
            NodeKind::Leaf { symbol } => {
                codes.insert(symbol, BitString::from_iter([true]));
            }
            NodeKind::Inner { .. } => fill_table(&mut codes, tree.root(), tree, BitString::new()),
        }
        CodeTable { codes }
    }

    pub fn code(&self, symbol: Symbol) -> Option<&BitString> {
        self.codes.get(&symbol)
    }

    /// Code used in place of symbols the table does not know: the code of
    /// the space character if present, otherwise the code of the smallest
    /// symbol.
    pub fn fallback_code(&self) -> Option<(Symbol, &BitString)> {
        self.codes
            .get_key_value(&' ')
            .or_else(|| self.codes.first_key_value())
            .map(|(&symbol, code)| (symbol, code))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &BitString)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code))
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self.iter() {
            writeln!(f, "{:?}: {}", symbol, code)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::CodeTable;
    use crate::huffman::{FrequencyTable, HuffmanTree};

    fn code_table_for(text: &str) -> CodeTable {
        let tree = HuffmanTree::new(&FrequencyTable::from_text(text)).expect("tree");
        CodeTable::from_tree(&tree)
    }

    fn code_string(table: &CodeTable, symbol: char) -> String {
        table.code(symbol).expect("symbol has a code").to_string()
    }

    #[test]
    fn test_single_symbol_gets_code_one() {
        let table = code_table_for("aaaa");
        assert_eq!(table.len(), 1);
        assert_eq!(code_string(&table, 'a'), "1");
    }

    #[test]
    fn test_codes_for_known_tree() {
        // ' ':2, '\n':1, a:4, b:4, c:4 (merged FIFO on equal weights)
        // ('\n' + ' ') = 3, (3 + a) = 7, (b + c) = 8, (7 + 8) = 15
        let table = code_table_for("aaaa bbbb cccc\n");
        assert_eq!(code_string(&table, '\n'), "000");
        assert_eq!(code_string(&table, ' '), "001");
        assert_eq!(code_string(&table, 'a'), "01");
        assert_eq!(code_string(&table, 'b'), "10");
        assert_eq!(code_string(&table, 'c'), "11");
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let table = code_table_for("the quick brown fox jumps over the lazy dog, again and again");
        for (symbol, code) in table.iter() {
            assert!(!code.is_empty());
            for (other_symbol, other_code) in table.iter() {
                if symbol != other_symbol {
                    assert!(
                        !other_code.starts_with(code),
                        "code of {:?} is a prefix of the code of {:?}",
                        symbol,
                        other_symbol
                    );
                }
            }
        }
    }

    #[test]
    fn test_codes_are_deterministic() {
        let text = "mississippi river banks";
        let table = FrequencyTable::from_text(text);
        let first = CodeTable::from_tree(&HuffmanTree::new(&table).expect("tree"));
        let second = CodeTable::from_tree(&HuffmanTree::new(&table).expect("tree"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_fallback_prefers_space() {
        let table = code_table_for("aaaa bbbb cccc\n");
        let (symbol, code) = table.fallback_code().expect("fallback");
        assert_eq!(symbol, ' ');
        assert_eq!(code.to_string(), "001");
    }

    #[test]
    fn test_fallback_without_space_uses_smallest_symbol() {
        let table = code_table_for("zzzyx");
        let (symbol, _) = table.fallback_code().expect("fallback");
        assert_eq!(symbol, 'x');
    }

    #[test]
    fn test_display_lists_every_symbol() {
        let table = code_table_for("aab");
        assert_eq!(table.to_string(), "'a': 1\n'b': 0\n");
    }
}
