use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd, Reverse};
use std::collections::BinaryHeap;

use crate::error::Error;

use super::{FrequencyTable, Symbol};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Leaf { symbol: Symbol },
    Inner { left: usize, right: usize },
}

#[derive(Clone, Copy, Debug)]
pub struct Node {
    frequency: usize,
    index: usize,
    kind: NodeKind,
}

impl Node {
    pub fn frequency(&self) -> usize {
        self.frequency
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }
}

/// Huffman tree stored as an arena of nodes, children are referenced by
/// their index.
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root_index: usize,
}

// equal frequencies are ordered by creation, which makes the merge order
// first in, first out
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            .then(self.index.cmp(&other.index))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

impl HuffmanTree {
    pub fn new(frequencies: &FrequencyTable) -> crate::Result<HuffmanTree> {
        let mut heap = BinaryHeap::with_capacity(frequencies.len());
        let mut nodes: Vec<Node> = Vec::with_capacity(frequencies.len() * 2);

        // create the initial nodeset, in ascending symbol order
        for (symbol, frequency) in frequencies.iter() {
            let node = Node {
                frequency,
                index: nodes.len(),
                kind: NodeKind::Leaf { symbol },
            };
            heap.push(Reverse(node));
            nodes.push(node);
        }
        // merge nodes until one is left, no sum exceeds the table total
        while heap.len() > 1 {
            let (Some(Reverse(left)), Some(Reverse(right))) = (heap.pop(), heap.pop()) else {
                break;
            };
            let node = Node {
                frequency: left.frequency + right.frequency,
                index: nodes.len(),
                kind: NodeKind::Inner {
                    left: left.index,
                    right: right.index,
                },
            };
            heap.push(Reverse(node));
            nodes.push(node);
        }
        // the last merged node is the root, a lone leaf is its own root
        let root_index = nodes.len().checked_sub(1).ok_or(Error::EmptyAlphabet)?;
        log::debug!(
            "Built Huffman tree with {} leaves and {} nodes",
            frequencies.len(),
            nodes.len()
        );
        Ok(HuffmanTree { nodes, root_index })
    }

    pub fn root(&self) -> &Node {
        &self.nodes[self.root_index]
    }

    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.len().div_ceil(2)
    }

    /// Length of the longest path from the root to a leaf
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut node_index_stack = vec![(self.root_index, 0)];
        while let Some((index, depth)) = node_index_stack.pop() {
            match self.nodes[index].kind {
                NodeKind::Leaf { .. } => max_depth = max_depth.max(depth),
                NodeKind::Inner { left, right } => {
                    node_index_stack.push((left, depth + 1));
                    node_index_stack.push((right, depth + 1));
                }
            }
        }
        max_depth
    }
}

#[cfg(test)]
mod test {
    use super::{HuffmanTree, NodeKind};
    use crate::error::Error;
    use crate::huffman::FrequencyTable;

    fn symbol_depths(tree: &HuffmanTree) -> Vec<(char, usize)> {
        let mut depths = vec![];
        let mut node_index_stack = vec![(tree.root_index, 0)];
        while let Some((index, depth)) = node_index_stack.pop() {
            match tree.node(index).kind() {
                NodeKind::Leaf { symbol } => depths.push((symbol, depth)),
                NodeKind::Inner { left, right } => {
                    node_index_stack.push((left, depth + 1));
                    node_index_stack.push((right, depth + 1));
                }
            }
        }
        depths.sort();
        depths
    }

    #[test]
    fn test_empty_table_is_rejected() {
        let result = HuffmanTree::new(&FrequencyTable::default());
        assert!(matches!(result, Err(Error::EmptyAlphabet)));
    }

    #[test]
    fn test_single_symbol_tree_is_a_leaf() {
        let tree = HuffmanTree::new(&FrequencyTable::from_text("aaaa")).expect("tree");
        assert_eq!(tree.root().kind(), NodeKind::Leaf { symbol: 'a' });
        assert_eq!(tree.root().frequency(), 4);
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn test_root_frequency_is_sum_of_all_frequencies() {
        let table = FrequencyTable::from_text("abracadabra");
        let tree = HuffmanTree::new(&table).expect("tree");
        assert_eq!(tree.root().frequency(), 11);
        assert_eq!(tree.leaf_count(), 5);
    }

    #[test]
    fn test_inner_node_frequency_is_sum_of_children() {
        let table: FrequencyTable = [('a', 17), ('b', 3), ('c', 12), ('d', 3), ('e', 18)]
            .into_iter()
            .collect();
        let tree = HuffmanTree::new(&table).expect("tree");
        for node in tree.nodes.iter() {
            if let NodeKind::Inner { left, right } = node.kind() {
                assert_eq!(
                    node.frequency(),
                    tree.node(left).frequency() + tree.node(right).frequency()
                );
            }
        }
    }

    #[test]
    fn test_equal_frequencies_are_merged_in_insertion_order() {
        // a, b, c, d all have weight 1: (a,b) and (c,d) are merged first
        let table = FrequencyTable::from_text("abcd");
        let tree = HuffmanTree::new(&table).expect("tree");
        let NodeKind::Inner { left, right } = tree.root().kind() else {
            panic!("root must be an inner node");
        };
        let NodeKind::Inner { left: a, right: b } = tree.node(left).kind() else {
            panic!("left subtree must be an inner node");
        };
        let NodeKind::Inner { left: c, right: d } = tree.node(right).kind() else {
            panic!("right subtree must be an inner node");
        };
        assert_eq!(tree.node(a).kind(), NodeKind::Leaf { symbol: 'a' });
        assert_eq!(tree.node(b).kind(), NodeKind::Leaf { symbol: 'b' });
        assert_eq!(tree.node(c).kind(), NodeKind::Leaf { symbol: 'c' });
        assert_eq!(tree.node(d).kind(), NodeKind::Leaf { symbol: 'd' });
    }

    #[test]
    fn test_higher_frequent_symbols_have_less_or_equal_depth() {
        let table: FrequencyTable = [
            ('a', 1),
            ('b', 2),
            ('c', 4),
            ('d', 8),
            ('e', 16),
            ('f', 32),
        ]
        .into_iter()
        .collect();
        let tree = HuffmanTree::new(&table).expect("tree");
        let depths = symbol_depths(&tree);
        for window in depths.windows(2) {
            assert!(window[0].1 >= window[1].1, "depths: {:?}", depths);
        }
        assert_eq!(tree.depth(), 5);
    }
}
