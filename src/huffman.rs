pub mod code;
pub mod decoder;
pub mod encoder;
pub mod frequency;
pub mod tree;

pub use code::CodeTable;
pub use decoder::HuffmanDecoder;
pub use encoder::{Encoding, HuffmanEncoder};
pub use frequency::FrequencyTable;
pub use tree::HuffmanTree;

/// Unit of the source alphabet
pub type Symbol = char;
