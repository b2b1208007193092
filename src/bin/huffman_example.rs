use huffman_file_compressor::binary_stream::{pack, unpack};
use huffman_file_compressor::huffman::{
    CodeTable, FrequencyTable, HuffmanDecoder, HuffmanEncoder, HuffmanTree,
};

fn main() -> huffman_file_compressor::Result<()> {
    let text = "aaaa bbbb cccc\n";

    let frequencies = FrequencyTable::from_text(text);
    println!("symbol frequencies");
    for (symbol, frequency) in frequencies.iter() {
        println!("{:?}: {}", symbol, frequency);
    }

    let tree = HuffmanTree::new(&frequencies)?;
    let codes = CodeTable::from_tree(&tree);
    println!("code table\n{}", codes);

    let encoding = HuffmanEncoder::new(&codes).encode(text);
    let packed = pack(&encoding.bits);
    println!("encoded bits\n{}", encoding.bits);
    println!("packed bytes\n{:02X?}", packed);

    let bits = unpack(&packed, encoding.bits.len())?;
    let decoded = HuffmanDecoder::new(&tree).decode(&bits)?;
    println!("decoded text\n{:?}", decoded);
    Ok(())
}
