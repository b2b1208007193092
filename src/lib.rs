use std::{
    fs::{self, File, OpenOptions},
    io::{Read, Write},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
use error::Error;
use huffman::{CodeTable, FrequencyTable, HuffmanDecoder, HuffmanEncoder, HuffmanTree};
pub use report::{CompressionReport, DecompressionReport};

pub mod binary_stream;
mod cli;
pub mod error;
pub mod huffman;
mod logger;
pub mod payload;
mod report;

pub type Result<T> = std::result::Result<T, error::Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    CompressOwnTree {
        source_file: PathBuf,
        compressed_file: PathBuf,
        tree_file: PathBuf,
    },
    CompressForeignTree {
        source_file: PathBuf,
        compressed_file: PathBuf,
        tree_file: PathBuf,
        strict: bool,
    },
    Decompress {
        compressed_file: PathBuf,
        tree_file: PathBuf,
        output_file: PathBuf,
        original_file: Option<PathBuf>,
    },
}

pub struct Arguments {
    operation: Operation,
}

impl Arguments {
    pub fn operation(&self) -> &Operation {
        &self.operation
    }
}

pub enum Report {
    Compression(CompressionReport),
    Decompression {
        report: DecompressionReport,
        original_size: Option<u64>,
    },
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compression(report) => write!(f, "{}", report),
            Self::Decompression {
                report,
                original_size: None,
            } => write!(f, "{}", report),
            Self::Decompression {
                report,
                original_size: Some(original_size),
            } => {
                writeln!(f, "Original file size: {}", original_size)?;
                writeln!(f, "{}", report)?;
                write!(
                    f,
                    "File size difference: {:.2}%",
                    report.size_difference_percentage(*original_size)
                )
            }
        }
    }
}

fn path_string(file_path: &Path) -> String {
    file_path.display().to_string()
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path)
        .map_err(|e| Error::UnableToOpenInputFileForReading(path_string(file_path), e))
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| Error::UnableToOpenOutputFileForWriting(path_string(file_path), e))
}

fn read_file(file_path: &Path) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    open_input_file(file_path)?
        .read_to_end(&mut bytes)
        .map_err(|e| Error::FailedToReadFile(path_string(file_path), e))?;
    Ok(bytes)
}

fn read_text_file(file_path: &Path) -> Result<String> {
    String::from_utf8(read_file(file_path)?)
        .map_err(|_| Error::SourceFileIsNotValidUtf8(path_string(file_path)))
}

fn write_file(file_path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = open_output_file(file_path)?;
    file.write_all(bytes)
        .and_then(|_| file.flush())
        .map_err(|e| Error::FailedToWriteFile(path_string(file_path), e))
}

fn read_tree_file(tree_file: &Path) -> Result<FrequencyTable> {
    let frequencies = FrequencyTable::deserialize(&read_file(tree_file)?)?;
    log::info!(
        "Loaded tree '{}' with {} symbols counted {} times",
        tree_file.display(),
        frequencies.len(),
        frequencies.total()
    );
    Ok(frequencies)
}

/// Size of a file in bytes
pub fn file_size(file_path: &Path) -> Result<u64> {
    fs::metadata(file_path)
        .map(|metadata| metadata.len())
        .map_err(|e| Error::UnableToQueryFileSize(path_string(file_path), e))
}

fn encode_text(text: &str, tree: &HuffmanTree, frequencies: &FrequencyTable) -> huffman::Encoding {
    let codes = CodeTable::from_tree(tree);
    logger::log_code_table(frequencies, &codes);
    let encoding = HuffmanEncoder::new(&codes).encode(text);
    log::debug!(
        "Encoded {} symbols into {} bits, tree with {} leaves and depth {}",
        text.chars().count(),
        encoding.bits.len(),
        tree.leaf_count(),
        tree.depth()
    );
    encoding
}

fn compression_report(
    source_file: &Path,
    compressed_file: &Path,
    tree_file: &Path,
) -> Result<CompressionReport> {
    Ok(CompressionReport {
        original_size: file_size(source_file)?,
        payload_size: file_size(compressed_file)?,
        tree_size: file_size(tree_file)?,
    })
}

/// Compresses `source_file` with a tree built from its own symbol
/// frequencies and stores the frequency table in `tree_file`.
pub fn compress_own_tree(
    source_file: &Path,
    compressed_file: &Path,
    tree_file: &Path,
) -> Result<CompressionReport> {
    log::info!(
        "Compressing '{}' into '{}' with its own tree '{}'",
        source_file.display(),
        compressed_file.display(),
        tree_file.display()
    );
    let text = read_text_file(source_file)?;
    let frequencies = FrequencyTable::from_text(&text);
    let tree = HuffmanTree::new(&frequencies)?;
    let encoding = encode_text(&text, &tree, &frequencies);
    // the payload is useless without its tree
    write_file(tree_file, &frequencies.serialize())?;
    write_file(compressed_file, &payload::to_bytes(&encoding.bits))?;
    compression_report(source_file, compressed_file, tree_file)
}

/// Compresses `source_file` with the tree stored in `tree_file`.
///
/// Symbols the tree does not know are replaced by a fallback code and
/// reported as warnings, or rejected with [`Error::MissingSymbols`] if
/// `strict` is set.
pub fn compress_foreign_tree(
    source_file: &Path,
    compressed_file: &Path,
    tree_file: &Path,
    strict: bool,
) -> Result<CompressionReport> {
    log::info!(
        "Compressing '{}' into '{}' with existing tree '{}'",
        source_file.display(),
        compressed_file.display(),
        tree_file.display()
    );
    let text = read_text_file(source_file)?;
    if text.is_empty() {
        return Err(Error::EmptyAlphabet);
    }
    let frequencies = read_tree_file(tree_file)?;
    let tree = HuffmanTree::new(&frequencies)?;
    let encoding = encode_text(&text, &tree, &frequencies);
    if strict && !encoding.is_lossless() {
        return Err(Error::MissingSymbols(
            encoding.missing_symbols.into_iter().collect(),
        ));
    }
    write_file(compressed_file, &payload::to_bytes(&encoding.bits))?;
    compression_report(source_file, compressed_file, tree_file)
}

/// Restores the text of `compressed_file` with the tree stored in
/// `tree_file` and writes it to `output_file`.
pub fn decompress(
    compressed_file: &Path,
    tree_file: &Path,
    output_file: &Path,
) -> Result<DecompressionReport> {
    log::info!(
        "Decompressing '{}' with tree '{}' into '{}'",
        compressed_file.display(),
        tree_file.display(),
        output_file.display()
    );
    let frequencies = read_tree_file(tree_file)?;
    let tree = HuffmanTree::new(&frequencies)?;
    let bits = payload::from_bytes(&read_file(compressed_file)?)?;
    let text = HuffmanDecoder::new(&tree).decode(&bits)?;
    log::debug!("Decoded {} bits into {} symbols", bits.len(), text.chars().count());
    write_file(output_file, text.as_bytes())?;
    Ok(DecompressionReport {
        compressed_size: file_size(compressed_file)?,
        decompressed_size: file_size(output_file)?,
    })
}

pub fn execute(arguments: &Arguments) -> Result<Report> {
    match &arguments.operation {
        Operation::CompressOwnTree {
            source_file,
            compressed_file,
            tree_file,
        } => compress_own_tree(source_file, compressed_file, tree_file).map(Report::Compression),
        Operation::CompressForeignTree {
            source_file,
            compressed_file,
            tree_file,
            strict,
        } => compress_foreign_tree(source_file, compressed_file, tree_file, *strict)
            .map(Report::Compression),
        Operation::Decompress {
            compressed_file,
            tree_file,
            output_file,
            original_file,
        } => {
            let report = decompress(compressed_file, tree_file, output_file)?;
            let original_size = original_file.as_deref().map(file_size).transpose()?;
            Ok(Report::Decompression {
                report,
                original_size,
            })
        }
    }
}
