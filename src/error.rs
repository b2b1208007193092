use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    EmptyAlphabet,
    MissingSymbols(Vec<char>),
    PayloadEndsInsideCode(usize),
    PayloadShorterThanBitLength(usize, usize),
    PayloadLengthMismatch(usize, usize),
    MissingPayloadHeader,
    BitLengthOutOfRange(u64),
    DecodedTextTooLarge(usize),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    FailedToReadFile(String, std::io::Error),
    FailedToWriteFile(String, std::io::Error),
    UnableToQueryFileSize(String, std::io::Error),
    SourceFileIsNotValidUtf8(String),
    InvalidTreeFileMagic,
    UnsupportedTreeFileVersion(u8),
    TruncatedTreeFile(&'static str),
    TrailingBytesInTreeFile(usize),
    InvalidSymbolInTreeFile(u32),
    ZeroFrequencyInTreeFile(char),
    DuplicateSymbolInTreeFile(char),
    FrequencyOverflowInTreeFile(char),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyAlphabet => {
                write!(f, "Source text is empty, no Huffman tree can be built")
            }
            Self::MissingSymbols(symbols) => {
                write!(
                    f,
                    "Symbols {:?} are not present in the provided tree",
                    symbols
                )
            }
            Self::PayloadEndsInsideCode(dangling_bits) => {
                write!(
                    f,
                    "Compressed payload ends in the middle of a code word ({} dangling bits)",
                    dangling_bits
                )
            }
            Self::PayloadShorterThanBitLength(available, expected) => {
                write!(
                    f,
                    "Compressed payload holds {} bits, but {} bits were expected",
                    available, expected
                )
            }
            Self::PayloadLengthMismatch(actual, expected) => {
                write!(
                    f,
                    "Compressed payload has {} bytes, header announces {} bytes",
                    actual, expected
                )
            }
            Self::MissingPayloadHeader => {
                write!(f, "Compressed file is too short to contain a header")
            }
            Self::BitLengthOutOfRange(bit_length) => {
                write!(
                    f,
                    "Compressed file announces {} bits, more than this platform can address",
                    bit_length
                )
            }
            Self::DecodedTextTooLarge(symbol_count) => {
                write!(
                    f,
                    "Unable to allocate memory for {} decoded symbols",
                    symbol_count
                )
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::FailedToReadFile(path, error) => {
                write!(f, "Failed to read file '{}': {}", path, error)
            }
            Self::FailedToWriteFile(path, error) => {
                write!(f, "Failed to write file '{}': {}", path, error)
            }
            Self::UnableToQueryFileSize(path, error) => {
                write!(f, "Unable to query size of file '{}': {}", path, error)
            }
            Self::SourceFileIsNotValidUtf8(path) => {
                write!(f, "Source file '{}' is not valid UTF-8 text", path)
            }
            Self::InvalidTreeFileMagic => {
                write!(f, "Tree file does not start with the expected marker")
            }
            Self::UnsupportedTreeFileVersion(version) => {
                write!(f, "Tree file version {} is not supported", version)
            }
            Self::TruncatedTreeFile(field) => {
                write!(f, "Tree file ended while reading '{}'", field)
            }
            Self::TrailingBytesInTreeFile(count) => {
                write!(f, "Tree file has {} unexpected trailing bytes", count)
            }
            Self::InvalidSymbolInTreeFile(value) => {
                write!(
                    f,
                    "Tree file contains {:#x}, which is not a valid character",
                    value
                )
            }
            Self::ZeroFrequencyInTreeFile(symbol) => {
                write!(f, "Tree file assigns frequency 0 to symbol {:?}", symbol)
            }
            Self::DuplicateSymbolInTreeFile(symbol) => {
                write!(f, "Tree file lists symbol {:?} more than once", symbol)
            }
            Self::FrequencyOverflowInTreeFile(symbol) => {
                write!(
                    f,
                    "Frequencies in tree file overflow at symbol {:?}",
                    symbol
                )
            }
        }
    }
}

impl std::error::Error for Error {}
