use std::fmt;

/// Sizes after compressing a file, all in bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompressionReport {
    pub original_size: u64,
    pub payload_size: u64,
    pub tree_size: u64,
}

impl CompressionReport {
    /// The tree file is needed for decompression and counts as compressed data
    pub fn compressed_size(&self) -> u64 {
        self.payload_size + self.tree_size
    }

    pub fn percentage_saved(&self) -> f64 {
        100.0 - (self.compressed_size() as f64 / self.original_size as f64) * 100.0
    }
}

impl fmt::Display for CompressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original file size: {}", self.original_size)?;
        writeln!(f, "Compressed file size: {}", self.compressed_size())?;
        write!(f, "Compressed file {:.2}%", self.percentage_saved())
    }
}

/// Sizes after decompressing a file, all in bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecompressionReport {
    pub compressed_size: u64,
    pub decompressed_size: u64,
}

impl DecompressionReport {
    pub fn size_difference_percentage(&self, original_size: u64) -> f64 {
        (original_size.abs_diff(self.decompressed_size) as f64 / original_size as f64) * 100.0
    }
}

impl fmt::Display for DecompressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Compressed file size: {}", self.compressed_size)?;
        write!(f, "Decompressed file size: {}", self.decompressed_size)
    }
}

#[cfg(test)]
mod test {
    use super::{CompressionReport, DecompressionReport};

    #[test]
    fn test_percentage_saved() {
        let report = CompressionReport {
            original_size: 200,
            payload_size: 40,
            tree_size: 10,
        };
        assert_eq!(report.compressed_size(), 50);
        assert!((report.percentage_saved() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_percentage_when_output_grows() {
        let report = CompressionReport {
            original_size: 16,
            payload_size: 13,
            tree_size: 69,
        };
        assert!(report.percentage_saved() < 0.0);
    }

    #[test]
    fn test_compression_report_display() {
        let report = CompressionReport {
            original_size: 1000,
            payload_size: 500,
            tree_size: 21,
        };
        assert_eq!(
            report.to_string(),
            "Original file size: 1000\nCompressed file size: 521\nCompressed file 47.90%"
        );
    }

    #[test]
    fn test_size_difference_percentage() {
        let report = DecompressionReport {
            compressed_size: 10,
            decompressed_size: 90,
        };
        assert!((report.size_difference_percentage(100) - 10.0).abs() < 1e-9);
        assert!((report.size_difference_percentage(90)).abs() < 1e-9);
    }
}
