use std::env::args_os;
use std::process::ExitCode;

use huffman_file_compressor::{execute, CLIParser, Operation};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    let operation_name = match arguments.operation() {
        Operation::CompressOwnTree { .. } | Operation::CompressForeignTree { .. } => "Compression",
        Operation::Decompress { .. } => "Decompression",
    };
    match execute(&arguments) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} failed because of: {}", operation_name, e);
            ExitCode::FAILURE
        }
    }
}
