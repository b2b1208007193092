use crate::{Arguments, Operation};
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

const COMPRESS_COMMAND: &str = "compress";
const COMPRESS_WITH_TREE_COMMAND: &str = "compress-with-tree";
const DECOMPRESS_COMMAND: &str = "decompress";

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_subcommands(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_subcommands(command: Command) -> Command {
        command
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommand(Self::create_compress_command())
            .subcommand(Self::create_compress_with_tree_command())
            .subcommand(Self::create_decompress_command())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_compress_command() -> Command {
        let command = Command::new(COMPRESS_COMMAND)
            .about("Compress a text file, creating its own tree");
        let command = Self::register_source_file_argument(command);
        let command = Self::register_compressed_file_argument(command);
        command.arg(Self::create_tree_file_argument("Path to the tree file to create"))
    }

    fn create_compress_with_tree_command() -> Command {
        let command = Command::new(COMPRESS_WITH_TREE_COMMAND)
            .about("Compress a text file, using the tree of another file");
        let command = Self::register_source_file_argument(command);
        let command = Self::register_compressed_file_argument(command);
        let command =
            command.arg(Self::create_tree_file_argument("Path to an existing tree file"));
        Self::register_strict_argument(command)
    }

    fn create_decompress_command() -> Command {
        let command = Command::new(DECOMPRESS_COMMAND).about("Decompress a compressed file");
        let command = command.arg(
            Self::create_compressed_file_argument().help("Path to the compressed input file"),
        );
        let command =
            command.arg(Self::create_tree_file_argument("Path to the tree file to use"));
        let command = Self::register_output_file_argument(command);
        Self::register_original_file_argument(command)
    }

    fn register_source_file_argument(command: Command) -> Command {
        command.arg(Self::create_source_file_argument())
    }

    fn register_compressed_file_argument(command: Command) -> Command {
        command.arg(Self::create_compressed_file_argument())
    }

    fn register_output_file_argument(command: Command) -> Command {
        command.arg(Self::create_output_file_argument())
    }

    fn register_strict_argument(command: Command) -> Command {
        command.arg(Self::create_strict_argument())
    }

    fn register_original_file_argument(command: Command) -> Command {
        command.arg(Self::create_original_file_argument())
    }

    fn create_source_file_argument() -> Arg {
        Arg::new("source_file")
            .help("Path to the text file to compress")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_compressed_file_argument() -> Arg {
        Arg::new("compressed_file")
            .help("Path to the compressed output file")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_tree_file_argument(help: &'static str) -> Arg {
        Arg::new("tree_file")
            .help(help)
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_output_file_argument() -> Arg {
        Arg::new("output_file")
            .help("Path to the decompressed text file")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_strict_argument() -> Arg {
        arg!(strict: -s --strict "Fail instead of substituting symbols missing from the tree")
            .action(ArgAction::SetTrue)
    }

    fn create_original_file_argument() -> Arg {
        arg!(original_file: -o --original <FILE> "Original file to compare the size with")
            .required(false)
            .value_parser(value_parser!(PathBuf))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        let operation = match matches.subcommand() {
            Some((COMPRESS_COMMAND, matches)) => Operation::CompressOwnTree {
                source_file: Self::extract_path_argument(matches, "source_file"),
                compressed_file: Self::extract_path_argument(matches, "compressed_file"),
                tree_file: Self::extract_path_argument(matches, "tree_file"),
            },
            Some((COMPRESS_WITH_TREE_COMMAND, matches)) => Operation::CompressForeignTree {
                source_file: Self::extract_path_argument(matches, "source_file"),
                compressed_file: Self::extract_path_argument(matches, "compressed_file"),
                tree_file: Self::extract_path_argument(matches, "tree_file"),
                strict: Self::extract_strict_argument(matches),
            },
            Some((DECOMPRESS_COMMAND, matches)) => Operation::Decompress {
                compressed_file: Self::extract_path_argument(matches, "compressed_file"),
                tree_file: Self::extract_path_argument(matches, "tree_file"),
                output_file: Self::extract_path_argument(matches, "output_file"),
                original_file: Self::extract_original_file_argument(matches),
            },
            _ => unreachable!("subcommand is required"),
        };
        Arguments { operation }
    }

    fn extract_path_argument(matches: &ArgMatches, id: &str) -> PathBuf {
        matches
            .get_one::<PathBuf>(id)
            .unwrap_or_else(|| panic!("Required argument {} not provided", id))
            .clone()
    }

    fn extract_strict_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("strict")
    }

    fn extract_original_file_argument(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one::<PathBuf>("original_file").cloned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
