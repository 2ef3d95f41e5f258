use crate::common::{OutputFormat, WriteMode};
use crate::constants::DEFAULT_CONCURRENCY;
use crate::output::OutputOptions;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLIの定義
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "This tool splits an inclusive IPv4/IPv6 address range into the CIDR blocks that cover it exactly."
)]
pub struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        help = "Enable debug logging (RUST_LOG takes precedence)."
    )]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a single range, e.g. `convert 10.0.0.5 10.0.0.7`
    Convert {
        #[arg(help = "First address of the range.\nExample: 10.0.0.5 or 2001:db8::")]
        begin: String,

        #[arg(help = "Last address of the range (inclusive), same family as BEGIN.")]
        end: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Convert every range listed in a file, one `<begin> <end>` per line
    Batch {
        #[arg(
            short = 'i',
            long = "input",
            help = "File with one range per line.\nSeparators: whitespace, '-' or ','. Lines starting with '#' are ignored."
        )]
        input: PathBuf,

        #[arg(
            short = 'a',
            long = "aggregate",
            default_value = "false",
            help = "Merge adjacent and overlapping blocks across all ranges."
        )]
        aggregate: bool,

        #[arg(
            long = "concurrency",
            default_value_t = DEFAULT_CONCURRENCY,
            help = "Maximum number of ranges converted at the same time."
        )]
        concurrency: usize,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// 出力関連の共通オプション
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    #[arg(
        short = 'f',
        long = "format",
        default_value = "txt",
        hide_default_value = true,
        help = "Select output format: 'txt', 'nft' or 'json'.\ndefault: txt"
    )]
    pub output_format: OutputFormat,

    #[arg(
        short = 'o',
        long = "output",
        help = "Write the result to this file instead of standard output."
    )]
    pub output_path: Option<PathBuf>,

    #[arg(
        short = 'm',
        long = "mode",
        default_value = "overwrite",
        hide_default_value = true,
        help = "Select file output mode: 'append' or 'overwrite'.\ndefault: overwrite"
    )]
    pub mode: WriteMode,
}

impl From<&OutputArgs> for OutputOptions {
    fn from(args: &OutputArgs) -> Self {
        OutputOptions {
            format: args.output_format,
            output: args.output_path.clone(),
            mode: args.mode,
        }
    }
}
