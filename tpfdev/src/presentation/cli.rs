use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "tpfdev: inspect and unpack transport forms", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    // Input for the default informational run when no subcommand is given.
    #[command(flatten)]
    pub input: InputArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Gunzip {
    /// Pipe through an external gzip-compatible program
    External,
    /// Decompress in-process
    Builtin,
}

#[derive(Args)]
pub struct InputArgs {
    /// Transport form file (otherwise the first .tpm2 in the current directory is used)
    pub file: Option<PathBuf>,

    /// How gzip-wrapped transport forms are decompressed
    #[arg(long, value_enum, default_value_t = Gunzip::External)]
    pub gunzip: Gunzip,

    /// gzip-compatible program for `--gunzip external` (defaults to pigz if installed, else gzip)
    #[arg(long, env = "TPF_GZIP")]
    pub gzip: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print information about a transport form
    Info {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Unpack desc.xml, index, maintainer scripts and destdir/
    Unpack {
        #[command(flatten)]
        input: InputArgs,

        /// directory that receives the unpacked files
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// tar program used to unpack the archive section
        #[arg(long, env = "TPF_TAR", default_value = "tar")]
        tar: String,
    },

    /// Print the header and table of contents
    Toc {
        #[command(flatten)]
        input: InputArgs,

        /// emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
