pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use clap::Parser;
use tpf_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        None => handlers::handle_info(cli.input),
        Some(Commands::Info { input }) => handlers::handle_info(input),
        Some(Commands::Unpack {
            input,
            out_dir,
            tar,
        }) => handlers::handle_unpack(input, out_dir, tar),
        Some(Commands::Toc { input, json }) => handlers::handle_toc(input, json),
    }
}
