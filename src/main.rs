use clap::Parser;

use lsb_cloak::{
    cli::{Cli, Commands},
    handler::{handle_hide, handle_keygen, handle_recover},
};

/// Parses the command line and dispatches to the matching handler.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Hide(args) => handle_hide(args).map(|_| ()),
        Commands::Recover(args) => handle_recover(args).map(|_| ()),
        Commands::Keygen(args) => handle_keygen(args).map(|_| ()),
    }
}
