//! Command line interface.
//!
//! Everything the user can invoke from the terminal is defined here with
//! `clap` derive structs.

use crate::constants::DEFAULT_BITS_PER_SAMPLE;
use clap::Parser;
use std::path::PathBuf;

/// Hides an encrypted payload in the low-order bits of a lossless image
/// (PNG, BMP, ...) and recovers it again.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands: hide, recover, and keygen.
#[derive(Parser, Debug)]
pub enum Commands {
    /// Hide an encrypted payload inside a lossless image.
    Hide(HideArgs),

    /// Recover a hidden payload from a carrier image.
    Recover(RecoverArgs),

    /// Generate a new encryption key and write it to a file.
    Keygen(KeygenArgs),
}

/// Arguments for the 'hide' command.
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// Input image used as the carrier (PNG, BMP, ...).
    #[arg(short, long)]
    pub image: PathBuf,

    /// File whose contents will be hidden. Must be ASCII text.
    #[arg(short, long)]
    pub text: PathBuf,

    /// Hex key file used to encrypt the payload (see 'keygen').
    #[arg(short, long)]
    pub key: PathBuf,

    /// Output path for the carrier image. Defaults to doctored_<image name>
    /// next to the input.
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// Payload bits stored in each sample (1-8).
    #[arg(short, long, default_value_t = DEFAULT_BITS_PER_SAMPLE)]
    pub bits_per_sample: usize,

    /// Overwrite the output file if it already exists.
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the 'recover' command.
#[derive(Parser, Debug)]
pub struct RecoverArgs {
    /// Carrier image holding the hidden payload.
    #[arg(short, long)]
    pub image: PathBuf,

    /// Hex key file the payload was encrypted with.
    #[arg(short, long)]
    pub key: PathBuf,

    /// Chunk count reported by 'hide'. The image carries no length header,
    /// so this has to be passed along out-of-band.
    #[arg(short, long)]
    pub chunks: usize,

    /// Output path for the recovered text. Defaults to
    /// recovered_<image stem>.txt next to the carrier.
    #[arg(short, long)]
    pub text: Option<PathBuf>,

    /// Payload bits stored in each sample (1-8); must match the value used
    /// when hiding.
    #[arg(short, long, default_value_t = DEFAULT_BITS_PER_SAMPLE)]
    pub bits_per_sample: usize,

    /// Overwrite the output file if it already exists.
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the 'keygen' command.
#[derive(Parser, Debug)]
pub struct KeygenArgs {
    /// Output path for the new hex key file.
    #[arg(short, long)]
    pub key: PathBuf,

    /// Overwrite the key file if it already exists.
    #[arg(short, long)]
    pub force: bool,
}
