//! Command handlers.
//!
//! High-level logic behind the `hide`, `recover`, and `keygen` subcommands:
//! file I/O, engine calls, and user-facing reporting. Each handler returns
//! its outcome so callers (and the integration tests) can inspect where the
//! results went.

use crate::cli::{HideArgs, KeygenArgs, RecoverArgs};
use crate::crypto;
use crate::engine::{Config, Engine};
use crate::picture;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// Where a successful 'hide' run put the carrier, and the chunk count the
/// recovering side must be told.
#[derive(Debug)]
pub struct HideOutcome {
    pub dest: PathBuf,
    pub chunk_count: usize,
}

fn default_dest(image: &Path) -> PathBuf {
    let name = image
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    image.with_file_name(format!("doctored_{name}"))
}

fn default_text_output(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    image.with_file_name(format!("recovered_{stem}.txt"))
}

fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nPass --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// Handles the 'keygen' command: generates a fresh key and writes it to the
/// requested path as hex.
pub fn handle_keygen(args: KeygenArgs) -> Result<PathBuf> {
    ensure_writable(&args.key, args.force)?;

    let key = crypto::generate_key();
    crypto::save_key(&key, &args.key).with_context(|| {
        format!(
            "Unable to write key file: {}",
            args.key.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "A new key has been generated and saved: {}",
        args.key.to_string_lossy().green().bold()
    );

    Ok(args.key)
}

/// Handles the 'hide' command.
///
/// Reads the key, the payload text, and the carrier image, embeds the
/// encrypted payload, and writes the doctored image. Reports the chunk
/// count the user needs for recovery.
///
/// # Errors
///
/// Fails if any input file cannot be read, the payload is empty or not
/// ASCII, the image lacks the capacity for the payload, or the output
/// cannot be written.
pub fn handle_hide(args: HideArgs) -> Result<HideOutcome> {
    let key = crypto::load_key(&args.key).with_context(|| {
        format!(
            "Unable to read key file: {}",
            args.key.to_string_lossy().red().bold()
        )
    })?;

    let payload = fs::read(&args.text).with_context(|| {
        format!(
            "Unable to read text file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    let original = picture::load(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let config = Config {
        bits_per_sample: args.bits_per_sample,
        ..Config::default()
    };
    let mut engine = Engine::with_config(key, config)?;

    engine.set_payload(&payload).with_context(|| {
        format!(
            "Refusing to hide the contents of {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    let carrier = engine.embed(&original).with_context(|| {
        format!(
            "Unable to hide the payload in {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let dest = args.dest.unwrap_or_else(|| default_dest(&args.image));
    ensure_writable(&dest, args.force)?;

    picture::save(&carrier, &dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    let chunk_count = engine.chunk_count();
    println!(
        "The payload has been hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );
    println!(
        "Recover it with --chunks {} and the same key and bits per sample.",
        chunk_count.to_string().green().bold()
    );

    Ok(HideOutcome { dest, chunk_count })
}

/// Handles the 'recover' command.
///
/// Reads the key and the carrier image, extracts the given number of
/// chunks, decrypts the payload, and writes it to the output path.
///
/// # Errors
///
/// Fails if an input file cannot be read, the chunk count does not fit the
/// image, decryption rejects the recovered ciphertext (wrong key, wrong
/// count, or a modified image), or the output cannot be written.
pub fn handle_recover(args: RecoverArgs) -> Result<PathBuf> {
    let key = crypto::load_key(&args.key).with_context(|| {
        format!(
            "Unable to read key file: {}",
            args.key.to_string_lossy().red().bold()
        )
    })?;

    let carrier = picture::load(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let config = Config {
        bits_per_sample: args.bits_per_sample,
        ..Config::default()
    };
    let engine = Engine::with_config(key, config)?;

    let payload = engine
        .extract_counted(&carrier, args.chunks)
        .with_context(|| {
            format!(
                "Failed to recover a payload from {}",
                args.image.to_string_lossy().red().bold()
            )
        })?;

    let dest = args.text.unwrap_or_else(|| default_text_output(&args.image));
    ensure_writable(&dest, args.force)?;

    fs::write(&dest, &payload).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The payload has been recovered and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(dest)
}
