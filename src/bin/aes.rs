//! Command-line driver: encrypts or decrypts stdin to stdout with AES
//! in ECB mode, keyed from the `AES_KEY` environment variable.

use std::env;
use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use rijndael::{Cipher, Ecb, Key};

#[derive(Parser)]
#[command(
    name = "aes",
    about = "Encrypt or decrypt stdin with AES-ECB, keyed by the AES_KEY environment variable"
)]
struct Args {
    #[command(subcommand)]
    op: Op,
}

#[derive(Subcommand)]
enum Op {
    /// Encrypt stdin, padding a final partial block
    Encrypt,
    /// Decrypt stdin; the input must be whole 16-byte blocks
    Decrypt,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // The key is raw bytes, so it must be exactly 16, 24 or 32
    // characters long.
    let key_material = env::var("AES_KEY").context("AES_KEY is not set")?;
    let key = Key::from_bytes(key_material.as_bytes())?;
    let mode = Ecb::new(Cipher::new(key));

    let mut input = Vec::new();
    io::stdin()
        .read_to_end(&mut input)
        .context("error reading from stdin")?;

    let output = match args.op {
        Op::Encrypt => mode.encrypt(&input),
        Op::Decrypt => mode.decrypt(&input)?,
    };

    io::stdout()
        .write_all(&output)
        .context("failed to write to stdout")?;

    Ok(())
}
