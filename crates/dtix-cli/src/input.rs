//! Account bytes in and out of files.
//!
//! RPC nodes hand account data back as base64, block explorers tend to
//! show hex, and `solana account --output-file` writes raw bytes. All
//! three are accepted; text encodings may contain whitespace and line
//! breaks.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Encoding {
    #[default]
    Raw,
    Hex,
    Base64,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Raw => "raw",
            Self::Hex => "hex",
            Self::Base64 => "base64",
        })
    }
}

/// Read account bytes from `path`.
///
/// # Errors
///
/// Fails if the file cannot be read or is not valid `encoding` text.
pub fn read_account(path: &Path, encoding: Encoding) -> Result<Vec<u8>> {
    let contents =
        fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    decode_input(&contents, encoding)
        .with_context(|| format!("{} is not valid {encoding} input", path.display()))
}

pub fn decode_input(contents: &[u8], encoding: Encoding) -> Result<Vec<u8>> {
    let text = match encoding {
        Encoding::Raw => return Ok(contents.to_vec()),
        Encoding::Hex | Encoding::Base64 => {
            std::str::from_utf8(contents).context("text input is not UTF-8")?
        }
    };
    let compact: String = text.split_whitespace().collect();

    let bytes = if encoding == Encoding::Hex {
        let digits = compact.strip_prefix("0x").unwrap_or(compact.as_str());
        hex::decode(digits)?
    } else {
        STANDARD.decode(&compact)?
    };
    Ok(bytes)
}

#[must_use]
pub fn encode_output(bytes: &[u8], encoding: Encoding) -> Vec<u8> {
    match encoding {
        Encoding::Raw => bytes.to_vec(),
        Encoding::Hex => format!("{}\n", hex::encode(bytes)).into_bytes(),
        Encoding::Base64 => format!("{}\n", STANDARD.encode(bytes)).into_bytes(),
    }
}
