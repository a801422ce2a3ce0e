//! Golden fixture generator for the dtix integration tests.
//!
//! Writes every fixture under `tests/golden/`. Run it after changing the
//! sample record or the encoder, then commit the result; the `golden` test
//! suite fails until the files match what the fixtures produce.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_golden -p dtix-tests
//! ```
//!
//! # Generated fixtures
//!
//! | File                 | Contents                                         |
//! |----------------------|--------------------------------------------------|
//! | summer_fest.hex      | Sample event account, trailer included           |
//! | drifted_layout.hex   | Same account with an extra u64 before timestamps |

#![allow(clippy::pedantic)]

use std::path::Path;

use dtix_tests::{drifted_bytes, encode_unchecked, golden_dir, sample_record, to_golden_hex};

fn main() {
    let dir = golden_dir();
    let record = sample_record();

    write_hex(&dir.join("summer_fest.hex"), &encode_unchecked(&record).bytes);
    write_hex(&dir.join("drifted_layout.hex"), &drifted_bytes(&record));

    println!("All golden fixtures written to {}", dir.display());
}

fn write_hex(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create_dir_all");
    }
    std::fs::write(path, to_golden_hex(bytes)).expect("write_file");
    println!("  wrote {} ({} bytes)", path.display(), bytes.len());
}
