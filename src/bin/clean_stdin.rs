//! Simple CLI that reads a message body from stdin (or a file) and prints
//! the cleaned text as JSON.
//!
//! Usage: `clean_stdin [--plain] [FILE]`
//!
//! Input is treated as HTML unless `--plain` is given, in which case it is
//! cleaned as (possibly quoted-printable) plain text.

use mail_cleaner::HtmlCleaner;
use serde::Serialize;
use std::env;
use std::fs;
use std::io::{self, Read};

#[derive(Serialize)]
struct Output {
    text: String,
    chars: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut plain = false;
    let mut path = None;
    for arg in env::args().skip(1) {
        if arg == "--plain" {
            plain = true;
        } else {
            path = Some(arg);
        }
    }

    // Raw bytes so the HTML path can honour declared charsets.
    let input = match path {
        Some(path) => fs::read(path)?,
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };

    let cleaner = HtmlCleaner::new();
    let text = if plain {
        cleaner.clean_simple(&String::from_utf8_lossy(&input))
    } else {
        cleaner.clean_bytes(&input)
    };

    let output = Output {
        chars: text.chars().count(),
        text,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
