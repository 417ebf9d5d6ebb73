//! CLI command definitions and the interactive shell for `cyrcipher`.
//!
//! Uses clap derive macros for argument parsing. Cipher errors are reported
//! to the user and never abort the interactive loop; only I/O failures
//! propagate out of it.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use cyrcipher::{
    CipherError, Direction, PolyalphabeticCipher, RouteTranspositionCipher, TextCipher,
};
use tracing::{debug, info};

/// Route transposition and polyalphabetic ciphers over the Russian alphabet.
#[derive(Parser)]
#[command(name = "cyrcipher", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Suppress all log output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Detailed logging (-v for debug, -vv for trace). `RUST_LOG` overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Route (columnar) transposition keyed by a column count.
    Route {
        /// `encode` or `decode`.
        direction: Direction,

        /// Number of grid columns.
        #[arg(short, long, allow_negative_numbers = true)]
        key: i64,

        /// Text to transform.
        text: String,
    },

    /// Polyalphabetic substitution keyed by a Russian word.
    Poly {
        /// `encrypt` or `decrypt`.
        direction: Direction,

        /// Keyword made of Russian letters.
        #[arg(short, long)]
        key: String,

        /// Text to transform (Russian letters only).
        text: String,
    },

    /// Route-encode each text, then decode the result, printing both.
    Roundtrip {
        /// Number of grid columns.
        #[arg(short, long, allow_negative_numbers = true)]
        key: i64,

        /// Texts to check.
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Prompt for mode, text and keyword in a loop (polyalphabetic cipher).
    #[command(alias = "repl")]
    Interactive,
}

/// Runs a single transformation and prints the result, or `Error: ...`.
///
/// # Returns
/// `Ok(true)` when the cipher succeeded, `Ok(false)` when it reported a
/// [`CipherError`].
pub fn run_once<W: Write>(
    out: &mut W,
    cipher: Result<impl TextCipher, CipherError>,
    direction: Direction,
    text: &str,
) -> std::io::Result<bool> {
    match cipher.and_then(|c| c.apply(direction, text)) {
        Ok(result) => {
            writeln!(out, "{}", result)?;
            Ok(true)
        }
        Err(e) => {
            report(out, &e)?;
            Ok(false)
        }
    }
}

/// Encodes then decodes every text with the same route key.
///
/// # Returns
/// `Ok(true)` when every text round-tripped, `Ok(false)` when any of them
/// reported a [`CipherError`].
pub fn roundtrip<W: Write>(out: &mut W, key: i64, texts: &[String]) -> std::io::Result<bool> {
    let mut all_ok = true;
    for text in texts {
        let checked = RouteTranspositionCipher::new(key).and_then(|c| {
            let encoded = c.encode(text)?;
            let decoded = c.decode(&encoded)?;
            Ok((encoded, decoded))
        });
        match checked {
            Ok((encoded, decoded)) => {
                writeln!(out, "{}", encoded)?;
                writeln!(out, "{}", decoded)?;
            }
            Err(e) => {
                report(out, &e)?;
                all_ok = false;
            }
        }
    }
    Ok(all_ok)
}

/// Modes understood by the interactive shell.
#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Run(Direction),
    Exit,
    Unknown,
}

fn parse_mode(line: &str) -> Mode {
    match line.trim() {
        "Выход" | "выход" | "exit" | "quit" => Mode::Exit,
        other => other.parse().map(Mode::Run).unwrap_or(Mode::Unknown),
    }
}

/// Interactive loop: mode, text, keyword, repeated until `Выход` or EOF.
///
/// Every line is read from `input`; prompts and results go to `out`.
pub fn interactive<R: BufRead, W: Write>(input: R, out: &mut W) -> std::io::Result<()> {
    let mut lines = input.lines();
    loop {
        write!(out, "Encode/Decode: ")?;
        out.flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let direction = match parse_mode(&line) {
            Mode::Run(direction) => direction,
            Mode::Exit => break,
            Mode::Unknown => {
                writeln!(out, "Unknown mode '{}'", line.trim())?;
                continue;
            }
        };

        let prompt = match direction {
            Direction::Encrypt => "Строка для шифрования: ",
            Direction::Decrypt => "Строка для расшифрования: ",
        };
        write!(out, "{}", prompt)?;
        out.flush()?;
        let Some(text) = lines.next().transpose()? else {
            break;
        };
        write!(out, "Ключ: ")?;
        out.flush()?;
        let Some(keyword) = lines.next().transpose()? else {
            break;
        };

        debug!(%direction, "interactive request");
        run_once(out, PolyalphabeticCipher::new(&keyword), direction, &text)?;
    }
    info!("interactive session finished");
    Ok(())
}

fn report<W: Write>(out: &mut W, err: &CipherError) -> std::io::Result<()> {
    debug!(key_error = err.is_key_error(), reason = err.reason(), "cipher rejected input");
    writeln!(out, "Error: {}", err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str) -> String {
        let mut out = Vec::new();
        interactive(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("Encode"), Mode::Run(Direction::Encrypt));
        assert_eq!(parse_mode("Decode\r"), Mode::Run(Direction::Decrypt));
        assert_eq!(parse_mode("Выход"), Mode::Exit);
        assert_eq!(parse_mode("what"), Mode::Unknown);
    }

    #[test]
    fn test_interactive_encode_then_exit() {
        let out = session("Encode\nа\nб\nВыход\n");
        assert!(out.contains("Б\n"), "{}", out);
    }

    #[test]
    fn test_interactive_error_keeps_looping() {
        let out = session("Encode\nabc\nб\nDecode\nб\nб\n");
        assert!(out.contains("Error: Invalid text"), "{}", out);
        assert!(out.contains("А\n"), "{}", out);
    }

    #[test]
    fn test_interactive_bad_key() {
        let out = session("Decode\nабв\n\n");
        assert!(out.contains("Error: Invalid key: empty key"), "{}", out);
    }

    #[test]
    fn test_interactive_unknown_mode() {
        let out = session("Sideways\n");
        assert!(out.contains("Unknown mode 'Sideways'"), "{}", out);
    }

    #[test]
    fn test_interactive_eof_mid_request() {
        let out = session("Encode\nабв\n");
        assert!(out.ends_with("Ключ: "), "{}", out);
    }

    #[test]
    fn test_run_once_reports_error() {
        let mut out = Vec::new();
        let ok = run_once(
            &mut out,
            RouteTranspositionCipher::new(0),
            Direction::Encrypt,
            "text",
        )
        .unwrap();
        assert!(!ok);
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Error: Invalid key"), "{}", out);
    }

    #[test]
    fn test_roundtrip_prints_padded_decode() {
        let mut out = Vec::new();
        assert!(roundtrip(&mut out, 7, &["pROceSsIng".to_string()]).unwrap());
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out, "pIRnOgc e S s \npROceSsIng    \n");
    }

    #[test]
    fn test_cli_parses_negative_key() {
        let cli = Cli::try_parse_from(["cyrcipher", "route", "encode", "--key", "-2", "abc"])
            .unwrap();
        match cli.command {
            Commands::Route { key, .. } => assert_eq!(key, -2),
            _ => panic!("expected route command"),
        }
    }

    #[test]
    fn test_roundtrip_reports_failure() {
        let mut out = Vec::new();
        let texts = ["abc".to_string(), String::new()];
        assert!(!roundtrip(&mut out, 2, &texts).unwrap());
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("acb \nabc \n"), "{}", out);
        assert!(out.contains("Error: Invalid text: empty text"), "{}", out);

        let mut out = Vec::new();
        assert!(!roundtrip(&mut out, 0, &["abc".to_string()]).unwrap());
    }
}
