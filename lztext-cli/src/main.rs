//! lztext CLI - text compression for transport-safe strings.
//!
//! Compresses text files (or stdin) into Base64-wrapped payloads and
//! back. The raw tagged payload is also available for pipelines that can
//! carry arbitrary bytes.

use clap::{Parser, Subcommand};
use lztext::Format;
use lztext_core::utf8;
use std::fs;
use std::io::{Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lztext")]
#[command(author, version, about = "Lossless text-to-text compression")]
#[command(long_about = "
lztext compresses Unicode text into a short transport-safe string and
back, choosing between an LZSS and an LZW codec per input.

Examples:
  lztext compress notes.txt -o notes.lzt
  lztext decompress notes.lzt
  cat notes.txt | lztext compress
  lztext info notes.lzt
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress text to a Base64 payload
    #[command(alias = "c")]
    Compress {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the raw tagged payload instead of Base64
        #[arg(short, long)]
        raw: bool,
    },

    /// Decompress a payload back to text
    #[command(alias = "d")]
    Decompress {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Read a raw tagged payload instead of Base64
        #[arg(short, long)]
        raw: bool,
    },

    /// Show the format and sizes of a compressed payload
    #[command(alias = "i")]
    Info {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Read a raw tagged payload instead of Base64
        #[arg(short, long)]
        raw: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress { input, output, raw } => cmd_compress(input, output, raw),
        Commands::Decompress { input, output, raw } => cmd_decompress(input, output, raw),
        Commands::Info { input, raw } => cmd_info(input, raw),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn cmd_compress(input: Option<PathBuf>, output: Option<PathBuf>, raw: bool) -> CliResult {
    let text = read_text(input.as_deref())?;

    let out = if raw {
        utf8::to_utf8(&lztext::compress(&text))
    } else {
        lztext::compress_to_base64(&text).into_bytes()
    };

    write_bytes(output.as_deref(), &out)
}

fn cmd_decompress(input: Option<PathBuf>, output: Option<PathBuf>, raw: bool) -> CliResult {
    let payload = read_payload(input.as_deref(), raw)?;
    let text = lztext::decompress(&payload);
    write_bytes(output.as_deref(), text.as_bytes())
}

fn cmd_info(input: Option<PathBuf>, raw: bool) -> CliResult {
    let payload = read_payload(input.as_deref(), raw)?;

    let Some(&tag) = payload.first() else {
        println!("Empty payload");
        return Ok(());
    };

    let format = Format::from_tag(tag);
    let decompressed = lztext::decompress(&payload);
    let compressed_bytes = utf8::byte_length(&payload);
    let original_bytes = decompressed.len();

    println!("Payload Information");
    println!("===================");
    match format {
        Some(f) => println!("Format: {} ({})", f, tag as u8 as char),
        None => println!("Format: unknown tag (payload passes through verbatim)"),
    }
    println!("Compressed size: {} bytes", compressed_bytes);
    println!("Original size: {} bytes", original_bytes);
    if original_bytes > 0 {
        println!(
            "Compression ratio: {:.1}%",
            (1.0 - compressed_bytes as f64 / original_bytes as f64) * 100.0
        );
    }

    Ok(())
}

/// Read UTF-8 text from a file or stdin.
fn read_text(input: Option<&std::path::Path>) -> Result<String, Box<dyn std::error::Error>> {
    match input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Read a compressed payload, unwrapping Base64 unless `raw` is set.
fn read_payload(
    input: Option<&std::path::Path>,
    raw: bool,
) -> Result<Vec<u16>, Box<dyn std::error::Error>> {
    let bytes = match input {
        Some(path) => fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    let payload_bytes = if raw {
        bytes
    } else {
        lztext_core::base64::decode(&bytes)
    };
    Ok(utf8::to_utf16(&payload_bytes))
}

fn write_bytes(output: Option<&std::path::Path>, data: &[u8]) -> CliResult {
    match output {
        Some(path) => fs::write(path, data)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(data)?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
