//! respwire Dump Tool
//!
//! Decodes a captured stream of client requests and prints them, one line
//! per request. Each request is decoded from the previous request's body.

use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use respwire::config::{DEFAULT_MAX_ARGS, DEFAULT_MAX_BULK_LEN, DEFAULT_MAX_LINE_LEN};
use respwire::{Decoder, DecoderConfig};
use tracing_subscriber::{fmt, EnvFilter};

/// respwire Dump
#[derive(Parser, Debug)]
#[command(name = "respwire-dump")]
#[command(about = "Decode a captured stream of key-value server requests")]
#[command(version)]
struct Args {
    /// Capture file to read (stdin when omitted)
    input: Option<PathBuf>,

    /// Maximum arguments per request, command name included
    #[arg(long, default_value_t = DEFAULT_MAX_ARGS)]
    max_args: usize,

    /// Maximum argument length in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_BULK_LEN)]
    max_bulk_len: usize,

    /// Maximum protocol line length in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_LEN)]
    max_line_len: usize,

    /// Write requests back out in multibulk format instead of listing them
    #[arg(short, long)]
    reencode: bool,
}

fn main() {
    // Logs go to stderr, stdout carries the dump
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,respwire=debug"));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::debug!("respwire-dump v{}", respwire::VERSION);

    match run(&args) {
        Ok(count) => tracing::info!("Decoded {} requests", count),
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<usize, Box<dyn Error>> {
    let config = DecoderConfig::builder()
        .max_args(args.max_args)
        .max_bulk_len(args.max_bulk_len)
        .max_line_len(args.max_line_len)
        .build();
    let decoder = Decoder::new(config);

    let input: Box<dyn Read> = match &args.input {
        Some(path) => {
            tracing::info!("Reading capture from {}", path.display());
            Box::new(File::open(path)?)
        }
        None => Box::new(io::stdin()),
    };
    let mut reader = BufReader::new(input);
    let mut out = io::stdout().lock();

    // Whatever was decoded before a failure still reaches stdout
    let result = dump(&decoder, &mut reader, &mut out, args.reencode);
    out.flush()?;
    result
}

/// Decode requests until clean EOF, chaining each decode through the
/// previous request's body
fn dump<R: BufRead, W: Write>(
    decoder: &Decoder,
    reader: &mut R,
    out: &mut W,
    reencode: bool,
) -> Result<usize, Box<dyn Error>> {
    let mut stream = reader;
    let mut count = 0;

    // Clean EOF is only allowed between requests
    while !stream.fill_buf()?.is_empty() {
        // Framing is lost after a decode error, so stop there
        let request = decoder
            .decode(stream)
            .map_err(|e| format!("request #{} could not be decoded: {}", count + 1, e))?;
        count += 1;

        if reencode {
            out.write_all(&request.to_multibulk())?;
        } else {
            write!(out, "{}: {}", count, request.name)?;
            for arg in &request.args {
                write!(out, " \"{}\"", arg.escape_ascii())?;
            }
            writeln!(out)?;
        }

        let (_, _, body) = request.into_parts();
        stream = body;
    }

    Ok(count)
}
