use std::io::{self, BufWriter, Read, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use digit_lut::render;
use digit_lut::style::{Format, TableStyle};
use digit_lut::verify;
use digit_lut::{digit_value, SENTINEL, DIGIT_TABLE};

/// Base-36 digit lookup table generator
///
/// Without a subcommand, prints the table as 16 rows of 16 values.
#[derive(Parser)]
#[command(name = "digit-lut", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Command {
    /// Print the table in a chosen format
    Emit {
        /// Output format: plain, rust or c
        #[arg(long)]
        format: Option<String>,
        /// Values per row (must divide 256)
        #[arg(long)]
        row_width: Option<usize>,
        /// Drop the separator after the last value of each row
        #[arg(long)]
        trim: bool,
        /// Item name for the rust and c formats
        #[arg(long)]
        name: Option<String>,
        /// TOML style file; flags given on the command line take precedence
        #[arg(long)]
        style: Option<String>,
    },
    /// Verify that a saved table matches the generator
    Check {
        /// File containing the table, or "-" for stdin
        path: String,
    },
    /// Show the digit value of individual bytes
    Lookup {
        /// Bytes as a single character ("a"), decimal ("97") or hex ("0x61")
        #[arg(required = true)]
        bytes: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    match cli.command {
        None => cmd_emit(&TableStyle::default()),
        Some(Command::Emit {
            format,
            row_width,
            trim,
            name,
            style,
        }) => {
            let style = build_style(style.as_deref(), format.as_deref(), row_width, trim, name)?;
            cmd_emit(&style)
        }
        Some(Command::Check { path }) => cmd_check(&path),
        Some(Command::Lookup { bytes }) => cmd_lookup(&bytes),
    }
}

/// Combine an optional style file with command-line overrides.
fn build_style(
    style_path: Option<&str>,
    format: Option<&str>,
    row_width: Option<usize>,
    trim: bool,
    name: Option<String>,
) -> Result<TableStyle> {
    let mut style = match style_path {
        Some(path) => {
            let toml_str =
                std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
            TableStyle::from_toml(&toml_str)
                .with_context(|| format!("parsing style from {}", path))?
        }
        None => TableStyle::default(),
    };

    if let Some(format) = format {
        style.format = format.parse::<Format>()?;
    }
    if let Some(row_width) = row_width {
        style.row_width = row_width;
    }
    if trim {
        style.trailing_separator = false;
    }
    if let Some(name) = name {
        style.name = name;
    }
    style.validate().context("invalid table style")?;
    Ok(style)
}

fn cmd_emit(style: &TableStyle) -> Result<()> {
    log::debug!(
        "emitting {} table: row_width={}, separator={:?}, trailing_separator={}",
        style.format,
        style.row_width,
        style.separator,
        style.trailing_separator,
    );
    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    render::write_table(&DIGIT_TABLE, style, out).context("writing table to stdout")?;
    Ok(())
}

fn cmd_check(path: &str) -> Result<()> {
    let text = if path == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("reading table from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?
    };

    let values =
        verify::parse_values(&text).with_context(|| format!("parsing table from {}", path))?;
    log::debug!("parsed {} entries from {}", values.len(), path);

    verify::check(&DIGIT_TABLE, &values)
        .with_context(|| format!("FAIL: {} does not match the generated table", path))?;

    log::info!("{} matches the generated table", path);
    println!(
        "PASS: {} — {} entries match the generated table",
        path,
        values.len()
    );
    Ok(())
}

/// Parse a byte given as a single character, decimal, or `0x` hex.
fn parse_byte(spec: &str) -> Result<u8> {
    if let Some(hex) = spec
        .strip_prefix("0x")
        .or_else(|| spec.strip_prefix("0X"))
    {
        return u8::from_str_radix(hex, 16).with_context(|| format!("invalid hex byte '{}'", spec));
    }
    if spec.len() == 1 {
        return Ok(spec.as_bytes()[0]);
    }
    spec.parse::<u8>()
        .with_context(|| format!("invalid byte '{}', expected a character, 0-255 or 0x00-0xff", spec))
}

fn cmd_lookup(specs: &[String]) -> Result<()> {
    let bytes = specs
        .iter()
        .map(|s| parse_byte(s))
        .collect::<Result<Vec<u8>>>()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for byte in bytes {
        let value = digit_value(byte);
        let shown = if byte.is_ascii_graphic() {
            format!("'{}'", byte as char)
        } else {
            "   ".to_string()
        };
        if value == SENTINEL {
            writeln!(out, "{:>3} {:#04x} {}  {} (not a digit)", byte, byte, shown, value)?;
        } else {
            writeln!(out, "{:>3} {:#04x} {}  {}", byte, byte, shown, value)?;
        }
    }
    Ok(())
}
