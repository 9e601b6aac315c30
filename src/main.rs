//! # Tipper CLI
//!
//! Command-line interface for printing markdown on an upside-down receipt
//! printer.
//!
//! ## Usage
//!
//! ```bash
//! # Print a markdown file
//! tipper print notes.md
//!
//! # Print from stdin into a file instead of the printer
//! echo '# Hello' | tipper print --output job.bin
//!
//! # Print a dated receipt
//! tipper receipt --message 'Buy **milk**' --date 2025-06-07
//!
//! # Print the demo template
//! tipper receipt --template markdown
//!
//! # Run the HTTP intake
//! tipper serve --listen 0.0.0.0:8080 --device /dev/ttyUSB0
//! ```
//!
//! Logging goes to stderr; set `RUST_LOG` to change the level.

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use tipper::{
    PrinterConfig, TipperError,
    receipt::{self, Receipt},
    server::{self, ServerConfig},
    transport::{SerialTransport, serial::DEFAULT_DEVICE},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Tipper - markdown to thermal receipt printer
#[derive(Parser, Debug)]
#[command(name = "tipper")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where a job goes and how it is laid out.
#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Printer device path
    #[arg(long, default_value = DEFAULT_DEVICE)]
    device: String,

    /// Write the job bytes to a file instead of the printer ("-" for stdout)
    #[arg(long, short, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Printer profile: csn-a5, 58mm or 80mm
    #[arg(long, default_value = "csn-a5", value_parser = PrinterConfig::parse)]
    printer: PrinterConfig,

    /// Override the wrap width in characters
    #[arg(long)]
    columns: Option<usize>,
}

impl OutputArgs {
    fn config(&self) -> PrinterConfig {
        match self.columns {
            Some(columns) => self.printer.with_columns(columns),
            None => self.printer,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a markdown document (stdin when FILE is omitted or "-")
    Print {
        file: Option<PathBuf>,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Print a receipt with a date header
    Receipt {
        /// Markdown message
        #[arg(long, short, conflicts_with = "template")]
        message: Option<String>,

        /// Header date (YYYY-MM-DD or DD/MM/YYYY); today when omitted
        #[arg(long)]
        date: Option<String>,

        /// Print a built-in template instead of a message
        #[arg(long)]
        template: Option<String>,

        #[command(flatten)]
        out: OutputArgs,
    },

    /// Run the HTTP intake server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        listen: String,

        /// Printer device path
        #[arg(long, default_value = DEFAULT_DEVICE)]
        device: String,

        /// Printer profile: csn-a5, 58mm or 80mm
        #[arg(long, default_value = "csn-a5", value_parser = PrinterConfig::parse)]
        printer: PrinterConfig,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TipperError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Print { file, out } => {
            let source = read_source(file.as_deref())?;
            let data = Receipt::untitled(source).build(&out.config())?;
            deliver(&out, &data)?;
        }
        Commands::Receipt {
            message,
            date,
            template,
            out,
        } => {
            let job = match (message, template) {
                (Some(message), _) => Receipt::message(message, receipt::resolve_date(date.as_deref())),
                (None, Some(name)) => receipt::by_name(&name).ok_or_else(|| {
                    TipperError::InvalidInput(format!(
                        "Unknown template '{}'. Available: {}",
                        name,
                        receipt::list_receipts().join(", ")
                    ))
                })?,
                (None, None) => {
                    println!("Available templates:");
                    for name in receipt::list_receipts() {
                        println!("  {}", name);
                    }
                    return Ok(());
                }
            };
            let data = job.build(&out.config())?;
            deliver(&out, &data)?;
        }
        Commands::Serve {
            listen,
            device,
            printer,
        } => {
            let config = ServerConfig {
                device_path: device,
                listen_addr: listen,
                printer,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))?;
        }
    }

    Ok(())
}

/// Read the document from `path`, or stdin for `None` / `-`.
fn read_source(path: Option<&Path>) -> Result<String, TipperError> {
    match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p).map_err(|e| {
            TipperError::InvalidInput(format!("Failed to read {}: {}", p.display(), e))
        }),
        _ => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// Send job bytes to the output file or the printer.
fn deliver(out: &OutputArgs, data: &[u8]) -> Result<(), TipperError> {
    match &out.output {
        Some(path) if path == Path::new("-") => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
        Some(path) => {
            fs::write(path, data)?;
            println!("Wrote {} bytes to {}", data.len(), path.display());
        }
        None => {
            let mut transport = SerialTransport::open(&out.device, &out.config())?;
            transport.write_all(data)?;
            info!(device = %out.device, bytes = data.len(), "job printed");
            println!("Printed successfully!");
        }
    }
    Ok(())
}
