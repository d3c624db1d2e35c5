//! Echo Stdio Server
//!
//! Answers newline-delimited JSON-RPC 2.0 requests on stdin with the
//! request's `params.input` as the result on stdout.
//!
//! Usage:
//! ```bash
//! echo '{"jsonrpc":"2.0","id":1,"params":{"input":"hello"}}' | cargo run --package echo-stdio-server
//!
//! # Reject requests that are not strictly JSON-RPC 2.0 with an input
//! cargo run --package echo-stdio-server -- --strict
//!
//! # Drop malformed lines instead of answering them
//! RUST_LOG=debug cargo run --package echo-stdio-server -- --on-malformed skip
//! ```

use anyhow::Result;
use clap::Parser;
use echo_stdio_server::{EchoConfig, EchoResponder, MalformedPolicy, StdioTransport};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the echo server
#[derive(Parser, Debug)]
#[command(name = "echo-stdio-server")]
#[command(about = "Line-delimited JSON-RPC 2.0 echo responder over stdin/stdout")]
struct Args {
    /// Require "jsonrpc": "2.0" and a present params.input
    #[arg(long)]
    strict: bool,

    /// What to do with lines that are not valid requests
    #[arg(long, value_enum, default_value_t = MalformedPolicy::Respond)]
    on_malformed: MalformedPolicy,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&args.log_level))?,
        )
        .with_writer(std::io::stderr)
        .init();

    let config = EchoConfig::new()
        .strict(args.strict)
        .on_malformed(args.on_malformed);
    info!(strict = config.strict, on_malformed = ?config.on_malformed, "Starting echo server on stdio");

    let responder = EchoResponder::new(config);
    let mut transport = StdioTransport::stdio();
    let stats = responder.serve(&mut transport).await?;

    info!(lines = stats.lines_read, "Echo server stopped");
    Ok(())
}
