// Copyright (C) 2026 the termemu authors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::cargo_common_metadata)]

#[macro_use]
extern crate tracing;

use std::io::{Read, Write};
use std::process;

use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, layer},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use termemu_buffer::buffer::Buffer;
use termemu_common::{args::Args, config::load_config};
use termemu_core::ansi::TermemuAnsiParser;
use termemu_core::dispatch;

fn init_logging(args: &Args) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::registry().with(env_filter);

    let std_out_layer = layer()
        .with_line_number(true)
        .with_span_events(fmt::format::FmtSpan::ACTIVE)
        .compact();

    if args.write_logs_to_file {
        let file_appender = match RollingFileAppender::builder()
            .rotation(Rotation::HOURLY)
            .max_log_files(2)
            .filename_prefix("termemu")
            .filename_suffix("log")
            .build("./")
        {
            Ok(appender) => appender,
            Err(e) => {
                eprintln!("Failed to create file appender: {e}");
                return;
            }
        };

        subscriber
            .with(layer().with_ansi(false).with_writer(file_appender))
            .with(std_out_layer)
            .init();
    } else {
        subscriber.with(std_out_layer).init();
    }
}

/// Reads bytes from stdin, feeds them through the ANSI/VT220 parser, and prints
/// a textual rendering of the resulting screen. This is a headless
/// demonstration binary, not a full terminal front end.
fn run() -> anyhow::Result<()> {
    let cfg = load_config(None)?;
    debug!("Loaded config: {:#?}", cfg);

    let mut input = Vec::new();
    std::io::stdin().read_to_end(&mut input)?;

    let mut parser = TermemuAnsiParser::new();
    let outputs = parser.push(&input);

    let mut buffer = Buffer::new(
        termemu_common::terminal_size::DEFAULT_WIDTH as usize,
        termemu_common::terminal_size::DEFAULT_HEIGHT as usize,
    );

    let mut outgoing = Vec::new();
    dispatch::apply_all(&mut buffer, &outputs, &mut outgoing, cfg.answerback.as_bytes());

    print!("{}", dispatch::render_visible(&buffer));

    if !outgoing.is_empty() {
        // DA/DSR/ENQ responses: the bytes the remote endpoint expects back.
        // This headless binary has nowhere else to send them, so they go to
        // stderr, kept separate from the rendered screen on stdout.
        std::io::stderr().write_all(&outgoing)?;
    }

    Ok(())
}

fn main() {
    let args = Args::parse(std::env::args()).unwrap_or_else(|_| {
        process::exit(1);
    });

    init_logging(&args);

    info!("Starting termemu");

    if let Err(e) = run() {
        error!("termemu failed: {e:#}");
        process::exit(1);
    }

    info!("Shutting down termemu");
}
