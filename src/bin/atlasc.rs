// Copyright 2026 Sprite Atlas Compiler Contributors
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use atlasc::cli::Cli;
use atlasc::options::PipelineOptions;
use atlasc::pipeline;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let options = PipelineOptions::try_from(&cli).expect("CLI-to-options conversion is infallible");

    match pipeline::run_and_write(&cli.input, &options, &cli.output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}
