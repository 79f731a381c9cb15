/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

mod card;
mod cfg;
mod errors;
mod get_missing;
mod google_import;
mod gpx_to_rec;
mod ping;
mod view_auth;

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cfg::cli_options::{CliCommand, CliOptions};
use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::{RuntimeConfig, RuntimeContext};
use crate::errors::{CliError, CliResult};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Parse errors exit 1 rather than clap's 2, which view-auth
    // reserves for a password mismatch.
    let options = match CliOptions::try_parse() {
        Ok(options) => options,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    if let Err(err) = init_logging(&options.log_level) {
        eprintln!("Error: failed to set up logging: {err}");
        return ExitCode::from(1);
    }

    match run(options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(line) = err.report_line() {
                eprintln!("{line}");
            }
            ExitCode::from(err.exit_code())
        }
    }
}

// init_logging sends logs to stderr; stdout is tool output.
fn init_logging(log_level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::builder().parse(log_level)?;

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(console::Term::stderr().features().colors_supported())
        .with_target(true)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(console_layer).try_init()?;
    Ok(())
}

async fn run(options: CliOptions) -> CliResult<()> {
    let ctx = RuntimeContext {
        config: RuntimeConfig {
            http_timeout: options.http_timeout,
        },
        output_file: Box::pin(tokio::io::stdout()),
    };

    match options.commands {
        CliCommand::Card(cmd) => cmd.dispatch(ctx).await,
        CliCommand::GetMissing(cmd) => cmd.dispatch(ctx).await,
        CliCommand::GoogleImport(cmd) => cmd.dispatch(ctx).await,
        CliCommand::GpxToRec(cmd) => cmd.dispatch(ctx).await,
        CliCommand::ViewAuth(cmd) => cmd.dispatch(ctx).await,
        CliCommand::Ping(cmd) => cmd.dispatch(ctx).await,
    }
    .map_err(|err: CliError| {
        tracing::debug!(?err, "Command failed");
        err
    })
}
