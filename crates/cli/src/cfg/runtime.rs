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

use std::pin::Pin;
use std::time::Duration;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::errors::CliResult;

// RuntimeContext is context passed to all subcommand
// dispatch handlers. This is built at the beginning of
// runtime and then passed to the appropriate dispatcher.
pub struct RuntimeContext {
    pub config: RuntimeConfig,
    // output_file receives tool output (cards, digests, status
    // lines). Logs never go here.
    pub output_file: Pin<Box<dyn AsyncWrite>>,
}

// RuntimeConfig contains runtime configuration parameters extracted
// from the global CLI options.
pub struct RuntimeConfig {
    pub http_timeout: Duration,
}

impl RuntimeConfig {
    // api_config is the HTTP client config shared by all commands;
    // each command fills in the endpoint it talks to.
    pub fn api_config(&self) -> ot_api_client::Config {
        ot_api_client::Config {
            request_timeout: self.http_timeout,
            ..Default::default()
        }
    }
}

// write_line writes one line of tool output and flushes it, so
// output shows up as soon as it is produced.
pub async fn write_line<W>(out: &mut W, line: &str) -> CliResult<()>
where
    W: AsyncWrite + Unpin + ?Sized,
{
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await?;
    Ok(())
}
