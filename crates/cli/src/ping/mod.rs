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

pub mod args;
pub mod cmds;

#[cfg(test)]
mod tests;

// Export so the CLI builder can just pull in ping::Opts.
pub use args::Opts;
use ot_location::Status;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::{RuntimeContext, write_line};
use crate::errors::{CliError, CliResult};

impl Dispatch for Opts {
    async fn dispatch(self, mut ctx: RuntimeContext) -> CliResult<()> {
        let result = cmds::ping(&self, &ctx.config).await?;
        write_line(&mut ctx.output_file, &result.to_string()).await?;
        match result.status {
            Status::Ok => Ok(()),
            status => Err(CliError::CheckFailed(status)),
        }
    }
}
