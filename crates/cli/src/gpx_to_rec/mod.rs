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


pub use args::Opts;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::{RuntimeContext, write_line};
use crate::errors::CliResult;

impl Dispatch for Opts {
    async fn dispatch(self, mut ctx: RuntimeContext) -> CliResult<()> {
        let conversion = cmds::convert(&self)?;
        for (path, count) in &conversion.written {
            write_line(
                &mut ctx.output_file,
                &format!("{}: {} lines", path.display(), count),
            )
            .await?;
        }
        if conversion.skipped > 0 {
            tracing::warn!("Skipped {} points without a time", conversion.skipped);
        }
        Ok(())
    }
}
