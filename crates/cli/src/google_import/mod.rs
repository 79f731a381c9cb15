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

pub use args::Opts;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::{RuntimeContext, write_line};
use crate::errors::CliResult;

impl Dispatch for Opts {
    async fn dispatch(self, mut ctx: RuntimeContext) -> CliResult<()> {
        let records = cmds::load_records(&self)?;
        if self.dry_run {
            return cmds::print_records(&records, &mut ctx.output_file).await;
        }

        let mut publisher = self.mqtt.publisher(None)?;
        cmds::import(&mut publisher, &self, &records).await?;
        let stats = publisher.disconnect().await?;
        write_line(
            &mut ctx.output_file,
            &cmds::summary_line(&self.topic, &stats),
        )
        .await
    }
}
