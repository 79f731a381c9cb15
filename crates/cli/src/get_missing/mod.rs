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
use ot_api_client::GeocoderClient;

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::errors::CliResult;

impl Dispatch for Opts {
    async fn dispatch(self, mut ctx: RuntimeContext) -> CliResult<()> {
        let config = ot_api_client::Config {
            geocoder_url: self.geocoder_url.clone(),
            geocoder_key: self.geocoder_key.clone(),
            ..ctx.config.api_config()
        };
        let geocoder = GeocoderClient::new_with_config(&config)?;
        let lines = cmds::read_lines(&self)?;
        cmds::get_missing(&self, &geocoder, &lines, &mut ctx.output_file).await?;
        Ok(())
    }
}
