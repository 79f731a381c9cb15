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

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use ot_api_client::DEFAULT_GEOCODER_URL;

pub const DEFAULT_REQUEUE_FILE: &str = "missing.again";

#[derive(Parser, Debug)]
pub struct Opts {
    #[clap(help = "Files of \"<ghash> <lat> <lon>\" lines; stdin when none are given")]
    pub files: Vec<PathBuf>,

    #[clap(
        long,
        env = "OT_GEOCODER_URL",
        default_value = DEFAULT_GEOCODER_URL,
        help = "Reverse geocoding endpoint"
    )]
    pub geocoder_url: String,

    #[clap(
        long,
        env = "OT_GEOCODER_KEY",
        hide_env_values = true,
        help = "API key sent with each lookup"
    )]
    pub geocoder_key: Option<String>,

    #[clap(
        short,
        long,
        default_value = DEFAULT_REQUEUE_FILE,
        help = "File the lines of failed lookups are written to"
    )]
    pub requeue_file: PathBuf,

    #[clap(
        short,
        long,
        default_value = "1s",
        value_parser = humantime::parse_duration,
        help = "Pause between lookups"
    )]
    pub delay: Duration,
}
