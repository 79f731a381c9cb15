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

use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::{card, get_missing, google_import, gpx_to_rec, ping, view_auth};

#[derive(Parser, Debug)]
#[clap(
    name = "ot-contrib",
    version,
    about = "Utilities around the location recorder: cards, imports, track conversion and health checks"
)]
pub struct CliOptions {
    #[clap(
        long,
        global = true,
        env = "RUST_LOG",
        default_value = "warn",
        help = "Log filter (e.g. debug, ot_mqtt=trace); logs go to stderr"
    )]
    pub log_level: String,

    #[clap(
        long,
        global = true,
        env = "OT_HTTP_TIMEOUT",
        default_value = "10s",
        value_parser = humantime::parse_duration,
        help = "Timeout for each HTTP request"
    )]
    pub http_timeout: Duration,

    #[clap(subcommand)]
    pub commands: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    #[clap(about = "Build a card (name and face) from a user directory profile")]
    Card(card::Opts),

    #[clap(about = "Reverse geocode \"<ghash> <lat> <lon>\" lines")]
    GetMissing(get_missing::Opts),

    #[clap(about = "Publish a location history export to the broker")]
    GoogleImport(google_import::Opts),

    #[clap(about = "Convert GPX tracks into monthly .rec files")]
    GpxToRec(gpx_to_rec::Opts),

    #[clap(about = "Generate an HTTP digest entry for a view's auth list")]
    ViewAuth(view_auth::Opts),

    #[clap(about = "Publish a ping location and verify the recorder stored it")]
    Ping(ping::Opts),
}
