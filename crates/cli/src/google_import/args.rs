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

use clap::Parser;
use ot_location::Tid;

use crate::cfg::mqtt::MqttArgs;

#[derive(Parser, Debug)]
pub struct Opts {
    #[clap(help = "Location history export (JSON with a `locations` array)")]
    pub file: PathBuf,

    #[clap(short, long, help = "Topic to publish to (e.g. owntracks/jane/phone)")]
    pub topic: String,

    #[clap(
        long,
        value_parser = parse_tid,
        help = "Tracker id for the records, 2 letters (e.g. 'jp')"
    )]
    pub tid: Tid,

    #[clap(
        short,
        long,
        default_value_t = 2,
        value_parser = clap::value_parser!(u8).range(0..=2),
        help = "MQTT QoS level"
    )]
    pub qos: u8,

    #[clap(long, help = "Print the payloads instead of publishing them")]
    pub dry_run: bool,

    #[clap(flatten)]
    pub mqtt: MqttArgs,
}

fn parse_tid(tid: &str) -> Result<Tid, String> {
    Tid::strict(tid).map_err(|e| e.to_string())
}
