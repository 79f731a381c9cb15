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

use clap::Parser;
use ot_api_client::DEFAULT_RECORDER_URL;

use crate::cfg::mqtt::MqttArgs;

pub const DEFAULT_PING_TOPIC: &str = "owntracks/ping/ping";
pub const DEFAULT_PING_USER: &str = "ping";
pub const DEFAULT_PING_DEVICE: &str = "ping";

#[derive(Parser, Debug)]
pub struct Opts {
    #[clap(
        long,
        env = "OT_RECORDER_URL",
        default_value = DEFAULT_RECORDER_URL,
        help = "Recorder base URL, without the API endpoint path"
    )]
    pub url: String,

    #[clap(
        short,
        long,
        default_value = DEFAULT_PING_TOPIC,
        help = "Topic the ping location is published to"
    )]
    pub topic: String,

    #[clap(long, default_value = DEFAULT_PING_USER, help = "Recorder user to read back")]
    pub user: String,

    #[clap(long, default_value = DEFAULT_PING_DEVICE, help = "Recorder device to read back")]
    pub device: String,

    #[clap(
        long,
        default_value = "1s",
        value_parser = humantime::parse_duration,
        help = "Time given to the recorder to store the ping before reading it back"
    )]
    pub settle: Duration,

    #[clap(flatten)]
    pub mqtt: MqttArgs,
}
