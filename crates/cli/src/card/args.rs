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
use ot_api_client::DEFAULT_DIRECTORY_URL;

use crate::cfg::mqtt::MqttArgs;

pub const DEFAULT_AVATAR_SIZE: u32 = 40;

#[derive(Parser, Debug)]
pub struct Opts {
    #[clap(value_name = "USERNAME", help = "User to look up in the directory")]
    pub user: String,

    #[clap(
        short,
        long,
        default_value = ".",
        help = "Directory the avatar image (<USERNAME>.png) is written to"
    )]
    pub output_dir: PathBuf,

    #[clap(
        short,
        long,
        default_value_t = DEFAULT_AVATAR_SIZE,
        help = "Avatar size in pixels"
    )]
    pub size: u32,

    #[clap(
        long,
        env = "OT_DIRECTORY_URL",
        default_value = DEFAULT_DIRECTORY_URL,
        help = "Base URL of the user directory API"
    )]
    pub directory_url: String,

    #[clap(
        long,
        help = "Also publish the card, retained, to this topic (e.g. owntracks/jane/phone/info)"
    )]
    pub publish_topic: Option<String>,

    #[clap(flatten)]
    pub mqtt: MqttArgs,
}
