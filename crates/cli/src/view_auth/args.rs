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

use clap::Parser;
use ot_location::digest::DEFAULT_REALM;

#[derive(Parser, Debug)]
pub struct Opts {
    #[clap(help = "User the digest is generated for")]
    pub username: String,

    #[clap(
        short,
        long,
        default_value = DEFAULT_REALM,
        help = "Digest realm the recorder's views use"
    )]
    pub realm: String,
}
