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
use ot_location::WriteMode;

#[derive(Parser, Debug)]
pub struct Opts {
    #[clap(required = true, help = "GPX files to convert")]
    pub files: Vec<PathBuf>,

    #[clap(
        short,
        long,
        default_value = ".",
        help = "Directory the <YYYY-MM>.rec files are written to"
    )]
    pub output_dir: PathBuf,

    #[clap(long, help = "Append to existing month files instead of replacing them")]
    pub append: bool,
}

impl Opts {
    pub fn write_mode(&self) -> WriteMode {
        if self.append {
            WriteMode::Append
        } else {
            WriteMode::Replace
        }
    }
}
