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

// src/digest.rs
// Password digests for the recorder's HTTP digest view auth.

pub const DEFAULT_REALM: &str = "owntracks-recorder";

// digest_password returns the lowercase hex HA1 hash,
// md5("username:realm:password").
pub fn digest_password(realm: &str, username: &str, password: &str) -> String {
    format!("{:x}", md5::compute(format!("{username}:{realm}:{password}")))
}

// auth_line renders a digest as the `auth` entry of a view config.
pub fn auth_line(digest: &str) -> String {
    format!("\"auth\" : [ \"{digest}\" ]")
}
