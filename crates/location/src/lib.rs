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

// src/lib.rs
// Location records and the file formats that carry them: recorder
// .rec files, GPX tracks and location-history exports, plus the
// small helpers (view auth digests, monitoring status) shared by
// the contrib tools.

pub mod digest;
pub mod errors;
pub mod gpx;
pub mod rec_file;
pub mod record;
pub mod status;
pub mod takeout;

// Export some things for convenience.
pub use errors::LocationError;
pub use gpx::TrackPoint;
pub use rec_file::{RecLine, WriteMode};
pub use record::{CardRecord, LocationRecord, Position, Tid};
pub use status::{CheckResult, Status};
pub use takeout::LocationHistory;
