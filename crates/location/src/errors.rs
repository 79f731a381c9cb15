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

// src/errors.rs
// Error types for building, parsing and writing location records.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Invalid tracker id '{tid}': {reason}")]
    InvalidTid { tid: String, reason: &'static str },

    #[error("Coordinate '{present}' given without '{missing}'")]
    UnpairedCoordinate {
        present: &'static str,
        missing: &'static str,
    },

    #[error("Timestamp {0} is before the Unix epoch")]
    NegativeTimestamp(i64),

    #[error("Point has no timestamp")]
    MissingTimestamp,

    #[error("Invalid timestamp '{0}'")]
    InvalidTimestamp(String),

    #[error("Unexpected record type '{0}'")]
    UnexpectedType(String),

    #[error("Malformed GPX: {0}")]
    MalformedGpx(String),

    #[error("Malformed location export: {0}")]
    MalformedExport(String),

    #[error("Malformed record line: {0}")]
    MalformedRecLine(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<quick_xml::DeError> for LocationError {
    fn from(err: quick_xml::DeError) -> Self {
        LocationError::MalformedGpx(err.to_string())
    }
}
