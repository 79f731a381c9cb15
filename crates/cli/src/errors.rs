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

use ot_api_client::ApiError;
use ot_location::{LocationError, Status};
use ot_mqtt::MqttError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Location(#[from] LocationError),

    #[error("{0}")]
    Mqtt(#[from] MqttError),

    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("Passwords don't match")]
    PasswordMismatch,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // CheckFailed carries a non-OK health check status whose status
    // line has already been written.
    #[error("Check finished with status {0}")]
    CheckFailed(Status),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    // exit_code is the process exit code for the error. 2 is reserved
    // for a password mismatch (and CRITICAL checks), so parse errors
    // and everything else exit 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::PasswordMismatch => 2,
            CliError::CheckFailed(status) => status.exit_code(),
            _ => 1,
        }
    }

    // report_line is what main prints to stderr, if anything.
    pub fn report_line(&self) -> Option<String> {
        match self {
            CliError::CheckFailed(_) => None,
            CliError::PasswordMismatch => Some(self.to_string()),
            _ => Some(format!("Error: {self}")),
        }
    }
}
