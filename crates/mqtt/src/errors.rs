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
// Error types for the MQTT publisher.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MqttError {
    #[error("MQTT connection error: {0}")]
    ConnectionError(#[from] rumqttc::ConnectionError),

    #[error("MQTT client error: {0}")]
    ClientError(#[from] rumqttc::ClientError),

    #[error("Timed out after {0:?} waiting for the MQTT broker")]
    Timeout(Duration),

    #[error("JSON serialization error: {0}")]
    JsonSerializationError(#[from] serde_json::Error),

    #[error("Failed to read TLS material from {path}: {source}")]
    TlsMaterial {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MqttError {
    // is_connection_error covers everything that went wrong talking
    // to the broker, including running out of time.
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            MqttError::ConnectionError(_) | MqttError::ClientError(_) | MqttError::Timeout(_)
        )
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, MqttError::Timeout(_))
    }

    pub fn is_serialization_error(&self) -> bool {
        matches!(self, MqttError::JsonSerializationError(_))
    }

    pub fn is_configuration_error(&self) -> bool {
        matches!(self, MqttError::TlsMaterial { .. })
    }
}
