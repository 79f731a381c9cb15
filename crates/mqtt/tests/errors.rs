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

// tests/errors.rs
// Tests for error creation, categorization and conversion.

use std::time::Duration;

use ot_mqtt::MqttError;
use rumqttc::{ClientError, Disconnect, Request};

fn create_test_client_error() -> ClientError {
    ClientError::Request(Request::Disconnect(Disconnect))
}

fn create_test_json_error() -> serde_json::Error {
    serde_json::from_str::<i32>("not a number").unwrap_err()
}

#[test]
fn test_client_error_conversion() {
    let err = MqttError::from(create_test_client_error());

    match err {
        MqttError::ClientError(_) => {} // Expected
        _ => panic!("Should be ClientError"),
    }
    assert!(err.is_connection_error());
    assert!(!err.is_serialization_error());
    assert!(!err.is_timeout());
}

#[test]
fn test_json_error_conversion() {
    let err = MqttError::from(create_test_json_error());

    assert!(matches!(err, MqttError::JsonSerializationError(_)));
    assert!(err.is_serialization_error());
    assert!(!err.is_connection_error());
}

#[test]
fn test_timeout_is_a_connection_error() {
    let err = MqttError::Timeout(Duration::from_millis(250));

    assert!(err.is_timeout());
    assert!(err.is_connection_error());
    assert_eq!(
        err.to_string(),
        "Timed out after 250ms waiting for the MQTT broker"
    );
}

#[test]
fn test_tls_material_error_message() {
    let err = MqttError::TlsMaterial {
        path: "/etc/ssl/missing.pem".into(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    };

    assert!(err.is_configuration_error());
    assert!(!err.is_connection_error());
    assert!(err.to_string().contains("/etc/ssl/missing.pem"));
}
