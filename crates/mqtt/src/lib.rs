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
// Main exports for the ot-mqtt publishing library.

pub mod client;
pub mod errors;
pub mod stats;
pub mod traits;

// Export some things for convenience.
pub use client::{
    ClientCredentials, ClientOptions, ClientTlsConfig, ClientTlsIdentity, MqttPublisher,
    PublishOptions,
};
pub use errors::MqttError;
pub use rumqttc::QoS;
pub use stats::PublishStats;
pub use traits::{DeviceTopic, MqttRecipient};

// qos_from_level maps a numeric QoS level (0, 1 or 2) as given on
// command lines to a QoS.
pub fn qos_from_level(level: u8) -> Option<QoS> {
    match level {
        0 => Some(QoS::AtMostOnce),
        1 => Some(QoS::AtLeastOnce),
        2 => Some(QoS::ExactlyOnce),
        _ => None,
    }
}
