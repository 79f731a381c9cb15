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

// src/traits.rs
// Topic addressing for published messages.

use std::fmt;

pub const DEFAULT_TOPIC_PREFIX: &str = "owntracks";

// MqttRecipient enables any type to specify where messages should be sent.
// Implement this trait to create strongly-typed addressing.
pub trait MqttRecipient {
    // to_mqtt_topic converts recipient into MQTT topic string
    fn to_mqtt_topic(&self) -> String;
}

// String implements MqttRecipient to allow simple topic strings
impl MqttRecipient for String {
    fn to_mqtt_topic(&self) -> String {
        self.clone()
    }
}

// str implements MqttRecipient to allow string literals as topics
impl MqttRecipient for str {
    fn to_mqtt_topic(&self) -> String {
        self.to_string()
    }
}

impl MqttRecipient for &str {
    fn to_mqtt_topic(&self) -> String {
        self.to_string()
    }
}

// DeviceTopic addresses a user's device under the recorder's
// topic layout, <prefix>/<user>/<device>.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceTopic {
    pub prefix: String,
    pub user: String,
    pub device: String,
}

impl DeviceTopic {
    pub fn new(user: impl Into<String>, device: impl Into<String>) -> Self {
        Self {
            prefix: DEFAULT_TOPIC_PREFIX.to_string(),
            user: user.into(),
            device: device.into(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }
}

impl MqttRecipient for DeviceTopic {
    fn to_mqtt_topic(&self) -> String {
        format!("{}/{}/{}", self.prefix, self.user, self.device)
    }
}

impl fmt::Display for DeviceTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_mqtt_topic())
    }
}
