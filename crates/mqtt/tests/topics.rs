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

// tests/topics.rs
// Tests for topic addressing.

use ot_mqtt::{DeviceTopic, MqttRecipient};

#[test]
fn test_string_recipients() {
    assert_eq!("owntracks/jane/phone".to_mqtt_topic(), "owntracks/jane/phone");
    assert_eq!(
        String::from("owntracks/jane/phone").to_mqtt_topic(),
        "owntracks/jane/phone"
    );
}

#[test]
fn test_device_topic_layout() {
    let topic = DeviceTopic::new("ping", "ping");
    assert_eq!(topic.to_mqtt_topic(), "owntracks/ping/ping");
    assert_eq!(topic.to_string(), "owntracks/ping/ping");
}

#[test]
fn test_device_topic_custom_prefix() {
    let topic = DeviceTopic::new("jane", "phone").with_prefix("tracks");
    assert_eq!(topic.to_mqtt_topic(), "tracks/jane/phone");
}
