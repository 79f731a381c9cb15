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

// src/stats/publish.rs
// Publish statistics tracking for sent messages.

// PublishStats stores a snapshot of sent message statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishStats {
    // total_published is count of messages acknowledged by the
    // broker (or sent, for QoS 0).
    pub total_published: usize,
    // total_failed is count of messages that failed to send.
    pub total_failed: usize,
    // total_bytes_published is total payload size of messages
    // successfully sent.
    pub total_bytes_published: usize,
}

// PublishStatsTracker is owned by a single publisher, which
// only ever has one message in flight, so plain counters do.
#[derive(Debug, Default)]
pub struct PublishStatsTracker {
    published_count: usize,
    failed_count: usize,
    published_bytes: usize,
}

impl PublishStatsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    // increment_published will record a successful message publish
    // (e.g. increment_published(512) for a 512-byte payload).
    pub fn increment_published(&mut self, bytes: usize) {
        self.published_count += 1;
        self.published_bytes += bytes;
    }

    // increment_failed will record a failed message publish, due to
    // connection, authentication or broker issues.
    pub fn increment_failed(&mut self) {
        self.failed_count += 1;
    }

    pub fn reset_counters(&mut self) {
        *self = Self::default();
    }

    // to_stats will create an immutable snapshot of current publish
    // statistics.
    pub fn to_stats(&self) -> PublishStats {
        PublishStats {
            total_published: self.published_count,
            total_failed: self.failed_count,
            total_bytes_published: self.published_bytes,
        }
    }
}
