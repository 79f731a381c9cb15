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

// src/client/publisher.rs
// MqttPublisher publishes messages to a broker one at a time.
//
// Each publish is handed to the rumqttc client and the event loop is
// then driven until the broker has taken the message: the publish
// has gone out (QoS 0), PUBACK arrived (QoS 1) or PUBCOMP arrived
// (QoS 2). Every wait on the broker is bounded by the request
// timeout. Nothing is retried; the first failure is returned.

use std::time::Duration;

use rumqttc::{
    AsyncClient, Event, EventLoop, MqttOptions, Outgoing, Packet, QoS, TlsConfiguration,
    Transport,
};
use serde::Serialize;
use tracing::{debug, info, trace};

use crate::client::options::{
    ClientOptions, DEFAULT_KEEP_ALIVE, DEFAULT_MESSAGE_CHANNEL_CAPACITY, PublishOptions,
};
use crate::errors::MqttError;
use crate::stats::{PublishStats, PublishStatsTracker};
use crate::traits::MqttRecipient;

// rumqttc refuses keep-alives under a second.
const MIN_KEEP_ALIVE: Duration = Duration::from_secs(1);

// Progress is logged every this many messages in publish_all.
const PROGRESS_EVERY: usize = 1000;

pub struct MqttPublisher {
    client: AsyncClient,
    eventloop: EventLoop,
    // broker is host:port, for logging.
    broker: String,
    default_qos: QoS,
    default_retain: bool,
    request_timeout: Duration,
    stats: PublishStatsTracker,
}

impl MqttPublisher {
    // new sets up the client; the connection itself is made lazily
    // by the first publish.
    pub fn new(host: &str, port: u16, options: ClientOptions) -> Self {
        let client_id = options.effective_client_id();
        let mut mqtt_options = MqttOptions::new(client_id.clone(), host, port);
        mqtt_options.set_keep_alive(
            options
                .keep_alive
                .unwrap_or(DEFAULT_KEEP_ALIVE)
                .max(MIN_KEEP_ALIVE),
        );

        if let Some(credentials) = &options.credentials {
            mqtt_options.set_credentials(
                credentials.username.clone(),
                credentials.password.clone(),
            );
        }

        if let Some(tls_config) = &options.tls_config {
            let client_auth = tls_config
                .client_identity
                .as_ref()
                .map(|identity| (identity.certificate.clone(), identity.private_key.clone()));
            mqtt_options.set_transport(Transport::tls_with_config(TlsConfiguration::Simple {
                ca: tls_config.ca_certificate.clone(),
                alpn: None,
                client_auth,
            }));
        }

        let capacity = options
            .message_channel_capacity
            .unwrap_or(DEFAULT_MESSAGE_CHANNEL_CAPACITY);
        let (client, eventloop) = AsyncClient::new(mqtt_options, capacity);
        let (default_qos, default_retain) = options.effective_publish_options();

        debug!(
            "Created MQTT publisher for {}:{} (client_id={}, tls={}, auth={})",
            host,
            port,
            client_id,
            options.tls_config.is_some(),
            options.credentials.is_some(),
        );

        Self {
            client,
            eventloop,
            broker: format!("{host}:{port}"),
            default_qos,
            default_retain,
            request_timeout: options.effective_request_timeout(),
            stats: PublishStatsTracker::new(),
        }
    }

    // publish sends a message as JSON using the default
    // publish options.
    pub async fn publish<R, T>(&mut self, recipient: &R, message: &T) -> Result<(), MqttError>
    where
        R: MqttRecipient + ?Sized,
        T: Serialize + ?Sized,
    {
        self.publish_with_options(recipient, message, PublishOptions::default())
            .await
    }

    // publish_with_options sends a message as JSON, with per-message
    // overrides for QoS and retain.
    pub async fn publish_with_options<R, T>(
        &mut self,
        recipient: &R,
        message: &T,
        publish_options: PublishOptions,
    ) -> Result<(), MqttError>
    where
        R: MqttRecipient + ?Sized,
        T: Serialize + ?Sized,
    {
        let payload = serde_json::to_vec(message)?;
        self.publish_bytes(&recipient.to_mqtt_topic(), payload, publish_options)
            .await
    }

    // publish_bytes sends a raw payload and waits for the broker
    // to take it.
    pub async fn publish_bytes(
        &mut self,
        topic: &str,
        payload: Vec<u8>,
        publish_options: PublishOptions,
    ) -> Result<(), MqttError> {
        let (qos, retain) = publish_options.or_defaults(self.default_qos, self.default_retain);
        let size = payload.len();

        debug!(
            "Publishing {} bytes to {} on {} (qos={:?}, retain={})",
            size, topic, self.broker, qos, retain
        );
        let result = self.deliver(topic, qos, retain, payload).await;
        match &result {
            Ok(()) => self.stats.increment_published(size),
            Err(_) => self.stats.increment_failed(),
        }
        result
    }

    // publish_all sends every message to the same recipient, in
    // order, stopping at the first failure.
    pub async fn publish_all<R, T>(
        &mut self,
        recipient: &R,
        messages: &[T],
        publish_options: PublishOptions,
    ) -> Result<PublishStats, MqttError>
    where
        R: MqttRecipient + ?Sized,
        T: Serialize,
    {
        let total = messages.len();
        for (index, message) in messages.iter().enumerate() {
            self.publish_with_options(recipient, message, publish_options)
                .await?;
            if (index + 1) % PROGRESS_EVERY == 0 {
                info!("Published {} of {} messages", index + 1, total);
            }
        }
        Ok(self.stats.to_stats())
    }

    pub fn publish_stats(&self) -> PublishStats {
        self.stats.to_stats()
    }

    // disconnect sends DISCONNECT, waits for it to go out and
    // returns the final statistics.
    pub async fn disconnect(mut self) -> Result<PublishStats, MqttError> {
        self.client.disconnect().await?;
        loop {
            match self.next_event().await? {
                Event::Outgoing(Outgoing::Disconnect) => break,
                event => trace!("Ignoring MQTT event while disconnecting: {:?}", event),
            }
        }
        debug!("Disconnected from {}", self.broker);
        Ok(self.stats.to_stats())
    }

    async fn deliver(
        &mut self,
        topic: &str,
        qos: QoS,
        retain: bool,
        payload: Vec<u8>,
    ) -> Result<(), MqttError> {
        self.client.publish(topic, qos, retain, payload).await?;

        // Packet id of our publish, once the event loop has sent it.
        let mut pending: Option<u16> = None;
        loop {
            match self.next_event().await? {
                Event::Incoming(Packet::ConnAck(connack)) => {
                    debug!("Connected to {}: {:?}", self.broker, connack.code);
                }
                Event::Outgoing(Outgoing::Publish(pkid)) => {
                    if qos == QoS::AtMostOnce {
                        return Ok(());
                    }
                    pending = Some(pkid);
                }
                Event::Incoming(Packet::PubAck(ack))
                    if qos == QoS::AtLeastOnce && pending == Some(ack.pkid) =>
                {
                    return Ok(());
                }
                Event::Incoming(Packet::PubComp(comp))
                    if qos == QoS::ExactlyOnce && pending == Some(comp.pkid) =>
                {
                    return Ok(());
                }
                event => trace!("Ignoring MQTT event: {:?}", event),
            }
        }
    }

    async fn next_event(&mut self) -> Result<Event, MqttError> {
        let timeout = self.request_timeout;
        match tokio::time::timeout(timeout, self.eventloop.poll()).await {
            Ok(event) => Ok(event?),
            Err(_) => Err(MqttError::Timeout(timeout)),
        }
    }
}
