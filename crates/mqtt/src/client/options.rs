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

// src/client/options.rs
// Configuration options for the publisher.
use std::path::Path;
use std::time::Duration;

use rumqttc::QoS;

use crate::errors::MqttError;

pub const DEFAULT_KEEP_ALIVE: Duration = Duration::from_secs(60);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_MESSAGE_CHANNEL_CAPACITY: usize = 10;
pub const DEFAULT_QOS: QoS = QoS::AtMostOnce;
pub const DEFAULT_RETAIN: bool = false;

// ClientOptions are optional parameters that can be
// passed to the publisher, all of which have default
// fallbacks.
#[derive(Clone, Debug, Default)]
pub struct ClientOptions {
    // client_id is the MQTT client id to connect with.
    // Defaults to "ot-contrib-<pid>".
    pub client_id: Option<String>,
    // keep_alive sets the keepalive to use for MQTT broker connections.
    // Defaults to DEFAULT_KEEP_ALIVE.
    pub keep_alive: Option<Duration>,
    // request_timeout bounds every wait on the broker: the
    // connection handshake, each publish acknowledgement and
    // the final disconnect.
    // Defaults to DEFAULT_REQUEST_TIMEOUT.
    pub request_timeout: Option<Duration>,
    // message_channel_capacity is the number of requests the
    // underlying async client queue buffers.
    // Defaults to DEFAULT_MESSAGE_CHANNEL_CAPACITY.
    pub message_channel_capacity: Option<usize>,
    // publish_options is used when no explicit PublishOptions are
    // provided for a given publish. If this is None, then
    // the default consts are used as fallback.
    pub publish_options: Option<PublishOptions>,
    // credentials are optional username/password credentials
    // that can be provided to the MQTT server for authnz. This
    // can be used with or without a tls_config.
    pub credentials: Option<ClientCredentials>,
    // tls_config is an optional ClientTlsConfig to provide
    // for using TLS, and optionally, mTLS. This can be used
    // with or without credentials.
    pub tls_config: Option<ClientTlsConfig>,
}

impl ClientOptions {
    // Builder methods that consume and return Self
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn with_keep_alive(mut self, keep_alive: Duration) -> Self {
        self.keep_alive = Some(keep_alive);
        self
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = Some(request_timeout);
        self
    }

    pub fn with_message_channel_capacity(mut self, capacity: usize) -> Self {
        self.message_channel_capacity = Some(capacity);
        self
    }

    pub fn with_qos(mut self, qos: QoS) -> Self {
        // Initialize publish_options if None, then set qos
        let mut pub_opts = self.publish_options.unwrap_or_default();
        pub_opts.qos = Some(qos);
        self.publish_options = Some(pub_opts);
        self
    }

    pub fn with_retain(mut self, retain: bool) -> Self {
        let mut pub_opts = self.publish_options.unwrap_or_default();
        pub_opts.retain = Some(retain);
        self.publish_options = Some(pub_opts);
        self
    }

    pub fn with_publish_options(mut self, publish_options: PublishOptions) -> Self {
        self.publish_options = Some(publish_options);
        self
    }

    pub fn with_credentials(mut self, credentials: ClientCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn with_tls_config(mut self, tls_config: ClientTlsConfig) -> Self {
        self.tls_config = Some(tls_config);
        self
    }

    // effective_client_id returns the configured client id, or
    // a per-process default.
    // Blank ids fall back too, since brokers (and rumqttc) refuse them.
    pub fn effective_client_id(&self) -> String {
        self.client_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("ot-contrib-{}", std::process::id()))
    }

    pub fn effective_request_timeout(&self) -> Duration {
        self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT)
    }

    // effective_publish_options fills any unset publish option
    // with the default consts.
    pub fn effective_publish_options(&self) -> (QoS, bool) {
        let opts = self.publish_options.unwrap_or_default();
        (
            opts.qos.unwrap_or(DEFAULT_QOS),
            opts.retain.unwrap_or(DEFAULT_RETAIN),
        )
    }
}

// PublishOptions contains options used for publishing
// messages. The ClientOptions carry the defaults, and
// individual publishes can override them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PublishOptions {
    // qos is the MQTT QoS level for the message.
    pub qos: Option<QoS>,
    // retain is the MQTT retain flag for the message.
    pub retain: Option<bool>,
}

impl PublishOptions {
    pub fn with_qos(mut self, qos: QoS) -> Self {
        self.qos = Some(qos);
        self
    }

    pub fn with_retain(mut self, retain: bool) -> Self {
        self.retain = Some(retain);
        self
    }

    // or_defaults resolves unset fields against the
    // client-wide defaults.
    pub fn or_defaults(&self, default_qos: QoS, default_retain: bool) -> (QoS, bool) {
        (
            self.qos.unwrap_or(default_qos),
            self.retain.unwrap_or(default_retain),
        )
    }
}

// ClientCredentials are used for providing a username
// and password to the MQTT server.
#[derive(Clone, Debug)]
pub struct ClientCredentials {
    pub username: String,
    pub password: String,
}

// ClientTlsConfig is config for using TLS (and optionally
// mTLS) with the MQTT server.
#[derive(Clone, Debug)]
pub struct ClientTlsConfig {
    // ca_certificate is PEM bytes for a CA certificate (or
    // CA certificate bundle).
    pub ca_certificate: Vec<u8>,
    // client_identity is an optional client certificate
    // and private key to do mTLS with the MQTT server.
    pub client_identity: Option<ClientTlsIdentity>,
}

// ClientTlsIdentity is config to negotiate an mTLS
// handshake with the MQTT server.
#[derive(Clone, Debug)]
pub struct ClientTlsIdentity {
    // certificate is PEM bytes for a client certificate.
    pub certificate: Vec<u8>,
    // private_key is PEM bytes for the matching key.
    pub private_key: Vec<u8>,
}

impl ClientTlsConfig {
    // from_files loads PEM material from disk, e.g. the paths
    // given as --cacerts, --cert and --key.
    pub fn from_files(
        ca_path: &Path,
        identity_paths: Option<(&Path, &Path)>,
    ) -> Result<Self, MqttError> {
        let ca_certificate = read_pem(ca_path)?;
        let client_identity = match identity_paths {
            Some((cert_path, key_path)) => Some(ClientTlsIdentity {
                certificate: read_pem(cert_path)?,
                private_key: read_pem(key_path)?,
            }),
            None => None,
        };
        Ok(Self {
            ca_certificate,
            client_identity,
        })
    }
}

fn read_pem(path: &Path) -> Result<Vec<u8>, MqttError> {
    std::fs::read(path).map_err(|source| MqttError::TlsMaterial {
        path: path.to_path_buf(),
        source,
    })
}
