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

// Connection flags shared by every command that talks to the broker.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use ot_mqtt::{ClientCredentials, ClientOptions, ClientTlsConfig, MqttPublisher};

use crate::errors::{CliError, CliResult};

#[derive(Args, Clone, Debug)]
pub struct MqttArgs {
    #[clap(
        short = 'H',
        long,
        env = "OT_MQTT_HOST",
        default_value = "localhost",
        help = "MQTT broker host"
    )]
    pub host: String,

    #[clap(
        short,
        long,
        env = "OT_MQTT_PORT",
        default_value_t = 1883,
        help = "MQTT broker port"
    )]
    pub port: u16,

    #[clap(
        long,
        env = "OT_MQTT_CACERTS",
        help = "PEM CA certificate (bundle); enables TLS"
    )]
    pub cacerts: Option<PathBuf>,

    #[clap(
        long,
        env = "OT_MQTT_CERT",
        requires = "key",
        help = "PEM client certificate for mutual TLS"
    )]
    pub cert: Option<PathBuf>,

    #[clap(
        long,
        env = "OT_MQTT_KEY",
        requires = "cert",
        help = "PEM private key for --cert"
    )]
    pub key: Option<PathBuf>,

    #[clap(short, long, env = "OT_MQTT_USER", help = "MQTT username")]
    pub username: Option<String>,

    #[clap(
        short = 'P',
        long,
        env = "OT_MQTT_PASSWORD",
        hide_env_values = true,
        requires = "username",
        help = "MQTT password"
    )]
    pub password: Option<String>,

    #[clap(short = 'i', long, env = "OT_MQTT_CLIENTID", help = "MQTT client id")]
    pub clientid: Option<String>,

    #[clap(
        long,
        env = "OT_MQTT_KEEP_ALIVE",
        default_value = "60s",
        value_parser = humantime::parse_duration,
        help = "MQTT keep-alive interval"
    )]
    pub keep_alive: Duration,

    #[clap(
        long,
        env = "OT_MQTT_TIMEOUT",
        default_value = "10s",
        value_parser = humantime::parse_duration,
        help = "How long to wait for the broker on connect and each publish"
    )]
    pub mqtt_timeout: Duration,
}

// BrokerAddress is where the publisher connects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrokerAddress {
    pub host: String,
    pub port: u16,
}

impl MqttArgs {
    pub fn broker_address(&self) -> BrokerAddress {
        BrokerAddress {
            host: self.host.clone(),
            port: self.port,
        }
    }

    // client_options converts the flags into publisher options.
    // default_client_id is used when no --clientid is given.
    pub fn client_options(&self, default_client_id: Option<String>) -> CliResult<ClientOptions> {
        let mut options = ClientOptions::default()
            .with_keep_alive(self.keep_alive)
            .with_request_timeout(self.mqtt_timeout);

        if let Some(client_id) = self.clientid.clone().or(default_client_id) {
            options = options.with_client_id(client_id);
        }

        if let Some(username) = &self.username {
            options = options.with_credentials(ClientCredentials {
                username: username.clone(),
                password: self.password.clone().unwrap_or_default(),
            });
        }

        let identity = self.cert.as_deref().zip(self.key.as_deref());
        match &self.cacerts {
            Some(ca_path) => {
                options = options.with_tls_config(ClientTlsConfig::from_files(ca_path, identity)?);
            }
            None if identity.is_some() => {
                return Err(CliError::InvalidInput(
                    "--cert/--key need --cacerts to enable TLS".to_string(),
                ));
            }
            None => {}
        }

        Ok(options)
    }

    pub fn publisher(&self, default_client_id: Option<String>) -> CliResult<MqttPublisher> {
        let address = self.broker_address();
        Ok(MqttPublisher::new(
            &address.host,
            address.port,
            self.client_options(default_client_id)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;

    use super::*;

    #[derive(Parser, Debug)]
    struct Harness {
        #[clap(flatten)]
        mqtt: MqttArgs,
    }

    #[test]
    fn test_defaults() {
        let harness = Harness::try_parse_from(["harness"]).expect("should parse defaults");
        assert_eq!(
            harness.mqtt.broker_address(),
            BrokerAddress {
                host: "localhost".to_string(),
                port: 1883
            }
        );
        assert_eq!(harness.mqtt.keep_alive, Duration::from_secs(60));
        assert_eq!(harness.mqtt.mqtt_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_short_flags() {
        let harness = Harness::try_parse_from([
            "harness", "-H", "broker", "-p", "8883", "-u", "jane", "-P", "secret", "-i", "me",
        ])
        .expect("should parse short flags");

        let options = harness.mqtt.client_options(None).unwrap();
        assert_eq!(options.effective_client_id(), "me");
        let credentials = options.credentials.expect("credentials");
        assert_eq!(credentials.username, "jane");
        assert_eq!(credentials.password, "secret");
        assert!(options.tls_config.is_none());
        assert_eq!(harness.mqtt.port, 8883);
    }

    #[test]
    fn test_default_client_id_used_without_flag() {
        let harness = Harness::try_parse_from(["harness"]).unwrap();
        let options = harness
            .mqtt
            .client_options(Some("ot-recorder-ping-ping-1".to_string()))
            .unwrap();
        assert_eq!(options.effective_client_id(), "ot-recorder-ping-ping-1");
    }

    #[test]
    fn test_humantime_durations() {
        let harness =
            Harness::try_parse_from(["harness", "--keep-alive", "5s", "--mqtt-timeout", "250ms"])
                .unwrap();
        assert_eq!(harness.mqtt.keep_alive, Duration::from_secs(5));
        assert_eq!(harness.mqtt.mqtt_timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_cert_requires_key() {
        assert!(Harness::try_parse_from(["harness", "--cert", "client.pem"]).is_err());
    }

    #[test]
    fn test_client_identity_requires_cacerts() {
        let harness =
            Harness::try_parse_from(["harness", "--cert", "client.pem", "--key", "client.key"])
                .unwrap();
        assert!(matches!(
            harness.mqtt.client_options(None),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_tls_material_is_loaded() {
        let mut ca = tempfile::NamedTempFile::new().unwrap();
        ca.write_all(b"-----BEGIN CERTIFICATE-----\n").unwrap();
        let path = ca.path().to_str().unwrap().to_string();

        let harness = Harness::try_parse_from(["harness", "--cacerts", &path]).unwrap();
        let options = harness.mqtt.client_options(None).unwrap();
        let tls = options.tls_config.expect("tls config");
        assert_eq!(tls.ca_certificate, b"-----BEGIN CERTIFICATE-----\n");
        assert!(tls.client_identity.is_none());
    }

    #[test]
    fn test_missing_ca_file_is_an_error() {
        let harness =
            Harness::try_parse_from(["harness", "--cacerts", "/nonexistent/ca.pem"]).unwrap();
        assert!(matches!(
            harness.mqtt.client_options(None),
            Err(CliError::Mqtt(_))
        ));
    }
}
