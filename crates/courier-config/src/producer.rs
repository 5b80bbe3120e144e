//! Producer configuration builder.
//!
//! This module provides [`ProducerConfig`], which collects typed producer
//! settings and renders them into the property list a producer client takes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::registry::{self, ClientRole};
use crate::rendered::Renderer;
use crate::{
    Acknowledgment, ClientConfig, Compression, ConfigResult, Partitioner, RenderedConfig,
    WireValue,
};

/// Producer client configuration.
///
/// Every field is optional. [`render`](Self::render) emits the shared
/// [`ClientConfig`] fields, then the producer fields in declaration order, then
/// the overrides in insertion order.
///
/// # Example
///
/// ```
/// use courier_config::{Acknowledgment, Compression, ProducerConfig, WireValue};
///
/// let rendered = ProducerConfig::new()
///     .with_client_id("svc-a")
///     .with_acks(Acknowledgment::All)
///     .with_compression_type(Compression::Lz4)
///     .render()
///     .unwrap();
///
/// assert_eq!(rendered.get("acks"), Some(&WireValue::Int(-1)));
/// assert_eq!(rendered.get("compression.codec"), Some(&WireValue::from("lz4")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProducerConfig {
    /// Shared client settings, the `client` sub-table.
    #[serde(skip_serializing_if = "ClientConfig::is_empty")]
    pub client: ClientConfig,

    /// Send retries for a failing message (`message.send.max.retries`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_send_max_retries: Option<i32>,

    /// Required acknowledgments (`acks`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acks: Option<Acknowledgment>,

    /// Batching delay in milliseconds (`linger.ms`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linger_ms: Option<i32>,

    /// Compression codec (`compression.codec`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compression_type: Option<Compression>,

    /// Partitioning strategy (`partitioner`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partitioner: Option<Partitioner>,

    /// Produce request timeout in milliseconds (`request.timeout.ms`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_ms: Option<i32>,

    /// Unmodeled properties, appended after the typed entries unvalidated.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub overrides: IndexMap<String, WireValue>,
}

impl ProducerConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the shared client settings.
    pub fn with_client(mut self, client: ClientConfig) -> Self {
        self.client = client;
        self
    }

    /// Set the bootstrap servers.
    pub fn with_bootstrap_servers(mut self, servers: impl Into<String>) -> Self {
        self.client = self.client.with_bootstrap_servers(servers);
        self
    }

    /// Set the client id.
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client = self.client.with_client_id(client_id);
        self
    }

    /// Set whether broker disconnects are logged.
    pub fn with_log_connection_close(mut self, enabled: bool) -> Self {
        self.client = self.client.with_log_connection_close(enabled);
        self
    }

    /// Set the maximum in-flight requests per connection.
    pub fn with_max_in_flight(mut self, max: i32) -> Self {
        self.client = self.client.with_max_in_flight(max);
        self
    }

    /// Set the retry backoff.
    pub fn with_retry_backoff_ms(mut self, ms: i32) -> Self {
        self.client = self.client.with_retry_backoff_ms(ms);
        self
    }

    /// Set TCP keepalive.
    pub fn with_socket_keepalive(mut self, enabled: bool) -> Self {
        self.client = self.client.with_socket_keepalive(enabled);
        self
    }

    /// Set the statistics interval.
    pub fn with_statistics_interval_ms(mut self, ms: i32) -> Self {
        self.client = self.client.with_statistics_interval_ms(ms);
        self
    }

    /// Set the send retry count.
    pub fn with_message_send_max_retries(mut self, retries: i32) -> Self {
        self.message_send_max_retries = Some(retries);
        self
    }

    /// Set the acknowledgment mode.
    pub fn with_acks(mut self, acks: Acknowledgment) -> Self {
        self.acks = Some(acks);
        self
    }

    /// Set the batching delay.
    pub fn with_linger_ms(mut self, ms: i32) -> Self {
        self.linger_ms = Some(ms);
        self
    }

    /// Set the compression codec.
    pub fn with_compression_type(mut self, compression: Compression) -> Self {
        self.compression_type = Some(compression);
        self
    }

    /// Set the partitioning strategy.
    pub fn with_partitioner(mut self, partitioner: Partitioner) -> Self {
        self.partitioner = Some(partitioner);
        self
    }

    /// Set the request timeout.
    pub fn with_request_timeout_ms(mut self, ms: i32) -> Self {
        self.request_timeout_ms = Some(ms);
        self
    }

    /// Add an unmodeled property, replacing any earlier override for `key`.
    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<WireValue>) -> Self {
        self.add_override(key, value);
        self
    }

    /// Add an unmodeled property in place.
    ///
    /// Re-adding a key replaces its value but keeps its original position.
    pub fn add_override(
        &mut self,
        key: impl Into<String>,
        value: impl Into<WireValue>,
    ) -> &mut Self {
        self.overrides.insert(key.into(), value.into());
        self
    }

    /// Render into the ordered property list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfigValue`](crate::ConfigError::InvalidConfigValue)
    /// for the first field whose value is blank; nothing is returned in that case.
    pub fn render(&self) -> ConfigResult<RenderedConfig> {
        let mut renderer = Renderer::new(ClientRole::Producer);
        self.client.render_into(&mut renderer)?;
        renderer.field(
            &registry::MESSAGE_SEND_MAX_RETRIES,
            self.message_send_max_retries.as_ref(),
        )?;
        renderer.field(&registry::ACKS, self.acks.as_ref())?;
        renderer.field(&registry::LINGER_MS, self.linger_ms.as_ref())?;
        renderer.field(&registry::COMPRESSION_CODEC, self.compression_type.as_ref())?;
        renderer.field(&registry::PARTITIONER, self.partitioner.as_ref())?;
        renderer.field(&registry::REQUEST_TIMEOUT_MS, self.request_timeout_ms.as_ref())?;
        renderer.overrides(&self.overrides);
        Ok(renderer.finish())
    }
}
