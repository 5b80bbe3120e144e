//! Properties shared by producers and consumers.

use serde::{Deserialize, Serialize};

use crate::registry;
use crate::rendered::Renderer;
use crate::ConfigResult;

/// Shared client settings.
///
/// Embedded as `client` in both [`ProducerConfig`](crate::ProducerConfig) and
/// [`ConsumerConfig`](crate::ConsumerConfig), where it serializes as a `client`
/// sub-table. Every field is optional; unset fields are not rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Initial broker list (`bootstrap.servers`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bootstrap_servers: Option<String>,

    /// Client identifier (`client.id`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// Log broker disconnects (`log.connection.close`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_connection_close: Option<bool>,

    /// Maximum in-flight requests per connection
    /// (`max.in.flight.requests.per.connection`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_in_flight: Option<i32>,

    /// Retry backoff in milliseconds (`retry.backoff.ms`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_backoff_ms: Option<i32>,

    /// TCP keepalive (`socket.keepalive.enable`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket_keepalive: Option<bool>,

    /// Statistics interval in milliseconds (`statistics.interval.ms`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics_interval_ms: Option<i32>,
}

impl ClientConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Set the bootstrap servers.
    pub fn with_bootstrap_servers(mut self, servers: impl Into<String>) -> Self {
        self.bootstrap_servers = Some(servers.into());
        self
    }

    /// Set the client id.
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Set whether broker disconnects are logged.
    pub fn with_log_connection_close(mut self, enabled: bool) -> Self {
        self.log_connection_close = Some(enabled);
        self
    }

    /// Set the maximum in-flight requests per connection.
    pub fn with_max_in_flight(mut self, max: i32) -> Self {
        self.max_in_flight = Some(max);
        self
    }

    /// Set the retry backoff.
    pub fn with_retry_backoff_ms(mut self, ms: i32) -> Self {
        self.retry_backoff_ms = Some(ms);
        self
    }

    /// Set TCP keepalive.
    pub fn with_socket_keepalive(mut self, enabled: bool) -> Self {
        self.socket_keepalive = Some(enabled);
        self
    }

    /// Set the statistics interval.
    pub fn with_statistics_interval_ms(mut self, ms: i32) -> Self {
        self.statistics_interval_ms = Some(ms);
        self
    }

    /// Render the shared fields, in registry order.
    pub(crate) fn render_into(&self, renderer: &mut Renderer) -> ConfigResult<()> {
        renderer.field(
            &registry::BOOTSTRAP_SERVERS,
            self.bootstrap_servers.as_deref(),
        )?;
        renderer.field(&registry::CLIENT_ID, self.client_id.as_deref())?;
        renderer.field(
            &registry::LOG_CONNECTION_CLOSE,
            self.log_connection_close.as_ref(),
        )?;
        renderer.field(&registry::MAX_IN_FLIGHT, self.max_in_flight.as_ref())?;
        renderer.field(&registry::RETRY_BACKOFF_MS, self.retry_backoff_ms.as_ref())?;
        renderer.field(&registry::SOCKET_KEEPALIVE, self.socket_keepalive.as_ref())?;
        renderer.field(
            &registry::STATISTICS_INTERVAL_MS,
            self.statistics_interval_ms.as_ref(),
        )?;
        Ok(())
    }
}
