//! Consumer configuration builder.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::registry::{self, ClientRole};
use crate::rendered::Renderer;
use crate::{ClientConfig, ConfigResult, OffsetReset, RenderedConfig, WireValue};

/// Consumer client configuration.
///
/// Renders the shared [`ClientConfig`] fields, then the consumer fields in
/// declaration order, then the overrides in insertion order.
///
/// # Example
///
/// ```
/// use courier_config::{ConsumerConfig, OffsetReset};
///
/// let properties = ConsumerConfig::new()
///     .with_bootstrap_servers("localhost:9092")
///     .with_group_id("billing")
///     .with_auto_offset_reset(OffsetReset::Earliest)
///     .with_enable_auto_commit(false)
///     .render()
///     .unwrap()
///     .to_properties();
///
/// assert_eq!(properties["group.id"], "billing");
/// assert_eq!(properties["enable.auto.commit"], "false");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsumerConfig {
    /// Shared client settings, the `client` sub-table.
    #[serde(skip_serializing_if = "ClientConfig::is_empty")]
    pub client: ClientConfig,

    /// Auto-commit frequency in milliseconds (`auto.commit.interval.ms`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_commit_interval_ms: Option<i32>,

    /// Offset reset policy (`auto.offset.reset`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_offset_reset: Option<OffsetReset>,

    /// Background offset commits (`enable.auto.commit`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_auto_commit: Option<bool>,

    /// Automatic offset store (`enable.auto.offset.store`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_auto_offset_store: Option<bool>,

    /// Consumer group (`group.id`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    /// Fetch response size limit (`fetch.max.bytes`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_max_bytes: Option<i32>,

    /// Minimum fetch response size (`fetch.min.bytes`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_min_bytes: Option<i32>,

    /// Unmodeled properties, appended after the typed entries unvalidated.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub overrides: IndexMap<String, WireValue>,
}

impl ConsumerConfig {
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

    /// Set the auto-commit interval.
    pub fn with_auto_commit_interval_ms(mut self, ms: i32) -> Self {
        self.auto_commit_interval_ms = Some(ms);
        self
    }

    /// Set the offset reset policy.
    pub fn with_auto_offset_reset(mut self, policy: OffsetReset) -> Self {
        self.auto_offset_reset = Some(policy);
        self
    }

    /// Enable or disable background offset commits.
    pub fn with_enable_auto_commit(mut self, enabled: bool) -> Self {
        self.enable_auto_commit = Some(enabled);
        self
    }

    /// Enable or disable the automatic offset store.
    pub fn with_enable_auto_offset_store(mut self, enabled: bool) -> Self {
        self.enable_auto_offset_store = Some(enabled);
        self
    }

    /// Set the consumer group.
    pub fn with_group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    /// Set the fetch response size limit.
    pub fn with_fetch_max_bytes(mut self, bytes: i32) -> Self {
        self.fetch_max_bytes = Some(bytes);
        self
    }

    /// Set the minimum fetch response size.
    pub fn with_fetch_min_bytes(mut self, bytes: i32) -> Self {
        self.fetch_min_bytes = Some(bytes);
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
    /// for the first blank field.
    pub fn render(&self) -> ConfigResult<RenderedConfig> {
        let mut renderer = Renderer::new(ClientRole::Consumer);
        self.client.render_into(&mut renderer)?;
        renderer.field(
            &registry::AUTO_COMMIT_INTERVAL_MS,
            self.auto_commit_interval_ms.as_ref(),
        )?;
        renderer.field(&registry::AUTO_OFFSET_RESET, self.auto_offset_reset.as_ref())?;
        renderer.field(&registry::ENABLE_AUTO_COMMIT, self.enable_auto_commit.as_ref())?;
        renderer.field(
            &registry::ENABLE_AUTO_OFFSET_STORE,
            self.enable_auto_offset_store.as_ref(),
        )?;
        renderer.field(&registry::GROUP_ID, self.group_id.as_deref())?;
        renderer.field(&registry::FETCH_MAX_BYTES, self.fetch_max_bytes.as_ref())?;
        renderer.field(&registry::FETCH_MIN_BYTES, self.fetch_min_bytes.as_ref())?;
        renderer.overrides(&self.overrides);
        Ok(renderer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;

    #[test]
    fn test_empty_consumer() {
        assert!(ConsumerConfig::new().render().unwrap().is_empty());
    }

    #[test]
    fn test_values() {
        let rendered = ConsumerConfig::new()
            .with_auto_offset_reset(OffsetReset::Error)
            .with_enable_auto_offset_store(false)
            .with_fetch_min_bytes(0)
            .render()
            .unwrap();
        assert_eq!(
            rendered.get("auto.offset.reset"),
            Some(&WireValue::from("error"))
        );
        assert_eq!(
            rendered.get("enable.auto.offset.store"),
            Some(&WireValue::Bool(false))
        );
        assert_eq!(rendered.get("fetch.min.bytes"), Some(&WireValue::Int(0)));
    }

    #[test]
    fn test_blank_group_id_rejected() {
        let err = ConsumerConfig::new()
            .with_bootstrap_servers("localhost:9092")
            .with_group_id("\t")
            .with_override("x", 1)
            .render()
            .unwrap_err();
        assert_eq!(err, ConfigError::invalid_config_value("group.id"));
    }

    #[test]
    fn test_first_invalid_field_wins() {
        let err = ConsumerConfig::new()
            .with_client_id(" ")
            .with_group_id("")
            .render()
            .unwrap_err();
        assert_eq!(err.key(), Some("client.id"));
    }

    #[test]
    fn test_shared_fields_match_producer() {
        let client = ClientConfig::new()
            .with_bootstrap_servers("b:9092")
            .with_socket_keepalive(true)
            .with_max_in_flight(1);
        let consumer = ConsumerConfig::new().with_client(client.clone()).render().unwrap();
        let producer = crate::ProducerConfig::new()
            .with_client(client)
            .render()
            .unwrap();
        assert_eq!(consumer, producer);
    }

    #[test]
    fn test_toml_section() {
        let toml_str = r#"
            group_id = "billing"
            auto_offset_reset = "earliest"
            enable_auto_commit = false
            fetch_min_bytes = 1

            [client]
            bootstrap_servers = "broker:9092"

            [overrides]
            "session.timeout.ms" = 10000
        "#;

        let config: ConsumerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.group_id.as_deref(), Some("billing"));
        assert_eq!(config.auto_offset_reset, Some(OffsetReset::Earliest));
        assert_eq!(config.enable_auto_commit, Some(false));

        let rendered = config.render().unwrap();
        let ids: Vec<_> = rendered.iter().map(|e| e.id()).collect();
        assert_eq!(
            ids,
            [
                "bootstrap.servers",
                "auto.offset.reset",
                "enable.auto.commit",
                "group.id",
                "fetch.min.bytes",
                "session.timeout.ms",
            ]
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let toml_str = r#"
            group = "billing"
            auto_offset_reset = "earliest"
        "#;

        let result: Result<ConsumerConfig, _> = toml::from_str(toml_str);
        assert!(result.is_err());
    }

    #[test]
    fn test_shared_field_outside_client_table_rejected() {
        let result: Result<ConsumerConfig, _> =
            toml::from_str("bootstrap_servers = \"broker:9092\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_override_keeps_position() {
        let mut config = ConsumerConfig::new();
        config
            .add_override("session.timeout.ms", 10_000)
            .add_override("heartbeat.interval.ms", 3000)
            .add_override("session.timeout.ms", 6000);

        let rendered = config.render().unwrap();
        let pairs: Vec<_> = rendered.iter().map(crate::RenderedEntry::as_pair).collect();
        assert_eq!(
            pairs,
            [
                ("session.timeout.ms", &WireValue::Int(6000)),
                ("heartbeat.interval.ms", &WireValue::Int(3000)),
            ]
        );
    }
}
