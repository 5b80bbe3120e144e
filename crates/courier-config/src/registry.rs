//! The fixed catalog of known client properties.
//!
//! Keys are grouped into properties shared by both client roles, and
//! properties that only apply to producers or only to consumers. Each key is a
//! `const` [`ConfigKey`]; [`known_keys`] lists their metadata in render order.
//!
//! Compression uses the legacy property name `compression.codec` rather than
//! `compression.type` so older protocol negotiation keeps working.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Acknowledgment, Compression, ConfigKey, OffsetReset, Partitioner, WireValue};

fn text(value: &str) -> WireValue {
    WireValue::from(value)
}

fn integer(value: &i32) -> WireValue {
    WireValue::from(*value)
}

fn flag(value: &bool) -> WireValue {
    WireValue::Bool(*value)
}

// ==================== shared ====================

/// Initial broker list, `host:port` comma-separated.
pub const BOOTSTRAP_SERVERS: ConfigKey<str> = ConfigKey::new("bootstrap.servers", text);
/// Client identifier reported to brokers.
pub const CLIENT_ID: ConfigKey<str> = ConfigKey::new("client.id", text);
/// Log broker disconnects.
pub const LOG_CONNECTION_CLOSE: ConfigKey<bool> = ConfigKey::new("log.connection.close", flag);
/// Maximum unacknowledged requests per broker connection.
pub const MAX_IN_FLIGHT: ConfigKey<i32> =
    ConfigKey::new("max.in.flight.requests.per.connection", integer);
/// Backoff before retrying a failed request, in milliseconds.
pub const RETRY_BACKOFF_MS: ConfigKey<i32> = ConfigKey::new("retry.backoff.ms", integer);
/// TCP keepalive on broker sockets.
pub const SOCKET_KEEPALIVE: ConfigKey<bool> = ConfigKey::new("socket.keepalive.enable", flag);
/// Statistics emit interval in milliseconds; `0` disables statistics.
pub const STATISTICS_INTERVAL_MS: ConfigKey<i32> =
    ConfigKey::new("statistics.interval.ms", integer);

// ==================== producer ====================

/// How many times to retry sending a failing message.
pub const MESSAGE_SEND_MAX_RETRIES: ConfigKey<i32> =
    ConfigKey::new("message.send.max.retries", integer);
/// Required broker acknowledgments.
pub const ACKS: ConfigKey<Acknowledgment> = ConfigKey::new("acks", Acknowledgment::wire_value);
/// Delay to wait for messages to accumulate into a batch, in milliseconds.
pub const LINGER_MS: ConfigKey<i32> = ConfigKey::new("linger.ms", integer);
/// Compression codec for message sets.
pub const COMPRESSION_CODEC: ConfigKey<Compression> =
    ConfigKey::new("compression.codec", Compression::wire_value);
/// Partitioning strategy.
pub const PARTITIONER: ConfigKey<Partitioner> =
    ConfigKey::new("partitioner", Partitioner::wire_value);
/// Produce request timeout, in milliseconds.
pub const REQUEST_TIMEOUT_MS: ConfigKey<i32> = ConfigKey::new("request.timeout.ms", integer);

// ==================== consumer ====================

/// Offset auto-commit frequency, in milliseconds.
pub const AUTO_COMMIT_INTERVAL_MS: ConfigKey<i32> =
    ConfigKey::new("auto.commit.interval.ms", integer);
/// Policy when no valid committed offset exists.
pub const AUTO_OFFSET_RESET: ConfigKey<OffsetReset> =
    ConfigKey::new("auto.offset.reset", OffsetReset::wire_value);
/// Commit offsets automatically in the background.
pub const ENABLE_AUTO_COMMIT: ConfigKey<bool> = ConfigKey::new("enable.auto.commit", flag);
/// Store the offset of the last delivered message automatically.
pub const ENABLE_AUTO_OFFSET_STORE: ConfigKey<bool> =
    ConfigKey::new("enable.auto.offset.store", flag);
/// Consumer group id.
pub const GROUP_ID: ConfigKey<str> = ConfigKey::new("group.id", text);
/// Maximum bytes returned by a fetch request.
pub const FETCH_MAX_BYTES: ConfigKey<i32> = ConfigKey::new("fetch.max.bytes", integer);
/// Minimum bytes a broker accumulates before answering a fetch.
pub const FETCH_MIN_BYTES: ConfigKey<i32> = ConfigKey::new("fetch.min.bytes", integer);

/// The two kinds of client a configuration is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientRole {
    /// Message producer.
    Producer,
    /// Message consumer.
    Consumer,
}

impl ClientRole {
    /// Lowercase role name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Producer => "producer",
            Self::Consumer => "consumer",
        }
    }
}

impl fmt::Display for ClientRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registry partition a key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyGroup {
    /// Applies to producers and consumers.
    Shared,
    /// Producer-only.
    Producer,
    /// Consumer-only.
    Consumer,
}

impl KeyGroup {
    /// Whether keys in this group apply to `role`.
    pub const fn applies_to(self, role: ClientRole) -> bool {
        matches!(
            (self, role),
            (Self::Shared, _)
                | (Self::Producer, ClientRole::Producer)
                | (Self::Consumer, ClientRole::Consumer)
        )
    }
}

/// Primitive type a key renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireKind {
    /// [`WireValue::String`].
    String,
    /// [`WireValue::Int`].
    Integer,
    /// [`WireValue::Bool`].
    Boolean,
}

/// Catalog metadata for a known key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInfo {
    /// Wire property name.
    pub id: &'static str,
    /// Registry partition.
    pub group: KeyGroup,
    /// Rendered value type.
    pub wire_kind: WireKind,
}

const fn info(id: &'static str, group: KeyGroup, wire_kind: WireKind) -> KeyInfo {
    KeyInfo {
        id,
        group,
        wire_kind,
    }
}

static KNOWN_KEYS: [KeyInfo; 20] = [
    info(BOOTSTRAP_SERVERS.id(), KeyGroup::Shared, WireKind::String),
    info(CLIENT_ID.id(), KeyGroup::Shared, WireKind::String),
    info(LOG_CONNECTION_CLOSE.id(), KeyGroup::Shared, WireKind::Boolean),
    info(MAX_IN_FLIGHT.id(), KeyGroup::Shared, WireKind::Integer),
    info(RETRY_BACKOFF_MS.id(), KeyGroup::Shared, WireKind::Integer),
    info(SOCKET_KEEPALIVE.id(), KeyGroup::Shared, WireKind::Boolean),
    info(STATISTICS_INTERVAL_MS.id(), KeyGroup::Shared, WireKind::Integer),
    info(MESSAGE_SEND_MAX_RETRIES.id(), KeyGroup::Producer, WireKind::Integer),
    info(ACKS.id(), KeyGroup::Producer, WireKind::Integer),
    info(LINGER_MS.id(), KeyGroup::Producer, WireKind::Integer),
    info(COMPRESSION_CODEC.id(), KeyGroup::Producer, WireKind::String),
    info(PARTITIONER.id(), KeyGroup::Producer, WireKind::String),
    info(REQUEST_TIMEOUT_MS.id(), KeyGroup::Producer, WireKind::Integer),
    info(AUTO_COMMIT_INTERVAL_MS.id(), KeyGroup::Consumer, WireKind::Integer),
    info(AUTO_OFFSET_RESET.id(), KeyGroup::Consumer, WireKind::String),
    info(ENABLE_AUTO_COMMIT.id(), KeyGroup::Consumer, WireKind::Boolean),
    info(ENABLE_AUTO_OFFSET_STORE.id(), KeyGroup::Consumer, WireKind::Boolean),
    info(GROUP_ID.id(), KeyGroup::Consumer, WireKind::String),
    info(FETCH_MAX_BYTES.id(), KeyGroup::Consumer, WireKind::Integer),
    info(FETCH_MIN_BYTES.id(), KeyGroup::Consumer, WireKind::Integer),
];

/// All known keys, in render order.
pub fn known_keys() -> &'static [KeyInfo] {
    &KNOWN_KEYS
}

/// Look up a known key by its wire id.
pub fn lookup(id: &str) -> Option<&'static KeyInfo> {
    KNOWN_KEYS.iter().find(|k| k.id == id)
}

/// Keys that apply to `role`, in render order.
pub fn keys_for(role: ClientRole) -> impl Iterator<Item = &'static KeyInfo> {
    KNOWN_KEYS.iter().filter(move |k| k.group.applies_to(role))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<_> = known_keys().iter().map(|k| k.id).collect();
        assert_eq!(ids.len(), known_keys().len());
    }

    #[test]
    fn test_group_sizes() {
        let count = |group| known_keys().iter().filter(|k| k.group == group).count();
        assert_eq!(count(KeyGroup::Shared), 7);
        assert_eq!(count(KeyGroup::Producer), 6);
        assert_eq!(count(KeyGroup::Consumer), 7);
    }

    #[test]
    fn test_legacy_compression_name() {
        assert_eq!(COMPRESSION_CODEC.id(), "compression.codec");
        assert!(lookup("compression.type").is_none());
    }

    #[test]
    fn test_lookup() {
        let info = lookup("group.id").unwrap();
        assert_eq!(info.group, KeyGroup::Consumer);
        assert_eq!(info.wire_kind, WireKind::String);
        assert!(lookup("nope").is_none());
    }

    #[test]
    fn test_keys_for_role() {
        let producer: Vec<_> = keys_for(ClientRole::Producer).map(|k| k.id).collect();
        assert_eq!(producer.len(), 13);
        assert!(producer.contains(&"acks"));
        assert!(!producer.contains(&"group.id"));

        let consumer: Vec<_> = keys_for(ClientRole::Consumer).map(|k| k.id).collect();
        assert_eq!(consumer.len(), 14);
        assert!(consumer.contains(&"bootstrap.servers"));
        assert!(!consumer.contains(&"linger.ms"));
    }

    #[test]
    fn test_group_applies_to() {
        assert!(KeyGroup::Shared.applies_to(ClientRole::Producer));
        assert!(KeyGroup::Shared.applies_to(ClientRole::Consumer));
        assert!(!KeyGroup::Producer.applies_to(ClientRole::Consumer));
        assert!(!KeyGroup::Consumer.applies_to(ClientRole::Producer));
    }

    #[test]
    fn test_wire_kind_matches_conversion() {
        assert_eq!(ACKS.convert(&Acknowledgment::All), WireValue::Int(-1));
        assert_eq!(SOCKET_KEEPALIVE.convert(&false), WireValue::Bool(false));
        assert_eq!(FETCH_MIN_BYTES.convert(&1), WireValue::Int(1));
        assert_eq!(GROUP_ID.convert("g"), WireValue::from("g"));
    }
}
