//! Enum domain types.
//!
//! Each type is a closed set of variants with a total mapping onto its wire
//! value. The mappings are used by the matching keys in
//! [`registry`](crate::registry).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, WireValue};

/// Broker acknowledgments a producer waits for before a send is complete.
///
/// Text forms: `zero`/`0`, `leader`/`1` and `all`/`-1`. [`FromStr`] and serde
/// both accept all of them; `Display` writes the numeric form except for `all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Acknowledgment {
    /// Do not wait for any acknowledgment.
    #[serde(alias = "0")]
    Zero,
    /// Wait for the partition leader only.
    #[serde(alias = "1")]
    Leader,
    /// Wait for every in-sync replica.
    #[serde(alias = "-1")]
    All,
}

impl Acknowledgment {
    /// All variants, in declaration order.
    pub const ALL: [Self; 3] = [Self::Zero, Self::Leader, Self::All];

    /// The integer sent on the wire.
    pub const fn as_i64(self) -> i64 {
        match self {
            Self::Zero => 0,
            Self::Leader => 1,
            Self::All => -1,
        }
    }

    /// Wire conversion used by [`registry::ACKS`](crate::registry::ACKS).
    pub fn wire_value(&self) -> WireValue {
        WireValue::Int(self.as_i64())
    }
}

impl fmt::Display for Acknowledgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            other => write!(f, "{}", other.as_i64()),
        }
    }
}

impl FromStr for Acknowledgment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" | "zero" => Ok(Self::Zero),
            "1" | "leader" => Ok(Self::Leader),
            "-1" | "all" => Ok(Self::All),
            other => Err(ConfigError::unknown_variant("acknowledgment", other)),
        }
    }
}

/// Compression codec applied to produced message sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    /// No compression.
    None,
    /// gzip.
    Gzip,
    /// Snappy.
    Snappy,
    /// LZ4.
    Lz4,
}

impl Compression {
    /// All variants, in declaration order.
    pub const ALL: [Self; 4] = [Self::None, Self::Gzip, Self::Snappy, Self::Lz4];

    /// The codec name sent on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Gzip => "gzip",
            Self::Snappy => "snappy",
            Self::Lz4 => "lz4",
        }
    }

    /// Wire conversion used by
    /// [`registry::COMPRESSION_CODEC`](crate::registry::COMPRESSION_CODEC).
    pub fn wire_value(&self) -> WireValue {
        WireValue::from(self.as_str())
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Compression {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ConfigError::unknown_variant("compression", s))
    }
}

/// Strategy used to pick a partition for keyed messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Partitioner {
    /// Random distribution.
    Random,
    /// Hash of the key; empty and null keys map to a single partition.
    Consistent,
    /// Hash of the key; empty and null keys are distributed randomly.
    ConsistentRandom,
}

impl Partitioner {
    /// All variants, in declaration order.
    pub const ALL: [Self; 3] = [Self::Random, Self::Consistent, Self::ConsistentRandom];

    /// The strategy name sent on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Consistent => "consistent",
            Self::ConsistentRandom => "consistent_random",
        }
    }

    /// Wire conversion used by [`registry::PARTITIONER`](crate::registry::PARTITIONER).
    pub fn wire_value(&self) -> WireValue {
        WireValue::from(self.as_str())
    }
}

impl fmt::Display for Partitioner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Partitioner {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ConfigError::unknown_variant("partitioner", s))
    }
}

/// What a consumer does when it has no committed offset, or the committed
/// offset is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetReset {
    /// Start from the oldest available message.
    Earliest,
    /// Start from the next produced message.
    Latest,
    /// Surface an error to the consumer.
    Error,
}

impl OffsetReset {
    /// All variants, in declaration order.
    pub const ALL: [Self; 3] = [Self::Earliest, Self::Latest, Self::Error];

    /// The policy name sent on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Earliest => "earliest",
            Self::Latest => "latest",
            Self::Error => "error",
        }
    }

    /// Wire conversion used by
    /// [`registry::AUTO_OFFSET_RESET`](crate::registry::AUTO_OFFSET_RESET).
    pub fn wire_value(&self) -> WireValue {
        WireValue::from(self.as_str())
    }
}

impl fmt::Display for OffsetReset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OffsetReset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| ConfigError::unknown_variant("offset reset", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acknowledgment_wire_values() {
        assert_eq!(Acknowledgment::Zero.wire_value(), WireValue::Int(0));
        assert_eq!(Acknowledgment::Leader.wire_value(), WireValue::Int(1));
        assert_eq!(Acknowledgment::All.wire_value(), WireValue::Int(-1));
    }

    #[test]
    fn test_compression_wire_values() {
        let expected = ["none", "gzip", "snappy", "lz4"];
        for (codec, wire) in Compression::ALL.into_iter().zip(expected) {
            assert_eq!(codec.wire_value(), WireValue::from(wire));
        }
    }

    #[test]
    fn test_partitioner_wire_values() {
        assert_eq!(Partitioner::Random.wire_value(), WireValue::from("random"));
        assert_eq!(
            Partitioner::Consistent.wire_value(),
            WireValue::from("consistent")
        );
        assert_eq!(
            Partitioner::ConsistentRandom.wire_value(),
            WireValue::from("consistent_random")
        );
    }

    #[test]
    fn test_offset_reset_wire_values() {
        assert_eq!(OffsetReset::Earliest.wire_value(), WireValue::from("earliest"));
        assert_eq!(OffsetReset::Latest.wire_value(), WireValue::from("latest"));
        assert_eq!(OffsetReset::Error.wire_value(), WireValue::from("error"));
    }

    #[test]
    fn test_parse_acknowledgment() {
        assert_eq!("0".parse::<Acknowledgment>().unwrap(), Acknowledgment::Zero);
        assert_eq!("1".parse::<Acknowledgment>().unwrap(), Acknowledgment::Leader);
        assert_eq!("-1".parse::<Acknowledgment>().unwrap(), Acknowledgment::All);
        assert_eq!("all".parse::<Acknowledgment>().unwrap(), Acknowledgment::All);
        assert!("2".parse::<Acknowledgment>().is_err());
    }

    #[test]
    fn test_acknowledgment_text_forms_agree() {
        for acks in Acknowledgment::ALL {
            let display = serde_json::Value::String(acks.to_string());
            assert_eq!(serde_json::from_value::<Acknowledgment>(display).unwrap(), acks);

            let name = serde_json::to_value(acks).unwrap();
            let name = name.as_str().unwrap();
            assert_eq!(name.parse::<Acknowledgment>().unwrap(), acks);
        }
        assert_eq!("zero".parse::<Acknowledgment>().unwrap(), Acknowledgment::Zero);
        assert_eq!("leader".parse::<Acknowledgment>().unwrap(), Acknowledgment::Leader);
        assert_eq!(
            serde_json::from_str::<Acknowledgment>(r#""-1""#).unwrap(),
            Acknowledgment::All
        );
    }

    #[test]
    fn test_display_parses_back() {
        for acks in Acknowledgment::ALL {
            assert_eq!(acks.to_string().parse::<Acknowledgment>().unwrap(), acks);
        }
        for codec in Compression::ALL {
            assert_eq!(codec.to_string().parse::<Compression>().unwrap(), codec);
        }
        for strategy in Partitioner::ALL {
            assert_eq!(strategy.to_string().parse::<Partitioner>().unwrap(), strategy);
        }
        for policy in OffsetReset::ALL {
            assert_eq!(policy.to_string().parse::<OffsetReset>().unwrap(), policy);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "zstd".parse::<Compression>().unwrap_err();
        assert_eq!(err, ConfigError::unknown_variant("compression", "zstd"));
        assert!("murmur2".parse::<Partitioner>().is_err());
        assert!("smallest".parse::<OffsetReset>().is_err());
    }

    #[test]
    fn test_serde_names_match_wire_text() {
        assert_eq!(
            serde_json::to_string(&Partitioner::ConsistentRandom).unwrap(),
            r#""consistent_random""#
        );
        assert_eq!(serde_json::to_string(&Compression::Lz4).unwrap(), r#""lz4""#);
        assert_eq!(
            serde_json::from_str::<OffsetReset>(r#""earliest""#).unwrap(),
            OffsetReset::Earliest
        );
        assert_eq!(
            serde_json::from_str::<Acknowledgment>(r#""leader""#).unwrap(),
            Acknowledgment::Leader
        );
    }
}
