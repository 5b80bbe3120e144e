//! Typed client configuration for Courier broker clients.
//!
//! This crate builds the flat property list that producer and consumer
//! transport clients are configured with, from strongly-typed settings:
//! - A fixed registry of known properties, each a [`ConfigKey`] bound to its
//!   wire name and conversion
//! - Closed enum types for acknowledgments, compression, partitioning and
//!   offset reset, with exact wire mappings
//! - [`ProducerConfig`] and [`ConsumerConfig`] builders with optional fields and
//!   a free-form override set
//! - Fail-fast validation: blank string values are rejected at render time
//!
//! # Overview
//!
//! A builder's `render` walks its fields in a fixed declaration order, skips
//! unset ones, converts and validates set ones, and appends overrides last:
//!
//! - [`ClientConfig`] - Settings shared by both roles (brokers, client id, ...)
//! - [`ProducerConfig`] - Acknowledgments, batching, compression, partitioning
//! - [`ConsumerConfig`] - Group membership, offset handling, fetch sizing
//! - [`RenderedConfig`] - The ordered result handed to the transport client
//!
//! # Example
//!
//! ```
//! use courier_config::{Acknowledgment, Compression, ProducerConfig};
//!
//! # fn main() -> Result<(), courier_config::ConfigError> {
//! let rendered = ProducerConfig::new()
//!     .with_bootstrap_servers("broker-1:9092,broker-2:9092")
//!     .with_client_id("svc-a")
//!     .with_acks(Acknowledgment::All)
//!     .with_compression_type(Compression::Lz4)
//!     .with_linger_ms(5)
//!     .with_override("enable.idempotence", true)
//!     .render()?;
//!
//! for entry in &rendered {
//!     println!("{} = {}", entry.id(), entry.value());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration File Format
//!
//! Builders deserialize from a section of an application's own settings file.
//! Shared settings live in a `client` sub-table, and unknown fields are
//! rejected:
//!
//! ```toml
//! [producer]
//! acks = "all"
//! compression_type = "lz4"
//! partitioner = "consistent_random"
//! linger_ms = 5
//!
//! [producer.client]
//! bootstrap_servers = "broker-1:9092"
//! client_id = "svc-a"
//!
//! [producer.overrides]
//! "enable.idempotence" = true
//! ```

#![warn(missing_docs)]

mod client;
mod consumer;
mod error;
mod key;
mod producer;
pub mod registry;
mod rendered;
mod types;
mod value;

pub use client::ClientConfig;
pub use consumer::ConsumerConfig;
pub use error::{ConfigError, ConfigResult};
pub use key::{ConfigKey, RenderedEntry};
pub use producer::ProducerConfig;
pub use registry::ClientRole;
pub use rendered::RenderedConfig;
pub use types::*;
pub use value::WireValue;
