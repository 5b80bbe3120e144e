//! Typed configuration keys.
//!
//! A [`ConfigKey`] binds the wire id of a client property to the Rust type a
//! builder stores for it, together with the conversion into a [`WireValue`].
//! Keys are declared as `const` items in [`registry`](crate::registry).

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::{ConfigError, ConfigResult, WireValue};

/// A named binding from a domain type to its wire representation.
///
/// # Example
///
/// ```
/// use courier_config::{registry, WireValue};
///
/// let entry = registry::LINGER_MS.bind(&5).unwrap();
/// assert_eq!(entry.id(), "linger.ms");
/// assert_eq!(entry.value(), &WireValue::Int(5));
/// ```
pub struct ConfigKey<T: ?Sized> {
    id: &'static str,
    convert: fn(&T) -> WireValue,
}

impl<T: ?Sized> ConfigKey<T> {
    /// Declare a key.
    ///
    /// Panics (at compile time for `const` keys) if `id` is empty.
    pub const fn new(id: &'static str, convert: fn(&T) -> WireValue) -> Self {
        assert!(!id.is_empty(), "config key id must not be empty");
        Self { id, convert }
    }

    /// The wire property name.
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// Convert `value` without validation.
    pub fn convert(&self, value: &T) -> WireValue {
        (self.convert)(value)
    }

    /// Convert and validate `value`, producing a rendered entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfigValue`] naming this key when the
    /// converted value is blank.
    pub fn bind(&self, value: &T) -> ConfigResult<RenderedEntry> {
        let value = self.convert(value);
        if value.is_blank() {
            tracing::debug!(key = self.id, "rejected blank configuration value");
            return Err(ConfigError::invalid_config_value(self.id));
        }
        Ok(RenderedEntry::new(self.id, value))
    }
}

impl<T: ?Sized> Clone for ConfigKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for ConfigKey<T> {}

impl<T: ?Sized> fmt::Debug for ConfigKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigKey").field("id", &self.id).finish()
    }
}

impl<T: ?Sized> fmt::Display for ConfigKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id)
    }
}

/// One `(id, value)` pair of a rendered configuration.
///
/// Entries only come out of a render, from a bound key or an override, so
/// they cannot be built directly:
///
/// ```compile_fail
/// use courier_config::RenderedEntry;
///
/// let entry = RenderedEntry::new("acks", 1_i64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEntry {
    id: Cow<'static, str>,
    value: WireValue,
}

impl RenderedEntry {
    /// Create an entry.
    pub(crate) fn new(id: impl Into<Cow<'static, str>>, value: impl Into<WireValue>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }

    /// The property name.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The property value.
    pub fn value(&self) -> &WireValue {
        &self.value
    }

    /// Borrow the entry as a pair.
    pub fn as_pair(&self) -> (&str, &WireValue) {
        (&self.id, &self.value)
    }

    /// Split the entry into an owned pair.
    pub fn into_pair(self) -> (String, WireValue) {
        (self.id.into_owned(), self.value)
    }
}

impl fmt::Display for RenderedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.id, self.value)
    }
}
