//! Rendered configuration output.

use indexmap::IndexMap;
use serde::Serialize;

use crate::registry::ClientRole;
use crate::{ConfigKey, ConfigResult, RenderedEntry, WireValue};

/// The ordered entry sequence produced by a builder's `render`.
///
/// Typed entries come first in declaration order, followed by overrides in
/// insertion order. Duplicate ids are kept; [`to_properties`](Self::to_properties)
/// and [`get`](Self::get) resolve them last-wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderedConfig {
    entries: Vec<RenderedEntry>,
}

impl RenderedConfig {
    /// Iterate entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, RenderedEntry> {
        self.entries.iter()
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was rendered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries as a slice.
    pub fn entries(&self) -> &[RenderedEntry] {
        &self.entries
    }

    /// Consume into the underlying entries.
    pub fn into_entries(self) -> Vec<RenderedEntry> {
        self.entries
    }

    /// The effective value for `id`: the last entry with that id.
    pub fn get(&self, id: &str) -> Option<&WireValue> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.id() == id)
            .map(RenderedEntry::value)
    }

    /// Fold into a string property map, later duplicates replacing earlier ones.
    ///
    /// A replaced key keeps the position of its first occurrence.
    pub fn to_properties(&self) -> IndexMap<String, String> {
        let mut properties = IndexMap::with_capacity(self.entries.len());
        for entry in &self.entries {
            properties.insert(entry.id().to_string(), entry.value().to_string());
        }
        properties
    }
}

impl IntoIterator for RenderedConfig {
    type Item = RenderedEntry;
    type IntoIter = std::vec::IntoIter<RenderedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a RenderedConfig {
    type Item = &'a RenderedEntry;
    type IntoIter = std::slice::Iter<'a, RenderedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Accumulates entries for a single render.
///
/// Dropped on the first error, so a failed render never leaks partial output.
#[derive(Debug)]
pub(crate) struct Renderer {
    role: ClientRole,
    entries: Vec<RenderedEntry>,
}

impl Renderer {
    pub(crate) fn new(role: ClientRole) -> Self {
        Self {
            role,
            entries: Vec::new(),
        }
    }

    /// Bind `value` through `key` if it is present.
    pub(crate) fn field<T: ?Sized>(
        &mut self,
        key: &ConfigKey<T>,
        value: Option<&T>,
    ) -> ConfigResult<()> {
        if let Some(value) = value {
            self.entries.push(key.bind(value)?);
        }
        Ok(())
    }

    /// Append overrides verbatim.
    pub(crate) fn overrides(&mut self, overrides: &IndexMap<String, WireValue>) {
        for (id, value) in overrides {
            if self.entries.iter().any(|e| e.id() == id) {
                tracing::warn!(
                    role = %self.role,
                    key = %id,
                    "override shadows a typed configuration field"
                );
            }
            self.entries.push(RenderedEntry::new(id.clone(), value.clone()));
        }
    }

    pub(crate) fn finish(self) -> RenderedConfig {
        tracing::debug!(
            role = %self.role,
            entries = self.entries.len(),
            "rendered client configuration"
        );
        RenderedConfig {
            entries: self.entries,
        }
    }
}
