//! Named markers for tagging log statements.
//!
//! Markers let callers attach an out-of-band label to individual log calls
//! (e.g. `CONFIDENTIAL`, `AUDIT`) that backends can filter or route on.
//! A marker may reference other markers, forming a small containment
//! hierarchy queried with [`Marker::contains`].

use std::fmt;

/// A named tag attached to individual logging calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    name: String,
    references: Vec<Marker>,
}

impl Marker {
    /// Create a marker with the given name and no references.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            references: Vec::new(),
        }
    }

    /// The marker's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a reference to another marker.
    ///
    /// Self-references and duplicates are ignored.
    pub fn add_reference(&mut self, reference: Marker) {
        if reference.name == self.name || self.references.contains(&reference) {
            return;
        }
        self.references.push(reference);
    }

    /// Whether this marker references any other markers.
    pub fn has_references(&self) -> bool {
        !self.references.is_empty()
    }

    /// Directly referenced markers.
    pub fn references(&self) -> &[Marker] {
        &self.references
    }

    /// Whether this marker, or any marker it references (transitively),
    /// has the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.name == name || self.references.iter().any(|m| m.contains(name))
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
