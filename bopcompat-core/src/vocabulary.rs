//! Label resolution - maps config label names onto the host vocabulary.
//!
//! The host owns the set of types it understands. The classifier never looks
//! labels up directly; it asks a [`LabelResolver`], so an embedding
//! application can restrict the vocabulary to what its dictionary accepts.

use std::collections::BTreeSet;

use crate::types::Label;

/// Resolves a label name to a [`Label`], or `None` if the host does not know it.
pub trait LabelResolver {
    /// Resolve `name`. Unknown names return `None`.
    fn resolve(&self, name: &str) -> Option<Label>;
}

impl<F> LabelResolver for F
where
    F: Fn(&str) -> Option<Label>,
{
    fn resolve(&self, name: &str) -> Option<Label> {
        self(name)
    }
}

/// A closed set of labels the host accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    known: BTreeSet<Label>,
}

impl Vocabulary {
    /// The full built-in vocabulary.
    #[must_use]
    pub fn full() -> Self {
        Self {
            known: Label::ALL.into_iter().collect(),
        }
    }

    /// A vocabulary limited to `labels`.
    #[must_use]
    pub fn restricted(labels: impl IntoIterator<Item = Label>) -> Self {
        Self {
            known: labels.into_iter().collect(),
        }
    }

    /// Whether `label` is part of this vocabulary.
    #[must_use]
    pub fn contains(&self, label: Label) -> bool {
        self.known.contains(&label)
    }

    /// Number of labels known.
    #[must_use]
    pub fn len(&self) -> usize {
        self.known.len()
    }

    /// Whether no labels are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::full()
    }
}

impl LabelResolver for Vocabulary {
    fn resolve(&self, name: &str) -> Option<Label> {
        Label::from_name(name).filter(|label| self.known.contains(label))
    }
}
