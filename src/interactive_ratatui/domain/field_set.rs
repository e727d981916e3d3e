use std::collections::BTreeSet;

/// Sorted, deduplicated field paths used for query hints.
///
/// Merging only ever grows the set; it is emptied explicitly when a
/// different index is opened.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: BTreeSet<String>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Union `incoming` into the set. Empty names are skipped.
    pub fn merge<S: AsRef<str>>(&mut self, incoming: &[S]) {
        for field in incoming {
            let field = field.as_ref();
            if !field.is_empty() && !self.fields.contains(field) {
                self.fields.insert(field.to_string());
            }
        }
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.fields.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, field: &str) -> bool {
        self.fields.contains(field)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.fields.iter().cloned().collect()
    }
}
