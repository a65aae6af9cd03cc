use std::collections::BTreeMap;

/// A user-editable record with a fixed set of named string fields.
///
/// The pipeline never creates or deletes fields; it only reads and
/// writes values of fields already present.
pub trait Record: Send + Sync {
    fn field_names(&self) -> Vec<String>;

    fn get(&self, name: &str) -> Option<&str>;

    /// Write a value into an existing field. Writes to unknown field
    /// names are ignored.
    fn set(&mut self, name: &str, value: &str);

    fn has_field(&self, name: &str) -> bool {
        self.field_names().iter().any(|f| f == name)
    }
}

/// Map-backed record used by the batch driver and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryRecord {
    fields: BTreeMap<String, String>,
}

impl MemoryRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn into_fields(self) -> BTreeMap<String, String> {
        self.fields
    }
}

impl Record for MemoryRecord {
    fn field_names(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    fn set(&mut self, name: &str, value: &str) {
        if let Some(current) = self.fields.get_mut(name) {
            *current = value.to_string();
        }
    }
}
