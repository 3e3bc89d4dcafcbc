use crate::constants::CONSTANTS;
use crate::env_error::{EnvError, Result};
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use tracing::debug;

/// Named numeric variables. Binding a name twice keeps the last value.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Environment {
    store: HashMap<String, f64>,
}

impl Environment {
    pub fn new() -> Self {
        Default::default()
    }

    /// An environment seeded with the well-known constants (`pi`, `e`, ...).
    /// They are ordinary bindings afterwards and may be overwritten.
    pub fn with_constants() -> Self {
        Self {
            store: CONSTANTS
                .iter()
                .map(|(name, value)| ((*name).to_owned(), *value))
                .collect(),
        }
    }

    pub fn associate(&mut self, name: &str, value: f64) {
        debug!(name, value, "associate");
        self.store.insert(name.to_owned(), value);
    }

    pub fn get_value(&self, name: &str) -> Result<f64> {
        self.store
            .get(name)
            .copied()
            .ok_or_else(|| EnvError::KeyNotFound {
                name: name.to_owned(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.store.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Debug rendering of every binding, sorted by name. Not meant to be parsed.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let bindings: Vec<String> = self
            .names()
            .into_iter()
            .map(|name| format!("{}: {}", name, self.store[name]))
            .collect();

        write!(f, "{{{}}}", bindings.join(", "))
    }
}
