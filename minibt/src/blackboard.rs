//! Shared key-value scratch space used to pass data between nodes.

use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;

use crate::value::{FromValue, Value};

/// Handle to a blackboard. Cloning yields another handle to the same store.
///
/// A blackboard may have a parent; reads fall through to the parent when the
/// local store has no entry, writes always stay local.
#[derive(Debug, Clone, Default)]
pub struct Blackboard {
    inner: Arc<RwLock<BlackboardData>>,
}

#[derive(Debug, Default)]
struct BlackboardData {
    storage: HashMap<String, Value>,
    parent: Option<Blackboard>,
}

impl Blackboard {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn with_parent(parent: &Blackboard) -> Self {
        Self {
            inner: Arc::new(RwLock::new(BlackboardData {
                storage: HashMap::new(),
                parent: Some(parent.clone()),
            })),
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        log::trace!("blackboard set {key} = {}", value.as_string());
        self.inner.write().storage.insert(key, value);
    }

    /// Typed read. Returns `None` when the key is absent from the whole
    /// chain or the stored value does not convert to `T`.
    pub fn get<T: FromValue>(&self, key: &str) -> Option<T> {
        self.get_value(key).and_then(|value| T::from_value(&value))
    }

    /// Raw read of the stored [`Value`].
    pub fn get_value(&self, key: &str) -> Option<Value> {
        let guard = self.inner.read();
        if let Some(value) = guard.storage.get(key) {
            return Some(value.clone());
        }
        guard.parent.as_ref().and_then(|parent| parent.get_value(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get_value(key).is_some()
    }
}
