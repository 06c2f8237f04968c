//! Shared string map: one mutable map, any number of handles.
//!
//! [`SharedMap`] is a handle to a single `String -> String` map. Cloning the
//! handle through [`SharedMap::alias`] does not copy the map; both handles
//! denote the same instance and observe each other's insertions. Use
//! [`SharedMap::deep_copy`] when an independent map is wanted.
//!
//! Borrows of the inner `RefCell` never outlive a single method call, so no
//! two borrows can overlap.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

/// A handle to one mutable string-to-string map.
#[derive(Debug, Default)]
pub struct SharedMap {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl SharedMap {
    /// Create a new, empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new map populated from key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = Self::new();
        for (k, v) in pairs {
            map.insert(k, v);
        }
        map
    }

    /// Bind a second handle to this same map instance.
    #[must_use]
    pub fn alias(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Copy the contents into a new, independent map instance.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        Self {
            inner: Rc::new(RefCell::new(self.inner.borrow().clone())),
        }
    }

    /// Insert a key/value pair, returning the previous value for `key`.
    ///
    /// Visible through every alias of this map.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        log::trace!("insert {key:?} -> {value:?}");
        self.inner.borrow_mut().insert(key, value)
    }

    /// Look up `key`. An absent key yields `None`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.borrow().contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// True when both maps hold the same key/value pairs.
    pub fn value_eq(&self, other: &Self) -> bool {
        // Same instance: skip borrowing the cell twice.
        self.identity_eq(other) || *self.inner.borrow() == *other.inner.borrow()
    }

    /// True when both handles denote the same map instance.
    pub fn identity_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of live handles to this map instance.
    pub fn alias_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    /// Key-ordered copy of the current contents.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.inner
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl PartialEq for SharedMap {
    fn eq(&self, other: &Self) -> bool {
        self.value_eq(other)
    }
}

impl Eq for SharedMap {}
