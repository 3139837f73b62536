//! Predicate registry — name-addressed predicates for spec documents
//!
//! Spec documents reference predicates by name (`"@is_string"` in the
//! record form, `{"predicate": "is_string"}` in the sequence form).
//! The registry resolves those names. Registration erases the concrete
//! closure type early; lookup hands back a shareable [`PredicateFn`].
//!
//! [`Registry::with_builtins`] pre-registers every unary predicate
//! from [`classify`](crate::classify) and
//! [`container`](crate::container) under its snake_case name.

use std::collections::HashMap;

use crate::{classify, container, MatchError, PredicateFn, Value};

/// Every built-in unary predicate, by name.
fn builtins() -> &'static [(&'static str, fn(&Value) -> bool)] {
    &[
        // Shape vocabulary.
        ("is_missing", classify::is_missing),
        ("is_present", classify::is_present),
        ("is_boolean", classify::is_boolean),
        ("is_array", classify::is_array),
        ("is_object", classify::is_object),
        ("is_string", classify::is_string),
        ("is_number", classify::is_number),
        ("is_function", classify::is_function),
        ("is_constructable", classify::is_constructable),
        ("is_non_empty_string", classify::is_non_empty_string),
        ("is_non_empty_array", classify::is_non_empty_array),
        ("is_true", classify::is_true),
        ("is_positive_integer", classify::is_positive_integer),
        ("is_non_negative_integer", classify::is_non_negative_integer),
        ("has_one_item", classify::has_one_item),
        ("has_multiple_items", classify::has_multiple_items),
        // Container vocabulary.
        ("is_map", container::is_map),
        ("is_set", container::is_set),
        ("is_weak_map", container::is_weak_map),
        ("is_weak_set", container::is_weak_set),
        ("is_date", container::is_date),
    ]
}

/// Maps predicate names to predicate functions.
///
/// # Example
///
/// ```
/// use valmatch::{Registry, Value};
///
/// let registry = Registry::with_builtins();
/// let predicate = registry.get("is_string")?;
/// assert!(predicate(&Value::from("hello")));
/// # Ok::<(), valmatch::MatchError>(())
/// ```
#[derive(Clone)]
pub struct Registry {
    predicates: HashMap<String, PredicateFn>,
}

impl Registry {
    /// Start building a registry.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            predicates: HashMap::new(),
        }
    }

    /// A registry pre-loaded with every built-in predicate.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut builder = Self::builder();
        for (name, predicate) in builtins() {
            builder = builder.predicate(*name, *predicate);
        }
        builder.build()
    }

    /// Look up a predicate by name.
    ///
    /// # Errors
    ///
    /// [`MatchError::UnknownPredicate`] when the name is not
    /// registered; the error lists what is.
    pub fn get(&self, name: &str) -> Result<PredicateFn, MatchError> {
        self.predicates
            .get(name)
            .cloned()
            .ok_or_else(|| MatchError::UnknownPredicate {
                name: name.to_string(),
                available: self.names().iter().map(ToString::to_string).collect(),
            })
    }

    /// Returns `true` if the name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.predicates.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("predicates", &self.names())
            .finish()
    }
}

/// Builder for [`Registry`].
///
/// # Example
///
/// ```
/// use valmatch::{Registry, Value};
///
/// let registry = Registry::builder()
///     .predicate("is_even", |v: &Value| {
///         v.as_i64().is_some_and(|i| i % 2 == 0)
///     })
///     .build();
/// assert!(registry.contains("is_even"));
/// ```
#[derive(Default)]
pub struct RegistryBuilder {
    predicates: HashMap<String, PredicateFn>,
}

impl RegistryBuilder {
    /// Register a predicate under a name. Re-registering a name
    /// replaces the previous entry.
    #[must_use]
    pub fn predicate(
        mut self,
        name: impl Into<String>,
        f: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.predicates.insert(name.into(), std::sync::Arc::new(f));
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Registry {
        Registry {
            predicates: self.predicates,
        }
    }
}
