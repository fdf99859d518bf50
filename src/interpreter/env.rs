use std::collections::HashMap;

use crate::interpreter::value::{Builtin, Value};

/// Stores the variable bindings for one evaluation session.
///
/// The environment is a single flat namespace mapping symbol names to
/// values. It owns its bindings outright: `put` stores a deep copy of the
/// caller's value and `get` hands back a deep copy of the stored one, so
/// no value is ever shared between the environment and its callers.
///
/// ## Usage
///
/// An `Env` is created once per session, populated with the builtin
/// library, and passed explicitly to every evaluation call. Independent
/// sessions are simply independent `Env` values.
///
/// # Example
/// ```
/// use qlisp::interpreter::{env::Env, value::Value};
///
/// let mut env = Env::new();
/// env.put("x", &Value::number(5));
/// assert_eq!(env.get("x"), Value::number(5));
/// ```
pub struct Env {
    bindings: HashMap<String, Value>,
}

#[allow(clippy::new_without_default)]
impl Env {
    /// Creates an empty environment with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    /// Looks up a symbol and returns a deep copy of its bound value.
    ///
    /// Returns an `Error("symbol not found!")` value when the name is not
    /// bound. Never mutates the environment.
    #[must_use]
    pub fn get(&self, name: &str) -> Value {
        self.bindings
            .get(name)
            .cloned()
            .unwrap_or_else(|| Value::error("symbol not found!"))
    }

    /// Binds a name to a deep copy of `value`.
    ///
    /// Rebinding an existing name replaces the old value rather than
    /// shadowing it; the caller keeps ownership of its own copy.
    pub fn put(&mut self, name: &str, value: &Value) {
        self.bindings.insert(name.to_string(), value.clone());
    }

    /// Binds a name directly to a builtin function.
    pub fn add_builtin(&mut self, name: &str, function: Builtin) {
        self.bindings.insert(name.to_string(), Value::Function(function));
    }

    /// Returns the number of bindings currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if no names are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
