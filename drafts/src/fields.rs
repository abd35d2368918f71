//! Field bindings: the explicit contract between a store and its form.
//!
//! Hosts register one accessor per persisted field name at construction time.
//! The store reads and writes plain strings through them and never validates
//! content.

#[cfg(test)]
#[path = "fields_test.rs"]
mod fields_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

pub trait FieldAccess {
    fn read(&self) -> String;
    fn write(&self, value: &str);
}

/// Closure-backed accessor.
pub struct FieldBinding<R, W> {
    read: R,
    write: W,
}

impl<R, W> FieldBinding<R, W>
where
    R: Fn() -> String,
    W: Fn(&str),
{
    pub fn new(read: R, write: W) -> Self {
        Self { read, write }
    }
}

impl<R, W> FieldAccess for FieldBinding<R, W>
where
    R: Fn() -> String,
    W: Fn(&str),
{
    fn read(&self) -> String {
        (self.read)()
    }

    fn write(&self, value: &str) {
        (self.write)(value);
    }
}

impl FieldAccess for Rc<RefCell<String>> {
    fn read(&self) -> String {
        self.borrow().clone()
    }

    fn write(&self, value: &str) {
        *self.borrow_mut() = value.to_owned();
    }
}

/// Ordered field-name to accessor table.
#[derive(Default)]
pub struct FieldBindings {
    entries: Vec<(String, Box<dyn FieldAccess>)>,
}

impl fmt::Debug for FieldBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl FieldBindings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`bind`](Self::bind).
    #[must_use]
    pub fn with(mut self, name: &str, access: impl FieldAccess + 'static) -> Self {
        self.bind(name, access);
        self
    }

    /// Bind `name`, replacing any earlier accessor for the same name.
    pub fn bind(&mut self, name: &str, access: impl FieldAccess + 'static) {
        let boxed: Box<dyn FieldAccess> = Box::new(access);
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| n == name) {
            slot.1 = boxed;
        } else {
            self.entries.push((name.to_owned(), boxed));
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current value of every bound field.
    #[must_use]
    pub fn read_all(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|(n, access)| (n.clone(), access.read()))
            .collect()
    }

    /// Write `value` into `name`. Returns false when `name` is unbound.
    pub fn write(&self, name: &str, value: &str) -> bool {
        match self.entries.iter().find(|(n, _)| n == name) {
            Some((_, access)) => {
                access.write(value);
                true
            }
            None => false,
        }
    }

    /// Write `""` into every bound field.
    pub fn reset(&self) {
        for (_, access) in &self.entries {
            access.write("");
        }
    }
}
