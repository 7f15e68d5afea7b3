//! String-keyed service container.
//!
//! Components install themselves through [`ServiceProvider`] so that
//! others can look them up by a well-known key instead of building them.

use crate::error::{Error, Result};
use log::debug;
use std::any::{type_name, Any};
use std::collections::HashMap;

/// Something that knows how to install itself into a [`Container`].
pub trait ServiceProvider {
    fn register(self, container: &mut Container);
}

/// A map from service key to an owned, type-erased service.
#[derive(Default)]
pub struct Container {
    services: HashMap<String, Box<dyn Any>>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `provider` against this container.
    pub fn register<P: ServiceProvider>(&mut self, provider: P) -> &mut Self {
        provider.register(self);
        self
    }

    /// Stores `service` under `key`, replacing whatever was there.
    pub fn insert<T: 'static>(&mut self, key: impl Into<String>, service: T) {
        let key = key.into();
        debug!("Registering service '{key}' ({})", type_name::<T>());
        self.services.insert(key, Box::new(service));
    }

    /// Returns the service under `key` if it exists and is a `T`.
    pub fn get<T: 'static>(&self, key: &str) -> Option<&T> {
        self.services.get(key).and_then(|boxed| boxed.downcast_ref())
    }

    pub fn get_mut<T: 'static>(&mut self, key: &str) -> Option<&mut T> {
        self.services.get_mut(key).and_then(|boxed| boxed.downcast_mut())
    }

    /// Like [`Container::get`], but tells a missing key apart from a type mismatch.
    pub fn get_required<T: 'static>(&self, key: &str) -> Result<&T> {
        let boxed = self
            .services
            .get(key)
            .ok_or_else(|| Error::ServiceNotFound { key: key.to_string() })?;
        boxed.downcast_ref().ok_or_else(|| Error::ServiceType {
            key: key.to_string(),
            expected: type_name::<T>(),
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.services.contains_key(key)
    }

    /// Removes the service under `key`, returning it if it was a `T`.
    pub fn remove<T: 'static>(&mut self, key: &str) -> Option<T> {
        self.services
            .remove(key)
            .and_then(|boxed| boxed.downcast().ok().map(|b| *b))
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Container")
            .field("keys", &self.services.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Greeting(&'static str);

    impl ServiceProvider for Greeting {
        fn register(self, container: &mut Container) {
            container.insert("greeting", self);
        }
    }

    #[test]
    fn insert_and_get() {
        let mut container = Container::new();
        container.insert("answer", 42u32);
        assert_eq!(container.get::<u32>("answer"), Some(&42));
        assert_eq!(container.get::<String>("answer"), None);
        assert!(container.contains("answer"));
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn provider_registers_under_its_key() {
        let mut container = Container::new();
        container.register(Greeting("hi"));
        assert_eq!(container.get_required::<Greeting>("greeting").unwrap().0, "hi");
    }

    #[test]
    fn get_required_distinguishes_failures() {
        let mut container = Container::new();
        container.insert("answer", 42u32);

        let err = container.get_required::<u32>("missing").unwrap_err();
        assert!(matches!(err, Error::ServiceNotFound { .. }));

        let err = container.get_required::<String>("answer").unwrap_err();
        assert!(matches!(err, Error::ServiceType { .. }));
    }

    #[test]
    fn get_mut_and_remove() {
        let mut container = Container::new();
        container.insert("count", 1u32);
        *container.get_mut::<u32>("count").unwrap() += 1;
        assert_eq!(container.remove::<u32>("count"), Some(2));
        assert!(container.is_empty());
    }
}
