use super::{Transform, Trim, Unbracket, Upper};
use crate::cipher::Rot13;
use crate::debug;
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

pub struct TransformRegistry {
    transforms: HashMap<String, Arc<dyn Transform>>,
    order: Vec<(String, Arc<dyn Transform>)>,
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformRegistry {
    pub fn new() -> Self {
        Self {
            transforms: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Initializes the transform registry with the built-in transforms
    /// - rot13: ROT13 cipher
    /// - trim: Removes leading and trailing whitespace
    /// - upper: Converts to upper case
    /// - unbracket: Removes angle brackets
    pub fn init(&mut self) {
        self.register("rot13", Rot13::new());
        self.register("trim", Trim::new());
        self.register("upper", Upper::new());
        self.register("unbracket", Unbracket::new());
    }

    /// Registers a transform under the given name. Registering an existing
    /// name replaces the previous transform keeping its position.
    pub fn register<T: Transform + 'static>(&mut self, name: &str, transform: T) {
        let shared: Arc<dyn Transform> = Arc::new(transform);
        self.transforms.insert(name.to_string(), Arc::clone(&shared));
        match self.order.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = shared,
            None => self.order.push((name.to_string(), shared)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Transform>> {
        self.transforms.get(name)
    }

    /// Names of the registered transforms in registration order
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Process the text through all registered transforms in sequence
    ///
    /// # Arguments
    /// * `text` - The text to process
    ///
    /// # Returns
    /// The processed text after applying all transforms or an error if any transform fails
    pub fn process(&self, text: &str) -> Result<String> {
        self.order
            .iter()
            .try_fold(text.to_string(), |acc, (_, transform)| {
                transform.transform(&acc)
            })
    }

    /// Process the text through the named transforms, in the given order
    ///
    /// # Errors
    /// Returns `Error::UnknownTransform` if any name is not registered. No
    /// transform is applied in that case.
    pub fn apply<S: AsRef<str>>(&self, names: &[S], text: &str) -> Result<String> {
        let chain = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                self.get(name)
                    .map(|t| (name, t))
                    .ok_or_else(|| Error::UnknownTransform(name.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        chain
            .into_iter()
            .try_fold(text.to_string(), |acc, (name, transform)| {
                debug!("Applying transform \"{}\"", name);
                transform.transform(&acc)
            })
    }
}

/// Global transform manager that provides thread-safe access to the shared transform registry
pub struct TransformManager {
    registry: Arc<TransformRegistry>,
}

impl TransformManager {
    /// Gets a reference to the global transform manager
    pub fn get() -> &'static TransformManager {
        static INSTANCE: Lazy<TransformManager> = Lazy::new(|| {
            let mut registry = TransformRegistry::new();
            registry.init();
            TransformManager {
                registry: Arc::new(registry),
            }
        });
        &INSTANCE
    }

    /// Gets a clone of the shared registry
    pub fn share(&self) -> Arc<TransformRegistry> {
        Arc::clone(&self.registry)
    }

    /// Process the text through the named transforms in sequence
    pub fn apply<S: AsRef<str>>(&self, names: &[S], text: &str) -> Result<String> {
        self.registry.apply(names, text)
    }

    /// Gets a transform by name
    pub fn get_transform(&self, name: &str) -> Option<&Arc<dyn Transform>> {
        self.registry.get(name)
    }
}
