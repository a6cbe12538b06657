//! External shader registrations shared with downstream consumers.

use std::collections::HashMap;

use corelib::ShaderScript;
use parking_lot::RwLock;

/// Shared table consumers read shader text from by `"{name}-shader"` key.
///
/// Handed to the loader at construction; implementations use interior
/// mutability so one table can back several loaders.
pub trait ShaderRegistry: Send + Sync {
    /// Create or overwrite the registration under `script.id`.
    fn register(&self, script: ShaderScript);

    fn lookup(&self, key: &str) -> Option<ShaderScript>;

    fn remove(&self, key: &str) -> Option<ShaderScript>;
}

/// In-memory registry.
#[derive(Debug, Default)]
pub struct ShaderTable {
    scripts: RwLock<HashMap<String, ShaderScript>>,
}

impl ShaderTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.scripts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.read().is_empty()
    }

    /// Registered keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.scripts.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn clear(&self) {
        self.scripts.write().clear();
    }
}

impl ShaderRegistry for ShaderTable {
    fn register(&self, script: ShaderScript) {
        let mut scripts = self.scripts.write();
        if let Some(old) = scripts.get(&script.id) {
            if old.text != script.text {
                log::warn!("Replacing registration {} with different text", script.id);
            }
        }
        scripts.insert(script.id.clone(), script);
    }

    fn lookup(&self, key: &str) -> Option<ShaderScript> {
        self.scripts.read().get(key).cloned()
    }

    fn remove(&self, key: &str) -> Option<ShaderScript> {
        self.scripts.write().remove(key)
    }
}

#[cfg(test)]
mod tests {
    use corelib::ShaderRecord;

    use super::*;

    fn script(name: &str, text: &str) -> ShaderScript {
        ShaderScript::from_record(&ShaderRecord::new(name, text))
    }

    #[test]
    fn register_overwrites() {
        let table = ShaderTable::new();
        table.register(script("fog", "one"));
        table.register(script("fog", "two"));
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("fog-shader").unwrap().text, "two");
    }

    #[test]
    fn lookup_miss_and_remove() {
        let table = ShaderTable::new();
        assert!(table.lookup("sky-shader").is_none());

        table.register(script("sky", "s"));
        assert_eq!(table.keys(), vec!["sky-shader".to_string()]);
        assert_eq!(table.remove("sky-shader").unwrap().text, "s");
        assert!(table.is_empty());
    }

    #[test]
    fn clear_drops_everything() {
        let table = ShaderTable::new();
        table.register(script("fog", "f"));
        table.register(script("sky", "s"));
        table.clear();
        assert!(table.is_empty());
        assert!(table.lookup("fog-shader").is_none());
    }
}
