//! Shader loader: fetch text by file name, register it externally and keep
//! an internal name -> text cache.
//!
//! Batches fan out every fetch inside the calling task and commit only when
//! all of them succeeded. The first failure drops the outstanding fetches,
//! so a failed batch leaves both stores untouched.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use corelib::{CoreResult, ShaderRecord, ShaderScript, derive_name, registration_key};
use futures_util::future::try_join_all;
use parking_lot::RwLock;

use crate::{config::LoaderConfig, registry::ShaderRegistry, source::ShaderSource};

pub struct ShaderLoader<S> {
    source: S,
    registry: Arc<dyn ShaderRegistry>,
    config: LoaderConfig,
    cache: RwLock<HashMap<String, String>>,
}

impl<S: ShaderSource> ShaderLoader<S> {
    pub fn new(source: S, registry: Arc<dyn ShaderRegistry>, config: LoaderConfig) -> Self {
        Self {
            source,
            registry,
            config,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn base(&self) -> &str {
        &self.config.base
    }

    /// Load a single file and register it under its derived name.
    pub async fn load_one(&self, file_name: &str) -> CoreResult<String> {
        let name = checked_name(file_name)?;
        let content = self.fetch(file_name).await?;
        self.commit(name, &content);
        Ok(content)
    }

    /// Load a batch. Results follow input order.
    pub async fn load_many<F: AsRef<str>>(&self, file_names: &[F]) -> CoreResult<Vec<String>> {
        let names = file_names
            .iter()
            .map(|f| checked_name(f.as_ref()))
            .collect::<CoreResult<Vec<_>>>()?;
        warn_collisions(file_names, &names);

        let contents = try_join_all(file_names.iter().map(|f| self.fetch(f.as_ref()))).await?;

        for (name, content) in names.iter().zip(&contents) {
            self.commit(name, content);
        }
        log::info!("Loaded {} shader(s) from {}", contents.len(), self.config.base);
        Ok(contents)
    }

    /// Text registered externally under `"{name}-shader"`.
    pub fn get_by_name(&self, name: &str) -> Option<String> {
        self.registry
            .lookup(&registration_key(name))
            .map(|script| script.text)
    }

    /// Load a batch and collect each derived name with its registered text.
    pub async fn load_and_collect<F: AsRef<str>>(
        &self,
        file_names: &[F],
    ) -> CoreResult<HashMap<String, Option<String>>> {
        self.load_many(file_names).await?;

        let mut shaders = HashMap::with_capacity(file_names.len());
        for file in file_names {
            let name = derive_name(file.as_ref())?;
            shaders.insert(name.to_string(), self.get_by_name(name));
        }
        Ok(shaders)
    }

    /// Text held in the loader's own cache.
    pub fn cached(&self, name: &str) -> Option<String> {
        self.cache.read().get(name).cloned()
    }

    /// Cached names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.cache.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }

    async fn fetch(&self, file_name: &str) -> CoreResult<String> {
        let location = self.config.resolve(file_name);
        self.source.fetch(&location).await.map_err(|e| {
            let e = e.with_file(file_name);
            log::error!("Error loading shader {}: {}", file_name, e);
            e
        })
    }

    /// Both stores change under the cache lock, so concurrent commits of one
    /// name cannot leave them holding different text.
    fn commit(&self, name: &str, content: &str) {
        let record = ShaderRecord::new(name, content);
        let mut cache = self.cache.write();
        self.registry.register(ShaderScript::from_record(&record));
        cache.insert(record.name, record.content);
        drop(cache);
        log::info!("Loaded shader: {}", name);
    }
}

fn checked_name(file_name: &str) -> CoreResult<&str> {
    derive_name(file_name).inspect_err(|e| {
        log::error!("Error loading shader {}: {}", file_name, e);
    })
}

fn warn_collisions<F: AsRef<str>>(file_names: &[F], names: &[&str]) {
    let mut seen = HashSet::with_capacity(names.len());
    for (file, name) in file_names.iter().zip(names) {
        if !seen.insert(*name) {
            log::warn!(
                "{} maps to shader name '{}' already used in this batch; last file wins",
                file.as_ref(),
                name
            );
        }
    }
}
