//! Tag-to-source registry.

use std::collections::HashMap;
use std::sync::Arc;

use typeahead_core::{ModelTag, RegistryError};

use crate::source::ModelSource;

/// Maps record type tags to their sources.
///
/// Populated at process start and shared read-only afterwards. Resolving
/// an unregistered tag is a typed error, never a panic.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    sources: HashMap<ModelTag, Arc<dyn ModelSource>>,
}

impl ModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source under a tag, replacing any previous registration.
    pub fn register(&mut self, tag: ModelTag, source: Arc<dyn ModelSource>) {
        self.sources.insert(tag, source);
    }

    /// Parse a raw tag and look up its source.
    pub fn resolve(&self, raw: &str) -> Result<Arc<dyn ModelSource>, RegistryError> {
        let tag: ModelTag = raw.parse()?;
        self.get(&tag)
    }

    /// Look up the source for an already-parsed tag.
    pub fn get(&self, tag: &ModelTag) -> Result<Arc<dyn ModelSource>, RegistryError> {
        self.sources
            .get(tag)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownType {
                tag: tag.to_string(),
            })
    }

    /// Registered tags, sorted for stable diagnostics output.
    pub fn tags(&self) -> Vec<ModelTag> {
        let mut tags: Vec<_> = self.sources.keys().cloned().collect();
        tags.sort();
        tags
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether no model is registered.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryModel;
    use typeahead_core::TagError;

    fn tag(raw: &str) -> ModelTag {
        raw.parse().unwrap()
    }

    fn registry_with(tags: &[&str]) -> ModelRegistry {
        let mut registry = ModelRegistry::new();
        for raw in tags {
            registry.register(tag(raw), Arc::new(MemoryModel::new()));
        }
        registry
    }

    #[test]
    fn test_resolve_registered_tag() {
        let registry = registry_with(&["blog.Article"]);
        assert!(registry.resolve("blog.Article").is_ok());
    }

    #[test]
    fn test_resolve_unknown_tag() {
        let registry = registry_with(&["blog.Article"]);
        let err = registry.resolve("shop.Product").unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnknownType {
                tag: "shop.Product".to_string()
            }
        );
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let registry = registry_with(&["blog.Article"]);
        assert!(registry.resolve("blog.article").is_err());
    }

    #[test]
    fn test_resolve_malformed_tag() {
        let registry = registry_with(&["blog.Article"]);
        let err = registry.resolve("not-a-tag").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Tag(TagError::MissingSeparator { .. })
        ));
    }

    #[test]
    fn test_register_replaces_silently() {
        let mut registry = registry_with(&["blog.Article"]);
        let replacement = Arc::new(MemoryModel::new().with_create());
        registry.register(tag("blog.Article"), replacement);
        assert_eq!(registry.len(), 1);
        assert!(registry.resolve("blog.Article").unwrap().can_create());
    }

    #[test]
    fn test_tags_are_sorted() {
        let registry = registry_with(&["shop.Product", "blog.Article", "blog.Author"]);
        let tags: Vec<String> = registry.tags().iter().map(|t| t.to_string()).collect();
        assert_eq!(tags, vec!["blog.Article", "blog.Author", "shop.Product"]);
    }
}
