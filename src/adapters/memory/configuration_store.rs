//! In-Memory Configuration Store Adapter

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::classification::Configuration;
use crate::domain::foundation::{ConfigId, DomainError};
use crate::ports::ConfigurationReader;

/// In-memory storage for classification configurations
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigurationStore {
    configurations: Arc<RwLock<BTreeMap<ConfigId, Configuration>>>,
}

impl InMemoryConfigurationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a configuration.
    ///
    /// Inserting a default configuration clears the flag on all others.
    pub async fn insert(&self, configuration: Configuration) {
        let mut configurations = self.configurations.write().await;
        if configuration.is_default {
            for existing in configurations.values_mut() {
                existing.is_default = false;
            }
        }
        configurations.insert(configuration.config_id, configuration);
    }

    pub async fn count(&self) -> usize {
        self.configurations.read().await.len()
    }
}

#[async_trait]
impl ConfigurationReader for InMemoryConfigurationStore {
    async fn find_by_id(&self, id: ConfigId) -> Result<Option<Configuration>, DomainError> {
        Ok(self.configurations.read().await.get(&id).cloned())
    }

    async fn find_default(&self) -> Result<Option<Configuration>, DomainError> {
        Ok(self
            .configurations
            .read()
            .await
            .values()
            .find(|c| c.is_default)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn finds_by_id_and_default() {
        let store = InMemoryConfigurationStore::new();
        store.insert(Configuration::standard(ConfigId::new(1), "Standard").as_default()).await;
        store.insert(Configuration::standard(ConfigId::new(2), "Other")).await;

        assert_eq!(store.count().await, 2);
        assert_eq!(
            store.find_by_id(ConfigId::new(2)).await.unwrap().unwrap().config_name,
            "Other"
        );
        assert!(store.find_by_id(ConfigId::new(3)).await.unwrap().is_none());
        assert_eq!(
            store.find_default().await.unwrap().unwrap().config_id,
            ConfigId::new(1)
        );
    }

    #[tokio::test]
    async fn new_default_replaces_previous_default() {
        let store = InMemoryConfigurationStore::new();
        store.insert(Configuration::standard(ConfigId::new(1), "Old").as_default()).await;
        store.insert(Configuration::standard(ConfigId::new(2), "New").as_default()).await;

        assert_eq!(
            store.find_default().await.unwrap().unwrap().config_id,
            ConfigId::new(2)
        );
        assert!(!store.find_by_id(ConfigId::new(1)).await.unwrap().unwrap().is_default);
    }

    #[tokio::test]
    async fn empty_store_has_no_default() {
        let store = InMemoryConfigurationStore::new();
        assert!(store.find_default().await.unwrap().is_none());
    }
}
