//! In-memory identity provider API.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use idpctl_core::acl::{ApiError, IdentityProvider, IdentityProviderApi, Result};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Store {
    idps: HashMap<String, IdentityProvider>,
    index: u64,
    reads: u64,
}

/// In-memory identity provider backend for testing.
///
/// Mirrors the server contract: creates reject existing names, updates reject
/// missing ones, and every write bumps a shared modify index. Reads are counted
/// too. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryIdentityProviders {
    store: Arc<RwLock<Store>>,
}

impl InMemoryIdentityProviders {
    /// Creates a new empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of writes accepted so far.
    pub async fn write_count(&self) -> u64 {
        self.store.read().await.index
    }

    /// Number of single-record reads served so far.
    pub async fn read_count(&self) -> u64 {
        self.store.read().await.reads
    }
}

#[async_trait]
impl IdentityProviderApi for InMemoryIdentityProviders {
    async fn create_identity_provider(&self, idp: &IdentityProvider) -> Result<IdentityProvider> {
        let mut store = self.store.write().await;
        if store.idps.contains_key(&idp.name) {
            return Err(ApiError::AlreadyExists {
                name: idp.name.clone(),
            });
        }
        store.index += 1;
        let stored = IdentityProvider {
            create_index: store.index,
            modify_index: store.index,
            ..idp.clone()
        };
        store.idps.insert(stored.name.clone(), stored.clone());
        Ok(stored)
    }

    async fn read_identity_provider(&self, name: &str) -> Result<Option<IdentityProvider>> {
        let mut store = self.store.write().await;
        store.reads += 1;
        Ok(store.idps.get(name).cloned())
    }

    async fn list_identity_providers(&self) -> Result<Vec<IdentityProvider>> {
        let store = self.store.read().await;
        let mut idps: Vec<_> = store.idps.values().cloned().collect();
        idps.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(idps)
    }

    async fn update_identity_provider(&self, idp: &IdentityProvider) -> Result<IdentityProvider> {
        let mut store = self.store.write().await;
        let create_index = match store.idps.get(&idp.name) {
            Some(existing) => existing.create_index,
            None => {
                return Err(ApiError::NotFound {
                    name: idp.name.clone(),
                })
            }
        };
        store.index += 1;
        let stored = IdentityProvider {
            create_index,
            modify_index: store.index,
            ..idp.clone()
        };
        store.idps.insert(stored.name.clone(), stored.clone());
        Ok(stored)
    }
}
