// In-memory mixnode source for tests

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

use super::client::{FetchError, MixnodeSource};
use super::record::{Coin, MixNode, MixnodeId, MixnodeRecord};

/// Serves records from memory and records every call
pub struct StaticSource {
    records: Vec<MixnodeRecord>,
    held: HashSet<MixnodeId>,
    failing: HashSet<MixnodeId>,
    detail_calls: Mutex<Vec<MixnodeId>>,
    listing_calls: Mutex<usize>,
}

impl StaticSource {
    pub fn new(records: Vec<MixnodeRecord>) -> Self {
        Self {
            records,
            held: HashSet::new(),
            failing: HashSet::new(),
            detail_calls: Mutex::new(Vec::new()),
            listing_calls: Mutex::new(0),
        }
    }

    /// Requests for `id` never complete
    pub fn holding(mut self, id: MixnodeId) -> Self {
        self.held.insert(id);
        self
    }

    /// Requests for `id` fail with a 503
    pub fn failing(mut self, id: MixnodeId) -> Self {
        self.failing.insert(id);
        self
    }

    pub fn detail_calls(&self) -> Vec<MixnodeId> {
        self.detail_calls.lock().unwrap().clone()
    }

    pub fn listing_calls(&self) -> usize {
        *self.listing_calls.lock().unwrap()
    }

    /// A plausible record for `id`
    pub fn record(id: &str) -> MixnodeRecord {
        MixnodeRecord {
            mix_node: MixNode {
                identity_key: MixnodeId::from(id),
                host: format!("{}.mixnet.example", id),
                mix_port: 1789,
                version: "0.11.0".to_string(),
                location: "Nowhere".to_string(),
                ..Default::default()
            },
            owner: format!("punk1{}", id),
            pledge_amount: Coin::new("100000000", "unym"),
            total_delegation: Coin::new("5000000", "unym"),
            layer: 1,
            block_height: 42,
            location: None,
        }
    }
}

#[async_trait]
impl MixnodeSource for StaticSource {
    async fn fetch_mixnodes(&self) -> Result<Vec<MixnodeRecord>, FetchError> {
        *self.listing_calls.lock().unwrap() += 1;
        Ok(self.records.clone())
    }

    async fn fetch_mixnode(&self, id: &MixnodeId) -> Result<Option<MixnodeRecord>, FetchError> {
        self.detail_calls.lock().unwrap().push(id.clone());

        if self.held.contains(id) {
            std::future::pending::<()>().await;
        }
        if self.failing.contains(id) {
            return Err(FetchError::Status {
                status: 503,
                url: format!("memory://mix-node/{}", id),
            });
        }

        Ok(self.records.iter().find(|record| record.id() == id).cloned())
    }
}
