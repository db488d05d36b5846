// Store module
// Mixnode data, the explorer API client, and the store tying them together

pub mod client;
pub mod mixnode_store;
pub mod record;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{ExplorerApiClient, FetchError, MixnodeSource};
pub use mixnode_store::{DetailState, ListingState, MixnodeStore, StoreEvent, Ticket};
pub use record::{Coin, Location, MixNode, MixnodeId, MixnodeRecord};
