// Mixnode Store
// Owns fetched mixnode data and the fetch tasks that produce it

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::{debug, info, warn};

use super::client::{FetchError, MixnodeSource};
use super::record::{MixnodeId, MixnodeRecord};

/// Handle identifying one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

/// State of the single-mixnode detail slot
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailState {
    /// Nothing requested yet, or the explorer does not know the node
    #[default]
    Absent,
    /// A request for this node is in flight
    Loading(MixnodeId),
    /// The node was fetched successfully
    Loaded(MixnodeRecord),
    /// The last request failed
    Failed { id: MixnodeId, message: String },
}

impl DetailState {
    /// Record, if loaded
    pub fn record(&self) -> Option<&MixnodeRecord> {
        match self {
            DetailState::Loaded(record) => Some(record),
            _ => None,
        }
    }
}

/// State of the full mixnode listing
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListingState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<MixnodeRecord>),
    Failed(String),
}

impl ListingState {
    pub fn records(&self) -> &[MixnodeRecord] {
        match self {
            ListingState::Loaded(records) => records,
            _ => &[],
        }
    }
}

/// Completion message sent by a fetch task back to the store
#[derive(Debug)]
pub enum StoreEvent {
    Mixnodes {
        ticket: Ticket,
        result: Result<Vec<MixnodeRecord>, FetchError>,
    },
    Mixnode {
        ticket: Ticket,
        id: MixnodeId,
        result: Result<Option<MixnodeRecord>, FetchError>,
    },
}

#[derive(Debug)]
struct InFlight {
    ticket: Ticket,
    handle: AbortHandle,
}

/// Typed store for explorer data
///
/// Requests spawn tokio tasks that report back over a channel; the UI loop
/// drains it with [`MixnodeStore::pump`], so state only ever changes on the
/// thread that renders it. A newer detail request aborts older ones and
/// responses carrying a ticket that is no longer registered are dropped, so
/// the most recently requested identifier always wins.
pub struct MixnodeStore {
    source: Arc<dyn MixnodeSource>,
    events_tx: mpsc::UnboundedSender<StoreEvent>,
    events_rx: mpsc::UnboundedReceiver<StoreEvent>,
    next_ticket: u64,

    detail: DetailState,
    detail_requests: HashMap<MixnodeId, InFlight>,

    listing: ListingState,
    listing_request: Option<InFlight>,

    /// Message from the most recent failed request
    last_error: Option<String>,
}

impl MixnodeStore {
    pub fn new(source: Arc<dyn MixnodeSource>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            source,
            events_tx,
            events_rx,
            next_ticket: 0,
            detail: DetailState::Absent,
            detail_requests: HashMap::new(),
            listing: ListingState::Idle,
            listing_request: None,
            last_error: None,
        }
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    /// Loaded record for `id`, if the detail slot currently holds it
    pub fn get_mixnode(&self, id: &MixnodeId) -> Option<&MixnodeRecord> {
        self.detail.record().filter(|record| record.id() == id)
    }

    pub fn listing(&self) -> &ListingState {
        &self.listing
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_in_flight(&self, id: &MixnodeId) -> bool {
        self.detail_requests.contains_key(id)
    }

    pub fn is_listing_in_flight(&self) -> bool {
        self.listing_request.is_some()
    }

    /// Request a single mixnode by identifier
    ///
    /// Must be called from within a tokio runtime. Any in-flight request for
    /// a different identifier is aborted. Asking again for the identifier
    /// that is already loading returns the existing ticket.
    pub fn request_mixnode(&mut self, id: MixnodeId) -> Ticket {
        if let Some(existing) = self.detail_requests.get(&id) {
            if matches!(&self.detail, DetailState::Loading(current) if *current == id) {
                debug!(%id, ticket = ?existing.ticket, "mixnode request already in flight");
                return existing.ticket;
            }
        }

        self.cancel_detail_requests();

        let ticket = self.issue_ticket();
        let source = Arc::clone(&self.source);
        let tx = self.events_tx.clone();
        let task_id = id.clone();
        let handle = tokio::spawn(async move {
            let result = source.fetch_mixnode(&task_id).await;
            let _ = tx.send(StoreEvent::Mixnode {
                ticket,
                id: task_id,
                result,
            });
        });

        debug!(%id, ?ticket, "requested mixnode");
        self.detail_requests.insert(
            id.clone(),
            InFlight {
                ticket,
                handle: handle.abort_handle(),
            },
        );
        self.detail = DetailState::Loading(id);
        ticket
    }

    /// Request the full mixnode listing, superseding any listing in flight
    pub fn request_mixnodes(&mut self) -> Ticket {
        if let Some(previous) = self.listing_request.take() {
            previous.handle.abort();
        }

        let ticket = self.issue_ticket();
        let source = Arc::clone(&self.source);
        let tx = self.events_tx.clone();
        let handle = tokio::spawn(async move {
            let result = source.fetch_mixnodes().await;
            let _ = tx.send(StoreEvent::Mixnodes { ticket, result });
        });

        debug!(?ticket, "requested mixnode listing");
        self.listing_request = Some(InFlight {
            ticket,
            handle: handle.abort_handle(),
        });
        self.listing = ListingState::Loading;
        ticket
    }

    /// Abort a request by ticket; returns whether anything was cancelled
    pub fn cancel(&mut self, ticket: Ticket) -> bool {
        if self.listing_request.as_ref().map(|r| r.ticket) == Some(ticket) {
            if let Some(request) = self.listing_request.take() {
                request.handle.abort();
            }
            if self.listing == ListingState::Loading {
                self.listing = ListingState::Idle;
            }
            return true;
        }

        let id = self
            .detail_requests
            .iter()
            .find(|(_, request)| request.ticket == ticket)
            .map(|(id, _)| id.clone());

        match id {
            Some(id) => {
                if let Some(request) = self.detail_requests.remove(&id) {
                    request.handle.abort();
                }
                if matches!(&self.detail, DetailState::Loading(current) if *current == id) {
                    self.detail = DetailState::Absent;
                }
                true
            }
            None => false,
        }
    }

    /// Apply all completed fetches; returns whether any state changed
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events_rx.try_recv() {
            changed |= self.apply(event);
        }
        changed
    }

    /// Wait for the next completed fetch without applying it
    pub async fn next_event(&mut self) -> Option<StoreEvent> {
        self.events_rx.recv().await
    }

    /// Apply one completion message; stale tickets are discarded
    pub fn apply(&mut self, event: StoreEvent) -> bool {
        match event {
            StoreEvent::Mixnode { ticket, id, result } => {
                let current = self.detail_requests.get(&id).map(|request| request.ticket);
                if current != Some(ticket) {
                    debug!(%id, ?ticket, "discarding superseded mixnode response");
                    return false;
                }
                self.detail_requests.remove(&id);

                if result.is_ok() {
                    self.last_error = None;
                }

                self.detail = match result {
                    Ok(Some(record)) if record.id() == &id => {
                        info!(%id, "mixnode loaded");
                        DetailState::Loaded(record)
                    }
                    Ok(Some(record)) => {
                        warn!(%id, returned = %record.id(), "explorer returned a different mixnode");
                        DetailState::Absent
                    }
                    Ok(None) => {
                        warn!(%id, "mixnode not found");
                        DetailState::Absent
                    }
                    Err(error) => {
                        warn!(%id, %error, "mixnode request failed");
                        let message = error.to_string();
                        self.last_error = Some(message.clone());
                        DetailState::Failed { id, message }
                    }
                };
                true
            }
            StoreEvent::Mixnodes { ticket, result } => {
                if self.listing_request.as_ref().map(|r| r.ticket) != Some(ticket) {
                    debug!(?ticket, "discarding superseded listing response");
                    return false;
                }
                self.listing_request = None;

                self.listing = match result {
                    Ok(records) => {
                        info!(count = records.len(), "mixnode listing loaded");
                        self.last_error = None;
                        ListingState::Loaded(records)
                    }
                    Err(error) => {
                        warn!(%error, "mixnode listing failed");
                        let message = error.to_string();
                        self.last_error = Some(message.clone());
                        ListingState::Failed(message)
                    }
                };
                true
            }
        }
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }

    fn cancel_detail_requests(&mut self) {
        for (id, request) in self.detail_requests.drain() {
            debug!(%id, ticket = ?request.ticket, "cancelling superseded mixnode request");
            request.handle.abort();
        }
    }
}

impl Drop for MixnodeStore {
    fn drop(&mut self) {
        self.cancel_detail_requests();
        if let Some(request) = self.listing_request.take() {
            request.handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::StaticSource;

    fn node(id: &str) -> MixnodeRecord {
        StaticSource::record(id)
    }

    #[tokio::test]
    async fn test_request_loads_record() {
        let source = Arc::new(StaticSource::new(vec![node("alpha")]));
        let mut store = MixnodeStore::new(source.clone());

        store.request_mixnode(MixnodeId::from("alpha"));
        assert_eq!(store.detail(), &DetailState::Loading(MixnodeId::from("alpha")));
        assert!(store.get_mixnode(&MixnodeId::from("alpha")).is_none());

        let event = store.next_event().await.unwrap();
        assert!(store.apply(event));

        assert_eq!(store.get_mixnode(&MixnodeId::from("alpha")), Some(&node("alpha")));
        assert!(!store.is_in_flight(&MixnodeId::from("alpha")));
        assert_eq!(source.detail_calls(), vec![MixnodeId::from("alpha")]);
    }

    #[tokio::test]
    async fn test_unknown_id_is_absent() {
        let source = Arc::new(StaticSource::new(vec![node("alpha")]));
        let mut store = MixnodeStore::new(source);

        store.request_mixnode(MixnodeId::from("ghost"));
        let event = store.next_event().await.unwrap();
        store.apply(event);

        assert_eq!(store.detail(), &DetailState::Absent);
        assert!(store.last_error().is_none());
    }

    #[tokio::test]
    async fn test_failure_is_surfaced() {
        let source = Arc::new(StaticSource::new(vec![]).failing(MixnodeId::from("broken")));
        let mut store = MixnodeStore::new(source);

        store.request_mixnode(MixnodeId::from("broken"));
        let event = store.next_event().await.unwrap();
        store.apply(event);

        match store.detail() {
            DetailState::Failed { id, message } => {
                assert_eq!(id, &MixnodeId::from("broken"));
                assert!(message.contains("503"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(store.last_error().is_some());
    }

    #[tokio::test]
    async fn test_success_clears_last_error() {
        let source = Arc::new(StaticSource::new(vec![node("alpha")]).failing(MixnodeId::from("broken")));
        let mut store = MixnodeStore::new(source);

        store.request_mixnode(MixnodeId::from("broken"));
        let event = store.next_event().await.unwrap();
        store.apply(event);
        assert!(store.last_error().is_some());

        store.request_mixnode(MixnodeId::from("alpha"));
        let event = store.next_event().await.unwrap();
        store.apply(event);
        assert!(store.last_error().is_none());

        store.request_mixnode(MixnodeId::from("broken"));
        let event = store.next_event().await.unwrap();
        store.apply(event);
        store.request_mixnodes();
        let event = store.next_event().await.unwrap();
        store.apply(event);
        assert!(store.last_error().is_none());
    }

    #[tokio::test]
    async fn test_mismatched_record_is_not_loaded() {
        let source = Arc::new(StaticSource::new(vec![]).holding(MixnodeId::from("alpha")));
        let mut store = MixnodeStore::new(source);

        let ticket = store.request_mixnode(MixnodeId::from("alpha"));
        let wrong = StoreEvent::Mixnode {
            ticket,
            id: MixnodeId::from("alpha"),
            result: Ok(Some(node("beta"))),
        };

        assert!(store.apply(wrong));
        assert_eq!(store.detail(), &DetailState::Absent);
        assert!(store.get_mixnode(&MixnodeId::from("beta")).is_none());
        assert!(!store.is_in_flight(&MixnodeId::from("alpha")));
    }

    #[tokio::test]
    async fn test_same_id_in_flight_is_not_refetched() {
        let source = Arc::new(StaticSource::new(vec![node("alpha")]).holding(MixnodeId::from("alpha")));
        let mut store = MixnodeStore::new(source);

        let first = store.request_mixnode(MixnodeId::from("alpha"));
        let second = store.request_mixnode(MixnodeId::from("alpha"));

        assert_eq!(first, second);
        assert!(store.is_in_flight(&MixnodeId::from("alpha")));
    }

    #[tokio::test]
    async fn test_newer_request_supersedes_older() {
        // "alpha" never resolves on its own; "beta" resolves immediately
        let source = Arc::new(
            StaticSource::new(vec![node("alpha"), node("beta")]).holding(MixnodeId::from("alpha")),
        );
        let mut store = MixnodeStore::new(source);

        let first = store.request_mixnode(MixnodeId::from("alpha"));
        store.request_mixnode(MixnodeId::from("beta"));
        assert!(!store.is_in_flight(&MixnodeId::from("alpha")));
        assert_eq!(store.detail(), &DetailState::Loading(MixnodeId::from("beta")));

        let event = store.next_event().await.unwrap();
        assert!(store.apply(event));
        assert_eq!(store.get_mixnode(&MixnodeId::from("beta")), Some(&node("beta")));

        // A late response for the superseded request must not overwrite the newer one
        let late = StoreEvent::Mixnode {
            ticket: first,
            id: MixnodeId::from("alpha"),
            result: Ok(Some(node("alpha"))),
        };
        assert!(!store.apply(late));
        assert_eq!(store.get_mixnode(&MixnodeId::from("beta")), Some(&node("beta")));
        assert!(store.get_mixnode(&MixnodeId::from("alpha")).is_none());
    }

    #[tokio::test]
    async fn test_cancel_clears_loading() {
        let source = Arc::new(StaticSource::new(vec![node("alpha")]).holding(MixnodeId::from("alpha")));
        let mut store = MixnodeStore::new(source);

        let ticket = store.request_mixnode(MixnodeId::from("alpha"));
        assert!(store.cancel(ticket));
        assert_eq!(store.detail(), &DetailState::Absent);
        assert!(!store.cancel(ticket));
    }

    #[tokio::test]
    async fn test_listing_loads() {
        let source = Arc::new(StaticSource::new(vec![node("alpha"), node("beta")]));
        let mut store = MixnodeStore::new(source);

        store.request_mixnodes();
        assert_eq!(store.listing(), &ListingState::Loading);
        assert!(store.is_listing_in_flight());

        let event = store.next_event().await.unwrap();
        store.apply(event);

        assert_eq!(store.listing().records().len(), 2);
        assert!(!store.is_listing_in_flight());
    }

    #[tokio::test]
    async fn test_stale_listing_is_discarded() {
        let source = Arc::new(StaticSource::new(vec![node("alpha")]));
        let mut store = MixnodeStore::new(source);

        let first = store.request_mixnodes();
        store.request_mixnodes();

        let stale = StoreEvent::Mixnodes {
            ticket: first,
            result: Ok(vec![]),
        };
        assert!(!store.apply(stale));
        assert_eq!(store.listing(), &ListingState::Loading);
    }
}
