// Mixnode Detail Controller
// Issues the detail fetch when the routed identifier changes

use tracing::debug;

use super::router::RouteParams;
use crate::store::{MixnodeId, MixnodeStore, Ticket};

/// Tracks the identifier the detail page was last synced with
#[derive(Debug, Default)]
pub struct DetailController {
    mounted: bool,
    id: Option<MixnodeId>,
    /// Request issued by the last effect run
    ticket: Option<Ticket>,
}

impl DetailController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Run on every frame while the detail page is shown
    ///
    /// Requests the routed mixnode on first mount and whenever the identifier
    /// changes. Nothing is requested when the route carries no identifier.
    /// Returns the ticket of the request issued by this call, if any.
    pub fn sync(&mut self, params: &RouteParams, store: &mut MixnodeStore) -> Option<Ticket> {
        if self.mounted && self.id == params.id {
            return None;
        }

        if let Some(previous) = self.ticket.take() {
            store.cancel(previous);
        }
        self.mounted = true;
        self.id = params.id.clone();

        let ticket = self.id.clone().map(|id| store.request_mixnode(id));
        self.ticket = ticket;
        debug!(id = ?self.id, detail = ?store.detail(), "mixnode detail is back");
        ticket
    }

    /// Forget the mounted identifier so the next sync fetches again
    ///
    /// A fetch still in flight for this page is cancelled.
    pub fn unmount(&mut self, store: &mut MixnodeStore) {
        if let Some(ticket) = self.ticket.take() {
            if store.cancel(ticket) {
                debug!(?ticket, "cancelled detail fetch on unmount");
            }
        }
        self.mounted = false;
        self.id = None;
    }
}
