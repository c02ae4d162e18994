//! Request-scoped loading state.
//!
//! Each operation gets its own token, so one request finishing cannot clear
//! the loading indicator of another that is still running. Fetch tokens are
//! also used to drop list responses that arrive after a newer one was shown.

use std::collections::BTreeMap;

use crate::api::{Operation, RequestId};

#[derive(Debug, Default)]
pub struct RequestTracker {
    last_issued: RequestId,
    in_flight: BTreeMap<RequestId, Operation>,
    newest_applied_fetch: Option<RequestId>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `operation` and returns its token.
    pub fn begin(&mut self, operation: Operation) -> RequestId {
        self.last_issued += 1;
        let id = self.last_issued;
        self.in_flight.insert(id, operation);
        id
    }

    /// Releases a token. `None` if it was never issued or already finished.
    pub fn finish(&mut self, id: RequestId) -> Option<Operation> {
        self.in_flight.remove(&id)
    }

    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    /// In-flight operations, oldest first.
    pub fn pending(&self) -> impl Iterator<Item = &Operation> {
        self.in_flight.values()
    }

    /// True once a fetch newer than `id` has been applied.
    pub fn is_superseded(&self, id: RequestId) -> bool {
        self.newest_applied_fetch.is_some_and(|newest| id < newest)
    }

    /// Whether a fetch result with token `id` may replace the list.
    ///
    /// Accepting records `id` as the newest applied fetch.
    pub fn accept_fetch(&mut self, id: RequestId) -> bool {
        if self.is_superseded(id) {
            return false;
        }
        self.newest_applied_fetch = Some(id);
        true
    }
}
