//! Shared search state: the latest outcome per search name.
//!
//! Several searches may be in flight under one name. Each issued search gets a
//! ticket with a sequence number, and a resolution is only accepted if its
//! ticket is still the latest one issued for that name.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::errors::SearchError;
use crate::search_descriptor::SearchDescriptor;
use crate::search_result::{SearchOutcome, SearchResultList};

#[derive(Debug, Clone, PartialEq)]
pub struct SearchEntry {
    pub seq: u64,
    pub descriptor: SearchDescriptor,
    pub outcome: SearchOutcome,
}

/// Handle for one issued search, needed to deposit its resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub name: String,
    pub seq: u64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchStore {
    entries: BTreeMap<String, SearchEntry>,
    next_seq: u64,
}

impl SearchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new search under `name`, superseding any search issued before it.
    pub fn begin(&mut self, name: &str, descriptor: &SearchDescriptor) -> SearchTicket {
        self.next_seq += 1;
        let seq = self.next_seq;
        let placeholder =
            SearchResultList::pending_placeholder(descriptor.search_query.p, descriptor.search_query.size);

        info!("search {name}#{seq} started for {}", descriptor.record_type);
        self.entries.insert(
            name.to_string(),
            SearchEntry {
                seq,
                descriptor: descriptor.clone(),
                outcome: SearchOutcome::Pending { placeholder },
            },
        );

        SearchTicket {
            name: name.to_string(),
            seq,
        }
    }

    /// Deposits the resolution of a search. Returns false, leaving the store
    /// untouched, when a newer search was issued under the same name.
    pub fn resolve(
        &mut self,
        ticket: &SearchTicket,
        resolution: Result<SearchResultList, SearchError>,
    ) -> bool {
        let Some(entry) = self.entries.get_mut(&ticket.name) else {
            debug!("search {}#{} resolved after its slot was cleared", ticket.name, ticket.seq);
            return false;
        };
        if entry.seq != ticket.seq {
            debug!(
                "discarding stale search {}#{} (latest is #{})",
                ticket.name, ticket.seq, entry.seq
            );
            return false;
        }

        entry.outcome = match resolution {
            Ok(result) => {
                info!("search {}#{} fulfilled", ticket.name, ticket.seq);
                SearchOutcome::Fulfilled(result)
            }
            Err(error) => {
                info!("search {}#{} rejected: {error}", ticket.name, ticket.seq);
                SearchOutcome::Rejected(error)
            }
        };
        true
    }

    pub fn get(&self, name: &str) -> Option<&SearchEntry> {
        self.entries.get(name)
    }

    pub fn outcome(&self, name: &str) -> Option<&SearchOutcome> {
        self.get(name).map(|entry| &entry.outcome)
    }

    pub fn clear(&mut self, name: &str) {
        self.entries.remove(name);
    }
}
