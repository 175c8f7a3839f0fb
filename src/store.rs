//! The storage collaborator boundary.
//!
//! The parser treats storage as an opaque synchronous sink: decoded records
//! flow in, nothing flows back. Persistence (database, message queue, files)
//! lives entirely behind this trait in the surrounding collector.
use crate::models::*;

/// Sink for parsed routing records.
///
/// For one successfully decoded UPDATE the parser calls, in order,
/// [record_withdrawn_prefixes](RouteStore::record_withdrawn_prefixes),
/// [record_path_attributes](RouteStore::record_path_attributes) and
/// [record_announced_prefixes](RouteStore::record_announced_prefixes).
/// A failed decode produces no calls at all.
pub trait RouteStore {
    /// Prefixes announced by one UPDATE, all sharing one path attribute set
    /// identified by `path_hash`.
    fn record_announced_prefixes(&mut self, prefixes: &[NetworkPrefix], path_hash: PathHash);

    /// Prefixes withdrawn by one UPDATE.
    fn record_withdrawn_prefixes(&mut self, prefixes: &[NetworkPrefix]);

    /// The path attribute collection of one UPDATE, keyed by its hash.
    fn record_path_attributes(&mut self, path_hash: PathHash, attributes: &Attributes);

    /// A peer session came up; `event` holds both OPENs and the negotiated
    /// parameters.
    fn record_peer_up(&mut self, event: &PeerUpEvent);

    /// A peer session went down with the given NOTIFICATION contents.
    fn record_peer_down(&mut self, event: &PeerDownEvent);
}

/// An in-memory [RouteStore] that appends every record to a `Vec`.
///
/// Useful for tests and for callers that batch records before flushing them
/// to real storage themselves.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub announced: Vec<(NetworkPrefix, PathHash)>,
    pub withdrawn: Vec<NetworkPrefix>,
    pub attributes: Vec<(PathHash, Attributes)>,
    pub peer_ups: Vec<PeerUpEvent>,
    pub peer_downs: Vec<PeerDownEvent>,
}

impl MemoryStore {
    /// Total number of record calls received, across all five entry points.
    pub fn record_count(&self) -> usize {
        self.announced.len()
            + self.withdrawn.len()
            + self.attributes.len()
            + self.peer_ups.len()
            + self.peer_downs.len()
    }
}

impl RouteStore for MemoryStore {
    fn record_announced_prefixes(&mut self, prefixes: &[NetworkPrefix], path_hash: PathHash) {
        self.announced
            .extend(prefixes.iter().map(|p| (*p, path_hash)));
    }

    fn record_withdrawn_prefixes(&mut self, prefixes: &[NetworkPrefix]) {
        self.withdrawn.extend_from_slice(prefixes);
    }

    fn record_path_attributes(&mut self, path_hash: PathHash, attributes: &Attributes) {
        self.attributes.push((path_hash, attributes.clone()));
    }

    fn record_peer_up(&mut self, event: &PeerUpEvent) {
        self.peer_ups.push(event.clone());
    }

    fn record_peer_down(&mut self, event: &PeerDownEvent) {
        self.peer_downs.push(event.clone());
    }
}
