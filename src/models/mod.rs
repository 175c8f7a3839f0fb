//! Data structures for BGP messages and the records handed to storage.
pub mod bgp;
pub mod network;
pub mod peer;

pub use bgp::*;
pub use network::*;
pub use peer::*;
