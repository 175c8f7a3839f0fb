//! Peer context supplied by the collector and the peer-up/peer-down records
//! produced for it.
use crate::models::*;
use std::net::IpAddr;

/// The pre-populated peer record a [crate::BgpParser] is constructed with.
///
/// The collector fills this in from its own bookkeeping before any message
/// is parsed; the parser only reads it, for log context.
#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeerEntry {
    pub peer_addr: IpAddr,
    pub peer_asn: Asn,
}

impl PeerEntry {
    pub fn new(peer_addr: IpAddr, peer_asn: Asn) -> PeerEntry {
        PeerEntry {
            peer_addr,
            peer_asn,
        }
    }
}

/// Record produced by decoding the sent/received OPEN pair of a peer-up
/// event. Handed to storage and returned to the caller; never read back.
#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeerUpEvent {
    /// the OPEN our side of the monitored session sent
    pub sent_open: BgpOpenMessage,
    /// the OPEN received from the peer
    pub received_open: BgpOpenMessage,
    /// ASN field width both sides agreed on (RFC 4893)
    pub asn_len: AsnLength,
    /// both sides advertised the route-refresh capability
    pub route_refresh: bool,
}

/// Record produced by decoding the NOTIFICATION of a peer-down event.
#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeerDownEvent {
    pub error_code: u8,
    pub error_subcode: u8,
    pub error: BgpError,
    pub data: Vec<u8>,
}

impl From<BgpNotificationMessage> for PeerDownEvent {
    fn from(msg: BgpNotificationMessage) -> Self {
        PeerDownEvent {
            error_code: msg.error_code,
            error_subcode: msg.error_subcode,
            error: msg.error,
            data: msg.data,
        }
    }
}
