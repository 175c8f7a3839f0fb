/*!
Wire-format decoding and the per-session parser façade.

The submodules hold pure decoding functions that turn byte buffers into the
structs under [crate::models]; [BgpParser] wraps them with per-session state
and the storage hand-off.
*/
pub mod bgp;
mod utils;

pub use bgp::{
    parse_attributes, parse_bgp_header, parse_bgp_notification_message, parse_bgp_open_message,
    parse_bgp_update_message,
};
pub use utils::{encode_nlri_prefixes, parse_nlri_list, ReadUtils};

use bytes::Bytes;
use log::{debug, info};

use crate::error::ParserError;
use crate::models::*;
use crate::store::RouteStore;

/// Per-peer-session BGP parser.
///
/// One instance per monitored session. It owns the session's parsing state,
/// above all the ASN field width negotiated by the OPEN exchange, and pushes
/// every successfully decoded message into its [RouteStore]. A message that
/// fails to decode produces no storage calls at all: records reach the store
/// only after the entire message parsed cleanly.
pub struct BgpParser<S> {
    store: S,
    peer: PeerEntry,
    /// address of the router the session was collected from, for log context
    router_addr: String,
    /// ASN width for AS_PATH and AGGREGATOR, 2 octets until an OPEN pair
    /// negotiates otherwise
    asn_len: AsnLength,
    last_path_hash: Option<PathHash>,
    verbose: bool,
}

impl<S: RouteStore> BgpParser<S> {
    pub fn new(store: S, peer: PeerEntry, router_addr: impl Into<String>) -> BgpParser<S> {
        BgpParser {
            store,
            peer,
            router_addr: router_addr.into(),
            asn_len: AsnLength::default(),
            last_path_hash: None,
            verbose: false,
        }
    }

    /// Log one info line per decoded message. Off by default.
    pub fn with_verbose(mut self, verbose: bool) -> BgpParser<S> {
        self.verbose = verbose;
        self
    }

    /// Decode one UPDATE message, header included, and forward its records
    /// to the store.
    ///
    /// Uses the session's negotiated ASN width. On success the store
    /// receives the withdrawn prefixes, the attribute set keyed by its
    /// [PathHash], and the announced prefixes, in that order; empty sections
    /// are skipped. On any decode error the store is not called.
    pub fn handle_update(&mut self, data: &[u8]) -> Result<BgpUpdateMessage, ParserError> {
        let mut buf = Bytes::copy_from_slice(data);
        let header = parse_bgp_header(&mut buf)?;
        if header.msg_type != BgpMessageType::UPDATE {
            return Err(ParserError::ParseError(format!(
                "expected an UPDATE message, found type {:?}",
                header.msg_type
            )));
        }
        let body = buf.split_to(header.body_length());
        let update = parse_bgp_update_message(body, self.asn_len)?;

        if self.verbose {
            info!(
                "router {} peer {} (AS{}): UPDATE with {} announced, {} withdrawn, {} attributes",
                self.router_addr,
                self.peer.peer_addr,
                self.peer.peer_asn,
                update.announced_prefixes.len(),
                update.withdrawn_prefixes.len(),
                update.attributes.len(),
            );
        }

        if !update.withdrawn_prefixes.is_empty() {
            self.store
                .record_withdrawn_prefixes(&update.withdrawn_prefixes);
        }
        if !update.attributes.is_empty() {
            self.store
                .record_path_attributes(update.path_hash, &update.attributes);
            self.last_path_hash = Some(update.path_hash);
        }
        if !update.announced_prefixes.is_empty() {
            self.store
                .record_announced_prefixes(&update.announced_prefixes, update.path_hash);
        }

        Ok(update)
    }

    /// Decode a peer-up event: two back-to-back full OPEN messages, the one
    /// sent to the peer followed by the one received from it.
    ///
    /// On success the negotiated session parameters take effect: the ASN
    /// width becomes 4 octets iff both sides advertised RFC 4893 capability
    /// 65. A decode failure leaves the session state untouched and the store
    /// uncalled. The peer entry is never written; the received BGP
    /// identifier travels in the returned event.
    pub fn handle_peer_up(&mut self, data: &[u8]) -> Result<PeerUpEvent, ParserError> {
        let mut buf = Bytes::copy_from_slice(data);

        let sent_open = self.parse_one_open(&mut buf)?;
        let received_open = self.parse_one_open(&mut buf)?;

        let asn_len = match sent_open.supports_four_octet_asn()
            && received_open.supports_four_octet_asn()
        {
            true => AsnLength::Bits32,
            false => AsnLength::Bits16,
        };
        let route_refresh = sent_open
            .has_capability(BgpCapabilityType::ROUTE_REFRESH_CAPABILITY_FOR_BGP_4)
            && received_open.has_capability(BgpCapabilityType::ROUTE_REFRESH_CAPABILITY_FOR_BGP_4);

        debug!(
            "router {} peer {}: session negotiated {:?} ASNs, route refresh: {}",
            self.router_addr, self.peer.peer_addr, asn_len, route_refresh
        );

        self.asn_len = asn_len;

        let event = PeerUpEvent {
            sent_open,
            received_open,
            asn_len,
            route_refresh,
        };
        self.store.record_peer_up(&event);
        Ok(event)
    }

    /// Decode a peer-down event carrying one NOTIFICATION message.
    pub fn handle_peer_down(&mut self, data: &[u8]) -> Result<PeerDownEvent, ParserError> {
        let mut buf = Bytes::copy_from_slice(data);
        let header = parse_bgp_header(&mut buf)?;
        if header.msg_type != BgpMessageType::NOTIFICATION {
            return Err(ParserError::ParseError(format!(
                "expected a NOTIFICATION message, found type {:?}",
                header.msg_type
            )));
        }
        let body = buf.split_to(header.body_length());
        let msg = parse_bgp_notification_message(body)?;

        if self.verbose {
            info!(
                "router {} peer {}: session down with {}",
                self.router_addr, self.peer.peer_addr, msg.error
            );
        }

        let event = PeerDownEvent::from(msg);
        self.store.record_peer_down(&event);
        Ok(event)
    }

    fn parse_one_open(&self, buf: &mut Bytes) -> Result<BgpOpenMessage, ParserError> {
        let header = parse_bgp_header(buf)?;
        if header.msg_type != BgpMessageType::OPEN {
            return Err(ParserError::ParseError(format!(
                "expected an OPEN message, found type {:?}",
                header.msg_type
            )));
        }
        let mut body = buf.split_to(header.body_length());
        parse_bgp_open_message(&mut body)
    }

    /// The ASN width currently in effect for this session.
    pub fn asn_len(&self) -> AsnLength {
        self.asn_len
    }

    /// The attribute-set hash of the most recent UPDATE that carried
    /// attributes.
    pub fn last_path_hash(&self) -> Option<PathHash> {
        self.last_path_hash
    }

    pub fn peer(&self) -> &PeerEntry {
        &self.peer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn test_parser() -> BgpParser<MemoryStore> {
        let peer = PeerEntry::new("10.0.0.1".parse().unwrap(), Asn::new_32bit(65000));
        BgpParser::new(MemoryStore::default(), peer, "192.0.2.1")
    }

    fn with_header(msg_type: u8, body: &[u8]) -> Vec<u8> {
        let mut bytes = vec![0xff; 16];
        bytes.extend_from_slice(&(19 + body.len() as u16).to_be_bytes());
        bytes.push(msg_type);
        bytes.extend_from_slice(body);
        bytes
    }

    #[test]
    fn test_handle_update_wrong_type() {
        let mut parser = test_parser();
        let keepalive = with_header(4, &[]);
        assert!(parser.handle_update(&keepalive).is_err());
        assert_eq!(parser.store().record_count(), 0);
    }

    #[test]
    fn test_handle_update_records_in_store() {
        let mut parser = test_parser();
        let update = with_header(
            2,
            &[
                0x00, 0x00, // no withdrawn routes
                0x00, 0x0b, // attribute length: 11
                0x40, 0x01, 0x01, 0x00, // ORIGIN: IGP
                0x40, 0x03, 0x04, 0x0a, 0x00, 0x00, 0x01, // NEXT_HOP: 10.0.0.1
                0x18, 0x0a, 0x00, 0x00, // announced: 10.0.0.0/24
            ],
        );
        let msg = parser.handle_update(&update).unwrap();
        assert_eq!(parser.last_path_hash(), Some(msg.path_hash));

        let store = parser.store();
        assert_eq!(store.announced.len(), 1);
        assert_eq!(store.announced[0].1, msg.path_hash);
        assert_eq!(store.attributes.len(), 1);
        assert!(store.withdrawn.is_empty());
    }

    #[test]
    fn test_handle_update_failure_stores_nothing() {
        let mut parser = test_parser();
        // attribute section claims 200 bytes, body holds none
        let update = with_header(2, &[0x00, 0x00, 0x00, 0xc8]);
        assert!(parser.handle_update(&update).is_err());
        assert_eq!(parser.store().record_count(), 0);
        assert_eq!(parser.last_path_hash(), None);
    }

    #[test]
    fn test_handle_peer_down() {
        let mut parser = test_parser();
        let notification = with_header(3, &[6, 2]);
        let event = parser.handle_peer_down(&notification).unwrap();
        assert_eq!(
            event.error,
            BgpError::CeaseNotification(CeaseNotification::ADMINISTRATIVE_SHUTDOWN)
        );
        assert_eq!(parser.store().peer_downs.len(), 1);
    }

    #[test]
    fn test_handle_peer_down_truncated() {
        let mut parser = test_parser();
        let notification = with_header(3, &[6, 2]);
        assert!(parser.handle_peer_down(&notification[..12]).is_err());
        assert_eq!(parser.store().record_count(), 0);
    }
}
