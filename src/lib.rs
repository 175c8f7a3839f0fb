/*!
`bgp-session-parser` decodes BGP-4 wire messages (RFC 4271 and extensions)
arriving on a monitored peer session and turns them into structured records
for a storage backend.

The crate is the parsing core of a route collector: the surrounding system
owns sockets, sessions and persistence, and hands this crate already-read
byte buffers. One [BgpParser] instance is created per peer session and owns
that session's parsing state, most importantly the ASN field width
negotiated by the peers' OPEN messages (RFC 4893), which changes how AS_PATH
and AGGREGATOR attributes are laid out on the wire in every subsequent
UPDATE.

```
use bgp_session_parser::models::*;
use bgp_session_parser::{BgpParser, MemoryStore};

let peer = PeerEntry::new("10.0.0.1".parse().unwrap(), Asn::new_32bit(65000));
let mut parser = BgpParser::new(MemoryStore::default(), peer, "192.0.2.1");

let update: &[u8] = &[
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, // marker
    0x00, 0x17, // length: 23
    0x02, // type: UPDATE
    0x00, 0x00, // no withdrawn routes
    0x00, 0x00, // no path attributes
];
parser.handle_update(update).unwrap();
```
*/
pub mod error;
pub mod models;
pub mod parser;
pub mod store;

pub use crate::error::ParserError;
pub use crate::parser::BgpParser;
pub use crate::store::{MemoryStore, RouteStore};
