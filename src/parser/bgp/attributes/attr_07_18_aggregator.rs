use crate::error::ParserError;
use crate::models::*;
use crate::parser::ReadUtils;
use bytes::Bytes;
use std::net::Ipv4Addr;

/// Parse an AGGREGATOR or AS4_AGGREGATOR attribute into the aggregating ASN
/// and router identifier. The ASN width follows the session negotiation for
/// AGGREGATOR and is always 4 octets for AS4_AGGREGATOR.
pub fn parse_aggregator(
    mut input: Bytes,
    asn_len: AsnLength,
) -> Result<(Asn, Ipv4Addr), ParserError> {
    let asn = input.read_asn(asn_len)?;
    let addr = input.read_ipv4_address()?;
    Ok((asn, addr))
}
