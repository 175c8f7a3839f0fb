mod attr_01_origin;
mod attr_02_17_as_path;
mod attr_03_next_hop;
mod attr_04_med;
mod attr_05_local_pref;
mod attr_07_18_aggregator;
mod attr_08_communities;
mod attr_09_originator;
mod attr_10_13_cluster;
mod attr_14_15_nlri;
mod attr_16_25_extended_communities;

use bytes::{Buf, Bytes};
use log::{debug, warn};

use crate::error::ParserError;
use crate::models::*;
use crate::parser::ReadUtils;

use crate::parser::bgp::attributes::attr_01_origin::parse_origin;
use crate::parser::bgp::attributes::attr_02_17_as_path::parse_as_path;
use crate::parser::bgp::attributes::attr_03_next_hop::parse_next_hop;
use crate::parser::bgp::attributes::attr_04_med::parse_med;
use crate::parser::bgp::attributes::attr_05_local_pref::parse_local_pref;
use crate::parser::bgp::attributes::attr_07_18_aggregator::parse_aggregator;
use crate::parser::bgp::attributes::attr_08_communities::parse_regular_communities;
use crate::parser::bgp::attributes::attr_09_originator::parse_originator_id;
use crate::parser::bgp::attributes::attr_10_13_cluster::parse_clusters;
use crate::parser::bgp::attributes::attr_14_15_nlri::parse_nlri;
use crate::parser::bgp::attributes::attr_16_25_extended_communities::parse_extended_community;

/// Parse the path attribute section of one UPDATE message.
///
/// `data` holds the entire attribute section, so the length of the slice is
/// the authoritative boundary: a TLV whose declared length reaches past it
/// fails the whole section. `asn_len` is the session-negotiated ASN width
/// for AS_PATH and AGGREGATOR payloads.
///
/// Along with the collection this returns its [PathHash]: an MD5 digest
/// over the type octet and raw value bytes of every attribute in wire
/// order. Flags and the length encoding stay out of the digest, so an
/// extended-length re-encoding of the same attributes hashes identically.
pub fn parse_attributes(
    mut data: Bytes,
    asn_len: AsnLength,
) -> Result<(Attributes, PathHash), ParserError> {
    let mut attributes: Vec<Attribute> = Vec::with_capacity(20);
    let mut hash_ctx = md5::Context::new();

    while data.remaining() > 0 {
        // each attribute is at least 3 bytes: flag(1) + type(1) + length(1)
        let flag = AttrFlags::from_bits_retain(data.read_u8()?);
        let type_code = data.read_u8()?;
        let attr_length = match flag.contains(AttrFlags::EXTENDED) {
            false => data.read_u8()? as usize,
            true => data.read_u16()? as usize,
        };

        debug!(
            "reading attribute: type -- {}, length -- {}",
            type_code, attr_length
        );

        if data.remaining() < attr_length {
            return Err(ParserError::ParseError(format!(
                "attribute type {} declares {} bytes but only {} remain in the attribute section",
                type_code,
                attr_length,
                data.remaining()
            )));
        }
        let attr_data = data.split_to(attr_length);

        // the hash identifies the attribute set, not its framing
        hash_ctx.consume([type_code]);
        hash_ctx.consume(&attr_data);

        let value = match AttrType::from(type_code) {
            AttrType::Unknown(code) => {
                let raw = AttrRaw {
                    attr_type: code,
                    bytes: attr_data.to_vec(),
                };
                match get_deprecated_attr_type(code) {
                    Some(name) => {
                        debug!("deprecated attribute type: {} - {}", code, name);
                        AttributeValue::Deprecated(raw)
                    }
                    None => {
                        debug!("unknown attribute type: {}", code);
                        AttributeValue::Unknown(raw)
                    }
                }
            }
            attr_type => parse_attribute_value(attr_type, attr_data, asn_len).inspect_err(|e| {
                warn!("error parsing attribute type {}: {}", type_code, e);
            })?,
        };

        // RFC 4271 section 5: an attribute may appear at most once per UPDATE
        if attributes
            .iter()
            .any(|a| a.value.attr_type() == value.attr_type())
        {
            return Err(ParserError::ParseError(format!(
                "duplicate attribute type {} in one UPDATE message",
                type_code
            )));
        }

        attributes.push(Attribute { value, flag });
    }

    let hash = PathHash(hash_ctx.compute().0);
    Ok((Attributes::from(attributes), hash))
}

fn parse_attribute_value(
    attr_type: AttrType,
    attr_data: Bytes,
    asn_len: AsnLength,
) -> Result<AttributeValue, ParserError> {
    match attr_type {
        AttrType::ORIGIN => parse_origin(attr_data),
        AttrType::AS_PATH => parse_as_path(attr_data, asn_len).map(|path| AttributeValue::AsPath {
            path,
            is_as4: false,
        }),
        AttrType::NEXT_HOP => parse_next_hop(attr_data),
        AttrType::MULTI_EXIT_DISCRIMINATOR => parse_med(attr_data),
        AttrType::LOCAL_PREFERENCE => parse_local_pref(attr_data),
        AttrType::ATOMIC_AGGREGATE => Ok(AttributeValue::AtomicAggregate),
        AttrType::AGGREGATOR => {
            parse_aggregator(attr_data, asn_len).map(|(asn, id)| AttributeValue::Aggregator {
                asn,
                id,
                is_as4: false,
            })
        }
        AttrType::COMMUNITIES => parse_regular_communities(attr_data),
        AttrType::ORIGINATOR_ID => parse_originator_id(attr_data),
        AttrType::CLUSTER_LIST => parse_clusters(attr_data),
        AttrType::MP_REACHABLE_NLRI => parse_nlri(attr_data, true),
        AttrType::MP_UNREACHABLE_NLRI => parse_nlri(attr_data, false),
        AttrType::EXTENDED_COMMUNITIES => parse_extended_community(attr_data),
        // AS4 flavors always carry 4-octet ASNs regardless of negotiation
        AttrType::AS4_PATH => parse_as_path(attr_data, AsnLength::Bits32)
            .map(|path| AttributeValue::AsPath { path, is_as4: true }),
        AttrType::AS4_AGGREGATOR => parse_aggregator(attr_data, AsnLength::Bits32).map(
            |(asn, id)| AttributeValue::Aggregator {
                asn,
                id,
                is_as4: true,
            },
        ),
        AttrType::Unknown(_) => unreachable!("handled by the caller"),
    }
}
