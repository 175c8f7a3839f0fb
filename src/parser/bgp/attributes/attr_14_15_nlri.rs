use crate::error::ParserError;
use crate::models::*;
use crate::parser::bgp::attributes::attr_03_next_hop::parse_mp_next_hop;
use crate::parser::{parse_nlri_list, ReadUtils};
use bytes::Bytes;
use log::warn;

/// Parse an MP_REACH_NLRI (`reachable == true`) or MP_UNREACH_NLRI
/// attribute, RFC 4760. Unlike the top-level UPDATE sections, these carry
/// their own AFI/SAFI tag and, for the reachable flavor, a nested next hop.
pub fn parse_nlri(mut input: Bytes, reachable: bool) -> Result<AttributeValue, ParserError> {
    let afi = input.read_afi()?;
    let safi = input.read_safi()?;

    let mut next_hop = None;
    if reachable {
        let next_hop_length = input.read_u8()? as usize;
        input.has_n_remaining(next_hop_length)?;
        next_hop = parse_mp_next_hop(input.split_to(next_hop_length))?;

        // one reserved octet sits between the next hop and the prefixes
        let reserved = input.read_u8()?;
        if reserved != 0 {
            warn!("reserved byte in MP_REACH_NLRI is not zero: {}", reserved);
        }
    }

    let prefixes = parse_nlri_list(input, &afi)?;

    let nlri = Nlri {
        afi,
        safi,
        next_hop,
        prefixes,
    };
    Ok(match reachable {
        true => AttributeValue::MpReachNlri(nlri),
        false => AttributeValue::MpUnreachNlri(nlri),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_mp_reach() {
        let mut data = vec![
            0x00, 0x02, // AFI: IPv6
            0x01, // SAFI: unicast
            0x10, // next hop length: 16
        ];
        let mut next_hop = [0u8; 16];
        next_hop[0] = 0x20;
        next_hop[1] = 0x01;
        data.extend_from_slice(&next_hop);
        data.push(0); // reserved
        data.extend_from_slice(&[32, 0x20, 0x01, 0x0d, 0xb8]); // 2001:db8::/32

        match parse_nlri(Bytes::from(data), true).unwrap() {
            AttributeValue::MpReachNlri(nlri) => {
                assert_eq!(nlri.afi, Afi::Ipv6);
                assert_eq!(nlri.safi, Safi::Unicast);
                assert_eq!(
                    nlri.next_hop,
                    Some(NextHopAddress::Ipv6("2001::".parse().unwrap()))
                );
                assert_eq!(
                    nlri.prefixes,
                    vec![NetworkPrefix::from_str("2001:db8::/32").unwrap()]
                );
            }
            v => panic!("unexpected attribute: {:?}", v),
        }
    }

    #[test]
    fn test_parse_mp_unreach() {
        let data = Bytes::from_static(&[
            0x00, 0x02, // AFI: IPv6
            0x01, // SAFI: unicast
            32, 0x20, 0x01, 0x0d, 0xb8, // 2001:db8::/32
        ]);
        match parse_nlri(data, false).unwrap() {
            AttributeValue::MpUnreachNlri(nlri) => {
                assert_eq!(nlri.next_hop, None);
                assert_eq!(nlri.prefixes.len(), 1);
            }
            v => panic!("unexpected attribute: {:?}", v),
        }
    }

    #[test]
    fn test_parse_mp_reach_truncated_next_hop() {
        let data = Bytes::from_static(&[0x00, 0x02, 0x01, 0x10, 0x20, 0x01]);
        assert!(parse_nlri(data, true).is_err());
    }
}
