use crate::error::ParserError;
use crate::models::*;
use crate::parser::ReadUtils;
use bytes::{Buf, Bytes};

pub fn parse_next_hop(mut input: Bytes) -> Result<AttributeValue, ParserError> {
    match input.remaining() {
        4 => input.read_ipv4_address().map(|x| AttributeValue::NextHop(x.into())),
        16 => input.read_ipv6_address().map(|x| AttributeValue::NextHop(x.into())),
        v => Err(ParserError::ParseError(format!(
            "Invalid next hop length found: {}",
            v
        ))),
    }
}

/// Parse the variable-length next hop inside an MP_REACH_NLRI attribute.
///
/// 32 octets means a global IPv6 address followed by its link-local
/// counterpart, per RFC 2545.
pub fn parse_mp_next_hop(mut input: Bytes) -> Result<Option<NextHopAddress>, ParserError> {
    let output = match input.remaining() {
        0 => None,
        4 => Some(input.read_ipv4_address().map(NextHopAddress::Ipv4)?),
        16 => Some(input.read_ipv6_address().map(NextHopAddress::Ipv6)?),
        32 => Some(NextHopAddress::Ipv6LinkLocal(
            input.read_ipv6_address()?,
            input.read_ipv6_address()?,
        )),
        v => {
            return Err(ParserError::ParseError(format!(
                "Invalid next hop length found: {}",
                v
            )));
        }
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::IpAddr;
    use std::str::FromStr;

    #[test]
    fn test_parse_next_hop() {
        let ipv4 = Bytes::from_static(&[192, 0, 2, 1]);
        assert_eq!(
            parse_next_hop(ipv4).unwrap(),
            AttributeValue::NextHop(IpAddr::from_str("192.0.2.1").unwrap())
        );

        let bad = Bytes::from_static(&[192, 0, 2]);
        assert!(parse_next_hop(bad).is_err());
    }

    #[test]
    fn test_parse_mp_next_hop_link_local() {
        let mut data = vec![0u8; 32];
        data[0] = 0x20;
        data[1] = 0x01;
        data[16] = 0xfe;
        data[17] = 0x80;
        match parse_mp_next_hop(Bytes::from(data)).unwrap() {
            Some(NextHopAddress::Ipv6LinkLocal(global, link_local)) => {
                assert_eq!(global.to_string(), "2001::");
                assert_eq!(link_local.to_string(), "fe80::");
            }
            v => panic!("unexpected next hop: {:?}", v),
        }
    }

    #[test]
    fn test_parse_mp_next_hop_empty() {
        assert_eq!(parse_mp_next_hop(Bytes::new()).unwrap(), None);
    }
}
