use crate::error::ParserError;
use crate::models::*;
use crate::parser::ReadUtils;
use bytes::{Buf, Bytes};

pub fn parse_extended_community(mut input: Bytes) -> Result<AttributeValue, ParserError> {
    let mut communities = Vec::with_capacity(input.remaining() / 8);
    while input.remaining() > 0 {
        communities.push(ExtendedCommunity::new(input.read_u64()?));
    }
    Ok(AttributeValue::ExtendedCommunities(communities))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extended_communities() {
        // route target 65000:100
        let data = Bytes::from_static(&[0x00, 0x02, 0xfd, 0xe8, 0x00, 0x00, 0x00, 0x64]);
        match parse_extended_community(data).unwrap() {
            AttributeValue::ExtendedCommunities(communities) => {
                assert_eq!(communities.len(), 1);
                assert_eq!(communities[0].to_u64(), 0x0002_FDE8_0000_0064);
                assert!(communities[0].is_transitive());
            }
            v => panic!("unexpected attribute: {:?}", v),
        }
    }

    #[test]
    fn test_parse_extended_communities_bad_tiling() {
        let data = Bytes::from_static(&[0x00, 0x02, 0xfd]);
        assert!(parse_extended_community(data).is_err());
    }
}
