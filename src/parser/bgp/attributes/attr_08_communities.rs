use crate::error::ParserError;
use crate::models::*;
use crate::parser::ReadUtils;
use bytes::{Buf, Bytes};

pub fn parse_regular_communities(mut input: Bytes) -> Result<AttributeValue, ParserError> {
    let mut communities = Vec::with_capacity(input.remaining() / 4);
    while input.remaining() > 0 {
        communities.push(Community::new(input.read_u32()?));
    }
    Ok(AttributeValue::Communities(communities))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_communities() {
        let data = Bytes::from_static(&[
            0x00, 0xfb, 0x00, 0x01, // 251:1
            0xff, 0xff, 0xff, 0x01, // no-export
        ]);
        assert_eq!(
            parse_regular_communities(data).unwrap(),
            AttributeValue::Communities(vec![Community::Custom(251, 1), Community::NoExport])
        );
    }

    #[test]
    fn test_parse_communities_bad_tiling() {
        let data = Bytes::from_static(&[0x00, 0xfb, 0x00]);
        assert!(parse_regular_communities(data).is_err());
    }
}
