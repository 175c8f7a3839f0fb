use crate::error::ParserError;
use crate::models::*;
use crate::parser::ReadUtils;
use bytes::Bytes;

pub fn parse_originator_id(mut input: Bytes) -> Result<AttributeValue, ParserError> {
    let addr = input.read_ipv4_address()?;
    Ok(AttributeValue::OriginatorId(addr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_parse_originator_id() {
        assert_eq!(
            parse_originator_id(Bytes::from_static(&[192, 0, 2, 5])).unwrap(),
            AttributeValue::OriginatorId(Ipv4Addr::new(192, 0, 2, 5))
        );
    }
}
