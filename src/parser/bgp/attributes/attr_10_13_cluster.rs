use crate::error::ParserError;
use crate::models::*;
use crate::parser::ReadUtils;
use bytes::{Buf, Bytes};

pub fn parse_clusters(mut input: Bytes) -> Result<AttributeValue, ParserError> {
    let mut clusters = Vec::with_capacity(input.remaining() / 4);
    while input.remaining() > 0 {
        clusters.push(input.read_ipv4_address()?);
    }
    Ok(AttributeValue::Clusters(clusters))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_parse_clusters() {
        let data = Bytes::from_static(&[10, 0, 0, 1, 10, 0, 0, 2]);
        assert_eq!(
            parse_clusters(data).unwrap(),
            AttributeValue::Clusters(vec![Ipv4Addr::new(10, 0, 0, 1), Ipv4Addr::new(10, 0, 0, 2)])
        );
    }
}
