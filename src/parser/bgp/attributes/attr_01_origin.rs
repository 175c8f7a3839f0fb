use crate::error::ParserError;
use crate::models::*;
use crate::parser::ReadUtils;
use bytes::Bytes;

pub fn parse_origin(mut input: Bytes) -> Result<AttributeValue, ParserError> {
    let origin = Origin::try_from(input.read_u8()?)?;
    Ok(AttributeValue::Origin(origin))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origin() {
        assert_eq!(
            parse_origin(Bytes::from_static(&[0u8])).unwrap(),
            AttributeValue::Origin(Origin::IGP)
        );
        assert_eq!(
            parse_origin(Bytes::from_static(&[1u8])).unwrap(),
            AttributeValue::Origin(Origin::EGP)
        );
        assert_eq!(
            parse_origin(Bytes::from_static(&[2u8])).unwrap(),
            AttributeValue::Origin(Origin::INCOMPLETE)
        );
        assert!(matches!(
            parse_origin(Bytes::from_static(&[3u8])).unwrap_err(),
            ParserError::UnrecognizedEnumVariant { .. }
        ));
    }
}
