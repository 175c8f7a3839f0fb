use crate::error::ParserError;
use crate::models::*;
use crate::parser::ReadUtils;
use bytes::Bytes;

pub fn parse_med(mut input: Bytes) -> Result<AttributeValue, ParserError> {
    Ok(AttributeValue::MultiExitDiscriminator(input.read_u32()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_med() {
        assert_eq!(
            parse_med(Bytes::from_static(&[0, 0, 0, 100])).unwrap(),
            AttributeValue::MultiExitDiscriminator(100)
        );
        assert!(parse_med(Bytes::from_static(&[0, 0])).is_err());
    }
}
