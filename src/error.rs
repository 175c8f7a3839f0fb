/*!
error module defines the error types used in bgp-session-parser.
*/
use num_enum::{TryFromPrimitive, TryFromPrimitiveError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParserError {
    /// This error represents a [num_enum::TryFromPrimitiveError] error for any of a number of
    /// different types, such as the BGP message type or an address family code.
    #[error("unrecognized value {value} for {type_name}")]
    UnrecognizedEnumVariant { type_name: &'static str, value: u64 },
    /// A structure declared a length that cannot fit in the bytes supplied for it.
    #[error("message truncated: {0}")]
    TruncatedMsg(String),
    /// An internally inconsistent structure: bad lengths, bad tiling, duplicate
    /// attribute codes, invalid field values.
    #[error("{0}")]
    ParseError(String),
    /// A read ran into the end of the supplied buffer.
    #[error("not enough bytes to read")]
    IoNotEnoughBytes(),
    /// This error represents a [ipnet::PrefixLenError] error. It occurs if an address mask is
    /// larger than the length of the address it is being applied to.
    #[error("invalid network prefix mask")]
    InvalidPrefixLength(#[from] ipnet::PrefixLenError),
}

impl<T> From<TryFromPrimitiveError<T>> for ParserError
where
    T: TryFromPrimitive,
    T::Primitive: Into<u64>,
{
    #[inline]
    fn from(value: TryFromPrimitiveError<T>) -> Self {
        ParserError::UnrecognizedEnumVariant {
            type_name: T::NAME,
            value: value.number.into(),
        }
    }
}
