use crate::error::ParserError;
use crate::models::*;
use crate::parser::ReadUtils;
use bytes::{Buf, Bytes};

const AS_PATH_AS_SET: u8 = 1;
const AS_PATH_AS_SEQUENCE: u8 = 2;
// https://datatracker.ietf.org/doc/html/rfc5065
const AS_PATH_CONFED_SEQUENCE: u8 = 3;
const AS_PATH_CONFED_SET: u8 = 4;

/// Parse an AS_PATH or AS4_PATH attribute.
///
/// `asn_len` is the negotiated session width for AS_PATH; AS4_PATH callers
/// pass [AsnLength::Bits32] unconditionally.
pub fn parse_as_path(mut input: Bytes, asn_len: AsnLength) -> Result<AsPath, ParserError> {
    let mut output = AsPath::default();
    while input.remaining() > 0 {
        let segment = parse_as_path_segment(&mut input, asn_len)?;
        output.add_segment(segment);
    }
    Ok(output)
}

fn parse_as_path_segment(
    input: &mut Bytes,
    asn_len: AsnLength,
) -> Result<AsPathSegment, ParserError> {
    let segment_type = input.read_u8()?;
    let count = input.read_u8()? as usize;
    let path = input.read_asns(asn_len, count)?;
    match segment_type {
        AS_PATH_AS_SET => Ok(AsPathSegment::AsSet(path)),
        AS_PATH_AS_SEQUENCE => Ok(AsPathSegment::AsSequence(path)),
        AS_PATH_CONFED_SEQUENCE => Ok(AsPathSegment::ConfedSequence(path)),
        AS_PATH_CONFED_SET => Ok(AsPathSegment::ConfedSet(path)),
        _ => Err(ParserError::ParseError(format!(
            "Invalid AS path segment type: {}",
            segment_type
        ))),
    }
}
