use crate::models::*;
use bytes::{Buf, Bytes};
use log::warn;

use crate::error::ParserError;
use crate::parser::bgp::attributes::parse_attributes;
use crate::parser::{parse_nlri_list, ReadUtils};

/// Parse and validate the RFC 4271 common header.
///
/// Format:
/// ```text
/// 0                   1                   2                   3
/// 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                                                               |
/// +                                                               +
/// |                                                               |
/// +                                                               +
/// |                           Marker                              |
/// +                                                               +
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |          Length               |      Type     |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// Consumes exactly 19 bytes, leaving the cursor at the message body. The
/// declared length must lie in [19, 4096] and must not exceed the supplied
/// buffer; the length fields inside a message are peer-controlled and are
/// never trusted over the buffer bounds.
pub fn parse_bgp_header(data: &mut Bytes) -> Result<BgpHeader, ParserError> {
    let total_size = data.len();
    data.has_n_remaining(19)?;
    data.advance(16);
    /*
    This 2-octet unsigned integer indicates the total length of the
    message, including the header in octets.  Thus, it allows one
    to locate the (Marker field of the) next message in the TCP
    stream.  The value of the Length field MUST always be at least
    19 and no greater than 4096, and MAY be further constrained,
    depending on the message type.
    */
    let length = data.get_u16();
    if !(19..=4096).contains(&length) {
        return Err(ParserError::ParseError(format!(
            "invalid BGP message length {}",
            length
        )));
    }
    if length as usize > total_size {
        return Err(ParserError::TruncatedMsg(format!(
            "BGP message length {} exceeds the {} bytes supplied",
            length, total_size
        )));
    }

    let msg_type = BgpMessageType::try_from(data.get_u8())?;
    Ok(BgpHeader { length, msg_type })
}

/// Parse a BGP OPEN message body, capabilities included.
pub fn parse_bgp_open_message(input: &mut Bytes) -> Result<BgpOpenMessage, ParserError> {
    input.has_n_remaining(10)?;
    let version = input.get_u8();
    let asn = Asn::new_16bit(input.get_u16());
    let hold_time = input.get_u16();
    let bgp_id = input.read_ipv4_address()?;

    let opt_params_len = input.get_u8();
    if input.remaining() != opt_params_len as usize {
        warn!(
            "BGP open message optional parameter length {} does not match the remaining {} bytes",
            opt_params_len,
            input.remaining()
        );
    }
    input.has_n_remaining(opt_params_len as usize)?;
    let mut params_data = input.split_to(opt_params_len as usize);

    // https://tools.ietf.org/html/rfc3392
    // https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-11
    let mut params: Vec<OptParam> = vec![];
    while params_data.remaining() >= 2 {
        let param_type = params_data.get_u8();
        let param_len = params_data.get_u8();
        params_data.has_n_remaining(param_len as usize)?;
        let mut param_data = params_data.split_to(param_len as usize);

        let param_values = match param_type {
            2 => {
                // one parameter may carry several capability triplets (RFC 5492)
                let mut caps = vec![];
                while param_data.remaining() >= 2 {
                    let code = BgpCapabilityType::from(param_data.get_u8());
                    let len = param_data.get_u8();
                    let value = param_data.read_n_bytes(len as usize)?;
                    if code.is_deprecated() || code.is_reserved() {
                        warn!("peer advertised deprecated or reserved capability code {:?}", code);
                    }
                    caps.push(Capability { code, value });
                }
                caps.into_iter().map(ParamValue::Capability).collect()
            }
            _ => {
                // unsupported param, keep as raw bytes
                vec![ParamValue::Raw(param_data.read_n_bytes(param_len as usize)?)]
            }
        };
        for param_value in param_values {
            params.push(OptParam {
                param_type,
                param_len: param_len as u16,
                param_value,
            });
        }
    }

    Ok(BgpOpenMessage {
        version,
        asn,
        hold_time,
        bgp_id,
        opt_params: params,
    })
}

/// Parse a BGP NOTIFICATION message body.
///
/// The body carries the error code and subcode received from the peer plus
/// optional diagnostic data. Anything shorter than the two fixed octets is
/// a truncated message.
pub fn parse_bgp_notification_message(
    mut input: Bytes,
) -> Result<BgpNotificationMessage, ParserError> {
    if input.remaining() < 2 {
        return Err(ParserError::TruncatedMsg(format!(
            "NOTIFICATION body of {} bytes cannot hold error code and subcode",
            input.remaining()
        )));
    }
    let error_code = input.get_u8();
    let error_subcode = input.get_u8();
    let data = input.read_n_bytes(input.remaining())?;
    Ok(BgpNotificationMessage::new(error_code, error_subcode, data))
}

/// Parse a BGP UPDATE message body.
///
/// RFC: <https://tools.ietf.org/html/rfc4271#section-4.3>
///
/// Sequence: 2-byte withdrawn-routes length and list, 2-byte attribute
/// length and attribute section, then announced prefixes until the end of
/// the body. `asn_len` is the session-negotiated ASN width and decides how
/// AS_PATH and AGGREGATOR payloads are segmented.
pub fn parse_bgp_update_message(
    mut input: Bytes,
    asn_len: AsnLength,
) -> Result<BgpUpdateMessage, ParserError> {
    // AFI for routes outside of MP attributes is IPv4 ONLY.
    let afi = Afi::Ipv4;

    // parse withdrawn prefixes nlri
    let withdrawn_bytes_length = input.read_u16()? as usize;
    input.has_n_remaining(withdrawn_bytes_length)?;
    let withdrawn_bytes = input.split_to(withdrawn_bytes_length);
    let withdrawn_prefixes = parse_nlri_list(withdrawn_bytes, &afi)?;

    // parse attributes
    let attribute_length = input.read_u16()? as usize;
    input.has_n_remaining(attribute_length)?;
    let attr_data = input.split_to(attribute_length);
    let (attributes, path_hash) = parse_attributes(attr_data, asn_len)?;

    // the remaining bytes are announced prefixes
    let announced_prefixes = parse_nlri_list(input, &afi)?;

    Ok(BgpUpdateMessage {
        withdrawn_prefixes,
        attributes,
        announced_prefixes,
        path_hash,
    })
}
