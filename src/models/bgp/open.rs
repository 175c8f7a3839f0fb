use crate::models::*;
use std::net::Ipv4Addr;

/// A decoded BGP OPEN message (RFC 4271 section 4.2).
#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BgpOpenMessage {
    pub version: u8,
    /// The ASN field of an OPEN is always 2 octets; 4-octet speakers put
    /// AS_TRANS (23456) here and their real ASN in capability 65.
    pub asn: Asn,
    pub hold_time: u16,
    pub bgp_id: Ipv4Addr,
    pub opt_params: Vec<OptParam>,
}

impl BgpOpenMessage {
    /// Iterate over all capabilities advertised in the optional parameters.
    pub fn capabilities(&self) -> impl Iterator<Item = &Capability> {
        self.opt_params.iter().filter_map(|p| match &p.param_value {
            ParamValue::Capability(cap) => Some(cap),
            ParamValue::Raw(_) => None,
        })
    }

    pub fn has_capability(&self, code: BgpCapabilityType) -> bool {
        self.capabilities().any(|cap| cap.code == code)
    }

    /// RFC 4893: whether this speaker advertised 4-octet ASN support.
    pub fn supports_four_octet_asn(&self) -> bool {
        self.has_capability(BgpCapabilityType::SUPPORT_FOR_4_OCTET_AS_NUMBER_CAPABILITY)
    }

    /// The speaker's real ASN: the 4-octet value from capability 65 when
    /// present, the header ASN field otherwise.
    pub fn speaker_asn(&self) -> Asn {
        self.capabilities()
            .find(|cap| {
                cap.code == BgpCapabilityType::SUPPORT_FOR_4_OCTET_AS_NUMBER_CAPABILITY
                    && cap.value.len() == 4
            })
            .map(|cap| {
                let mut buf = [0u8; 4];
                buf.copy_from_slice(&cap.value);
                Asn::new_32bit(u32::from_be_bytes(buf))
            })
            .unwrap_or(self.asn)
    }
}

/// One optional parameter of an OPEN message (RFC 3392).
#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptParam {
    pub param_type: u8,
    pub param_len: u16,
    pub param_value: ParamValue,
}

#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParamValue {
    Capability(Capability),
    /// unsupported parameter types are kept as raw bytes
    Raw(Vec<u8>),
}

/// A single capability announcement.
#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capability {
    pub code: BgpCapabilityType,
    pub value: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_with_caps(caps: Vec<Capability>) -> BgpOpenMessage {
        BgpOpenMessage {
            version: 4,
            asn: Asn::new_16bit(23456),
            hold_time: 180,
            bgp_id: Ipv4Addr::new(192, 0, 2, 1),
            opt_params: caps
                .into_iter()
                .map(|cap| OptParam {
                    param_type: 2,
                    param_len: cap.value.len() as u16 + 2,
                    param_value: ParamValue::Capability(cap),
                })
                .collect(),
        }
    }

    #[test]
    fn test_speaker_asn_from_capability() {
        let open = open_with_caps(vec![Capability {
            code: BgpCapabilityType::SUPPORT_FOR_4_OCTET_AS_NUMBER_CAPABILITY,
            value: 396465u32.to_be_bytes().to_vec(),
        }]);
        assert!(open.supports_four_octet_asn());
        assert_eq!(open.speaker_asn(), Asn::new_32bit(396465));
    }

    #[test]
    fn test_speaker_asn_fallback() {
        let open = open_with_caps(vec![]);
        assert!(!open.supports_four_octet_asn());
        assert_eq!(open.speaker_asn(), Asn::new_16bit(23456));
    }
}
