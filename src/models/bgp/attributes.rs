use crate::models::*;
use bitflags::bitflags;
use num_enum::{FromPrimitive, IntoPrimitive, TryFromPrimitive};
use std::fmt::{Display, Formatter};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

bitflags! {
    /// The attribute flags octet preceding every path attribute TLV.
    ///
    /// The fourth high-order bit (EXTENDED) selects a 2-octet attribute
    /// length instead of the default 1 octet.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct AttrFlags: u8 {
        const OPTIONAL   = 0b1000_0000;
        const TRANSITIVE = 0b0100_0000;
        const PARTIAL    = 0b0010_0000;
        const EXTENDED   = 0b0001_0000;
    }
}

/// Attribute types.
///
/// All attribute type codes this crate decodes into typed values. Any other
/// code maps to the `Unknown` catch-all and is carried opaquely.
/// Full list at IANA:
/// <https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-2>
#[allow(non_camel_case_types)]
#[derive(Debug, FromPrimitive, IntoPrimitive, PartialEq, Eq, Hash, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AttrType {
    ORIGIN = 1,
    AS_PATH = 2,
    NEXT_HOP = 3,
    MULTI_EXIT_DISCRIMINATOR = 4,
    LOCAL_PREFERENCE = 5,
    ATOMIC_AGGREGATE = 6,
    AGGREGATOR = 7,
    COMMUNITIES = 8,
    /// <https://tools.ietf.org/html/rfc4456>
    ORIGINATOR_ID = 9,
    CLUSTER_LIST = 10,
    /// <https://tools.ietf.org/html/rfc4760>
    MP_REACHABLE_NLRI = 14,
    MP_UNREACHABLE_NLRI = 15,
    /// <https://datatracker.ietf.org/doc/html/rfc4360>
    EXTENDED_COMMUNITIES = 16,
    AS4_PATH = 17,
    AS4_AGGREGATOR = 18,

    /// Catch-all for any unassigned, deprecated, or unsupported code
    #[num_enum(catch_all)]
    Unknown(u8),
}

pub fn get_deprecated_attr_type(attr_type: u8) -> Option<&'static str> {
    match attr_type {
        11 => Some("DPA"),
        12 => Some("ADVERTISER"),
        13 => Some("RCID_PATH"),
        19 => Some("SAFI Specific Attribute"),
        20 => Some("Connector Attribute"),
        21 => Some("AS_PATHLIMIT"),
        28 => Some("BGP Entropy Label Capability"),
        30 | 31 | 129 | 241 | 242 | 243 => Some("RFC8093"),
        _ => None,
    }
}

/// ORIGIN attribute values.
#[derive(Debug, TryFromPrimitive, IntoPrimitive, PartialEq, Eq, Hash, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Origin {
    IGP = 0,
    EGP = 1,
    INCOMPLETE = 2,
}

impl Display for Origin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Origin::IGP => "IGP",
            Origin::EGP => "EGP",
            Origin::INCOMPLETE => "INCOMPLETE",
        };
        write!(f, "{}", s)
    }
}

/// MP_REACH_NLRI / MP_UNREACH_NLRI contents: an address-family tag and the
/// nested prefix list, plus the next hop for the reachable flavor.
#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nlri {
    pub afi: Afi,
    pub safi: Safi,
    pub next_hop: Option<NextHopAddress>,
    pub prefixes: Vec<NetworkPrefix>,
}

/// The next hop carried in an MP_REACH_NLRI attribute, sized 4, 16 or 32
/// octets on the wire.
#[derive(Debug, PartialEq, Copy, Clone, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NextHopAddress {
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
    Ipv6LinkLocal(Ipv6Addr, Ipv6Addr),
}

impl Display for NextHopAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NextHopAddress::Ipv4(addr) => write!(f, "{}", addr),
            NextHopAddress::Ipv6(addr) => write!(f, "{}", addr),
            NextHopAddress::Ipv6LinkLocal(addr, _) => write!(f, "{}", addr),
        }
    }
}

/// An attribute preserved as raw bytes, either unknown or deprecated.
#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttrRaw {
    pub attr_type: u8,
    pub bytes: Vec<u8>,
}

/// BGP Attribute struct with attribute value and flag
#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    pub value: AttributeValue,
    pub flag: AttrFlags,
}

/// The `AttributeValue` enum represents different kinds of Attribute values.
#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeValue {
    Origin(Origin),
    AsPath { path: AsPath, is_as4: bool },
    NextHop(IpAddr),
    MultiExitDiscriminator(u32),
    LocalPreference(u32),
    AtomicAggregate,
    Aggregator { asn: Asn, id: Ipv4Addr, is_as4: bool },
    Communities(Vec<Community>),
    ExtendedCommunities(Vec<ExtendedCommunity>),
    OriginatorId(Ipv4Addr),
    Clusters(Vec<Ipv4Addr>),
    MpReachNlri(Nlri),
    MpUnreachNlri(Nlri),
    Deprecated(AttrRaw),
    Unknown(AttrRaw),
}

impl AttributeValue {
    /// The attribute type code this value is keyed by.
    pub fn attr_type(&self) -> AttrType {
        match self {
            AttributeValue::Origin(_) => AttrType::ORIGIN,
            AttributeValue::AsPath { is_as4: false, .. } => AttrType::AS_PATH,
            AttributeValue::AsPath { is_as4: true, .. } => AttrType::AS4_PATH,
            AttributeValue::NextHop(_) => AttrType::NEXT_HOP,
            AttributeValue::MultiExitDiscriminator(_) => AttrType::MULTI_EXIT_DISCRIMINATOR,
            AttributeValue::LocalPreference(_) => AttrType::LOCAL_PREFERENCE,
            AttributeValue::AtomicAggregate => AttrType::ATOMIC_AGGREGATE,
            AttributeValue::Aggregator { is_as4: false, .. } => AttrType::AGGREGATOR,
            AttributeValue::Aggregator { is_as4: true, .. } => AttrType::AS4_AGGREGATOR,
            AttributeValue::Communities(_) => AttrType::COMMUNITIES,
            AttributeValue::ExtendedCommunities(_) => AttrType::EXTENDED_COMMUNITIES,
            AttributeValue::OriginatorId(_) => AttrType::ORIGINATOR_ID,
            AttributeValue::Clusters(_) => AttrType::CLUSTER_LIST,
            AttributeValue::MpReachNlri(_) => AttrType::MP_REACHABLE_NLRI,
            AttributeValue::MpUnreachNlri(_) => AttrType::MP_UNREACHABLE_NLRI,
            AttributeValue::Deprecated(raw) => AttrType::Unknown(raw.attr_type),
            AttributeValue::Unknown(raw) => AttrType::Unknown(raw.attr_type),
        }
    }
}

/// The decoded path attribute collection of one UPDATE message.
///
/// Attribute type codes are unique within a collection (a duplicate on the
/// wire is rejected during parsing) and wire order is preserved.
#[derive(Debug, Default, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    inner: Vec<Attribute>,
}

impl Attributes {
    pub fn get(&self, attr_type: AttrType) -> Option<&AttributeValue> {
        self.inner
            .iter()
            .map(|a| &a.value)
            .find(|v| v.attr_type() == attr_type)
    }

    pub fn has_attr(&self, attr_type: AttrType) -> bool {
        self.get(attr_type).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl From<Vec<Attribute>> for Attributes {
    fn from(inner: Vec<Attribute>) -> Self {
        Attributes { inner }
    }
}

impl IntoIterator for Attributes {
    type Item = Attribute;
    type IntoIter = std::vec::IntoIter<Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

/// 16-byte digest identifying one exact path attribute set.
///
/// Computed once per UPDATE over the canonical encoding of the attribute
/// collection; every prefix announced by that UPDATE shares this hash.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathHash(pub [u8; 16]);

impl Display for PathHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_type_round_trip() {
        assert_eq!(AttrType::from(2u8), AttrType::AS_PATH);
        assert_eq!(AttrType::from(99u8), AttrType::Unknown(99));
        assert_eq!(u8::from(AttrType::MP_REACHABLE_NLRI), 14);
        assert_eq!(u8::from(AttrType::Unknown(99)), 99);
    }

    #[test]
    fn test_attributes_lookup() {
        let attrs = Attributes::from(vec![
            Attribute {
                value: AttributeValue::Origin(Origin::IGP),
                flag: AttrFlags::TRANSITIVE,
            },
            Attribute {
                value: AttributeValue::LocalPreference(100),
                flag: AttrFlags::TRANSITIVE,
            },
        ]);
        assert_eq!(
            attrs.get(AttrType::ORIGIN),
            Some(&AttributeValue::Origin(Origin::IGP))
        );
        assert!(!attrs.has_attr(AttrType::NEXT_HOP));
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn test_path_hash_display() {
        let hash = PathHash([0xab; 16]);
        assert_eq!(hash.to_string(), "ab".repeat(16));
    }
}
