use bytes::{BufMut, Bytes, BytesMut};
use std::fmt::{Display, Formatter};

/// AS number length: 16 or 32 bits.
///
/// RFC 4893 peers that both advertise the 4-octet-ASN capability encode every
/// ASN on the wire in 4 octets; everyone else uses the classic 2 octets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AsnLength {
    #[default]
    Bits16,
    Bits32,
}

impl AsnLength {
    /// Octets one ASN occupies on the wire at this width.
    pub const fn octets(&self) -> usize {
        match self {
            AsnLength::Bits16 => 2,
            AsnLength::Bits32 => 4,
        }
    }
}

/// ASN -- Autonomous System Number
#[derive(Debug, Clone, Copy, Eq, Hash)]
pub struct Asn {
    asn: u32,
    len: AsnLength,
}

impl Asn {
    pub const fn new_16bit(asn: u16) -> Asn {
        Asn {
            asn: asn as u32,
            len: AsnLength::Bits16,
        }
    }

    pub const fn new_32bit(asn: u32) -> Asn {
        Asn {
            asn,
            len: AsnLength::Bits32,
        }
    }

    pub const fn to_u32(self) -> u32 {
        self.asn
    }

    /// Checks if the ASN is reserved for private use.
    ///
    /// <https://datatracker.ietf.org/doc/rfc6996/>
    pub const fn is_private(&self) -> bool {
        matches!(self.asn, 64512..=65534 | 4200000000..=4294967294)
    }

    pub fn encode(&self) -> Bytes {
        let mut bytes = BytesMut::new();
        match self.len {
            AsnLength::Bits16 => bytes.put_u16(self.asn as u16),
            AsnLength::Bits32 => bytes.put_u32(self.asn),
        }
        bytes.freeze()
    }
}

impl PartialEq for Asn {
    fn eq(&self, other: &Self) -> bool {
        self.asn == other.asn
    }
}

impl PartialEq<u32> for Asn {
    fn eq(&self, other: &u32) -> bool {
        self.asn == *other
    }
}

impl From<u32> for Asn {
    fn from(v: u32) -> Self {
        Asn::new_32bit(v)
    }
}

impl From<Asn> for u32 {
    fn from(value: Asn) -> Self {
        value.asn
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Asn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.asn)
    }
}

impl Display for Asn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.asn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asn_equality() {
        // width is a wire-encoding detail, not part of the identity
        assert_eq!(Asn::new_16bit(123), Asn::new_32bit(123));
        assert_eq!(Asn::new_32bit(123), 123u32);
    }

    #[test]
    fn test_asn_encode() {
        assert_eq!(Asn::new_16bit(123).encode().as_ref(), &[0, 123]);
        assert_eq!(Asn::new_32bit(123).encode().as_ref(), &[0, 0, 0, 123]);
    }

    #[test]
    fn test_private_asn() {
        assert!(Asn::new_16bit(64512).is_private());
        assert!(!Asn::new_32bit(13335).is_private());
    }
}
