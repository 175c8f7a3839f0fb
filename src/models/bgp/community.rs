use std::fmt::{Display, Formatter};

/// RFC 1997 community: a 32-bit value, conventionally split asn:value.
///
/// The three well-known values from RFC 1997 get their own variants.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Community {
    NoExport,
    NoAdvertise,
    NoExportSubConfed,
    Custom(u16, u16),
}

impl Community {
    pub fn new(value: u32) -> Community {
        match value {
            0xFFFFFF01 => Community::NoExport,
            0xFFFFFF02 => Community::NoAdvertise,
            0xFFFFFF03 => Community::NoExportSubConfed,
            v => Community::Custom((v >> 16) as u16, (v & 0xFFFF) as u16),
        }
    }

    pub fn to_u32(self) -> u32 {
        match self {
            Community::NoExport => 0xFFFFFF01,
            Community::NoAdvertise => 0xFFFFFF02,
            Community::NoExportSubConfed => 0xFFFFFF03,
            Community::Custom(asn, value) => ((asn as u32) << 16) | value as u32,
        }
    }
}

impl Display for Community {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Community::NoExport => write!(f, "no-export"),
            Community::NoAdvertise => write!(f, "no-advertise"),
            Community::NoExportSubConfed => write!(f, "no-export-sub-confed"),
            Community::Custom(asn, value) => write!(f, "{}:{}", asn, value),
        }
    }
}

/// RFC 4360 extended community, kept as the raw 8 wire octets: a type and
/// subtype octet followed by a 6-octet value whose layout depends on them.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtendedCommunity {
    pub ec_type: u8,
    pub ec_subtype: u8,
    pub value: [u8; 6],
}

impl ExtendedCommunity {
    pub fn new(raw: u64) -> ExtendedCommunity {
        let bytes = raw.to_be_bytes();
        let mut value = [0u8; 6];
        value.copy_from_slice(&bytes[2..]);
        ExtendedCommunity {
            ec_type: bytes[0],
            ec_subtype: bytes[1],
            value,
        }
    }

    pub fn to_u64(self) -> u64 {
        let mut bytes = [0u8; 8];
        bytes[0] = self.ec_type;
        bytes[1] = self.ec_subtype;
        bytes[2..].copy_from_slice(&self.value);
        u64::from_be_bytes(bytes)
    }

    pub const fn is_transitive(&self) -> bool {
        self.ec_type & 0b0100_0000 == 0
    }
}

impl Display for ExtendedCommunity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ecv4:{:02x}{:02x}:{}",
            self.ec_type,
            self.ec_subtype,
            hex::encode(self.value)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_community() {
        assert_eq!(Community::new(0xFFFFFF01), Community::NoExport);
        assert_eq!(Community::new(0x00FB_0001), Community::Custom(251, 1));
        assert_eq!(Community::Custom(251, 1).to_u32(), 0x00FB_0001);
        assert_eq!(Community::Custom(251, 1).to_string(), "251:1");
    }

    #[test]
    fn test_extended_community() {
        let ec = ExtendedCommunity::new(0x0002_FDE8_0000_0064);
        assert_eq!(ec.ec_type, 0x00);
        assert_eq!(ec.ec_subtype, 0x02);
        assert!(ec.is_transitive());
        assert_eq!(ec.to_u64(), 0x0002_FDE8_0000_0064);
    }
}
