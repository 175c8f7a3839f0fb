use bytes::{BufMut, Bytes, BytesMut};
use ipnet::IpNet;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// A network prefix decoded from an NLRI section.
///
/// Only the significant bytes of the address are present on the wire; the
/// stored [IpNet] is always zero-extended to the full address width.
#[derive(PartialEq, Eq, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NetworkPrefix {
    pub prefix: IpNet,
}

impl NetworkPrefix {
    pub fn new(prefix: IpNet) -> NetworkPrefix {
        NetworkPrefix { prefix }
    }

    /// Encodes the prefix with the NLRI length-prefix scheme: a 1-byte bit
    /// length followed by `ceil(len/8)` address bytes.
    ///
    /// ```rust
    /// use std::str::FromStr;
    /// use bgp_session_parser::models::NetworkPrefix;
    ///
    /// let prefix = NetworkPrefix::from_str("192.168.0.0/24").unwrap();
    /// assert_eq!(prefix.encode().as_ref(), &[24, 192, 168, 0]);
    /// ```
    pub fn encode(&self) -> Bytes {
        let mut bytes = BytesMut::new();
        let bit_len = self.prefix.prefix_len();
        let byte_len = bit_len.div_ceil(8) as usize;
        bytes.put_u8(bit_len);
        match self.prefix {
            IpNet::V4(prefix) => {
                bytes.put_slice(&prefix.addr().octets()[0..byte_len]);
            }
            IpNet::V6(prefix) => {
                bytes.put_slice(&prefix.addr().octets()[0..byte_len]);
            }
        };
        bytes.freeze()
    }
}

impl FromStr for NetworkPrefix {
    type Err = ipnet::AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(NetworkPrefix {
            prefix: IpNet::from_str(s)?,
        })
    }
}

impl From<IpNet> for NetworkPrefix {
    fn from(prefix: IpNet) -> Self {
        NetworkPrefix { prefix }
    }
}

impl Debug for NetworkPrefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix)
    }
}

impl Display for NetworkPrefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix)
    }
}
