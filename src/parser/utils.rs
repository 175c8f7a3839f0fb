/*!
Provides IO utility functions for reading bytes of different lengths and
converting them into the corresponding structs.

All reads go through [ReadUtils], which checks the remaining length of the
underlying [Bytes] before every access. Input arrives from remote peers the
collector does not control, so nothing here may read past the supplied
buffer regardless of what the embedded length fields claim.
*/
use ipnet::IpNet;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::error::ParserError;
use crate::models::*;
use crate::ParserError::IoNotEnoughBytes;
use bytes::{Buf, BufMut, Bytes, BytesMut};

impl ReadUtils for Bytes {}

// Allow reading BGP primitives from any Buf
pub trait ReadUtils: bytes::Buf {
    #[inline]
    fn has_n_remaining(&self, n: usize) -> Result<(), ParserError> {
        if self.remaining() < n {
            Err(IoNotEnoughBytes())
        } else {
            Ok(())
        }
    }

    #[inline]
    fn read_u8(&mut self) -> Result<u8, ParserError> {
        self.has_n_remaining(1)?;
        Ok(self.get_u8())
    }

    #[inline]
    fn read_u16(&mut self) -> Result<u16, ParserError> {
        self.has_n_remaining(2)?;
        Ok(self.get_u16())
    }

    #[inline]
    fn read_u32(&mut self) -> Result<u32, ParserError> {
        self.has_n_remaining(4)?;
        Ok(self.get_u32())
    }

    #[inline]
    fn read_u64(&mut self) -> Result<u64, ParserError> {
        self.has_n_remaining(8)?;
        Ok(self.get_u64())
    }

    fn read_address(&mut self, afi: &Afi) -> Result<IpAddr, ParserError> {
        match afi {
            Afi::Ipv4 => self.read_ipv4_address().map(IpAddr::V4),
            Afi::Ipv6 => self.read_ipv6_address().map(IpAddr::V6),
        }
    }

    fn read_ipv4_address(&mut self) -> Result<Ipv4Addr, ParserError> {
        let addr = self.read_u32()?;
        Ok(Ipv4Addr::from(addr))
    }

    fn read_ipv6_address(&mut self) -> Result<Ipv6Addr, ParserError> {
        self.has_n_remaining(16)?;
        let buf = self.get_u128();
        Ok(Ipv6Addr::from(buf))
    }

    #[inline]
    fn read_asn(&mut self, as_length: AsnLength) -> Result<Asn, ParserError> {
        match as_length {
            AsnLength::Bits16 => self.read_u16().map(Asn::new_16bit),
            AsnLength::Bits32 => self.read_u32().map(Asn::new_32bit),
        }
    }

    fn read_asns(&mut self, as_length: AsnLength, count: usize) -> Result<Vec<Asn>, ParserError> {
        self.has_n_remaining(count * as_length.octets())?;
        let mut path = Vec::with_capacity(count);
        for _ in 0..count {
            path.push(self.read_asn(as_length)?);
        }
        Ok(path)
    }

    fn read_afi(&mut self) -> Result<Afi, ParserError> {
        Afi::try_from(self.read_u16()?).map_err(ParserError::from)
    }

    fn read_safi(&mut self) -> Result<Safi, ParserError> {
        Safi::try_from(self.read_u8()?).map_err(ParserError::from)
    }

    /// Read one announced/withdrawn prefix.
    ///
    /// The length in bits is 1 byte; only `ceil(bit_len/8)` address bytes
    /// follow on the wire and the address is zero-extended to full width.
    fn read_nlri_prefix(&mut self, afi: &Afi) -> Result<NetworkPrefix, ParserError> {
        let bit_len = self.read_u8()?;
        let byte_len: usize = (bit_len as usize).div_ceil(8);

        let addr: IpAddr = match afi {
            Afi::Ipv4 => {
                if byte_len > 4 {
                    return Err(ParserError::ParseError(format!(
                        "invalid byte length for IPv4 prefix. byte_len: {}, bit_len: {}",
                        byte_len, bit_len
                    )));
                }
                self.has_n_remaining(byte_len)?;
                let mut buff = [0; 4];
                self.copy_to_slice(&mut buff[..byte_len]);
                IpAddr::V4(Ipv4Addr::from(buff))
            }
            Afi::Ipv6 => {
                if byte_len > 16 {
                    return Err(ParserError::ParseError(format!(
                        "invalid byte length for IPv6 prefix. byte_len: {}, bit_len: {}",
                        byte_len, bit_len
                    )));
                }
                self.has_n_remaining(byte_len)?;
                let mut buff = [0; 16];
                self.copy_to_slice(&mut buff[..byte_len]);
                IpAddr::V6(Ipv6Addr::from(buff))
            }
        };
        let prefix = IpNet::new(addr, bit_len)?;
        Ok(NetworkPrefix::new(prefix))
    }

    fn read_n_bytes(&mut self, n_bytes: usize) -> Result<Vec<u8>, ParserError> {
        self.has_n_remaining(n_bytes)?;
        Ok(self.copy_to_bytes(n_bytes).into())
    }
}

/// Parse an NLRI section into prefixes.
///
/// The section must tile exactly into whole prefix tuples: each tuple
/// announces how many address bytes follow, and a tuple claiming more bytes
/// than remain fails the whole section.
pub fn parse_nlri_list(mut input: Bytes, afi: &Afi) -> Result<Vec<NetworkPrefix>, ParserError> {
    let mut prefixes = vec![];
    while input.remaining() > 0 {
        prefixes.push(input.read_nlri_prefix(afi)?);
    }
    Ok(prefixes)
}

/// Encode prefixes with the NLRI length-prefix scheme, the inverse of
/// [parse_nlri_list].
pub fn encode_nlri_prefixes(prefixes: &[NetworkPrefix]) -> Bytes {
    let mut bytes = BytesMut::new();
    for prefix in prefixes {
        bytes.put_slice(&prefix.encode());
    }
    bytes.freeze()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_read_nlri_prefix_zero_extension() {
        // only two significant bytes on the wire for a /15
        let mut data = Bytes::from_static(&[15, 10, 2]);
        let prefix = data.read_nlri_prefix(&Afi::Ipv4).unwrap();
        assert_eq!(prefix, NetworkPrefix::from_str("10.2.0.0/15").unwrap());
        assert_eq!(data.remaining(), 0);
    }

    #[test]
    fn test_read_nlri_prefix_invalid_length() {
        // 44 bits do not fit an IPv4 address
        let mut data = Bytes::from_static(&[44, 10, 2, 0, 0, 0, 0]);
        assert!(matches!(
            data.read_nlri_prefix(&Afi::Ipv4).unwrap_err(),
            ParserError::ParseError(_)
        ));
    }

    #[test]
    fn test_nlri_list_round_trip() {
        let prefixes: Vec<NetworkPrefix> = ["10.0.0.0/24", "192.168.0.0/16", "0.0.0.0/0"]
            .iter()
            .map(|s| NetworkPrefix::from_str(s).unwrap())
            .collect();
        let encoded = encode_nlri_prefixes(&prefixes);
        let decoded = parse_nlri_list(encoded, &Afi::Ipv4).unwrap();
        assert_eq!(decoded, prefixes);
    }

    #[test]
    fn test_nlri_list_v6_round_trip() {
        let prefixes: Vec<NetworkPrefix> = ["2001:db8::/32", "2001:db8:1:2::/64", "::/0"]
            .iter()
            .map(|s| NetworkPrefix::from_str(s).unwrap())
            .collect();
        let encoded = encode_nlri_prefixes(&prefixes);
        let decoded = parse_nlri_list(encoded, &Afi::Ipv6).unwrap();
        assert_eq!(decoded, prefixes);
    }

    #[test]
    fn test_nlri_list_bad_tiling() {
        // second tuple claims 3 address bytes but only 1 remains
        let data = Bytes::from_static(&[24, 10, 0, 0, 24, 10]);
        assert!(matches!(
            parse_nlri_list(data, &Afi::Ipv4).unwrap_err(),
            ParserError::IoNotEnoughBytes()
        ));
    }

    #[test]
    fn test_read_asns() {
        let mut data = Bytes::from_static(&[0, 1, 0, 2]);
        let asns = data.read_asns(AsnLength::Bits16, 2).unwrap();
        assert_eq!(asns, vec![Asn::new_16bit(1), Asn::new_16bit(2)]);

        let mut data = Bytes::from_static(&[0, 1, 0, 2]);
        assert!(data.read_asns(AsnLength::Bits32, 2).is_err());
    }
}
