//! BGP message and attribute structs
mod aspath;
mod attributes;
mod capabilities;
mod community;
mod error;
mod notification;
mod open;
mod update;

pub use aspath::*;
pub use attributes::*;
pub use capabilities::*;
pub use community::*;
pub use error::*;
pub use notification::*;
pub use open::*;
pub use update::*;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// BGP message type, the last octet of the RFC 4271 common header.
#[allow(non_camel_case_types)]
#[derive(Debug, TryFromPrimitive, IntoPrimitive, PartialEq, Eq, Hash, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BgpMessageType {
    OPEN = 1,
    UPDATE = 2,
    NOTIFICATION = 3,
    KEEPALIVE = 4,
    ROUTE_REFRESH = 5,
}

/// Validated BGP common header: the declared total message length and type.
///
/// The 16-octet all-ones marker is consumed but not stored.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct BgpHeader {
    /// Total message length in octets, header included. Always in [19, 4096].
    pub length: u16,
    pub msg_type: BgpMessageType,
}

impl BgpHeader {
    /// Octets of body following the header.
    pub const fn body_length(&self) -> usize {
        self.length as usize - 19
    }
}
