//! Common network-related structs: address families, AS numbers, prefixes.
mod afi;
mod asn;
mod prefix;

pub use afi::*;
pub use asn::*;
pub use prefix::*;
