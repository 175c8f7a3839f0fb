//! BGP NOTIFICATION error codes assigned by IANA.
//!
//! The full list of assignments can be viewed at:
//! <https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-3>
use num_enum::{FromPrimitive, IntoPrimitive};
use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BgpErrorCode {
    Reserved = 0,
    MessageHeaderError = 1,
    OpenError = 2,
    UpdateError = 3,
    HoldTimerExpired = 4,
    FiniteStateMachineError = 5,
    CeaseNotification = 6,
    RouteRefreshError = 7,
    #[num_enum(catch_all)]
    Unknown(u8),
}

/// A NOTIFICATION error code/subcode pair mapped into its IANA taxonomy.
///
/// Unknown codes and subcodes are preserved, never rejected; a collector sees
/// whatever its peers send.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BgpError {
    /// Includes subcode. Currently, no subcodes have been assigned.
    Reserved(u8),
    MessageHeaderError(MessageHeaderError),
    OpenError(OpenError),
    UpdateError(UpdateError),
    /// Includes subcode. Currently, no subcodes have been assigned.
    HoldTimerExpired(u8),
    FiniteStateMachineError(u8),
    CeaseNotification(CeaseNotification),
    RouteRefreshError(u8),
    Unknown(u8, u8),
}

impl BgpError {
    pub fn new(code: u8, subcode: u8) -> Self {
        match BgpErrorCode::from(code) {
            BgpErrorCode::Reserved => BgpError::Reserved(subcode),
            BgpErrorCode::MessageHeaderError => {
                BgpError::MessageHeaderError(MessageHeaderError::from(subcode))
            }
            BgpErrorCode::OpenError => BgpError::OpenError(OpenError::from(subcode)),
            BgpErrorCode::UpdateError => BgpError::UpdateError(UpdateError::from(subcode)),
            BgpErrorCode::HoldTimerExpired => BgpError::HoldTimerExpired(subcode),
            BgpErrorCode::FiniteStateMachineError => BgpError::FiniteStateMachineError(subcode),
            BgpErrorCode::CeaseNotification => {
                BgpError::CeaseNotification(CeaseNotification::from(subcode))
            }
            BgpErrorCode::RouteRefreshError => BgpError::RouteRefreshError(subcode),
            BgpErrorCode::Unknown(_) => BgpError::Unknown(code, subcode),
        }
    }
}

impl Display for BgpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BgpError::Reserved(subcode) => write!(f, "reserved error (subcode {})", subcode),
            BgpError::MessageHeaderError(e) => write!(f, "message header error: {:?}", e),
            BgpError::OpenError(e) => write!(f, "OPEN message error: {:?}", e),
            BgpError::UpdateError(e) => write!(f, "UPDATE message error: {:?}", e),
            BgpError::HoldTimerExpired(subcode) => {
                write!(f, "hold timer expired (subcode {})", subcode)
            }
            BgpError::FiniteStateMachineError(subcode) => {
                write!(f, "finite state machine error (subcode {})", subcode)
            }
            BgpError::CeaseNotification(e) => write!(f, "cease: {:?}", e),
            BgpError::RouteRefreshError(subcode) => {
                write!(f, "ROUTE-REFRESH message error (subcode {})", subcode)
            }
            BgpError::Unknown(code, subcode) => {
                write!(f, "unknown error (code {}, subcode {})", code, subcode)
            }
        }
    }
}

/// Message Header Error subcodes
///
/// <https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-5>
#[allow(non_camel_case_types)]
#[derive(Debug, FromPrimitive, IntoPrimitive, PartialEq, Eq, Hash, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MessageHeaderError {
    UNSPECIFIC = 0,
    CONNECTION_NOT_SYNCHRONIZED = 1,
    BAD_MESSAGE_LENGTH = 2,
    BAD_MESSAGE_TYPE = 3,
    #[num_enum(catch_all)]
    Unknown(u8),
}

/// OPEN Message Error subcodes
///
/// <https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-6>
#[allow(non_camel_case_types)]
#[derive(Debug, FromPrimitive, IntoPrimitive, PartialEq, Eq, Hash, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum OpenError {
    UNSPECIFIC = 0,
    UNSUPPORTED_VERSION_NUMBER = 1,
    BAD_PEER_AS = 2,
    BAD_BGP_IDENTIFIER = 3,
    UNSUPPORTED_OPTIONAL_PARAMETER = 4,
    UNACCEPTABLE_HOLD_TIME = 6,
    UNSUPPORTED_CAPABILITY = 7,
    ROLE_MISMATCH = 11,
    #[num_enum(catch_all)]
    Unknown(u8),
}

/// UPDATE Message Error subcodes
///
/// <https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-7>
#[allow(non_camel_case_types)]
#[derive(Debug, FromPrimitive, IntoPrimitive, PartialEq, Eq, Hash, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum UpdateError {
    UNSPECIFIC = 0,
    MALFORMED_ATTRIBUTE_LIST = 1,
    UNRECOGNIZED_WELL_KNOWN_ATTRIBUTE = 2,
    MISSING_WELL_KNOWN_ATTRIBUTE = 3,
    ATTRIBUTE_FLAGS_ERROR = 4,
    ATTRIBUTE_LENGTH_ERROR = 5,
    INVALID_ORIGIN_ERROR = 6,
    INVALID_NEXT_HOP_ATTRIBUTE = 8,
    OPTIONAL_ATTRIBUTE_ERROR = 9,
    INVALID_NETWORK_FIELD = 10,
    MALFORMED_AS_PATH = 11,
    #[num_enum(catch_all)]
    Unknown(u8),
}

/// Cease NOTIFICATION subcodes (RFC 4486 / RFC 9003)
///
/// <https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-8>
#[allow(non_camel_case_types)]
#[derive(Debug, FromPrimitive, IntoPrimitive, PartialEq, Eq, Hash, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CeaseNotification {
    RESERVED = 0,
    MAXIMUM_NUMBER_OF_PREFIXES_REACHED = 1,
    ADMINISTRATIVE_SHUTDOWN = 2,
    PEER_DE_CONFIGURED = 3,
    ADMINISTRATIVE_RESET = 4,
    CONNECTION_REJECTED = 5,
    OTHER_CONFIGURATION_CHANGE = 6,
    CONNECTION_COLLISION_RESOLUTION = 7,
    OUT_OF_RESOURCES = 8,
    HARD_RESET = 9,
    BFD_DOWN = 10,
    #[num_enum(catch_all)]
    Unknown(u8),
}
