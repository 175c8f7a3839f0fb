use crate::models::BgpError;

/// A decoded BGP NOTIFICATION message (RFC 4271 section 4.5).
#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BgpNotificationMessage {
    pub error_code: u8,
    pub error_subcode: u8,
    /// code/subcode mapped into the IANA taxonomy; unknown values preserved
    pub error: BgpError,
    /// variable-length diagnostic data, depends on the error code
    pub data: Vec<u8>,
}

impl BgpNotificationMessage {
    pub fn new(error_code: u8, error_subcode: u8, data: Vec<u8>) -> Self {
        BgpNotificationMessage {
            error_code,
            error_subcode,
            error: BgpError::new(error_code, error_subcode),
            data,
        }
    }
}
