use crate::models::*;

/// A fully decoded BGP UPDATE message.
///
/// Nothing is handed to storage until all three sections decoded cleanly;
/// this struct is the buffer that makes the per-message all-or-nothing
/// contract possible.
#[derive(Debug, PartialEq, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BgpUpdateMessage {
    pub withdrawn_prefixes: Vec<NetworkPrefix>,
    pub attributes: Attributes,
    pub announced_prefixes: Vec<NetworkPrefix>,
    /// digest of the attribute section; shared by all announced prefixes
    pub path_hash: PathHash,
}

impl BgpUpdateMessage {
    /// Whether this UPDATE is a pure withdrawal (end-of-RIB markers also
    /// match: empty everywhere).
    pub fn is_withdrawal_only(&self) -> bool {
        self.announced_prefixes.is_empty() && self.attributes.is_empty()
    }
}
