use heapless::Vec;

use super::mac::MAX_FRM_PAYLOAD_SIZE;

/// Wire-format byte representation of an application payload
pub type WireBytes = Vec<u8, MAX_FRM_PAYLOAD_SIZE>;

/// Payload serialization error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PayloadError {
    /// Serialized form does not fit the wire buffer
    TooLong,
    /// Payload cannot be represented in the wire format
    Malformed,
}

/// Application message with a protocol-owned binary encoding
///
/// Serialization failure is non-fatal: the size adapter logs it and carries
/// on with a best-effort buffer (see [`crate::uplink::size`]).
pub trait WirePayload {
    /// Serialize to the wire-format byte representation.
    fn marshal(&self) -> Result<WireBytes, PayloadError>;
}

/// Raw-byte application payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataPayload {
    bytes: WireBytes,
}

impl DataPayload {
    /// Create a payload from raw bytes; fails if they exceed the wire buffer.
    pub fn new(bytes: &[u8]) -> Result<Self, PayloadError> {
        let mut buffer = WireBytes::new();
        buffer
            .extend_from_slice(bytes)
            .map_err(|_| PayloadError::TooLong)?;
        Ok(Self { bytes: buffer })
    }

    /// Raw payload bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl WirePayload for DataPayload {
    fn marshal(&self) -> Result<WireBytes, PayloadError> {
        Ok(self.bytes.clone())
    }
}
