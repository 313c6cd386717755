//! Uplink assembly pipeline stages
//!
//! The stages run in a fixed order each transmission opportunity: payload
//! selection, size adaptation, optional time alignment. The surrounding
//! orchestration (class evaluation, frame encoding, caching) lives in
//! [`crate::device`].

use heapless::Vec;

use crate::lorawan::mac::{MType, MAX_FRM_PAYLOAD_SIZE};

/// Payload selection
pub mod selector;

/// Size adaptation: fragmentation and truncation
pub mod size;

/// Current-time alignment
pub mod timestamp;

/// Maximum number of frames produced by one assembly cycle
pub const MAX_UPLINK_FRAMES: usize = 32;

/// Byte capacity of a fragment: a full wire payload plus the time suffix
pub const FRAGMENT_CAPACITY: usize = MAX_FRM_PAYLOAD_SIZE + timestamp::ALIGNMENT_SUFFIX_LEN;

/// One contiguous slice of a payload, tagged with its message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Message type of the source payload
    pub mtype: MType,
    /// Fragment bytes, possibly extended by the time-alignment suffix
    pub bytes: Vec<u8, FRAGMENT_CAPACITY>,
}

impl Fragment {
    /// Create a fragment from a payload slice.
    pub fn new(mtype: MType, bytes: &[u8]) -> Self {
        let mut buffer = Vec::new();
        // Wire payloads cap at MAX_FRM_PAYLOAD_SIZE, which always fits.
        let take = bytes.len().min(FRAGMENT_CAPACITY);
        let _ = buffer.extend_from_slice(&bytes[..take]);
        Self {
            mtype,
            bytes: buffer,
        }
    }
}
