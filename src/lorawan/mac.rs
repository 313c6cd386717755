use heapless::Vec;

use crate::config::device::{AESKey, DevAddr, EUI64};

/// Maximum FRMPayload size allowed by any data rate
pub const MAX_FRM_PAYLOAD_SIZE: usize = 242;

/// Maximum size of a fully encoded PHY frame
pub const MAX_FRAME_SIZE: usize = 256;

/// MAC header types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MType {
    /// Join request (uplink)
    JoinRequest = 0x00,
    /// Join accept (downlink)
    JoinAccept = 0x20,
    /// Unconfirmed data uplink
    UnconfirmedDataUp = 0x40,
    /// Unconfirmed data downlink
    UnconfirmedDataDown = 0x60,
    /// Confirmed data uplink
    ConfirmedDataUp = 0x80,
    /// Confirmed data downlink
    ConfirmedDataDown = 0xA0,
    /// Rejoin request (uplink)
    RejoinRequest = 0xC0,
    /// Proprietary extension
    Proprietary = 0xE0,
}

/// Fully encoded over-the-air frame
///
/// Frames are opaque to this crate: they are produced by the external
/// [`FrameEncoder`] and never inspected or mutated afterwards.
pub type Frame = Vec<u8, MAX_FRAME_SIZE>;

/// External frame encoder
///
/// Owns the wire format and the message-integrity computation. One encoder
/// instance is shared process-wide by every simulated device, hence `&self`
/// methods. Encoder errors are never fatal to a device: the caller logs them
/// and drops the affected fragment.
pub trait FrameEncoder {
    /// Error reported for a rejected fragment (e.g. malformed keys/address).
    type Error: core::fmt::Debug;

    /// Encode one payload fragment into a data frame.
    fn encode(
        &self,
        mtype: MType,
        payload: &[u8],
        dev_addr: DevAddr,
        app_skey: &AESKey,
        nwk_skey: &AESKey,
        ack: bool,
    ) -> Result<Frame, Self::Error>;

    /// Build a join-request frame for the given device identity.
    fn encode_join_request(
        &self,
        dev_eui: EUI64,
        app_eui: EUI64,
        dev_nonce: u16,
    ) -> Result<Frame, Self::Error>;
}
