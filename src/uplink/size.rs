//! Size adaptation
//!
//! Fits the selected payload to the link's size limits. Devices supporting
//! fragmentation split the serialized payload into chunks; everything else
//! clips it to a single fragment. Piggybacked MAC options change which limit
//! applies: their own size budget is tracked by the caller, so with
//! fragmentation enabled the payload travels as one fragment sized to itself
//! rather than being clipped to the standard maximum.

use heapless::Vec;

use super::{Fragment, MAX_UPLINK_FRAMES};
use crate::logging::{LogScope, LogSink};
use crate::lorawan::mac::MType;
use crate::lorawan::payload::{WireBytes, WirePayload};
use crate::lorawan::region::SizeLimits;

/// Adapt a payload to the size limits of this cycle.
///
/// Serialization failure is logged and adaptation continues with the empty
/// best-effort buffer; the result always holds at least one fragment.
pub fn adapt<P, L>(
    mtype: MType,
    payload: &P,
    limits: SizeLimits,
    mac_options_present: bool,
    fragmentation_supported: bool,
    logger: &mut L,
) -> Vec<Fragment, MAX_UPLINK_FRAMES>
where
    P: WirePayload,
    L: LogSink,
{
    let wire = match payload.marshal() {
        Ok(bytes) => bytes,
        Err(err) => {
            logger.log(
                "payload serialization failed",
                Some(&err),
                LogScope::Console,
            );
            WireBytes::new()
        }
    };

    if fragmentation_supported {
        let chunk_size = if mac_options_present {
            wire.len()
        } else {
            limits.standard_max
        };
        let fragments = fragment(mtype, &wire, chunk_size);
        if fragments.is_full() && fragments.len() * chunk_size < wire.len() {
            logger.log(
                "fragment budget exhausted, payload tail dropped",
                None,
                LogScope::Console,
            );
        }
        fragments
    } else {
        let max = if mac_options_present {
            limits.alternate_max
        } else {
            limits.standard_max
        };
        let mut fragments = Vec::new();
        let _ = fragments.push(truncate(mtype, &wire, max));
        fragments
    }
}

/// Split a serialized payload into chunks of `chunk_size` bytes.
///
/// Chunk order matches the payload's byte order. An empty payload or a zero
/// chunk size yields a single fragment carrying the whole payload.
pub fn fragment(
    mtype: MType,
    bytes: &[u8],
    chunk_size: usize,
) -> Vec<Fragment, MAX_UPLINK_FRAMES> {
    let mut fragments = Vec::new();

    if bytes.is_empty() || chunk_size == 0 {
        let _ = fragments.push(Fragment::new(mtype, bytes));
        return fragments;
    }

    for chunk in bytes.chunks(chunk_size) {
        if fragments.push(Fragment::new(mtype, chunk)).is_err() {
            break;
        }
    }
    fragments
}

/// Clip a serialized payload to at most `max` bytes.
pub fn truncate(mtype: MType, bytes: &[u8], max: usize) -> Fragment {
    let end = bytes.len().min(max);
    Fragment::new(mtype, &bytes[..end])
}
