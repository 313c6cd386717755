use crate::time::Clock;
use crate::uplink::Fragment;

/// Length of the time-alignment suffix in bytes
pub const ALIGNMENT_SUFFIX_LEN: usize = 4;

/// Append the current time to a fragment's tail.
///
/// When enabled, exactly four bytes are appended: the big-endian unsigned
/// 32-bit count of whole seconds since the Unix epoch, sampled from `clock`
/// at call time. Applied independently per fragment, not once per batch.
pub fn align_with_current_time<C: Clock>(fragment: &mut Fragment, enabled: bool, clock: &C) {
    if !enabled {
        return;
    }

    let seconds = (clock.now_millis() / 1000) as u32;
    // Fragment capacity reserves room for the suffix beyond the wire cap.
    let _ = fragment.bytes.extend_from_slice(&seconds.to_be_bytes());
}
