use crate::device::state::{DeviceState, Mode};
use crate::lorawan::mac::MType;
use crate::lorawan::payload::WirePayload;

/// Outcome of payload selection for one assembly cycle
pub enum Selection<P> {
    /// Retransmission mode: replay the cached frame set, no new selection
    Retransmit,
    /// Normal mode: a freshly selected message
    New {
        /// Selected message type
        mtype: MType,
        /// Selected application payload
        payload: P,
    },
}

/// Pick the application message transmitted this cycle.
///
/// In normal mode the front of the pending queue wins and is consumed;
/// with an empty queue the standing message is reused without being consumed.
/// The selected type is recorded as the device's last message type.
pub fn select<P>(state: &mut DeviceState<P>) -> Selection<P>
where
    P: WirePayload + Clone,
{
    match state.mode {
        Mode::Retransmission => Selection::Retransmit,
        Mode::Normal => {
            let (mtype, payload) = match state.pending.pop_front() {
                Some(message) => (message.mtype, message.payload),
                None => (state.standing.mtype, state.standing.payload.clone()),
            };
            state.last_mtype = Some(mtype);
            Selection::New { mtype, payload }
        }
    }
}
