use heapless::{Deque, Vec};

use crate::lorawan::mac::{Frame, MType};
use crate::lorawan::region::DwellTime;
use crate::uplink::MAX_UPLINK_FRAMES;

/// Capacity of the pending-uplink queue
pub const MAX_PENDING_UPLINKS: usize = 8;

/// Transmission mode of the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Assemble a new uplink each cycle
    Normal,
    /// Replay the previously assembled frame set
    Retransmission,
}

/// One application message awaiting transmission
#[derive(Debug, Clone)]
pub struct QueuedMessage<P> {
    /// Message type the payload is sent with
    pub mtype: MType,
    /// Application payload
    pub payload: P,
}

impl<P> QueuedMessage<P> {
    /// Pair a payload with its message type.
    pub fn new(mtype: MType, payload: P) -> Self {
        Self { mtype, payload }
    }
}

/// Per-session uplink flags
#[derive(Debug, Clone, Default)]
pub struct SessionFlags {
    /// Device is capable of class B operation
    pub class_b_supported: bool,
    /// Uplinks currently advertise class B
    pub class_b_active: bool,
    /// A ping-slot-info request awaits a network answer
    pub ping_slot_info_requested: bool,
    /// MAC options are piggybacked on this session's uplinks
    pub mac_options_present: bool,
    /// Append the current time to every outgoing fragment
    pub align_to_current_time: bool,
    /// Regional dwell-time setting
    pub dwell_time: DwellTime,
}

/// Mutable transmission state of one simulated device
///
/// Exclusively owned by the device's execution context: no two concurrent
/// assembly cycles may touch the same state.
pub struct DeviceState<P> {
    /// Current transmission mode
    pub mode: Mode,
    /// Pending application messages, consumed front-first
    pub pending: Deque<QueuedMessage<P>, MAX_PENDING_UPLINKS>,
    /// Message reused whenever the queue is empty
    pub standing: QueuedMessage<P>,
    /// Session flags
    pub session: SessionFlags,
    /// Frame set of the last successful normal-mode assembly
    pub last_frames: Vec<Frame, MAX_UPLINK_FRAMES>,
    /// Message type selected by the last normal-mode assembly
    pub last_mtype: Option<MType>,
    /// Current data-rate index
    pub data_rate: u8,
}

impl<P> DeviceState<P> {
    /// Create a fresh normal-mode state around a standing message.
    pub fn new(standing: QueuedMessage<P>) -> Self {
        Self {
            mode: Mode::Normal,
            pending: Deque::new(),
            standing,
            session: SessionFlags::default(),
            last_frames: Vec::new(),
            last_mtype: None,
            data_rate: 0,
        }
    }

    /// Append a message to the pending queue.
    ///
    /// A full queue rejects the message and hands it back to the caller.
    pub fn push_uplink(&mut self, message: QueuedMessage<P>) -> Result<(), QueuedMessage<P>> {
        self.pending.push_back(message)
    }
}
