//! Operating class evaluation
//!
//! A simulated device operates in class A or class B. The actual
//! receive-window and transmit scheduling for the class lives in the external
//! [`TransmitScheduler`]; this module only decides, once per assembly cycle,
//! whether the device should advertise class B in its uplinks and whether a
//! pending ping-slot-info request forces a fallback to class A.

use crate::device::state::SessionFlags;
use crate::lorawan::mac::Frame;

/// Device operating class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingMode {
    /// Class A: receive windows only after an uplink
    ClassA,
    /// Class B: scheduled ping slots synchronized with network beacons
    ClassB,
}

/// One frame handed to the transmit scheduler
#[derive(Debug, Clone)]
pub struct TxDescriptor {
    /// Encoded frame bytes
    pub frame: Frame,
    /// Whether the frame is a join request
    pub is_join_request: bool,
}

impl TxDescriptor {
    /// Package a frame for transmission.
    pub fn new(frame: Frame, is_join_request: bool) -> Self {
        Self {
            frame,
            is_join_request,
        }
    }
}

/// Class-specific transmit scheduler
///
/// External collaborator that owns window timing for the device's current
/// class and carries frames to the simulated network.
pub trait TransmitScheduler {
    /// Class the device currently operates in.
    fn current_class(&self) -> OperatingMode;

    /// Request a transition to the target class.
    fn switch_class(&mut self, target: OperatingMode);

    /// Hand a frame over for transmission.
    fn send(&mut self, descriptor: TxDescriptor);
}

/// Evaluate class-B eligibility ahead of an assembly cycle.
///
/// If the device does not support class B, `class_b_active` is forced off.
/// Otherwise a pending ping-slot-info request demands class A until the
/// network has answered it, so a switch is requested and `class_b_active`
/// cleared; failing that, a device currently operating in class B advertises
/// it. No other transition happens here.
pub fn evaluate(flags: &mut SessionFlags, scheduler: &mut impl TransmitScheduler) {
    if !flags.class_b_supported {
        flags.class_b_active = false;
        return;
    }

    if flags.ping_slot_info_requested {
        scheduler.switch_class(OperatingMode::ClassA);
        flags.class_b_active = false;
    } else if scheduler.current_class() == OperatingMode::ClassB {
        flags.class_b_active = true;
    }
}
