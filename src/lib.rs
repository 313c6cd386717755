//! Uplink frame assembly for a simulated LoRaWAN end-device
//!
//! This crate models the transmit side of a single simulated device in a
//! low-power wide-area network: deciding which application message goes out
//! next, fitting it to the link's size limits, optionally stamping fragments
//! with timing metadata, and producing the final set of over-the-air frames
//! for the transmission opportunity.
//!
//! # Features
//! - Normal and retransmission assembly modes with a cached frame set
//! - FIFO pending-uplink queue with a reusable standing message
//! - Fragmentation and truncation size adaptation, FOpts-aware
//! - Class A/B evaluation driven by ping-slot-info requests
//! - ACK, empty-frame and join-request dispatch through a transmit scheduler
//! - No unsafe code, `no_std` compatible
//!
//! Cryptographic frame encoding, regional size tables, the class transmit
//! scheduler, the wall clock and the diagnostic log sink are all consumed
//! through narrow traits so a simulator can share them across many devices.
//!
//! # Example
//! ```no_run
//! use lwn_device::{
//!     class::{OperatingMode, TransmitScheduler, TxDescriptor},
//!     config::device::DeviceConfig,
//!     device::{state::QueuedMessage, Device},
//!     logging::NullLogger,
//!     lorawan::{
//!         mac::{Frame, FrameEncoder, MType},
//!         payload::DataPayload,
//!         region::US915,
//!     },
//!     time::Clock,
//! };
//!
//! struct Encoder;
//!
//! impl FrameEncoder for Encoder {
//!     type Error = ();
//!
//!     fn encode(
//!         &self,
//!         _mtype: MType,
//!         payload: &[u8],
//!         _dev_addr: [u8; 4],
//!         _app_skey: &[u8; 16],
//!         _nwk_skey: &[u8; 16],
//!         _ack: bool,
//!     ) -> Result<Frame, ()> {
//!         let mut frame = Frame::new();
//!         frame.extend_from_slice(payload).map_err(drop)?;
//!         Ok(frame)
//!     }
//!
//!     fn encode_join_request(
//!         &self,
//!         _dev_eui: [u8; 8],
//!         _app_eui: [u8; 8],
//!         _dev_nonce: u16,
//!     ) -> Result<Frame, ()> {
//!         Ok(Frame::new())
//!     }
//! }
//!
//! struct Scheduler;
//!
//! impl TransmitScheduler for Scheduler {
//!     fn current_class(&self) -> OperatingMode {
//!         OperatingMode::ClassA
//!     }
//!     fn switch_class(&mut self, _target: OperatingMode) {}
//!     fn send(&mut self, _descriptor: TxDescriptor) {}
//! }
//!
//! struct Ticks;
//!
//! impl Clock for Ticks {
//!     fn now_millis(&self) -> u64 {
//!         0
//!     }
//! }
//!
//! let config = DeviceConfig::new_abp([0x01; 8], [0x02; 8], [0x03; 4], [0x04; 16], [0x05; 16]);
//! let standing = QueuedMessage::new(
//!     MType::UnconfirmedDataUp,
//!     DataPayload::new(b"ping").unwrap(),
//! );
//!
//! let mut device = Device::new(config, standing, Encoder, US915, Scheduler, Ticks, NullLogger);
//! let frames = device.create_uplink();
//! assert_eq!(frames.len(), 1);
//! ```

#![warn(missing_docs)]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

/// Operating class evaluation and the transmit-scheduler interface
pub mod class;

/// Device configuration
pub mod config;

/// Simulated device state and entry points
pub mod device;

/// Diagnostic log sink interface
pub mod logging;

/// LoRaWAN protocol interfaces consumed by the assembly pipeline
pub mod lorawan;

/// Wall-clock access
pub mod time;

/// Uplink assembly pipeline stages
pub mod uplink;
