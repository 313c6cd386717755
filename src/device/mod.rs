//! Simulated device
//!
//! [`Device`] ties the pipeline stages together: class evaluation, payload
//! selection, size adaptation, time alignment, frame encoding and caching.
//! It also carries the auxiliary dispatch entry points (ACK, empty frame,
//! join request) that hand frames to the transmit scheduler directly.

use core::fmt::Debug;

use heapless::Vec;

use crate::class::{self, TransmitScheduler, TxDescriptor};
use crate::config::device::DeviceConfig;
use crate::logging::{LogScope, LogSink};
use crate::lorawan::mac::{Frame, FrameEncoder, MType};
use crate::lorawan::payload::WirePayload;
use crate::lorawan::region::Region;
use crate::time::Clock;
use crate::uplink::{selector, selector::Selection, size, timestamp, MAX_UPLINK_FRAMES};

/// Device state types
pub mod state;

use state::{DeviceState, QueuedMessage};

/// One simulated end-device
///
/// Owns its mutable state exclusively; the encoder, region service and clock
/// are read-mostly collaborators that may be shared across devices, while the
/// scheduler and log sink belong to this device.
pub struct Device<P, E, REG, S, C, L>
where
    P: WirePayload + Clone,
    E: FrameEncoder,
    REG: Region,
    S: TransmitScheduler,
    C: Clock,
    L: LogSink,
{
    config: DeviceConfig,
    state: DeviceState<P>,
    encoder: E,
    region: REG,
    scheduler: S,
    clock: C,
    logger: L,
}

impl<P, E, REG, S, C, L> Device<P, E, REG, S, C, L>
where
    P: WirePayload + Clone,
    E: FrameEncoder,
    REG: Region,
    S: TransmitScheduler,
    C: Clock,
    L: LogSink,
{
    /// Create a device around its configuration and standing message.
    pub fn new(
        config: DeviceConfig,
        standing: QueuedMessage<P>,
        encoder: E,
        region: REG,
        scheduler: S,
        clock: C,
        logger: L,
    ) -> Self {
        Self {
            config,
            state: DeviceState::new(standing),
            encoder,
            region,
            scheduler,
            clock,
            logger,
        }
    }

    /// Current device state.
    pub fn state(&self) -> &DeviceState<P> {
        &self.state
    }

    /// Mutable device state, for the application layer and the simulator.
    pub fn state_mut(&mut self) -> &mut DeviceState<P> {
        &mut self.state
    }

    /// Device configuration.
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Queue an application message for transmission.
    ///
    /// A full queue rejects the message and hands it back.
    pub fn enqueue_uplink(
        &mut self,
        mtype: MType,
        payload: P,
    ) -> Result<(), QueuedMessage<P>> {
        self.state.push_uplink(QueuedMessage::new(mtype, payload))
    }

    /// Assemble the frame set for this transmission opportunity.
    ///
    /// Runs class evaluation first, then either replays the cached frame set
    /// (retransmission mode) or selects, adapts, stamps and encodes a fresh
    /// payload. Encoder failures drop the affected fragment and the batch
    /// continues; the surviving frames overwrite the cache.
    pub fn create_uplink(&mut self) -> &[Frame] {
        class::evaluate(&mut self.state.session, &mut self.scheduler);

        let (mtype, payload) = match selector::select(&mut self.state) {
            Selection::Retransmit => return &self.state.last_frames,
            Selection::New { mtype, payload } => (mtype, payload),
        };

        let limits = self
            .region
            .payload_size(self.state.data_rate, self.state.session.dwell_time);
        let fragments = size::adapt(
            mtype,
            &payload,
            limits,
            self.state.session.mac_options_present,
            self.config.supports_fragmentation,
            &mut self.logger,
        );

        let mut frames: Vec<Frame, MAX_UPLINK_FRAMES> = Vec::new();
        for mut fragment in fragments {
            timestamp::align_with_current_time(
                &mut fragment,
                self.state.session.align_to_current_time,
                &self.clock,
            );

            match self.encoder.encode(
                fragment.mtype,
                &fragment.bytes,
                self.config.dev_addr,
                &self.config.app_skey,
                &self.config.nwk_skey,
                false,
            ) {
                Ok(frame) => {
                    if frames.push(frame).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    self.print("uplink frame encoding failed", Some(&err), LogScope::Both);
                    continue;
                }
            }
        }

        self.state.last_frames = frames;
        &self.state.last_frames
    }

    /// Build an acknowledgement frame.
    ///
    /// Returns a zero-length frame on encoder failure, meaning nothing to
    /// send; the failure is never propagated.
    pub fn create_ack(&mut self) -> Frame {
        self.build_bare_frame(true)
    }

    /// Build an empty data frame.
    ///
    /// Same failure contract as [`Self::create_ack`].
    pub fn create_empty_frame(&mut self) -> Frame {
        self.build_bare_frame(false)
    }

    /// Build and schedule an acknowledgement.
    pub fn send_ack(&mut self) {
        let ack = self.create_ack();
        self.scheduler.send(TxDescriptor::new(ack, false));
        self.print("ACK sent", None, LogScope::Both);
    }

    /// Build and schedule an empty frame.
    pub fn send_empty_frame(&mut self) {
        let frame = self.create_empty_frame();
        self.scheduler.send(TxDescriptor::new(frame, false));
        self.print("Empty frame sent", None, LogScope::Both);
    }

    /// Build and schedule a join request.
    ///
    /// Join-request construction is owned by the external encoder; an
    /// encoding failure is logged and nothing is scheduled.
    pub fn send_join_request(&mut self) {
        let frame = match self.encoder.encode_join_request(
            self.config.dev_eui,
            self.config.app_eui,
            self.config.dev_nonce,
        ) {
            Ok(frame) => frame,
            Err(err) => {
                self.print("join request encoding failed", Some(&err), LogScope::Both);
                return;
            }
        };

        self.scheduler.send(TxDescriptor::new(frame, true));
        self.print("JOIN REQUEST sent", None, LogScope::Both);
    }

    /// Encode an empty unconfirmed data uplink with the given ack flag.
    fn build_bare_frame(&mut self, ack: bool) -> Frame {
        match self.encoder.encode(
            MType::UnconfirmedDataUp,
            &[],
            self.config.dev_addr,
            &self.config.app_skey,
            &self.config.nwk_skey,
            ack,
        ) {
            Ok(frame) => frame,
            Err(err) => {
                self.print("bare frame encoding failed", Some(&err), LogScope::Both);
                Frame::new()
            }
        }
    }

    fn print(&mut self, message: &str, error: Option<&dyn Debug>, scope: LogScope) {
        self.logger.log(message, error, scope);
    }
}
