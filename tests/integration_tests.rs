use std::cell::RefCell;
use std::rc::Rc;

use lwn_device::class::OperatingMode;
use lwn_device::device::state::{Mode, QueuedMessage};
use lwn_device::device::Device;
use lwn_device::lorawan::mac::MType;
use lwn_device::lorawan::payload::DataPayload;
use lwn_device::lorawan::region::SizeLimits;

use mock::{test_config, MockClock, MockEncoder, MockLogger, MockRegion, MockScheduler, SchedulerLog};

const TEST_MILLIS: u64 = 1_693_000_123_456;

type TestDevice =
    Device<DataPayload, MockEncoder, MockRegion, MockScheduler, MockClock, MockLogger>;

struct Handles {
    scheduler: Rc<RefCell<SchedulerLog>>,
    logs: Rc<RefCell<Vec<String>>>,
}

fn create_test_device(
    encoder: MockEncoder,
    limits: SizeLimits,
    fragmentation: bool,
    class: OperatingMode,
) -> (TestDevice, Handles) {
    let scheduler_log = Rc::new(RefCell::new(SchedulerLog::default()));
    let scheduler = MockScheduler::new(class, scheduler_log.clone());
    let logs = Rc::new(RefCell::new(Vec::new()));
    let logger = MockLogger::new(logs.clone());

    let mut config = test_config();
    config.supports_fragmentation = fragmentation;

    let standing = QueuedMessage::new(
        MType::UnconfirmedDataUp,
        DataPayload::new(b"standing").unwrap(),
    );

    let device = Device::new(
        config,
        standing,
        encoder,
        MockRegion(limits),
        scheduler,
        MockClock {
            millis: TEST_MILLIS,
        },
        logger,
    );

    let handles = Handles {
        scheduler: scheduler_log,
        logs,
    };
    (device, handles)
}

fn wide_limits() -> SizeLimits {
    SizeLimits {
        standard_max: 242,
        alternate_max: 227,
    }
}

#[test]
fn retransmission_replays_cached_frames_without_queue_mutation() {
    let (mut device, _handles) =
        create_test_device(MockEncoder::new(), wide_limits(), false, OperatingMode::ClassA);

    let cached: Vec<Vec<u8>> = device
        .create_uplink()
        .iter()
        .map(|frame| frame.as_slice().to_vec())
        .collect();
    assert_eq!(cached.len(), 1);

    device.state_mut().mode = Mode::Retransmission;
    device
        .enqueue_uplink(MType::ConfirmedDataUp, DataPayload::new(b"queued").unwrap())
        .unwrap();

    let replayed: Vec<Vec<u8>> = device
        .create_uplink()
        .iter()
        .map(|frame| frame.as_slice().to_vec())
        .collect();

    assert_eq!(replayed, cached);
    assert_eq!(device.state().pending.len(), 1);
}

#[test]
fn queued_messages_are_consumed_in_fifo_order() {
    let (mut device, _handles) =
        create_test_device(MockEncoder::new(), wide_limits(), false, OperatingMode::ClassA);

    device
        .enqueue_uplink(MType::ConfirmedDataUp, DataPayload::new(b"A").unwrap())
        .unwrap();
    device
        .enqueue_uplink(MType::ConfirmedDataUp, DataPayload::new(b"B").unwrap())
        .unwrap();

    let first = device.create_uplink()[0].as_slice().to_vec();
    assert_eq!(first[0], MType::ConfirmedDataUp as u8);
    assert_eq!(&first[2..], b"A");

    let second = device.create_uplink()[0].as_slice().to_vec();
    assert_eq!(&second[2..], b"B");

    assert!(device.state().pending.is_empty());
    assert_eq!(device.state().last_mtype, Some(MType::ConfirmedDataUp));
}

#[test]
fn standing_message_is_reused_indefinitely() {
    let (mut device, _handles) =
        create_test_device(MockEncoder::new(), wide_limits(), false, OperatingMode::ClassA);

    for _ in 0..3 {
        let frame = device.create_uplink()[0].as_slice().to_vec();
        assert_eq!(frame[0], MType::UnconfirmedDataUp as u8);
        assert_eq!(&frame[2..], b"standing");
        assert!(device.state().pending.is_empty());
    }
}

#[test]
fn one_rejected_fragment_does_not_sink_the_batch() {
    // standing "standing" (8 bytes) at a 3-byte limit: fragments sta/ndi/ng.
    let limits = SizeLimits {
        standard_max: 3,
        alternate_max: 2,
    };
    let (mut device, handles) = create_test_device(
        MockEncoder::failing_calls(&[1]),
        limits,
        true,
        OperatingMode::ClassA,
    );

    let frames: Vec<Vec<u8>> = device
        .create_uplink()
        .iter()
        .map(|frame| frame.as_slice().to_vec())
        .collect();

    assert_eq!(frames.len(), 2);
    assert_eq!(&frames[0][2..], b"sta");
    assert_eq!(&frames[1][2..], b"ng");
    assert!(handles
        .logs
        .borrow()
        .iter()
        .any(|entry| entry.contains("encoding failed")));
}

#[test]
fn fully_rejected_batch_yields_zero_frames() {
    let (mut device, _handles) = create_test_device(
        MockEncoder::failing(),
        wide_limits(),
        false,
        OperatingMode::ClassA,
    );

    assert!(device.create_uplink().is_empty());
    assert!(device.state().last_frames.is_empty());
}

#[test]
fn every_fragment_carries_the_time_suffix() {
    let limits = SizeLimits {
        standard_max: 3,
        alternate_max: 2,
    };
    let (mut device, _handles) =
        create_test_device(MockEncoder::new(), limits, true, OperatingMode::ClassA);
    device.state_mut().session.align_to_current_time = true;

    let frames: Vec<Vec<u8>> = device
        .create_uplink()
        .iter()
        .map(|frame| frame.as_slice().to_vec())
        .collect();

    assert_eq!(frames.len(), 3);
    let suffix = 1_693_000_123u32.to_be_bytes();
    assert_eq!(&frames[0][2..], [b"sta".as_slice(), &suffix].concat());
    assert_eq!(&frames[2][2..], [b"ng".as_slice(), &suffix].concat());
}

#[test]
fn alignment_grows_each_frame_by_exactly_four_bytes() {
    let (mut plain, _handles) =
        create_test_device(MockEncoder::new(), wide_limits(), false, OperatingMode::ClassA);
    let (mut aligned, _handles) =
        create_test_device(MockEncoder::new(), wide_limits(), false, OperatingMode::ClassA);
    aligned.state_mut().session.align_to_current_time = true;

    let plain_len = plain.create_uplink()[0].len();
    let aligned_len = aligned.create_uplink()[0].len();

    assert_eq!(aligned_len, plain_len + 4);
}

#[test]
fn ping_slot_request_switches_class_during_assembly() {
    let (mut device, handles) =
        create_test_device(MockEncoder::new(), wide_limits(), false, OperatingMode::ClassB);
    {
        let session = &mut device.state_mut().session;
        session.class_b_supported = true;
        session.class_b_active = true;
        session.ping_slot_info_requested = true;
    }

    device.create_uplink();

    assert!(!device.state().session.class_b_active);
    assert_eq!(handles.scheduler.borrow().switches, [OperatingMode::ClassA]);
}

#[test]
fn ack_and_empty_frame_fall_back_to_zero_length_on_failure() {
    let (mut device, handles) = create_test_device(
        MockEncoder::failing(),
        wide_limits(),
        false,
        OperatingMode::ClassA,
    );

    assert!(device.create_ack().is_empty());
    assert!(device.create_empty_frame().is_empty());
    assert_eq!(handles.logs.borrow().len(), 2);
}

#[test]
fn ack_frame_sets_the_ack_flag() {
    let (mut device, _handles) =
        create_test_device(MockEncoder::new(), wide_limits(), false, OperatingMode::ClassA);

    let ack = device.create_ack();
    assert_eq!(ack[0], MType::UnconfirmedDataUp as u8);
    assert_eq!(ack[1], 1);
    assert_eq!(ack.len(), 2);

    let empty = device.create_empty_frame();
    assert_eq!(empty[1], 0);
}

#[test]
fn send_ack_reaches_the_scheduler_and_logs() {
    let (mut device, handles) =
        create_test_device(MockEncoder::new(), wide_limits(), false, OperatingMode::ClassA);

    device.send_ack();

    {
        let log = handles.scheduler.borrow();
        assert_eq!(log.sent.len(), 1);
        assert!(!log.sent[0].1);
    }
    assert!(handles
        .logs
        .borrow()
        .iter()
        .any(|entry| entry.contains("ACK sent")));
}

#[test]
fn join_request_is_flagged_for_the_scheduler() {
    let (mut device, handles) =
        create_test_device(MockEncoder::new(), wide_limits(), false, OperatingMode::ClassA);

    device.send_join_request();

    let log = handles.scheduler.borrow();
    assert_eq!(log.sent.len(), 1);
    assert!(log.sent[0].1);
    assert_eq!(log.sent[0].0[0], MType::JoinRequest as u8);
}

#[test]
fn failed_join_encoding_schedules_nothing() {
    let (mut device, handles) = create_test_device(
        MockEncoder::failing(),
        wide_limits(),
        false,
        OperatingMode::ClassA,
    );

    device.send_join_request();

    assert!(handles.scheduler.borrow().sent.is_empty());
    assert!(handles
        .logs
        .borrow()
        .iter()
        .any(|entry| entry.contains("join request encoding failed")));
}
