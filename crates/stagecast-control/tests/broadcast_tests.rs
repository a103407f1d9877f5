//! End-to-end broadcast tests over a loopback socket.

use std::net::UdpSocket;
use std::sync::Arc;
use std::time::Duration;

use stagecast_core::{
    Keyframe, LightingCue, LightingEvent, LightingType, PauseState, PerformanceSnapshot, Scene,
    ShowState, VenueSize,
};
use stagecast_control::{wire, BroadcastConfig, Broadcaster, Datagram, DATAGRAM_LEN, MAGIC};

fn bind_receiver() -> UdpSocket {
    let socket = UdpSocket::bind("127.0.0.1:0").expect("bind receiver");
    socket
        .set_read_timeout(Some(Duration::from_secs(2)))
        .unwrap();
    socket
}

fn config_for(receiver: &UdpSocket, frequency_hz: u32) -> BroadcastConfig {
    let addr = receiver.local_addr().unwrap();
    BroadcastConfig {
        address: addr.ip(),
        port: addr.port(),
        frequency_hz,
    }
}

fn recv_datagram(receiver: &UdpSocket) -> Datagram {
    let mut buf = [0u8; 64];
    let len = receiver.recv(&mut buf).expect("datagram within timeout");
    wire::decode(&buf[..len]).expect("well-formed datagram")
}

#[test]
fn test_stream_carries_producer_state() {
    let receiver = bind_receiver();
    let config = config_for(&receiver, 200);
    let state = Arc::new(ShowState::new(config.frequency_hz));
    let mut broadcaster = Broadcaster::new(Arc::clone(&state), config);

    broadcaster.enable().unwrap();
    state.set_scene(Scene::Gameplay);
    state.set_pause(PauseState::Unpaused);
    state.set_tempo(174.0);
    state.set_venue_size(VenueSize::Small);
    state.apply_lighting_event(LightingEvent::new(LightingType::Sweep, 10.0));
    state.enqueue_notes(7, 3, 2, 1);

    // The raw frame is exactly one fixed-size datagram with the magic up
    // front.
    let mut buf = [0u8; 128];
    let len = receiver.recv(&mut buf).expect("first datagram");
    assert_eq!(len, DATAGRAM_LEN);
    assert_eq!(&buf[0..4], &MAGIC);

    // Within a few ticks every producer write is on the wire.
    let mut seen = recv_datagram(&receiver);
    for _ in 0..200 {
        if seen.snapshot.bpm == 174.0 && seen.counts.drums == 7 {
            break;
        }
        seen = recv_datagram(&receiver);
    }
    assert_eq!(seen.snapshot.scene, Scene::Gameplay);
    assert_eq!(seen.snapshot.pause, PauseState::Unpaused);
    assert_eq!(seen.snapshot.bpm, 174.0);
    assert_eq!(seen.snapshot.venue_size, VenueSize::Small);
    assert_eq!(seen.snapshot.lighting_cue, LightingCue::Sweep);
    assert_eq!(seen.counts.drums, 7);
    assert_eq!(seen.counts.guitar, 3);
    assert_eq!(seen.counts.bass, 2);
    assert_eq!(seen.counts.keys, 1);

    // Queue underrun after the one enqueued batch: the counts hold at their
    // last dequeued values instead of dropping to garbage.
    let next = recv_datagram(&receiver);
    assert_eq!(next.counts.drums, 7);
    assert_eq!(next.counts.keys, 1);

    broadcaster.shutdown();
}

#[test]
fn test_edge_fields_pulse_for_one_datagram() {
    let receiver = bind_receiver();
    // 50 Hz leaves a 20ms window, so all three edge writes land in the same
    // tick.
    let config = config_for(&receiver, 50);
    let state = Arc::new(ShowState::new(config.frequency_hz));
    let mut broadcaster = Broadcaster::new(Arc::clone(&state), config);

    broadcaster.enable().unwrap();
    state.pulse_beat(5);
    state.trigger_bonus_effect();
    state.apply_lighting_event(LightingEvent::new(LightingType::KeyframeFirst, 1.0));

    // Find the datagram carrying the pulse.
    let mut pulse = recv_datagram(&receiver);
    for _ in 0..100 {
        if pulse.snapshot.beat.is_some()
            && pulse.snapshot.bonus_effect
            && pulse.snapshot.keyframe == Keyframe::First
        {
            break;
        }
        pulse = recv_datagram(&receiver);
    }
    assert_eq!(pulse.snapshot.beat, Some(5));

    // The very next datagram reads all three edge fields as off again.
    let after = recv_datagram(&receiver);
    assert_eq!(after.snapshot.beat, None);
    assert_eq!(after.snapshot.keyframe, Keyframe::Off);
    assert!(!after.snapshot.bonus_effect);

    broadcaster.shutdown();
}

#[test]
fn test_shutdown_sends_exactly_one_blackout_datagram() {
    let receiver = bind_receiver();
    let config = config_for(&receiver, 200);
    let state = Arc::new(ShowState::new(config.frequency_hz));
    let mut broadcaster = Broadcaster::new(Arc::clone(&state), config);

    broadcaster.enable().unwrap();
    state.set_pause(PauseState::Unpaused);
    state.enqueue_notes(7, 0, 0, 0);
    let _ = recv_datagram(&receiver);

    // Stop the periodic stream and drain whatever was in flight.
    broadcaster.disable();
    receiver
        .set_read_timeout(Some(Duration::from_millis(200)))
        .unwrap();
    let mut buf = [0u8; 64];
    while receiver.recv(&mut buf).is_ok() {}

    // Shutdown emits exactly one final datagram, all fields at their
    // defaults regardless of the pre-exit state.
    receiver
        .set_read_timeout(Some(Duration::from_secs(2)))
        .unwrap();
    broadcaster.shutdown();
    let blackout = recv_datagram(&receiver);
    assert_eq!(blackout.snapshot, PerformanceSnapshot::default());
    assert_eq!(blackout.counts.drums, 0);
    assert_eq!(blackout.counts.guitar, 0);

    // And nothing after it.
    receiver
        .set_read_timeout(Some(Duration::from_millis(200)))
        .unwrap();
    assert!(receiver.recv(&mut buf).is_err());
}

#[test]
fn test_disable_then_reenable_starts_from_clean_state() {
    let receiver = bind_receiver();
    let config = config_for(&receiver, 200);
    let state = Arc::new(ShowState::new(config.frequency_hz));
    let mut broadcaster = Broadcaster::new(Arc::clone(&state), config);

    broadcaster.enable().unwrap();
    state.set_tempo(199.0);
    state.enqueue_notes(9, 9, 9, 9);
    state.enqueue_notes(8, 8, 8, 8);
    broadcaster.disable();

    // Drain every datagram from the first session before restarting.
    let mut buf = [0u8; 64];
    receiver
        .set_read_timeout(Some(Duration::from_millis(200)))
        .unwrap();
    while receiver.recv(&mut buf).is_ok() {}

    // Queues were flushed on disable and the store reset on enable, so the
    // new session's datagrams carry defaults, not stale state.
    broadcaster.enable().unwrap();
    receiver
        .set_read_timeout(Some(Duration::from_secs(2)))
        .unwrap();
    let fresh = recv_datagram(&receiver);
    assert_eq!(fresh.snapshot.bpm, 0.0);
    assert_eq!(fresh.counts.drums, 0);

    broadcaster.shutdown();
}
