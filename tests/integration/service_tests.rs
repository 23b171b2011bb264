//! Integration tests for the ControlService → dispatcher → publish pipeline.
//!
//! These run on the host and verify the full tick chain — acquisition,
//! mode dispatch, polarity, delivery, and event emission — against mock
//! adapters.

use super::mock_io::{MockIo, RecordingSink};

use ventctrl::app::events::AppEvent;
use ventctrl::app::service::{ControlService, TickOutcome};
use ventctrl::config::ControllerConfig;
use ventctrl::control::dispatch::Reading;
use ventctrl::control::fan_logic::FanSpeed;
use ventctrl::error::{AcquisitionError, PublishError};

fn reading(mode: i32) -> Reading {
    Reading {
        temperature_c: 25.0,
        mode,
        sp1_c: 20.0,
        sp2_c: 30.0,
        sp3_c: 15.0,
        eco_sp_c: 15.0,
    }
}

fn make_app() -> (ControlService, RecordingSink) {
    let mut sink = RecordingSink::new();
    let app = ControlService::new(ControllerConfig::default());
    app.start(&mut sink);
    (app, sink)
}

// ── Happy path: auto mode computes and publishes ─────────────

#[test]
fn auto_mode_publishes_per_fan_commands() {
    let (mut app, mut sink) = make_app();
    let mut io = MockIo::new(reading(1));

    let outcome = app.tick(&mut io, &mut sink);

    assert_eq!(outcome, TickOutcome::Published);
    let cmds = io.last_published().expect("commands should be delivered");
    // temp 25 vs sp 20/30/15 → deltas 5 / -5 / 10
    assert!(cmds[0].state);
    assert_eq!(cmds[0].speed, FanSpeed::Medium);
    assert!(!cmds[1].state);
    assert_eq!(cmds[1].speed, FanSpeed::Off);
    assert!(cmds[2].state);
    assert_eq!(cmds[2].speed, FanSpeed::High);

    // Telemetry event carries the same command set.
    let telemetry = sink.events.iter().find_map(|e| match e {
        AppEvent::CommandsPublished(t) => Some(t),
        _ => None,
    });
    let t = telemetry.expect("telemetry event should be emitted");
    assert_eq!(t.commands, *cmds);
    assert_eq!(t.mode, 1);
    assert_eq!(t.tick, 1);
}

// ── Manual mode: absence of output, not all-false ────────────

#[test]
fn manual_mode_publishes_nothing() {
    let (mut app, mut sink) = make_app();
    let mut io = MockIo::new(reading(0));

    let outcome = app.tick(&mut io, &mut sink);

    assert_eq!(outcome, TickOutcome::ManualNoOverride);
    assert!(io.published.is_empty(), "manual mode must not override outputs");
    assert!(
        !sink
            .events
            .iter()
            .any(|e| matches!(e, AppEvent::CommandsPublished(_))),
        "manual mode must not emit command telemetry"
    );
}

// ── Eco mode polarity at the service level ───────────────────

#[test]
fn eco_inverted_vs_direct_symmetry() {
    let (mut app, mut sink) = make_app();

    let mut io = MockIo::new(reading(2));
    assert_eq!(app.tick(&mut io, &mut sink), TickOutcome::Published);
    let inverted = *io.last_published().unwrap();

    io.next_reading = Ok(reading(3));
    assert_eq!(app.tick(&mut io, &mut sink), TickOutcome::Published);
    let direct = *io.last_published().unwrap();

    for (inv, dir) in inverted.iter().zip(direct.iter()) {
        assert!(!inv.state, "eco-inverted turns fans off when hot");
        assert!(dir.state, "eco-direct turns fans on when hot");
        assert_eq!(inv.speed, FanSpeed::High);
        assert_eq!(dir.speed, FanSpeed::High);
    }
}

// ── Acquisition failure: skip the whole tick ─────────────────

#[test]
fn acquisition_failure_skips_tick_without_publish() {
    let (mut app, mut sink) = make_app();
    let mut io = MockIo::failing_acquisition(AcquisitionError::Timeout);

    let outcome = app.tick(&mut io, &mut sink);

    assert_eq!(outcome, TickOutcome::SkippedAcquisition);
    assert!(io.published.is_empty());
    assert!(sink.events.contains(&AppEvent::AcquisitionFailed(AcquisitionError::Timeout)));
}

#[test]
fn next_tick_recovers_after_acquisition_failure() {
    let (mut app, mut sink) = make_app();
    let mut io = MockIo::failing_acquisition(AcquisitionError::ChannelUnavailable);

    assert_eq!(app.tick(&mut io, &mut sink), TickOutcome::SkippedAcquisition);

    // The next scheduled tick naturally retries with a good snapshot.
    io.next_reading = Ok(reading(1));
    assert_eq!(app.tick(&mut io, &mut sink), TickOutcome::Published);
    assert_eq!(io.published.len(), 1);
    assert_eq!(app.tick_count(), 2);
}

// ── Publish failure: reported, not retried, self-corrects ────

#[test]
fn publish_failure_is_reported_not_retried() {
    let (mut app, mut sink) = make_app();
    let mut io = MockIo::new(reading(3));
    io.publish_error = Some(PublishError::Disconnected);

    let outcome = app.tick(&mut io, &mut sink);

    assert_eq!(outcome, TickOutcome::PublishFailed);
    assert!(io.published.is_empty());
    assert!(sink.events.contains(&AppEvent::PublishFailed(PublishError::Disconnected)));

    // Level-triggered: the next successful tick delivers fresh commands.
    io.publish_error = None;
    assert_eq!(app.tick(&mut io, &mut sink), TickOutcome::Published);
    assert_eq!(io.published.len(), 1);
}

// ── Unrecognized mode: warned no-override ────────────────────

#[test]
fn unknown_mode_warns_and_publishes_nothing() {
    let (mut app, mut sink) = make_app();
    let mut io = MockIo::new(reading(9));

    let outcome = app.tick(&mut io, &mut sink);

    assert_eq!(outcome, TickOutcome::UnknownMode(9));
    assert!(io.published.is_empty());
    assert!(sink.events.contains(&AppEvent::UnrecognizedMode(9)));
}

// ── Statelessness across ticks ───────────────────────────────

#[test]
fn each_tick_rederives_from_current_snapshot() {
    let (mut app, mut sink) = make_app();
    let mut io = MockIo::new(reading(1));
    assert_eq!(app.tick(&mut io, &mut sink), TickOutcome::Published);

    // Cool below every setpoint: all fans must drop out, independent of
    // anything the previous tick computed.
    let mut cooled = reading(1);
    cooled.temperature_c = 10.0;
    io.next_reading = Ok(cooled);
    assert_eq!(app.tick(&mut io, &mut sink), TickOutcome::Published);

    let cmds = io.last_published().unwrap();
    for c in cmds {
        assert!(!c.state);
        assert_eq!(c.speed, FanSpeed::Off);
    }
}
