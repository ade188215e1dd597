//! Full-pipeline tests: raw button levels in, solenoid duties and
//! display lines out, with the real debouncers, engine, and PID in
//! between.  Only the hardware is mocked.

use boostctl::app::service::BoostService;
use boostctl::config::BoostConfig;
use boostctl::control::engine::BoostMode;

use crate::mock_hw::{CaptureSink, MockDisplay, MockHardware};

fn service() -> BoostService {
    BoostService::new(&BoostConfig::default())
}

/// Run `n` control ticks with the current button levels.
fn ticks(svc: &mut BoostService, hw: &mut MockHardware, sink: &mut CaptureSink, n: usize) {
    for _ in 0..n {
        svc.control_tick(hw, sink);
    }
}

/// One full debounced press and release of the mode button.
fn press_mode(svc: &mut BoostService, hw: &mut MockHardware, sink: &mut CaptureSink) {
    hw.mode_level = true;
    ticks(svc, hw, sink, 2);
    hw.mode_level = false;
    ticks(svc, hw, sink, 2);
}

/// One full debounced press and release of the up button.
fn press_up(svc: &mut BoostService, hw: &mut MockHardware, sink: &mut CaptureSink) {
    hw.up_level = true;
    ticks(svc, hw, sink, 2);
    hw.up_level = false;
    ticks(svc, hw, sink, 2);
}

#[test]
fn starts_off_with_solenoid_fail_safe() {
    let mut svc = service();
    let mut hw = MockHardware::new();
    let mut sink = CaptureSink::new();

    svc.start(&mut sink);
    ticks(&mut svc, &mut hw, &mut sink, 3);

    assert_eq!(svc.mode(), BoostMode::Off);
    assert!(hw.fail_safe_calls >= 3);
    assert!(hw.duty_history.iter().all(|&d| d == 0));
}

#[test]
fn toggle_into_open_loop_drives_configured_duty() {
    let mut svc = service();
    let mut hw = MockHardware::new();
    let mut sink = CaptureSink::new();

    press_mode(&mut svc, &mut hw, &mut sink);
    assert_eq!(svc.mode(), BoostMode::OpenLoop);
    assert_eq!(hw.last_duty(), Some(195));
    assert_eq!(sink.mode_changes(), 1);
}

#[test]
fn up_button_raises_open_loop_duty() {
    let mut svc = service();
    let mut hw = MockHardware::new();
    let mut sink = CaptureSink::new();

    press_mode(&mut svc, &mut hw, &mut sink);
    press_up(&mut svc, &mut hw, &mut sink);
    assert_eq!(hw.last_duty(), Some(196));
}

#[test]
fn glitch_on_mode_button_does_not_toggle() {
    let mut svc = service();
    let mut hw = MockHardware::new();
    let mut sink = CaptureSink::new();

    // One noisy sample — shorter than the 2-sample debounce window.
    hw.mode_level = true;
    ticks(&mut svc, &mut hw, &mut sink, 1);
    hw.mode_level = false;
    ticks(&mut svc, &mut hw, &mut sink, 3);

    assert_eq!(svc.mode(), BoostMode::Off);
    assert_eq!(sink.mode_changes(), 0);
}

#[test]
fn full_cycle_returns_to_off_and_fail_safe() {
    let mut svc = service();
    let mut hw = MockHardware::new();
    let mut sink = CaptureSink::new();

    press_mode(&mut svc, &mut hw, &mut sink); // OpenLoop
    press_mode(&mut svc, &mut hw, &mut sink); // ClosedLoop
    press_mode(&mut svc, &mut hw, &mut sink); // Off

    assert_eq!(svc.mode(), BoostMode::Off);
    assert_eq!(hw.last_duty(), Some(0));
    assert_eq!(sink.mode_changes(), 3);
}

#[test]
fn closed_loop_spooling_keeps_solenoid_shut() {
    let mut svc = service();
    let mut hw = MockHardware::new();
    let mut sink = CaptureSink::new();
    hw.psig = 2.0; // Far below the 8.0 PSI cutoff.

    press_mode(&mut svc, &mut hw, &mut sink);
    press_mode(&mut svc, &mut hw, &mut sink);
    assert_eq!(svc.mode(), BoostMode::ClosedLoop);

    ticks(&mut svc, &mut hw, &mut sink, 5);
    assert_eq!(hw.last_duty(), Some(0));
}

#[test]
fn closed_loop_priming_band_applies_priming_duty() {
    let mut svc = service();
    let mut hw = MockHardware::new();
    let mut sink = CaptureSink::new();

    press_mode(&mut svc, &mut hw, &mut sink);
    press_mode(&mut svc, &mut hw, &mut sink);

    hw.psig = 8.3;
    ticks(&mut svc, &mut hw, &mut sink, 1);
    assert_eq!(hw.last_duty(), Some(180));
}

#[test]
fn closed_loop_telemetry_records_flow_with_timestamps() {
    let mut svc = service();
    let mut hw = MockHardware::new();
    let mut sink = CaptureSink::new();
    hw.psig = 12.0;

    press_mode(&mut svc, &mut hw, &mut sink);
    press_mode(&mut svc, &mut hw, &mut sink);
    ticks(&mut svc, &mut hw, &mut sink, 4);

    let records = sink.telemetry_records();
    assert!(records.len() >= 4);
    // Timestamps strictly increase at the tick interval.
    for pair in records.windows(2) {
        assert!(pair[1].timestamp_ms > pair[0].timestamp_ms);
    }
    assert!(records.iter().all(|r| (r.setpoint - 13.0).abs() < 1e-6));
    assert!(records.iter().all(|r| (r.map_reading - 12.0).abs() < 1e-6));
}

#[test]
fn up_button_moves_closed_loop_setpoint() {
    let mut svc = service();
    let mut hw = MockHardware::new();
    let mut sink = CaptureSink::new();
    hw.psig = 12.0;

    press_mode(&mut svc, &mut hw, &mut sink);
    press_mode(&mut svc, &mut hw, &mut sink);
    press_up(&mut svc, &mut hw, &mut sink);

    let records = sink.telemetry_records();
    let last = records.last().unwrap();
    assert!((last.setpoint - 13.5).abs() < 1e-6);
}

#[test]
fn display_reflects_mode_and_clears_on_off() {
    let mut svc = service();
    let mut hw = MockHardware::new();
    let mut sink = CaptureSink::new();
    let mut display = MockDisplay::new();

    svc.display_tick(&mut display);
    assert_eq!(display.header, "EBC:     Off    ");
    assert!(display.status_cleared);

    press_mode(&mut svc, &mut hw, &mut sink);
    svc.display_tick(&mut display);
    assert_eq!(display.header, "EBC:   Open Loop");
    assert_eq!(display.status, "D 195 B 12.7 PSI");

    hw.psig = 12.4;
    press_mode(&mut svc, &mut hw, &mut sink);
    svc.display_tick(&mut display);
    assert_eq!(display.header, "EBC: Closed Loop");
    assert!(display.status.starts_with("T 13.0 B 12.4"));

    press_mode(&mut svc, &mut hw, &mut sink);
    svc.display_tick(&mut display);
    assert!(display.status_cleared);
}

#[test]
fn open_loop_duty_survives_a_trip_through_other_modes() {
    let mut svc = service();
    let mut hw = MockHardware::new();
    let mut sink = CaptureSink::new();

    press_mode(&mut svc, &mut hw, &mut sink); // OpenLoop
    press_up(&mut svc, &mut hw, &mut sink); // 196
    press_mode(&mut svc, &mut hw, &mut sink); // ClosedLoop
    press_mode(&mut svc, &mut hw, &mut sink); // Off
    press_mode(&mut svc, &mut hw, &mut sink); // OpenLoop again

    assert_eq!(hw.last_duty(), Some(196));
}
