use std::process::ExitCode;

use tracing::{debug, info};

use crate::clock::MonotonicClock;
use crate::config::PalConfig;
use crate::fatal::{self, FatalError};
use crate::frame::PalServices;
use crate::input::{EventQueue, InputTranslator};
use crate::traits::{Application, HostSubstrate, TickSource, TouchChannel};
use crate::vfs::FileTable;

/// Nominal delta handed to the very first update, so it never sees a
/// degenerate zero-length frame. The value is a contract, not a tunable.
pub const NOMINAL_FIRST_DELTA: f64 = 0.1;

/// Lifecycle of the frame loop. Host-level pauses happen opaquely inside the
/// keep-running probe and are not observable as a distinct state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Uninitialized,
    Running,
    Terminated,
}

/// How a completed run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Host stop signal or application quit request.
    Clean,
    /// A fatal error was reported and acknowledged.
    Fatal,
}

impl RunOutcome {
    /// Process exit code for this outcome: 0 clean, 1 fatal.
    pub fn exit_code(self) -> ExitCode {
        match self {
            RunOutcome::Clean => ExitCode::SUCCESS,
            RunOutcome::Fatal => ExitCode::FAILURE,
        }
    }
}

/// Owns the process-lifetime state of the adaptation layer and drives one
/// application update per host-permitted iteration.
pub struct FrameDriver<A, H> {
    app: A,
    host: H,
    files: FileTable,
    clock: MonotonicClock,
    translator: InputTranslator,
    events: EventQueue,
    state: LifecycleState,
    /// Elapsed-seconds reading of the previous iteration.
    previous: f64,
    quit_requested: bool,
}

impl<A: Application, H: HostSubstrate> FrameDriver<A, H> {
    pub fn new(app: A, host: H) -> Self {
        let clock = MonotonicClock::new(host.ticks_per_second());
        Self {
            app,
            host,
            files: FileTable::new(),
            clock,
            translator: InputTranslator::new(),
            events: EventQueue::new(),
            state: LifecycleState::Uninitialized,
            previous: 0.0,
            quit_requested: false,
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// The hosted application, for inspection after a run.
    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Initialize once, then iterate until the host substrate signals stop,
    /// the application requests quit, or a fatal error is raised.
    pub fn run(&mut self, config: &PalConfig) -> RunOutcome {
        assert_eq!(
            self.state,
            LifecycleState::Uninitialized,
            "frame driver can only run once"
        );

        if let Err(err) = self.boot(config) {
            return self.terminate_fatal(&err);
        }

        // The keep-running probe may suspend the whole process for an
        // unbounded duration before answering; the clock reflects whatever
        // time passed, with no correction attempted.
        while self.host.keep_running() && !self.quit_requested {
            if let Err(err) = self.iterate() {
                return self.terminate_fatal(&err);
            }
        }

        self.app.shutdown();
        self.host.release();
        self.state = LifecycleState::Terminated;
        info!("clean exit");
        RunOutcome::Clean
    }

    fn boot(&mut self, config: &PalConfig) -> Result<(), FatalError> {
        self.host.prepare();

        let mut services =
            PalServices::new(&mut self.files, &mut self.events, &mut self.quit_requested);
        self.app.init(config, &mut services)?;
        TouchChannel::init(&mut self.host);

        // Seed the previous timestamp so the first computed delta is the
        // fixed nominal frame rather than zero.
        self.previous = self.now() - NOMINAL_FIRST_DELTA;
        self.state = LifecycleState::Running;
        info!("application initialized");
        Ok(())
    }

    fn iterate(&mut self) -> Result<(), FatalError> {
        self.translator
            .poll_and_dispatch(&mut self.host, &mut self.events);

        let now = self.now();
        let delta = now - self.previous;
        debug!(delta, "frame");

        let mut services =
            PalServices::new(&mut self.files, &mut self.events, &mut self.quit_requested);
        self.app.update(delta, &mut services)?;

        self.previous = now;
        Ok(())
    }

    fn now(&mut self) -> f64 {
        let ticks = self.host.raw_ticks();
        self.clock.elapsed_seconds(ticks)
    }

    fn terminate_fatal(&mut self, err: &FatalError) -> RunOutcome {
        fatal::report(err, &mut self.host);
        self.app.shutdown();
        self.host.release();
        self.state = LifecycleState::Terminated;
        RunOutcome::Fatal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ScriptedHost;
    use crate::input::KeyCode;
    use crate::traits::{RawButtons, RawInputState};

    /// Application that records everything the driver feeds it.
    #[derive(Default)]
    struct RecordingApp {
        inits: usize,
        deltas: Vec<f64>,
        events_seen: Vec<KeyCode>,
        shutdowns: usize,
        quit_after: Option<usize>,
        fail_update: bool,
    }

    impl Application for RecordingApp {
        fn init(
            &mut self,
            _config: &PalConfig,
            _pal: &mut PalServices<'_>,
        ) -> Result<(), FatalError> {
            self.inits += 1;
            Ok(())
        }

        fn update(
            &mut self,
            delta_seconds: f64,
            pal: &mut PalServices<'_>,
        ) -> Result<(), FatalError> {
            if self.fail_update {
                return Err(FatalError::msg("update blew up"));
            }
            self.deltas.push(delta_seconds);
            self.events_seen.extend(pal.events.drain().map(|e| e.code));
            if self.quit_after == Some(self.deltas.len()) {
                pal.request_quit();
            }
            Ok(())
        }

        fn shutdown(&mut self) {
            self.shutdowns += 1;
        }
    }

    fn driver_with_frames(frames: usize) -> FrameDriver<RecordingApp, ScriptedHost> {
        let mut host = ScriptedHost::new();
        host.allow_frames(frames);
        FrameDriver::new(RecordingApp::default(), host)
    }

    #[test]
    fn first_delta_is_exactly_nominal_with_frozen_clock() {
        let mut driver = driver_with_frames(1);
        let outcome = driver.run(&PalConfig::default());

        assert_eq!(outcome, RunOutcome::Clean);
        assert_eq!(driver.app().deltas, vec![NOMINAL_FIRST_DELTA]);
    }

    #[test]
    fn init_runs_once_and_shutdown_runs_once() {
        let mut driver = driver_with_frames(3);
        driver.run(&PalConfig::default());

        assert_eq!(driver.app().inits, 1);
        assert_eq!(driver.app().shutdowns, 1);
        assert_eq!(driver.state(), LifecycleState::Terminated);
    }

    #[test]
    fn delta_tracks_tick_advance() {
        let mut driver = driver_with_frames(3);
        // 16 ticks at 1000 ticks/s = 16 ms per frame.
        driver.host.set_tick_step(16);
        driver.run(&PalConfig::default());

        let deltas = &driver.app().deltas;
        assert_eq!(deltas.len(), 3);
        assert!((deltas[1] - 0.016).abs() < 1e-9);
        assert!((deltas[2] - 0.016).abs() < 1e-9);
    }

    #[test]
    fn host_stop_signal_ends_the_loop_cleanly() {
        let mut driver = driver_with_frames(5);
        let outcome = driver.run(&PalConfig::default());

        assert_eq!(outcome, RunOutcome::Clean);
        assert_eq!(driver.app().deltas.len(), 5);
    }

    #[test]
    fn app_quit_request_ends_the_loop_cleanly() {
        let mut host = ScriptedHost::new();
        host.allow_frames(100);
        let mut driver = FrameDriver::new(
            RecordingApp {
                quit_after: Some(2),
                ..RecordingApp::default()
            },
            host,
        );

        let outcome = driver.run(&PalConfig::default());

        assert_eq!(outcome, RunOutcome::Clean);
        assert_eq!(driver.app().deltas.len(), 2);
        assert_eq!(driver.app().shutdowns, 1);
    }

    #[test]
    fn key_events_reach_the_application() {
        let mut host = ScriptedHost::new();
        host.allow_frames(2);
        host.input.press(RawButtons::A);
        host.input.release(RawButtons::A);
        let mut driver = FrameDriver::new(RecordingApp::default(), host);

        driver.run(&PalConfig::default());

        assert_eq!(
            driver.app().events_seen,
            vec![KeyCode::ActionA, KeyCode::ActionA]
        );
    }

    #[test]
    fn fatal_update_reports_then_shuts_down() {
        let mut host = ScriptedHost::new();
        host.allow_frames(10);
        // One idle scan for the first iteration's poll, then the
        // acknowledging START press for the reporter's wait loop.
        host.input.queue(RawInputState::default());
        host.input.press(RawButtons::START);
        let mut driver = FrameDriver::new(
            RecordingApp {
                fail_update: true,
                ..RecordingApp::default()
            },
            host,
        );

        let outcome = driver.run(&PalConfig::default());

        assert_eq!(outcome, RunOutcome::Fatal);
        assert_eq!(driver.app().shutdowns, 1);
        assert_eq!(driver.host().fatal_messages.len(), 1);
        assert!(driver.host().fatal_messages[0].contains("update blew up"));
        assert_eq!(driver.state(), LifecycleState::Terminated);
    }

    #[test]
    fn touch_channel_initialized_once_at_boot() {
        let mut driver = driver_with_frames(3);
        driver.run(&PalConfig::default());

        assert_eq!(driver.host().touch_inits(), 1);
        assert_eq!(driver.host().touch_polls(), 3);
    }

    #[test]
    fn host_prepare_hook_runs_before_init() {
        let mut driver = driver_with_frames(0);
        driver.run(&PalConfig::default());

        assert!(driver.host().prepared());
    }

    #[test]
    fn host_resources_released_on_clean_exit() {
        let mut driver = driver_with_frames(2);
        let outcome = driver.run(&PalConfig::default());

        assert_eq!(outcome, RunOutcome::Clean);
        assert!(driver.host().released());
    }

    #[test]
    fn host_resources_released_after_fatal() {
        let mut host = ScriptedHost::new();
        host.allow_frames(10);
        host.input.queue(RawInputState::default());
        host.input.press(RawButtons::START);
        let mut driver = FrameDriver::new(
            RecordingApp {
                fail_update: true,
                ..RecordingApp::default()
            },
            host,
        );

        let outcome = driver.run(&PalConfig::default());

        assert_eq!(outcome, RunOutcome::Fatal);
        assert!(driver.host().released());
    }
}
