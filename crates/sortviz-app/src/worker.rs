//! Background run controller for the sortviz window
//!
//! A run blocks its thread for the whole sort (every step sleeps for the
//! pacing delay), so the controller lives on a dedicated thread and the UI
//! talks to it through two channels:
//!
//! - UI → worker: [`WorkerCommand`] (start, reset, shutdown)
//! - worker → UI: [`WorkerEvent`] (frames, label changes, state changes)
//!
//! Stop requests bypass the command queue and go straight to the shared
//! [`StopToken`], since the worker is busy inside a run when they matter.
//! A start claims the token before it is queued, so a stop that arrives
//! before the worker picks the start up cancels it instead of being lost.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use anyhow::Context;
use sortviz_core::config::VisualizerConfig;
use sortviz_core::{Algorithm, Frame, RunController, RunState, Snapshot, StepSink, StopToken, Tone};

#[cfg(feature = "audio")]
use sortviz_core::audio::{output_device_names, AudioError, ToneOutput};

/// Request from the UI thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerCommand {
    Start(Algorithm),
    Reset,
    Shutdown,
}

/// Update from the worker thread
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerEvent {
    /// A rendered step (or an idle redraw)
    Frame(Snapshot),
    /// The "Algorithm:" label changed
    Algorithm(Option<Algorithm>),
    /// The controller changed state
    State(RunState),
}

/// Step sink that forwards frames to the UI and tones to the audio device
pub struct WorkerSink {
    events: Sender<WorkerEvent>,
    #[cfg(feature = "audio")]
    tone: Option<ToneOutput>,
}

impl WorkerSink {
    fn new(events: Sender<WorkerEvent>, config: &VisualizerConfig) -> Self {
        #[cfg(feature = "audio")]
        let tone = match ToneOutput::start(&config.audio) {
            Ok(output) => {
                log::info!("Tone output running at {} Hz", output.sample_rate());
                Some(output)
            }
            Err(AudioError::Unavailable) => {
                log::info!("Tone output disabled");
                None
            }
            Err(e @ AudioError::DeviceNotFound(_)) => {
                match output_device_names() {
                    Ok(names) => log::warn!("{}; available devices: {}", e, names.join(", ")),
                    Err(_) => log::warn!("{}", e),
                }
                None
            }
            Err(e) => {
                log::warn!("Tone output unavailable, running silent: {}", e);
                None
            }
        };
        #[cfg(not(feature = "audio"))]
        log::info!(
            "Built without audio support, running silent (audio.enabled = {})",
            config.audio.enabled
        );

        Self {
            events,
            #[cfg(feature = "audio")]
            tone,
        }
    }

    fn send(&self, event: WorkerEvent) {
        // The UI going away is handled by the shutdown path
        let _ = self.events.send(event);
    }
}

impl StepSink for WorkerSink {
    fn render(&mut self, frame: &Frame<'_>) {
        self.send(WorkerEvent::Frame(frame.to_snapshot()));
    }

    #[cfg(feature = "audio")]
    fn play_tone(&mut self, tone: Tone) -> anyhow::Result<()> {
        match self.tone.as_mut() {
            Some(output) => Ok(output.play(tone)?),
            None => Err(AudioError::Unavailable.into()),
        }
    }

    #[cfg(not(feature = "audio"))]
    fn play_tone(&mut self, tone: Tone) -> anyhow::Result<()> {
        anyhow::bail!("no tone output for {} Hz", tone.frequency)
    }

    fn algorithm_changed(&mut self, algorithm: Option<Algorithm>) {
        self.send(WorkerEvent::Algorithm(algorithm));
    }
}

/// Owner-side handle to the worker thread; dropping it shuts the worker down
pub struct WorkerHandle {
    commands: Sender<WorkerCommand>,
    events: Arc<Mutex<Receiver<WorkerEvent>>>,
    token: StopToken,
    thread: Option<JoinHandle<()>>,
}

impl WorkerHandle {
    /// Spawn the worker with a freshly shuffled permutation
    ///
    /// The tone output is opened on the worker thread, since audio streams
    /// are not guaranteed to be `Send`.
    pub fn spawn(config: VisualizerConfig) -> anyhow::Result<Self> {
        let (command_tx, command_rx) = mpsc::channel::<WorkerCommand>();
        let (event_tx, event_rx) = mpsc::channel::<WorkerEvent>();
        let (ready_tx, ready_rx) = mpsc::sync_channel(1);

        let thread = thread::Builder::new()
            .name("sortviz-runner".to_string())
            .spawn(move || {
                let sink = WorkerSink::new(event_tx, &config);
                match RunController::new(config, sink) {
                    Ok(controller) => {
                        let _ = ready_tx.send(Ok(controller.stop_token()));
                        worker_loop(controller, command_rx);
                    }
                    Err(e) => {
                        let _ = ready_tx.send(Err(e));
                    }
                }
            })
            .context("failed to spawn run controller thread")?;

        let token = ready_rx
            .recv()
            .context("run controller thread exited during startup")??;

        log::info!("Run controller thread started");

        Ok(Self {
            commands: command_tx,
            events: Arc::new(Mutex::new(event_rx)),
            token,
            thread: Some(thread),
        })
    }

    /// Start a run unless one is already in progress
    ///
    /// Returns whether the request was forwarded.
    pub fn request_start(&self, algorithm: Algorithm) -> bool {
        if !self.token.claim() {
            log::debug!("Ignoring start of {}: a run is in progress or pending", algorithm);
            return false;
        }
        if self.commands.send(WorkerCommand::Start(algorithm)).is_err() {
            self.token.request_stop();
            return false;
        }
        true
    }

    /// Interrupt the current run or cancel a start not yet picked up;
    /// no-op when idle
    pub fn request_stop(&self) -> bool {
        self.token.request_stop()
    }

    /// Stop any run, then reshuffle and zero the counters
    pub fn request_reset(&self) {
        self.token.request_stop();
        let _ = self.commands.send(WorkerCommand::Reset);
    }

    pub fn is_running(&self) -> bool {
        self.token.is_running()
    }

    /// Receiver for [`WorkerEvent`]s, shared with the UI subscription
    pub fn events(&self) -> Arc<Mutex<Receiver<WorkerEvent>>> {
        Arc::clone(&self.events)
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        self.token.request_stop();
        let _ = self.commands.send(WorkerCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::error!("Run controller thread panicked");
            }
        }
    }
}

fn worker_loop(mut controller: RunController<WorkerSink>, commands: Receiver<WorkerCommand>) {
    controller.redraw();
    publish_state(&controller);

    while let Ok(command) = commands.recv() {
        match command {
            WorkerCommand::Start(algorithm) => {
                if controller.stop_token().is_pending() {
                    controller.sink().send(WorkerEvent::State(RunState::Running(algorithm)));
                }
                let outcome = controller.start_claimed(algorithm);
                log::debug!("{} finished: {:?}", algorithm, outcome);
                publish_state(&controller);
            }
            WorkerCommand::Reset => reset(&mut controller),
            WorkerCommand::Shutdown => break,
        }
    }

    log::info!("Run controller thread exiting");
}

fn reset(controller: &mut RunController<WorkerSink>) {
    controller.reset();
    publish_state(controller);
}

fn publish_state(controller: &RunController<WorkerSink>) {
    controller.sink().send(WorkerEvent::State(controller.state()));
}
