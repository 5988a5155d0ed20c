//! Frame driver
//!
//! Runs the round on one thread. Everything outside it (hand detector, UI
//! buttons, window resizes) talks to it through a command channel, so the
//! ball collection is only ever touched between frames by the driver itself.
//! The spawn timer is polled once per frame against the wall clock, so it
//! keeps its own cadence no matter how often frames arrive.

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::config::GameConfig;
use crate::platform::{Clock, HandDetector};
use crate::sim::{Field, Hand, Round, RoundPhase, RoundSummary, TickOutcome};

/// Messages from collaborators
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Start (or restart) a round
    Start,
    /// End the current round
    Stop,
    /// Fresh hand snapshot from the detector
    Hands(Vec<Hand>),
    /// Playing surface changed size
    Resize(Field),
}

/// What happened during one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub phase: RoundPhase,
    pub outcome: TickOutcome,
    /// Balls added by the spawn timer this frame
    pub spawned: usize,
    /// Set when a round finished this frame (by falling out or by stop)
    pub finished: Option<RoundSummary>,
}

/// Owns the round and feeds it commands, clock readings and frames
pub struct Driver<C: Clock, D: HandDetector> {
    round: Round,
    clock: C,
    detector: D,
    detector_ready: bool,
    field: Field,
    commands: Receiver<Command>,
    sender: Sender<Command>,
}

impl<C: Clock, D: HandDetector> Driver<C, D> {
    pub fn new(config: GameConfig, clock: C, detector: D) -> Self {
        let (sender, commands) = unbounded();
        Self {
            field: config.field,
            round: Round::new(config),
            clock,
            detector,
            detector_ready: false,
            commands,
            sender,
        }
    }

    /// Handle for sending commands from other components or threads
    pub fn sender(&self) -> Sender<Command> {
        self.sender.clone()
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Run one frame: drain commands, fire due spawns, tick the round
    pub fn frame(&mut self) -> FrameReport {
        let mut finished = None;

        // The driver holds a sender itself, so the queue never disconnects
        while let Ok(command) = self.commands.try_recv() {
            if let Some(summary) = self.handle(command) {
                finished = Some(summary);
            }
        }

        let now = self.clock.now();
        let spawned = self.round.pump_spawns(now, self.field);

        let outcome = self.round.tick(self.field, now);
        if let TickOutcome::Ended(summary) = &outcome {
            finished = Some(*summary);
        }

        FrameReport {
            phase: self.round.phase(),
            outcome,
            spawned,
            finished,
        }
    }

    fn handle(&mut self, command: Command) -> Option<RoundSummary> {
        match command {
            Command::Start => {
                // A round cut short by a restart still counts
                let interrupted = self.round.stop();
                self.start_round();
                interrupted
            }
            Command::Stop => self.round.stop(),
            Command::Hands(hands) => {
                self.round.set_hands(hands);
                None
            }
            Command::Resize(field) => {
                log::debug!("Field resized to {}x{}", field.width, field.height);
                self.field = field;
                None
            }
        }
    }

    fn start_round(&mut self) {
        if !self.detector_ready {
            log::info!("Initializing hand tracking...");
            if let Err(err) = self.detector.init() {
                self.round.fail_start(&err);
                return;
            }
            self.detector_ready = true;
        }
        self.round.start(self.clock.now(), self.field);
    }
}
