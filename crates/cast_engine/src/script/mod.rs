//! Script of per-frame actions
//!
//! Actions are grouped into phases with an explicit order. Within a phase
//! actions run in registration order, each to completion, on one thread.

use crate::cast::{Cast, CastError};
use crate::input::InputManager;
use thiserror::Error;

/// Action execution phases with explicit ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    /// Input processing, player control
    Input = 0,
    /// Game logic: movement, collisions
    Update = 1,
    /// Presentation: messages, sound cues
    Output = 2,
}

impl Phase {
    /// All phases in execution order
    pub const ALL: [Self; 3] = [Self::Input, Self::Update, Self::Output];
}

/// Errors raised while executing an action
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The cast is missing something the action cannot run without
    #[error(transparent)]
    PreconditionViolation(#[from] CastError),

}

/// Per-frame data handed to every action
pub struct FrameContext<'a> {
    /// Frame number, starting at 1
    pub frame: u64,
    /// Seconds since the previous frame
    pub delta_time: f32,
    /// Input state pumped at the start of this frame
    pub input: &'a InputManager,
    exit_requested: bool,
}

impl<'a> FrameContext<'a> {
    /// Create a context for one frame
    pub const fn new(frame: u64, delta_time: f32, input: &'a InputManager) -> Self {
        Self {
            frame,
            delta_time,
            input,
            exit_requested: false,
        }
    }

    /// Ask the director to stop after this frame
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    /// Whether some action asked to stop
    pub const fn exit_requested(&self) -> bool {
        self.exit_requested
    }
}

/// A unit of per-frame behavior
pub trait Action {
    /// Name used in logs and errors
    fn name(&self) -> &str;

    /// Run once for the current frame
    fn execute(&mut self, cast: &mut Cast, frame: &mut FrameContext<'_>) -> Result<(), ActionError>;
}

/// Ordered collection of actions, grouped by phase
#[derive(Default)]
pub struct Script {
    input: Vec<Box<dyn Action>>,
    update: Vec<Box<dyn Action>>,
    output: Vec<Box<dyn Action>>,
}

impl Script {
    /// Create an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action to `phase`
    pub fn add_action(&mut self, phase: Phase, action: Box<dyn Action>) {
        log::debug!("Registering action '{}' in {:?} phase", action.name(), phase);
        self.phase_mut(phase).push(action);
    }

    /// Names of the actions in `phase`, in execution order
    pub fn action_names(&self, phase: Phase) -> Vec<&str> {
        self.phase(phase).iter().map(|action| action.name()).collect()
    }

    /// Total number of registered actions
    pub fn len(&self) -> usize {
        self.input.len() + self.update.len() + self.output.len()
    }

    /// True when no action is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Run every action once, phase by phase
    ///
    /// Stops at the first failing action; later actions do not run that frame.
    pub fn execute_frame(&mut self, cast: &mut Cast, frame: &mut FrameContext<'_>) -> Result<(), ActionError> {
        for phase in Phase::ALL {
            for action in self.phase_mut(phase).iter_mut() {
                if let Err(err) = action.execute(cast, frame) {
                    log::error!("Action '{}' failed on frame {}: {}", action.name(), frame.frame, err);
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    fn phase(&self, phase: Phase) -> &[Box<dyn Action>] {
        match phase {
            Phase::Input => &self.input,
            Phase::Update => &self.update,
            Phase::Output => &self.output,
        }
    }

    fn phase_mut(&mut self, phase: Phase) -> &mut Vec<Box<dyn Action>> {
        match phase {
            Phase::Input => &mut self.input,
            Phase::Update => &mut self.update,
            Phase::Output => &mut self.output,
        }
    }
}
