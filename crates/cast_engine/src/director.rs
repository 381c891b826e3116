//! Frame loop driving a script against a cast

use crate::{
    cast::Cast,
    foundation::time::Timer,
    input::{InputManager, InputSource},
    script::{ActionError, FrameContext, Script},
};
use thiserror::Error;

/// Director configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorConfig {
    /// Target frames per second (0 = run as fast as possible)
    pub frame_rate: u32,
    /// Stop after this many frames (`None` = until asked to stop)
    pub max_frames: Option<u64>,
}

impl Default for DirectorConfig {
    fn default() -> Self {
        Self {
            frame_rate: 12,
            max_frames: None,
        }
    }
}

/// What happened during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames fully executed
    pub frames: u64,
    /// Why the loop stopped
    pub stop_reason: StopReason,
}

/// Why the director stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The input source asked to close
    CloseRequested,
    /// An action requested exit
    ExitRequested,
    /// The frame limit was reached
    FrameLimit,
}

/// Director-level errors
#[derive(Error, Debug)]
pub enum DirectorError {
    /// An action failed; the frame was abandoned
    #[error("frame {frame} aborted: {source}")]
    Action {
        /// Frame that failed
        frame: u64,
        /// Underlying action error
        #[source]
        source: ActionError,
    },
}

/// Runs the script once per frame until something asks it to stop
///
/// Single-threaded: every action of frame N finishes before frame N+1
/// pumps input.
pub struct Director {
    input: InputManager,
    timer: Timer,
    config: DirectorConfig,
}

impl Director {
    /// Create a new director
    pub fn new(config: DirectorConfig) -> Self {
        Self {
            input: InputManager::new(),
            timer: Timer::new(config.frame_rate),
            config,
        }
    }

    /// Run the main loop
    pub fn run(
        &mut self,
        cast: &mut Cast,
        script: &mut Script,
        source: &mut dyn InputSource,
    ) -> Result<RunSummary, DirectorError> {
        log::info!(
            "Starting main loop ({} actions, {} fps)",
            script.len(),
            self.config.frame_rate
        );

        let mut frames = 0;
        let stop_reason = loop {
            if self.config.max_frames.is_some_and(|max| frames >= max) {
                break StopReason::FrameLimit;
            }

            self.timer.tick();
            source.pump(&mut self.input);
            if self.input.close_requested() {
                break StopReason::CloseRequested;
            }

            let frame_number = self.timer.frame_count();
            let mut frame = FrameContext::new(frame_number, self.timer.delta_time(), &self.input);
            script
                .execute_frame(cast, &mut frame)
                .map_err(|source| DirectorError::Action { frame: frame_number, source })?;
            frames += 1;

            if frame.exit_requested() {
                break StopReason::ExitRequested;
            }

            let idle = self.timer.remaining_budget();
            if !idle.is_zero() {
                std::thread::sleep(idle);
            }
        };

        log::info!(
            "Main loop stopped after {} frames ({:?}, {:.1} fps average)",
            frames,
            stop_reason,
            self.timer.average_fps()
        );
        Ok(RunSummary { frames, stop_reason })
    }
}
