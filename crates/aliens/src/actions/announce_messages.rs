//! Banner messages
//!
//! Rendering is out of scope; banners go to the log, once each.

use crate::groups::MESSAGES;
use cast_engine::prelude::*;

/// Logs new banner messages and ends the run once a banner has lingered
pub struct AnnounceMessagesAction {
    announced: usize,
    first_banner_frame: Option<u64>,
    linger_frames: u64,
}

impl AnnounceMessagesAction {
    /// Exit `linger_frames` frames after the first banner appears
    pub const fn new(linger_frames: u64) -> Self {
        Self {
            announced: 0,
            first_banner_frame: None,
            linger_frames,
        }
    }
}

impl Action for AnnounceMessagesAction {
    fn name(&self) -> &str {
        "announce-messages"
    }

    fn execute(&mut self, cast: &mut Cast, frame: &mut FrameContext<'_>) -> Result<(), ActionError> {
        let messages = cast.actors(MESSAGES)?;
        self.announced = self.announced.min(messages.len());

        for message in &messages[self.announced..] {
            log::info!("[{}] {}", message.position(), message.text());
        }
        self.announced = messages.len();

        if !messages.is_empty() && self.first_banner_frame.is_none() {
            self.first_banner_frame = Some(frame.frame);
        }
        if let Some(first) = self.first_banner_frame {
            if frame.frame.saturating_sub(first) >= self.linger_frames {
                frame.request_exit();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::frame_input;

    fn run_frame(action: &mut AnnounceMessagesAction, cast: &mut Cast, number: u64) -> bool {
        let input = frame_input();
        let mut frame = FrameContext::new(number, 0.0, &input);
        action.execute(cast, &mut frame).unwrap();
        frame.exit_requested()
    }

    #[test]
    fn test_no_banner_never_exits() {
        let mut action = AnnounceMessagesAction::new(0);
        let mut cast = Cast::new();
        cast.ensure_group(MESSAGES);

        assert!(!run_frame(&mut action, &mut cast, 1));
        assert!(!run_frame(&mut action, &mut cast, 100));
    }

    #[test]
    fn test_exit_after_linger() {
        let mut action = AnnounceMessagesAction::new(2);
        let mut cast = Cast::new();
        cast.ensure_group(MESSAGES);

        assert!(!run_frame(&mut action, &mut cast, 1));
        cast.add_actor(MESSAGES, Actor::message("Game Over!", Point::new(450, 300)));
        assert!(!run_frame(&mut action, &mut cast, 2));
        assert!(!run_frame(&mut action, &mut cast, 3));
        assert!(run_frame(&mut action, &mut cast, 4));
    }

    #[test]
    fn test_cleared_messages_do_not_panic() {
        let mut action = AnnounceMessagesAction::new(10);
        let mut cast = Cast::new();
        cast.add_actor(MESSAGES, Actor::message("one", Point::ZERO));
        cast.add_actor(MESSAGES, Actor::message("two", Point::ZERO));
        run_frame(&mut action, &mut cast, 1);

        cast.clear_group(MESSAGES).unwrap();
        run_frame(&mut action, &mut cast, 2);
        cast.add_actor(MESSAGES, Actor::message("three", Point::ZERO));
        run_frame(&mut action, &mut cast, 3);

        assert_eq!(action.announced, 1);
    }
}
