use crate::{CountdownConfig, Secs};

/// Valid transitions:
/// - Waiting -> Waiting
/// - Waiting -> Unlocked
/// - Unlocked -> Celebrating
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SessionState {
    /// Countdown still running
    Waiting,
    /// Countdown finished, the reveal action is available
    Unlocked,
    /// Celebration running, no further transitions
    Celebrating,
}

impl SessionState {
    /// Indicates the reveal action is available right now
    pub const fn is_unlocked(self) -> bool {
        use SessionState::*;
        match self {
            Waiting => false,
            Unlocked => true,
            Celebrating => false,
        }
    }

    /// Indicates the session reached its terminal state
    pub const fn is_terminal(self) -> bool {
        use SessionState::*;
        match self {
            Waiting => false,
            Unlocked => false,
            Celebrating => true,
        }
    }
}

/// Outcome of advancing the countdown by one tick
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TickOutcome {
    NoChange,
    Ticked,
    Unlocked,
}

impl TickOutcome {
    /// Whether this outcome could have caused an update to the page
    pub const fn has_update(self) -> bool {
        use TickOutcome::*;
        match self {
            NoChange => false,
            Ticked => true,
            Unlocked => true,
        }
    }

    /// Whether the countdown just finished and the tick source should stop
    pub const fn is_unlocked(self) -> bool {
        matches!(self, Self::Unlocked)
    }
}

/// Outcome of a reveal attempt
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    /// Attempt was made too early or too late and changed nothing
    Ignored,
    /// Celebration has begun
    Started,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the page
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            Ignored => false,
            Started => true,
        }
    }

    pub const fn started(self) -> bool {
        matches!(self, Self::Started)
    }
}

/// Tracks one page load from countdown to celebration
#[derive(Clone, Debug, PartialEq)]
pub struct RevealSession {
    seconds_left: Secs,
    state: SessionState,
}

impl RevealSession {
    pub fn new(config: CountdownConfig) -> Self {
        let state = if config.seconds == 0 {
            SessionState::Unlocked
        } else {
            SessionState::Waiting
        };
        Self {
            seconds_left: config.seconds,
            state,
        }
    }

    pub fn cur_state(&self) -> SessionState {
        self.state
    }

    pub fn seconds_left(&self) -> Secs {
        self.seconds_left
    }

    pub fn is_unlocked(&self) -> bool {
        self.state.is_unlocked()
    }

    pub fn is_celebrating(&self) -> bool {
        self.state.is_terminal()
    }

    /// Advance the countdown by one second. Calling this after the countdown
    /// finished is tolerated and changes nothing.
    pub fn tick(&mut self) -> TickOutcome {
        use SessionState::*;

        match self.state {
            Unlocked | Celebrating => TickOutcome::NoChange,
            Waiting => {
                self.seconds_left = self.seconds_left.saturating_sub(1);
                if self.seconds_left == 0 {
                    self.state = Unlocked;
                    log::debug!("countdown finished, reveal unlocked");
                    TickOutcome::Unlocked
                } else {
                    TickOutcome::Ticked
                }
            }
        }
    }

    /// Try to start the celebration. Only possible once the countdown
    /// finished; anything else is silently ignored.
    pub fn reveal(&mut self) -> RevealOutcome {
        use SessionState::*;

        match self.state {
            Waiting => {
                log::debug!("reveal ignored, {} seconds left", self.seconds_left);
                RevealOutcome::Ignored
            }
            Celebrating => RevealOutcome::Ignored,
            Unlocked => {
                self.state = Celebrating;
                log::debug!("celebration started");
                RevealOutcome::Started
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(seconds: Secs) -> RevealSession {
        RevealSession::new(CountdownConfig::new_unchecked(seconds))
    }

    #[test]
    fn full_run_unlocks_exactly_at_zero() {
        let mut session = session(10);

        for expected in (1..10).rev() {
            assert_eq!(session.tick(), TickOutcome::Ticked);
            assert_eq!(session.seconds_left(), expected);
            assert!(!session.is_unlocked());
        }

        assert_eq!(session.tick(), TickOutcome::Unlocked);
        assert_eq!(session.seconds_left(), 0);
        assert!(session.is_unlocked());
    }

    #[test]
    fn countdown_is_monotonic_and_never_negative() {
        let mut session = session(3);
        let mut prev = session.seconds_left();

        for _ in 0..10 {
            session.tick();
            assert!(session.seconds_left() <= prev);
            prev = session.seconds_left();
        }

        assert_eq!(session.seconds_left(), 0);
    }

    #[test]
    fn ticks_after_unlock_change_nothing() {
        let mut session = session(1);
        assert_eq!(session.tick(), TickOutcome::Unlocked);

        assert_eq!(session.tick(), TickOutcome::NoChange);
        assert_eq!(session.tick(), TickOutcome::NoChange);
        assert_eq!(session.seconds_left(), 0);
        assert!(session.is_unlocked());
    }

    #[test]
    fn reveal_before_unlock_is_ignored() {
        let mut session = session(10);
        for _ in 0..7 {
            session.tick();
        }
        assert_eq!(session.seconds_left(), 3);

        for _ in 0..5 {
            assert_eq!(session.reveal(), RevealOutcome::Ignored);
            assert_eq!(session.cur_state(), SessionState::Waiting);
            assert!(!session.is_celebrating());
        }
        assert_eq!(session.seconds_left(), 3);
    }

    #[test]
    fn reveal_after_unlock_starts_celebration_once() {
        let mut session = session(1);
        session.tick();

        assert_eq!(session.reveal(), RevealOutcome::Started);
        assert!(session.is_celebrating());

        assert_eq!(session.reveal(), RevealOutcome::Ignored);
        assert!(session.is_celebrating());
    }

    #[test]
    fn celebration_is_terminal() {
        let mut session = session(1);
        session.tick();
        session.reveal();

        assert_eq!(session.tick(), TickOutcome::NoChange);
        assert_eq!(session.reveal(), RevealOutcome::Ignored);
        assert_eq!(session.cur_state(), SessionState::Celebrating);
    }

    #[test]
    fn zero_length_countdown_starts_unlocked() {
        let session = session(0);
        assert!(session.is_unlocked());
        assert_eq!(session.seconds_left(), 0);
    }
}
