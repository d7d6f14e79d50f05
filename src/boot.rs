use std::time::{Duration, Instant};

/// How long the splash view stays up after mount.
pub const BOOT_DELAY: Duration = Duration::from_millis(3000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootState {
    Loading,
    Ready,
}

/// One-shot delayed transition from `Loading` to `Ready`.
///
/// The sequencer holds the deadline itself; whoever owns it pumps `poll`
/// with the current time. `stop` releases the pending transition, after
/// which `poll` never fires.
#[derive(Debug)]
pub struct BootSequencer {
    state: BootState,
    delay: Duration,
    started: Option<Instant>,
}

impl Default for BootSequencer {
    fn default() -> Self {
        Self::new(BOOT_DELAY)
    }
}

impl BootSequencer {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: BootState::Loading,
            delay,
            started: None,
        }
    }

    pub fn start(&mut self, now: Instant) {
        if self.state == BootState::Loading && self.started.is_none() {
            self.started = Some(now);
        }
    }

    pub fn stop(&mut self) {
        self.started = None;
    }

    pub fn state(&self) -> BootState {
        self.state
    }

    /// Whether a transition is still scheduled.
    pub fn is_pending(&self) -> bool {
        self.state == BootState::Loading && self.started.is_some()
    }

    /// Returns `true` on the single call that performs the transition.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.started {
            Some(started)
                if self.state == BootState::Loading
                    && now.saturating_duration_since(started) >= self.delay =>
            {
                self.state = BootState::Ready;
                self.started = None;
                true
            }
            _ => false,
        }
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        match (self.state, self.started) {
            (BootState::Ready, _) => self.delay,
            (BootState::Loading, Some(started)) => now.saturating_duration_since(started),
            (BootState::Loading, None) => Duration::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn loading_until_the_delay_then_ready_once() {
        let mount = Instant::now();
        let mut boot = BootSequencer::default();
        boot.start(mount);

        let mut transitions = 0;
        for t in (0..=6000).step_by(100) {
            let now = mount + ms(t);
            if boot.poll(now) {
                transitions += 1;
            }
            let expected = if t < 3000 {
                BootState::Loading
            } else {
                BootState::Ready
            };
            assert_eq!(boot.state(), expected, "at t={}ms", t);
        }
        assert_eq!(transitions, 1);
    }

    #[test]
    fn fires_exactly_at_the_deadline() {
        let mount = Instant::now();
        let mut boot = BootSequencer::default();
        boot.start(mount);

        assert!(!boot.poll(mount + ms(2999)));
        assert!(boot.poll(mount + ms(3000)));
        assert!(!boot.poll(mount + ms(3001)));
        assert!(!boot.is_pending());
    }

    #[test]
    fn stopping_before_the_deadline_cancels_the_transition() {
        let mount = Instant::now();
        let mut boot = BootSequencer::default();
        boot.start(mount);
        assert!(!boot.poll(mount + ms(1000)));
        boot.stop();

        for t in &[3000, 3500, 10_000] {
            assert!(!boot.poll(mount + ms(*t)));
        }
        assert_eq!(boot.state(), BootState::Loading);
        assert!(!boot.is_pending());
    }

    #[test]
    fn never_fires_without_start() {
        let mount = Instant::now();
        let mut boot = BootSequencer::default();
        assert!(!boot.poll(mount + ms(5000)));
        assert_eq!(boot.elapsed(mount + ms(5000)), Duration::default());
    }

    #[test]
    fn restarting_does_not_move_the_deadline() {
        let mount = Instant::now();
        let mut boot = BootSequencer::default();
        boot.start(mount);
        boot.start(mount + ms(2000));
        assert!(boot.poll(mount + ms(3000)));
    }

    #[test]
    fn elapsed_is_capped_once_ready() {
        let mount = Instant::now();
        let mut boot = BootSequencer::default();
        boot.start(mount);
        assert_eq!(boot.elapsed(mount + ms(1200)), ms(1200));
        boot.poll(mount + ms(4000));
        assert_eq!(boot.elapsed(mount + ms(9000)), BOOT_DELAY);
    }
}
