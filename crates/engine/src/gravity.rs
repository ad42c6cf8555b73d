use blockfall_core::drop_interval_ms;

/// Interval scheduler for automatic descent.
///
/// Feed it elapsed time each frame; it answers whether a `Move(Down)` is due.
/// It runs only while the game is running and starts a fresh period whenever
/// it is re-armed (resume, start) or the level changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GravityClock {
    accumulated_ms: u32,
    armed_level: Option<u32>,
}

impl GravityClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `elapsed_ms`. Returns true at most once per call, when a
    /// full interval for `level` has passed.
    pub fn advance(&mut self, elapsed_ms: u32, running: bool, level: u32) -> bool {
        if !running {
            self.disarm();
            return false;
        }

        if self.armed_level != Some(level) {
            self.armed_level = Some(level);
            self.accumulated_ms = 0;
        }

        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
        if self.accumulated_ms >= drop_interval_ms(level) {
            self.accumulated_ms = 0;
            return true;
        }
        false
    }

    pub fn disarm(&mut self) {
        self.accumulated_ms = 0;
        self.armed_level = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed_level.is_some()
    }

    /// Time left until the next drop, if armed
    pub fn remaining_ms(&self) -> Option<u32> {
        self.armed_level
            .map(|level| drop_interval_ms(level).saturating_sub(self.accumulated_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_after_level_interval() {
        let mut clock = GravityClock::new();
        for _ in 0..62 {
            assert!(!clock.advance(16, true, 1));
        }
        // 63 * 16 = 1008 >= 1000
        assert!(clock.advance(16, true, 1));
        assert_eq!(clock.remaining_ms(), Some(1000));
    }

    #[test]
    fn fires_at_most_once_per_advance() {
        let mut clock = GravityClock::new();
        assert!(clock.advance(5000, true, 1));
        assert!(!clock.advance(0, true, 1));
    }

    #[test]
    fn not_running_disarms() {
        let mut clock = GravityClock::new();
        clock.advance(900, true, 1);
        assert!(!clock.advance(900, false, 1));
        assert!(!clock.is_armed());

        // Resuming starts a fresh period
        assert!(!clock.advance(900, true, 1));
        assert!(clock.advance(100, true, 1));
    }

    #[test]
    fn level_change_rearms() {
        let mut clock = GravityClock::new();
        clock.advance(850, true, 1);
        // Level 2 interval is 900ms, counted from the change
        assert!(!clock.advance(100, true, 2));
        assert_eq!(clock.remaining_ms(), Some(800));
        assert!(clock.advance(800, true, 2));
    }

    #[test]
    fn fastest_level_floor() {
        let mut clock = GravityClock::new();
        assert!(!clock.advance(16, true, 30));
        assert!(!clock.advance(16, true, 30));
        assert!(!clock.advance(16, true, 30));
        assert!(clock.advance(16, true, 30));
    }
}
