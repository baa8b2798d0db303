use std::time::Duration;

const TYPE_STEP: Duration = Duration::from_millis(100);
const HOLD: Duration = Duration::from_millis(2000);
const ERASE_STEP: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Holding,
    Erasing,
}

/// Types each title one character at a time, holds it, erases it, then moves
/// on to the next title.
#[derive(Debug, Clone)]
pub struct Typewriter {
    texts: Vec<&'static str>,
    index: usize,
    chars: usize,
    phase: Phase,
    carry: Duration,
}

impl Typewriter {
    pub fn new(texts: &[&'static str]) -> Self {
        Self {
            texts: texts.to_vec(),
            index: 0,
            chars: 0,
            phase: Phase::Typing,
            carry: Duration::ZERO,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    fn current(&self) -> &'static str {
        self.texts.get(self.index).copied().unwrap_or_default()
    }

    fn step_duration(&self) -> Duration {
        match self.phase {
            Phase::Typing => TYPE_STEP,
            Phase::Holding => HOLD,
            Phase::Erasing => ERASE_STEP,
        }
    }

    /// Advances the animation by `dt` of wall time.
    pub fn advance(&mut self, dt: Duration) {
        if self.texts.is_empty() {
            return;
        }
        self.carry += dt;
        loop {
            let step = self.step_duration();
            if self.carry < step {
                break;
            }
            self.carry -= step;
            self.step();
        }
    }

    fn step(&mut self) {
        let len = self.current().chars().count();
        match self.phase {
            Phase::Typing => {
                if self.chars < len {
                    self.chars += 1;
                }
                if self.chars >= len {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => self.phase = Phase::Erasing,
            Phase::Erasing => {
                self.chars = self.chars.saturating_sub(1);
                if self.chars == 0 {
                    self.index = (self.index + 1) % self.texts.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }

    /// The currently visible prefix.
    pub fn visible(&self) -> &'static str {
        let text = self.current();
        match text.char_indices().nth(self.chars) {
            Some((byte_idx, _)) => &text[..byte_idx],
            None => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_one_char_per_step() {
        let mut tw = Typewriter::new(&["abc", "xy"]);
        assert_eq!(tw.visible(), "");
        tw.advance(Duration::from_millis(100));
        assert_eq!(tw.visible(), "a");
        tw.advance(Duration::from_millis(150));
        assert_eq!(tw.visible(), "ab");
        tw.advance(Duration::from_millis(50));
        assert_eq!(tw.visible(), "abc");
        assert_eq!(tw.phase(), Phase::Holding);
    }

    #[test]
    fn test_holds_then_erases_then_moves_on() {
        let mut tw = Typewriter::new(&["abc", "xy"]);
        tw.advance(Duration::from_millis(300));
        tw.advance(Duration::from_millis(1999));
        assert_eq!(tw.phase(), Phase::Holding);
        tw.advance(Duration::from_millis(1));
        assert_eq!(tw.phase(), Phase::Erasing);
        tw.advance(Duration::from_millis(50));
        assert_eq!(tw.visible(), "ab");
        tw.advance(Duration::from_millis(100));
        assert_eq!(tw.visible(), "");
        assert_eq!(tw.current_index(), 1);
        assert_eq!(tw.phase(), Phase::Typing);
        tw.advance(Duration::from_millis(200));
        assert_eq!(tw.visible(), "xy");
    }

    #[test]
    fn test_wraps_around_titles() {
        let mut tw = Typewriter::new(&["a", "b"]);
        // a: type 100, hold 2000, erase 50; b: same.
        tw.advance(Duration::from_millis(2150 * 2));
        assert_eq!(tw.current_index(), 0);
    }

    #[test]
    fn test_multibyte_prefix_is_char_aligned() {
        let mut tw = Typewriter::new(&["é+ü"]);
        tw.advance(Duration::from_millis(100));
        assert_eq!(tw.visible(), "é");
    }
}
