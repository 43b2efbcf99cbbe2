//! Typing animation state machine.
//!
//! The animator never sleeps: each [`TypingAnimator::step`] returns the text
//! to display and how long to wait before the next step. The browser driver
//! awaits that delay; tests call `step` directly.

use std::time::Duration;

use crate::config::TypingConfig;
use crate::error::SiteError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    /// Full phrase shown, holding before deleting
    PausedAtFull,
    Deleting,
    /// Empty text shown, holding before typing the next phrase
    PausedAtEmpty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cadence {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub hold_full: Duration,
    pub hold_empty: Duration,
}

impl From<&TypingConfig> for Cadence {
    fn from(config: &TypingConfig) -> Self {
        Self {
            type_delay: Duration::from_millis(u64::from(config.type_ms)),
            delete_delay: Duration::from_millis(u64::from(config.delete_ms)),
            hold_full: Duration::from_millis(u64::from(config.hold_full_ms)),
            hold_empty: Duration::from_millis(u64::from(config.hold_empty_ms)),
        }
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self::from(&TypingConfig::default())
    }
}

/// Output of one step: what to render and when to step again
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay: Duration,
}

#[derive(Clone, Debug)]
pub struct TypingAnimator {
    phrases: Vec<String>,
    cadence: Cadence,
    text_index: usize,
    /// Visible prefix length in chars, always within the current phrase
    char_index: usize,
    phase: Phase,
}

impl TypingAnimator {
    pub fn new(phrases: Vec<String>, cadence: Cadence) -> Result<Self, SiteError> {
        if phrases.is_empty() {
            return Err(SiteError::EmptyPhrases);
        }
        Ok(Self {
            phrases,
            cadence,
            text_index: 0,
            char_index: 0,
            phase: Phase::Typing,
        })
    }

    pub fn from_config(config: &TypingConfig) -> Result<Self, SiteError> {
        Self::new(config.phrases.clone(), Cadence::from(config))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn text_index(&self) -> usize {
        self.text_index
    }

    pub fn char_index(&self) -> usize {
        self.char_index
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }

    fn current_len(&self) -> usize {
        self.phrases[self.text_index].chars().count()
    }

    fn visible_text(&self) -> String {
        self.phrases[self.text_index]
            .chars()
            .take(self.char_index)
            .collect()
    }

    /// Advance one character (forward or backward) and report the frame.
    pub fn step(&mut self) -> Frame {
        let delay = match self.phase {
            Phase::Typing | Phase::PausedAtEmpty => {
                let len = self.current_len();
                if self.char_index < len {
                    self.char_index += 1;
                }
                if self.char_index >= len {
                    self.phase = Phase::PausedAtFull;
                    self.cadence.hold_full
                } else {
                    self.phase = Phase::Typing;
                    self.cadence.type_delay
                }
            }
            Phase::Deleting | Phase::PausedAtFull => {
                self.char_index = self.char_index.saturating_sub(1);
                if self.char_index == 0 {
                    self.phase = Phase::PausedAtEmpty;
                    self.cadence.hold_empty
                } else {
                    self.phase = Phase::Deleting;
                    self.cadence.delete_delay
                }
            }
        };

        let frame = Frame {
            text: self.visible_text(),
            delay,
        };

        if self.phase == Phase::PausedAtEmpty {
            self.text_index = (self.text_index + 1) % self.phrases.len();
        }

        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(phrases: &[&str]) -> TypingAnimator {
        TypingAnimator::new(
            phrases.iter().map(|p| p.to_string()).collect(),
            Cadence::default(),
        )
        .expect("non-empty phrases")
    }

    /// Steps until the phrase index moves, returning the frames seen
    fn run_cycle(anim: &mut TypingAnimator) -> Vec<Frame> {
        let start = anim.text_index();
        let mut frames = Vec::new();
        while anim.text_index() == start {
            frames.push(anim.step());
            assert!(frames.len() < 10_000, "cycle never completed");
        }
        frames
    }

    #[test]
    fn test_empty_phrase_list_rejected() {
        let result = TypingAnimator::new(Vec::new(), Cadence::default());
        assert!(matches!(result, Err(SiteError::EmptyPhrases)));
    }

    #[test]
    fn test_types_then_holds_then_deletes() {
        let mut anim = animator(&["Hey"]);
        let ms = |n| Duration::from_millis(n);

        assert_eq!(anim.step(), Frame { text: "H".into(), delay: ms(100) });
        assert_eq!(anim.step(), Frame { text: "He".into(), delay: ms(100) });
        assert_eq!(anim.step(), Frame { text: "Hey".into(), delay: ms(2000) });
        assert_eq!(anim.phase(), Phase::PausedAtFull);

        assert_eq!(anim.step(), Frame { text: "He".into(), delay: ms(50) });
        assert_eq!(anim.phase(), Phase::Deleting);
        assert_eq!(anim.step(), Frame { text: "H".into(), delay: ms(50) });
        assert_eq!(anim.step(), Frame { text: "".into(), delay: ms(500) });
        assert_eq!(anim.phase(), Phase::PausedAtEmpty);

        assert_eq!(anim.step(), Frame { text: "H".into(), delay: ms(100) });
        assert_eq!(anim.phase(), Phase::Typing);
    }

    #[test]
    fn test_full_cycle_advances_index() {
        let mut anim = animator(&["AI/ML Developer", "Problem Solver"]);
        let frames = run_cycle(&mut anim);

        assert_eq!(anim.text_index(), 1);
        // One step per char typed plus one per char deleted
        assert_eq!(frames.len(), 2 * "AI/ML Developer".len());
        assert_eq!(frames.last().map(|f| f.text.as_str()), Some(""));
    }

    #[test]
    fn test_n_cycles_return_to_first_phrase() {
        let config = TypingConfig::default();
        let mut anim = TypingAnimator::from_config(&config).expect("default phrases");
        let n = anim.phrase_count();

        for expected in 1..=n {
            run_cycle(&mut anim);
            assert_eq!(anim.text_index(), expected % n);
        }
        assert_eq!(anim.text_index(), 0);
    }

    #[test]
    fn test_char_index_stays_in_bounds() {
        let phrases = ["ab", "", "héllo wörld"];
        let mut anim = animator(&phrases);

        for _ in 0..500 {
            anim.step();
            let len = phrases[anim.text_index()].chars().count();
            assert!(anim.char_index() <= len);
        }
    }

    #[test]
    fn test_multibyte_phrases_step_by_char() {
        let mut anim = animator(&["né"]);
        assert_eq!(anim.step().text, "n");
        assert_eq!(anim.step().text, "né");
    }

    #[test]
    fn test_empty_phrase_does_not_stall() {
        let mut anim = animator(&["", "x"]);
        run_cycle(&mut anim);
        assert_eq!(anim.text_index(), 1);
    }
}
