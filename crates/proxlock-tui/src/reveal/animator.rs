use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use proxlock_core::RevealConfig;

use super::charset;

/// Animation phase. `Complete` is terminal until the inputs change,
/// which recreates the run from `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Instantiated, delay timer not yet armed
    Idle,
    /// Waiting out the initial delay
    Pending,
    /// Advancing one character per accepted tick
    Revealing,
    /// Fully revealed; no further tick mutates state
    Complete,
}

/// One character slot of the animated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealChar {
    pub ch: char,
    /// False while the slot still shows a scramble substitute
    pub revealed: bool,
}

/// A renderable run of the animated text. `Word` runs must never be
/// broken across lines; the spaces between them are the only valid
/// break points and are never scrambled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealSegment {
    Word(Vec<RevealChar>),
    Space(usize),
}

/// Time-driven scramble/reveal state machine.
///
/// `tick` takes the current `Instant` instead of reading the clock so
/// the machine can be driven deterministically. Within one run
/// `revealed_count` only grows, by exactly 1 per accepted tick;
/// changing the text or timing performs a full reset and no state from
/// the previous run survives into the new one.
pub struct RevealAnimator {
    chars: Vec<char>,
    config: RevealConfig,
    phase: RevealPhase,
    revealed: usize,
    /// Bumped on every visual tick; only forces substitute churn
    scramble_epoch: u64,
    armed_at: Option<Instant>,
    last_tick: Option<Instant>,
    /// Current substitutes, one per slot (spaces keep ' ')
    scrambled: Vec<char>,
    rng: StdRng,
}

impl RevealAnimator {
    pub fn new(text: &str, config: RevealConfig) -> Self {
        Self::with_rng(text, config, StdRng::from_entropy())
    }

    /// Seeded variant for deterministic output.
    pub fn with_rng(text: &str, config: RevealConfig, rng: StdRng) -> Self {
        let mut animator = Self {
            chars: text.chars().collect(),
            config,
            phase: RevealPhase::Idle,
            revealed: 0,
            scramble_epoch: 0,
            armed_at: None,
            last_tick: None,
            scrambled: Vec::new(),
            rng,
        };
        animator.scrambled = animator.fresh_substitutes();
        animator
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    pub fn scramble_epoch(&self) -> u64 {
        self.scramble_epoch
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whether the run still needs frame ticks
    #[inline]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, RevealPhase::Pending | RevealPhase::Revealing)
    }

    /// Arm the delay timer. Empty text schedules nothing and completes
    /// immediately (nothing will render).
    pub fn start(&mut self, now: Instant) {
        if self.phase != RevealPhase::Idle {
            return;
        }
        if self.chars.is_empty() {
            self.phase = RevealPhase::Complete;
            return;
        }
        self.armed_at = Some(now);
        self.phase = RevealPhase::Pending;
    }

    /// Replace the target text, discarding all progress and any pending
    /// schedule from the previous run. The new run starts at `Idle`.
    pub fn set_text(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.reset_run();
    }

    /// Change timing parameters; same full-reset semantics as `set_text`.
    pub fn set_config(&mut self, config: RevealConfig) {
        self.config = config;
        self.reset_run();
    }

    /// Restart the current text from scratch (used when the page is
    /// navigated away from and back).
    pub fn restart(&mut self) {
        self.reset_run();
    }

    fn reset_run(&mut self) {
        self.phase = RevealPhase::Idle;
        self.revealed = 0;
        self.scramble_epoch = 0;
        self.armed_at = None;
        self.last_tick = None;
        self.scrambled = self.fresh_substitutes();
    }

    /// Advance the state machine one frame. Returns true when the
    /// rendered output changed and a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            RevealPhase::Idle | RevealPhase::Complete => false,
            RevealPhase::Pending => {
                let armed = self.armed_at.unwrap_or(now);
                if now.duration_since(armed) >= self.config.delay() {
                    self.phase = RevealPhase::Revealing;
                    self.revealing_tick(now)
                } else {
                    // Still waiting: churn the substitutes so the
                    // fully-scrambled text flickers during the delay
                    self.rescramble();
                    true
                }
            }
            RevealPhase::Revealing => self.revealing_tick(now),
        }
    }

    fn revealing_tick(&mut self, now: Instant) -> bool {
        let accepted = match self.last_tick {
            None => true,
            Some(last) => now.duration_since(last) >= self.config.speed(),
        };

        if accepted {
            self.last_tick = Some(now);
            self.revealed += 1;
            if self.revealed == self.chars.len() {
                self.phase = RevealPhase::Complete;
            }
        }

        self.rescramble();
        true
    }

    /// Resample substitutes for the unrevealed suffix and bump the epoch.
    fn rescramble(&mut self) {
        self.scramble_epoch += 1;
        for i in self.revealed..self.chars.len() {
            if self.chars[i] != ' ' {
                self.scrambled[i] = charset::sample(&mut self.rng);
            }
        }
    }

    fn fresh_substitutes(&mut self) -> Vec<char> {
        let chars = self.chars.clone();
        chars
            .iter()
            .map(|&c| {
                if c == ' ' {
                    ' '
                } else {
                    charset::sample(&mut self.rng)
                }
            })
            .collect()
    }

    /// Character currently shown in slot `i`: the true character once
    /// revealed, the current substitute otherwise. Spaces are always
    /// shown as spaces.
    fn slot(&self, i: usize) -> RevealChar {
        let ch = self.chars[i];
        if i < self.revealed || ch == ' ' {
            RevealChar { ch, revealed: true }
        } else {
            RevealChar {
                ch: self.scrambled[i],
                revealed: false,
            }
        }
    }

    /// Current render state as word/space segments. Word segments are
    /// indivisible so the renderer cannot wrap mid-word.
    pub fn segments(&self) -> Vec<RevealSegment> {
        let mut segments = Vec::new();
        let mut i = 0;
        let len = self.chars.len();

        while i < len {
            if self.chars[i] == ' ' {
                let start = i;
                while i < len && self.chars[i] == ' ' {
                    i += 1;
                }
                segments.push(RevealSegment::Space(i - start));
            } else {
                let mut word = Vec::new();
                while i < len && self.chars[i] != ' ' {
                    word.push(self.slot(i));
                    i += 1;
                }
                segments.push(RevealSegment::Word(word));
            }
        }

        segments
    }

    /// Flattened render state, mostly useful for assertions.
    pub fn rendered(&self) -> String {
        (0..self.chars.len()).map(|i| self.slot(i).ch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const TEXT: &str = "Secure API Proxy Management";

    fn animator(speed_ms: i64, delay_ms: i64) -> RevealAnimator {
        RevealAnimator::with_rng(
            TEXT,
            RevealConfig::new(speed_ms, delay_ms),
            StdRng::seed_from_u64(42),
        )
    }

    /// Drive frames at `frame_ms` spacing until complete or `limit_ms`.
    fn run_to_completion(reveal: &mut RevealAnimator, base: Instant, frame_ms: u64, limit_ms: u64) {
        let mut t = 0;
        while t <= limit_ms && reveal.phase() != RevealPhase::Complete {
            t += frame_ms;
            reveal.tick(base + Duration::from_millis(t));
        }
    }

    #[test]
    fn test_starts_idle_then_pending() {
        let mut reveal = animator(8, 0);
        assert_eq!(reveal.phase(), RevealPhase::Idle);
        reveal.start(Instant::now());
        assert_eq!(reveal.phase(), RevealPhase::Pending);
    }

    #[test]
    fn test_runs_to_completion() {
        let base = Instant::now();
        let mut reveal = animator(8, 0);
        reveal.start(base);
        run_to_completion(&mut reveal, base, 16, 10_000);

        assert_eq!(reveal.phase(), RevealPhase::Complete);
        assert_eq!(reveal.revealed_count(), TEXT.chars().count());
        assert_eq!(reveal.rendered(), TEXT);
    }

    #[test]
    fn test_no_progress_during_delay() {
        let base = Instant::now();
        let mut reveal = animator(50, 500);
        reveal.start(base);

        for t in (16..500).step_by(16) {
            reveal.tick(base + Duration::from_millis(t));
            assert_eq!(reveal.revealed_count(), 0);
            assert_eq!(reveal.phase(), RevealPhase::Pending);
        }
    }

    #[test]
    fn test_hero_scenario_timing() {
        // speed 50, delay 500: one character roughly every 50ms after
        // the delay, with the frame interval as the floor
        let base = Instant::now();
        let mut reveal = animator(50, 500);
        reveal.start(base);

        let mut last_count = 0;
        let mut t = 0u64;
        while reveal.phase() != RevealPhase::Complete && t < 5_000 {
            t += 16;
            reveal.tick(base + Duration::from_millis(t));
            let count = reveal.revealed_count();
            assert!(count >= last_count, "revealed count must never decrease");
            assert!(count - last_count <= 1, "at most one reveal per tick");
            last_count = count;
        }

        assert_eq!(reveal.phase(), RevealPhase::Complete);
        assert_eq!(reveal.revealed_count(), 27);
        // 27 reveals spaced >= 50ms after a 500ms delay
        assert!(t >= 500 + 26 * 50);
    }

    #[test]
    fn test_prefix_is_exact_and_suffix_is_charset() {
        let base = Instant::now();
        let mut reveal = animator(10, 0);
        reveal.start(base);

        let source: Vec<char> = TEXT.chars().collect();
        for step in 1..=40u64 {
            reveal.tick(base + Duration::from_millis(step * 16));
            let rendered: Vec<char> = reveal.rendered().chars().collect();
            let k = reveal.revealed_count();

            assert_eq!(&rendered[..k], &source[..k]);
            for (i, &c) in rendered.iter().enumerate().skip(k) {
                if source[i] == ' ' {
                    assert_eq!(c, ' ', "spaces are never scrambled");
                } else {
                    assert!(charset::contains(c), "substitute outside charset: {c}");
                }
            }
        }
    }

    #[test]
    fn test_unrevealed_chars_resample_between_ticks() {
        let base = Instant::now();
        let mut reveal = animator(1_000_000, 0);
        reveal.start(base);
        reveal.tick(base + Duration::from_millis(16));

        let before = reveal.rendered();
        let epoch_before = reveal.scramble_epoch();
        // Next frame is within the speed window: no reveal, but churn
        reveal.tick(base + Duration::from_millis(32));
        let after = reveal.rendered();

        assert_eq!(reveal.revealed_count(), 1);
        assert!(reveal.scramble_epoch() > epoch_before);
        // 23 scrambled slots; identical resamples are astronomically unlikely
        assert_ne!(before, after);
    }

    #[test]
    fn test_set_text_discards_previous_run() {
        let base = Instant::now();
        let mut reveal = animator(10, 0);
        reveal.start(base);
        for step in 1..=5u64 {
            reveal.tick(base + Duration::from_millis(step * 16));
        }
        assert!(reveal.revealed_count() > 0);

        reveal.set_text("Waitlist");
        assert_eq!(reveal.phase(), RevealPhase::Idle);
        assert_eq!(reveal.revealed_count(), 0);
        assert_eq!(reveal.rendered().chars().count(), 8);
        // Nothing from the old text may leak into the first frame
        for c in reveal.rendered().chars() {
            assert!(charset::contains(c));
        }

        // Un-started run ignores ticks
        assert!(!reveal.tick(base + Duration::from_millis(200)));
    }

    #[test]
    fn test_empty_text_schedules_nothing() {
        let mut reveal =
            RevealAnimator::with_rng("", RevealConfig::default(), StdRng::seed_from_u64(1));
        reveal.start(Instant::now());
        assert_eq!(reveal.phase(), RevealPhase::Complete);
        assert!(!reveal.tick(Instant::now()));
        assert!(reveal.segments().is_empty());
        assert_eq!(reveal.rendered(), "");
    }

    #[test]
    fn test_zero_or_negative_speed_reveals_one_per_frame() {
        let base = Instant::now();
        let mut reveal = animator(-5, 0);
        reveal.start(base);

        for step in 1..=27u64 {
            reveal.tick(base + Duration::from_millis(step));
            assert_eq!(reveal.revealed_count(), step as usize);
        }
        assert_eq!(reveal.phase(), RevealPhase::Complete);
    }

    #[test]
    fn test_negative_delay_is_zero() {
        let base = Instant::now();
        let mut reveal = animator(8, -100);
        reveal.start(base);
        reveal.tick(base + Duration::from_millis(1));
        assert_eq!(reveal.revealed_count(), 1);
    }

    #[test]
    fn test_complete_is_terminal() {
        let base = Instant::now();
        let mut reveal = animator(1, 0);
        reveal.start(base);
        run_to_completion(&mut reveal, base, 2, 1_000);
        assert_eq!(reveal.phase(), RevealPhase::Complete);

        let epoch = reveal.scramble_epoch();
        for step in 0..10u64 {
            assert!(!reveal.tick(base + Duration::from_millis(2_000 + step)));
        }
        assert_eq!(reveal.scramble_epoch(), epoch);
        assert_eq!(reveal.rendered(), TEXT);
    }

    #[test]
    fn test_words_never_split_and_spaces_break() {
        let reveal = animator(8, 0);
        let segments = reveal.segments();

        let words: Vec<usize> = segments
            .iter()
            .filter_map(|s| match s {
                RevealSegment::Word(w) => Some(w.len()),
                RevealSegment::Space(_) => None,
            })
            .collect();
        // "Secure API Proxy Management"
        assert_eq!(words, vec![6, 3, 5, 10]);

        let spaces = segments
            .iter()
            .filter(|s| matches!(s, RevealSegment::Space(_)))
            .count();
        assert_eq!(spaces, 3);
    }

    #[test]
    fn test_spaces_not_in_encrypting_class() {
        let reveal = animator(8, 0);
        for segment in reveal.segments() {
            if let RevealSegment::Word(word) = segment {
                // Nothing revealed yet: every word char is encrypting
                assert!(word.iter().all(|c| !c.revealed));
            }
        }
    }
}
