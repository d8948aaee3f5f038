//! Animated counter ramp.
//!
//! A counter counts from 0 up to its `data-target` over at most `frames`
//! animation frames in whole-number steps. The last displayed value is always
//! exactly the target.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

/// Parse a `data-target` attribute with integer-prefix semantics.
///
/// Leading whitespace and a single sign are accepted, then the leading run of
/// ASCII digits is used (`"250+"` is 250). No digits means no target.
#[must_use]
pub fn parse_target(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let Ok(magnitude) = rest[..digits].parse::<i64>() else {
        return None;
    };
    Some(if negative { -magnitude } else { magnitude })
}

/// Per-frame increment: `max(1, round(target / frames))`, halves rounding up.
///
/// Targets up to `frames` take exactly `target` frames. Larger targets may
/// take more than `frames` when the step rounds down (89 over 60 frames steps
/// by 1). Written without `target + x` so values near `i64::MAX` cannot
/// overflow.
#[must_use]
pub fn step_for(target: i64, frames: u32) -> i64 {
    let frames = i64::from(frames.max(1));
    if target <= 0 {
        return 1;
    }
    let rounded = target / frames + i64::from(target % frames * 2 >= frames);
    rounded.max(1)
}

/// One rendered frame of the ramp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: i64,
    /// No further frames should be scheduled.
    pub done: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterAnimation {
    target: i64,
    step: i64,
    current: i64,
    done: bool,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(target: i64, frames: u32) -> Self {
        Self { target, step: step_for(target, frames), current: 0, done: false }
    }

    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }

    #[must_use]
    pub fn step(&self) -> i64 {
        self.step
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance one frame. Once done, keeps reporting the target.
    pub fn tick(&mut self) -> CounterFrame {
        if self.done {
            return CounterFrame { value: self.target, done: true };
        }
        self.current = self.current.saturating_add(self.step);
        if self.current >= self.target {
            self.done = true;
            CounterFrame { value: self.target, done: true }
        } else {
            CounterFrame { value: self.current, done: false }
        }
    }
}
