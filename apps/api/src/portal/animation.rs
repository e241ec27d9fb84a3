//! Status-line typewriter and the animated job counter.
//!
//! Both expose their frames as plain data, so callers can test them without
//! a clock. `play` drives the frames with `tokio::time::sleep`.

use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(50);
pub const COUNTER_DURATION: Duration = Duration::from_millis(1000);
pub const COUNTER_TICK: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeFrame {
    pub text: String,
    /// Blinking cursor shown on every frame except the final one.
    pub cursor: bool,
}

/// Reveals a status message one character at a time.
#[derive(Debug, Clone)]
pub struct Typewriter {
    message: String,
    delay: Duration,
}

impl Typewriter {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            delay: TYPE_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// One frame per character prefix, then the full message without cursor.
    pub fn frames(&self) -> Vec<TypeFrame> {
        let mut frames: Vec<TypeFrame> = self
            .message
            .char_indices()
            .map(|(i, ch)| TypeFrame {
                text: self.message[..i + ch.len_utf8()].to_string(),
                cursor: true,
            })
            .collect();
        frames.push(TypeFrame {
            text: self.message.clone(),
            cursor: false,
        });
        frames
    }

    pub fn total_duration(&self) -> Duration {
        self.delay * self.message.chars().count() as u32
    }

    pub async fn play(&self, mut on_frame: impl FnMut(&TypeFrame)) {
        let frames = self.frames();
        let last = frames.len() - 1;
        for (i, frame) in frames.iter().enumerate() {
            on_frame(frame);
            if i < last {
                tokio::time::sleep(self.delay).await;
            }
        }
    }
}

/// Animates a displayed integer from `start` to `target` by linear
/// interpolation, sampled every `tick` over `duration`.
#[derive(Debug, Clone, Copy)]
pub struct CounterAnimation {
    pub start: u64,
    pub target: u64,
    pub duration: Duration,
    pub tick: Duration,
}

impl CounterAnimation {
    pub fn new(start: u64, target: u64) -> Self {
        Self {
            start,
            target,
            duration: COUNTER_DURATION,
            tick: COUNTER_TICK,
        }
    }

    /// Values shown at each tick. Intermediate values are floored; the last
    /// sample is always exactly `target`.
    pub fn samples(&self) -> Vec<u64> {
        if self.start == self.target || self.tick.is_zero() {
            return vec![self.target];
        }

        let steps = self.duration.as_secs_f64() / self.tick.as_secs_f64();
        let start = self.start as f64;
        let target = self.target as f64;
        let increment = (target - start) / steps;
        // Float drift can leave `current` a hair short of target; bound the loop.
        let max_ticks = steps.ceil() as usize + 1;

        let mut values = Vec::with_capacity(max_ticks);
        let mut current = start;
        for _ in 0..max_ticks {
            current += increment;
            let reached = (increment > 0.0 && current >= target)
                || (increment < 0.0 && current <= target);
            if reached {
                break;
            }
            values.push(current.floor() as u64);
        }
        values.push(self.target);
        values
    }

    pub async fn play(&self, mut on_value: impl FnMut(u64)) {
        for value in self.samples() {
            tokio::time::sleep(self.tick).await;
            on_value(value);
        }
    }
}
