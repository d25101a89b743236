//! Scroll animation driver
//!
//! A fixed-rate state machine that advances a horizontal offset while
//! running and hard-resets it to the direction-specific initial offset
//! when the content has fully traveled through the viewport. The reset
//! is a deliberate jump, not a seamless modulo wrap.
//!
//! The driver never schedules anything itself: the host calls `tick()`
//! from its own fixed-rate loop (see `tick_subscription` in the widget
//! module). A stopped driver ignores ticks, so dropping the host's loop
//! plus stopping the driver gives a hard no-more-frames guarantee.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Ticks per second of the scheduling loop.
pub const TICK_RATE: f32 = 60.0;

/// Interval between ticks; what the host's timer should fire at.
pub const TICK_INTERVAL: Duration = Duration::from_micros(1_000_000 / 60);

/// Scroll direction of the marquee content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Content enters from the right edge and moves left.
    #[default]
    Left,
    /// Content enters from the left edge and moves right.
    Right,
}

impl Direction {
    /// Sign applied to the per-tick displacement.
    fn move_factor(self) -> f32 {
        match self {
            Direction::Left => 1.0,
            Direction::Right => -1.0,
        }
    }

    /// Offset the animation starts from (and resets to at end-of-travel).
    fn initial_offset(self, viewport_width: f32, total_width: f32) -> f32 {
        match self {
            Direction::Left => -viewport_width,
            Direction::Right => total_width,
        }
    }

    /// End-of-travel check. Strict: landing exactly on the bound is not
    /// yet past the end.
    fn past_end(self, offset_x: f32, viewport_width: f32, total_width: f32) -> bool {
        match self {
            Direction::Left => offset_x > total_width,
            Direction::Right => offset_x < -viewport_width,
        }
    }
}

/// Animation state machine: `Stopped` <-> `Running`, one offset value.
#[derive(Debug)]
pub struct ScrollDriver {
    direction: Direction,
    /// Scroll speed in points per second.
    speed: f32,
    /// Current horizontal content offset.
    offset_x: f32,
    running: bool,
    viewport_width: f32,
    total_width: f32,
}

impl ScrollDriver {
    pub fn new(direction: Direction, speed: f32) -> Self {
        Self {
            direction,
            speed,
            offset_x: 0.0,
            running: false,
            viewport_width: 0.0,
            total_width: 0.0,
        }
    }

    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Change direction. Takes effect on the next tick's displacement;
    /// the offset is not reset until the next `start()` or layout reset.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    pub fn set_total_width(&mut self, width: f32) {
        self.total_width = width;
    }

    /// Snap the offset back to the initial offset for the current
    /// direction. Called on start and whenever content or spacing
    /// changes while there is content to show.
    pub fn reset(&mut self) {
        self.offset_x = self
            .direction
            .initial_offset(self.viewport_width, self.total_width);
    }

    /// Transition to `Running` from either state.
    ///
    /// Always resets to the initial offset first, then applies one tick
    /// immediately so the first visible frame is already in motion.
    /// Calling `start()` while running restarts from the initial offset.
    pub fn start(&mut self) {
        self.running = true;
        self.reset();
        self.tick();
    }

    /// Transition to `Stopped`. The offset keeps its last value until
    /// the next `start()`.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance one tick. Returns the new offset while running, `None`
    /// when stopped (a stopped driver must never move).
    pub fn tick(&mut self) -> Option<f32> {
        if !self.running {
            return None;
        }

        self.offset_x += self.direction.move_factor() * self.speed / TICK_RATE;

        if self
            .direction
            .past_end(self.offset_x, self.viewport_width, self.total_width)
        {
            // Hard reset, overshoot is not carried over.
            self.reset();
        }

        Some(self.offset_x)
    }
}
