//! Widget state: glue between layout and the animation driver
//!
//! `MarqueeState` is the single piece of mutable state a host owns per
//! marquee. It validates configuration, recomputes layout when content
//! or spacing changes, drives the `ScrollDriver`, and queues events for
//! the host to drain in its message loop:
//!
//! ```text
//! Host --set_content_items/set_spacing/start/stop/tick--> MarqueeState
//! Host <--[MarqueeEvent]------------------------------- MarqueeState
//! ```

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::config::{self, MarqueeConfig};
use crate::driver::{Direction, ScrollDriver};
use crate::error::ConfigError;
use crate::layout::{ItemSize, MarqueeLayout, compute_layout};

/// Oldest queued events are discarded past this point, so a host that
/// reads the state directly and never drains cannot leak.
const MAX_PENDING_EVENTS: usize = 256;

/// Events emitted by the marquee state for the host to apply.
///
/// The host drains these with [`MarqueeState::take_events`] after each
/// inbound call. The iced widget applies them implicitly by reading the
/// state during its layout pass instead; for that path the queue is
/// bounded (oldest entries dropped) so leaving it undrained is safe.
#[derive(Debug, Clone, PartialEq)]
pub enum MarqueeEvent {
    /// The scroll offset advanced; apply to the scrollable surface.
    OffsetChanged { x: f32 },
    /// Layout was recomputed; apply item positions to the surface.
    LayoutComputed { offsets: Vec<f32>, total_width: f32 },
}

/// Per-marquee state owned by the host.
#[derive(Debug)]
pub struct MarqueeState {
    config: MarqueeConfig,
    items: Vec<ItemSize>,
    layout: MarqueeLayout,
    driver: ScrollDriver,
    torn_down: bool,
    events: VecDeque<MarqueeEvent>,
}

impl Default for MarqueeState {
    fn default() -> Self {
        // Built directly so there is no panic path; the default config
        // needs no validation.
        let config = MarqueeConfig::default();
        Self {
            driver: ScrollDriver::new(config.direction, config.speed),
            config,
            items: Vec::new(),
            layout: MarqueeLayout::default(),
            torn_down: false,
            events: VecDeque::new(),
        }
    }
}

impl MarqueeState {
    /// Create a new marquee state with a validated configuration.
    pub fn new(config: MarqueeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            driver: ScrollDriver::new(config.direction, config.speed),
            config,
            items: Vec::new(),
            layout: MarqueeLayout::default(),
            torn_down: false,
            events: VecDeque::new(),
        })
    }

    /// Replace the content items (their measured sizes, in order).
    ///
    /// A genuine change recomputes layout and resets the scroll to the
    /// initial offset, so the new content enters cleanly from the edge.
    /// Calling this again with identical sizes is a no-op, which lets
    /// the widget re-sync on every layout pass without disturbing the
    /// animation. Becoming empty skips the reset and idles the driver.
    pub fn set_content_items(&mut self, items: &[ItemSize]) {
        if self.items == items {
            return;
        }
        self.items = items.to_vec();
        self.relayout();
    }

    /// Change the gap between items. Rejects negative or non-finite
    /// values, keeping the previous spacing.
    pub fn set_spacing(&mut self, spacing: f32) -> Result<(), ConfigError> {
        config::validate_spacing(spacing)?;
        if self.config.spacing != spacing {
            self.config.spacing = spacing;
            self.relayout();
        }
        Ok(())
    }

    /// Change scroll direction. Applies to subsequent ticks; the offset
    /// itself is not reset until the next start or layout change.
    pub fn set_direction(&mut self, direction: Direction) {
        self.config.direction = direction;
        self.driver.set_direction(direction);
    }

    /// Change scroll speed in points per second. Rejects zero, negative
    /// or non-finite values, keeping the previous speed.
    pub fn set_speed(&mut self, speed: f32) -> Result<(), ConfigError> {
        config::validate_speed(speed)?;
        self.config.speed = speed;
        self.driver.set_speed(speed);
        Ok(())
    }

    /// Viewport width from the host's layout pass; used for the initial
    /// offset and the end-of-travel bound.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.driver.set_viewport_width(width);
    }

    /// Start (or restart) the animation from the initial offset.
    ///
    /// With no content this is an idle no-op; after `teardown()` it is
    /// a warned no-op so late host callbacks cannot crash.
    pub fn start(&mut self) {
        if self.torn_down {
            warn!("marquee start requested after teardown; ignoring");
            return;
        }
        if self.items.is_empty() {
            debug!("marquee start with no content; staying idle");
            return;
        }
        self.driver.start();
        debug!(offset = self.driver.offset_x(), "marquee started");
        self.push_event(MarqueeEvent::OffsetChanged {
            x: self.driver.offset_x(),
        });
    }

    /// Stop the animation. The offset keeps its last value; no further
    /// `OffsetChanged` events are emitted until the next `start()`.
    pub fn stop(&mut self) {
        self.driver.stop();
    }

    /// The host is leaving the display hierarchy; equivalent to
    /// `stop()`. After this returns, `tick()` is guaranteed not to
    /// advance or emit.
    pub fn on_detached_from_host(&mut self) {
        debug!("marquee detached from host; stopping");
        self.driver.stop();
    }

    /// Final teardown. Stops the animation and makes any later
    /// `start()` a warned no-op.
    pub fn teardown(&mut self) {
        self.driver.stop();
        self.torn_down = true;
    }

    /// One tick of the host's fixed-rate loop. Returns the new offset
    /// while running (also queued as `OffsetChanged` for event-driven
    /// hosts), `None` while stopped.
    pub fn tick(&mut self) -> Option<f32> {
        let x = self.driver.tick()?;
        self.push_event(MarqueeEvent::OffsetChanged { x });
        Some(x)
    }

    /// Drain queued events in emission order.
    pub fn take_events(&mut self) -> Vec<MarqueeEvent> {
        self.events.drain(..).collect()
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn offset_x(&self) -> f32 {
        self.driver.offset_x()
    }

    pub fn layout(&self) -> &MarqueeLayout {
        &self.layout
    }

    pub fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    fn relayout(&mut self) {
        self.layout = compute_layout(&self.items, self.config.spacing);
        self.driver.set_total_width(self.layout.total_width);
        self.push_event(MarqueeEvent::LayoutComputed {
            offsets: self.layout.offsets.clone(),
            total_width: self.layout.total_width,
        });

        if self.items.is_empty() {
            // Nothing to position; idle until content comes back.
            self.driver.stop();
        } else {
            self.driver.reset();
        }
    }

    /// Queue an event, dropping the oldest once the queue is full.
    fn push_event(&mut self, event: MarqueeEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::TICK_RATE;

    fn sizes(widths: &[f32]) -> Vec<ItemSize> {
        widths.iter().map(|&w| ItemSize::new(w, 24.0)).collect()
    }

    fn reference_state() -> MarqueeState {
        // widths [100, 50], spacing 10, viewport 300, Left, speed 30
        let mut state = MarqueeState::default();
        state.set_viewport_width(300.0);
        state.set_content_items(&sizes(&[100.0, 50.0]));
        state.take_events();
        state
    }

    #[test]
    fn test_reference_example() {
        let state = reference_state();
        assert_eq!(state.layout().offsets, vec![0.0, 110.0]);
        assert_eq!(state.layout().total_width, 160.0);
        assert_eq!(state.offset_x(), -300.0);
    }

    #[test]
    fn test_start_emits_first_offset() {
        let mut state = reference_state();
        state.start();
        assert!(state.is_running());

        let events = state.take_events();
        assert_eq!(events.len(), 1);
        let MarqueeEvent::OffsetChanged { x } = &events[0] else {
            panic!("expected OffsetChanged, got {:?}", events[0]);
        };
        assert!((x - (-300.0 + 30.0 / TICK_RATE)).abs() < 1e-4);
    }

    #[test]
    fn test_tick_emits_offset_while_running() {
        let mut state = reference_state();
        state.start();
        state.take_events();

        state.tick();
        state.tick();
        let events = state.take_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], MarqueeEvent::OffsetChanged { .. }));
    }

    #[test]
    fn test_stop_silences_ticks() {
        let mut state = reference_state();
        state.start();
        state.stop();
        state.take_events();

        for _ in 0..10 {
            state.tick();
        }
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_detach_silences_ticks() {
        let mut state = reference_state();
        state.start();
        state.take_events();

        state.on_detached_from_host();
        state.tick();
        assert!(state.take_events().is_empty());
        assert!(!state.is_running());
    }

    #[test]
    fn test_content_change_while_running_resets_once() {
        let mut state = reference_state();
        state.start();
        for _ in 0..5 {
            state.tick();
        }
        state.take_events();

        state.set_content_items(&sizes(&[40.0, 40.0, 40.0]));
        let events = state.take_events();

        // exactly one layout recompute, reset before the next tick
        assert_eq!(
            events,
            vec![MarqueeEvent::LayoutComputed {
                offsets: vec![0.0, 50.0, 100.0],
                total_width: 140.0,
            }]
        );
        assert_eq!(state.offset_x(), -300.0);
        assert!(state.is_running());
    }

    #[test]
    fn test_identical_content_is_noop() {
        let mut state = reference_state();
        state.start();
        state.tick();
        state.take_events();
        let offset = state.offset_x();

        // the widget re-syncs every layout pass; same sizes must not reset
        state.set_content_items(&sizes(&[100.0, 50.0]));
        assert!(state.take_events().is_empty());
        assert_eq!(state.offset_x(), offset);
    }

    #[test]
    fn test_emptied_content_skips_reset_and_idles() {
        let mut state = reference_state();
        state.start();
        state.tick();
        let last_offset = state.offset_x();
        state.take_events();

        state.set_content_items(&[]);
        let events = state.take_events();
        assert_eq!(
            events,
            vec![MarqueeEvent::LayoutComputed {
                offsets: vec![],
                total_width: 0.0,
            }]
        );
        assert_eq!(state.offset_x(), last_offset);
        assert!(!state.is_running());
    }

    #[test]
    fn test_start_with_no_content_stays_idle() {
        let mut state = MarqueeState::default();
        state.set_viewport_width(300.0);
        state.start();
        assert!(!state.is_running());
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_spacing_change_relayouts_and_resets() {
        let mut state = reference_state();
        state.start();
        state.take_events();

        state.set_spacing(20.0).unwrap();
        let events = state.take_events();
        assert_eq!(
            events,
            vec![MarqueeEvent::LayoutComputed {
                offsets: vec![0.0, 120.0],
                total_width: 170.0,
            }]
        );
        assert_eq!(state.offset_x(), -300.0);
    }

    #[test]
    fn test_invalid_values_keep_previous() {
        let mut state = reference_state();

        assert!(state.set_spacing(-1.0).is_err());
        assert_eq!(state.config().spacing, 10.0);

        assert!(state.set_speed(0.0).is_err());
        assert!(state.set_speed(f32::NAN).is_err());
        assert_eq!(state.config().speed, 30.0);
    }

    #[test]
    fn test_invalid_initial_config_rejected() {
        let config = MarqueeConfig {
            speed: -5.0,
            ..MarqueeConfig::default()
        };
        let err = MarqueeState::new(config).unwrap_err();
        assert_eq!(err, ConfigError::InvalidSpeed { value: -5.0 });
    }

    #[test]
    fn test_direction_change_does_not_reset() {
        let mut state = reference_state();
        state.start();
        state.take_events();
        let offset = state.offset_x();

        state.set_direction(Direction::Right);
        assert_eq!(state.offset_x(), offset);
        assert!(state.take_events().is_empty());
    }

    #[test]
    fn test_tick_returns_new_offset() {
        let mut state = reference_state();
        state.start();

        let x = state.tick().unwrap();
        assert!((x - (-300.0 + 2.0 * 30.0 / TICK_RATE)).abs() < 1e-4);
        assert_eq!(x, state.offset_x());

        state.stop();
        assert_eq!(state.tick(), None);
    }

    #[test]
    fn test_undrained_event_queue_stays_bounded() {
        // A host that reads the state directly (the widget path) may
        // never call take_events(); a long run must not accumulate.
        let mut state = reference_state();
        state.start();
        for _ in 0..600 {
            state.tick();
        }
        assert_eq!(state.events.len(), MAX_PENDING_EVENTS);

        // newest offsets are the ones retained
        let last = state.events.back().cloned();
        assert_eq!(
            last,
            Some(MarqueeEvent::OffsetChanged {
                x: state.offset_x()
            })
        );
    }

    #[test]
    fn test_default_state_has_default_config() {
        let state = MarqueeState::default();
        assert_eq!(*state.config(), MarqueeConfig::default());
        assert!(state.config().validate().is_ok());
        assert!(!state.is_running());
        assert!(state.layout().is_empty());
    }

    #[test]
    fn test_start_after_teardown_is_noop() {
        let mut state = reference_state();
        state.teardown();
        state.start();
        assert!(!state.is_running());
        assert!(state.take_events().is_empty());
    }
}
