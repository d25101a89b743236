//! A horizontally scrolling marquee strip widget for iced
//!
//! Lays a sequence of child elements out end-to-end with configurable
//! spacing, then scrolls them continuously through the viewport at a
//! configurable speed, jumping back to the start when the content has
//! fully traveled past the end.
//!
//! # Architecture
//!
//! The crate is split into a platform-independent core and a thin iced
//! layer:
//!
//! - **Layout** (`layout`): pure positioning math - item offsets and
//!   total content width from measured sizes plus spacing
//! - **Driver** (`driver`): the fixed-rate animation state machine that
//!   produces the stream of horizontal offsets
//! - **Engine** (`engine`): per-widget state gluing the two together,
//!   with validated configuration and a drainable event queue
//! - **Widget** (`widget`): the iced `Widget` implementation and the
//!   tick subscription that drives the engine
//!
//! # Usage
//!
//! ```rust,ignore
//! // in the host's state
//! let marquee = Rc::new(RefCell::new(MarqueeState::default()));
//! marquee.borrow_mut().start();
//!
//! // in subscription()
//! marquee::tick_subscription(self.marquee.borrow().is_running())
//!     .map(|_| Message::MarqueeTick)
//!
//! // in update()
//! Message::MarqueeTick => {
//!     self.marquee.borrow_mut().tick();
//! }
//!
//! // in view()
//! Marquee::new(self.marquee.clone(), items).height(40).into()
//! ```
//!
//! The widget reads the state directly, so draining the event queue
//! with [`MarqueeState::take_events`] is optional (the queue is
//! bounded); event-driven hosts without the widget can drain it, or
//! use the offset returned by [`MarqueeState::tick`].

pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod layout;
pub mod widget;

pub use config::MarqueeConfig;
pub use driver::{Direction, TICK_INTERVAL, TICK_RATE};
pub use engine::{MarqueeEvent, MarqueeState};
pub use error::ConfigError;
pub use layout::{ItemSize, MarqueeLayout, compute_layout};
pub use widget::{Marquee, tick_subscription};
