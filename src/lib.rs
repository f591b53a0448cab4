//! Drag-and-snap pullers, directional force totals and bounded sliders for
//! forces-and-motion physics toys.
//!
//! `tugrope` holds the interactive logic behind a tug-of-war scene: pullers
//! dragged from a toolbox onto knots of a rope, the left/right/net force they
//! produce, and the applied-force slider that turns a thumb drag into a
//! bounded value. Rendering and the physics step that moves the cart live
//! outside the crate.
//!
//! # Features
//!
//! - **Knot snapping**: closest free knot of the right colour within a capture threshold
//! - **Exclusive binding**: at most one puller per knot, both sides updated together
//! - **Force totals**: left, right and net force, cached per rope version
//! - **Force arrows**: arrow endpoints from the totals
//! - **Slider mapping**: clamped pixel-to-value mapping with optional reset on release
//! - **Observable**: watch highlights and bindings via the `RopeObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod float;
pub mod vec;
pub mod mapper;
pub mod slider;
pub mod knot;
pub mod puller;
pub mod rope;
pub mod force;
pub mod arrows;
pub mod go_pause;
pub mod tug_of_war;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use mapper::{to_pixel, to_value, LinearMapper};
pub use slider::{Slider, Tick};
pub use knot::{Knot, KnotId, Side, Size, Team};
pub use puller::{Puller, PullerId};
pub use rope::{DragEvent, Rope};
pub use force::{compute_totals, ForceAggregator, ForceTotals};
pub use arrows::{ArrowSpan, ForceArrows};
pub use go_pause::{GoPause, GoPauseLabel};
pub use tug_of_war::TugOfWar;
pub use config::{ReleasePolicy, RopeConfig, SliderConfig};
pub use observer::{RopeObserver, NoOpRopeObserver};
pub use error::{AssignmentError, ConfigError};
