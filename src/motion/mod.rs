//! A small tweening engine: easing curves, tweens, timelines and scroll
//! triggers as pure functions of time, plus a browser [`Player`] that writes
//! the sampled poses to DOM elements every animation frame.

mod ease;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
mod player;
mod pose;
mod timeline;
mod trigger;
mod tween;

pub use ease::Ease;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use player::{bind_scroll, select, Player};
pub use pose::{tilt, Pose};
pub use timeline::{Position, Timeline};
pub use trigger::{Action, Anchor, Edge, Region, ScrollTrigger, ToggleActions};
pub use tween::{Repeat, Tween};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    #[error("unknown ease: {0}")]
    UnknownEase(String),
    #[error("invalid trigger anchor: {0}")]
    InvalidAnchor(String),
    #[error("invalid timeline position: {0}")]
    InvalidPosition(String),
    #[error("invalid toggle actions: {0}")]
    InvalidToggleActions(String),
}
