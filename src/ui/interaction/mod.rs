//! Click interaction system.
//!
//! Views register a [`HitArea`] for every clickable element while they
//! render. The shell hit-tests mouse clicks against the areas of the last
//! frame and dispatches the stored [`Intent`](crate::app::Intent).

mod hit_area;

pub use hit_area::{HitArea, HitAreaRegistry};
