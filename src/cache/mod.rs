//! Process-wide lookup caches
//!
//! Built on first use and shared by every effect afterwards. Each cache sits
//! behind a `OnceLock`, so concurrent first calls build it exactly once.

pub mod shapes;
pub mod trig;

pub use shapes::{ShapeCache, shape_cache};
pub use trig::{TrigCache, trig_cache};
