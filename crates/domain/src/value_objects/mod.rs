//! Value objects - immutable-by-identity domain values

mod gesture;
mod progress;

pub use gesture::{
    DragRelease, GestureConfig, GestureDecision, SwipeDirection, DEFAULT_SWIPE_THRESHOLD,
    DEFAULT_VELOCITY_THRESHOLD,
};
pub use progress::UserProgress;
