//! Keyed interpolation between successive chart renders.

mod active;
mod easing;
mod engine;
mod state;

pub use active::ActiveTransition;
pub use easing::Easing;
pub use engine::{
    AnimatedLabel, AnimatedShape, ChartTransition, TransitionPhase, transition_labels,
    transition_shapes,
};
pub use state::RenderState;
