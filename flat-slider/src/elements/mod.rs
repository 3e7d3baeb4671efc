//! Bearing elements and their nodes

mod flat_slider;
mod frame;
mod node;

pub use flat_slider::FlatSlider;
pub use frame::OrientationFrame;
pub use node::Node;
