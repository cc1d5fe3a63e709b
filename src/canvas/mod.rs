//! Chart canvas: layout variants, gestures and rendering

mod gesture;
mod layout;
pub mod render;

pub use gesture::{GestureController, GestureState, ResizeHandle};
pub use layout::CanvasLayout;
