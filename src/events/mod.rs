pub mod pointer;
pub mod window;

pub use pointer::wire_pointer;
pub use window::{wire_resize, wire_visibility};
