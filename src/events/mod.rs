pub mod pointer;
pub mod resize;
pub mod visibility;

pub use pointer::wire_pointer_tracking;
pub use resize::{on_resize, on_resize_debounced};
pub use visibility::pause_while_hidden;
