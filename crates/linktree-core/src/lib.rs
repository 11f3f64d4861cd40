pub mod constants;
pub mod error;
pub mod galaxy;
pub mod paint;
pub mod particles;
pub mod pointer;
pub mod theme;

pub use error::CoreError;
pub use galaxy::*;
pub use paint::*;
pub use particles::*;
pub use pointer::*;
pub use theme::*;
