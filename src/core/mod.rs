pub mod loader;
pub mod markup;
pub mod math;
pub mod nav;
pub mod pointer;
pub mod reveal;
pub mod scroll;
pub mod slide;
pub mod toast;
pub mod tween;
pub mod units;
pub mod validate;

pub use pointer::{Direction, PointerTracker};
pub use reveal::{Bounds, FrameSlot, HoverItem, ItemBounds, PanelTransform};
pub use slide::PanelState;
