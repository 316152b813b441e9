pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_escape_closes_nav;
pub use pointer::wire_pointer_tracking;
