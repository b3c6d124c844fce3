pub mod keyboard;
pub mod pointer;

pub use keyboard::wire_key_repeat;
pub use pointer::wire_pointer;
