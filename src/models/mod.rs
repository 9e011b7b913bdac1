pub mod inputs;
pub mod recommendation;

pub use inputs::*;
pub use recommendation::*;
