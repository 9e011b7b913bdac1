pub mod gauge;
pub mod input;

pub use gauge::{moisture_slider, temperature_slider};
pub use input::{InputWidget, SelectWidget};
