pub mod helper;

mod extreme;
pub use extreme::{Extreme, Max, Min};
