pub mod palette;
pub mod legend;

pub use palette::*;
pub use legend::*;
