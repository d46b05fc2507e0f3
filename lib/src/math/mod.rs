mod complex;
mod noneg;
mod traits;

pub use complex::*;
pub use noneg::*;
pub use traits::*;
