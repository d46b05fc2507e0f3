#![deny(unused_imports)]

pub mod error;
pub mod math;
pub mod parse;
pub mod utils;
