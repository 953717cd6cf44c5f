pub mod convert;
pub mod info;
pub mod keysheet;

pub use convert::*;
pub use info::*;
pub use keysheet::*;
