mod digits;
mod interface;
mod lower;

pub use digits::*;
pub use interface::*;
pub use lower::*;
