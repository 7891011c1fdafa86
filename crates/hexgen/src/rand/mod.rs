mod interface;
mod worker;

pub use interface::*;
pub use worker::*;
