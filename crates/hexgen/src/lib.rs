#![doc = include_str!("../README.md")]

mod error;
mod file;
mod hex;
mod mutex;
mod rand;
mod writer;

pub use crate::error::*;
pub use crate::file::*;
pub use crate::hex::*;
pub use crate::rand::*;
pub use crate::writer::*;
