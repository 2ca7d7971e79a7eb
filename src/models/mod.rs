pub mod common;
pub mod draw;

pub use common::*;
pub use draw::*;
