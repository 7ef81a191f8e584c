pub mod common;
pub mod player;
pub mod team;

pub use common::*;
pub use player::*;
pub use team::*;
