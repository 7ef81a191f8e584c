pub mod error;
pub mod player_service;
pub mod pools;
pub mod team_service;

pub use error::*;
pub use player_service::*;
pub use pools::*;
pub use team_service::*;
