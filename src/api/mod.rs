pub mod handlers;
pub mod player_handlers;
pub mod routes;

pub use handlers::*;
pub use player_handlers::*;
pub use routes::*;
