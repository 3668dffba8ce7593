pub mod entities;
pub mod policies;
pub mod ports;
pub mod prompt;
pub mod schema;
pub mod services;

pub use entities::*;
pub use ports::*;
