pub mod chat;
pub mod health;
pub mod ingredient;
pub mod pantry;
pub mod recipe;
pub mod server;
