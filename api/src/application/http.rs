pub mod health;
pub mod recipe;
pub mod recommendation;
pub mod server;
