pub mod common;
pub mod completion;
pub mod prompt;
pub mod recipe;
pub mod recommendation;
