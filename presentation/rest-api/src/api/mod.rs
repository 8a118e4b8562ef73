pub mod connectivity;
pub mod diagnostics;
pub mod error;
pub mod health;
pub mod recipe;
pub mod tags;
