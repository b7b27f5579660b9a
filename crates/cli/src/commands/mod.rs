pub mod draw;
pub mod pick;
pub mod recipe;
