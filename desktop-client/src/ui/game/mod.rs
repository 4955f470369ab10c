pub mod board;
pub mod input;
