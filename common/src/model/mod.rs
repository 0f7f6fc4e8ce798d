pub mod board;
pub mod endpoint;
