pub mod extract;
pub mod tables;
pub mod text;
