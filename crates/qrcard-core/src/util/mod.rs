pub mod filename;
pub mod input;
