pub mod about;
pub mod package;
