pub mod definition;
pub mod sprites;
