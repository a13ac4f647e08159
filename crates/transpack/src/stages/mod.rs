pub mod emit;
pub mod package;
pub mod render;
pub mod scan;
