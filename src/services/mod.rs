pub mod fs;
pub mod select;
