pub mod generate;
pub mod schematics;
