pub mod generate;
pub mod layout;
