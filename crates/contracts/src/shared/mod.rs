pub mod catalogue;
pub mod validation;
