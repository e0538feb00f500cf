pub mod list;

pub use list::SpecialistServices;
