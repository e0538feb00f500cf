pub mod aggregate;

pub use aggregate::{SpecialistService, SpecialistServiceId};
