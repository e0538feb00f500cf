pub mod aggregate;

pub use aggregate::{ContactForm, ContactReason, ContactRequest, ContactResponse};
