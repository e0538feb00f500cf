pub mod aggregate;

pub use aggregate::{slugify, Category, CategoryId};
