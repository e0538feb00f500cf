//! Types and pure logic shared by the catalogue backend and the web frontend

pub mod domain;
pub mod shared;
