pub mod api_error;
pub mod app_state;
pub mod catalogue_store;
pub mod config;
pub mod data;
pub mod mail;
