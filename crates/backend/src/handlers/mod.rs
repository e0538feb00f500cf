pub mod a001_category;
pub mod a002_brand;
pub mod a003_product;
pub mod a004_enquiry;
pub mod a005_specialist_service;
pub mod a006_contact;
