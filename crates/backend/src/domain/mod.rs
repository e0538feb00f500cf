pub mod a004_enquiry;
pub mod a006_contact;
