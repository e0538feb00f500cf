pub mod aggregate;
pub mod cart;

pub use aggregate::{
    CustomerDetails, EnquiryItemDto, EnquiryLineItem, EnquiryReceipt, EnquirySubmission,
    LineKey, SubmissionError,
};
pub use cart::{AddOutcome, CartError, CartState, EnquiryCart, SubmissionPhase};
