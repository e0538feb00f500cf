//! Client-held enquiry cart
//!
//! Line items are keyed by (product, variant): adding an existing key merges
//! quantities instead of appending a second line. Insertion order is kept for
//! display. The cart also tracks its panel visibility and the lifecycle of
//! the current submission so a second submit cannot start while one is in
//! flight.

use std::collections::HashMap;
use thiserror::Error;

use super::aggregate::{
    CustomerDetails, EnquiryItemDto, EnquiryLineItem, EnquiryReceipt, EnquirySubmission, LineKey,
    SubmissionError,
};
use crate::domain::a003_product::{ProductRef, Variant};
use crate::domain::common::text::non_blank;
use crate::shared::validation::FieldErrors;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CartError {
    #[error("quantity must be a whole number of at least 1")]
    InvalidQuantity,

    #[error("the enquiry list is empty")]
    EmptyCart,

    #[error("an enquiry is already being sent")]
    SubmissionInProgress,

    #[error("please correct the highlighted fields")]
    Validation(FieldErrors),
}

/// Result of a successful `add_item`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended at this position
    Appended(usize),
    /// An existing line at this position had its quantity increased
    Merged(usize),
}

/// Lifecycle of the most recent submission
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Sent(EnquiryReceipt),
    Failed(SubmissionError),
}

/// Visibility × content, as the panel renders it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartState {
    EmptyClosed,
    EmptyOpen,
    /// Emptied by a successful submission; the panel shows a confirmation
    EmptyOpenPostSubmit,
    PopulatedClosed,
    PopulatedOpen,
}

/// Parse a quantity typed into a form field.
///
/// Accepts whole positive numbers only ("3", "3.0"); rejects text, fractions,
/// zero, negatives and non-finite input.
pub fn parse_quantity_input(raw: &str) -> Result<u32, CartError> {
    let value: f64 = raw.trim().parse().map_err(|_| CartError::InvalidQuantity)?;
    quantity_from_f64(value)
}

fn quantity_from_f64(value: f64) -> Result<u32, CartError> {
    if !value.is_finite() || value.fract() != 0.0 || value < 1.0 || value > u32::MAX as f64 {
        return Err(CartError::InvalidQuantity);
    }
    Ok(value as u32)
}

#[derive(Debug, Clone, Default)]
pub struct EnquiryCart {
    items: Vec<EnquiryLineItem>,
    index: HashMap<LineKey, usize>,
    open: bool,
    phase: SubmissionPhase,
    /// Lines carried by the submission currently in flight
    in_flight: Vec<EnquiryItemDto>,
}

impl EnquiryCart {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn items(&self) -> &[EnquiryLineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Submitting)
    }

    pub fn state(&self) -> CartState {
        match (self.items.is_empty(), self.open) {
            (true, false) => CartState::EmptyClosed,
            (true, true) if matches!(self.phase, SubmissionPhase::Sent(_)) => {
                CartState::EmptyOpenPostSubmit
            }
            (true, true) => CartState::EmptyOpen,
            (false, false) => CartState::PopulatedClosed,
            (false, true) => CartState::PopulatedOpen,
        }
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Add `quantity` of (product, variant), merging into an existing line
    /// with the same key. Non-positive quantities leave the cart untouched.
    pub fn add_item(
        &mut self,
        product: ProductRef,
        variant: Variant,
        quantity: i64,
    ) -> Result<AddOutcome, CartError> {
        let quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q >= 1)
            .ok_or(CartError::InvalidQuantity)?;
        self.leave_post_submit();

        let key = LineKey {
            product_id: product.id,
            variant_id: variant.id,
        };
        if let Some(&position) = self.index.get(&key) {
            let line = &mut self.items[position];
            line.quantity = line.quantity.saturating_add(quantity);
            return Ok(AddOutcome::Merged(position));
        }

        let position = self.items.len();
        self.items.push(EnquiryLineItem {
            product,
            variant,
            quantity,
        });
        self.index.insert(key, position);
        Ok(AddOutcome::Appended(position))
    }

    /// Add and show the panel
    pub fn add_item_and_open(
        &mut self,
        product: ProductRef,
        variant: Variant,
        quantity: i64,
    ) -> Result<AddOutcome, CartError> {
        let outcome = self.add_item(product, variant, quantity)?;
        self.open = true;
        Ok(outcome)
    }

    /// `add_item_and_open` for a quantity typed by the user
    pub fn add_input_and_open(
        &mut self,
        product: ProductRef,
        variant: Variant,
        raw_quantity: &str,
    ) -> Result<AddOutcome, CartError> {
        let quantity = parse_quantity_input(raw_quantity)?;
        self.add_item_and_open(product, variant, i64::from(quantity))
    }

    /// Set the quantity of the line at `index`, clamped to at least 1.
    /// Returns `false` when there is no such line.
    pub fn update_quantity(&mut self, index: usize, quantity: i64) -> bool {
        let Some(line) = self.items.get_mut(index) else {
            return false;
        };
        line.quantity = quantity.clamp(1, i64::from(u32::MAX)) as u32;
        true
    }

    /// Remove the line at `index`; later lines shift down by one.
    /// Out-of-range indices are a no-op and return `None`.
    pub fn remove_item(&mut self, index: usize) -> Option<EnquiryLineItem> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.reindex();
        Some(removed)
    }

    /// Empty the cart unconditionally
    pub fn clear(&mut self) {
        self.items.clear();
        self.index.clear();
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
        if !open {
            self.leave_post_submit();
        }
    }

    pub fn toggle(&mut self) {
        self.set_open(!self.open);
    }

    // ------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------

    /// Immutable snapshot of the cart for the submission endpoint.
    /// Only identities and quantities are carried.
    pub fn build_submission_payload(
        &self,
        customer: &CustomerDetails,
        note: Option<&str>,
    ) -> EnquirySubmission {
        EnquirySubmission {
            customer: customer.normalized(),
            message: non_blank(note.map(str::to_string)),
            items: self
                .items
                .iter()
                .map(|line| EnquiryItemDto {
                    product_id: line.product.id,
                    variant_id: line.variant.id,
                    quantity: line.quantity,
                })
                .collect(),
        }
    }

    /// Validate and mark the cart as submitting. While submitting, further
    /// calls fail with `SubmissionInProgress`.
    pub fn begin_submission(
        &mut self,
        customer: &CustomerDetails,
        note: Option<&str>,
    ) -> Result<EnquirySubmission, CartError> {
        if self.is_submitting() {
            return Err(CartError::SubmissionInProgress);
        }
        if self.items.is_empty() {
            return Err(CartError::EmptyCart);
        }
        let payload = self.build_submission_payload(customer, note);
        payload.customer.check().map_err(CartError::Validation)?;
        self.phase = SubmissionPhase::Submitting;
        self.in_flight = payload.items.clone();
        Ok(payload)
    }

    /// Apply the outcome of the submission started by `begin_submission`.
    ///
    /// Success removes what was sent and leaves the panel open on the
    /// confirmation. Lines added while the request was in flight stay.
    /// Failure keeps every line so the user can retry.
    pub fn complete_submission(&mut self, result: Result<EnquiryReceipt, SubmissionError>) {
        if !self.is_submitting() {
            return;
        }
        let sent = std::mem::take(&mut self.in_flight);
        match result {
            Ok(receipt) => {
                self.remove_sent(sent);
                self.phase = SubmissionPhase::Sent(receipt);
            }
            Err(err) => {
                self.phase = SubmissionPhase::Failed(err);
            }
        }
    }

    /// Take submitted quantities off their lines; a line is dropped once
    /// nothing beyond the submitted quantity remains.
    fn remove_sent(&mut self, sent: Vec<EnquiryItemDto>) {
        let sent: HashMap<LineKey, u32> = sent
            .into_iter()
            .map(|item| {
                let key = LineKey {
                    product_id: item.product_id,
                    variant_id: item.variant_id,
                };
                (key, item.quantity)
            })
            .collect();
        self.items.retain_mut(|line| match sent.get(&line.key()) {
            Some(&quantity) if line.quantity > quantity => {
                line.quantity -= quantity;
                true
            }
            Some(_) => false,
            None => true,
        });
        self.reindex();
    }

    fn leave_post_submit(&mut self) {
        if matches!(self.phase, SubmissionPhase::Sent(_) | SubmissionPhase::Failed(_)) {
            self.phase = SubmissionPhase::Idle;
        }
    }

    fn reindex(&mut self) {
        self.index = self
            .items
            .iter()
            .enumerate()
            .map(|(position, line)| (line.key(), position))
            .collect();
    }
}

impl PartialEq for EnquiryCart {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items && self.open == other.open && self.phase == other.phase
    }
}
