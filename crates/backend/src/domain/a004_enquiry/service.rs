use chrono::Utc;
use contracts::domain::a003_product::{Product, ProductId};
use contracts::domain::a004_enquiry::{EnquiryReceipt, EnquirySubmission};
use contracts::domain::common::non_blank;
use sea_orm::DatabaseConnection;
use std::collections::{BTreeSet, HashMap};
use uuid::Uuid;

use super::{notification, repository, repository::EnquiryRecord};
use crate::shared::api_error::ApiError;
use crate::shared::catalogue_store::CatalogueStore;
use crate::shared::mail::Mailer;

/// Current product data for the lines of an enquiry; empty when the store
/// cannot be reached
async fn lookup_products(
    store: &dyn CatalogueStore,
    submission: &EnquirySubmission,
) -> HashMap<ProductId, Product> {
    let ids: Vec<ProductId> = submission
        .items
        .iter()
        .map(|i| i.product_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    match store.products_by_ids(&ids).await {
        Ok(products) => products.into_iter().map(|p| (p.id, p)).collect(),
        Err(e) => {
            tracing::warn!("Product lookup for enquiry mail failed, listing ids only: {}", e);
            HashMap::new()
        }
    }
}

/// Validate, store and announce an enquiry.
///
/// The stored record is authoritative: once it is written the enquiry is
/// acknowledged even if the notification mail fails.
pub async fn submit(
    db: &DatabaseConnection,
    store: &dyn CatalogueStore,
    mailer: &dyn Mailer,
    submission: EnquirySubmission,
) -> Result<EnquiryReceipt, ApiError> {
    let submission = EnquirySubmission {
        customer: submission.customer.normalized(),
        message: non_blank(submission.message),
        items: submission.items,
    };
    submission.validate()?;

    let mut record = EnquiryRecord {
        reference: Uuid::new_v4(),
        submission,
        received_at: Utc::now(),
        notified: false,
    };
    repository::insert(db, &record).await?;
    tracing::info!(
        reference = %record.reference,
        items = record.submission.items.len(),
        "Enquiry stored"
    );

    let products = lookup_products(store, &record.submission).await;
    let mail = notification::build(&record, &products);
    match mailer.send(&mail).await {
        Ok(()) => {
            record.notified = true;
            if let Err(e) = repository::mark_notified(db, record.reference).await {
                tracing::warn!(reference = %record.reference, "Could not flag enquiry as notified: {:#}", e);
            }
        }
        Err(e) => {
            tracing::error!(reference = %record.reference, "Enquiry notification failed: {}", e);
        }
    }

    Ok(EnquiryReceipt {
        reference: record.reference,
        received_at: record.received_at,
        notified: record.notified,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalogue_store::memory::InMemoryStore;
    use crate::shared::data::db::connect_in_memory;
    use crate::shared::mail::recording::RecordingMailer;
    use contracts::domain::a001_category::CategoryId;
    use contracts::domain::a003_product::VariantId;
    use contracts::domain::a004_enquiry::{CustomerDetails, EnquiryItemDto};

    fn submission() -> EnquirySubmission {
        EnquirySubmission {
            customer: CustomerDetails {
                name: "  Jo Builder ".to_string(),
                company: Some("  ".to_string()),
                email: "jo@example.com".to_string(),
                phone: None,
            },
            message: Some("".to_string()),
            items: vec![EnquiryItemDto {
                product_id: ProductId(1),
                variant_id: VariantId(0),
                quantity: 2,
            }],
        }
    }

    fn store() -> InMemoryStore {
        InMemoryStore {
            products: vec![Product::new(1, CategoryId(1), "Frame Fixing")],
            ..InMemoryStore::default()
        }
    }

    #[tokio::test]
    async fn test_valid_enquiry_is_stored_and_mailed() {
        let db = connect_in_memory().await.unwrap();
        let mailer = RecordingMailer::default();

        let receipt = submit(&db, &store(), &mailer, submission()).await.unwrap();
        assert!(receipt.notified);

        let stored = repository::get_by_id(&db, receipt.reference)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.submission.customer.name, "Jo Builder");
        assert_eq!(stored.submission.customer.company, None);
        assert_eq!(stored.submission.message, None);
        assert!(stored.notified);

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].text.contains("2 x Frame Fixing"));
    }

    #[tokio::test]
    async fn test_invalid_enquiry_is_rejected_before_storage() {
        let db = connect_in_memory().await.unwrap();
        let mailer = RecordingMailer::default();
        let mut bad = submission();
        bad.customer.email = "not-an-email".to_string();
        bad.items.clear();

        match submit(&db, &store(), &mailer, bad).await {
            Err(ApiError::Invalid(errors)) => {
                assert!(errors.contains("customer.email"));
                assert!(errors.contains("items"));
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert!(mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn test_mail_failure_still_acknowledges() {
        let db = connect_in_memory().await.unwrap();
        let mailer = RecordingMailer::failing();

        let receipt = submit(&db, &InMemoryStore::offline(), &mailer, submission())
            .await
            .unwrap();
        assert!(!receipt.notified);
        let stored = repository::get_by_id(&db, receipt.reference)
            .await
            .unwrap()
            .unwrap();
        assert!(!stored.notified);
    }
}
