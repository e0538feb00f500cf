use chrono::{DateTime, Utc};
use contracts::domain::a004_enquiry::{CustomerDetails, EnquiryItemDto, EnquirySubmission};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::Unchanged, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a004_enquiry")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub customer_name: String,
    pub company: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub items_json: String,
    pub item_count: i32,
    pub notified: bool,
    pub received_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A stored enquiry
#[derive(Debug, Clone, PartialEq)]
pub struct EnquiryRecord {
    pub reference: Uuid,
    pub submission: EnquirySubmission,
    pub received_at: DateTime<Utc>,
    pub notified: bool,
}

impl TryFrom<Model> for EnquiryRecord {
    type Error = anyhow::Error;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let items: Vec<EnquiryItemDto> = serde_json::from_str(&m.items_json)?;
        Ok(EnquiryRecord {
            reference: Uuid::parse_str(&m.id)?,
            submission: EnquirySubmission {
                customer: CustomerDetails {
                    name: m.customer_name,
                    company: m.company,
                    email: m.email,
                    phone: m.phone,
                },
                message: m.message,
                items,
            },
            received_at: m.received_at,
            notified: m.notified,
        })
    }
}

pub async fn insert(db: &DatabaseConnection, record: &EnquiryRecord) -> anyhow::Result<()> {
    let submission = &record.submission;
    let active = ActiveModel {
        id: Set(record.reference.to_string()),
        customer_name: Set(submission.customer.name.clone()),
        company: Set(submission.customer.company.clone()),
        email: Set(submission.customer.email.clone()),
        phone: Set(submission.customer.phone.clone()),
        message: Set(submission.message.clone()),
        items_json: Set(serde_json::to_string(&submission.items)?),
        item_count: Set(i32::try_from(submission.items.len())?),
        notified: Set(record.notified),
        received_at: Set(record.received_at),
    };
    active.insert(db).await?;
    Ok(())
}

pub async fn mark_notified(db: &DatabaseConnection, reference: Uuid) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Unchanged(reference.to_string()),
        notified: Set(true),
        ..Default::default()
    };
    active.update(db).await?;
    Ok(())
}

pub async fn get_by_id(
    db: &DatabaseConnection,
    reference: Uuid,
) -> anyhow::Result<Option<EnquiryRecord>> {
    Entity::find_by_id(reference.to_string())
        .one(db)
        .await?
        .map(EnquiryRecord::try_from)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;
    use contracts::domain::a003_product::{ProductId, VariantId};

    fn record() -> EnquiryRecord {
        EnquiryRecord {
            reference: Uuid::new_v4(),
            submission: EnquirySubmission {
                customer: CustomerDetails {
                    name: "Jo Builder".to_string(),
                    company: Some("Builders Ltd".to_string()),
                    email: "jo@example.com".to_string(),
                    phone: None,
                },
                message: Some("Need by Friday".to_string()),
                items: vec![EnquiryItemDto {
                    product_id: ProductId(4),
                    variant_id: VariantId(0),
                    quantity: 12,
                }],
            },
            received_at: Utc::now(),
            notified: false,
        }
    }

    #[tokio::test]
    async fn test_insert_and_read_back() {
        let db = connect_in_memory().await.unwrap();
        let record = record();
        insert(&db, &record).await.unwrap();

        let loaded = get_by_id(&db, record.reference).await.unwrap().unwrap();
        assert_eq!(loaded.submission, record.submission);
        assert!(!loaded.notified);

        mark_notified(&db, record.reference).await.unwrap();
        let loaded = get_by_id(&db, record.reference).await.unwrap().unwrap();
        assert!(loaded.notified);
    }

    #[tokio::test]
    async fn test_missing_reference() {
        let db = connect_in_memory().await.unwrap();
        assert!(get_by_id(&db, Uuid::new_v4()).await.unwrap().is_none());
    }
}
