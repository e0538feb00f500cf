//! Sales-inbox mail for a received enquiry

use contracts::domain::a003_product::{Product, ProductId, Variant};
use std::collections::HashMap;

use super::repository::EnquiryRecord;
use crate::shared::mail::{escape, escape_multiline, MailMessage};

/// One enquiry line as written in the mail
struct Line {
    product: String,
    sku: Option<String>,
    variant: String,
    quantity: u32,
}

fn describe_lines(record: &EnquiryRecord, products: &HashMap<ProductId, Product>) -> Vec<Line> {
    record
        .submission
        .items
        .iter()
        .map(|item| match products.get(&item.product_id) {
            Some(product) => Line {
                product: product.name.clone(),
                sku: product.sku.clone(),
                variant: product
                    .variant_options()
                    .into_iter()
                    .find(|v| v.id == item.variant_id)
                    .map(|v| v.label)
                    .unwrap_or_else(|| format!("variant #{}", item.variant_id)),
                quantity: item.quantity,
            },
            None => Line {
                product: format!("product #{}", item.product_id),
                sku: None,
                variant: if item.variant_id == Variant::STANDARD_ID {
                    Variant::standard().label
                } else {
                    format!("variant #{}", item.variant_id)
                },
                quantity: item.quantity,
            },
        })
        .collect()
}

pub fn build(record: &EnquiryRecord, products: &HashMap<ProductId, Product>) -> MailMessage {
    let customer = &record.submission.customer;
    let lines = describe_lines(record, products);
    let subject = format!("New website enquiry from {}", customer.name);

    let mut text = format!(
        "Reference: {}\nReceived: {}\n\nName: {}\nCompany: {}\nEmail: {}\nPhone: {}\n\nItems:\n",
        record.reference,
        record.received_at.format("%Y-%m-%d %H:%M UTC"),
        customer.name,
        customer.company.as_deref().unwrap_or("-"),
        customer.email,
        customer.phone.as_deref().unwrap_or("-"),
    );
    for line in &lines {
        let sku = line.sku.as_deref().map(|s| format!(" [{}]", s)).unwrap_or_default();
        text.push_str(&format!(
            "- {} x {}{} ({})\n",
            line.quantity, line.product, sku, line.variant
        ));
    }
    if let Some(message) = &record.submission.message {
        text.push_str(&format!("\nMessage:\n{}\n", message));
    }

    let rows: String = lines
        .iter()
        .map(|line| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&line.product),
                escape(line.sku.as_deref().unwrap_or("")),
                escape(&line.variant),
                line.quantity
            )
        })
        .collect();
    let message_html = record
        .submission
        .message
        .as_deref()
        .map(|m| format!("<h3>Message</h3><p>{}</p>", escape_multiline(m)))
        .unwrap_or_default();
    let html = format!(
        "<h2>New website enquiry</h2>\
         <p><strong>Reference:</strong> {}</p>\
         <p><strong>Name:</strong> {}<br><strong>Company:</strong> {}<br>\
         <strong>Email:</strong> {}<br><strong>Phone:</strong> {}</p>\
         <table><thead><tr><th>Product</th><th>SKU</th><th>Variant</th><th>Qty</th></tr></thead>\
         <tbody>{}</tbody></table>{}",
        record.reference,
        escape(&customer.name),
        escape(customer.company.as_deref().unwrap_or("-")),
        escape(&customer.email),
        escape(customer.phone.as_deref().unwrap_or("-")),
        rows,
        message_html
    );

    MailMessage {
        subject,
        html,
        text,
        reply_to: Some(customer.email.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use contracts::domain::a001_category::CategoryId;
    use contracts::domain::a003_product::VariantId;
    use contracts::domain::a004_enquiry::{CustomerDetails, EnquiryItemDto, EnquirySubmission};
    use uuid::Uuid;

    fn record(name: &str) -> EnquiryRecord {
        EnquiryRecord {
            reference: Uuid::new_v4(),
            submission: EnquirySubmission {
                customer: CustomerDetails {
                    name: name.to_string(),
                    company: None,
                    email: "jo@example.com".to_string(),
                    phone: None,
                },
                message: Some("Line one\nLine two".to_string()),
                items: vec![
                    EnquiryItemDto {
                        product_id: ProductId(1),
                        variant_id: VariantId(0),
                        quantity: 3,
                    },
                    EnquiryItemDto {
                        product_id: ProductId(2),
                        variant_id: VariantId(0),
                        quantity: 1,
                    },
                ],
            },
            received_at: Utc::now(),
            notified: false,
        }
    }

    #[test]
    fn test_lines_use_store_names_and_fall_back_to_ids() {
        let mut products = HashMap::new();
        products.insert(
            ProductId(1),
            Product::new(1, CategoryId(1), "Frame Fixing").with_sku("FF-10"),
        );
        let mail = build(&record("Jo"), &products);
        assert!(mail.text.contains("3 x Frame Fixing [FF-10] (Standard)"));
        assert!(mail.text.contains("1 x product #2 (Standard)"));
        assert_eq!(mail.reply_to.as_deref(), Some("jo@example.com"));
    }

    #[test]
    fn test_html_escapes_customer_text() {
        let mail = build(&record("<b>Jo</b>"), &HashMap::new());
        assert!(!mail.html.contains("<b>Jo</b>"));
        assert!(mail.html.contains("&lt;b&gt;Jo"));
        assert!(mail.html.contains("<br>"));
    }
}
