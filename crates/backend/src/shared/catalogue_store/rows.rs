//! Store row shapes and their normalisation into domain types.
//!
//! The store returns blank strings and nulls interchangeably, and embeds
//! `product_attributes` either as an object, a one-element array or null.
//! Variants come from their own collection and are attached afterwards.

use contracts::domain::a001_category::{slugify, Category, CategoryId};
use contracts::domain::a002_brand::{Brand, BrandId};
use contracts::domain::a003_product::{AttributeSet, Product, ProductId, Variant, VariantId};
use contracts::domain::a005_specialist_service::{SpecialistService, SpecialistServiceId};
use contracts::domain::common::non_blank;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Deserialize)]
pub struct CategoryRow {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        let name = row.name.trim().to_string();
        let slug = non_blank(row.slug).unwrap_or_else(|| slugify(&name));
        Category {
            id: CategoryId(row.id),
            name,
            slug,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BrandRow {
    pub id: i64,
    pub name: String,
}

impl From<BrandRow> for Brand {
    fn from(row: BrandRow) -> Self {
        Brand {
            id: BrandId(row.id),
            name: row.name.trim().to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VariantRow {
    pub id: i64,
    pub product_id: i64,
    #[serde(default, alias = "name")]
    pub variant_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProductRow {
    pub id: i64,
    pub category_id: i64,
    #[serde(default)]
    pub brand_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub product_attributes: Option<serde_json::Value>,
}

/// Attribute object from whatever shape the embed arrived in
fn attributes_from(value: Option<serde_json::Value>) -> Option<AttributeSet> {
    let object = match value? {
        serde_json::Value::Object(map) => map,
        serde_json::Value::Array(items) => match items.into_iter().next()? {
            serde_json::Value::Object(map) => map,
            _ => return None,
        },
        _ => return None,
    };
    let values: BTreeMap<String, serde_json::Value> = object.into_iter().collect();
    let set = AttributeSet::from(values);
    (!set.is_empty()).then_some(set)
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: ProductId(row.id),
            category_id: CategoryId(row.category_id),
            brand_id: row.brand_id.map(BrandId),
            name: row.name.trim().to_string(),
            sku: non_blank(row.sku),
            description: non_blank(row.description),
            image_ref: non_blank(row.image_url),
            is_active: row.is_active.unwrap_or(true),
            attributes: attributes_from(row.product_attributes),
            variants: Vec::new(),
        }
    }
}

impl From<VariantRow> for Variant {
    fn from(row: VariantRow) -> Self {
        Variant {
            id: VariantId(row.id),
            label: non_blank(row.variant_name).unwrap_or_else(|| format!("Option {}", row.id)),
        }
    }
}

/// Hand each product the variant rows that reference it, in row order
pub fn attach_variants(products: &mut [Product], rows: Vec<VariantRow>) {
    let mut by_product: HashMap<i64, Vec<Variant>> = HashMap::new();
    for row in rows {
        by_product.entry(row.product_id).or_default().push(row.into());
    }
    for product in products {
        if let Some(variants) = by_product.remove(&product.id.0) {
            product.variants = variants;
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SpecialistServiceRow {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl From<SpecialistServiceRow> for SpecialistService {
    fn from(row: SpecialistServiceRow) -> Self {
        SpecialistService {
            id: SpecialistServiceId(row.id),
            name: row.name.trim().to_string(),
            description: non_blank(row.description),
            image_ref: non_blank(row.image_url),
            is_active: row.is_active.unwrap_or(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_product::AttributeValue;
    use serde_json::json;

    fn product(value: serde_json::Value) -> Product {
        serde_json::from_value::<ProductRow>(value).unwrap().into()
    }

    #[test]
    fn test_blank_strings_become_none() {
        let p = product(json!({
            "id": 1, "category_id": 1, "name": " Screw ",
            "sku": "", "description": "   ", "image_url": null
        }));
        assert_eq!(p.name, "Screw");
        assert_eq!(p.sku, None);
        assert_eq!(p.description, None);
        assert!(p.is_active);
        assert!(p.attributes.is_none());
    }

    #[test]
    fn test_attributes_accept_object_or_array() {
        let from_object = product(json!({
            "id": 1, "category_id": 1, "name": "Screw",
            "product_attributes": {"id": 9, "product_id": 1, "length_mm": 50, "material": "Steel", "finish": ""}
        }));
        let attrs = from_object.attributes.unwrap();
        assert_eq!(attrs.get("length_mm"), Some(&AttributeValue::Number(50.0)));
        assert!(attrs.get("product_id").is_none());
        assert!(attrs.get("finish").is_none());

        let from_array = product(json!({
            "id": 2, "category_id": 1, "name": "Bolt",
            "product_attributes": [{"material": "Brass"}]
        }));
        assert_eq!(
            from_array.attributes.unwrap().get("material"),
            Some(&AttributeValue::Text("Brass".to_string()))
        );

        let empty = product(json!({
            "id": 3, "category_id": 1, "name": "Nail", "product_attributes": []
        }));
        assert!(empty.attributes.is_none());
    }

    #[test]
    fn test_variants_attached_by_product() {
        let mut products = vec![
            product(json!({"id": 1, "category_id": 1, "name": "Sealant"})),
            product(json!({"id": 2, "category_id": 1, "name": "Foam"})),
        ];
        let rows: Vec<VariantRow> = serde_json::from_value(json!([
            {"id": 4, "product_id": 1, "variant_name": "Clear"},
            {"id": 5, "product_id": 1, "variant_name": ""},
            {"id": 6, "product_id": 99, "variant_name": "Orphan"}
        ]))
        .unwrap();
        attach_variants(&mut products, rows);

        assert_eq!(
            products[0].variants,
            vec![Variant::new(4, "Clear"), Variant::new(5, "Option 5")]
        );
        assert!(products[1].variants.is_empty());
        assert_eq!(products[1].variant_options(), vec![Variant::standard()]);
    }

    #[test]
    fn test_category_slug_from_name() {

        let c: Category = serde_json::from_value::<CategoryRow>(json!({"id": 3, "name": "Power Tools", "slug": null}))
            .unwrap()
            .into();
        assert_eq!(c.slug, "power-tools");
    }
}
