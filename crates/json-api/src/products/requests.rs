//! Product request bodies.

use serde::Deserialize;

use ordering_app::{
    domain::{
        categories::records::CategoryUuid,
        products::{
            data::{NewProductOption, ProductDetails},
            records::ProductOptionUuid,
        },
    },
    validation::{FieldErrors, optional_text, required_text, validate_price},
};

use crate::requests::loose_string;

/// Product create and update body.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProductRequest {
    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "loose_string")]
    pub price: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub options: Option<Vec<ProductOptionRequest>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProductOptionRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "loose_string")]
    pub price: Option<String>,
}

impl ProductRequest {
    pub(crate) fn validate(self) -> Result<ProductDetails, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = required_text(&mut errors, "name", self.name.as_deref(), "Name is required");
        let price = validate_price(&mut errors, "price", self.price.as_deref());
        let category_uuid = validate_category(&mut errors, self.category.as_deref());

        let options: Vec<_> = self
            .options
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, option)| option.validate(&mut errors, index))
            .collect();

        match (name, price, category_uuid) {
            (Some(name), Some(price), Some(category_uuid)) if errors.is_empty() => {
                Ok(ProductDetails {
                    category_uuid,
                    name,
                    price,
                    description: optional_text(self.description.as_deref()),
                    options: options.into_iter().flatten().collect(),
                })
            }
            _ => Err(errors),
        }
    }
}

impl ProductOptionRequest {
    fn validate(self, errors: &mut FieldErrors, index: usize) -> Option<NewProductOption> {
        let name = required_text(
            errors,
            &format!("options[{index}].name"),
            self.name.as_deref(),
            "Name is required",
        );
        let price = validate_price(errors, &format!("options[{index}].price"), self.price.as_deref());

        Some(NewProductOption {
            uuid: ProductOptionUuid::new(),
            name: name?,
            price: price?,
        })
    }
}

/// A blank category leaves the product uncategorised.
fn validate_category(errors: &mut FieldErrors, value: Option<&str>) -> Option<Option<CategoryUuid>> {
    let Some(raw) = value.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Some(None);
    };

    match raw.parse() {
        Ok(category) => Some(Some(category)),
        Err(_ignored) => {
            errors.push("category", value, "Category is invalid");

            None
        }
    }
}
