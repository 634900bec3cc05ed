use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new("not_finite"));
    }
    Ok(())
}

/// Item record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Storage-assigned identifier
    #[serde(rename = "id_item")]
    #[schema(example = 1)]
    pub id: i32,
    #[serde(rename = "nama_item")]
    #[schema(example = "Pen")]
    pub name: String,
    #[schema(example = "pcs")]
    pub unit: String,
    #[serde(rename = "stok")]
    #[schema(example = 10)]
    pub stock: i32,
    #[serde(rename = "harga_satuan")]
    #[schema(example = 1.5)]
    pub unit_price: f64,
}

impl Item {
    pub fn from_input(id: i32, input: ItemInput) -> Self {
        Self {
            id,
            name: input.name,
            unit: input.unit,
            stock: input.stock,
            unit_price: input.unit_price,
        }
    }
}

/// Body of create and update requests; every field is required.
///
/// Zero stock and zero price are valid values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ItemInput {
    #[serde(rename = "nama_item")]
    #[validate(
        length(min = 1, message = "nama_item must not be empty"),
        custom(function = "validate_not_blank", message = "nama_item must not be blank")
    )]
    #[schema(example = "Pen")]
    pub name: String,

    #[validate(
        length(min = 1, message = "unit must not be empty"),
        custom(function = "validate_not_blank", message = "unit must not be blank")
    )]
    #[schema(example = "pcs")]
    pub unit: String,

    #[serde(rename = "stok")]
    #[validate(range(min = 0, message = "stok must not be negative"))]
    #[schema(example = 10, minimum = 0)]
    pub stock: i32,

    #[serde(rename = "harga_satuan")]
    #[validate(
        range(min = 0.0, message = "harga_satuan must not be negative"),
        custom(function = "validate_finite", message = "harga_satuan must be a finite number")
    )]
    #[schema(example = 1.5, minimum = 0)]
    pub unit_price: f64,
}

/// Query string of the detail endpoint
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemIdQuery {
    /// Item ID
    pub id_item: i32,
}
