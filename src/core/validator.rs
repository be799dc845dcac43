//! Validation of the "add dish" form.
//!
//! Turns raw form input into a [`DishRecord`] or explains why it was rejected.

use super::course::Course;
use super::dish::{parse_price, DishId, DishRecord, MAX_PRICE, PLACEHOLDER_IMAGE};

/// Reasons a new dish can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Name, description or price is blank.
    #[error("Please fill all fields.")]
    MissingField,
    /// Price doesn't start with a number, or is not in `(0, MAX_PRICE]`.
    #[error("Please enter a valid price (e.g., 129).")]
    InvalidPrice,
}

/// Validate form input and build a new dish.
///
/// Text fields and the price are trimmed. The price only has to start
/// with a number (`"12abc"` is accepted as 12) and is kept in its entered
/// form rather than reformatted.
pub fn validate(
    dish_name: &str,
    description: &str,
    price: &str,
    course: Course,
) -> Result<DishRecord, ValidationError> {
    let dish_name = dish_name.trim();
    let description = description.trim();
    let price = price.trim();

    if dish_name.is_empty() || description.is_empty() || price.is_empty() {
        return Err(ValidationError::MissingField);
    }

    match parse_price(price) {
        Some(value) if value > 0.0 && value <= MAX_PRICE => {}
        _ => return Err(ValidationError::InvalidPrice),
    }

    Ok(DishRecord {
        id: DishId::generate(),
        dish_name: dish_name.to_string(),
        description: description.to_string(),
        course,
        price: price.to_string(),
        image: PLACEHOLDER_IMAGE.to_string(),
    })
}
