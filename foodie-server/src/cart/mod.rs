//! Session cart
//!
//! Lines are keyed by `(food_id, hotel_id)`; the same dish from two hotels
//! is two lines. The cart is cleared when an order is placed or the session
//! ends.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{CartAddRequest, CartItem};

/// Largest quantity a single line may hold
pub const MAX_LINE_QUANTITY: i64 = 999;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }

    /// Total quantity across all lines
    pub fn count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |total, item| total.saturating_add(item.quantity))
    }

    /// Add a line, or bump the quantity of the matching one
    ///
    /// A merge that would push the line past [`MAX_LINE_QUANTITY`] is
    /// rejected and leaves the cart unchanged.
    pub fn add(&mut self, item: CartItem) -> AppResult<()> {
        checked_quantity(Some(item.quantity))?;
        match self.position(item.food_id, item.hotel_id) {
            Some(i) => {
                let line = &mut self.items[i];
                line.quantity = checked_quantity(line.quantity.checked_add(item.quantity))?;
            }
            None => self.items.push(item),
        }
        Ok(())
    }

    /// Set a line's quantity; zero or below removes it
    pub fn update(&mut self, food_id: i64, hotel_id: Option<i64>, quantity: i64) -> AppResult<()> {
        let i = self
            .position(food_id, hotel_id)
            .ok_or_else(|| AppError::new(ErrorCode::CartItemNotFound))?;
        if quantity <= 0 {
            self.items.remove(i);
        } else {
            self.items[i].quantity = checked_quantity(Some(quantity))?;
        }
        Ok(())
    }

    /// Removing a missing line is a no-op
    pub fn remove(&mut self, food_id: i64, hotel_id: Option<i64>) {
        self.items
            .retain(|item| !(item.food_id == food_id && item.hotel_id == hotel_id));
    }

    fn position(&self, food_id: i64, hotel_id: Option<i64>) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.food_id == food_id && item.hotel_id == hotel_id)
    }
}

fn checked_quantity(quantity: Option<i64>) -> AppResult<i64> {
    match quantity {
        Some(q) if (1..=MAX_LINE_QUANTITY).contains(&q) => Ok(q),
        _ => Err(AppError::new(ErrorCode::CartInvalidQuantity)),
    }
}

/// Build a cart line from an add request
///
/// `foodId`, `foodName` and `price` are required; quantity defaults to 1.
pub fn validate_add(req: CartAddRequest) -> AppResult<CartItem> {
    let food_id = req.food_id.ok_or_else(|| AppError::required_field("foodId"))?;
    let food_name = req
        .food_name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| AppError::required_field("foodName"))?;
    let price = req.price.ok_or_else(|| AppError::required_field("price"))?;
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::validation("Price must be greater than zero"));
    }
    let quantity = checked_quantity(Some(req.quantity.unwrap_or(1)))?;

    Ok(CartItem {
        food_id,
        food_name,
        price,
        quantity,
        hotel_id: req.hotel_id,
        hotel_name: req.hotel_name,
        image_url: req.image_url,
    })
}
