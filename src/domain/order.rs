/// Represents one accepted purchase order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: u64,
    pub product: String,
    pub quantity: i32,
    pub is_paid: bool,
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub product: String,
    pub quantity: i32,
}

impl Order {
    /// Creates an unpaid order.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the coordinator
    /// * `product` - Product name
    /// * `quantity` - Number of units ordered
    ///
    /// # Notes
    /// `is_paid` starts as `false` and is only flipped by the coordinator once
    /// the payment processor approves the order.
    pub fn new(id: u64, product: impl Into<String>, quantity: i32) -> Self {
        Self {
            id,
            product: product.into(),
            quantity,
            is_paid: false,
        }
    }

    pub(crate) fn mark_paid(&mut self) {
        self.is_paid = true;
    }
}

impl OrderCreate {
    pub fn new(product: impl Into<String>, quantity: i32) -> Self {
        Self {
            product: product.into(),
            quantity,
        }
    }
}
