use std::collections::HashMap;
use tracing::{debug, info, warn};
use crate::domain::Order;
use super::{Inventory, Notifier, PaymentProcessor};

/// Inventory backed by a per-product stock table.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInventory {
    stock: HashMap<String, i32>,
}

impl InMemoryInventory {
    /// Builds an inventory pre-loaded with the given stock levels.
    pub fn with_stock<S: Into<String>>(levels: impl IntoIterator<Item = (S, i32)>) -> Self {
        Self {
            stock: levels.into_iter().map(|(product, qty)| (product.into(), qty)).collect(),
        }
    }

    /// Current available stock for `product`; unknown products have none.
    pub fn stock_level(&self, product: &str) -> i32 {
        self.stock.get(product).copied().unwrap_or(0)
    }
}

impl Inventory for InMemoryInventory {
    fn check_stock(&self, product: &str, quantity: i32) -> bool {
        let available = self.stock_level(product);
        debug!(product, quantity, available, "Checking stock");
        available >= quantity
    }

    fn reduce_stock(&mut self, product: &str, quantity: i32) {
        let level = self.stock.entry(product.to_string()).or_insert(0);
        // Callers check first; an unchecked over-reduction bottoms out at zero.
        *level = level.saturating_sub(quantity).max(0);
        debug!(product, quantity, remaining = *level, "Stock reduced");
    }

    fn increase_stock(&mut self, product: &str, quantity: i32) {
        let level = self.stock.entry(product.to_string()).or_insert(0);
        *level = level.checked_add(quantity).unwrap_or_else(|| {
            warn!(product, quantity, "Stock level capped at maximum");
            i32::MAX
        });
        debug!(product, quantity, remaining = *level, "Stock increased");
    }
}

/// Payment processor that approves any order up to a per-order quantity limit.
#[derive(Debug, Clone)]
pub struct LimitPaymentProcessor {
    limit: i32,
    approved: Vec<u64>,
}

impl LimitPaymentProcessor {
    pub fn new(limit: i32) -> Self {
        Self { limit, approved: Vec::new() }
    }

    /// Ids of every order this processor has approved, in call order.
    pub fn approved(&self) -> &[u64] {
        &self.approved
    }
}

impl PaymentProcessor for LimitPaymentProcessor {
    fn process_payment(&mut self, order: &Order) -> bool {
        if order.quantity > self.limit {
            warn!(order_id = order.id, quantity = order.quantity, limit = self.limit, "Payment declined");
            return false;
        }
        self.approved.push(order.id);
        info!(order_id = order.id, "Payment approved");
        true
    }
}

/// Notifier that writes confirmations to the tracing log.
#[derive(Debug, Clone, Default)]
pub struct LoggingNotifier {
    sent: Vec<u64>,
}

impl LoggingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> &[u64] {
        &self.sent
    }
}

impl Notifier for LoggingNotifier {
    fn send_confirmation(&mut self, order: &Order) {
        info!(order_id = order.id, product = %order.product, quantity = order.quantity, "Order confirmation sent");
        self.sent.push(order.id);
    }
}
