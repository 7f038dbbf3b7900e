//! The order-lifecycle coordinator.
//!
//! Sequences stock check, stock reservation, payment and notification for each
//! new order, and reverses the reservation when payment is declined.

mod reservation;

use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};
use crate::capabilities::{Inventory, Notifier, PaymentProcessor};
use crate::domain::Order;
use crate::error::OrderError;
use reservation::StockReservation;

/// Owns the order collection and drives every order through its lifecycle.
///
/// Orders are keyed by id. Ids are handed out in increasing order, so iterating
/// the map yields insertion order.
pub struct OrderCoordinator<I, P, N> {
    inventory: I,
    payment: P,
    notifier: N,
    orders: BTreeMap<u64, Order>,
    next_id: u64,
}

impl<I, P, N> OrderCoordinator<I, P, N>
where
    I: Inventory,
    P: PaymentProcessor,
    N: Notifier,
{
    pub fn new(inventory: I, payment: P, notifier: N) -> Self {
        Self {
            inventory,
            payment,
            notifier,
            orders: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Places a new order.
    ///
    /// Steps run strictly in order: check stock, reserve stock, take payment,
    /// then either confirm or release the reservation. Nothing is retried.
    ///
    /// # Errors
    /// - [`OrderError::EmptyProduct`] / [`OrderError::NonPositiveQuantity`] before
    ///   any collaborator is called.
    /// - [`OrderError::InsufficientStock`] if the stock check fails. No stock is
    ///   reserved.
    /// - [`OrderError::PaymentDeclined`] if payment fails. The reservation has
    ///   been returned by the time this is reported, and the order id stays
    ///   consumed.
    #[instrument(skip(self))]
    pub fn create(&mut self, product: &str, quantity: i32) -> Result<Order, OrderError> {
        validate(product, quantity)?;

        if !self.inventory.check_stock(product, quantity) {
            warn!("Insufficient stock");
            return Err(OrderError::InsufficientStock {
                product: product.to_string(),
                quantity,
            });
        }

        let reservation = StockReservation::reserve(&mut self.inventory, product, quantity);

        let id = self.next_id;
        self.next_id += 1;
        let mut order = Order::new(id, product, quantity);

        if !self.payment.process_payment(&order) {
            drop(reservation);
            warn!(order_id = id, "Payment declined, order discarded");
            return Err(OrderError::PaymentDeclined { order_id: id });
        }

        reservation.commit();
        order.mark_paid();
        self.orders.insert(id, order.clone());
        self.notifier.send_confirmation(&order);

        info!(order_id = id, "Order created successfully");
        Ok(order)
    }

    /// Changes the quantity of an existing order.
    ///
    /// Returns `false` if the order does not exist or `new_quantity` is not
    /// positive. Stock and payment are not revisited.
    #[instrument(skip(self))]
    pub fn update(&mut self, id: u64, new_quantity: i32) -> bool {
        let Some(order) = self.orders.get_mut(&id) else {
            debug!("Order not found");
            return false;
        };

        if new_quantity <= 0 {
            warn!("Rejected non-positive quantity");
            return false;
        }

        order.quantity = new_quantity;
        info!("Order updated successfully");
        true
    }

    /// Removes an order and returns its stock to the inventory.
    ///
    /// Returns `false` without side effects if the order does not exist.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: u64) -> bool {
        let Some(order) = self.orders.get(&id) else {
            debug!("Order not found");
            return false;
        };

        self.inventory.increase_stock(&order.product, order.quantity);
        self.orders.remove(&id);
        info!("Order removed successfully");
        true
    }

    pub fn get(&self, id: u64) -> Option<Order> {
        self.orders.get(&id).cloned()
    }

    /// Snapshot of all orders in insertion order.
    pub fn orders(&self) -> Vec<Order> {
        self.orders.values().cloned().collect()
    }

    pub fn inventory(&self) -> &I {
        &self.inventory
    }

    pub fn payment(&self) -> &P {
        &self.payment
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

fn validate(product: &str, quantity: i32) -> Result<(), OrderError> {
    if product.is_empty() {
        warn!("Validation failed: empty product");
        return Err(OrderError::EmptyProduct);
    }
    if quantity <= 0 {
        warn!("Validation failed: non-positive quantity");
        return Err(OrderError::NonPositiveQuantity(quantity));
    }
    Ok(())
}
