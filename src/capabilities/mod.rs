//! Collaborator contracts consumed by the [`OrderCoordinator`](crate::coordinator::OrderCoordinator).
//!
//! The coordinator never implements these itself. Production wiring injects the
//! in-memory versions from [`in_memory`]; tests inject recording mocks.

pub mod in_memory;

pub use in_memory::*;

use crate::domain::Order;

/// Stock tracking for products.
pub trait Inventory {
    /// Returns `true` if at least `quantity` units of `product` are available.
    fn check_stock(&self, product: &str, quantity: i32) -> bool;

    /// Takes `quantity` units of `product` out of available stock.
    fn reduce_stock(&mut self, product: &str, quantity: i32);

    /// Returns `quantity` units of `product` to available stock.
    fn increase_stock(&mut self, product: &str, quantity: i32);
}

/// Charges an order. Returns `false` when the payment is declined.
pub trait PaymentProcessor {
    fn process_payment(&mut self, order: &Order) -> bool;
}

/// Sends order confirmations. Fire-and-forget from the caller's side.
pub trait Notifier {
    fn send_confirmation(&mut self, order: &Order);
}
