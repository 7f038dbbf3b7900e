use tracing::{debug, warn};
use crate::capabilities::Inventory;

/// Stock taken out of the inventory for an order that is not yet paid.
///
/// Dropping an uncommitted reservation puts the stock back. Call
/// [`commit`](Self::commit) once the order is paid to keep the stock reduced.
pub(crate) struct StockReservation<'a, I: Inventory> {
    inventory: &'a mut I,
    product: &'a str,
    quantity: i32,
    committed: bool,
}

impl<'a, I: Inventory> StockReservation<'a, I> {
    pub(crate) fn reserve(inventory: &'a mut I, product: &'a str, quantity: i32) -> Self {
        inventory.reduce_stock(product, quantity);
        debug!(product, quantity, "Stock reserved");
        Self {
            inventory,
            product,
            quantity,
            committed: false,
        }
    }

    pub(crate) fn commit(mut self) {
        self.committed = true;
    }
}

impl<I: Inventory> Drop for StockReservation<'_, I> {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        warn!(product = self.product, quantity = self.quantity, "Releasing stock reservation");
        self.inventory.increase_stock(self.product, self.quantity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::InMemoryInventory;

    #[test]
    fn dropped_reservation_restores_stock() {
        let mut inventory = InMemoryInventory::with_stock([("laptop", 5)]);
        {
            let _reservation = StockReservation::reserve(&mut inventory, "laptop", 2);
        }
        assert_eq!(inventory.stock_level("laptop"), 5);
    }

    #[test]
    fn committed_reservation_keeps_stock_reduced() {
        let mut inventory = InMemoryInventory::with_stock([("laptop", 5)]);
        StockReservation::reserve(&mut inventory, "laptop", 2).commit();
        assert_eq!(inventory.stock_level("laptop"), 3);
    }
}
