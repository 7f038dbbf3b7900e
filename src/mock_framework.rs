//! # Mock Framework
//!
//! Utilities for testing the coordinator and the order client in isolation.
//!
//! The `Mock*` collaborators record every call so tests can assert exactly what
//! the coordinator did. Use [`create_mock_client`] to get a client and a
//! receiver, then helpers like [`expect_create`] to answer requests by hand.

use std::sync::Mutex;
use tokio::sync::mpsc;
use crate::capabilities::{Inventory, Notifier, PaymentProcessor};
use crate::clients::OrderClient;
use crate::domain::{Order, OrderCreate};
use crate::error::OrderError;
use crate::messages::{OrderRequest, ServiceResponse};

/// One recorded inventory call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryCall {
    Check(String, i32),
    Reduce(String, i32),
    Increase(String, i32),
}

/// Inventory whose stock check always answers `in_stock`.
#[derive(Debug, Default)]
pub struct MockInventory {
    in_stock: bool,
    calls: Mutex<Vec<InventoryCall>>,
}

impl MockInventory {
    pub fn in_stock() -> Self {
        Self { in_stock: true, calls: Mutex::default() }
    }

    pub fn out_of_stock() -> Self {
        Self { in_stock: false, calls: Mutex::default() }
    }

    pub fn calls(&self) -> Vec<InventoryCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn reduced(&self) -> Vec<(String, i32)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                InventoryCall::Reduce(product, qty) => Some((product, qty)),
                _ => None,
            })
            .collect()
    }

    pub fn increased(&self) -> Vec<(String, i32)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                InventoryCall::Increase(product, qty) => Some((product, qty)),
                _ => None,
            })
            .collect()
    }
}

impl Inventory for MockInventory {
    fn check_stock(&self, product: &str, quantity: i32) -> bool {
        self.calls.lock().unwrap().push(InventoryCall::Check(product.to_string(), quantity));
        self.in_stock
    }

    fn reduce_stock(&mut self, product: &str, quantity: i32) {
        self.calls.get_mut().unwrap().push(InventoryCall::Reduce(product.to_string(), quantity));
    }

    fn increase_stock(&mut self, product: &str, quantity: i32) {
        self.calls.get_mut().unwrap().push(InventoryCall::Increase(product.to_string(), quantity));
    }
}

/// Payment processor with a fixed answer. Keeps every order it was asked to charge.
#[derive(Debug, Default)]
pub struct MockPayment {
    approve: bool,
    pub charged: Vec<Order>,
}

impl MockPayment {
    pub fn approving() -> Self {
        Self { approve: true, charged: Vec::new() }
    }

    pub fn declining() -> Self {
        Self { approve: false, charged: Vec::new() }
    }
}

impl PaymentProcessor for MockPayment {
    fn process_payment(&mut self, order: &Order) -> bool {
        self.charged.push(order.clone());
        self.approve
    }
}

#[derive(Debug, Default)]
pub struct MockNotifier {
    pub sent: Vec<Order>,
}

impl Notifier for MockNotifier {
    fn send_confirmation(&mut self, order: &Order) {
        self.sent.push(order.clone());
    }
}

/// Creates a mock client and a receiver for asserting requests.
///
/// No service is started. Requests sent through the client land on the
/// returned receiver, where the test inspects them and answers through the
/// oneshot responder. This makes success, failure and dropped responses
/// deterministic.
pub fn create_mock_client(buffer_size: usize) -> (OrderClient, mpsc::Receiver<OrderRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (OrderClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create(
    receiver: &mut mpsc::Receiver<OrderRequest>,
) -> Option<(OrderCreate, ServiceResponse<Order, OrderError>)> {
    match receiver.recv().await {
        Some(OrderRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<OrderRequest>,
) -> Option<(u64, i32, ServiceResponse<bool, OrderError>)> {
    match receiver.recv().await {
        Some(OrderRequest::Update { id, quantity, respond_to }) => Some((id, quantity, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Remove request
pub async fn expect_remove(
    receiver: &mut mpsc::Receiver<OrderRequest>,
) -> Option<(u64, ServiceResponse<bool, OrderError>)> {
    match receiver.recv().await {
        Some(OrderRequest::Remove { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let create_task = tokio::spawn(async move {
            client.create_order(OrderCreate::new("laptop", 1)).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.product, "laptop");
        assert_eq!(payload.quantity, 1);
        let mut order = Order::new(1, "laptop", 1);
        order.is_paid = true;
        responder.send(Ok(order.clone())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(order));
    }

    #[test]
    fn test_mock_inventory_records_calls() {
        let mut inventory = MockInventory::in_stock();
        assert!(inventory.check_stock("laptop", 1));
        inventory.reduce_stock("laptop", 1);
        inventory.increase_stock("laptop", 1);

        assert_eq!(inventory.reduced(), vec![("laptop".to_string(), 1)]);
        assert_eq!(inventory.increased(), vec![("laptop".to_string(), 1)]);
        assert_eq!(inventory.calls().len(), 3);
    }
}
