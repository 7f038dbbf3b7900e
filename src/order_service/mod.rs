//! Actor that owns one [`OrderCoordinator`] and serves it over a mailbox.
//!
//! The coordinator itself has no locking. Running it inside this service gives
//! every caller the same exclusive, one-request-at-a-time access.

use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use crate::capabilities::{Inventory, Notifier, PaymentProcessor};
use crate::clients::OrderClient;
use crate::coordinator::OrderCoordinator;
use crate::domain::{Order, OrderCreate};
use crate::error::OrderError;
use crate::messages::{OrderRequest, ServiceResponse};

pub struct OrderService<I, P, N> {
    receiver: mpsc::Receiver<OrderRequest>,
    coordinator: OrderCoordinator<I, P, N>,
}

impl<I, P, N> OrderService<I, P, N>
where
    I: Inventory,
    P: PaymentProcessor,
    N: Notifier,
{
    pub fn new(buffer_size: usize, coordinator: OrderCoordinator<I, P, N>) -> (Self, OrderClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self { receiver, coordinator };
        let client = OrderClient::new(sender);
        (service, client)
    }

    /// Main actor loop. Returns the coordinator once the mailbox is closed or a
    /// shutdown request arrives.
    #[instrument(name = "order_service", skip(self))]
    pub async fn run(mut self) -> OrderCoordinator<I, P, N> {
        info!("OrderService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                OrderRequest::Create { payload, respond_to } => {
                    self.handle_create_order(payload, respond_to);
                }
                OrderRequest::Get { id, respond_to } => {
                    self.handle_get_order(id, respond_to);
                }
                OrderRequest::Update { id, quantity, respond_to } => {
                    self.handle_update_order(id, quantity, respond_to);
                }
                OrderRequest::Remove { id, respond_to } => {
                    self.handle_remove_order(id, respond_to);
                }
                OrderRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.coordinator.orders()));
                }
                OrderRequest::Shutdown => {
                    info!("OrderService shutting down");
                    break;
                }
            }
        }

        info!("OrderService stopped");
        self.coordinator
    }

    #[instrument(fields(product = %payload.product, quantity = payload.quantity), skip(self, payload, respond_to))]
    fn handle_create_order(&mut self, payload: OrderCreate, respond_to: ServiceResponse<Order, OrderError>) {
        debug!("Processing create_order request");
        let result = self.coordinator.create(&payload.product, payload.quantity);
        let _ = respond_to.send(result);
    }

    #[instrument(fields(order_id = id), skip(self, respond_to))]
    fn handle_get_order(&self, id: u64, respond_to: ServiceResponse<Option<Order>, OrderError>) {
        debug!("Processing get_order request");
        let _ = respond_to.send(Ok(self.coordinator.get(id)));
    }

    #[instrument(fields(order_id = id), skip(self, respond_to))]
    fn handle_update_order(&mut self, id: u64, quantity: i32, respond_to: ServiceResponse<bool, OrderError>) {
        debug!("Processing update_order request");
        let _ = respond_to.send(Ok(self.coordinator.update(id, quantity)));
    }

    #[instrument(fields(order_id = id), skip(self, respond_to))]
    fn handle_remove_order(&mut self, id: u64, respond_to: ServiceResponse<bool, OrderError>) {
        debug!("Processing remove_order request");
        let _ = respond_to.send(Ok(self.coordinator.remove(id)));
    }
}
