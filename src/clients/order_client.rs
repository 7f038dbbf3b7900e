use tokio::sync::mpsc;
use tracing::{debug, instrument};
use crate::domain::{Order, OrderCreate};
use crate::error::OrderError;
use crate::messages::OrderRequest;

/// Client for interacting with the order service.
///
/// Every call is queued on the service mailbox, so concurrent callers are
/// serialized and each request sees the result of the ones before it.
#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<OrderRequest>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<OrderRequest>) -> Self {
        Self { sender }
    }

    /// Asks the service to stop after the requests already queued.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), OrderError> {
        debug!("Sending request");
        self.sender
            .send(OrderRequest::Shutdown)
            .await
            .map_err(|_| OrderError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(OrderClient => fn create_order(payload: OrderCreate) -> Order as OrderRequest::Create, Error = OrderError);
client_method!(OrderClient => fn get_order(id: u64) -> Option<Order> as OrderRequest::Get, Error = OrderError);
client_method!(OrderClient => fn update_order(id: u64, quantity: i32) -> bool as OrderRequest::Update, Error = OrderError);
client_method!(OrderClient => fn remove_order(id: u64) -> bool as OrderRequest::Remove, Error = OrderError);
client_method!(OrderClient => fn list_orders() -> Vec<Order> as OrderRequest::List, Error = OrderError);
