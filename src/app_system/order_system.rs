use tokio::task::JoinHandle;
use tracing::{error, info};
use crate::capabilities::{InMemoryInventory, LimitPaymentProcessor, LoggingNotifier};
use crate::clients::OrderClient;
use crate::coordinator::OrderCoordinator;
use crate::order_service::OrderService;
use super::SystemConfig;

/// Coordinator wired to the in-memory collaborators.
pub type InMemoryCoordinator = OrderCoordinator<InMemoryInventory, LimitPaymentProcessor, LoggingNotifier>;

/// The main application system.
///
/// Responsible for building the collaborators, starting the order service, and
/// handling shutdown. Must be created inside a tokio runtime.
pub struct OrderSystem {
    pub order_client: OrderClient,
    handle: JoinHandle<InMemoryCoordinator>,
}

impl OrderSystem {
    pub fn new(config: SystemConfig) -> Self {
        info!(
            mailbox_capacity = config.mailbox_capacity,
            payment_limit = config.payment_limit,
            "Starting order system"
        );

        let inventory = InMemoryInventory::with_stock(config.initial_stock);
        let payment = LimitPaymentProcessor::new(config.payment_limit);
        let coordinator = OrderCoordinator::new(inventory, payment, LoggingNotifier::new());

        let (service, order_client) = OrderService::new(config.mailbox_capacity, coordinator);
        let handle = tokio::spawn(service.run());

        Self { order_client, handle }
    }

    /// Stops the order service after the requests already queued and hands
    /// back its final state.
    pub async fn shutdown(self) -> Result<InMemoryCoordinator, String> {
        info!("Shutting down system...");

        if let Err(e) = self.order_client.shutdown().await {
            // Service already gone; the join below reports why.
            error!(error = %e, "Shutdown request not delivered");
        }
        drop(self.order_client);

        match self.handle.await {
            Ok(coordinator) => {
                info!("System shutdown complete.");
                Ok(coordinator)
            }
            Err(e) => {
                error!("Order service task failed: {:?}", e);
                Err(format!("Order service task failed: {:?}", e))
            }
        }
    }
}
