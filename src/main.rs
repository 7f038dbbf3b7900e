mod domain;
mod error;
mod capabilities;
mod coordinator;
mod messages;
mod clients;
mod order_service;

mod app_system;

#[cfg(test)]
mod mock_framework;

use tracing::{error, info, warn, Instrument};
use crate::app_system::{setup_tracing, OrderSystem, SystemConfig};
use crate::domain::OrderCreate;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting application with order system");

    let system = OrderSystem::new(config);
    let client = system.order_client.clone();

    let span = tracing::info_span!("order_creation");
    let order = async {
        info!("Placing order for one laptop");
        client.create_order(OrderCreate::new("laptop", 1)).await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    info!(order_id = order.id, "Order placed successfully");

    // Above the payment limit with default config, so payment is declined
    // and the reservation is released.
    let span = tracing::info_span!("large_order");
    let large_order = async {
        info!("Placing order for five laptops");
        client.create_order(OrderCreate::new("laptop", 5)).await
    }
    .instrument(span)
    .await;

    match large_order {
        Ok(order) => info!(order_id = order.id, "Large order placed successfully"),
        Err(e) => warn!(error = %e, kind = ?e.kind(), "Large order rejected"),
    }

    let span = tracing::info_span!("order_maintenance", order_id = order.id);
    async {
        match client.update_order(order.id, 2).await {
            Ok(true) => info!("Quantity changed"),
            Ok(false) => warn!("Quantity change rejected"),
            Err(e) => error!(error = %e, "Update failed"),
        }

        if let Ok(Some(current)) = client.get_order(order.id).await {
            info!(quantity = current.quantity, "Current order state");
        }

        match client.list_orders().await {
            Ok(orders) => info!(order_count = orders.len(), "Retrieved order list"),
            Err(e) => error!(error = %e, "Listing orders failed"),
        }

        match client.remove_order(order.id).await {
            Ok(removed) => info!(removed, "Order removal finished"),
            Err(e) => error!(error = %e, "Remove failed"),
        }
    }
    .instrument(span)
    .await;

    drop(client);
    let coordinator = system.shutdown().await?;

    info!(
        laptop_stock = coordinator.inventory().stock_level("laptop"),
        payments = coordinator.payment().approved().len(),
        confirmations = coordinator.notifier().sent().len(),
        "Application completed successfully"
    );
    Ok(())
}
