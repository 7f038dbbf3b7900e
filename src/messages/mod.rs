use tokio::sync::oneshot;
use crate::domain::{Order, OrderCreate};
use crate::error::OrderError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Requests handled by the order service. Each variant carries its parameters
/// and a oneshot channel for the response.
#[derive(Debug)]
pub enum OrderRequest {
    Create {
        payload: OrderCreate,
        respond_to: ServiceResponse<Order, OrderError>,
    },
    Get {
        id: u64,
        respond_to: ServiceResponse<Option<Order>, OrderError>,
    },
    Update {
        id: u64,
        quantity: i32,
        respond_to: ServiceResponse<bool, OrderError>,
    },
    Remove {
        id: u64,
        respond_to: ServiceResponse<bool, OrderError>,
    },
    List {
        respond_to: ServiceResponse<Vec<Order>, OrderError>,
    },
    Shutdown,
}
