use thiserror::Error;

/// Coarse classification of an [`OrderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied structurally invalid input. Nothing happened yet.
    InvalidArgument,
    /// A business precondition failed, possibly after side effects that have
    /// since been reversed.
    InvalidOperation,
    /// The order service could not be reached.
    Communication,
}

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Product name must not be empty")]
    EmptyProduct,
    #[error("Quantity must be positive, got {0}")]
    NonPositiveQuantity(i32),
    #[error("Insufficient stock: {quantity} x {product}")]
    InsufficientStock { product: String, quantity: i32 },
    #[error("Payment declined for order {order_id}")]
    PaymentDeclined { order_id: u64 },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::EmptyProduct | OrderError::NonPositiveQuantity(_) => ErrorKind::InvalidArgument,
            OrderError::InsufficientStock { .. } | OrderError::PaymentDeclined { .. } => {
                ErrorKind::InvalidOperation
            }
            OrderError::ActorCommunicationError(_) => ErrorKind::Communication,
        }
    }
}
