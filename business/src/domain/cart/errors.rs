use crate::domain::errors::GatewayError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CartError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
