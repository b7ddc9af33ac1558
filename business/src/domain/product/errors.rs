use crate::domain::errors::GatewayError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProductError {
    #[error("product.login_required")]
    LoginRequired,
    #[error("product.name_empty")]
    NameEmpty,
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
