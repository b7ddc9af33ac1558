use business::domain::cart::errors::CartError;
use business::domain::errors::GatewayError;
use business::domain::product::errors::ProductError;

/// Turns a domain error into the line shown to the user.
pub trait IntoUserMessage {
    fn into_user_message(self) -> String;
}

impl IntoUserMessage for GatewayError {
    fn into_user_message(self) -> String {
        self.message_or("Something went wrong, please try again.")
    }
}

impl IntoUserMessage for CartError {
    fn into_user_message(self) -> String {
        match self {
            CartError::Gateway(err) => err.message_or("Could not update your cart."),
        }
    }
}

impl IntoUserMessage for ProductError {
    fn into_user_message(self) -> String {
        match self {
            ProductError::LoginRequired => "Please log in to view the menu.".to_string(),
            ProductError::NameEmpty => "Product name must not be empty.".to_string(),
            ProductError::Gateway(err) => err.message_or("Could not load products."),
        }
    }
}
