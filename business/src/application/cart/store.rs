use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::gateway::CartGateway;
use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::logger::Logger;
use crate::domain::order::gateway::OrderGateway;
use crate::domain::order::model::{DirectOrderRequest, Order};
use crate::domain::session::model::Session;

/// Client-side mirror of the caller's cart.
///
/// Each mutation goes to the backend first; the cart it answers with replaces
/// the local copy wholesale and is published to every subscriber. Failed
/// mutations leave the last good cart in place, except [`CartStore::fetch`],
/// which falls back to an empty cart.
pub struct CartStore {
    session: Session,
    gateway: Arc<dyn CartGateway>,
    orders: Arc<dyn OrderGateway>,
    logger: Arc<dyn Logger>,
    state: watch::Sender<Cart>,
}

impl CartStore {
    pub fn new(
        session: Session,
        gateway: Arc<dyn CartGateway>,
        orders: Arc<dyn OrderGateway>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let (state, _) = watch::channel(Cart::empty());
        Self {
            session,
            gateway,
            orders,
            logger,
            state,
        }
    }

    /// Receiver notified after every replacement of the cart.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> Cart {
        self.state.borrow().clone()
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.state.borrow().items.clone()
    }

    pub fn total_price(&self) -> f64 {
        self.state.borrow().total_price
    }

    pub fn item_count(&self) -> u64 {
        self.state.borrow().item_count()
    }

    pub async fn fetch(&self) {
        self.logger.info("Fetching cart");
        match self.gateway.get(&self.session).await {
            Ok(cart) => {
                self.logger
                    .info(&format!("Cart loaded with {} lines", cart.items.len()));
                self.replace(cart);
            }
            Err(err) => {
                self.logger
                    .error(&format!("Failed to fetch cart, resetting: {}", err));
                self.replace(Cart::empty());
            }
        }
    }

    pub async fn add(&self, product_id: i64, quantity: u32) -> Result<(), CartError> {
        self.logger.info(&format!(
            "Adding product {} x{} to cart",
            product_id, quantity
        ));
        let cart = self
            .gateway
            .add(&self.session, product_id, quantity)
            .await
            .inspect_err(|e| self.logger.error(&format!("Failed to add to cart: {}", e)))?;
        self.replace(cart);
        Ok(())
    }

    /// Moves a line's quantity by `delta`. The server receives the absolute
    /// quantity. Unknown products and results below zero are ignored without
    /// contacting the server.
    pub async fn change_quantity(&self, product_id: i64, delta: i64) -> Result<(), CartError> {
        let target = self.state.borrow().target_quantity(product_id, delta);
        let Some(quantity) = target else {
            self.logger.debug(&format!(
                "Ignoring quantity change {} for product {}",
                delta, product_id
            ));
            return Ok(());
        };

        self.logger.info(&format!(
            "Setting quantity of product {} to {}",
            product_id, quantity
        ));
        let cart = self
            .gateway
            .update(&self.session, product_id, quantity)
            .await
            .inspect_err(|e| {
                self.logger
                    .error(&format!("Failed to update quantity: {}", e))
            })?;
        self.replace(cart);
        Ok(())
    }

    pub async fn remove(&self, product_id: i64) -> Result<(), CartError> {
        self.logger
            .info(&format!("Removing product {} from cart", product_id));
        let cart = self
            .gateway
            .remove(&self.session, product_id)
            .await
            .inspect_err(|e| {
                self.logger
                    .error(&format!("Failed to remove from cart: {}", e))
            })?;
        self.replace(cart);
        Ok(())
    }

    pub async fn clear(&self) -> Result<(), CartError> {
        self.logger.info("Clearing cart");
        self.gateway
            .clear(&self.session)
            .await
            .inspect_err(|e| self.logger.error(&format!("Failed to clear cart: {}", e)))?;
        self.replace(Cart::empty());
        Ok(())
    }

    /// Places a single-product order without touching the cart.
    pub async fn order_directly(&self, request: &DirectOrderRequest) -> Result<Order, CartError> {
        self.logger.info(&format!(
            "Ordering product {} x{} directly",
            request.product_id, request.quantity
        ));
        let order = self
            .orders
            .create_direct(&self.session, request)
            .await
            .inspect_err(|e| self.logger.error(&format!("Direct order failed: {}", e)))?;
        self.logger
            .info(&format!("Direct order created with id: {}", order.id));
        Ok(order)
    }

    fn replace(&self, cart: Cart) {
        self.state.send_replace(cart);
    }
}
