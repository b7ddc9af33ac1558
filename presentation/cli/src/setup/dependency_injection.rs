use std::sync::Arc;

use logger::tracing_logger::TracingLogger;
use rest_client::booking::gateway::BookingGatewayHttp;
use rest_client::cart::gateway::CartGatewayHttp;
use rest_client::client::ApiClient;
use rest_client::order::gateway::OrderGatewayHttp;
use rest_client::product::gateway::ProductGatewayHttp;
use rest_client::statistics::gateway::StatisticsGatewayHttp;
use session::file_repository::FileSessionRepository;

use business::application::admin::bookings::BookingController;
use business::application::admin::orders::OrderController;
use business::application::cart::store::CartStore;
use business::application::catalog::products::ProductCatalog;
use business::application::statistics::dashboard::Dashboard;
use business::domain::booking::gateway::BookingGateway;
use business::domain::cart::gateway::CartGateway;
use business::domain::interaction::{Dialogs, Notifier};
use business::domain::logger::Logger;
use business::domain::order::gateway::OrderGateway;
use business::domain::product::gateway::ProductGateway;
use business::domain::session::model::Session;
use business::domain::session::repository::SessionRepository;
use business::domain::statistics::gateway::StatisticsGateway;

use crate::config::app_config::AppConfig;
use crate::terminal::dialogs::{Presets, TerminalDialogs};
use crate::terminal::notifier::TerminalNotifier;

/// Wires adapters into the application services for one run of the CLI.
pub struct DependencyContainer {
    pub session_repository: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
    pub notifier: Arc<dyn Notifier>,
    cart_gateway: Arc<dyn CartGateway>,
    booking_gateway: Arc<dyn BookingGateway>,
    order_gateway: Arc<dyn OrderGateway>,
    product_gateway: Arc<dyn ProductGateway>,
    statistics_gateway: Arc<dyn StatisticsGateway>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);

        // Infrastructure adapters
        let client = Arc::new(ApiClient::new(&config.api)?);
        let session_repository = Arc::new(FileSessionRepository::new(config.session.path.clone()));

        logger.debug(&format!("Using backend at {}", client.base_url()));

        Ok(Self {
            session_repository,
            logger,
            notifier: Arc::new(TerminalNotifier),
            cart_gateway: Arc::new(CartGatewayHttp::new(client.clone())),
            booking_gateway: Arc::new(BookingGatewayHttp::new(client.clone())),
            order_gateway: Arc::new(OrderGatewayHttp::new(client.clone())),
            product_gateway: Arc::new(ProductGatewayHttp::new(client.clone())),
            statistics_gateway: Arc::new(StatisticsGatewayHttp::new(client)),
        })
    }

    pub async fn session(&self) -> anyhow::Result<Session> {
        Ok(self.session_repository.load().await?)
    }

    pub fn cart_store(&self, session: Session) -> CartStore {
        CartStore::new(
            session,
            self.cart_gateway.clone(),
            self.order_gateway.clone(),
            self.logger.clone(),
        )
    }

    pub fn booking_controller(&self, session: Session, presets: Presets) -> BookingController {
        BookingController::new(
            session,
            self.booking_gateway.clone(),
            dialogs(presets),
            self.notifier.clone(),
            self.logger.clone(),
        )
    }

    pub fn order_controller(&self, session: Session, presets: Presets) -> OrderController {
        OrderController::new(
            session,
            self.order_gateway.clone(),
            dialogs(presets),
            self.notifier.clone(),
            self.logger.clone(),
        )
    }

    pub fn product_catalog(&self, session: Session) -> ProductCatalog {
        ProductCatalog {
            session,
            gateway: self.product_gateway.clone(),
            logger: self.logger.clone(),
        }
    }

    pub fn dashboard(&self, session: Session) -> Dashboard {
        Dashboard {
            session,
            gateway: self.statistics_gateway.clone(),
            logger: self.logger.clone(),
        }
    }
}

fn dialogs(presets: Presets) -> Arc<dyn Dialogs> {
    Arc::new(TerminalDialogs::new(presets))
}
