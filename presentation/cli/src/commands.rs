pub mod auth;
pub mod bookings;
pub mod cart;
pub mod orders;
pub mod products;
pub mod stats;

use business::application::admin::action_runner::ActionOutcome;
use business::application::admin::collection::{CollectionSnapshot, ScreenState};
use business::domain::interaction::Notifier;
use business::domain::session::model::Session;

use crate::cli::Commands;
use crate::setup::dependency_injection::DependencyContainer;

/// Runs one command. `Ok(false)` means it failed and the user was told why.
pub async fn run(command: Commands, yes: bool, container: &DependencyContainer) -> anyhow::Result<bool> {
    match command {
        Commands::Login(args) => auth::login(args, container).await,
        Commands::Logout => auth::logout(container).await,
        Commands::Cart(command) => cart::run(command, container).await,
        Commands::Bookings(command) => bookings::run(command, yes, container).await,
        Commands::Orders(command) => orders::run(command, yes, container).await,
        Commands::Products(command) => products::run(command, container).await,
        Commands::Stats(command) => stats::run(command, container).await,
    }
}

/// Whether an admin screen loaded. An anonymous session fails without a
/// notification, so the reason is reported here.
fn screen_ready<R>(snapshot: &CollectionSnapshot<R>, session: &Session, notifier: &dyn Notifier) -> bool {
    match &snapshot.state {
        ScreenState::Ready => true,
        ScreenState::Failed(message) => {
            if !session.is_authenticated() {
                notifier.error(message);
            }
            false
        }
        ScreenState::Loading => false,
    }
}

fn report(outcome: ActionOutcome) -> bool {
    match outcome {
        ActionOutcome::Applied => true,
        ActionOutcome::Dismissed | ActionOutcome::Unchanged => {
            println!("Nothing was changed.");
            true
        }
        ActionOutcome::Failed(_) => false,
    }
}
