use business::domain::session::model::Session;

use crate::cli::LoginArgs;
use crate::setup::dependency_injection::DependencyContainer;

pub async fn login(args: LoginArgs, container: &DependencyContainer) -> anyhow::Result<bool> {
    let session = Session::from_stored(Some(args.token));
    if !session.is_authenticated() {
        container.notifier.error("The token must not be empty.");
        return Ok(false);
    }
    container.session_repository.save(&session).await?;
    container.logger.info("Session stored");
    container.notifier.success("Logged in.");
    Ok(true)
}

pub async fn logout(container: &DependencyContainer) -> anyhow::Result<bool> {
    container.session_repository.clear().await?;
    container.logger.info("Session cleared");
    container.notifier.success("Logged out.");
    Ok(true)
}
