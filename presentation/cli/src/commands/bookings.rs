use crate::cli::BookingCommand;
use crate::render;
use crate::setup::dependency_injection::DependencyContainer;
use crate::terminal::dialogs::Presets;

use super::{report, screen_ready};

pub async fn run(
    command: BookingCommand,
    yes: bool,
    container: &DependencyContainer,
) -> anyhow::Result<bool> {
    let session = container.session().await?;
    let presets = Presets {
        assume_yes: yes,
        ..Presets::default()
    };
    let controller = container.booking_controller(session.clone(), presets);

    controller.load().await;
    if !screen_ready(&controller.snapshot(), &session, container.notifier.as_ref()) {
        return Ok(false);
    }

    let outcome = match command {
        BookingCommand::List(args) => {
            controller.set_page(args.page);
            println!(
                "{}",
                render::table(&controller.snapshot(), render::BOOKING_HEADER, render::booking_row)
            );
            return Ok(true);
        }
        BookingCommand::Show { id } => {
            return Ok(match controller.view_details(id).await {
                Some(booking) => {
                    println!("{}", render::booking_details(&booking));
                    true
                }
                None => false,
            });
        }
        BookingCommand::Confirm { id } => controller.confirm(id).await,
        BookingCommand::Cancel { id } => controller.cancel(id).await,
        BookingCommand::ApproveCancel { id } => controller.approve_cancel(id).await,
        BookingCommand::RejectCancel { id } => controller.reject_cancel(id).await,
        BookingCommand::Delete { id } => controller.delete(id).await,
    };

    Ok(report(outcome))
}
