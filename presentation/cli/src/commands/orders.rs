use crate::cli::OrderCommand;
use crate::render;
use crate::setup::dependency_injection::DependencyContainer;
use crate::terminal::dialogs::{Presets, parse_delivery_date};

use super::{report, screen_ready};

pub async fn run(
    command: OrderCommand,
    yes: bool,
    container: &DependencyContainer,
) -> anyhow::Result<bool> {
    let mut presets = Presets {
        assume_yes: yes,
        ..Presets::default()
    };
    match &command {
        OrderCommand::Statuses {
            order_status,
            payment_status,
            ..
        } => {
            presets.order_status = *order_status;
            presets.payment_status = *payment_status;
        }
        OrderCommand::DeliveryDate { at: Some(raw), .. } => match parse_delivery_date(raw) {
            Some(date) => presets.delivery_date = Some(date),
            None => {
                container
                    .notifier
                    .error(&format!("'{}' is not a valid date (YYYY-MM-DD HH:MM).", raw));
                return Ok(false);
            }
        },
        _ => {}
    }

    let session = container.session().await?;
    let controller = container.order_controller(session.clone(), presets);

    controller.load().await;
    if !screen_ready(&controller.snapshot(), &session, container.notifier.as_ref()) {
        return Ok(false);
    }

    let outcome = match command {
        OrderCommand::List(args) => {
            controller.set_page(args.page);
            println!(
                "{}",
                render::table(&controller.snapshot(), render::ORDER_HEADER, render::order_row)
            );
            return Ok(true);
        }
        OrderCommand::Show { id } => {
            return Ok(match controller.find(id) {
                Some(order) => {
                    println!("{}", render::order_details(&order));
                    true
                }
                None => {
                    container
                        .notifier
                        .error(&format!("Order #{} was not found.", id));
                    false
                }
            });
        }
        OrderCommand::Confirm { id } => controller.confirm(id).await,
        OrderCommand::Cancel { id } => controller.cancel(id).await,
        OrderCommand::RequestCancel { id } => controller.request_cancel(id).await,
        OrderCommand::ApproveCancel { id } => controller.approve_cancel(id).await,
        OrderCommand::RejectCancel { id } => controller.reject_cancel(id).await,
        OrderCommand::Delete { id } => controller.delete(id).await,
        OrderCommand::Statuses { id, .. } => controller.update_statuses(id).await,
        OrderCommand::DeliveryDate { id, .. } => controller.update_delivery_date(id).await,
    };

    Ok(report(outcome))
}
