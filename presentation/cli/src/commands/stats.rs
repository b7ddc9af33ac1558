use crate::cli::StatsCommand;
use crate::error_mapper::IntoUserMessage;
use crate::render;
use crate::setup::dependency_injection::DependencyContainer;

pub async fn run(command: StatsCommand, container: &DependencyContainer) -> anyhow::Result<bool> {
    let dashboard = container.dashboard(container.session().await?);

    let result = match command {
        StatsCommand::Overview => dashboard.load().await.map(|o| render::overview(&o)),
        StatsCommand::Summary => dashboard.summary().await.map(|s| {
            format!(
                "Orders: {}\nBookings: {}\nUsers: {}\nDishes sold: {}\nProduct types: {}\nRevenue: {}",
                s.total_orders,
                s.total_bookings,
                s.total_users,
                s.total_dishes,
                s.total_product_types,
                render::money(s.total_revenue)
            )
        }),
        StatsCommand::TopDishes => dashboard.top_dishes().await.map(|dishes| {
            dishes
                .iter()
                .map(|d| format!("{:<30} x{:<5} {}", d.product_name, d.total_ordered, render::money(d.unit_price)))
                .collect::<Vec<_>>()
                .join("\n")
        }),
        StatsCommand::TopUsers => dashboard.top_users().await.map(|users| {
            users
                .iter()
                .map(|u| format!("{:<20} {}\n  {}\n  {}", u.username, render::money(u.total_spending), u.orders, u.bookings))
                .collect::<Vec<_>>()
                .join("\n")
        }),
        StatsCommand::Activities => dashboard
            .recent_activities()
            .await
            .map(|activities| activities.join("\n")),
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(true)
        }
        Err(err) => {
            container.notifier.error(&err.into_user_message());
            Ok(false)
        }
    }
}
