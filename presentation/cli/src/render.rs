//! Plain-text rendering of the client state.

use business::application::admin::collection::{CollectionSnapshot, ScreenState};
use business::domain::booking::model::Booking;
use business::domain::booking::value_objects::BookingAction;
use business::domain::cart::model::Cart;
use business::domain::order::model::Order;
use business::domain::order::value_objects::OrderAction;
use business::domain::product::model::Product;
use business::domain::statistics::model::DashboardOverview;

pub fn money(amount: f64) -> String {
    let whole = format!("{:.0}", amount.abs());
    let mut grouped = String::new();
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{} ₫", sign, grouped)
}

pub fn cart(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Your cart is empty.".to_string();
    }
    let mut out = String::new();
    for item in &cart.items {
        out.push_str(&format!(
            "#{:<5} {:<30} {:>3} x {:>12}\n",
            item.product_id,
            item.name,
            item.quantity,
            money(item.price)
        ));
    }
    out.push_str(&format!(
        "{} item(s), total {}",
        cart.item_count(),
        money(cart.total_price)
    ));
    out
}

/// Renders the current page of an admin table, or the screen's failure.
pub fn table<R>(
    snapshot: &CollectionSnapshot<R>,
    header: &str,
    row: impl Fn(&R) -> String,
) -> String {
    match &snapshot.state {
        ScreenState::Loading => "Loading...".to_string(),
        ScreenState::Failed(message) => message.clone(),
        ScreenState::Ready if snapshot.records.is_empty() => "Nothing to show.".to_string(),
        ScreenState::Ready => {
            let mut out = format!("{:<4} {}\n", "#", header);
            for (index, record) in snapshot.page_items().iter().enumerate() {
                out.push_str(&format!(
                    "{:<4} {}\n",
                    snapshot.row_number(index),
                    row(record)
                ));
            }
            out.push_str(&format!(
                "Page {}/{}",
                snapshot.current_page,
                snapshot.total_pages()
            ));
            out
        }
    }
}

pub const BOOKING_HEADER: &str = "ID    NAME                 DATE       TIME      GUESTS AREA      STATUS";

pub fn booking_row(booking: &Booking) -> String {
    format!(
        "{:<5} {:<20} {} {:<9} {:>6} {:<9} {}",
        booking.id,
        booking.full_name,
        booking.booking_date,
        booking.booking_time,
        booking.number_of_guests,
        booking.area,
        booking.status
    )
}

pub fn booking_details(booking: &Booking) -> String {
    let mut out = format!(
        "Booking #{}\n  Name:      {}\n  Phone:     {}\n  Date:      {} {}\n  Guests:    {}\n  Area:      {}\n  Status:    {}",
        booking.id,
        booking.full_name,
        booking.phone_number,
        booking.booking_date,
        booking.booking_time,
        booking.number_of_guests,
        booking.area,
        booking.status
    );
    if let Some(requests) = &booking.special_requests {
        out.push_str(&format!("\n  Requests:  {}", requests));
    }
    if let Some(username) = &booking.username {
        out.push_str(&format!("\n  Account:   {}", username));
    }
    if let Some(created_at) = booking.created_at {
        out.push_str(&format!("\n  Created:   {}", created_at.format("%Y-%m-%d %H:%M")));
    }
    let actions: Vec<&str> = booking
        .status
        .allowed_actions()
        .into_iter()
        .map(|action| match action {
            BookingAction::ViewDetails => "show",
            BookingAction::Confirm => "confirm",
            BookingAction::Cancel => "cancel",
            BookingAction::ApproveCancel => "approve-cancel",
            BookingAction::RejectCancel => "reject-cancel",
            BookingAction::Delete => "delete",
        })
        .collect();
    out.push_str(&format!("\n  Actions:   {}", actions.join(", ")));
    out
}

pub const ORDER_HEADER: &str =
    "ID    CUSTOMER             TOTAL          ORDER            PAYMENT   DELIVERY";

pub fn order_row(order: &Order) -> String {
    format!(
        "{:<5} {:<20} {:>14} {:<16} {:<9} {}",
        order.id,
        order.fullname,
        money(order.total_amount),
        order.order_status,
        order.payment_status,
        order
            .delivery_date
            .map(|date| date.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string())
    )
}

pub fn order_details(order: &Order) -> String {
    let mut out = format!(
        "Order #{}\n  Customer:  {}\n  Address:   {}\n  Total:     {}\n  Order:     {}\n  Payment:   {} ({})",
        order.id,
        order.fullname,
        order.delivery_address,
        money(order.total_amount),
        order.order_status,
        order.payment_status,
        order.payment_method
    );
    if let Some(phone) = &order.phone_number {
        out.push_str(&format!("\n  Phone:     {}", phone));
    }
    if let Some(email) = &order.email {
        out.push_str(&format!("\n  Email:     {}", email));
    }
    if let Some(ordered_at) = order.order_date {
        out.push_str(&format!("\n  Ordered:   {}", ordered_at.format("%Y-%m-%d %H:%M")));
    }
    if let Some(delivery) = order.delivery_date {
        out.push_str(&format!("\n  Delivery:  {}", delivery.format("%Y-%m-%d %H:%M")));
    }
    let actions: Vec<&str> = order
        .order_status
        .allowed_actions()
        .into_iter()
        .map(|action| match action {
            OrderAction::ViewDetails => "show",
            OrderAction::Confirm => "confirm",
            OrderAction::Cancel => "cancel",
            OrderAction::ApproveCancel => "approve-cancel",
            OrderAction::RejectCancel => "reject-cancel",
            OrderAction::Delete => "delete",
            OrderAction::UpdateStatuses => "statuses",
            OrderAction::UpdateDeliveryDate => "delivery-date",
        })
        .collect();
    out.push_str(&format!("\n  Actions:   {}", actions.join(", ")));
    out
}

pub fn products(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products found.".to_string();
    }
    products
        .iter()
        .map(|p| {
            format!(
                "#{:<5} {:<30} {:>12}  {}",
                p.id,
                p.name,
                money(p.price),
                p.category_name.as_deref().unwrap_or("-")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn overview(overview: &DashboardOverview) -> String {
    let summary = &overview.summary;
    let mut out = format!(
        "Orders: {}  Bookings: {}  Users: {}  Dishes sold: {}  Revenue: {}\n",
        summary.total_orders,
        summary.total_bookings,
        summary.total_users,
        summary.total_dishes,
        money(summary.total_revenue)
    );
    out.push_str("\nTop dishes\n");
    for dish in &overview.top_dishes {
        out.push_str(&format!("  {:<30} x{}\n", dish.product_name, dish.total_ordered));
    }
    out.push_str("\nTop customers\n");
    for user in &overview.top_users {
        out.push_str(&format!("  {:<20} {}\n", user.username, money(user.total_spending)));
    }
    out.push_str("\nRecent activity\n");
    for activity in &overview.recent_activities {
        out.push_str(&format!("  {}\n", activity));
    }
    out.push_str(&format!(
        "\n{} categories, {} product types",
        overview.categories.len(),
        overview.product_types.len()
    ));
    out
}
