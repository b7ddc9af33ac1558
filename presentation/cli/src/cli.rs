use clap::{Args, Parser, Subcommand};

use business::domain::order::value_objects::{OrderStatus, PaymentMethod, PaymentStatus};

#[derive(Debug, Parser)]
#[command(name = "foodee", about = "Foodee ordering client", long_about = None)]
pub struct Cli {
    /// Answer yes to every confirmation
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Store the bearer token issued by the backend
    Login(LoginArgs),
    /// Forget the stored token
    Logout,
    #[command(subcommand)]
    Cart(CartCommand),
    #[command(subcommand)]
    Bookings(BookingCommand),
    #[command(subcommand)]
    Orders(OrderCommand),
    #[command(subcommand)]
    Products(ProductCommand),
    #[command(subcommand)]
    Stats(StatsCommand),
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Bearer token
    #[arg(long, env = "FOODEE_TOKEN")]
    pub token: String,
}

#[derive(Debug, Subcommand)]
pub enum CartCommand {
    Show,
    Add {
        product_id: i64,
        #[arg(long, short, default_value_t = 1)]
        quantity: u32,
    },
    /// Change a line's quantity by a signed amount
    Change {
        product_id: i64,
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },
    Remove {
        product_id: i64,
    },
    Clear,
    /// Order one product directly, bypassing the cart
    Order(DirectOrderArgs),
}

#[derive(Debug, Args)]
pub struct DirectOrderArgs {
    pub product_id: i64,
    #[arg(long, short, default_value_t = 1)]
    pub quantity: u32,
    #[arg(long)]
    pub fullname: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub address: String,
    #[arg(long, value_parser = parse_payment_method, default_value = "CASH_ON_DELIVERY")]
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Args)]
pub struct PageArgs {
    /// 1-based page of the table
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Debug, Subcommand)]
pub enum BookingCommand {
    List(PageArgs),
    Show { id: i64 },
    Confirm { id: i64 },
    Cancel { id: i64 },
    ApproveCancel { id: i64 },
    RejectCancel { id: i64 },
    Delete { id: i64 },
}

#[derive(Debug, Subcommand)]
pub enum OrderCommand {
    List(PageArgs),
    Show { id: i64 },
    Confirm { id: i64 },
    Cancel { id: i64 },
    RequestCancel { id: i64 },
    ApproveCancel { id: i64 },
    RejectCancel { id: i64 },
    Delete { id: i64 },
    /// Edit order and payment status; prompts for values not given
    Statuses {
        id: i64,
        #[arg(long, value_parser = parse_order_status)]
        order_status: Option<OrderStatus>,
        #[arg(long, value_parser = parse_payment_status)]
        payment_status: Option<PaymentStatus>,
    },
    /// Set the delivery date-time; prompts when not given
    DeliveryDate {
        id: i64,
        /// YYYY-MM-DD HH:MM
        #[arg(long)]
        at: Option<String>,
    },
}

#[derive(Debug, Args)]
pub struct ProductArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub price: f64,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub img: Option<String>,
    #[arg(long)]
    pub category_id: Option<i64>,
    #[arg(long)]
    pub product_type_id: Option<i64>,
}

#[derive(Debug, Subcommand)]
pub enum ProductCommand {
    List,
    Show { id: i64 },
    Search { name: String },
    BestSellers,
    Create(ProductArgs),
    Update {
        id: i64,
        #[command(flatten)]
        product: ProductArgs,
    },
    Delete { id: i64 },
    Types,
    Categories,
}

#[derive(Debug, Subcommand)]
pub enum StatsCommand {
    /// Every dashboard panel at once
    Overview,
    Summary,
    TopDishes,
    TopUsers,
    Activities,
}

fn parse_order_status(raw: &str) -> Result<OrderStatus, String> {
    raw.trim().to_uppercase().parse()
}

fn parse_payment_status(raw: &str) -> Result<PaymentStatus, String> {
    raw.trim().to_uppercase().parse()
}

fn parse_payment_method(raw: &str) -> Result<PaymentMethod, String> {
    raw.trim().to_uppercase().parse()
}
