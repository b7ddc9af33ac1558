use business::domain::order::model::DirectOrderRequest;

use crate::cli::CartCommand;
use crate::error_mapper::IntoUserMessage;
use crate::render;
use crate::setup::dependency_injection::DependencyContainer;

pub async fn run(command: CartCommand, container: &DependencyContainer) -> anyhow::Result<bool> {
    let store = container.cart_store(container.session().await?);
    store.fetch().await;

    let result = match command {
        CartCommand::Show => Ok(()),
        CartCommand::Add {
            product_id,
            quantity,
        } => store.add(product_id, quantity).await,
        CartCommand::Change { product_id, delta } => {
            if store.snapshot().find_by_product(product_id).is_none() {
                println!("Product {} is not in your cart.", product_id);
            }
            store.change_quantity(product_id, delta).await
        }
        CartCommand::Remove { product_id } => store.remove(product_id).await,
        CartCommand::Clear => store.clear().await,
        CartCommand::Order(args) => {
            let request = DirectOrderRequest {
                product_id: args.product_id,
                quantity: args.quantity,
                fullname: args.fullname,
                phone_number: args.phone,
                email: args.email,
                delivery_address: args.address,
                payment_method: args.payment_method,
            };
            return match store.order_directly(&request).await {
                Ok(order) => {
                    container.notifier.success(&format!(
                        "Order #{} placed, total {}.",
                        order.id,
                        render::money(order.total_amount)
                    ));
                    Ok(true)
                }
                Err(err) => {
                    container.notifier.error(&err.into_user_message());
                    Ok(false)
                }
            };
        }
    };

    match result {
        Ok(()) => {
            println!("{}", render::cart(&store.snapshot()));
            Ok(true)
        }
        Err(err) => {
            container.notifier.error(&err.into_user_message());
            Ok(false)
        }
    }
}
