use business::domain::product::model::ProductDraft;

use crate::cli::{ProductArgs, ProductCommand};
use crate::error_mapper::IntoUserMessage;
use crate::render;
use crate::setup::dependency_injection::DependencyContainer;

impl From<ProductArgs> for ProductDraft {
    fn from(args: ProductArgs) -> Self {
        ProductDraft {
            name: args.name,
            price: args.price,
            description: args.description,
            img: args.img,
            category_id: args.category_id,
            product_type_id: args.product_type_id,
        }
    }
}

pub async fn run(command: ProductCommand, container: &DependencyContainer) -> anyhow::Result<bool> {
    let catalog = container.product_catalog(container.session().await?);

    let result = match command {
        ProductCommand::List => catalog.list().await.map(|p| render::products(&p)),
        ProductCommand::Show { id } => catalog
            .get(id)
            .await
            .map(|p| render::products(std::slice::from_ref(&p))),
        ProductCommand::Search { name } => {
            catalog.search(&name).await.map(|p| render::products(&p))
        }
        ProductCommand::BestSellers => catalog.best_sellers().await.map(|p| render::products(&p)),
        ProductCommand::Create(args) => catalog
            .create(&args.into())
            .await
            .map(|p| format!("Product #{} created.", p.id)),
        ProductCommand::Update { id, product } => catalog
            .update(id, &product.into())
            .await
            .map(|p| format!("Product #{} updated.", p.id)),
        ProductCommand::Delete { id } => catalog
            .delete(id)
            .await
            .map(|()| format!("Product #{} deleted.", id)),
        ProductCommand::Types => catalog.product_types().await.map(|types| {
            types
                .iter()
                .map(|t| format!("#{:<4} {}", t.id, t.name))
                .collect::<Vec<_>>()
                .join("\n")
        }),
        ProductCommand::Categories => catalog.categories().await.map(|categories| {
            categories
                .iter()
                .map(|c| format!("#{:<4} {}", c.id, c.name))
                .collect::<Vec<_>>()
                .join("\n")
        }),
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
