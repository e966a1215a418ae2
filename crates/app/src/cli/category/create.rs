use clap::Args;
use ordering_app::{
    database::{self, Db},
    domain::categories::{
        CategoriesService, PgCategoriesService, data::NewCategory, records::CategoryUuid,
    },
    validation::optional_text,
};

#[derive(Debug, Args)]
pub(crate) struct CreateCategoryArgs {
    /// Category title
    #[arg(long)]
    title: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateCategoryArgs) -> Result<(), String> {
    let title = optional_text(Some(&args.title)).ok_or("title cannot be empty")?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let db = Db::new(pool);

    let result = PgCategoriesService::new(db.clone())
        .create_category(NewCategory {
            uuid: CategoryUuid::new(),
            title,
        })
        .await
        .map_err(|error| format!("failed to create category: {error}"));

    db.close().await;

    let category = result?;

    println!("category_uuid: {}", category.uuid);
    println!("category_title: {}", category.title);

    Ok(())
}
