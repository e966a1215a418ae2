use clap::Args;
use ordering_app::database::{self, Db};

#[derive(Debug, Args)]
pub(crate) struct MigrateArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: MigrateArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let db = Db::new(pool);

    let result = db
        .migrate()
        .await
        .map_err(|error| format!("failed to apply migrations: {error}"));

    db.close().await;

    result?;

    println!("migrations applied");

    Ok(())
}
