use clap::{Args, Subcommand};

mod create;

#[derive(Debug, Args)]
pub(crate) struct CategoryCommand {
    #[command(subcommand)]
    command: CategorySubcommand,
}

#[derive(Debug, Subcommand)]
enum CategorySubcommand {
    /// Create a product category
    Create(create::CreateCategoryArgs),
}

pub(crate) async fn run(command: CategoryCommand) -> Result<(), String> {
    match command.command {
        CategorySubcommand::Create(args) => create::run(args).await,
    }
}
