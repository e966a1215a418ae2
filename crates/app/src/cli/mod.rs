use clap::{Parser, Subcommand};

mod category;
mod db;

#[derive(Debug, Parser)]
#[command(name = "ordering-app", about = "Ordering CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Category(category::CategoryCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Category(command) => category::run(command).await,
        }
    }
}
