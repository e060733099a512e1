use clap::{Args, Subcommand};

mod generate;

#[derive(Debug, Args)]
pub(crate) struct DiscountCommand {
    #[command(subcommand)]
    command: DiscountSubcommand,
}

#[derive(Debug, Subcommand)]
enum DiscountSubcommand {
    Generate(generate::GenerateDiscountArgs),
}

pub(crate) async fn run(command: DiscountCommand) -> Result<(), String> {
    match command.command {
        DiscountSubcommand::Generate(args) => generate::run(args).await,
    }
}
