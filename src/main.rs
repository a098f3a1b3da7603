use anyhow::Result;
use clap::Parser;
use petfriends_cli::cli::{Cli, Commands, PetCommands};
use petfriends_cli::commands;
use petfriends_cli::config::Context;
use petfriends_cli::exit_codes;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = exit_codes::from_error(&e);
            ExitCode::from(code as u8)
        }
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut ctx = Context::load()?;
    if let Some(format) = cli.format {
        ctx.set_format(format);
    }

    match cli.command {
        Commands::Login(args) => commands::auth::login(&ctx, args, cli.verbose).await,
        Commands::Logout => commands::auth::logout(&ctx, cli.verbose).await,
        Commands::Whoami => commands::auth::whoami(&ctx, cli.verbose).await,
        Commands::Pets(pets) => match pets {
            PetCommands::List { mine } => commands::pets::list(&ctx, mine, cli.verbose).await,
            PetCommands::Add {
                name,
                animal_type,
                age,
                photo,
            } => {
                commands::pets::add(
                    &ctx,
                    &name,
                    &animal_type,
                    &age,
                    photo.as_deref(),
                    cli.verbose,
                )
                .await
            }
            PetCommands::SetPhoto { pet_id, photo } => {
                commands::pets::set_photo(&ctx, &pet_id, &photo, cli.verbose).await
            }
            PetCommands::Update {
                pet_id,
                name,
                animal_type,
                age,
            } => {
                commands::pets::update(&ctx, &pet_id, &name, &animal_type, &age, cli.verbose).await
            }
            PetCommands::Delete { pet_id, yes } => {
                commands::pets::delete(&ctx, &pet_id, yes, cli.verbose).await
            }
        },
        Commands::Completion { shell } => commands::completion::generate_completions(shell),
    }
}
