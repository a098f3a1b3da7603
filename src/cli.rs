use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "petfriends")]
#[command(author, version, about = "CLI for the PetFriends pet adoption service")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, env = "PETFRIENDS_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Login and store an auth key
    Login(LoginArgs),

    /// Logout and clear the stored auth key
    Logout,

    /// Show current account and auth key status
    Whoami,

    /// Pet management
    #[command(subcommand)]
    Pets(PetCommands),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Clone)]
pub struct LoginArgs {
    /// Account email (prompts if omitted)
    #[arg(long, env = "PETFRIENDS_EMAIL")]
    pub email: Option<String>,

    /// Account password (prompts if omitted)
    #[arg(long, env = "PETFRIENDS_PASSWORD")]
    pub password: Option<String>,
}

#[derive(Subcommand, Clone)]
pub enum PetCommands {
    /// List pets
    List {
        /// Only show pets owned by the logged-in account
        #[arg(long)]
        mine: bool,
    },

    /// Add a new pet
    Add {
        /// Pet name
        name: String,

        /// Animal type (e.g., "cat")
        #[arg(long = "type", value_name = "TYPE")]
        animal_type: String,

        /// Age (the service expects a numeric value)
        #[arg(long)]
        age: String,

        /// Photo file to upload with the pet
        #[arg(long, value_name = "PATH")]
        photo: Option<PathBuf>,
    },

    /// Attach a photo to an existing pet
    SetPhoto {
        /// Pet ID
        pet_id: String,

        /// Photo file to upload
        photo: PathBuf,
    },

    /// Update a pet's name, type and age
    Update {
        /// Pet ID
        pet_id: String,

        /// New name
        #[arg(long)]
        name: String,

        /// New animal type
        #[arg(long = "type", value_name = "TYPE")]
        animal_type: String,

        /// New age
        #[arg(long)]
        age: String,
    },

    /// Delete a pet owned by the logged-in account
    Delete {
        /// Pet ID
        pet_id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
