use crate::cli::Cli;
use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io;

/// Generate shell completions
///
/// Outputs completion script to stdout. Users can redirect to appropriate file:
///   petfriends completion bash > ~/.local/share/bash-completion/completions/petfriends
///   petfriends completion zsh > ~/.zfunc/_petfriends
///   petfriends completion fish > ~/.config/fish/completions/petfriends.fish
pub fn generate_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();

    generate(shell, &mut cmd, name, &mut io::stdout());

    Ok(())
}
