use crate::cli::LoginArgs;
use crate::client::PetFriends;
use crate::config::Context;
use crate::credentials::Credentials;
use crate::error::CliError;
use crate::models::ApiKey;
use crate::output::{print_error, print_info, print_success};
use anyhow::Result;
use dialoguer::{Input, Password};

/// Format a key preview (first 12 chars + ...)
fn format_key_preview(key: &str) -> String {
    if key.len() > 12 {
        format!("{}...", &key[..12])
    } else {
        key.to_string()
    }
}

/// Login to PetFriends.
///
/// Email and password come from flags / env vars, or interactive prompts
/// when omitted. A 200 from the key endpoint stores the issued auth key;
/// 403 means the credentials are wrong.
pub async fn login(ctx: &Context, args: LoginArgs, verbose: bool) -> Result<()> {
    if verbose {
        eprintln!("[verbose] API URL: {}", ctx.api_url());
    }

    let email: String = match args.email {
        Some(email) => email,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password: String = match args.password {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let client = PetFriends::new(ctx)?;
    let response = client.get_api_key(&email, &password).await?;

    match response.code() {
        200 => {
            let key: ApiKey = response.decode()?;

            let creds = Credentials::new(key.key.clone(), Some(email.clone()));
            creds.save()?;

            println!();
            print_success("Login successful!");
            println!();
            println!("  Email:    {}", email);
            println!("  Auth key: {}", format_key_preview(&key.key));
            println!();
            print_info("Run 'petfriends pets list --mine' to see your pets");
            Ok(())
        }
        403 => Err(CliError::InvalidCredentials.into()),
        other => {
            Err(CliError::unexpected_status(200, other, response.text()).into())
        }
    }
}

/// Logout and clear the stored auth key.
pub async fn logout(_ctx: &Context, verbose: bool) -> Result<()> {
    if verbose {
        if let Ok(path) = Credentials::path() {
            eprintln!("[verbose] Clearing credentials at: {}", path.display());
        }
    }
    Credentials::clear()?;
    print_success("Logged out successfully");
    Ok(())
}

/// Show current account and auth key status.
pub async fn whoami(ctx: &Context, verbose: bool) -> Result<()> {
    if verbose {
        eprintln!("[verbose] API URL: {}", ctx.api_url());
        if let Ok(path) = Credentials::path() {
            eprintln!("[verbose] Credentials path: {}", path.display());
        }
    }

    let creds = Credentials::load()?;

    if !creds.is_authenticated() {
        print_error("Not logged in");
        print_info("Run: petfriends login");
        return Ok(());
    }

    if std::env::var("PETFRIENDS_AUTH_KEY").is_ok() {
        print_info("Auth key comes from the PETFRIENDS_AUTH_KEY environment variable");
    }

    if let Some(email) = &creds.email {
        println!("Email: {}", email);
    }
    if let Some(key) = creds.auth_key() {
        println!("Auth key: {}", format_key_preview(key));
    }
    if let Some(saved_at) = creds.saved_at {
        println!("Obtained: {}", saved_at.format("%Y-%m-%d %H:%M:%S UTC"));
    }

    Ok(())
}
