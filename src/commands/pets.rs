use crate::client::{ApiResponse, PetFilter, PetFriends};
use crate::config::Context;
use crate::credentials::Credentials;
use crate::error::CliError;
use crate::models::{Pet, PetList};
use crate::output::{print_output, print_single, print_success};
use anyhow::Result;
use dialoguer::Confirm;
use serde::Serialize;
use std::path::Path;
use tabled::Tabled;

// ============================================================================
// Table rows
// ============================================================================

#[derive(Debug, Tabled, Serialize)]
struct PetRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "TYPE")]
    animal_type: String,
    #[tabled(rename = "AGE")]
    age: String,
    #[tabled(rename = "PHOTO")]
    photo: String,
    #[tabled(rename = "ID")]
    id: String,
}

impl From<&Pet> for PetRow {
    fn from(pet: &Pet) -> Self {
        Self {
            name: pet.name.clone(),
            animal_type: pet.animal_type.clone(),
            age: pet.age.clone(),
            photo: if pet.has_photo() { "yes" } else { "-" }.to_string(),
            id: pet.id.clone(),
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn auth_key() -> Result<String, CliError> {
    let creds = Credentials::load()?;
    Ok(creds.require_auth_key()?.to_string())
}

/// Turn a response into `Ok(response)` only when it carries the expected
/// status; anything else becomes an error with the server's body attached.
fn expect_status(response: ApiResponse, expected: u16) -> Result<ApiResponse, CliError> {
    if response.code() == expected {
        Ok(response)
    } else {
        Err(CliError::unexpected_status(
            expected,
            response.code(),
            response.text(),
        ))
    }
}

// ============================================================================
// Commands
// ============================================================================

/// List pets, all of them or only the caller's own.
pub async fn list(ctx: &Context, mine: bool, verbose: bool) -> Result<()> {
    if verbose {
        eprintln!("[verbose] API URL: {}", ctx.api_url());
    }

    let key = auth_key()?;
    let client = PetFriends::new(ctx)?;

    let filter = if mine { PetFilter::MyPets } else { PetFilter::All };
    let response = client.get_list_of_pets(&key, filter).await?;
    let list: PetList = expect_status(response, 200)?.decode()?;

    let rows: Vec<PetRow> = list.pets.iter().map(PetRow::from).collect();
    print_output(ctx, rows)
}

/// Add a new pet, with or without a photo.
pub async fn add(
    ctx: &Context,
    name: &str,
    animal_type: &str,
    age: &str,
    photo: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    if verbose {
        eprintln!("[verbose] API URL: {}", ctx.api_url());
    }

    let key = auth_key()?;
    let client = PetFriends::new(ctx)?;

    let response = match photo {
        Some(path) => {
            client
                .add_new_pet(&key, name, animal_type, age, path)
                .await?
        }
        None => {
            client
                .add_new_pet_without_photo(&key, name, animal_type, age)
                .await?
        }
    };

    let pet: Pet = expect_status(response, 200)?.decode()?;
    print_success(&format!("Created pet '{}' ({})", pet.name, pet.id));
    print_single(ctx, &pet)
}

/// Attach a photo to an existing pet.
pub async fn set_photo(ctx: &Context, pet_id: &str, photo: &Path, verbose: bool) -> Result<()> {
    if verbose {
        eprintln!("[verbose] API URL: {}", ctx.api_url());
    }

    let key = auth_key()?;
    let client = PetFriends::new(ctx)?;

    let response = client.add_photo_of_pet(&key, pet_id, photo).await?;
    let pet: Pet = expect_status(response, 200)?.decode()?;

    if !pet.has_photo() {
        return Err(CliError::api("Server accepted the photo but returned an empty pet_photo field").into());
    }

    print_success(&format!("Photo attached to '{}'", pet.name));
    Ok(())
}

/// Update a pet's name, type and age.
pub async fn update(
    ctx: &Context,
    pet_id: &str,
    name: &str,
    animal_type: &str,
    age: &str,
    verbose: bool,
) -> Result<()> {
    if verbose {
        eprintln!("[verbose] API URL: {}", ctx.api_url());
    }

    let key = auth_key()?;
    let client = PetFriends::new(ctx)?;

    let response = client
        .update_pet_info(&key, pet_id, name, animal_type, age)
        .await?;
    let pet: Pet = expect_status(response, 200)?.decode()?;

    print_success(&format!("Updated pet '{}'", pet.name));
    print_single(ctx, &pet)
}

/// Delete a pet owned by the logged-in account.
pub async fn delete(ctx: &Context, pet_id: &str, yes: bool, verbose: bool) -> Result<()> {
    if verbose {
        eprintln!("[verbose] API URL: {}", ctx.api_url());
    }

    let key = auth_key()?;
    let client = PetFriends::new(ctx)?;

    // Confirm against the owned list so we fail early on foreign ids
    let listing = client.get_list_of_pets(&key, PetFilter::MyPets).await?;
    let my_pets: PetList = expect_status(listing, 200)?.decode()?;
    if !my_pets.contains_id(pet_id) {
        return Err(CliError::PetNotFound(pet_id.to_string()).into());
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete pet {}?", pet_id))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted");
            return Ok(());
        }
    }

    let response = client.delete_pet(&key, pet_id).await?;
    expect_status(response, 200)?;

    print_success(&format!("Deleted pet {}", pet_id));
    Ok(())
}
