//! Shared test utilities for petfriends-cli integration tests
#![allow(dead_code)]

use petfriends_cli::client::{PetFilter, PetFriends};
use petfriends_cli::error::CliError;
use petfriends_cli::models::{Pet, PetList};
use serde_json::{Value, json};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Account under test, matched by the mock key endpoint.
pub const VALID_EMAIL: &str = "tester@petfriends.example";
pub const VALID_PASSWORD: &str = "correct-horse-battery";

/// Auth key the mock service issues for the valid account.
pub const TEST_AUTH_KEY: &str = "ea738148a1f19838e1c5d1413877f3691a3731380e733e877b0ae729";

/// A key that the mock service rejects everywhere with 403.
pub const INVALID_AUTH_KEY: &str = "0000000000000000000000000000000000000000000000000000000000";

/// Create a client pointing at the mock server.
pub fn create_test_client(base_url: &str) -> PetFriends {
    PetFriends::with_base_url(base_url).expect("Failed to create test client")
}

/// Write a photo fixture to a temp file with a .jpg name.
///
/// The bytes are ASCII on purpose so wiremock body matchers can inspect the
/// multipart payload; the mock server never decodes the image.
pub fn write_test_photo() -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("c1-")
        .suffix(".jpg")
        .tempfile()
        .expect("Failed to create photo fixture");
    file.write_all(b"fake-jpeg-bytes-for-upload-tests")
        .expect("Failed to write photo fixture");
    file
}

/// Build a pet JSON object the way the service shapes them.
pub fn pet_json(id: &str, name: &str, animal_type: &str, age: &str, photo: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "animal_type": animal_type,
        "age": age,
        "pet_photo": photo,
        "created_at": "1640000000.0"
    })
}

pub fn pets_body(pets: Vec<Value>) -> Value {
    json!({ "pets": pets })
}

/// Mount the key endpoint: 200 + key for the valid account, 403 otherwise.
pub async fn mount_key_endpoint(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/key"))
        .and(header("email", VALID_EMAIL))
        .and(header("password", VALID_PASSWORD))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "key": TEST_AUTH_KEY })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/key"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(server)
        .await;
}

/// Mount a one-shot `my_pets` listing response.
pub async fn mount_my_pets_once(server: &MockServer, pets: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path("/api/pets"))
        .and(query_param("filter", "my_pets"))
        .and(header("auth_key", TEST_AUTH_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(pets_body(pets)))
        .up_to_n_times(1)
        .mount(server)
        .await;
}

/// Precondition helper used by scenarios that need an owned pet: list the
/// caller's pets, create one if the list is empty, re-fetch, and fail loudly
/// instead of skipping when a pet still cannot be found.
pub async fn ensure_my_pet(
    client: &PetFriends,
    auth_key: &str,
    photo: &Path,
) -> anyhow::Result<Pet> {
    let response = client.get_list_of_pets(auth_key, PetFilter::MyPets).await?;
    let mut my_pets: PetList = response.decode()?;

    if my_pets.is_empty() {
        client
            .add_new_pet(auth_key, "Суперкот", "кот", "3", photo)
            .await?;
        let response = client.get_list_of_pets(auth_key, PetFilter::MyPets).await?;
        my_pets = response.decode()?;
    }

    my_pets
        .first()
        .cloned()
        .ok_or_else(|| CliError::NoPetsAvailable.into())
}
