//! HTTP client for the PetFriends REST API.
//!
//! Every operation maps to exactly one request and comes back as an
//! [`ApiResponse`]: the HTTP status plus the body, parsed as JSON when the
//! server sent JSON and kept as raw text otherwise. The client never treats a
//! non-2xx status as an error. That judgement belongs to the caller, which is
//! what makes negative-path checks (expecting 400/403) possible without
//! exception-style control flow. Only transport failures surface as `Err`.

use crate::config::Context;
use crate::error::CliError;
use crate::ua::user_agent;
use anyhow::Result;
use reqwest::multipart;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;

const TIMEOUT_SECS: u64 = 30;

/// Listing filter: all pets in the service, or only the caller's own.
///
/// Wire values are `""` and `"my_pets"` respectively.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PetFilter {
    #[default]
    All,
    MyPets,
}

impl PetFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            PetFilter::All => "",
            PetFilter::MyPets => "my_pets",
        }
    }
}

/// Response body: parsed JSON on success, raw text when the server sent
/// something that is not JSON (the 403 page, for instance).
#[derive(Debug, Clone)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
}

/// A `(status_code, body)` pair, the uniform result of every client call.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: ResponseBody,
}

impl ApiResponse {
    /// Numeric status code.
    pub fn code(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The parsed JSON body, if the server sent JSON.
    pub fn json(&self) -> Option<&Value> {
        match &self.body {
            ResponseBody::Json(value) => Some(value),
            ResponseBody::Text(_) => None,
        }
    }

    /// Look up a top-level field in the JSON body.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.json().and_then(|v| v.get(name))
    }

    /// The body as text, regardless of whether it parsed as JSON.
    pub fn text(&self) -> String {
        match &self.body {
            ResponseBody::Json(value) => value.to_string(),
            ResponseBody::Text(text) => text.clone(),
        }
    }

    /// Deserialize the JSON body into a typed value.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, CliError> {
        match &self.body {
            ResponseBody::Json(value) => Ok(serde_json::from_value(value.clone())?),
            ResponseBody::Text(text) => Err(CliError::api(format!(
                "Expected JSON body, got: {}",
                text
            ))),
        }
    }

    async fn read(response: Response) -> Result<Self> {
        let status = response.status();
        let text = response.text().await?;

        let body = match serde_json::from_str::<Value>(&text) {
            Ok(value) => ResponseBody::Json(value),
            Err(_) => ResponseBody::Text(text),
        };

        tracing::debug!(status = status.as_u16(), "response received");
        Ok(Self { status, body })
    }
}

/// Client for the PetFriends service.
///
/// Holds no per-call state beyond the base URL; the auth key is threaded
/// through explicitly by the caller on every pet-scoped operation.
pub struct PetFriends {
    client: Client,
    base_url: String,
}

impl PetFriends {
    pub fn new(ctx: &Context) -> Result<Self> {
        Self::with_base_url(ctx.api_url())
    }

    /// Create a client with an explicit base URL (for testing).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .user_agent(user_agent())
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request an auth key for the given account. Credentials travel as
    /// `email` / `password` headers; invalid ones yield 403.
    pub async fn get_api_key(&self, email: &str, password: &str) -> Result<ApiResponse> {
        let url = self.url("/api/key");
        tracing::debug!(%url, "GET api key");

        let response = self
            .client
            .get(&url)
            .header("email", email)
            .header("password", password)
            .send()
            .await?;

        ApiResponse::read(response).await
    }

    /// List pets, either all of them or only those owned by the key's
    /// account. Success body contains a `pets` array.
    pub async fn get_list_of_pets(&self, auth_key: &str, filter: PetFilter) -> Result<ApiResponse> {
        let url = self.url("/api/pets");
        tracing::debug!(%url, filter = filter.as_str(), "GET pets");

        let response = self
            .client
            .get(&url)
            .header("auth_key", auth_key)
            .query(&[("filter", filter.as_str())])
            .send()
            .await?;

        ApiResponse::read(response).await
    }

    /// Create a pet with a photo. The photo file is read for this request
    /// only; nothing is kept open afterwards.
    pub async fn add_new_pet(
        &self,
        auth_key: &str,
        name: &str,
        animal_type: &str,
        age: &str,
        photo_path: &Path,
    ) -> Result<ApiResponse> {
        let url = self.url("/api/pets");
        tracing::debug!(%url, name, "POST new pet with photo");

        let photo = multipart::Part::file(photo_path).await?;
        let form = multipart::Form::new()
            .text("name", name.to_string())
            .text("animal_type", animal_type.to_string())
            .text("age", age.to_string())
            .part("pet_photo", photo);

        let response = self
            .client
            .post(&url)
            .header("auth_key", auth_key)
            .multipart(form)
            .send()
            .await?;

        ApiResponse::read(response).await
    }

    /// Create a pet without a photo (urlencoded form).
    pub async fn add_new_pet_without_photo(
        &self,
        auth_key: &str,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> Result<ApiResponse> {
        let url = self.url("/api/create_pet_simple");
        tracing::debug!(%url, name, "POST new pet without photo");

        let response = self
            .client
            .post(&url)
            .header("auth_key", auth_key)
            .form(&[("name", name), ("animal_type", animal_type), ("age", age)])
            .send()
            .await?;

        ApiResponse::read(response).await
    }

    /// Attach a photo to an existing pet. Success body carries a non-empty
    /// `pet_photo` field.
    pub async fn add_photo_of_pet(
        &self,
        auth_key: &str,
        pet_id: &str,
        photo_path: &Path,
    ) -> Result<ApiResponse> {
        let url = self.url(&format!("/api/pets/set_photo/{}", pet_id));
        tracing::debug!(%url, "POST pet photo");

        let photo = multipart::Part::file(photo_path).await?;
        let form = multipart::Form::new().part("pet_photo", photo);

        let response = self
            .client
            .post(&url)
            .header("auth_key", auth_key)
            .multipart(form)
            .send()
            .await?;

        ApiResponse::read(response).await
    }

    /// Update a pet's name, type and age. Age must be numeric on the server
    /// side; the client deliberately does not validate it locally so the 400
    /// path stays reachable.
    pub async fn update_pet_info(
        &self,
        auth_key: &str,
        pet_id: &str,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> Result<ApiResponse> {
        let url = self.url(&format!("/api/pets/{}", pet_id));
        tracing::debug!(%url, name, "PUT pet info");

        let response = self
            .client
            .put(&url)
            .header("auth_key", auth_key)
            .form(&[("name", name), ("animal_type", animal_type), ("age", age)])
            .send()
            .await?;

        ApiResponse::read(response).await
    }

    /// Delete a pet. The service only allows deleting pets owned by the
    /// key's account; anything else comes back as a non-200 status.
    pub async fn delete_pet(&self, auth_key: &str, pet_id: &str) -> Result<ApiResponse> {
        let url = self.url(&format!("/api/pets/{}", pet_id));
        tracing::debug!(%url, "DELETE pet");

        let response = self
            .client
            .delete(&url)
            .header("auth_key", auth_key)
            .send()
            .await?;

        ApiResponse::read(response).await
    }
}
