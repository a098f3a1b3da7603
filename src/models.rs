//! Payload types for the PetFriends API.
//!
//! These exist only as request/response shapes; nothing is persisted locally.
//! The service transports every pet field as a string (age included - the
//! server validates numericness on its side) and `pet_photo` as base64.

use serde::{Deserialize, Serialize};

/// Auth key response from `GET /api/key`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKey {
    pub key: String,
}

/// A pet record as the service returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub animal_type: String,
    pub age: String,

    /// Base64-encoded photo; empty when no photo has been attached.
    #[serde(default)]
    pub pet_photo: String,

    #[serde(default)]
    pub created_at: String,
}

impl Pet {
    pub fn has_photo(&self) -> bool {
        !self.pet_photo.is_empty()
    }
}

/// Listing response from `GET /api/pets`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PetList {
    pub pets: Vec<Pet>,
}

impl PetList {
    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.pets.iter().map(|p| p.id.as_str()).collect()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.pets.iter().any(|p| p.id == id)
    }

    pub fn first(&self) -> Option<&Pet> {
        self.pets.first()
    }
}
