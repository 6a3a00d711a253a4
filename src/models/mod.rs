//! Wire models for the backend API.

mod ai;
mod recipe;
mod user;

pub use ai::{AssistantAnswer, AssistantQuery};
pub use recipe::Recipe;
pub use user::{Token, User, UserCreate};

use serde::{Deserialize, Serialize};

/// Response of the root health-check endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}
