// src/models/team.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub country: Option<String>,
    pub founded_year: Option<i32>,
    pub captain: Option<String>,
    pub coach: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to register a new team
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TeamRegistrationRequest {
    pub name: String,
    pub country: Option<String>,
    pub founded_year: Option<i32>,
    pub captain: Option<String>,
    pub coach: Option<String>,
}

impl TeamRegistrationRequest {
    /// Validate team registration request
    pub fn validate(&self) -> Result<(), String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Team name cannot be empty".to_string());
        }
        if name.len() > 100 {
            return Err("Team name cannot exceed 100 characters".to_string());
        }
        if let Some(year) = self.founded_year {
            if !(1700..=2100).contains(&year) {
                return Err("Founded year is out of range".to_string());
            }
        }
        Ok(())
    }

    pub fn sanitized_name(&self) -> String {
        self.name.trim().to_string()
    }
}
