use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub membership_status: Option<String>,
}

impl User {
    pub fn has_active_membership(&self) -> bool {
        self.membership_status.as_deref() == Some("active")
    }

    pub fn apply(&mut self, update: &UserUpdate) {
        self.goal = Some(update.goal.clone());
        self.weight = Some(update.weight);
        self.height = Some(update.height);
        self.age = Some(update.age);
    }
}

/// Body of `PUT /users/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub goal: String,
    pub weight: f64,
    pub height: f64,
    pub age: u32,
}

impl UserUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.goal.trim().is_empty() {
            return Err(AppError::Validation("Goal is required".to_string()));
        }
        if !(30.0..=300.0).contains(&self.weight) {
            return Err(AppError::Validation(
                "Weight must be between 30kg and 300kg".to_string(),
            ));
        }
        if !(100.0..=250.0).contains(&self.height) {
            return Err(AppError::Validation(
                "Height must be between 100cm and 250cm".to_string(),
            ));
        }
        if !(13..=100).contains(&self.age) {
            return Err(AppError::Validation(
                "Age must be between 13 and 100".to_string(),
            ));
        }
        Ok(())
    }
}
