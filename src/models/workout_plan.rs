use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    /// Seconds between sets.
    #[serde(default)]
    pub rest_time: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

/// Body of `POST /workout/plans`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewWorkoutPlan {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub difficulty: Difficulty,
    pub exercises: Vec<Exercise>,
}

impl NewWorkoutPlan {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Title is required".to_string()));
        }
        if self.exercises.is_empty() {
            return Err(AppError::Validation(
                "At least one exercise is required".to_string(),
            ));
        }
        for exercise in &self.exercises {
            if exercise.name.trim().is_empty() {
                return Err(AppError::Validation(
                    "Exercise name is required".to_string(),
                ));
            }
            if exercise.sets == 0 || exercise.reps == 0 {
                return Err(AppError::Validation(format!(
                    "{} needs at least 1 set and 1 rep",
                    exercise.name
                )));
            }
        }
        Ok(())
    }

    pub fn into_plan(self, id: String) -> WorkoutPlan {
        WorkoutPlan {
            id,
            name: self.name,
            description: self.description.unwrap_or_default(),
            difficulty: self.difficulty,
            exercises: self.exercises,
        }
    }
}
