use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub time: String,
    #[serde(default)]
    pub foods: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietPlan {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "dailyCalories")]
    pub calories: u32,
    #[serde(default)]
    pub meals: Vec<Meal>,
}

/// Body of `POST /diet/plans`. The backend only keeps food names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewDietPlan {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub calories: u32,
    pub meals: Vec<Meal>,
}

impl NewDietPlan {
    pub fn into_plan(self, id: String) -> DietPlan {
        DietPlan {
            id,
            name: self.name,
            description: self.description.unwrap_or_default(),
            calories: self.calories,
            meals: self.meals,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietGoal {
    WeightLoss,
    MuscleGain,
    #[default]
    Maintenance,
}

impl DietGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietGoal::WeightLoss => "weight_loss",
            DietGoal::MuscleGain => "muscle_gain",
            DietGoal::Maintenance => "maintenance",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "weight_loss" => Some(DietGoal::WeightLoss),
            "muscle_gain" => Some(DietGoal::MuscleGain),
            "maintenance" => Some(DietGoal::Maintenance),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FoodDraft {
    pub name: String,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MealDraft {
    pub name: String,
    pub time: String,
    pub foods: Vec<FoodDraft>,
}

impl MealDraft {
    pub fn total_calories(&self) -> u32 {
        self.foods.iter().map(|f| f.calories).sum()
    }
}

/// Grams of each macronutrient across a whole draft.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MacroTotals {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Diet plan as an admin composes it, with per-food macros that the backend
/// does not store.
#[derive(Debug, Clone, PartialEq)]
pub struct DietPlanDraft {
    pub title: String,
    pub description: Option<String>,
    pub goal: DietGoal,
    pub daily_calories: u32,
    pub meals: Vec<MealDraft>,
}

impl DietPlanDraft {
    pub fn daily_total(&self) -> u32 {
        self.meals.iter().map(MealDraft::total_calories).sum()
    }

    pub fn macro_totals(&self) -> MacroTotals {
        self.meals
            .iter()
            .flat_map(|meal| &meal.foods)
            .fold(MacroTotals::default(), |acc, food| MacroTotals {
                protein: acc.protein + food.protein,
                carbs: acc.carbs + food.carbs,
                fats: acc.fats + food.fats,
            })
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("Title is required".to_string()));
        }
        if self.daily_calories < 1000 {
            return Err(AppError::Validation(
                "Daily calories must be at least 1000".to_string(),
            ));
        }
        if self.meals.is_empty() {
            return Err(AppError::Validation(
                "At least one meal is required".to_string(),
            ));
        }
        for meal in &self.meals {
            if meal.name.trim().is_empty() || meal.time.trim().is_empty() {
                return Err(AppError::Validation(
                    "Meal name and time are required".to_string(),
                ));
            }
            if meal.foods.is_empty() {
                return Err(AppError::Validation(format!(
                    "{} needs at least one food",
                    meal.name
                )));
            }
            if meal.foods.iter().any(|f| f.name.trim().is_empty() || f.calories == 0) {
                return Err(AppError::Validation(format!(
                    "Every food in {} needs a name and calories",
                    meal.name
                )));
            }
            let negative = |grams: f64| grams < 0.0 || grams.is_nan();
            if meal
                .foods
                .iter()
                .any(|f| negative(f.protein) || negative(f.carbs) || negative(f.fats))
            {
                return Err(AppError::Validation(format!(
                    "Macros in {} cannot be negative",
                    meal.name
                )));
            }
        }
        Ok(())
    }

    pub fn to_request(&self) -> NewDietPlan {
        NewDietPlan {
            name: self.title.clone(),
            description: self.description.clone(),
            calories: self.daily_calories,
            meals: self
                .meals
                .iter()
                .map(|meal| Meal {
                    name: meal.name.clone(),
                    time: meal.time.clone(),
                    foods: meal.foods.iter().map(|f| f.name.clone()).collect(),
                })
                .collect(),
        }
    }
}
