use crate::client::ApiClient;
use crate::error::Result;
use crate::models::envelope::{DietPlansPayload, WorkoutPlansPayload};
use crate::models::{DietPlan, Envelope, NewDietPlan, NewWorkoutPlan, WorkoutPlan};

pub const WORKOUT_PLANS_PATH: &str = "/workout/plans";
pub const DIET_PLANS_PATH: &str = "/diet/plans";

#[derive(Clone)]
pub struct WorkoutPlanRepository {
    client: ApiClient,
}

impl WorkoutPlanRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<WorkoutPlan>> {
        let envelope: Envelope<WorkoutPlansPayload> = self.client.get(WORKOUT_PLANS_PATH).await?;
        Ok(envelope.data.workout_plans)
    }

    pub async fn create(&self, plan: &NewWorkoutPlan) -> Result<()> {
        self.client.post_unit(WORKOUT_PLANS_PATH, plan).await
    }
}

#[derive(Clone)]
pub struct DietPlanRepository {
    client: ApiClient,
}

impl DietPlanRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<DietPlan>> {
        let envelope: Envelope<DietPlansPayload> = self.client.get(DIET_PLANS_PATH).await?;
        Ok(envelope.data.diet_plans)
    }

    pub async fn create(&self, plan: &NewDietPlan) -> Result<()> {
        self.client.post_unit(DIET_PLANS_PATH, plan).await
    }
}
