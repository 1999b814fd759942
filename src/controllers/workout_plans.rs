use super::{demo_id, settle_fetch, settle_write, ListState, Outcome};
use crate::client::ApiClient;
use crate::error::Result;
use crate::filters::Choice;
use crate::fixtures;
use crate::models::{Difficulty, NewWorkoutPlan, WorkoutPlan};
use crate::repositories::WorkoutPlanRepository;

pub struct WorkoutPlansController {
    client: ApiClient,
    repo: WorkoutPlanRepository,
    pub state: ListState<WorkoutPlan>,
    pub difficulty: Choice<Difficulty>,
}

impl WorkoutPlansController {
    pub fn new(client: &ApiClient) -> Self {
        Self {
            client: client.clone(),
            repo: WorkoutPlanRepository::new(client.clone()),
            state: ListState::default(),
            difficulty: Choice::All,
        }
    }

    pub async fn load(&mut self) {
        let result = self.repo.list().await;
        self.state = settle_fetch(
            result,
            fixtures::workout_plans,
            self.client.notifier(),
            "workout plans",
        );
    }

    pub fn visible(&self) -> Vec<WorkoutPlan> {
        self.state
            .records
            .iter()
            .filter(|p| self.difficulty.allows(&p.difficulty))
            .cloned()
            .collect()
    }

    pub async fn create(&mut self, plan: NewWorkoutPlan) -> Result<Outcome> {
        if let Err(e) = plan.validate() {
            self.client.notifier().error(&e.to_string());
            return Err(e);
        }

        let result = self.repo.create(&plan).await;
        let outcome = settle_write(result, self.client.notifier(), "Failed to create workout plan")?;

        match outcome {
            Outcome::Saved => {
                self.client.notifier().success("Workout plan created successfully");
                self.load().await;
            }
            Outcome::DemoMode => {
                self.state.records.push(plan.into_plan(demo_id()));
                self.client.notifier().success("Workout plan created (demo mode)");
            }
        }
        Ok(outcome)
    }
}
