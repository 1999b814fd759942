use super::{demo_id, settle_fetch, settle_write, ListState, Outcome};
use crate::client::ApiClient;
use crate::error::Result;
use crate::fixtures;
use crate::models::{DietPlan, DietPlanDraft};
use crate::repositories::DietPlanRepository;

pub struct DietPlansController {
    client: ApiClient,
    repo: DietPlanRepository,
    pub state: ListState<DietPlan>,
}

impl DietPlansController {
    pub fn new(client: &ApiClient) -> Self {
        Self {
            client: client.clone(),
            repo: DietPlanRepository::new(client.clone()),
            state: ListState::default(),
        }
    }

    pub async fn load(&mut self) {
        let result = self.repo.list().await;
        self.state = settle_fetch(
            result,
            fixtures::diet_plans,
            self.client.notifier(),
            "diet plans",
        );
    }

    pub async fn create(&mut self, draft: &DietPlanDraft) -> Result<Outcome> {
        if let Err(e) = draft.validate() {
            self.client.notifier().error(&e.to_string());
            return Err(e);
        }
        let macros = draft.macro_totals();
        tracing::debug!(
            "{} plan: meals add up to {} kcal against a {} kcal target, P{}g C{}g F{}g",
            draft.goal.as_str(),
            draft.daily_total(),
            draft.daily_calories,
            macros.protein,
            macros.carbs,
            macros.fats
        );

        let request = draft.to_request();
        let result = self.repo.create(&request).await;
        let outcome = settle_write(result, self.client.notifier(), "Failed to create diet plan")?;

        match outcome {
            Outcome::Saved => {
                self.client.notifier().success("Diet plan created successfully");
                self.load().await;
            }
            Outcome::DemoMode => {
                self.state.records.push(request.into_plan(demo_id()));
                self.client.notifier().success("Diet plan created (demo mode)");
            }
        }
        Ok(outcome)
    }
}
