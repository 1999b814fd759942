use chrono::NaiveDate;
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::Result;
use crate::repositories::{
    DietPlanRepository, PaymentRepository, UserRepository, WorkoutPlanRepository,
};
use crate::stats;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    pub total_users: usize,
    pub active_members: usize,
    pub workout_plans: usize,
    pub diet_plans: usize,
    pub monthly_revenue: f64,
}

/// Headline numbers. Unlike the list pages there is no sample fallback:
/// the four fetches succeed together or the dashboard shows an error.
pub struct DashboardController {
    client: ApiClient,
    users: UserRepository,
    workout_plans: WorkoutPlanRepository,
    diet_plans: DietPlanRepository,
    payments: PaymentRepository,
    pub stats: Option<DashboardStats>,
    pub error: Option<String>,
}

impl DashboardController {
    pub fn new(client: &ApiClient) -> Self {
        Self {
            client: client.clone(),
            users: UserRepository::new(client.clone()),
            workout_plans: WorkoutPlanRepository::new(client.clone()),
            diet_plans: DietPlanRepository::new(client.clone()),
            payments: PaymentRepository::new(client.clone()),
            stats: None,
            error: None,
        }
    }

    pub async fn fetch(&self, today: NaiveDate) -> Result<DashboardStats> {
        let (users, workout_plans, diet_plans, payments) = tokio::try_join!(
            self.users.list(),
            self.workout_plans.list(),
            self.diet_plans.list(),
            self.payments.history(),
        )?;

        Ok(DashboardStats {
            total_users: users.len(),
            active_members: users.iter().filter(|u| u.has_active_membership()).count(),
            workout_plans: workout_plans.len(),
            diet_plans: diet_plans.len(),
            monthly_revenue: stats::monthly_revenue(&payments, today),
        })
    }

    pub async fn load(&mut self, today: NaiveDate) {
        match self.fetch(today).await {
            Ok(stats) => {
                self.stats = Some(stats);
                self.error = None;
            }
            Err(e) => {
                tracing::error!("Error fetching dashboard data: {}", e);
                self.client.notifier().error("Failed to load dashboard");
                self.stats = None;
                self.error = Some(e.to_string());
            }
        }
    }
}
