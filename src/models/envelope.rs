//! Response envelopes, one documented shape per endpoint.
//!
//! The backend nests every payload under `data`. A body that does not match
//! the shape for its endpoint fails to decode; nothing here guesses.

use serde::Deserialize;

use super::{AdminProfile, DietPlan, Membership, Payment, User, WorkoutPlan};

#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// `POST /auth/login`
#[derive(Debug, Deserialize)]
pub struct TokenPayload {
    pub token: String,
}

/// `GET /auth/profile`
#[derive(Debug, Deserialize)]
pub struct ProfilePayload {
    pub user: AdminProfile,
}

/// `GET /users`
#[derive(Debug, Deserialize)]
pub struct UsersPayload {
    pub users: Vec<User>,
}

/// `GET /workout/plans`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlansPayload {
    pub workout_plans: Vec<WorkoutPlan>,
}

/// `GET /diet/plans`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlansPayload {
    pub diet_plans: Vec<DietPlan>,
}

/// `GET /membership/current`
#[derive(Debug, Deserialize)]
pub struct MembershipsPayload {
    pub memberships: Vec<Membership>,
}

/// `GET /payment/history`
#[derive(Debug, Deserialize)]
pub struct PaymentsPayload {
    pub payments: Vec<Payment>,
}
