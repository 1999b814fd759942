mod common;

use axum::http::{Method, StatusCode};
use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::json;
use tokio_test::{assert_err, assert_ok};

use gymadmin::controllers::{
    AttendanceController, DashboardController, DataSource, DietPlansController,
    MembershipsController, Outcome, PaymentsController, ProfileController, UsersController,
    WorkoutPlansController,
};
use gymadmin::filters::{Choice, DateRange};
use gymadmin::fixtures;
use gymadmin::models::{
    DietGoal, DietPlanDraft, Difficulty, Exercise, FoodDraft, MealDraft, NewMembership,
    NewWorkoutPlan, PaymentStatus, PlanType, ProfileUpdate, UserUpdate,
};
use gymadmin::AppError;

fn update() -> UserUpdate {
    UserUpdate {
        goal: "Lose fat".to_string(),
        weight: 72.0,
        height: 175.0,
        age: 31,
    }
}

#[tokio::test]
async fn test_users_load_live() {
    let backend = common::MockBackend::start().await;
    backend.respond(Method::GET, "/users", StatusCode::OK, common::users_body());
    let test = common::create_logged_in_client(&backend.base_url);
    let mut page = UsersController::new(&test.client);

    page.load().await;

    assert_eq!(page.state.source, DataSource::Live);
    assert_eq!(page.state.records.len(), 2);
    assert_eq!(page.state.records[0].id, "u1");
    assert!(test.notifier.all().is_empty());
}

#[tokio::test]
async fn test_users_load_unreachable_falls_back_to_fixtures() {
    let test = common::create_logged_in_client(&common::unreachable_base_url());
    let mut page = UsersController::new(&test.client);

    page.load().await;

    assert!(page.state.is_fallback());
    assert_eq!(page.state.records, fixtures::users());
    assert!(test.notifier.contains("Failed to fetch users"));
}

#[tokio::test]
async fn test_users_load_wrong_envelope_falls_back() {
    let backend = common::MockBackend::start().await;
    backend.respond(
        Method::GET,
        "/users",
        StatusCode::OK,
        json!({ "data": [{ "_id": "u1", "name": "Alice", "email": "a@gym.test" }] }),
    );
    let test = common::create_logged_in_client(&backend.base_url);
    let mut page = UsersController::new(&test.client);

    page.load().await;

    assert!(page.state.is_fallback());
    assert!(test.notifier.contains("Failed to fetch users"));
}

#[tokio::test]
async fn test_users_search_filters_visible() {
    let backend = common::MockBackend::start().await;
    backend.respond(Method::GET, "/users", StatusCode::OK, common::users_body());
    let test = common::create_logged_in_client(&backend.base_url);
    let mut page = UsersController::new(&test.client);
    page.load().await;

    page.search = "BOB".to_string();
    let visible = page.visible();

    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Bob Stone");
}

#[tokio::test]
async fn test_user_update_saved_refetches() {
    let backend = common::MockBackend::start().await;
    backend.respond(Method::GET, "/users", StatusCode::OK, common::users_body());
    backend.respond(Method::PUT, "/users/u1", StatusCode::OK, json!({ "success": true }));
    let test = common::create_logged_in_client(&backend.base_url);
    let mut page = UsersController::new(&test.client);
    page.load().await;

    let outcome = assert_ok!(page.update("u1", update()).await);

    assert_eq!(outcome, Outcome::Saved);
    assert_eq!(backend.requests_to(Method::GET, "/users").len(), 2);
    let put = backend.requests_to(Method::PUT, "/users/u1");
    assert_eq!(
        put[0].body,
        Some(json!({ "goal": "Lose fat", "weight": 72.0, "height": 175.0, "age": 31 }))
    );
    assert!(test.notifier.contains("User updated successfully"));
}

#[tokio::test]
async fn test_user_update_missing_endpoint_applies_locally() {
    let backend = common::MockBackend::start().await;
    backend.respond(Method::GET, "/users", StatusCode::OK, common::users_body());
    let test = common::create_logged_in_client(&backend.base_url);
    let mut page = UsersController::new(&test.client);
    page.load().await;

    let outcome = assert_ok!(page.update("u2", update()).await);

    assert_eq!(outcome, Outcome::DemoMode);
    let bob = page.find("u2").unwrap();
    assert_eq!(bob.goal.as_deref(), Some("Lose fat"));
    assert_eq!(bob.age, Some(31));
    assert!(test.notifier.contains("User updated (demo mode)"));
}

#[tokio::test]
async fn test_user_update_unknown_id_offline_reports_not_found() {
    let test = common::create_logged_in_client(&common::unreachable_base_url());
    let mut page = UsersController::new(&test.client);
    page.load().await;
    let before = page.state.records.clone();

    let error = assert_err!(page.update("missing-id", update()).await);

    assert!(matches!(error, AppError::Validation(_)));
    assert_eq!(page.state.records, before);
    assert!(test.notifier.contains("Validation error: User missing-id not found"));
    assert!(!test.notifier.contains("User updated (demo mode)"));
}

#[tokio::test]
async fn test_user_update_out_of_range_sends_nothing() {
    let backend = common::MockBackend::start().await;
    let test = common::create_logged_in_client(&backend.base_url);
    let mut page = UsersController::new(&test.client);

    let bad = UserUpdate {
        weight: 12.0,
        ..update()
    };
    let error = assert_err!(page.update("u1", bad).await);

    assert!(matches!(error, AppError::Validation(_)));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_memberships_load_fills_names_from_users() {
    let backend = common::MockBackend::start().await;
    backend.respond(Method::GET, "/users", StatusCode::OK, common::users_body());
    backend.respond(
        Method::GET,
        "/membership/current",
        StatusCode::OK,
        common::memberships_body(),
    );
    let test = common::create_logged_in_client(&backend.base_url);
    let mut page = MembershipsController::new(&test.client);

    page.load().await;

    assert_eq!(page.state.source, DataSource::Live);
    assert_eq!(page.state.records[0].user_name, "Alice Moore");
    assert_eq!(page.state.records[0].user_email, "alice@gym.test");
}

#[tokio::test]
async fn test_membership_create_offline_adds_demo_record() {
    let test = common::create_logged_in_client(&common::unreachable_base_url());
    let mut page = MembershipsController::new(&test.client);
    page.load().await;
    let before = page.state.records.len();

    let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let new = NewMembership::starting("2", PlanType::Yearly, start);
    let outcome = assert_ok!(page.create(new).await);

    assert_eq!(outcome, Outcome::DemoMode);
    assert_eq!(page.state.records.len(), before + 1);
    let added = page.state.records.last().unwrap();
    assert!(added.id.starts_with("demo-"));
    assert_eq!(added.user_name, "Jane Smith");
    assert_eq!(added.end_date, NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
    assert!(test.notifier.contains("Membership created (demo mode)"));
}

#[tokio::test]
async fn test_membership_create_sends_denormalized_names() {
    let backend = common::MockBackend::start().await;
    backend.respond(Method::GET, "/users", StatusCode::OK, common::users_body());
    backend.respond(
        Method::GET,
        "/membership/current",
        StatusCode::OK,
        common::memberships_body(),
    );
    backend.respond(Method::POST, "/membership", StatusCode::CREATED, json!({ "success": true }));
    let test = common::create_logged_in_client(&backend.base_url);
    let mut page = MembershipsController::new(&test.client);
    page.load().await;

    let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let outcome = assert_ok!(
        page.create(NewMembership::starting("u2", PlanType::Monthly, start))
            .await
    );

    assert_eq!(outcome, Outcome::Saved);
    let body = backend.requests_to(Method::POST, "/membership")[0].body.clone().unwrap();
    assert_eq!(body["userId"], "u2");
    assert_eq!(body["userName"], "Bob Stone");
    assert_eq!(body["endDate"], "2024-07-01");
    assert_eq!(backend.requests_to(Method::GET, "/membership/current").len(), 2);
}

#[tokio::test]
async fn test_membership_delete_server_error_keeps_state() {
    let backend = common::MockBackend::start().await;
    backend.respond(Method::GET, "/users", StatusCode::OK, common::users_body());
    backend.respond(
        Method::GET,
        "/membership/current",
        StatusCode::OK,
        common::memberships_body(),
    );
    backend.respond(
        Method::DELETE,
        "/membership/m1",
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "message": "Cannot delete" }),
    );
    let test = common::create_logged_in_client(&backend.base_url);
    let mut page = MembershipsController::new(&test.client);
    page.load().await;

    assert_err!(page.delete("m1").await);

    assert_eq!(page.state.records.len(), 1);
    assert!(test.notifier.contains("Failed to delete membership"));
}

#[tokio::test]
async fn test_membership_delete_offline_removes_locally() {
    let test = common::create_logged_in_client(&common::unreachable_base_url());
    let mut page = MembershipsController::new(&test.client);
    page.load().await;

    let outcome = assert_ok!(page.delete("3").await);

    assert_eq!(outcome, Outcome::DemoMode);
    assert!(page.state.records.iter().all(|m| m.id != "3"));
}

#[tokio::test]
async fn test_attendance_check_in_prepends_record() {
    let backend = common::MockBackend::start().await;
    backend.respond(Method::GET, "/users", StatusCode::OK, common::users_body());
    backend.respond(
        Method::POST,
        "/attendance/check-in",
        StatusCode::CREATED,
        json!({ "success": true }),
    );
    let test = common::create_logged_in_client(&backend.base_url);
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 18, 5, 0).unwrap();
    let mut page = AttendanceController::new(&test.client);
    page.load(now).await;
    let before = page.state.records.len();

    let outcome = assert_ok!(page.check_in("u1", now).await);

    assert_eq!(outcome, Outcome::Saved);
    assert_eq!(page.state.records.len(), before + 1);
    let first = &page.state.records[0];
    assert_eq!(first.user_name, "Alice Moore");
    assert_eq!(first.check_in_time, "18:05");
    assert_eq!(
        backend.last_request().body,
        Some(json!({ "userId": "u1" }))
    );

    let counts = page.user_check_ins("u1", now.date_naive());
    assert_eq!(counts.total, 1);
    assert_eq!(counts.this_week, 1);
}

#[tokio::test]
async fn test_attendance_filters_by_date() {
    let test = common::create_logged_in_client(&common::unreachable_base_url());
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
    let mut page = AttendanceController::new(&test.client);
    page.load(now).await;

    page.date = NaiveDate::from_ymd_opt(2024, 3, 9);
    assert_eq!(page.visible().len(), 2);

    let stats = page.stats(now.date_naive());
    assert_eq!(stats.today_check_ins, 3);
    assert_eq!(stats.active_users, 5);
}

#[tokio::test]
async fn test_payments_filters_and_export() {
    let backend = common::MockBackend::start().await;
    backend.respond(
        Method::GET,
        "/payment/history",
        StatusCode::OK,
        common::payments_body(),
    );
    let test = common::create_logged_in_client(&backend.base_url);
    let mut page = PaymentsController::new(&test.client);
    page.load().await;

    page.status = Choice::Only(PaymentStatus::Completed);
    assert_eq!(page.visible().len(), 1);
    assert_eq!(page.visible()[0].id, "p1");

    page.status = Choice::All;
    page.plan = Choice::Only(PlanType::Yearly);
    assert_eq!(page.visible()[0].user_name, "Bob Stone");

    page.plan = Choice::All;
    page.range = DateRange::new(NaiveDate::from_ymd_opt(2024, 3, 6), None);
    assert_eq!(page.visible().len(), 1);

    page.range = DateRange::default();
    page.search = "alice".to_string();
    let csv = page.export_csv();
    assert_eq!(csv.lines().count(), 2);
    assert!(csv.contains("p1,Alice Moore,alice@gym.test,$49.99,monthly,completed"));
    assert!(test.notifier.contains("Export started"));

    let today = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap();
    let stats = page.stats(today);
    assert_eq!(stats.total_transactions, 2);
    assert_eq!(stats.monthly_revenue, 49.99);
    assert_eq!(page.revenue_series(today).len(), 6);
}

#[tokio::test]
async fn test_dashboard_counts_when_all_fetches_succeed() {
    let backend = common::MockBackend::start().await;
    backend.respond(Method::GET, "/users", StatusCode::OK, common::users_body());
    backend.respond(Method::GET, "/workout/plans", StatusCode::OK, common::workout_plans_body());
    backend.respond(Method::GET, "/diet/plans", StatusCode::OK, common::diet_plans_body());
    backend.respond(
        Method::GET,
        "/payment/history",
        StatusCode::OK,
        common::payments_body(),
    );
    let test = common::create_logged_in_client(&backend.base_url);
    let mut page = DashboardController::new(&test.client);

    page.load(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()).await;

    let stats = page.stats.unwrap();
    assert_eq!(stats.total_users, 2);
    assert_eq!(stats.active_members, 1);
    assert_eq!(stats.workout_plans, 1);
    assert_eq!(stats.diet_plans, 1);
    assert_eq!(stats.monthly_revenue, 49.99);
    assert!(page.error.is_none());
}

#[tokio::test]
async fn test_dashboard_fails_as_a_whole() {
    let backend = common::MockBackend::start().await;
    backend.respond(Method::GET, "/users", StatusCode::OK, common::users_body());
    backend.respond(Method::GET, "/workout/plans", StatusCode::OK, common::workout_plans_body());
    backend.respond(Method::GET, "/diet/plans", StatusCode::OK, common::diet_plans_body());
    let test = common::create_logged_in_client(&backend.base_url);
    let mut page = DashboardController::new(&test.client);

    page.load(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()).await;

    assert!(page.stats.is_none());
    assert!(page.error.is_some());
    assert!(test.notifier.contains("Failed to load dashboard"));
}

#[tokio::test]
async fn test_workout_plan_create_and_difficulty_filter() {
    let backend = common::MockBackend::start().await;
    backend.respond(Method::GET, "/workout/plans", StatusCode::OK, common::workout_plans_body());
    backend.respond(Method::POST, "/workout/plans", StatusCode::CREATED, json!({ "success": true }));
    let test = common::create_logged_in_client(&backend.base_url);
    let mut page = WorkoutPlansController::new(&test.client);
    page.load().await;

    page.difficulty = Choice::Only(Difficulty::Beginner);
    assert!(page.visible().is_empty());
    page.difficulty = Choice::Only(Difficulty::Advanced);
    assert_eq!(page.visible().len(), 1);

    let plan = NewWorkoutPlan {
        name: "Mobility".to_string(),
        description: None,
        difficulty: Difficulty::Beginner,
        exercises: vec![Exercise {
            name: "Hip circles".to_string(),
            sets: 2,
            reps: 10,
            rest_time: 30,
        }],
    };
    let outcome = assert_ok!(page.create(plan).await);

    assert_eq!(outcome, Outcome::Saved);
    let body = backend.requests_to(Method::POST, "/workout/plans")[0].body.clone().unwrap();
    assert_eq!(body["exercises"][0]["restTime"], 30);
    assert_eq!(backend.requests_to(Method::GET, "/workout/plans").len(), 2);
}

#[tokio::test]
async fn test_diet_plan_create_offline() {
    let test = common::create_logged_in_client(&common::unreachable_base_url());
    let mut page = DietPlansController::new(&test.client);
    page.load().await;
    let before = page.state.records.len();

    let draft = DietPlanDraft {
        title: "Cut".to_string(),
        description: None,
        goal: DietGoal::WeightLoss,
        daily_calories: 1800,
        meals: vec![MealDraft {
            name: "Breakfast".to_string(),
            time: "07:30".to_string(),
            foods: vec![FoodDraft {
                name: "Eggs".to_string(),
                calories: 300,
                protein: 20.0,
                carbs: 2.0,
                fats: 18.0,
            }],
        }],
    };
    let outcome = assert_ok!(page.create(&draft).await);

    assert_eq!(outcome, Outcome::DemoMode);
    assert_eq!(page.state.records.len(), before + 1);
    let added = page.state.records.last().unwrap();
    assert_eq!(added.calories, 1800);
    assert_eq!(added.meals[0].foods, vec!["Eggs".to_string()]);
}

#[tokio::test]
async fn test_profile_falls_back_and_updates_locally() {
    let test = common::create_logged_in_client(&common::unreachable_base_url());
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
    let mut page = ProfileController::new(&test.client);
    page.load(now).await;

    assert_eq!(page.source, DataSource::Fallback);
    assert!(test.notifier.contains("Failed to fetch profile"));

    let update = ProfileUpdate {
        name: "Head Coach".to_string(),
        email: "coach@gym.test".to_string(),
        phone: None,
        location: Some("Berlin".to_string()),
    };
    let outcome = assert_ok!(page.update(update, now).await);

    assert_eq!(outcome, Outcome::DemoMode);
    let profile = page.profile.unwrap();
    assert_eq!(profile.name, "Head Coach");
    assert_eq!(profile.location.as_deref(), Some("Berlin"));
}

#[tokio::test]
async fn test_change_password_mismatch_rejected() {
    let backend = common::MockBackend::start().await;
    let test = common::create_logged_in_client(&backend.base_url);
    let page = ProfileController::new(&test.client);

    assert_err!(page.change_password("old-pass", "newpass1", "newpass2").await);

    assert!(backend.requests().is_empty());
    assert!(test.notifier.contains("Validation error: New passwords do not match"));
}

#[tokio::test]
async fn test_change_password_sends_camel_case_body() {
    let backend = common::MockBackend::start().await;
    backend.respond(
        Method::POST,
        "/auth/change-password",
        StatusCode::OK,
        json!({ "success": true }),
    );
    let test = common::create_logged_in_client(&backend.base_url);
    let page = ProfileController::new(&test.client);

    let outcome = assert_ok!(page.change_password("old-pass", "newpass1", "newpass1").await);

    assert_eq!(outcome, Outcome::Saved);
    assert_eq!(
        backend.last_request().body,
        Some(json!({ "currentPassword": "old-pass", "newPassword": "newpass1" }))
    );
}
