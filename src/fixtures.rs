//! Sample records shown when the backend cannot be reached, so every page
//! still has something to display. Never authoritative.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::models::{
    AdminProfile, AttendanceRecord, DietPlan, Difficulty, Exercise, Meal, Membership,
    MembershipStatus, Payment, PaymentStatus, PlanType, User, WorkoutPlan,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_default()
}

const MEMBERS: &[(&str, &str, &str)] = &[
    ("1", "John Doe", "john@example.com"),
    ("2", "Jane Smith", "jane@example.com"),
    ("3", "Mike Johnson", "mike@example.com"),
    ("4", "Sarah Williams", "sarah@example.com"),
    ("5", "David Brown", "david@example.com"),
];

pub fn users() -> Vec<User> {
    let statuses = ["active", "active", "expired", "active", "cancelled"];
    MEMBERS
        .iter()
        .zip(statuses)
        .map(|(&(id, name, email), status)| User {
            id: id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            age: None,
            weight: None,
            height: None,
            goal: None,
            membership_status: Some(status.to_string()),
        })
        .collect()
}

pub fn workout_plans() -> Vec<WorkoutPlan> {
    let exercise = |name: &str, sets, reps, rest_time| Exercise {
        name: name.to_string(),
        sets,
        reps,
        rest_time,
    };
    vec![
        WorkoutPlan {
            id: "1".to_string(),
            name: "Full Body Starter".to_string(),
            description: "Three sessions a week covering every major muscle group".to_string(),
            difficulty: Difficulty::Beginner,
            exercises: vec![
                exercise("Goblet Squat", 3, 12, 60),
                exercise("Push-up", 3, 10, 60),
                exercise("Dumbbell Row", 3, 12, 60),
            ],
        },
        WorkoutPlan {
            id: "2".to_string(),
            name: "Strength Block".to_string(),
            description: "Heavy compound lifts".to_string(),
            difficulty: Difficulty::Advanced,
            exercises: vec![
                exercise("Back Squat", 5, 5, 180),
                exercise("Bench Press", 5, 5, 180),
                exercise("Deadlift", 3, 5, 240),
            ],
        },
    ]
}

pub fn diet_plans() -> Vec<DietPlan> {
    let meal = |name: &str, time: &str, foods: &[&str]| Meal {
        name: name.to_string(),
        time: time.to_string(),
        foods: foods.iter().map(|f| f.to_string()).collect(),
    };
    vec![
        DietPlan {
            id: "1".to_string(),
            name: "Lean Cut".to_string(),
            description: "Moderate deficit, high protein".to_string(),
            calories: 1800,
            meals: vec![
                meal("Breakfast", "08:00", &["Oatmeal", "Egg whites"]),
                meal("Lunch", "13:00", &["Grilled chicken", "Brown rice", "Broccoli"]),
                meal("Dinner", "19:00", &["Salmon", "Sweet potato"]),
            ],
        },
        DietPlan {
            id: "2".to_string(),
            name: "Muscle Gain".to_string(),
            description: "Surplus with five meals a day".to_string(),
            calories: 3000,
            meals: vec![
                meal("Breakfast", "07:30", &["Eggs", "Toast", "Banana"]),
                meal("Lunch", "12:30", &["Beef", "Pasta"]),
            ],
        },
    ]
}

pub fn memberships() -> Vec<Membership> {
    vec![
        Membership {
            id: "1".to_string(),
            user_id: "1".to_string(),
            user_name: "John Doe".to_string(),
            user_email: "john@example.com".to_string(),
            plan_type: PlanType::Monthly,
            start_date: ymd(2024, 1, 1),
            end_date: ymd(2024, 2, 1),
            status: MembershipStatus::Active,
            created_at: Some(at(2024, 1, 1, 10, 0)),
        },
        Membership {
            id: "2".to_string(),
            user_id: "2".to_string(),
            user_name: "Jane Smith".to_string(),
            user_email: "jane@example.com".to_string(),
            plan_type: PlanType::Yearly,
            start_date: ymd(2024, 1, 15),
            end_date: ymd(2025, 1, 15),
            status: MembershipStatus::Active,
            created_at: Some(at(2024, 1, 15, 14, 30)),
        },
        Membership {
            id: "3".to_string(),
            user_id: "3".to_string(),
            user_name: "Mike Johnson".to_string(),
            user_email: "mike@example.com".to_string(),
            plan_type: PlanType::Monthly,
            start_date: ymd(2023, 12, 1),
            end_date: ymd(2024, 1, 1),
            status: MembershipStatus::Expired,
            created_at: Some(at(2023, 12, 1, 9, 15)),
        },
    ]
}

/// Check-ins for today and yesterday relative to `now`.
pub fn attendance(now: DateTime<Utc>) -> Vec<AttendanceRecord> {
    let yesterday = now - Duration::days(1);
    let plan = [
        ("1", now, "08:30"),
        ("2", now, "09:15"),
        ("3", now, "10:00"),
        ("4", yesterday, "07:45"),
        ("5", yesterday, "11:30"),
    ];

    plan.iter()
        .enumerate()
        .map(|(i, &(user_id, when, time))| {
            let (_, name, email) = MEMBERS
                .iter()
                .find(|(id, _, _)| *id == user_id)
                .copied()
                .unwrap_or((user_id, "Demo User", "demo@example.com"));
            AttendanceRecord {
                id: (i + 1).to_string(),
                user_id: user_id.to_string(),
                user_name: name.to_string(),
                user_email: email.to_string(),
                check_in_time: time.to_string(),
                date: when.date_naive(),
                created_at: when,
            }
        })
        .collect()
}

pub fn payments() -> Vec<Payment> {
    let rows = [
        ("1", "1", 49.99, PlanType::Monthly, PaymentStatus::Completed, at(2024, 1, 15, 14, 30), "Credit Card"),
        ("2", "2", 499.99, PlanType::Yearly, PaymentStatus::Completed, at(2024, 1, 20, 11, 45), "PayPal"),
        ("3", "3", 49.99, PlanType::Monthly, PaymentStatus::Pending, at(2024, 1, 25, 16, 20), "Credit Card"),
        ("4", "4", 49.99, PlanType::Monthly, PaymentStatus::Failed, at(2024, 1, 28, 9, 15), "Debit Card"),
        ("5", "5", 499.99, PlanType::Yearly, PaymentStatus::Refunded, at(2024, 1, 30, 13, 40), "Credit Card"),
        ("6", "1", 49.99, PlanType::Monthly, PaymentStatus::Completed, at(2024, 2, 1, 10, 30), "Credit Card"),
    ];

    rows.iter()
        .map(|&(id, user_id, amount, plan_type, status, created_at, method)| {
            let (_, name, email) = MEMBERS
                .iter()
                .find(|(uid, _, _)| *uid == user_id)
                .copied()
                .unwrap_or((user_id, "Unknown User", "unknown@example.com"));
            Payment {
                id: id.to_string(),
                user_id: user_id.to_string(),
                user_name: name.to_string(),
                user_email: email.to_string(),
                amount,
                plan_type,
                status,
                created_at,
                payment_method: method.to_string(),
            }
        })
        .collect()
}

pub fn admin_profile(now: DateTime<Utc>) -> AdminProfile {
    AdminProfile {
        id: "1".to_string(),
        email: "admin@example.com".to_string(),
        name: "Admin User".to_string(),
        role: "admin".to_string(),
        created_at: Some(now),
        phone: Some("+1 (555) 123-4567".to_string()),
        location: Some("New York, USA".to_string()),
    }
}
