//! Plain-text rendering of the admin pages for the terminal.

use chrono::{DateTime, Utc};

use gymadmin::controllers::{DashboardController, DataSource};
use gymadmin::models::{
    AdminProfile, AttendanceRecord, DietPlan, DietPlanDraft, Membership, Payment, User, WorkoutPlan,
};
use gymadmin::stats::{AttendanceStats, MembershipSummary, MonthRevenue, PaymentStats};

fn source_note(source: DataSource) {
    if source == DataSource::Fallback {
        println!("(sample data: backend unavailable)");
    }
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

pub fn dashboard(page: &DashboardController) {
    match (&page.stats, &page.error) {
        (Some(stats), _) => {
            println!("Total users      {}", stats.total_users);
            println!("Active members   {}", stats.active_members);
            println!("Workout plans    {}", stats.workout_plans);
            println!("Diet plans       {}", stats.diet_plans);
            println!("Monthly revenue  ${:.2}", stats.monthly_revenue);
        }
        (None, Some(error)) => println!("Dashboard unavailable: {}", error),
        (None, None) => println!("Dashboard not loaded"),
    }
}

pub fn users(users: &[User], source: DataSource) {
    source_note(source);
    println!(
        "{:<26} {:<20} {:<28} {:>4} {:>7} {:>7} {:<16} {:<8}",
        "ID", "Name", "Email", "Age", "Weight", "Height", "Goal", "Status"
    );
    for u in users {
        println!(
            "{:<26} {:<20} {:<28} {:>4} {:>7} {:>7} {:<16} {:<8}",
            u.id,
            u.name,
            u.email,
            or_dash(u.age),
            or_dash(u.weight),
            or_dash(u.height),
            u.goal.as_deref().unwrap_or("-"),
            u.membership_status.as_deref().unwrap_or("-"),
        );
    }
    println!("{} user(s)", users.len());
}

pub fn workout_plans(plans: &[WorkoutPlan], source: DataSource) {
    source_note(source);
    for plan in plans {
        println!("{} [{}] {}", plan.id, plan.difficulty.as_str(), plan.name);
        if !plan.description.is_empty() {
            println!("  {}", plan.description);
        }
        for e in &plan.exercises {
            println!("  - {}: {}x{}, rest {}s", e.name, e.sets, e.reps, e.rest_time);
        }
    }
}

pub fn diet_plans(plans: &[DietPlan], source: DataSource) {
    source_note(source);
    for plan in plans {
        println!("{} {} ({} kcal)", plan.id, plan.name, plan.calories);
        for meal in &plan.meals {
            println!("  {} {}: {}", meal.time, meal.name, meal.foods.join(", "));
        }
    }
}

pub fn diet_draft(draft: &DietPlanDraft) {
    let macros = draft.macro_totals();
    println!("{} ({})", draft.title, draft.goal.as_str());
    for meal in &draft.meals {
        println!("  {} {}: {} kcal", meal.time, meal.name, meal.total_calories());
    }
    println!(
        "  {} of {} kcal, protein {}g, carbs {}g, fats {}g",
        draft.daily_total(),
        draft.daily_calories,
        macros.protein,
        macros.carbs,
        macros.fats
    );
}

pub fn memberships(
    memberships: &[Membership],
    summary: MembershipSummary,
    source: DataSource,
    now: DateTime<Utc>,
) {
    source_note(source);
    println!(
        "total {}  active {}  expired {}  cancelled {}  expiring soon {}",
        summary.total, summary.active, summary.expired, summary.cancelled, summary.expiring_soon
    );
    for m in memberships {
        let days = m.days_remaining(now);
        let flag = if m.is_expiring_soon(now) { " !" } else { "" };
        println!(
            "{:<26} {:<20} {:<8} {} -> {} {:<9} {:>4}d{}",
            m.id,
            m.user_name,
            m.plan_type.as_str(),
            m.start_date,
            m.end_date,
            m.status.as_str(),
            days.max(0),
            flag,
        );
    }
}

pub fn attendance(records: &[AttendanceRecord], stats: AttendanceStats) {
    println!(
        "total {}  today {}  avg/day {}  active users {}",
        stats.total_check_ins, stats.today_check_ins, stats.average_daily, stats.active_users
    );
    for r in records {
        println!("{} {} {:<20} {}", r.date, r.check_in_time, r.user_name, r.user_email);
    }
}

pub fn payments(
    payments: &[Payment],
    stats: &PaymentStats,
    revenue: &[MonthRevenue],
    source: DataSource,
) {
    source_note(source);
    println!(
        "revenue ${:.2} (this month ${:.2})  completed {}  pending {}  failed {}  refunded {}",
        stats.total_revenue,
        stats.monthly_revenue,
        stats.completed,
        stats.pending,
        stats.failed,
        stats.refunded
    );
    let series: Vec<String> = revenue
        .iter()
        .map(|m| format!("{} ${:.0}", m.label, m.revenue))
        .collect();
    println!("{}", series.join(" | "));
    for p in payments {
        println!(
            "{:<10} {:<20} {:>9} {:<8} {:<10} {:<14} {}",
            p.id,
            p.user_name,
            format!("${:.2}", p.amount),
            p.plan_type.as_str(),
            p.status.as_str(),
            p.payment_method,
            p.created_at.format("%Y-%m-%d"),
        );
    }
}

pub fn profile(profile: Option<&AdminProfile>, source: DataSource) {
    source_note(source);
    let Some(profile) = profile else {
        println!("Profile not loaded");
        return;
    };
    println!("Name      {}", profile.name);
    println!("Email     {}", profile.email);
    println!("Role      {}", profile.role);
    println!("Phone     {}", profile.phone.as_deref().unwrap_or("-"));
    println!("Location  {}", profile.location.as_deref().unwrap_or("-"));
    if let Some(created_at) = profile.created_at {
        println!("Joined    {}", created_at.format("%Y-%m-%d"));
    }
}
