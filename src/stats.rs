//! Derived numbers shown above the list pages.

use std::collections::HashSet;

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;

use crate::models::{AttendanceRecord, Membership, MembershipStatus, Payment, PaymentStatus, PlanType};

/// Sum of amounts over completed payments.
pub fn total_revenue(payments: &[Payment]) -> f64 {
    payments
        .iter()
        .filter(|p| p.is_completed())
        .map(|p| p.amount)
        .sum()
}

/// Completed revenue in the calendar month containing `today`.
pub fn monthly_revenue(payments: &[Payment], today: NaiveDate) -> f64 {
    revenue_in_month(payments, today.year(), today.month()).0
}

fn revenue_in_month(payments: &[Payment], year: i32, month: u32) -> (f64, usize) {
    payments
        .iter()
        .filter(|p| p.is_completed())
        .filter(|p| {
            let date = p.created_at.date_naive();
            date.year() == year && date.month() == month
        })
        .fold((0.0, 0), |(sum, count), p| (sum + p.amount, count + 1))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentStats {
    pub total_revenue: f64,
    pub monthly_revenue: f64,
    pub completed: usize,
    pub pending: usize,
    pub failed: usize,
    pub refunded: usize,
    pub monthly_plans: usize,
    pub yearly_plans: usize,
    pub total_transactions: usize,
}

pub fn payment_stats(payments: &[Payment], today: NaiveDate) -> PaymentStats {
    let count_status = |status: PaymentStatus| payments.iter().filter(|p| p.status == status).count();
    let count_plan = |plan: PlanType| payments.iter().filter(|p| p.plan_type == plan).count();

    PaymentStats {
        total_revenue: total_revenue(payments),
        monthly_revenue: monthly_revenue(payments, today),
        completed: count_status(PaymentStatus::Completed),
        pending: count_status(PaymentStatus::Pending),
        failed: count_status(PaymentStatus::Failed),
        refunded: count_status(PaymentStatus::Refunded),
        monthly_plans: count_plan(PlanType::Monthly),
        yearly_plans: count_plan(PlanType::Yearly),
        total_transactions: payments.len(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthRevenue {
    pub year: i32,
    pub month: u32,
    /// Short month name, e.g. `Jan`.
    pub label: String,
    pub revenue: f64,
    pub transactions: usize,
}

/// Completed revenue for the `months` calendar months ending with the one
/// containing `today`, oldest first.
pub fn revenue_by_month(payments: &[Payment], today: NaiveDate, months: u32) -> Vec<MonthRevenue> {
    let Some(first_of_month) = today.with_day(1) else {
        return Vec::new();
    };

    (0..months)
        .rev()
        .filter_map(|back| first_of_month.checked_sub_months(Months::new(back)))
        .map(|month_start| {
            let (revenue, transactions) =
                revenue_in_month(payments, month_start.year(), month_start.month());
            MonthRevenue {
                year: month_start.year(),
                month: month_start.month(),
                label: month_start.format("%b").to_string(),
                revenue,
                transactions,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceStats {
    pub total_check_ins: usize,
    pub today_check_ins: usize,
    /// Mean check-ins per day over the last 7 days, rounded.
    pub average_daily: u64,
    pub active_users: usize,
}

pub fn attendance_stats(records: &[AttendanceRecord], today: NaiveDate) -> AttendanceStats {
    let last_week_total: usize = (0..7)
        .filter_map(|back| today.checked_sub_signed(Duration::days(back)))
        .map(|day| records.iter().filter(|r| r.date == day).count())
        .sum();

    AttendanceStats {
        total_check_ins: records.len(),
        today_check_ins: records.iter().filter(|r| r.date == today).count(),
        average_daily: (last_week_total as f64 / 7.0).round() as u64,
        active_users: records
            .iter()
            .map(|r| r.user_id.as_str())
            .collect::<HashSet<_>>()
            .len(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckInCounts {
    pub this_week: usize,
    pub this_month: usize,
    pub total: usize,
}

/// Check-ins for one member: within the rolling last 7 days (today and the
/// six before it), since the 1st of the current month, and overall.
pub fn user_check_ins(records: &[AttendanceRecord], user_id: &str, today: NaiveDate) -> CheckInCounts {
    let week_start = today
        .checked_sub_signed(Duration::days(6))
        .unwrap_or(NaiveDate::MIN);
    let month_start = today.with_day(1).unwrap_or(today);

    let mine: Vec<&AttendanceRecord> = records.iter().filter(|r| r.user_id == user_id).collect();

    CheckInCounts {
        this_week: mine.iter().filter(|r| r.date >= week_start).count(),
        this_month: mine.iter().filter(|r| r.date >= month_start).count(),
        total: mine.len(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MembershipSummary {
    pub total: usize,
    pub active: usize,
    pub expired: usize,
    pub cancelled: usize,
    pub expiring_soon: usize,
}

pub fn membership_summary(memberships: &[Membership], now: chrono::DateTime<chrono::Utc>) -> MembershipSummary {
    let count = |status: MembershipStatus| memberships.iter().filter(|m| m.status == status).count();

    MembershipSummary {
        total: memberships.len(),
        active: count(MembershipStatus::Active),
        expired: count(MembershipStatus::Expired),
        cancelled: count(MembershipStatus::Cancelled),
        expiring_soon: memberships
            .iter()
            .filter(|m| m.status == MembershipStatus::Active && m.is_expiring_soon(now))
            .count(),
    }
}
