use chrono::NaiveDate;

use super::{settle_fetch, ListState};
use crate::client::ApiClient;
use crate::filters::{self, Choice, DateRange};
use crate::fixtures;
use crate::models::{Payment, PaymentStatus, PlanType};
use crate::repositories::PaymentRepository;
use crate::stats::{self, MonthRevenue, PaymentStats};

pub const CSV_HEADER: &str = "ID,User,Email,Amount,Plan Type,Status,Payment Method,Date";

/// Months shown in the revenue chart.
pub const REVENUE_MONTHS: u32 = 6;

pub struct PaymentsController {
    client: ApiClient,
    repo: PaymentRepository,
    pub state: ListState<Payment>,
    pub search: String,
    pub status: Choice<PaymentStatus>,
    pub plan: Choice<PlanType>,
    pub range: DateRange,
}

impl PaymentsController {
    pub fn new(client: &ApiClient) -> Self {
        Self {
            client: client.clone(),
            repo: PaymentRepository::new(client.clone()),
            state: ListState::default(),
            search: String::new(),
            status: Choice::All,
            plan: Choice::All,
            range: DateRange::default(),
        }
    }

    pub async fn load(&mut self) {
        let result = self.repo.history().await;
        self.state = settle_fetch(result, fixtures::payments, self.client.notifier(), "payments");
    }

    pub fn visible(&self) -> Vec<Payment> {
        filters::search(&self.state.records, &self.search)
            .into_iter()
            .filter(|p| self.status.allows(&p.status))
            .filter(|p| self.plan.allows(&p.plan_type))
            .filter(|p| self.range.contains(p.created_at))
            .collect()
    }

    /// Totals over the whole history, not just the filtered rows.
    pub fn stats(&self, today: NaiveDate) -> PaymentStats {
        stats::payment_stats(&self.state.records, today)
    }

    pub fn revenue_series(&self, today: NaiveDate) -> Vec<MonthRevenue> {
        stats::revenue_by_month(&self.state.records, today, REVENUE_MONTHS)
    }

    pub fn export_csv(&self) -> String {
        let csv = payments_csv(&self.visible());
        self.client.notifier().success("Export started");
        csv
    }
}

/// CSV of `payments`, header first, one line per payment.
pub fn payments_csv(payments: &[Payment]) -> String {
    let mut lines = Vec::with_capacity(payments.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for p in payments {
        let fields = [
            p.id.clone(),
            p.user_name.clone(),
            p.user_email.clone(),
            format!("${:.2}", p.amount),
            p.plan_type.as_str().to_string(),
            p.status.as_str().to_string(),
            p.payment_method.clone(),
            p.created_at.format("%Y-%m-%d").to_string(),
        ];
        let row: Vec<String> = fields.iter().map(|f| csv_field(f)).collect();
        lines.push(row.join(","));
    }
    lines.join("\n")
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
