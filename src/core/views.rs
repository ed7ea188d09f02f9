//! View derivation - read-only, member-scoped projections for the dashboard.
//!
//! This module computes recent activity, trend series and summaries from the
//! current state and provides the formatting helpers the presentation layer
//! uses. Nothing here mutates state.

use crate::{
    core::state::BankState,
    entities::{DepositTransaction, RedemptionRecord},
    errors::Result,
};
use chrono::{Days, NaiveDate, Utc};

/// Dashboard totals for one member, straight from the member record
#[derive(Debug, Clone, PartialEq)]
pub struct MemberSummary {
    /// Display name
    pub name: String,
    /// Cash savings in Rupiah
    pub balance: u64,
    /// Reward points
    pub points: u64,
    /// Cumulative deposited weight in kilograms
    pub total_waste_kg: f64,
    /// Rank label
    pub rank: String,
}

/// Total deposited weight on one day
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    /// Calendar day
    pub date: NaiveDate,
    /// Sum of deposit weights on that day, in kilograms
    pub weight_kg: f64,
}

/// Returns the member's last `n` deposits, most recent first.
pub fn recent_activity<'a>(
    state: &'a BankState,
    member_id: &str,
    n: usize,
) -> Result<Vec<&'a DepositTransaction>> {
    let deposits = state.directory().deposits_for(member_id)?;
    Ok(deposits.into_iter().rev().take(n).collect())
}

/// Returns the member's last `n` redemptions, most recent first.
pub fn redemption_history<'a>(
    state: &'a BankState,
    member_id: &str,
    n: usize,
) -> Result<Vec<&'a RedemptionRecord>> {
    let redemptions = state.directory().redemptions_for(member_id)?;
    Ok(redemptions.into_iter().rev().take(n).collect())
}

/// Daily deposited weight for the trailing `days` days ending today.
pub fn trend_series(state: &BankState, member_id: &str, days: u32) -> Result<Vec<TrendPoint>> {
    trend_series_at(state, member_id, days, Utc::now().date_naive())
}

/// Daily deposited weight for the `days` days ending on `today`, oldest first.
///
/// Every day in the window gets a point; days without deposits have weight 0.
/// Only recorded deposits are counted.
pub fn trend_series_at(
    state: &BankState,
    member_id: &str,
    days: u32,
    today: NaiveDate,
) -> Result<Vec<TrendPoint>> {
    let deposits = state.directory().deposits_for(member_id)?;

    let series = (0..days)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(u64::from(offset))))
        .map(|date| TrendPoint {
            date,
            weight_kg: deposits
                .iter()
                .filter(|d| d.date == date)
                .fold(0.0, |total, d| total + d.weight_kg),
        })
        .collect();
    Ok(series)
}

/// Balance, points, total waste and rank as held on the member record.
pub fn summary(state: &BankState, member_id: &str) -> Result<MemberSummary> {
    let member = state.directory().get_member(member_id)?;
    Ok(MemberSummary {
        name: member.name.clone(),
        balance: member.balance,
        points: member.points,
        total_waste_kg: member.total_waste_kg,
        rank: member.rank.clone(),
    })
}

/// Formats a Rupiah amount with Indonesian thousands separators.
///
/// # Returns
/// Formatted string like "Rp 450.000"
#[must_use]
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("Rp {grouped}")
}

/// Formats a weight, dropping a trailing ".0" (e.g. "10 kg", "5.2 kg").
#[must_use]
pub fn format_weight(weight_kg: f64) -> String {
    format!("{weight_kg} kg")
}

/// Generates a summary line for a deposit.
///
/// # Returns
/// Formatted string like "2023-10-24 | Plastik | 5.2 kg | +Rp 18.200 | Selesai"
#[must_use]
pub fn format_deposit_line(deposit: &DepositTransaction) -> String {
    format!(
        "{} | {} | {} | +{} | {}",
        deposit.date,
        deposit.category,
        format_weight(deposit.weight_kg),
        format_rupiah(deposit.cash_value),
        deposit.status.label()
    )
}
