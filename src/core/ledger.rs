//! Ledger business logic - the only place member balances and logs change.
//!
//! Both entry points validate and compute every new value before writing
//! anything, so a failed call leaves the member, the logs and the id counters
//! exactly as they were. Successful calls publish a `StateChange`.

use crate::{
    core::state::{BankState, StateChange},
    entities::{
        DepositStatus, DepositTransaction, RedemptionRecord, RewardCategory, WasteCategory,
    },
    errors::{Error, Result},
};
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

/// Records a completed deposit dated today and credits the member.
///
/// # Arguments
/// * `state` - Application state
/// * `member_id` - Member handing in the waste
/// * `category` - Kind of waste
/// * `weight_kg` - Weight in kilograms, must be above zero
///
/// # Errors
/// - `InvalidWeight` if the weight is not a finite number above zero
/// - `UnknownMember` if the member is not registered
/// - `UnknownCategory` if the catalog has no rate for the category
/// - `BalanceOverflow` if the deposit is too large to value exactly or crediting would overflow a balance
pub fn record_deposit(
    state: &mut BankState,
    member_id: &str,
    category: WasteCategory,
    weight_kg: f64,
) -> Result<DepositTransaction> {
    record_deposit_on(state, member_id, category, weight_kg, Utc::now().date_naive())
}

/// Records a completed deposit with an explicit date and credits the member.
///
/// Cash value is `weight × price`, points are `weight × point rate`, both
/// rounded half-up. The balance, points and total weight are incremented and
/// the transaction is appended to the log, all or nothing.
pub fn record_deposit_on(
    state: &mut BankState,
    member_id: &str,
    category: WasteCategory,
    weight_kg: f64,
    date: NaiveDate,
) -> Result<DepositTransaction> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(Error::InvalidWeight { weight: weight_kg });
    }

    let member = state.directory.get_member(member_id)?;
    let overflow = || Error::BalanceOverflow {
        id: member_id.to_string(),
    };
    let quote = state
        .catalog
        .quote(category, weight_kg)
        .map_err(|e| match e {
            Error::DepositTooLarge { .. } => overflow(),
            other => other,
        })?;
    let new_balance = member
        .balance
        .checked_add(quote.cash_value)
        .ok_or_else(overflow)?;
    let new_points = member.points.checked_add(quote.points).ok_or_else(overflow)?;
    let new_total_waste = member.total_waste_kg + weight_kg;

    // Nothing below can fail except the member lookup, which just succeeded.
    let directory = &mut state.directory;
    let member = directory.member_mut(member_id)?;
    member.balance = new_balance;
    member.points = new_points;
    member.total_waste_kg = new_total_waste;

    let deposit = DepositTransaction {
        id: directory.allocate_deposit_id(),
        member_id: member_id.to_string(),
        date,
        category,
        weight_kg,
        cash_value: quote.cash_value,
        points: quote.points,
        status: DepositStatus::Completed,
    };
    directory.append_deposit(deposit.clone());

    info!(
        "Deposit #{} for {}: {} kg {} -> Rp {} / {} pts",
        deposit.id, member_id, weight_kg, category, deposit.cash_value, deposit.points
    );
    state.publish(StateChange::DepositRecorded {
        member_id: member_id.to_string(),
        deposit_id: deposit.id,
    });

    Ok(deposit)
}

/// Redeems a catalog item for the member, dated today.
///
/// Debits the item's point cost. Cash items additionally credit the flat
/// `cash_redemption_bonus` to the member's balance, whatever the item costs.
/// The record copies the item's name, cost and category as they are now.
///
/// # Errors
/// - `UnknownMember` if the member is not registered
/// - `UnknownItem` if the item is not in the catalog
/// - `InsufficientPoints` if the member holds fewer points than the item costs
/// - `BalanceOverflow` if the cash bonus would overflow the balance
pub fn redeem(state: &mut BankState, member_id: &str, item_id: &str) -> Result<RedemptionRecord> {
    redeem_on(state, member_id, item_id, Utc::now().date_naive())
}

/// Redeems a catalog item with an explicit date. See [`redeem`].
pub fn redeem_on(
    state: &mut BankState,
    member_id: &str,
    item_id: &str,
    date: NaiveDate,
) -> Result<RedemptionRecord> {
    let member = state.directory.get_member(member_id)?;
    let item = state.catalog.redemption_item(item_id)?;

    let Some(new_points) = member.points.checked_sub(item.points_cost) else {
        warn!(
            "Redemption of '{}' by {} rejected: {} points, needs {}",
            item.name, member_id, member.points, item.points_cost
        );
        return Err(Error::InsufficientPoints {
            available: member.points,
            required: item.points_cost,
        });
    };

    let new_balance = if item.category == RewardCategory::Cash {
        member
            .balance
            .checked_add(state.catalog.cash_redemption_bonus())
            .ok_or_else(|| Error::BalanceOverflow {
                id: member_id.to_string(),
            })?
    } else {
        member.balance
    };

    let item_name = item.name.clone();
    let points_cost = item.points_cost;
    let category = item.category;

    let directory = &mut state.directory;
    let member = directory.member_mut(member_id)?;
    member.points = new_points;
    member.balance = new_balance;

    let record = RedemptionRecord {
        id: directory.allocate_redemption_id(),
        member_id: member_id.to_string(),
        date,
        item_name,
        points_cost,
        category,
    };
    directory.append_redemption(record.clone());

    info!(
        "Redemption #{} for {}: '{}' ({}) for {} pts",
        record.id, member_id, record.item_name, record.category, record.points_cost
    );
    state.publish(StateChange::ItemRedeemed {
        member_id: member_id.to_string(),
        redemption_id: record.id,
    });

    Ok(record)
}
