//! Member directory - members in registration order plus the flat deposit and
//! redemption logs.
//!
//! The directory only answers queries. Balances and logs are changed by
//! `core::ledger`, which reaches the mutable parts through crate-private helpers.

use crate::{
    config::MemberSeed,
    core::catalog::Catalog,
    entities::{DepositTransaction, Member, RedemptionRecord},
    errors::{Error, Result},
};
use std::collections::HashSet;
use tracing::debug;

/// Canonical member list and append-only logs
#[derive(Debug, Clone, Default)]
pub struct MemberDirectory {
    members: Vec<Member>,
    pub(crate) deposits: Vec<DepositTransaction>,
    redemptions: Vec<RedemptionRecord>,
    next_deposit_id: u64,
    next_redemption_id: u64,
}

impl MemberDirectory {
    /// Registers the seeded members and their historical deposits.
    ///
    /// Seeded deposits are quoted with the catalog rates but do not change the
    /// seeded balances; those already account for them.
    ///
    /// # Errors
    /// - `Error::Config` if two seeds share a member id
    /// - `InvalidWeight` / `UnknownCategory` if a seeded deposit cannot be quoted
    pub fn from_seeds(seeds: &[MemberSeed], catalog: &Catalog) -> Result<Self> {
        let mut directory = Self {
            next_deposit_id: 1,
            next_redemption_id: 1,
            ..Self::default()
        };
        let mut seen = HashSet::new();

        for seed in seeds {
            if !seen.insert(seed.id.as_str()) {
                return Err(Error::Config {
                    message: format!("Duplicate member id '{}'", seed.id),
                });
            }

            directory.members.push(Member {
                id: seed.id.clone(),
                name: seed.name.clone(),
                avatar: seed.avatar.clone(),
                balance: seed.balance,
                points: seed.points,
                total_waste_kg: seed.total_waste_kg,
                rank: seed.rank.clone(),
            });

            for deposit in &seed.deposits {
                let quote = catalog.quote(deposit.category, deposit.weight_kg)?;
                let id = directory.allocate_deposit_id();
                directory.deposits.push(DepositTransaction {
                    id,
                    member_id: seed.id.clone(),
                    date: deposit.date,
                    category: deposit.category,
                    weight_kg: deposit.weight_kg,
                    cash_value: quote.cash_value,
                    points: quote.points,
                    status: deposit.status,
                });
            }
        }

        debug!(
            "Registered {} members with {} historical deposits",
            directory.members.len(),
            directory.deposits.len()
        );
        Ok(directory)
    }

    /// All members in registration order.
    #[must_use]
    pub fn list_members(&self) -> &[Member] {
        &self.members
    }

    /// Finds a member by id.
    pub fn get_member(&self, member_id: &str) -> Result<&Member> {
        self.members
            .iter()
            .find(|m| m.id == member_id)
            .ok_or_else(|| Error::UnknownMember {
                id: member_id.to_string(),
            })
    }

    /// The member's deposits in insertion order.
    pub fn deposits_for(&self, member_id: &str) -> Result<Vec<&DepositTransaction>> {
        self.get_member(member_id)?;
        Ok(self
            .deposits
            .iter()
            .filter(|d| d.member_id == member_id)
            .collect())
    }

    /// The member's redemptions in insertion order.
    pub fn redemptions_for(&self, member_id: &str) -> Result<Vec<&RedemptionRecord>> {
        self.get_member(member_id)?;
        Ok(self
            .redemptions
            .iter()
            .filter(|r| r.member_id == member_id)
            .collect())
    }

    pub(crate) fn member_mut(&mut self, member_id: &str) -> Result<&mut Member> {
        self.members
            .iter_mut()
            .find(|m| m.id == member_id)
            .ok_or_else(|| Error::UnknownMember {
                id: member_id.to_string(),
            })
    }

    pub(crate) fn allocate_deposit_id(&mut self) -> u64 {
        let id = self.next_deposit_id;
        self.next_deposit_id += 1;
        id
    }

    pub(crate) fn allocate_redemption_id(&mut self) -> u64 {
        let id = self.next_redemption_id;
        self.next_redemption_id += 1;
        id
    }

    pub(crate) fn append_deposit(&mut self, deposit: DepositTransaction) {
        self.deposits.push(deposit);
    }

    pub(crate) fn append_redemption(&mut self, record: RedemptionRecord) {
        self.redemptions.push(record);
    }
}
