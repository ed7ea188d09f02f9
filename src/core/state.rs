//! Application state container.
//!
//! `BankState` is created once by the application root and passed to the ledger
//! and view functions. Every successful mutation publishes a [`StateChange`] on
//! a broadcast channel so the presentation layer can recompute its views.

use crate::{
    config::AppConfig,
    core::{catalog::Catalog, directory::MemberDirectory},
    entities::Member,
    errors::Result,
};
use tokio::sync::broadcast;
use tracing::{info, trace};

const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// Notification sent after state has changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateChange {
    /// A deposit was appended and the member's balances credited
    DepositRecorded {
        /// Member credited
        member_id: String,
        /// New deposit id
        deposit_id: u64,
    },
    /// A redemption was appended and the member's points debited
    ItemRedeemed {
        /// Member debited
        member_id: String,
        /// New redemption id
        redemption_id: u64,
    },
    /// A different member is now being viewed
    ActiveMemberChanged {
        /// Newly selected member
        member_id: String,
    },
}

/// Catalog, directory and the currently selected member
#[derive(Debug)]
pub struct BankState {
    pub(crate) catalog: Catalog,
    pub(crate) directory: MemberDirectory,
    active_member: Option<String>,
    changes: broadcast::Sender<StateChange>,
}

impl BankState {
    /// Creates the state with the first registered member selected.
    #[must_use]
    pub fn new(catalog: Catalog, directory: MemberDirectory) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        let active_member = directory.list_members().first().map(|m| m.id.clone());
        Self {
            catalog,
            directory,
            active_member,
            changes,
        }
    }

    /// Builds the catalog and directory from configuration.
    ///
    /// # Errors
    /// Returns an error if the catalog or any member seed is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let catalog = Catalog::from_config(config)?;
        let directory = MemberDirectory::from_seeds(&config.members, &catalog)?;
        info!(
            "Bank state ready: {} members, {} redemption items, {} waste banks",
            directory.list_members().len(),
            catalog.redemption_items().len(),
            catalog.waste_banks().len()
        );
        Ok(Self::new(catalog, directory))
    }

    /// Reference data
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Members and logs
    #[must_use]
    pub const fn directory(&self) -> &MemberDirectory {
        &self.directory
    }

    /// Subscribes to change notifications published after this call.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.changes.subscribe()
    }

    pub(crate) fn publish(&self, change: StateChange) {
        // No subscribers is fine; nothing is rendering yet.
        if let Err(e) = self.changes.send(change) {
            trace!("No subscribers for state change: {:?}", e.0);
        }
    }

    /// The member currently being viewed, if any members exist.
    #[must_use]
    pub fn active_member(&self) -> Option<&Member> {
        self.active_member
            .as_deref()
            .and_then(|id| self.directory.get_member(id).ok())
    }

    /// Switches the viewed member.
    ///
    /// # Errors
    /// Returns `UnknownMember` and keeps the current selection if the id is not registered.
    pub fn select_member(&mut self, member_id: &str) -> Result<&Member> {
        self.directory.get_member(member_id)?;
        self.active_member = Some(member_id.to_string());
        info!("Active member switched to {member_id}");
        self.publish(StateChange::ActiveMemberChanged {
            member_id: member_id.to_string(),
        });
        self.directory.get_member(member_id)
    }
}
