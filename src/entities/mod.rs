//! Entity module - Contains the plain data records shared across the crate.
//! Catalog entries are static reference data; deposits and redemptions are
//! immutable once created and only ever appended by the ledger.

pub mod conversation;
pub mod deposit;
pub mod member;
pub mod redemption;
pub mod waste;
pub mod waste_bank;

pub use conversation::{ConversationRole, ConversationTurn};
pub use deposit::{DepositStatus, DepositTransaction};
pub use member::Member;
pub use redemption::{RedemptionItem, RedemptionRecord, RewardCategory};
pub use waste::{CategoryRate, WasteCategory};
pub use waste_bank::{Coordinates, WasteBank};
