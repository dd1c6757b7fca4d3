// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! # Collectible Store
//!
//! This library simulates a collectibles store: an inventory of coins,
//! comics and sports cards, a customer directory, and a command engine that
//! buys, sells and reports against them.
//!
//! ## Core Components
//!
//! - [`OrderedMultiset`]: Binary search tree storing each distinct key once with an occurrence count
//! - [`CatalogIndex`]: One multiset of items per [`Category`]
//! - [`CustomerLedger`]: Customers ordered by name and indexed by [`CustomerId`]
//! - [`Store`]: Command engine over the catalog and the ledger
//! - [`Command`]: Supported commands (sell, buy, and the three reports)
//! - [`StoreError`], [`RecordError`]: Error types for rejected operations and records
//!
//! ## Example
//!
//! ```
//! use collectible_store::{Category, Coin, Command, Customer, CustomerId, Outcome, Store};
//!
//! let mut store = Store::new();
//! let id = CustomerId::new(1).unwrap();
//! store.add_customer(Customer::new(id, "Mickey Mouse").unwrap()).unwrap();
//! store.add_inventory(Category::Coin, Coin::new("Lincoln", 2001, 65).into(), 2).unwrap();
//!
//! // Sell one unit
//! let sell = Command::Sell {
//!     customer: id,
//!     category: Category::Coin,
//!     item: Coin::new("Lincoln", 2001, 65).into(),
//! };
//! assert_eq!(store.execute(sell), Ok(Outcome::Sold));
//!
//! // Check the remaining stock
//! let report = store.execute(Command::ShowInventory).unwrap();
//! assert_eq!(
//!     report,
//!     Outcome::Report("Inventory:\nLincoln, 2001, 65; Count: 1\n\n".to_string())
//! );
//! ```

mod base;
pub mod catalog;
pub mod command;
pub mod customer;
mod engine;
pub mod error;
pub mod item;
pub mod ledger;
pub mod loader;
pub mod multiset;
mod report;

pub use base::{Category, CustomerId};
pub use catalog::{BuyOutcome, CatalogIndex};
pub use command::Command;
pub use customer::{Customer, Transaction, TransactionKind};
pub use engine::{Outcome, Store};
pub use error::{LineError, RecordError, StoreError};
pub use item::{Coin, Comic, Item, SportsCard, ValidationContext};
pub use ledger::CustomerLedger;
pub use loader::{LoadSummary, load_customers, load_inventory, replay_commands};
pub use multiset::OrderedMultiset;
pub use report::{HistoryReport, InventoryReport};
