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

//! Command engine.
//!
//! The [`Store`] owns the inventory and the customer ledger and applies
//! [`Command`]s to them.
//!
//! # Command Processing
//!
//! - **Sell**: Takes one unit of an item out of stock and logs it on the customer.
//! - **Buy**: Puts one unit of an item into stock and logs it on the customer.
//! - **ShowCustomer**: Renders one customer's history.
//! - **ShowHistory**: Renders every customer's history in name order.
//! - **ShowInventory**: Renders the stock of every category.
//!
//! Every command checks the customer and the item before it touches either
//! structure, so a rejected command leaves the store unchanged.

use crate::base::Category;
use crate::catalog::CatalogIndex;
use crate::command::Command;
use crate::customer::{Customer, TransactionKind};
use crate::error::StoreError;
use crate::item::Item;
use crate::ledger::CustomerLedger;
use crate::report::{HistoryReport, InventoryReport};
use tracing::debug;

/// Successful result of [`Store::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Sold,
    Bought {
        /// `false` when the item was out of stock before the purchase.
        already_present: bool,
    },
    /// Rendered report text, ready to be written out.
    Report(String),
}

/// Store inventory and customers.
#[derive(Debug, Default)]
pub struct Store {
    catalog: CatalogIndex,
    ledger: CustomerLedger,
}

impl Store {
    /// Creates a store with no stock and no customers.
    pub fn new() -> Self {
        Store {
            catalog: CatalogIndex::new(),
            ledger: CustomerLedger::new(),
        }
    }

    /// Registers a customer.
    ///
    /// # Errors
    ///
    /// [`StoreError::DuplicateCustomer`] if the ID is already taken.
    pub fn add_customer(&mut self, customer: Customer) -> Result<bool, StoreError> {
        let id = customer.id();
        let inserted = self.ledger.add_customer(customer)?;
        debug!(customer = %id, inserted, "customer added");
        Ok(inserted)
    }

    /// Adds `count` units of `item` to the stock of `category`.
    pub fn add_inventory(
        &mut self,
        category: Category,
        item: Item,
        count: u32,
    ) -> Result<bool, StoreError> {
        let inserted = self.catalog.add_units(category, item, count)?;
        debug!(%category, count, inserted, "inventory added");
        Ok(inserted)
    }

    /// Applies a command.
    ///
    /// # Command Types
    ///
    /// | Type | Behavior |
    /// |------|----------|
    /// | Sell | Removes one unit from stock, logs `S` on the customer |
    /// | Buy | Adds one unit to stock, logs `B` on the customer |
    /// | ShowCustomer | Reports one customer's history |
    /// | ShowHistory | Reports every customer's history |
    /// | ShowInventory | Reports the stock |
    ///
    /// # Errors
    ///
    /// - [`StoreError::UnknownCustomer`] - The command names an unregistered customer.
    /// - [`StoreError::ItemNotInStock`] - Sell of an item with no units left.
    /// - [`StoreError::CategoryMismatch`] - The item does not belong to the named category.
    /// - [`StoreError::CountOverflow`] - Buy would overflow the item's count.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, StoreError> {
        match command {
            Command::Sell {
                customer,
                category,
                item,
            } => {
                if self.ledger.find(customer).is_none() {
                    return Err(StoreError::UnknownCustomer(customer));
                }
                if !self.catalog.sell_one(category, &item)? {
                    return Err(StoreError::ItemNotInStock(item));
                }
                debug!(%customer, %item, "item sold");
                self.ledger
                    .append_transaction(customer, TransactionKind::Sell, item)?;
                Ok(Outcome::Sold)
            }
            Command::Buy {
                customer,
                category,
                item,
            } => {
                if self.ledger.find(customer).is_none() {
                    return Err(StoreError::UnknownCustomer(customer));
                }
                // The catalog keeps its own copy; the history gets this one.
                let outcome = self.catalog.buy_one(category, item.clone())?;
                debug!(
                    %customer,
                    %item,
                    already_present = outcome.already_present,
                    "item bought"
                );
                self.ledger
                    .append_transaction(customer, TransactionKind::Buy, item)?;
                Ok(Outcome::Bought {
                    already_present: outcome.already_present,
                })
            }
            Command::ShowCustomer { customer } => {
                let customer = self
                    .ledger
                    .find(customer)
                    .ok_or(StoreError::UnknownCustomer(customer))?;
                Ok(Outcome::Report(customer.to_string()))
            }
            Command::ShowHistory => Ok(Outcome::Report(HistoryReport(&self.ledger).to_string())),
            Command::ShowInventory => {
                Ok(Outcome::Report(InventoryReport(&self.catalog).to_string()))
            }
        }
    }

    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    pub fn ledger(&self) -> &CustomerLedger {
        &self.ledger
    }
}
