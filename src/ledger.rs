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

//! Customer directory.
//!
//! Customers are indexed twice:
//!
//! - by name, in an [`OrderedMultiset`], which owns every record and drives
//!   the alphabetical history report;
//! - by ID, in a fixed table of [`Weak`] handles for O(1) lookup.
//!
//! The ordered index cannot tell apart two customers with the same name. The
//! second one only bumps the count of the first record there, so the name
//! ordered views show the first record once per ID. Lookup by ID still
//! reaches each customer's own record.

use crate::base::CustomerId;
use crate::customer::{Customer, TransactionKind};
use crate::error::StoreError;
use crate::item::Item;
use crate::multiset::OrderedMultiset;
use std::sync::{Arc, Weak};

#[derive(Debug)]
pub struct CustomerLedger {
    by_name: OrderedMultiset<Arc<Customer>>,
    /// Records whose name was already taken in `by_name` when they were added.
    shadowed: Vec<Arc<Customer>>,
    /// Indexed by `CustomerId`; every handle points into `by_name` or `shadowed`.
    by_id: Vec<Option<Weak<Customer>>>,
}

impl CustomerLedger {
    pub fn new() -> Self {
        Self {
            by_name: OrderedMultiset::new(),
            shadowed: Vec::new(),
            by_id: vec![None; usize::from(CustomerId::LIMIT)],
        }
    }

    /// Registers a customer under its ID.
    ///
    /// Returns `true` if a new record entered the name index, `false` if the
    /// name was already taken. In that case the name index only counts the
    /// existing record once more, while this ID keeps resolving to the new
    /// record.
    ///
    /// # Errors
    ///
    /// [`StoreError::DuplicateCustomer`] if the ID is already registered.
    pub fn add_customer(&mut self, customer: Customer) -> Result<bool, StoreError> {
        let id = customer.id();
        if self.find(id).is_some() {
            return Err(StoreError::DuplicateCustomer(id));
        }

        let customer = Arc::new(customer);
        self.by_id[id.index()] = Some(Arc::downgrade(&customer));
        if self.by_name.contains(&customer) {
            self.shadowed.push(Arc::clone(&customer));
        }
        Ok(self.by_name.insert(customer))
    }

    /// Looks a customer up by ID.
    pub fn find(&self, id: CustomerId) -> Option<Arc<Customer>> {
        self.by_id.get(id.index())?.as_ref()?.upgrade()
    }

    /// Appends a transaction to the history of customer `id`.
    ///
    /// # Errors
    ///
    /// [`StoreError::UnknownCustomer`] if no customer has this ID.
    pub fn append_transaction(
        &self,
        id: CustomerId,
        kind: TransactionKind,
        item: Item,
    ) -> Result<(), StoreError> {
        let customer = self.find(id).ok_or(StoreError::UnknownCustomer(id))?;
        customer.record(kind, item);
        Ok(())
    }

    /// Customers in ascending name order. A record shared by several IDs is
    /// yielded once per ID.
    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.by_name.units().map(|customer| &**customer)
    }

    pub fn for_each_in_name_order<F>(&self, visitor: F)
    where
        F: FnMut(&Customer),
    {
        self.iter().for_each(visitor);
    }

    /// Number of distinct customer records.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for CustomerLedger {
    fn default() -> Self {
        Self::new()
    }
}
