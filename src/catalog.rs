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

//! Per-category item inventory.
//!
//! The [`CatalogIndex`] keeps one [`OrderedMultiset`] per [`Category`] and
//! routes every operation to the multiset of the item's category.
//!
//! # Example
//!
//! ```
//! use collectible_store::{CatalogIndex, Category, Coin, Item};
//!
//! let mut catalog = CatalogIndex::new();
//! let penny: Item = Coin::new("Lincoln", 2001, 65).into();
//!
//! catalog.add_units(Category::Coin, penny.clone(), 2).unwrap();
//! assert_eq!(catalog.sell_one(Category::Coin, &penny), Ok(true));
//! assert_eq!(catalog.count(&penny), 1);
//! ```

use crate::base::Category;
use crate::error::StoreError;
use crate::item::Item;
use crate::multiset::OrderedMultiset;
use std::fmt;

/// Result of buying one unit of an item into the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuyOutcome {
    /// `false` when the purchase created a new distinct record.
    pub already_present: bool,
}

/// Inventory of every category, indexed by [`Category`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogIndex {
    inventories: [OrderedMultiset<Item>; 3],
}

impl CatalogIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a category symbol (`M`, `C` or `S`).
    pub fn category_for(symbol: char) -> Result<Category, StoreError> {
        Category::from_symbol(symbol)
    }

    fn inventory_for(
        &mut self,
        category: Category,
        item: &Item,
    ) -> Result<&mut OrderedMultiset<Item>, StoreError> {
        if item.category() != category {
            return Err(StoreError::CategoryMismatch {
                expected: category,
                found: item.category(),
            });
        }
        Ok(&mut self.inventories[category.index()])
    }

    /// Adds `count` units of `item`.
    ///
    /// Returns `true` if the item was not stocked before.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidArgument`] if `count` is zero.
    /// - [`StoreError::CategoryMismatch`] if `item` is not of `category`.
    pub fn add_units(
        &mut self,
        category: Category,
        item: Item,
        count: u32,
    ) -> Result<bool, StoreError> {
        self.inventory_for(category, &item)?.insert_units(item, count)
    }

    /// Takes one unit of `item` out of stock.
    ///
    /// Returns `Ok(false)` when the item is not in stock.
    pub fn sell_one(&mut self, category: Category, item: &Item) -> Result<bool, StoreError> {
        Ok(self.inventory_for(category, item)?.remove(item))
    }

    /// Puts one unit of `item` into stock.
    pub fn buy_one(&mut self, category: Category, item: Item) -> Result<BuyOutcome, StoreError> {
        let inserted = self.inventory_for(category, &item)?.insert_units(item, 1)?;
        Ok(BuyOutcome {
            already_present: !inserted,
        })
    }

    pub fn items(&self, category: Category) -> &OrderedMultiset<Item> {
        &self.inventories[category.index()]
    }

    /// Units of `item` in stock.
    pub fn count(&self, item: &Item) -> u32 {
        self.items(item.category()).count(item)
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.items(item.category()).contains(item)
    }

    /// Categories with their inventories, in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &OrderedMultiset<Item>)> {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.items(category)))
    }

    pub fn is_empty(&self) -> bool {
        self.inventories.iter().all(OrderedMultiset::is_empty)
    }

    pub fn total_units(&self) -> u64 {
        self.inventories.iter().map(OrderedMultiset::total_units).sum()
    }
}

/// Every category in report order, one `<item>; Count: <n>` line per item.
impl fmt::Display for CatalogIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, inventory) in self.iter() {
            write!(f, "{inventory}")?;
        }
        Ok(())
    }
}
