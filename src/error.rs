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

//! Error types for record validation and store operations.

use crate::base::{Category, CustomerId};
use crate::item::Item;
use thiserror::Error;

/// Errors raised by the catalog, the customer ledger and the command engine.
///
/// A missing item or customer inside the data structures is reported as a
/// plain `bool`/`Option`; these variants are for the layer above that turns
/// such results into rejected commands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A caller precondition was violated
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// An occurrence count would exceed `u32::MAX`
    #[error("occurrence count overflow")]
    CountOverflow,

    /// Category symbol is not one of the known kinds
    #[error("unknown category symbol '{0}'")]
    UnknownCategory(char),

    /// Item was routed to the multiset of another category
    #[error("{found} item routed to the {expected} inventory")]
    CategoryMismatch { expected: Category, found: Category },

    /// Referenced customer ID was never loaded
    #[error("customer {0} not found")]
    UnknownCustomer(CustomerId),

    /// Customer ID is already taken
    #[error("duplicate customer ID {0}")]
    DuplicateCustomer(CustomerId),

    /// Sell of an item that is not in the inventory
    #[error("item not in stock: {0}")]
    ItemNotInStock(Item),
}

/// Validation errors for a single input record.
///
/// The offending record is skipped; processing continues with the next one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("invalid customer ID '{0}' (expected 0-999)")]
    InvalidCustomerId(String),

    #[error("invalid customer name '{0}' (letters and spaces only)")]
    InvalidCustomerName(String),

    #[error("invalid year '{0}'")]
    InvalidYear(String),

    #[error("invalid grade '{0}'")]
    InvalidGrade(String),

    /// Inventory count is not a positive integer
    #[error("invalid item count '{0}'")]
    InvalidCount(String),

    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("field {0} is empty")]
    EmptyField(usize),

    #[error("unknown category symbol '{0}'")]
    UnknownCategory(String),

    #[error("unknown command symbol '{0}'")]
    UnknownCommand(String),

    #[error("missing {0}")]
    MissingField(&'static str),
}

/// Why a single input line was skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Coin;

    #[test]
    fn store_error_display_messages() {
        let id = CustomerId::new(999).unwrap();
        assert_eq!(
            StoreError::InvalidArgument("units must be at least 1").to_string(),
            "invalid argument: units must be at least 1"
        );
        assert_eq!(StoreError::CountOverflow.to_string(), "occurrence count overflow");
        assert_eq!(
            StoreError::UnknownCategory('Z').to_string(),
            "unknown category symbol 'Z'"
        );
        assert_eq!(
            StoreError::CategoryMismatch {
                expected: Category::Coin,
                found: Category::Comic,
            }
            .to_string(),
            "comic item routed to the coin inventory"
        );
        assert_eq!(StoreError::UnknownCustomer(id).to_string(), "customer 999 not found");
        assert_eq!(StoreError::DuplicateCustomer(id).to_string(), "duplicate customer ID 999");

        let coin = Item::Coin(Coin::new("Lincoln", 2001, 65));
        assert_eq!(
            StoreError::ItemNotInStock(coin).to_string(),
            "item not in stock: Lincoln, 2001, 65"
        );
    }

    #[test]
    fn record_error_display_messages() {
        assert_eq!(
            RecordError::InvalidCustomerId("1000".into()).to_string(),
            "invalid customer ID '1000' (expected 0-999)"
        );
        assert_eq!(
            RecordError::InvalidCustomerName("R2D2".into()).to_string(),
            "invalid customer name 'R2D2' (letters and spaces only)"
        );
        assert_eq!(RecordError::InvalidYear("3000".into()).to_string(), "invalid year '3000'");
        assert_eq!(RecordError::InvalidGrade("x".into()).to_string(), "invalid grade 'x'");
        assert_eq!(RecordError::InvalidCount("0".into()).to_string(), "invalid item count '0'");
        assert_eq!(
            RecordError::FieldCount {
                expected: 3,
                found: 2
            }
            .to_string(),
            "expected 3 fields, found 2"
        );
        assert_eq!(RecordError::EmptyField(1).to_string(), "field 1 is empty");
        assert_eq!(
            RecordError::UnknownCategory("Q".into()).to_string(),
            "unknown category symbol 'Q'"
        );
        assert_eq!(
            RecordError::UnknownCommand("X".into()).to_string(),
            "unknown command symbol 'X'"
        );
        assert_eq!(RecordError::MissingField("customer ID").to_string(), "missing customer ID");
    }

    #[test]
    fn line_error_is_transparent() {
        let error: LineError = RecordError::EmptyField(2).into();
        assert_eq!(error.to_string(), "field 2 is empty");
        let error: LineError = StoreError::CountOverflow.into();
        assert_eq!(error.to_string(), "occurrence count overflow");
    }

    #[test]
    fn errors_are_cloneable() {
        let error = StoreError::CountOverflow;
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }
}
