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

//! Customers and their transaction history.
//!
//! # Example
//!
//! ```
//! use collectible_store::{Coin, Customer, CustomerId, TransactionKind};
//!
//! let customer = Customer::new(CustomerId::new(1).unwrap(), "Mickey Mouse").unwrap();
//! customer.record(TransactionKind::Buy, Coin::new("Lincoln", 2001, 65).into());
//! assert_eq!(customer.transaction_count(), 1);
//! ```

use crate::base::CustomerId;
use crate::error::RecordError;
use crate::item::Item;
use parking_lot::Mutex;
use std::cmp::Ordering;
use std::fmt;

/// Direction of a transaction, seen from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    /// The store bought the item from the customer.
    Buy,
    /// The store sold the item to the customer.
    Sell,
}

impl TransactionKind {
    pub fn symbol(self) -> char {
        match self {
            TransactionKind::Buy => 'B',
            TransactionKind::Sell => 'S',
        }
    }
}

/// One entry of a customer's history.
///
/// Owns its own copy of the item, so the record stays valid after the
/// catalog entry is gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionKind,
    item: Item,
}

impl Transaction {
    pub fn new(kind: TransactionKind, item: Item) -> Self {
        Self { kind, item }
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn item(&self) -> &Item {
        &self.item
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.symbol(), self.item)
    }
}

/// A store customer.
///
/// Customers are ordered, and compared, by name alone. The history sits
/// behind a lock so that a customer shared between the ledger's indexes can
/// still be appended to.
#[derive(Debug)]
pub struct Customer {
    id: CustomerId,
    name: String,
    /// Append-only, in chronological order.
    transactions: Mutex<Vec<Transaction>>,
}

impl Customer {
    /// Creates a customer with an empty history.
    ///
    /// # Errors
    ///
    /// [`RecordError::InvalidCustomerName`] if `name` is empty or contains
    /// anything other than letters and spaces.
    pub fn new(id: CustomerId, name: impl Into<String>) -> Result<Self, RecordError> {
        let name = name.into();
        let valid = !name.trim().is_empty()
            && name.chars().all(|c| c.is_alphabetic() || c == ' ');
        if !valid {
            return Err(RecordError::InvalidCustomerName(name));
        }
        Ok(Self {
            id,
            name,
            transactions: Mutex::new(Vec::new()),
        })
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a transaction to the end of the history.
    pub fn record(&self, kind: TransactionKind, item: Item) {
        self.transactions.lock().push(Transaction::new(kind, item));
    }

    /// Snapshot of the history in chronological order.
    pub fn transactions(&self) -> Vec<Transaction> {
        self.transactions.lock().clone()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.lock().len()
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Customer {}

impl PartialOrd for Customer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Customer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

/// Header, history (or `none`), then a blank line.
impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer: {}, {}", self.id, self.name)?;
        writeln!(f, "Transactions:")?;
        let transactions = self.transactions.lock();
        if transactions.is_empty() {
            writeln!(f, "none")?;
        }
        for transaction in transactions.iter() {
            writeln!(f, "{transaction}")?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Coin, Comic};

    fn id(raw: u16) -> CustomerId {
        CustomerId::new(raw).unwrap()
    }

    #[test]
    fn name_allows_letters_and_spaces() {
        assert!(Customer::new(id(1), "Mickey Mouse").is_ok());
        assert!(Customer::new(id(1), "Zoë").is_ok());
    }

    #[test]
    fn name_rejects_digits_punctuation_and_blank() {
        for name in ["R2D2", "O'Hara", "", "   "] {
            assert_eq!(
                Customer::new(id(1), name).err(),
                Some(RecordError::InvalidCustomerName(name.to_string()))
            );
        }
    }

    #[test]
    fn customers_compare_by_name_only() {
        let a = Customer::new(id(1), "Donald Duck").unwrap();
        let b = Customer::new(id(2), "Donald Duck").unwrap();
        let c = Customer::new(id(3), "Daisy Duck").unwrap();
        assert_eq!(a, b);
        assert!(c < a);
    }

    #[test]
    fn history_is_kept_in_append_order() {
        let customer = Customer::new(id(5), "Goofy").unwrap();
        let coin: Item = Coin::new("Lincoln", 2001, 65).into();
        let comic: Item = Comic::new("DC", "Superman", 1938, "Mint").into();

        customer.record(TransactionKind::Sell, coin.clone());
        customer.record(TransactionKind::Buy, comic.clone());

        assert_eq!(
            customer.transactions(),
            vec![
                Transaction::new(TransactionKind::Sell, coin),
                Transaction::new(TransactionKind::Buy, comic),
            ]
        );
    }

    #[test]
    fn display_without_transactions_prints_none() {
        let customer = Customer::new(id(2), "Minnie Mouse").unwrap();
        assert_eq!(
            customer.to_string(),
            "Customer: 002, Minnie Mouse\nTransactions:\nnone\n\n"
        );
    }

    #[test]
    fn display_lists_transactions() {
        let customer = Customer::new(id(1), "Mickey Mouse").unwrap();
        customer.record(TransactionKind::Buy, Coin::new("Lincoln", 2001, 65).into());
        assert_eq!(
            customer.to_string(),
            "Customer: 001, Mickey Mouse\nTransactions:\nB: Lincoln, 2001, 65\n\n"
        );
    }
}
