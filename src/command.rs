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

//! Commands replayed against the store.
//!
//! A command record starts with a one-letter symbol:
//!
//! | Symbol | Command | Remaining fields |
//! |--------|---------|------------------|
//! | `S` | [`Command::Sell`] | customer ID, category symbol, item fields |
//! | `B` | [`Command::Buy`] | customer ID, category symbol, item fields |
//! | `C` | [`Command::ShowCustomer`] | customer ID |
//! | `H` | [`Command::ShowHistory`] | none |
//! | `D` | [`Command::ShowInventory`] | none |

use crate::base::{Category, CustomerId};
use crate::error::RecordError;
use crate::item::{Item, ValidationContext};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The store sells one unit of `item` to `customer`.
    Sell {
        customer: CustomerId,
        category: Category,
        item: Item,
    },
    /// The store buys one unit of `item` from `customer`.
    Buy {
        customer: CustomerId,
        category: Category,
        item: Item,
    },
    ShowCustomer {
        customer: CustomerId,
    },
    ShowHistory,
    ShowInventory,
}

impl Command {
    /// Parses a command record already split into trimmed fields.
    ///
    /// # Errors
    ///
    /// Any [`RecordError`] describing the first invalid field.
    pub fn parse(fields: &[&str], context: &ValidationContext) -> Result<Self, RecordError> {
        let (&symbol, rest) = fields
            .split_first()
            .ok_or(RecordError::MissingField("command symbol"))?;

        match symbol {
            "S" | "B" => {
                let (customer, rest) = customer_field(rest)?;
                let (&category, item_fields) = rest
                    .split_first()
                    .ok_or(RecordError::MissingField("category symbol"))?;
                let category = parse_category(category)?;
                let item = Item::parse(category, item_fields, context)?;
                Ok(if symbol == "S" {
                    Command::Sell {
                        customer,
                        category,
                        item,
                    }
                } else {
                    Command::Buy {
                        customer,
                        category,
                        item,
                    }
                })
            }
            "C" => {
                let (customer, _) = customer_field(rest)?;
                Ok(Command::ShowCustomer { customer })
            }
            "H" => Ok(Command::ShowHistory),
            "D" => Ok(Command::ShowInventory),
            other => Err(RecordError::UnknownCommand(other.to_string())),
        }
    }

    /// Customer the command refers to, if any.
    pub fn customer(&self) -> Option<CustomerId> {
        match self {
            Self::Sell { customer, .. } => Some(*customer),
            Self::Buy { customer, .. } => Some(*customer),
            Self::ShowCustomer { customer } => Some(*customer),
            Self::ShowHistory | Self::ShowInventory => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Sell { .. } => 'S',
            Self::Buy { .. } => 'B',
            Self::ShowCustomer { .. } => 'C',
            Self::ShowHistory => 'H',
            Self::ShowInventory => 'D',
        }
    }
}

fn customer_field<'a, 'b>(
    fields: &'a [&'b str],
) -> Result<(CustomerId, &'a [&'b str]), RecordError> {
    let (&raw, rest) = fields
        .split_first()
        .ok_or(RecordError::MissingField("customer ID"))?;
    Ok((raw.parse()?, rest))
}

/// Parses a one-letter category symbol.
pub(crate) fn parse_category(raw: &str) -> Result<Category, RecordError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => {
            Category::from_symbol(symbol).map_err(|_| RecordError::UnknownCategory(raw.to_string()))
        }
        _ => Err(RecordError::UnknownCategory(raw.to_string())),
    }
}
