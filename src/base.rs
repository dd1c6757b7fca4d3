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

//! Core identifier types for customers and item categories.

use crate::error::{RecordError, StoreError};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a customer.
///
/// Valid IDs are `0..=999` and are displayed as three digits (`007`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomerId(u16);

impl CustomerId {
    /// Exclusive upper bound of the ID space.
    pub const LIMIT: u16 = 1000;

    pub fn new(id: u16) -> Result<Self, RecordError> {
        if id < Self::LIMIT {
            Ok(Self(id))
        } else {
            Err(RecordError::InvalidCustomerId(id.to_string()))
        }
    }

    pub fn get(self) -> u16 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl FromStr for CustomerId {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RecordError::InvalidCustomerId(s.to_string()));
        }
        trimmed
            .parse::<u16>()
            .ok()
            .filter(|id| *id < Self::LIMIT)
            .map(Self)
            .ok_or_else(|| RecordError::InvalidCustomerId(s.to_string()))
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

/// Collectible kinds carried by the store, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Coin,
    Comic,
    SportsCard,
}

impl Category {
    /// All categories in canonical report order.
    pub const ALL: [Category; 3] = [Category::Coin, Category::Comic, Category::SportsCard];

    pub fn from_symbol(symbol: char) -> Result<Self, StoreError> {
        match symbol {
            'M' => Ok(Category::Coin),
            'C' => Ok(Category::Comic),
            'S' => Ok(Category::SportsCard),
            other => Err(StoreError::UnknownCategory(other)),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Category::Coin => 'M',
            Category::Comic => 'C',
            Category::SportsCard => 'S',
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Coin => "coin",
            Category::Comic => "comic",
            Category::SportsCard => "sports card",
        };
        f.write_str(name)
    }
}
