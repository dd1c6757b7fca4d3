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

//! Collectible item records.
//!
//! Each kind derives its ordering from field declaration order, which is the
//! order items of that kind are sorted in the inventory:
//!
//! | Kind | Sort order |
//! |------|------------|
//! | [`Coin`] | type, year, grade |
//! | [`Comic`] | publisher, title, year, grade |
//! | [`SportsCard`] | player, year, manufacturer, grade |
//!
//! Item fields arrive as `year, grade, <kind fields…>` and are validated
//! against a [`ValidationContext`].

use crate::base::Category;
use crate::error::RecordError;
use chrono::Datelike;
use std::fmt;

/// Settings used while validating item records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationContext {
    current_year: u16,
}

impl ValidationContext {
    pub const fn new(current_year: u16) -> Self {
        Self { current_year }
    }

    /// Context for the current local calendar year.
    pub fn from_clock() -> Self {
        let year = chrono::Local::now().year();
        Self::new(u16::try_from(year).unwrap_or(u16::MAX))
    }

    pub fn current_year(&self) -> u16 {
        self.current_year
    }

    /// Parses a year in `1..=current_year`.
    fn year(&self, raw: &str) -> Result<u16, RecordError> {
        parse_positive(raw)
            .and_then(|year| u16::try_from(year).ok())
            .filter(|year| *year <= self.current_year)
            .ok_or_else(|| RecordError::InvalidYear(raw.to_string()))
    }
}

/// Parses a string of ASCII digits holding a value of at least 1.
pub(crate) fn parse_positive(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>().ok().filter(|value| *value >= 1)
}

fn check_fields(fields: &[&str], expected: usize) -> Result<(), RecordError> {
    if fields.len() != expected {
        return Err(RecordError::FieldCount {
            expected,
            found: fields.len(),
        });
    }
    match fields.iter().position(|field| field.is_empty()) {
        Some(index) => Err(RecordError::EmptyField(index)),
        None => Ok(()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coin {
    coin_type: String,
    year: u16,
    grade: u32,
}

impl Coin {
    const FIELDS: usize = 3;

    pub fn new(coin_type: impl Into<String>, year: u16, grade: u32) -> Self {
        Self {
            coin_type: coin_type.into(),
            year,
            grade,
        }
    }

    /// Parses `year, grade, type`. The grade must be a positive integer.
    pub fn parse(fields: &[&str], context: &ValidationContext) -> Result<Self, RecordError> {
        check_fields(fields, Self::FIELDS)?;
        let year = context.year(fields[0])?;
        let grade =
            parse_positive(fields[1]).ok_or_else(|| RecordError::InvalidGrade(fields[1].to_string()))?;
        Ok(Self::new(fields[2], year, grade))
    }

    pub fn coin_type(&self) -> &str {
        &self.coin_type
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn grade(&self) -> u32 {
        self.grade
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.coin_type, self.year, self.grade)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Comic {
    publisher: String,
    title: String,
    year: u16,
    grade: String,
}

impl Comic {
    const FIELDS: usize = 4;

    pub fn new(
        publisher: impl Into<String>,
        title: impl Into<String>,
        year: u16,
        grade: impl Into<String>,
    ) -> Self {
        Self {
            publisher: publisher.into(),
            title: title.into(),
            year,
            grade: grade.into(),
        }
    }

    /// Parses `year, grade, title, publisher`.
    pub fn parse(fields: &[&str], context: &ValidationContext) -> Result<Self, RecordError> {
        check_fields(fields, Self::FIELDS)?;
        let year = context.year(fields[0])?;
        Ok(Self::new(fields[3], fields[2], year, fields[1]))
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }
}

impl fmt::Display for Comic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.publisher, self.title, self.year, self.grade
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SportsCard {
    player: String,
    year: u16,
    manufacturer: String,
    grade: String,
}

impl SportsCard {
    const FIELDS: usize = 4;

    pub fn new(
        player: impl Into<String>,
        year: u16,
        manufacturer: impl Into<String>,
        grade: impl Into<String>,
    ) -> Self {
        Self {
            player: player.into(),
            year,
            manufacturer: manufacturer.into(),
            grade: grade.into(),
        }
    }

    /// Parses `year, grade, player, manufacturer`.
    pub fn parse(fields: &[&str], context: &ValidationContext) -> Result<Self, RecordError> {
        check_fields(fields, Self::FIELDS)?;
        let year = context.year(fields[0])?;
        Ok(Self::new(fields[2], year, fields[3], fields[1]))
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }
}

impl fmt::Display for SportsCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.player, self.year, self.manufacturer, self.grade
        )
    }
}

/// A collectible of any kind.
///
/// Items of different kinds are never stored in the same multiset; the
/// derived ordering ranks by kind first only so that `Ord` stays total.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Item {
    Coin(Coin),
    Comic(Comic),
    SportsCard(SportsCard),
}

impl Item {
    /// Parses the kind-specific fields of an item of the given category.
    pub fn parse(
        category: Category,
        fields: &[&str],
        context: &ValidationContext,
    ) -> Result<Self, RecordError> {
        match category {
            Category::Coin => Coin::parse(fields, context).map(Item::Coin),
            Category::Comic => Comic::parse(fields, context).map(Item::Comic),
            Category::SportsCard => SportsCard::parse(fields, context).map(Item::SportsCard),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Item::Coin(_) => Category::Coin,
            Item::Comic(_) => Category::Comic,
            Item::SportsCard(_) => Category::SportsCard,
        }
    }
}

impl From<Coin> for Item {
    fn from(coin: Coin) -> Self {
        Item::Coin(coin)
    }
}

impl From<Comic> for Item {
    fn from(comic: Comic) -> Self {
        Item::Comic(comic)
    }
}

impl From<SportsCard> for Item {
    fn from(card: SportsCard) -> Self {
        Item::SportsCard(card)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Item::Coin(coin) => fmt::Display::fmt(coin, f),
            Item::Comic(comic) => fmt::Display::fmt(comic, f),
            Item::SportsCard(card) => fmt::Display::fmt(card, f),
        }
    }
}
