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

//! Loaders for the three input streams.
//!
//! All streams are comma separated, have no header row, and have the
//! whitespace around each field trimmed. A line that fails validation, or is
//! rejected by the store, is logged and skipped; only an I/O failure stops a
//! load.
//!
//! # Formats
//!
//! ```text
//! customers:  001, Mickey Mouse
//! inventory:  M, 3, 2001, 65, Lincoln
//!             C, 1, 1938, Mint, Superman, DC
//!             S, 2, 1989, Near Mint, Ken Griffey Jr, Upper Deck
//! commands:   S, 001, M, 2001, 65, Lincoln
//!             B, 002, C, 1938, Mint, Superman, DC
//!             C, 001
//!             H
//!             D
//! ```

use crate::base::CustomerId;
use crate::command::{Command, parse_category};
use crate::customer::Customer;
use crate::engine::{Outcome, Store};
use crate::error::{LineError, RecordError};
use crate::item::{Item, ValidationContext, parse_positive};
use csv::{Position, ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use std::io::{self, Read, Write};
use tracing::{debug, warn};

/// Line counts of a finished load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub applied: usize,
    pub rejected: usize,
}

/// Raw customer record.
///
/// Fields: `id, name`
#[derive(Debug, Deserialize)]
struct CustomerRecord {
    id: String,
    name: String,
}

impl CustomerRecord {
    const FIELDS: usize = 2;

    fn into_customer(self) -> Result<Customer, RecordError> {
        let id: CustomerId = self.id.parse()?;
        Customer::new(id, self.name)
    }
}

/// Registers every valid customer record.
///
/// # Errors
///
/// Returns a CSV error if the reader fails. Invalid records are skipped.
pub fn load_customers<R: Read>(store: &mut Store, reader: R) -> Result<LoadSummary, csv::Error> {
    apply_records(
        reader,
        "customers",
        |record| {
            if record.len() != CustomerRecord::FIELDS {
                return Err(RecordError::FieldCount {
                    expected: CustomerRecord::FIELDS,
                    found: record.len(),
                }
                .into());
            }
            let customer = record
                .deserialize::<CustomerRecord>(None)
                .map_err(|_| RecordError::MissingField("customer name"))?
                .into_customer()?;
            store.add_customer(customer)?;
            Ok(())
        },
        |()| Ok(()),
    )
}

/// Stocks every valid inventory record.
///
/// A record is `symbol, count, <item fields>`; the count must be at least 1.
///
/// # Errors
///
/// Returns a CSV error if the reader fails. Invalid records are skipped.
pub fn load_inventory<R: Read>(
    store: &mut Store,
    reader: R,
    context: &ValidationContext,
) -> Result<LoadSummary, csv::Error> {
    apply_records(
        reader,
        "inventory",
        |record| {
            let fields: Vec<&str> = record.iter().collect();
            let (symbol, count, item_fields) = match fields.as_slice() {
                [symbol, count, rest @ ..] => (*symbol, *count, rest),
                [_] => return Err(RecordError::MissingField("item count").into()),
                [] => return Err(RecordError::MissingField("category symbol").into()),
            };
            let category = parse_category(symbol)?;
            let count =
                parse_positive(count).ok_or_else(|| RecordError::InvalidCount(count.to_string()))?;
            let item = Item::parse(category, item_fields, context)?;
            store.add_inventory(category, item, count)?;
            Ok(())
        },
        |()| Ok(()),
    )
}

/// Replays every valid command, writing the reports it produces to `out`.
///
/// # Errors
///
/// Returns a CSV error if the reader fails or `out` cannot be written.
/// Invalid and rejected commands are skipped.
pub fn replay_commands<R: Read, W: Write>(
    store: &mut Store,
    reader: R,
    context: &ValidationContext,
    mut out: W,
) -> Result<LoadSummary, csv::Error> {
    let summary = apply_records(
        reader,
        "commands",
        |record| {
            let fields: Vec<&str> = record.iter().collect();
            let command = Command::parse(&fields, context)?;
            Ok(store.execute(command)?)
        },
        |outcome: Outcome| match outcome {
            Outcome::Report(text) => out.write_all(text.as_bytes()),
            Outcome::Sold | Outcome::Bought { .. } => Ok(()),
        },
    )?;
    out.flush()?;
    Ok(summary)
}

/// Streams `reader` record by record through `apply`, handing each success
/// to `emit`.
///
/// Malformed rows and records `apply` rejects are logged and counted; I/O
/// errors from either side abort the load.
fn apply_records<R, T, F, E>(
    reader: R,
    source: &'static str,
    mut apply: F,
    mut emit: E,
) -> Result<LoadSummary, csv::Error>
where
    R: Read,
    F: FnMut(&StringRecord) -> Result<T, LineError>,
    E: FnMut(T) -> io::Result<()>,
{
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .has_headers(false)
        .from_reader(reader);

    let mut summary = LoadSummary::default();
    for result in rdr.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e),
            Err(e) => {
                let line = e.position().map_or(0, Position::line);
                warn!(source, line, error = %e, "skipping malformed row");
                summary.rejected += 1;
                continue;
            }
        };

        let line = record.position().map_or(0, Position::line);
        match apply(&record) {
            Ok(value) => {
                emit(value)?;
                summary.applied += 1;
            }
            Err(e) => {
                warn!(source, line, error = %e, "skipping record");
                summary.rejected += 1;
            }
        }
    }

    debug!(source, applied = summary.applied, rejected = summary.rejected, "load finished");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Category;
    use crate::item::{Coin, Comic, SportsCard};
    use std::io::Cursor;

    const CONTEXT: ValidationContext = ValidationContext::new(2020);

    fn id(raw: u16) -> CustomerId {
        CustomerId::new(raw).unwrap()
    }

    #[test]
    fn load_customers_skips_invalid_records() {
        let csv = "001, Mickey Mouse\n\
                   1000, Too Big\n\
                   002, R2D2\n\
                   003\n\
                   004, Goofy\n";
        let mut store = Store::new();

        let summary = load_customers(&mut store, Cursor::new(csv)).unwrap();

        assert_eq!(
            summary,
            LoadSummary {
                applied: 2,
                rejected: 3
            }
        );
        assert_eq!(store.ledger().find(id(1)).unwrap().name(), "Mickey Mouse");
        assert_eq!(store.ledger().find(id(4)).unwrap().name(), "Goofy");
        assert!(store.ledger().find(id(2)).is_none());
    }

    #[test]
    fn load_customers_rejects_duplicate_id() {
        let csv = "001, Mickey Mouse\n001, Minnie Mouse\n";
        let mut store = Store::new();

        let summary = load_customers(&mut store, Cursor::new(csv)).unwrap();

        assert_eq!(summary.rejected, 1);
        assert_eq!(store.ledger().find(id(1)).unwrap().name(), "Mickey Mouse");
    }

    #[test]
    fn load_inventory_of_every_kind() {
        let csv = "M, 3, 2001, 65, Lincoln\n\
                   C, 1, 1938, Mint, Superman, DC\n\
                   S, 2, 1989, Near Mint, Ken Griffey Jr, Upper Deck\n";
        let mut store = Store::new();

        let summary = load_inventory(&mut store, Cursor::new(csv), &CONTEXT).unwrap();

        assert_eq!(summary.applied, 3);
        let catalog = store.catalog();
        assert_eq!(catalog.count(&Coin::new("Lincoln", 2001, 65).into()), 3);
        assert_eq!(catalog.count(&Comic::new("DC", "Superman", 1938, "Mint").into()), 1);
        assert_eq!(
            catalog.count(&SportsCard::new("Ken Griffey Jr", 1989, "Upper Deck", "Near Mint").into()),
            2
        );
    }

    #[test]
    fn load_inventory_skips_bad_count_and_fields() {
        let csv = "M, 0, 2001, 65, Lincoln\n\
                   M, -1, 2001, 65, Lincoln\n\
                   X, 1, 2001, 65, Lincoln\n\
                   M, 1, 2001, 65\n\
                   M, 1, 3001, 65, Lincoln\n\
                   M\n\
                   M, 2, 2001, 65, Lincoln\n";
        let mut store = Store::new();

        let summary = load_inventory(&mut store, Cursor::new(csv), &CONTEXT).unwrap();

        assert_eq!(
            summary,
            LoadSummary {
                applied: 1,
                rejected: 6
            }
        );
        assert_eq!(store.catalog().items(Category::Coin).total_units(), 2);
    }

    #[test]
    fn replay_writes_reports_and_skips_rejected_commands() {
        let mut store = Store::new();
        load_customers(&mut store, Cursor::new("001, Mickey Mouse\n")).unwrap();
        load_inventory(&mut store, Cursor::new("M, 1, 2001, 65, Lincoln\n"), &CONTEXT).unwrap();

        let commands = "S, 001, M, 2001, 65, Lincoln\n\
                        S, 001, M, 2001, 65, Lincoln\n\
                        B, 999, M, 2001, 65, Lincoln\n\
                        Q\n\
                        C, 001\n\
                        D\n";
        let mut out = Vec::new();
        let summary = replay_commands(&mut store, Cursor::new(commands), &CONTEXT, &mut out).unwrap();

        assert_eq!(
            summary,
            LoadSummary {
                applied: 3,
                rejected: 3
            }
        );
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Customer: 001, Mickey Mouse\n\
             Transactions:\n\
             S: Lincoln, 2001, 65\n\
             \n\
             Inventory:\n\
             \n"
        );
    }

    #[test]
    fn blank_lines_are_ignored() {
        let mut store = Store::new();
        let summary = load_customers(&mut store, Cursor::new("\n001, Mickey Mouse\n\n")).unwrap();
        assert_eq!(
            summary,
            LoadSummary {
                applied: 1,
                rejected: 0
            }
        );
    }
}
