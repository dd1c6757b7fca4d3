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

//! Text reports printed by the display commands.

use crate::catalog::CatalogIndex;
use crate::ledger::CustomerLedger;
use std::fmt;

/// Stock of every category, followed by a blank line.
pub struct InventoryReport<'a>(pub &'a CatalogIndex);

impl fmt::Display for InventoryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Inventory:")?;
        write!(f, "{}", self.0)?;
        writeln!(f)
    }
}

/// History of every customer in name order.
pub struct HistoryReport<'a>(pub &'a CustomerLedger);

impl fmt::Display for HistoryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transaction History:")?;
        for customer in self.0.iter() {
            write!(f, "{customer}")?;
        }
        Ok(())
    }
}
