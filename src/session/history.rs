/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::util::amount::Amount;
use std::collections::VecDeque;
use std::fmt;

/// A completed conversion, kept for the "recent conversions" listing.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionRecord {
	pub amount: f64,
	pub from: String,
	pub to: String,
	pub result: f64,
}

impl ConversionRecord {
	pub fn new(amount: f64, from: &str, to: &str, result: f64) -> Self {
		Self {
			amount,
			from: from.to_string(),
			to: to.to_string(),
			result,
		}
	}
}

impl fmt::Display for ConversionRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} → {}",
			Amount::new(self.amount, &self.from),
			Amount::new(self.result, &self.to)
		)
	}
}

/// The most recent conversions of this run, oldest first. Once full, each
/// new record pushes out the oldest one.
#[derive(Debug)]
pub struct History {
	records: VecDeque<ConversionRecord>,
}

impl History {
	pub const CAPACITY: usize = 5;

	pub fn new() -> Self {
		Self {
			records: VecDeque::with_capacity(History::CAPACITY + 1),
		}
	}

	pub fn push(&mut self, record: ConversionRecord) {
		self.records.push_back(record);
		while self.records.len() > History::CAPACITY {
			self.records.pop_front();
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = &ConversionRecord> {
		self.records.iter()
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

impl Default for History {
	fn default() -> Self {
		Self::new()
	}
}
