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
use crate::fx::registry::Registry;
use crate::session::history::{ConversionRecord, History};
use crate::util::amount::Amount;
use anyhow::Error;
use std::io::Write;

/// Writes the interactive session's screens: the currency list shown before
/// each conversion, the result of a conversion, and the recent history.
pub struct ConversionReporter<'a> {
	registry: &'a Registry,
}

impl<'a> ConversionReporter<'a> {
	pub fn new(registry: &'a Registry) -> ConversionReporter<'a> {
		Self { registry }
	}

	pub fn write_welcome<W: Write>(&self, out: &mut W) -> Result<(), Error> {
		writeln!(out)?;
		writeln!(out, "Welcome to the Currency Converter")?;
		writeln!(
			out,
			"You can convert between the following currencies (or type 'exit' anytime):"
		)?;
		writeln!(out)?;

		for entry in self.registry.currencies() {
			writeln!(
				out,
				" {} - {} ({})",
				entry.code, entry.name, entry.symbol
			)?;
		}

		Ok(())
	}

	/// Two lines of amounts followed by the rate applied, to 4 places.
	pub fn write_result<W: Write>(
		&self,
		out: &mut W,
		record: &ConversionRecord,
		rate: f64,
	) -> Result<(), Error> {
		writeln!(out)?;
		writeln!(out, "Conversion Result:")?;
		writeln!(
			out,
			" {} {}",
			Amount::new(record.amount, &record.from),
			self.describe(&record.from)
		)?;
		writeln!(
			out,
			"   = {} {}",
			Amount::new(record.result, &record.to),
			self.describe(&record.to)
		)?;
		writeln!(
			out,
			" Exchange Rate: 1 {} = {:.4} {}",
			record.from, rate, record.to
		)?;
		writeln!(out)?;

		Ok(())
	}

	/// Nothing is written for an empty history.
	pub fn write_history<W: Write>(
		&self,
		out: &mut W,
		history: &History,
	) -> Result<(), Error> {
		if history.is_empty() {
			return Ok(());
		}

		writeln!(out, "Recent Conversions:")?;
		for record in history.iter() {
			writeln!(out, " - {}", record)?;
		}
		writeln!(out)?;

		Ok(())
	}

	fn describe(&self, code: &str) -> String {
		match self.registry.get(code) {
			Some(entry) => format!("({}, {})", entry.name, entry.symbol),
			None => String::new(),
		}
	}
}
