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
use crate::fx::rate_table::RateTable;
use anyhow::{bail, Error};
use log::debug;

/// Outcome of converting an amount between two currencies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Converted {
	pub result: f64,

	/// Units of the target currency per unit of the source currency
	pub rate: f64,
}

/// Converts `amount` of `from` into `to` by way of the table's base
/// currency. Converting a currency into itself is exact and never consults
/// the table.
pub fn convert(
	rates: &RateTable,
	from: &str,
	to: &str,
	amount: f64,
) -> Result<Converted, Error> {
	if from == to {
		return Ok(Converted {
			result: amount,
			rate: 1.0,
		});
	}

	let from_rate = rates.rate(from)?;
	let to_rate = rates.rate(to)?;

	let amount_in_base = amount / from_rate;
	let converted = Converted {
		result: amount_in_base * to_rate,
		rate: to_rate / from_rate,
	};

	if !converted.result.is_finite() {
		bail!("conversion of {:e} {} to {} overflowed", amount, from, to);
	}

	debug!(
		"converted {} {} -> {} {} (via {} {})",
		amount,
		from,
		converted.result,
		to,
		amount_in_base,
		rates.base()
	);

	Ok(converted)
}
