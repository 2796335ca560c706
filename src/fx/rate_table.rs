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
use anyhow::{anyhow, bail, Error};
use std::collections::BTreeMap;

/// Exchange rates quoted against a single base currency, where each rate
/// reads as "1 unit of base = rate units of this currency".
///
/// The base always maps to exactly 1.0 and every rate is positive and
/// finite; construction fails otherwise, so lookups never have to worry
/// about dividing by zero.
#[derive(Clone, Debug)]
pub struct RateTable {
	base: String,
	rates: BTreeMap<String, f64>,
}

impl RateTable {
	pub fn new(
		base: &str,
		rates: BTreeMap<String, f64>,
	) -> Result<Self, Error> {
		match rates.get(base) {
			None => bail!("Base currency {} has no rate", base),
			Some(&rate) if rate != 1.0 => {
				bail!(
					"Base currency {} must have a rate of 1, not {}",
					base,
					rate
				)
			},
			Some(_) => {},
		}

		for (code, &rate) in &rates {
			Self::check_rate(code, rate)?;
		}

		Ok(Self {
			base: base.to_string(),
			rates,
		})
	}

	pub fn base(&self) -> &str {
		&self.base
	}

	/// Units of `code` bought by one unit of the base currency.
	pub fn rate(&self, code: &str) -> Result<f64, Error> {
		self.rates
			.get(code)
			.copied()
			.ok_or_else(|| anyhow!("No exchange rate for {}", code))
	}

	pub fn contains(&self, code: &str) -> bool {
		self.rates.contains_key(code)
	}

	/// Replaces the rate of a currency already present in the table. New
	/// currencies cannot be introduced this way, and the base stays at 1.
	pub fn override_rate(
		&mut self,
		code: &str,
		rate: f64,
	) -> Result<(), Error> {
		if !self.contains(code) {
			bail!("Cannot override rate of unsupported currency {}", code);
		}
		if code == self.base && rate != 1.0 {
			bail!("Base currency {} must keep a rate of 1", code);
		}
		Self::check_rate(code, rate)?;

		self.rates.insert(code.to_string(), rate);
		Ok(())
	}

	fn check_rate(code: &str, rate: f64) -> Result<(), Error> {
		if !rate.is_finite() || rate <= 0.0 {
			bail!("Rate for {} must be a positive number, got {}", code, rate);
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rates(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
		pairs.iter().map(|(c, r)| (c.to_string(), *r)).collect()
	}

	#[test]
	fn test_new_valid_table() {
		let table =
			RateTable::new("USD", rates(&[("USD", 1.0), ("EUR", 0.91)])).unwrap();
		assert_eq!(table.base(), "USD");
		assert_eq!(table.rate("USD").unwrap(), 1.0);
		assert_eq!(table.rate("EUR").unwrap(), 0.91);
	}

	#[test]
	fn test_new_rejects_missing_base() {
		assert!(RateTable::new("USD", rates(&[("EUR", 0.91)])).is_err());
	}

	#[test]
	fn test_new_rejects_base_not_one() {
		assert!(RateTable::new("USD", rates(&[("USD", 1.1)])).is_err());
	}

	#[test]
	fn test_new_rejects_bad_rates() {
		for bad in [0.0, -2.0, f64::NAN, f64::INFINITY] {
			let table = RateTable::new("USD", rates(&[("USD", 1.0), ("EUR", bad)]));
			assert!(table.is_err(), "rate {} was accepted", bad);
		}
	}

	#[test]
	fn test_rate_missing_code() {
		let table = RateTable::new("USD", rates(&[("USD", 1.0)])).unwrap();
		assert!(table.rate("XYZ").is_err());
		assert!(!table.contains("XYZ"));
	}

	#[test]
	fn test_override_rate() {
		let mut table =
			RateTable::new("USD", rates(&[("USD", 1.0), ("EUR", 0.91)])).unwrap();

		assert!(table.override_rate("EUR", 0.95).is_ok());
		assert_eq!(table.rate("EUR").unwrap(), 0.95);

		assert!(table.override_rate("GBP", 0.79).is_err());
		assert!(table.override_rate("EUR", 0.0).is_err());
		assert!(table.override_rate("USD", 2.0).is_err());
		assert!(table.override_rate("USD", 1.0).is_ok());
		assert_eq!(table.rate("EUR").unwrap(), 0.95);
	}
}
