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
use anyhow::Error;
use std::collections::{BTreeMap, HashMap};

pub const BASE_CURRENCY: &str = "USD";

/// (code, name, symbol, units per 1 USD)
const STANDARD_CURRENCIES: [(&str, &str, &str, f64); 7] = [
	("USD", "US Dollar", "$", 1.0),
	("EUR", "Euro", "€", 0.91),
	("GBP", "British Pound", "£", 0.79),
	("PKR", "Pakistani Rupee", "₨", 277.5),
	("INR", "Indian Rupee", "₹", 83.1),
	("JPY", "Japanese Yen", "¥", 147.2),
	("SAR", "Saudi Riyal", "﷼", 3.75),
];

/// Display metadata for one supported currency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyEntry {
	pub code: String,
	pub name: String,
	pub symbol: String,
}

impl CurrencyEntry {
	pub fn new(code: &str, name: &str, symbol: &str) -> Self {
		Self {
			code: code.to_string(),
			name: name.to_string(),
			symbol: symbol.to_string(),
		}
	}
}

/// The fixed set of currencies the converter knows about, plus their rates.
/// Built once at startup and only read afterwards.
#[derive(Debug)]
pub struct Registry {
	currencies: Vec<CurrencyEntry>, // display order
	symbols: HashMap<String, String>, // symbol -> code
	rates: RateTable,
}

impl Registry {
	pub fn standard() -> Result<Self, Error> {
		Self::with_rate_overrides(&BTreeMap::new())
	}

	/// Builds the standard registry, replacing the given rates first.
	pub fn with_rate_overrides(
		overrides: &BTreeMap<String, f64>,
	) -> Result<Self, Error> {
		let mut currencies = Vec::with_capacity(STANDARD_CURRENCIES.len());
		let mut symbols = HashMap::new();
		let mut rates = BTreeMap::new();

		for (code, name, symbol, rate) in STANDARD_CURRENCIES {
			currencies.push(CurrencyEntry::new(code, name, symbol));
			symbols.insert(symbol.to_string(), code.to_string());
			rates.insert(code.to_string(), rate);
		}

		let mut rates = RateTable::new(BASE_CURRENCY, rates)?;
		for (code, &rate) in overrides {
			rates.override_rate(&code.trim().to_uppercase(), rate)?;
		}

		Ok(Self {
			currencies,
			symbols,
			rates,
		})
	}

	pub fn currencies(&self) -> &[CurrencyEntry] {
		&self.currencies
	}

	pub fn get(&self, code: &str) -> Option<&CurrencyEntry> {
		self.currencies.iter().find(|c| c.code == code)
	}

	pub fn is_supported(&self, code: &str) -> bool {
		self.get(code).is_some()
	}

	/// Maps a symbol glyph such as "€" to its code.
	pub fn code_for_symbol(&self, symbol: &str) -> Option<&str> {
		self.symbols.get(symbol).map(|s| s.as_str())
	}

	pub fn rates(&self) -> &RateTable {
		&self.rates
	}
}
