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
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	/// Replacement rates, in units per 1 unit of the base currency, keyed by
	/// currency code. Only currencies already supported may appear here.
	pub rates: Option<BTreeMap<String, f64>>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_empty_config() {
		let config: Config = toml::from_str("").unwrap();
		assert!(config.rates.is_none());
	}

	#[test]
	fn test_parse_rates() {
		let config: Config =
			toml::from_str("[rates]\nEUR = 0.92\nJPY = 150\n").unwrap();
		let rates = config.rates.unwrap();
		assert_eq!(rates.get("EUR"), Some(&0.92));
		assert_eq!(rates.get("JPY"), Some(&150.0));
	}

	#[test]
	fn test_reject_non_numeric_rate() {
		assert!(toml::from_str::<Config>("[rates]\nEUR = \"high\"\n").is_err());
	}
}
