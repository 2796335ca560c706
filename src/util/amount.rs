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
use std::fmt;

/// A floating point value with a currency code.
#[derive(Clone, Debug, PartialEq)]
pub struct Amount {
	pub currency: String,
	pub value: f64,
}

impl Amount {
	/// Decimal places used when the formatter does not ask for any.
	pub const DEFAULT_PRECISION: usize = 2;

	pub fn new(value: f64, currency: &str) -> Self {
		Self {
			value,
			currency: currency.to_string(),
		}
	}
}

impl fmt::Display for Amount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let precision = f.precision().unwrap_or(Amount::DEFAULT_PRECISION);
		write!(f, "{} {}", group_thousands(self.value, precision), self.currency)
	}
}

/// Renders a number at a fixed precision with commas between each group of
/// three integer digits, e.g. 1234567.891 at precision 2 is "1,234,567.89".
pub fn group_thousands(value: f64, precision: usize) -> String {
	let rendered = format!("{:.*}", precision, value.abs());

	let (int_part, fraction) = match rendered.split_once('.') {
		Some((i, frac)) => (i.to_string(), Some(frac)),
		None => (rendered.clone(), None),
	};

	let mut int_str = int_part;
	let mut i = int_str.len() as isize - 3;
	while i > 0 {
		int_str.insert(i as usize, ',');
		i -= 3;
	}

	let formatted = match fraction {
		Some(frac) => format!("{}.{}", int_str, frac),
		None => int_str,
	};

	// rounding can turn a tiny negative into zero, which should not print
	// with a sign
	let is_zero = rendered.chars().all(|c| c == '0' || c == '.');
	if value.is_sign_negative() && !is_zero {
		format!("-{}", formatted)
	} else {
		formatted
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_default_precision() {
		let amount = Amount::new(91.0, "EUR");
		assert_eq!(amount.to_string(), "91.00 EUR");
	}

	#[test]
	fn test_display_custom_precision() {
		let amount = Amount::new(0.91, "EUR");
		assert_eq!(format!("{:.4}", amount), "0.9100 EUR");
	}

	#[test]
	fn test_group_small_numbers() {
		assert_eq!(group_thousands(0.0, 2), "0.00");
		assert_eq!(group_thousands(999.994, 2), "999.99");
	}

	#[test]
	fn test_group_large_numbers() {
		assert_eq!(group_thousands(1000.0, 2), "1,000.00");
		assert_eq!(group_thousands(27750.0, 2), "27,750.00");
		assert_eq!(group_thousands(1234567.891, 2), "1,234,567.89");
		assert_eq!(group_thousands(123456789.0, 0), "123,456,789");
	}

	#[test]
	fn test_group_rounds_up_into_new_group() {
		assert_eq!(group_thousands(999.999, 2), "1,000.00");
	}

	#[test]
	fn test_group_negative_numbers() {
		assert_eq!(group_thousands(-1234.5, 2), "-1,234.50");
		assert_eq!(group_thousands(-0.001, 2), "0.00");
	}
}
