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
use crate::reports::table::Table;

/// Lists every supported currency with the rate it trades at against the
/// base currency.
pub struct RateReporter<'a> {
	registry: &'a Registry,
}

impl<'a> RateReporter<'a> {
	pub fn new(registry: &'a Registry) -> RateReporter<'a> {
		Self { registry }
	}

	pub fn print_all_rates(&self) {
		println!();
		self.table().print();
	}

	fn table(&self) -> Table {
		let rates = self.registry.rates();
		let rate_header = format!("Per {}", rates.base());

		let mut table = Table::new(4);
		table.add_header(vec!["Code", "Name", "Symbol", &rate_header]);
		table.add_separator();
		table.right_align(vec![3]);

		for entry in self.registry.currencies() {
			// every listed currency is guaranteed a rate by construction
			let rate = match rates.rate(&entry.code) {
				Ok(rate) => rate.to_string(),
				Err(_) => "-".to_string(),
			};
			table.add_row(vec![&entry.code, &entry.name, &entry.symbol, &rate]);
		}

		table
	}
}
