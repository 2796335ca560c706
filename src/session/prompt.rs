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
use anyhow::Error;
use std::fmt;
use std::io::{BufRead, Write};

/// Typed at a currency or amount prompt, ends the program immediately.
pub const EXIT_KEYWORD: &str = "exit";

/// Either the answer that was asked for, or a request to end the program.
#[derive(Clone, Debug, PartialEq)]
pub enum Prompted<T> {
	Value(T),
	Exit,
}

/// Answer to "Convert again?".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContinueChoice {
	Again,
	Stop,
	/// Neither yes nor no; this ends the program rather than asking again
	Invalid,
}

/// Input that was refused and must be asked for again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
	UnsupportedCurrency,
	NotNumeric,
	NegativeAmount,
}

impl fmt::Display for Rejection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Rejection::UnsupportedCurrency => write!(
				f,
				"Unsupported currency. Please choose from the list shown."
			),
			Rejection::NotNumeric => {
				write!(f, "Invalid input. Please enter a numeric value.")
			},
			Rejection::NegativeAmount => {
				write!(f, "Please enter an amount of zero or more.")
			},
		}
	}
}

/// Resolves a code such as "usd" or a symbol such as "€" to a supported
/// currency code.
pub fn parse_currency(
	registry: &Registry,
	raw: &str,
) -> Result<Prompted<String>, Rejection> {
	let code = raw.trim().to_uppercase();

	if code.eq_ignore_ascii_case(EXIT_KEYWORD) {
		return Ok(Prompted::Exit);
	}

	if registry.is_supported(&code) {
		return Ok(Prompted::Value(code));
	}

	match registry.code_for_symbol(&code) {
		Some(symbol_code) => Ok(Prompted::Value(symbol_code.to_string())),
		None => Err(Rejection::UnsupportedCurrency),
	}
}

/// Parses a non-negative amount. Zero is allowed; NaN and infinities are
/// not numbers anyone means to convert, so they are refused too.
pub fn parse_amount(raw: &str) -> Result<Prompted<f64>, Rejection> {
	let raw = raw.trim();

	if raw.eq_ignore_ascii_case(EXIT_KEYWORD) {
		return Ok(Prompted::Exit);
	}

	let amount: f64 = raw.parse().map_err(|_| Rejection::NotNumeric)?;
	if !amount.is_finite() {
		return Err(Rejection::NotNumeric);
	}
	if amount < 0.0 {
		return Err(Rejection::NegativeAmount);
	}

	Ok(Prompted::Value(amount))
}

pub fn parse_continue(raw: &str) -> ContinueChoice {
	let answer = raw.trim().to_lowercase();
	if answer.starts_with('y') {
		ContinueChoice::Again
	} else if answer.starts_with('n') {
		ContinueChoice::Stop
	} else {
		ContinueChoice::Invalid
	}
}

/// Asks questions on `output` and reads the answers, one line at a time,
/// from `input`. Running out of input counts as asking to exit.
pub struct Prompter<R, W> {
	input: R,
	output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
	pub fn new(input: R, output: W) -> Self {
		Self { input, output }
	}

	pub fn output(&mut self) -> &mut W {
		&mut self.output
	}

	/// Asks for a currency until a supported one (or the exit keyword) is
	/// given.
	pub fn resolve_currency(
		&mut self,
		registry: &Registry,
		question: &str,
	) -> Result<Prompted<String>, Error> {
		loop {
			let Some(raw) = self.ask(question)? else {
				return Ok(Prompted::Exit);
			};

			match parse_currency(registry, &raw) {
				Ok(resolved) => return Ok(resolved),
				Err(rejection) => writeln!(self.output, "{}", rejection)?,
			}
		}
	}

	/// Asks for an amount of `code` until a usable one is given.
	pub fn resolve_amount(
		&mut self,
		registry: &Registry,
		code: &str,
	) -> Result<Prompted<f64>, Error> {
		let question = match registry.get(code) {
			Some(entry) => {
				format!("Enter the amount in {} ({}): ", code, entry.name)
			},
			None => format!("Enter the amount in {}: ", code),
		};

		loop {
			let Some(raw) = self.ask(&question)? else {
				return Ok(Prompted::Exit);
			};

			match parse_amount(&raw) {
				Ok(resolved) => return Ok(resolved),
				Err(rejection) => writeln!(self.output, "{}", rejection)?,
			}
		}
	}

	/// Asked once; there is no retry for an unrecognised answer.
	pub fn ask_continue(&mut self) -> Result<Prompted<ContinueChoice>, Error> {
		match self.ask("Convert again? (y/n): ")? {
			Some(raw) => Ok(Prompted::Value(parse_continue(&raw))),
			None => Ok(Prompted::Exit),
		}
	}

	/// Writes the question and reads one line, or None at end of input.
	/// Bytes that are not UTF-8 are replaced rather than failing the read,
	/// so they end up rejected like any other unusable answer.
	fn ask(&mut self, question: &str) -> Result<Option<String>, Error> {
		write!(self.output, "{}", question)?;
		self.output.flush()?;

		let mut buf = Vec::new();
		if self.input.read_until(b'\n', &mut buf)? == 0 {
			return Ok(None);
		}

		Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
	}
}
