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
use crate::fx::converter::convert;
use crate::fx::registry::Registry;
use crate::reports::conversion_reporter::ConversionReporter;
use crate::session::history::{ConversionRecord, History};
use crate::session::prompt::{ContinueChoice, Prompted, Prompter};
use anyhow::Error;
use log::{debug, warn};
use std::io::{BufRead, Write};

/// Where the session is in its loop. Each step consumes the current state
/// and yields the next one until the session terminates.
#[derive(Clone, Debug, PartialEq)]
pub enum State {
	Prompting,
	Converting(Request),
	Displaying { record: ConversionRecord, rate: f64 },
	AskingContinue,
	Terminated(Farewell),
}

/// A fully resolved conversion waiting to be computed.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
	pub from: String,
	pub to: String,
	pub amount: f64,
}

/// How the session came to an end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Farewell {
	/// The exit keyword, or end of input
	Exited,
	/// Declined to convert again
	Finished,
	/// Gave an answer that was neither yes nor no
	InvalidChoice,
}

/// One run of the interactive converter. The history lives exactly as long
/// as the session does.
pub struct Session<'a, R, W> {
	registry: &'a Registry,
	reporter: ConversionReporter<'a>,
	prompter: Prompter<R, W>,
	history: History,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
	pub fn new(registry: &'a Registry, input: R, output: W) -> Self {
		Self {
			registry,
			reporter: ConversionReporter::new(registry),
			prompter: Prompter::new(input, output),
			history: History::new(),
		}
	}

	#[cfg(test)]
	pub fn history(&self) -> &History {
		&self.history
	}

	/// Runs conversions until the user leaves. Only terminal I/O failures
	/// are returned as errors.
	pub fn run(&mut self) -> Result<Farewell, Error> {
		let mut state = State::Prompting;

		loop {
			state = match state {
				State::Terminated(farewell) => {
					self.say_goodbye(farewell)?;
					return Ok(farewell);
				},
				other => self.step(other)?,
			};
		}
	}

	fn step(&mut self, state: State) -> Result<State, Error> {
		let next = match state {
			State::Prompting => self.prompt()?,
			State::Converting(request) => self.convert(request)?,
			State::Displaying { record, rate } => {
				let out = self.prompter.output();
				self.reporter.write_result(out, &record, rate)?;
				self.reporter.write_history(out, &self.history)?;
				State::AskingContinue
			},
			State::AskingContinue => match self.prompter.ask_continue()? {
				Prompted::Exit => State::Terminated(Farewell::Exited),
				Prompted::Value(ContinueChoice::Again) => State::Prompting,
				Prompted::Value(ContinueChoice::Stop) => {
					State::Terminated(Farewell::Finished)
				},
				Prompted::Value(ContinueChoice::Invalid) => {
					State::Terminated(Farewell::InvalidChoice)
				},
			},
			State::Terminated(farewell) => State::Terminated(farewell),
		};

		Ok(next)
	}

	fn prompt(&mut self) -> Result<State, Error> {
		self.reporter.write_welcome(self.prompter.output())?;

		let from = match self.prompter.resolve_currency(
			self.registry,
			"\nEnter the currency you want to convert FROM: ",
		)? {
			Prompted::Value(code) => code,
			Prompted::Exit => return Ok(State::Terminated(Farewell::Exited)),
		};

		let to = match self.prompter.resolve_currency(
			self.registry,
			"Enter the currency you want to convert TO: ",
		)? {
			Prompted::Value(code) => code,
			Prompted::Exit => return Ok(State::Terminated(Farewell::Exited)),
		};

		let amount = match self.prompter.resolve_amount(self.registry, &from)? {
			Prompted::Value(amount) => amount,
			Prompted::Exit => return Ok(State::Terminated(Farewell::Exited)),
		};

		Ok(State::Converting(Request { from, to, amount }))
	}

	/// A failed conversion is reported and skipped; it never reaches the
	/// history.
	fn convert(&mut self, request: Request) -> Result<State, Error> {
		let converted = match convert(
			self.registry.rates(),
			&request.from,
			&request.to,
			request.amount,
		) {
			Ok(converted) => converted,
			Err(e) => {
				warn!("conversion {:?} failed: {}", request, e);
				let out = self.prompter.output();
				writeln!(out)?;
				writeln!(out, "Error: {}", e)?;
				return Ok(State::AskingContinue);
			},
		};

		let record = ConversionRecord::new(
			request.amount,
			&request.from,
			&request.to,
			converted.result,
		);
		self.history.push(record.clone());
		debug!("history holds {} conversion(s)", self.history.len());

		Ok(State::Displaying {
			record,
			rate: converted.rate,
		})
	}

	fn say_goodbye(&mut self, farewell: Farewell) -> Result<(), Error> {
		let out = self.prompter.output();
		match farewell {
			Farewell::Exited => {
				writeln!(out)?;
				writeln!(out, "Exiting Currency Converter. Goodbye!")?;
			},
			Farewell::Finished => {
				writeln!(out)?;
				writeln!(
					out,
					"Thank you for using the Currency Converter. Goodbye!"
				)?;
			},
			Farewell::InvalidChoice => {
				writeln!(out, "Invalid choice. Exiting program.")?;
			},
		}
		writeln!(out)?;
		out.flush()?;

		Ok(())
	}
}
