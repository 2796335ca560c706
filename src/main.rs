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
use crate::parsing::filesystem::Filesystem;
use crate::reports::rate_reporter::RateReporter;
use crate::session::state::Session;
use anyhow::Error;
use clap::Parser;
use env_logger::Builder;
use log::{debug, LevelFilter};
use std::io;

mod config;
mod fx;
mod parsing;
mod reports;
mod session;
mod util;

#[derive(Parser)]
#[command(
	name = "convr",
	version = "0.1",
	about = "Interactive currency converter"
)]
struct Cli {
	/// Custom config file location (default: ~/.config/convr/config.toml)
	#[arg(short, long)]
	config: Option<String>,

	/// Print the supported currencies and their rates, then exit
	#[arg(short, long)]
	list: bool,
}

fn main() -> Result<(), Error> {
	let args = Cli::parse();

	// stdout belongs to the conversation with the user, so only warnings
	// reach stderr unless RUST_LOG asks for more
	let mut builder = Builder::new();
	builder.filter_level(LevelFilter::Warn);
	builder.parse_default_env();
	builder.init();

	let fs = Filesystem::new();
	let config = fs.get_config(args.config.as_ref())?;

	let registry = match &config.rates {
		Some(overrides) => Registry::with_rate_overrides(overrides)?,
		None => Registry::standard()?,
	};
	debug!("{} currencies loaded", registry.currencies().len());

	if args.list {
		RateReporter::new(&registry).print_all_rates();
		return Ok(());
	}

	let stdin = io::stdin();
	let stdout = io::stdout();
	let mut session = Session::new(&registry, stdin.lock(), stdout.lock());
	let farewell = session.run()?;
	debug!("session ended: {:?}", farewell);

	Ok(())
}
