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
use crate::config::config_file::Config;
use anyhow::{anyhow, bail, Error};
use dirs::home_dir;
use log::{debug, info};
use std::fs;
use std::path::PathBuf;

const DEFAULT_CONFIG_PATH: &str = ".config/convr/config.toml";

pub struct Filesystem {
	home: Option<PathBuf>,
}

impl Filesystem {
	pub fn new() -> Self {
		Self { home: home_dir() }
	}

	/// Fetches the config from the given path, or the default path if none.
	/// A custom path must exist; the default one is optional and is never
	/// created, in which case an empty config is returned.
	pub fn get_config(
		&self,
		custom_config_path: Option<&String>,
	) -> Result<Config, Error> {
		let config_path = match custom_config_path {
			Some(p) => PathBuf::from(p),
			None => match &self.home {
				Some(home) => home.join(DEFAULT_CONFIG_PATH),
				None => {
					debug!("no home directory; running without a config file");
					return Ok(Config::default());
				},
			},
		};

		if !config_path.exists() {
			if custom_config_path.is_some() {
				bail!("config file {} does not exist", config_path.display());
			}
			debug!("no config file at {}", config_path.display());
			return Ok(Config::default());
		}

		info!("reading config from {}", config_path.display());
		let content = fs::read_to_string(&config_path)?;
		let config: Config = toml::from_str(&content)
			.map_err(|e| anyhow!("failed to parse config: {}", e))?;

		Ok(config)
	}
}
