// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use kdl::KdlDocument;
use miette::{IntoDiagnostic, Result, WrapErr, miette};
use tokio::fs::read_to_string;
use tracing::Level;

pub async fn parse_config(config_path: &str) -> Result<ConfigData> {
	let config_file_contents = read_to_string(config_path)
		.await
		.into_diagnostic()
		.wrap_err_with(|| format!("Failed to read {}", config_path))?;
	parse_config_str(config_path, &config_file_contents)
}

/// Parses a configuration document. `config_name` identifies the document in error messages.
pub fn parse_config_str(config_name: &str, config_file_contents: &str) -> Result<ConfigData> {
	let document: KdlDocument = config_file_contents
		.parse::<KdlDocument>()
		.wrap_err_with(|| format!("Failed to parse {}", config_name))?;

	let web = document
		.get("web")
		.and_then(|node| node.children())
		.ok_or_else(|| miette!("{}: the configuration is missing the `web` block", config_name))?;
	let bind_addr = string_arg(config_name, web, "bind_addr")?
		.ok_or_else(|| miette!("{}: the `web` block is missing `bind_addr`", config_name))?
		.to_string();

	let log_level = match string_arg(config_name, &document, "log_level")? {
		Some(level) => level.parse().map_err(|_| {
			miette!(
				"{}: `log_level` must be one of trace, debug, info, warn, or error; got {:?}",
				config_name,
				level
			)
		})?,
		None => Level::INFO,
	};

	Ok(ConfigData {
		web: WebConfig { bind_addr },
		log_level,
	})
}

fn string_arg<'a>(config_name: &str, document: &'a KdlDocument, name: &str) -> Result<Option<&'a str>> {
	match document.get_arg(name) {
		Some(value) => value
			.as_string()
			.map(Some)
			.ok_or_else(|| miette!("{}: `{}` must be a string, found {}", config_name, name, value)),
		None => Ok(None),
	}
}

#[derive(Clone, Debug)]
pub struct ConfigData {
	pub web: WebConfig,
	pub log_level: Level,
}

#[derive(Clone, Debug)]
pub struct WebConfig {
	pub bind_addr: String,
}
