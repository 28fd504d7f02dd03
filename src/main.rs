// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> miette::Result<()> {
	use std::sync::Arc;
	use wayfinder::config::parse_config;
	use wayfinder::web::server::run_server_task;

	let config = parse_config("config.kdl").await?;

	tracing_subscriber::fmt().with_max_level(config.log_level).init();
	tracing::info!(bind_addr = %config.web.bind_addr, "Loaded configuration");

	run_server_task(Arc::new(config)).await;

	Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
	// The client side is a library; hydration starts from `wayfinder::hydrate`.
}
