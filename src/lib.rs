//! authz-architecture: Interactive architecture diagram of an authorization platform.
//!
//! This crate provides a WASM-based page that renders the platform's
//! components as clickable nodes with descriptive tooltips and a sidebar
//! index for jumping to a node.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};

pub mod components;
pub mod config;

pub use components::architecture_diagram::{ArchitectureDiagram, DescriptorTable, SelectionState};
pub use config::{ConfigError, DiagramConfig, load_diagram_config};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("authz-architecture: logging initialized");
}

/// Read the page configuration, falling back to defaults on any problem.
fn resolve_config() -> DiagramConfig {
	match load_diagram_config() {
		Ok(Some(config)) => {
			info!(
				"authz-architecture: loaded page configuration ({} overrides)",
				config.overrides.len()
			);
			config
		}
		Ok(None) => DiagramConfig::default(),
		Err(e) => {
			warn!("authz-architecture: using default configuration: {}", e);
			DiagramConfig::default()
		}
	}
}

/// Main application component.
/// Loads page configuration and renders header, diagram and footer.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = resolve_config();
	let table = DescriptorTable::with_overrides(&config.overrides);
	let page_title = config.title.clone();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=page_title />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="page">
			<header class="page-header">
				<span class="page-title">{config.title}</span>
			</header>

			<main class="page-main">
				<p class="page-intro">
					"Interactive visualization of the authorization platform architecture. Click on any component to learn more."
				</p>
				<ArchitectureDiagram
					table=table
					docs_url=config.docs_url
					detailed_tooltips=config.detailed_tooltips
				/>
			</main>

			<footer class="page-footer">{config.footer}</footer>
		</div>
	}
}
