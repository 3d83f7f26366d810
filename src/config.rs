//! Page-level configuration embedded by the host page.
//!
//! The page may carry a `<script id="diagram-config" type="application/json">`
//! element. Every field is optional; a missing element means defaults.

use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::components::architecture_diagram::DescriptorOverride;

/// DOM id of the configuration script element.
pub const CONFIG_ELEMENT_ID: &str = "diagram-config";

/// Target of every "learn more" and resource link.
pub const DEFAULT_DOCS_URL: &str =
	"https://docs.plainid.io/docs/architecture-diagram-and-high-level-components-1";

/// Errors raised while reading the embedded configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// No browser window or document to read from
	#[error("no document available")]
	NoDocument,

	/// The element exists but is not a `<script>`
	#[error("element #{0} is not a <script> element")]
	NotAScript(&'static str),

	/// The script body is not valid configuration JSON
	#[error("invalid configuration: {0}")]
	Parse(#[from] serde_json::Error),
}

/// Diagram configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiagramConfig {
	/// Header title.
	pub title: String,
	/// Documentation link target.
	pub docs_url: String,
	pub footer: String,
	/// Show "connects to" and "data flow" lists in the tooltip.
	pub detailed_tooltips: bool,
	/// Partial descriptor replacements applied at start-up.
	pub overrides: Vec<DescriptorOverride>,
}

impl Default for DiagramConfig {
	fn default() -> Self {
		Self {
			title: "Authorization Architecture".to_string(),
			docs_url: DEFAULT_DOCS_URL.to_string(),
			footer: "Made by the SE Team for Walkthrough Purposes Only".to_string(),
			detailed_tooltips: true,
			overrides: Vec::new(),
		}
	}
}

impl DiagramConfig {
	/// Parse a configuration document.
	pub fn from_json(json: &str) -> Result<Self, ConfigError> {
		Ok(serde_json::from_str(json)?)
	}
}

/// Load configuration from the script element with id="diagram-config".
///
/// Returns `Ok(None)` when the page does not embed one.
pub fn load_diagram_config() -> Result<Option<DiagramConfig>, ConfigError> {
	let document = web_sys::window()
		.and_then(|window| window.document())
		.ok_or(ConfigError::NoDocument)?;
	let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
		return Ok(None);
	};
	let script: HtmlScriptElement = element
		.dyn_into()
		.map_err(|_| ConfigError::NotAScript(CONFIG_ELEMENT_ID))?;
	let json_text = script.text().unwrap_or_default();
	if json_text.trim().is_empty() {
		return Ok(None);
	}
	DiagramConfig::from_json(&json_text).map(Some)
}
