//! Data structures shared by the descriptor table, the selection state and the view.

use serde::Deserialize;

/// Incoming and outgoing traffic of a component, in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DataFlow {
	pub incoming: Vec<String>,
	pub outgoing: Vec<String>,
}

impl DataFlow {
	pub fn is_empty(&self) -> bool {
		self.incoming.is_empty() && self.outgoing.is_empty()
	}
}

/// Descriptive text shown in the tooltip of one diagram node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentDescriptor {
	/// Node identifier (e.g. "pap", "cloudPdp").
	pub id: String,
	pub title: String,
	pub description: String,
	/// Names of related components. Empty when there is nothing to list.
	pub connects_to: Vec<String>,
	pub data_flow: DataFlow,
}

impl ComponentDescriptor {
	/// Shown for identifiers the table does not know.
	pub fn placeholder() -> Self {
		Self {
			id: String::new(),
			title: "Component".to_string(),
			description: "No description available".to_string(),
			connects_to: Vec::new(),
			data_flow: DataFlow::default(),
		}
	}
}

/// Screen anchor of the tooltip, in pixels relative to the diagram panel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TooltipPosition {
	pub top: f64,
	pub left: f64,
}

impl TooltipPosition {
	pub const fn new(top: f64, left: f64) -> Self {
		Self { top, left }
	}
}

/// The three areas the diagram is split into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
	/// Vendor-hosted SaaS platform.
	Saas,
	/// Components deployed inside the customer's environment.
	Customer,
	/// Services run and managed by the customer (IDP, REDIS).
	Managed,
}

impl Zone {
	pub const ALL: [Zone; 3] = [Zone::Saas, Zone::Customer, Zone::Managed];

	/// Heading used in the diagram and the sidebar index.
	pub fn heading(self) -> &'static str {
		match self {
			Zone::Saas => "PlainID SaaS Platform",
			Zone::Customer => "Customer Environment",
			Zone::Managed => "Customer's Managed Services",
		}
	}
}
