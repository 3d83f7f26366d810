//! Static placement of every clickable node in the diagram.
//!
//! Tooltip anchors are literal coordinates that match this arrangement. Any
//! change to the grid cells below has to move the anchors along with it.

use super::types::{TooltipPosition, Zone};

/// Grid slot of a node inside its zone panel (1-based, CSS grid semantics).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCell {
	pub column: u8,
	pub column_span: u8,
	pub row: u8,
	pub row_span: u8,
}

impl GridCell {
	const fn at(column: u8, row: u8) -> Self {
		Self {
			column,
			column_span: 1,
			row,
			row_span: 1,
		}
	}

	const fn spanning(column: u8, column_span: u8, row: u8, row_span: u8) -> Self {
		Self {
			column,
			column_span,
			row,
			row_span,
		}
	}

	pub fn to_css(self) -> String {
		format!(
			"grid-column: {} / span {}; grid-row: {} / span {};",
			self.column, self.column_span, self.row, self.row_span
		)
	}
}

/// Visual weight of a node; the theme maps it to fill and text colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
	/// Light tile with a colored icon.
	Neutral,
	/// Filled card in the zone color.
	Primary,
	/// Darker fill in the zone color.
	Strong,
	/// Authorization enforcement components.
	Teal,
	/// Storage icon drawn in the REDIS color.
	Redis,
}

/// Where and how one node is drawn.
#[derive(Clone, Copy, Debug)]
pub struct NodeLayout {
	pub id: &'static str,
	pub label: &'static str,
	/// Extra lines rendered under the label of card nodes.
	pub details: &'static [&'static str],
	/// `None` for the tunnel band drawn between the SaaS and customer panels.
	pub zone: Option<Zone>,
	/// Enclosing node for chips nested inside a card.
	pub parent: Option<&'static str>,
	pub icon: &'static str,
	pub tone: Tone,
	pub cell: GridCell,
	pub anchor: TooltipPosition,
}

impl NodeLayout {
	/// DOM id of the node element, used to scroll it into view.
	pub fn dom_id(&self) -> String {
		dom_id(self.id)
	}
}

pub fn dom_id(id: &str) -> String {
	format!("component-{id}")
}

pub static NODES: [NodeLayout; 15] = [
	NodeLayout {
		id: "lb",
		label: "Load Balancer",
		details: &[],
		zone: Some(Zone::Saas),
		parent: None,
		icon: "⑂",
		tone: Tone::Neutral,
		cell: GridCell::at(1, 1),
		anchor: TooltipPosition::new(250.0, 240.0),
	},
	NodeLayout {
		id: "oauth",
		label: "OAuth",
		details: &[],
		zone: Some(Zone::Saas),
		parent: None,
		icon: "🔒",
		tone: Tone::Neutral,
		cell: GridCell::at(2, 1),
		anchor: TooltipPosition::new(250.0, 400.0),
	},
	NodeLayout {
		id: "pap",
		label: "Policy Administration Point (PAP)",
		details: &["PAP Services", "Agent Server"],
		zone: Some(Zone::Saas),
		parent: None,
		icon: "",
		tone: Tone::Primary,
		cell: GridCell::spanning(1, 2, 2, 3),
		anchor: TooltipPosition::new(350.0, 320.0),
	},
	NodeLayout {
		id: "cloudPdp",
		label: "Cloud PDP",
		details: &[],
		zone: Some(Zone::Saas),
		parent: None,
		icon: "☁",
		tone: Tone::Strong,
		cell: GridCell::at(3, 2),
		anchor: TooltipPosition::new(320.0, 500.0),
	},
	NodeLayout {
		id: "postgres",
		label: "Postgres DB",
		details: &[],
		zone: Some(Zone::Saas),
		parent: None,
		icon: "⛁",
		tone: Tone::Neutral,
		cell: GridCell::at(3, 3),
		anchor: TooltipPosition::new(400.0, 500.0),
	},
	NodeLayout {
		id: "saasRedis",
		label: "REDIS Store",
		details: &[],
		zone: Some(Zone::Saas),
		parent: None,
		icon: "⛁",
		tone: Tone::Redis,
		cell: GridCell::at(3, 4),
		anchor: TooltipPosition::new(480.0, 500.0),
	},
	NodeLayout {
		id: "tunnel",
		label: "Secured Communication Tunnel",
		details: &[],
		zone: None,
		parent: None,
		icon: "🔒",
		tone: Tone::Neutral,
		cell: GridCell::spanning(1, 3, 1, 1),
		anchor: TooltipPosition::new(540.0, 320.0),
	},
	NodeLayout {
		id: "agent",
		label: "Policy Authorization Agent (PAA)",
		details: &["Agent"],
		zone: Some(Zone::Customer),
		parent: None,
		icon: "",
		tone: Tone::Primary,
		cell: GridCell::spanning(1, 2, 1, 2),
		anchor: TooltipPosition::new(620.0, 320.0),
	},
	NodeLayout {
		id: "pip",
		label: "PIP Operator",
		details: &[],
		zone: Some(Zone::Customer),
		parent: Some("agent"),
		icon: "",
		tone: Tone::Primary,
		cell: GridCell::at(1, 1),
		anchor: TooltipPosition::new(670.0, 280.0),
	},
	NodeLayout {
		id: "pdp",
		label: "PDP",
		details: &[],
		zone: Some(Zone::Customer),
		parent: Some("agent"),
		icon: "",
		tone: Tone::Primary,
		cell: GridCell::at(2, 1),
		anchor: TooltipPosition::new(670.0, 370.0),
	},
	NodeLayout {
		id: "dataStores",
		label: "Customer Data Stores",
		details: &[],
		zone: Some(Zone::Customer),
		parent: None,
		icon: "⛁",
		tone: Tone::Neutral,
		cell: GridCell::at(3, 1),
		anchor: TooltipPosition::new(620.0, 500.0),
	},
	NodeLayout {
		id: "customerApps",
		label: "Customer Apps",
		details: &[],
		zone: Some(Zone::Customer),
		parent: None,
		icon: "▤",
		tone: Tone::Neutral,
		cell: GridCell::at(3, 2),
		anchor: TooltipPosition::new(680.0, 500.0),
	},
	NodeLayout {
		id: "authorizers",
		label: "Authorizers",
		details: &[],
		zone: Some(Zone::Customer),
		parent: None,
		icon: "🛡",
		tone: Tone::Teal,
		cell: GridCell::spanning(1, 3, 3, 1),
		anchor: TooltipPosition::new(740.0, 320.0),
	},
	NodeLayout {
		id: "idp",
		label: "Identity Provider (IDP)",
		details: &[],
		zone: Some(Zone::Managed),
		parent: None,
		icon: "👥",
		tone: Tone::Neutral,
		cell: GridCell::at(1, 1),
		anchor: TooltipPosition::new(820.0, 240.0),
	},
	NodeLayout {
		id: "customerRedis",
		label: "REDIS Store",
		details: &[],
		zone: Some(Zone::Managed),
		parent: None,
		icon: "⛁",
		tone: Tone::Redis,
		cell: GridCell::at(2, 1),
		anchor: TooltipPosition::new(820.0, 400.0),
	},
];

/// Look up a node by id.
pub fn node(id: &str) -> Option<&'static NodeLayout> {
	NODES.iter().find(|node| node.id == id)
}

/// Top-level nodes of one zone panel, in drawing order.
pub fn zone_nodes(zone: Zone) -> impl Iterator<Item = &'static NodeLayout> {
	NODES
		.iter()
		.filter(move |node| node.zone == Some(zone) && node.parent.is_none())
}

/// Chips drawn inside the card of `parent`.
pub fn child_nodes(parent: &'static str) -> impl Iterator<Item = &'static NodeLayout> {
	NODES
		.iter()
		.filter(move |node| node.parent == Some(parent))
}

/// One group of the sidebar index.
pub struct IndexGroup {
	pub zone: Zone,
	pub heading: &'static str,
	/// (node id, entry label)
	pub entries: &'static [(&'static str, &'static str)],
}

pub static INDEX: [IndexGroup; 3] = [
	IndexGroup {
		zone: Zone::Saas,
		heading: "PlainID SaaS Platform",
		entries: &[
			("oauth", "OAuth"),
			("lb", "Load Balancer"),
			("pap", "PAP Services"),
			("cloudPdp", "Cloud PDP"),
			("postgres", "Postgres DB"),
			("saasRedis", "REDIS Cache"),
			("tunnel", "Secured Tunnel"),
		],
	},
	IndexGroup {
		zone: Zone::Customer,
		heading: "Customer Environment",
		entries: &[
			("agent", "Agent"),
			("pdp", "PDP"),
			("pip", "PIP Operator"),
			("authorizers", "Authorizers"),
			("dataStores", "Data Stores"),
			("customerApps", "Apps/Services"),
		],
	},
	IndexGroup {
		zone: Zone::Managed,
		heading: "Managed Services",
		entries: &[("idp", "IDP"), ("customerRedis", "REDIS Store")],
	},
];

/// Anchors further right than this open the tooltip against the right edge.
pub const RIGHT_ANCHOR_THRESHOLD: f64 = 400.0;
/// Gap kept between a right-anchored tooltip and the panel edge.
pub const RIGHT_MARGIN: f64 = 20.0;
/// Downward shift of the tooltip below its anchor.
pub const TOOLTIP_DROP: f64 = 10.0;

/// Horizontal anchoring of the tooltip box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Horizontal {
	Left(f64),
	Right(f64),
}

/// Resolved CSS placement for a tooltip anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipPlacement {
	pub top: f64,
	pub horizontal: Horizontal,
}

impl TooltipPlacement {
	pub fn for_anchor(anchor: TooltipPosition) -> Self {
		let horizontal = if anchor.left > RIGHT_ANCHOR_THRESHOLD {
			Horizontal::Right(RIGHT_MARGIN)
		} else {
			Horizontal::Left(anchor.left)
		};
		Self {
			top: anchor.top,
			horizontal,
		}
	}

	pub fn to_css(self) -> String {
		let (left, right) = match self.horizontal {
			Horizontal::Left(px) => (format!("{px}px"), "auto".to_string()),
			Horizontal::Right(px) => ("auto".to_string(), format!("{px}px")),
		};
		format!(
			"top: {}px; left: {left}; right: {right}; transform: translateY({TOOLTIP_DROP}px);",
			self.top
		)
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use pretty_assertions::assert_eq;

	use super::*;
	use crate::components::architecture_diagram::catalog::DescriptorTable;

	#[test]
	fn layout_covers_every_descriptor() {
		let table = DescriptorTable::builtin();
		let ids: HashSet<_> = NODES.iter().map(|node| node.id).collect();
		assert_eq!(ids.len(), NODES.len());
		assert_eq!(ids.len(), table.len());
		for id in ids {
			assert!(table.get(id).is_some(), "no descriptor for {id}");
		}
	}

	#[test]
	fn index_entries_point_at_real_nodes() {
		for group in &INDEX {
			assert!(!group.heading.is_empty());
			for (id, _) in group.entries {
				assert!(node(id).is_some(), "sidebar entry for unknown node {id}");
			}
		}
		let listed: usize = INDEX.iter().map(|g| g.entries.len()).sum();
		assert_eq!(listed, NODES.len());
	}

	#[test]
	fn anchors_match_fixed_layout() {
		let expected = [
			("lb", 250.0, 240.0),
			("oauth", 250.0, 400.0),
			("pap", 350.0, 320.0),
			("cloudPdp", 320.0, 500.0),
			("postgres", 400.0, 500.0),
			("saasRedis", 480.0, 500.0),
			("tunnel", 540.0, 320.0),
			("agent", 620.0, 320.0),
			("pip", 670.0, 280.0),
			("pdp", 670.0, 370.0),
			("dataStores", 620.0, 500.0),
			("customerApps", 680.0, 500.0),
			("authorizers", 740.0, 320.0),
			("idp", 820.0, 240.0),
			("customerRedis", 820.0, 400.0),
		];
		for (id, top, left) in expected {
			assert_eq!(node(id).map(|n| n.anchor), Some(TooltipPosition::new(top, left)));
		}
	}

	#[test]
	fn nested_chips_belong_to_agent() {
		let chips: Vec<_> = child_nodes("agent").map(|node| node.id).collect();
		assert_eq!(chips, vec!["pip", "pdp"]);
		assert!(zone_nodes(Zone::Customer).all(|node| node.id != "pip" && node.id != "pdp"));
	}

	#[test]
	fn tunnel_sits_outside_zones() {
		for zone in Zone::ALL {
			assert!(zone_nodes(zone).all(|node| node.id != "tunnel"));
		}
	}

	#[test]
	fn placement_switches_to_right_edge_past_threshold() {
		assert_eq!(
			TooltipPlacement::for_anchor(TooltipPosition::new(250.0, 400.0)).horizontal,
			Horizontal::Left(400.0)
		);
		assert_eq!(
			TooltipPlacement::for_anchor(TooltipPosition::new(320.0, 500.0)).horizontal,
			Horizontal::Right(RIGHT_MARGIN)
		);
	}

	#[test]
	fn placement_css() {
		assert_eq!(
			TooltipPlacement::for_anchor(TooltipPosition::new(350.0, 320.0)).to_css(),
			"top: 350px; left: 320px; right: auto; transform: translateY(10px);"
		);
		assert_eq!(
			TooltipPlacement::for_anchor(TooltipPosition::new(620.0, 500.0)).to_css(),
			"top: 620px; left: auto; right: 20px; transform: translateY(10px);"
		);
	}

	#[test]
	fn dom_ids_are_prefixed() {
		assert_eq!(node("cloudPdp").map(|n| n.dom_id()).as_deref(), Some("component-cloudPdp"));
	}
}
