//! Selection and tooltip state for the diagram.
//!
//! The view owns one [`SelectionState`] inside a signal and changes it only
//! through the methods below; every change re-renders the affected parts of
//! the diagram.

use log::debug;

use super::catalog::DescriptorTable;
use super::types::{ComponentDescriptor, TooltipPosition};

/// Which node is selected and what the tooltip shows.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionState {
	/// Most recently selected node, highlighted in the diagram and sidebar.
	pub active_id: Option<String>,
	pub tooltip_visible: bool,
	/// Content of the tooltip. Left stale while the tooltip is hidden.
	pub tooltip_content: ComponentDescriptor,
	pub tooltip_position: TooltipPosition,
	/// Node the view should scroll into the viewport, taken by the view once done.
	pub scroll_target: Option<String>,
}

impl Default for SelectionState {
	fn default() -> Self {
		Self {
			active_id: None,
			tooltip_visible: false,
			tooltip_content: ComponentDescriptor::placeholder(),
			tooltip_position: TooltipPosition::default(),
			scroll_target: None,
		}
	}
}

impl SelectionState {
	/// Handle a click on a diagram node.
	///
	/// Clicking the active node again clears the selection and hides the
	/// tooltip. Any other id becomes active and its descriptor (or the
	/// placeholder) is shown at `position`.
	pub fn select_component(&mut self, id: &str, position: TooltipPosition, table: &DescriptorTable) {
		if self.active_id.as_deref() == Some(id) {
			debug!("authz-architecture: deselected '{id}'");
			self.active_id = None;
			self.tooltip_visible = false;
			return;
		}

		debug!(
			"authz-architecture: selected '{id}' at ({}, {})",
			position.top, position.left
		);
		self.active_id = Some(id.to_string());
		self.tooltip_visible = true;
		self.tooltip_position = position;
		self.tooltip_content = table.lookup(id);
	}

	/// Hide the tooltip from its close control.
	///
	/// The node keeps its active highlight; only a second click on the node
	/// clears that.
	pub fn dismiss_tooltip(&mut self) {
		debug!("authz-architecture: tooltip dismissed");
		self.tooltip_visible = false;
	}

	/// Jump to a node from the sidebar index: highlight it, hide the tooltip
	/// and ask the view to scroll the node into view.
	pub fn select_via_index(&mut self, id: &str) {
		debug!("authz-architecture: jump to '{id}'");
		self.active_id = Some(id.to_string());
		self.tooltip_visible = false;
		self.scroll_target = Some(id.to_string());
	}

	/// Take the pending scroll request, if any.
	pub fn take_scroll_target(&mut self) -> Option<String> {
		self.scroll_target.take()
	}

	pub fn is_active(&self, id: &str) -> bool {
		self.active_id.as_deref() == Some(id)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::components::architecture_diagram::layout::NODES;

	const TITLES: [(&str, &str); 15] = [
		("lb", "Load Balancer"),
		("oauth", "OAuth"),
		("pap", "Policy Administration Point (PAP)"),
		("cloudPdp", "Cloud PDP"),
		("postgres", "PostgreSQL Database"),
		("saasRedis", "REDIS Cache (SaaS)"),
		("tunnel", "Secured Communication Tunnel"),
		("agent", "Agent"),
		("pip", "PIP Operator"),
		("pdp", "Policy Decision Point"),
		("authorizers", "Authorizers"),
		("dataStores", "Customer Data Stores"),
		("customerApps", "Customer Apps/Services"),
		("idp", "Identity Provider (IDP)"),
		("customerRedis", "Customer REDIS Store"),
	];

	fn pos(top: f64, left: f64) -> TooltipPosition {
		TooltipPosition::new(top, left)
	}

	#[test]
	fn starts_with_nothing_selected() {
		let state = SelectionState::default();
		assert_eq!(state.active_id, None);
		assert!(!state.tooltip_visible);
		assert_eq!(state.scroll_target, None);
	}

	#[test]
	fn every_known_id_shows_its_title() {
		let table = DescriptorTable::builtin();
		for (id, title) in TITLES {
			let mut state = SelectionState::default();
			state.select_component(id, pos(100.0, 100.0), &table);
			assert_eq!(state.tooltip_content.title, title);
			assert_eq!(state.active_id.as_deref(), Some(id));
			assert!(state.tooltip_visible);
		}
	}

	#[test]
	fn selecting_same_node_twice_hides_tooltip() {
		let table = DescriptorTable::builtin();
		let mut state = SelectionState::default();
		state.select_component("oauth", pos(250.0, 400.0), &table);
		state.select_component("oauth", pos(250.0, 400.0), &table);
		assert!(!state.tooltip_visible);
		assert_eq!(state.active_id, None);
	}

	#[test]
	fn unknown_id_shows_placeholder() {
		let table = DescriptorTable::builtin();
		let mut state = SelectionState::default();
		state.select_component("unknown-id", pos(10.0, 20.0), &table);
		assert!(state.tooltip_visible);
		assert_eq!(state.active_id.as_deref(), Some("unknown-id"));
		assert_eq!(state.tooltip_content, ComponentDescriptor::placeholder());
		assert_eq!(state.tooltip_content.title, "Component");
		assert_eq!(state.tooltip_content.description, "No description available");
		assert!(state.tooltip_content.connects_to.is_empty());
		assert!(state.tooltip_content.data_flow.is_empty());
	}

	#[test]
	fn switching_nodes_replaces_content_and_position() {
		let table = DescriptorTable::builtin();
		let mut state = SelectionState::default();
		state.select_component("pap", pos(350.0, 320.0), &table);
		state.select_component("idp", pos(820.0, 240.0), &table);
		assert_eq!(state.active_id.as_deref(), Some("idp"));
		assert_eq!(state.tooltip_content, table.lookup("idp"));
		assert_eq!(state.tooltip_position, pos(820.0, 240.0));
		assert!(state.tooltip_visible);
	}

	#[test]
	fn switching_from_known_to_unknown_leaves_no_residue() {
		let table = DescriptorTable::builtin();
		let mut state = SelectionState::default();
		state.select_component("pap", pos(350.0, 320.0), &table);
		state.select_component("nope", pos(1.0, 2.0), &table);
		assert_eq!(state.tooltip_content, ComponentDescriptor::placeholder());
	}

	// Closing the tooltip keeps the node highlighted; a follow-up click on the
	// same node therefore deselects instead of reopening.
	#[test]
	fn dismiss_hides_tooltip_but_keeps_active_node() {
		let table = DescriptorTable::builtin();
		let mut state = SelectionState::default();
		state.select_component("agent", pos(620.0, 320.0), &table);
		state.dismiss_tooltip();
		assert!(!state.tooltip_visible);
		assert_eq!(state.active_id.as_deref(), Some("agent"));

		state.select_component("agent", pos(620.0, 320.0), &table);
		assert!(!state.tooltip_visible);
		assert_eq!(state.active_id, None);
	}

	#[test]
	fn index_jump_highlights_without_tooltip() {
		let table = DescriptorTable::builtin();
		let mut state = SelectionState::default();
		state.select_component("lb", pos(250.0, 240.0), &table);
		state.select_via_index("postgres");
		assert_eq!(state.active_id.as_deref(), Some("postgres"));
		assert!(!state.tooltip_visible);
		assert_eq!(state.take_scroll_target().as_deref(), Some("postgres"));
		assert_eq!(state.take_scroll_target(), None);
	}

	#[test]
	fn index_jump_never_toggles_off() {
		let mut state = SelectionState::default();
		state.select_via_index("pdp");
		state.select_via_index("pdp");
		assert_eq!(state.active_id.as_deref(), Some("pdp"));
		assert!(!state.tooltip_visible);
	}

	#[test]
	fn pap_round_trip_through_its_anchor() {
		let table = DescriptorTable::builtin();
		let anchor = NODES
			.iter()
			.find(|node| node.id == "pap")
			.map(|node| node.anchor)
			.unwrap();
		let mut state = SelectionState::default();

		state.select_component("pap", anchor, &table);
		assert!(state.tooltip_visible);
		assert_eq!(state.tooltip_content.title, "Policy Administration Point (PAP)");
		assert!(state.tooltip_content.connects_to.contains(&"Postgres DB".to_string()));
		assert_eq!(state.tooltip_position, TooltipPosition::new(350.0, 320.0));

		state.select_component("pap", anchor, &table);
		assert!(!state.tooltip_visible);
	}
}
