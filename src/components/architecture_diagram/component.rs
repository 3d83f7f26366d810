//! Leptos component rendering the architecture diagram.
//!
//! The component owns a single [`SelectionState`] signal. Node clicks,
//! sidebar jumps and the tooltip close control all go through the state's
//! methods; the view re-renders from the signal.

use leptos::prelude::*;
use log::warn;
use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::catalog::DescriptorTable;
use super::layout::{self, NodeLayout, child_nodes, zone_nodes};
use super::sidebar::IndexSidebar;
use super::state::SelectionState;
use super::theme::Theme;
use super::tooltip::ComponentTooltip;
use super::types::{TooltipPosition, Zone};

/// Shared handles passed down to every node view.
#[derive(Clone, Copy)]
struct DiagramHandle {
	selection: RwSignal<SelectionState>,
	table: StoredValue<DescriptorTable>,
	theme: StoredValue<Theme>,
}

impl DiagramHandle {
	fn select(self, id: &str, anchor: TooltipPosition) {
		self.table.with_value(|table| {
			self.selection
				.update(|state| state.select_component(id, anchor, table))
		});
	}

	/// Tracked read: re-runs the caller when the selection changes.
	fn is_active(self, id: &str) -> bool {
		self.selection.with(|state| state.is_active(id))
	}
}

/// Bring the node's element to the middle of the viewport.
fn scroll_node_into_view(id: &str) {
	let Some(element) = web_sys::window()
		.and_then(|window| window.document())
		.and_then(|document| document.get_element_by_id(&layout::dom_id(id)))
	else {
		warn!("authz-architecture: no element for component '{id}'");
		return;
	};
	let options = ScrollIntoViewOptions::new();
	options.set_behavior(ScrollBehavior::Smooth);
	options.set_block(ScrollLogicalPosition::Center);
	element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Renders the sidebar index, the interactive diagram with its tooltip, and
/// the legend.
///
/// `table` supplies tooltip text. With `detailed_tooltips = false` the
/// tooltip shows only title and description.
#[component]
pub fn ArchitectureDiagram(
	#[prop(optional)] table: Option<DescriptorTable>,
	#[prop(into)] docs_url: String,
	#[prop(default = true)] detailed_tooltips: bool,
) -> impl IntoView {
	let selection = RwSignal::new(SelectionState::default());
	let handle = DiagramHandle {
		selection,
		table: StoredValue::new(table.unwrap_or_default()),
		theme: StoredValue::new(Theme::default()),
	};

	// Sidebar jumps leave a scroll request in the state; perform it once.
	Effect::new(move |_| {
		let Some(id) = selection.with(|state| state.scroll_target.clone()) else {
			return;
		};
		selection.update_untracked(|state| {
			state.take_scroll_target();
		});
		scroll_node_into_view(&id);
	});

	let saas = zone_panel(Zone::Saas, handle);
	let customer = zone_panel(Zone::Customer, handle);
	let managed = zone_panel(Zone::Managed, handle);
	let tunnel = layout::node("tunnel").map(|node| tunnel_band(node, handle));
	let sidebar_docs_url = docs_url.clone();

	view! {
		<div class="content-layout">
			<IndexSidebar selection=selection docs_url=sidebar_docs_url />

			<div class="main-column">
				{info_card(handle)}

				<div class="diagram-panel">
					<h3 class="panel-title">"Interactive Architecture Diagram"</h3>
					{saas}
					{tunnel}
					{customer}
					{managed}
					<ComponentTooltip
						selection=selection
						docs_url=docs_url
						detailed=detailed_tooltips
					/>
				</div>

				{legend(handle)}
			</div>
		</div>
	}
}

fn zone_panel(zone: Zone, handle: DiagramHandle) -> impl IntoView {
	let (panel_css, heading_color) = handle
		.theme
		.with_value(|theme| (theme.panel_css(zone), theme.zone(zone).heading().to_css()));
	let nodes = zone_nodes(zone)
		.map(|node| node_view(node, zone, handle))
		.collect_view();

	view! {
		<section class="zone-panel" style=panel_css>
			<div class="zone-header">
				<h3 style=format!("color: {heading_color};")>{zone.heading()}</h3>
			</div>
			<div class="zone-grid">{nodes}</div>
		</section>
	}
}

fn node_view(node: &'static NodeLayout, zone: Zone, handle: DiagramHandle) -> AnyView {
	let on_click = move |ev: MouseEvent| {
		ev.stop_propagation();
		handle.select(node.id, node.anchor);
	};
	let style = move || {
		let active = handle.is_active(node.id);
		let colors = handle
			.theme
			.with_value(|theme| theme.node_css(zone, node.tone, active));
		format!("{} {colors}", node.cell.to_css())
	};
	let icon = (!node.icon.is_empty()).then(|| {
		let color = move || {
			let active = handle.is_active(node.id);
			let color = handle
				.theme
				.with_value(|theme| theme.icon_color(zone, node.tone, active));
			format!("color: {};", color.to_css())
		};
		view! { <span class="node-icon" style=color>{node.icon}</span> }
	});

	if node.details.is_empty() {
		let class = if node.cell.column_span > 1 { "node node-wide" } else { "node" };
		return view! {
			<div id=node.dom_id() class=class style=style on:click=on_click>
				{icon}
				<span class="node-label">{node.label}</span>
			</div>
		}
		.into_any();
	}

	let details = node
		.details
		.iter()
		.map(|line| view! { <div class="node-detail">{*line}</div> })
		.collect_view();
	let chips: Vec<_> = child_nodes(node.id).collect();
	let chips = (!chips.is_empty()).then(|| {
		let views = chips
			.into_iter()
			.map(|chip| chip_view(chip, zone, handle))
			.collect_view();
		view! { <div class="node-chips">{views}</div> }
	});

	view! {
		<div id=node.dom_id() class="node node-card" style=style on:click=on_click>
			<div class="node-title">{node.label}</div>
			{details}
			{chips}
		</div>
	}
	.into_any()
}

/// Selectable chip nested inside a card; clicks stop at the chip.
fn chip_view(node: &'static NodeLayout, zone: Zone, handle: DiagramHandle) -> impl IntoView {
	let style = move || {
		let active = handle.is_active(node.id);
		handle.theme.with_value(|theme| theme.chip_css(zone, active))
	};
	view! {
		<div
			id=node.dom_id()
			class="node-chip"
			style=style
			on:click=move |ev: MouseEvent| {
				ev.stop_propagation();
				handle.select(node.id, node.anchor);
			}
		>
			{node.label}
		</div>
	}
}

fn tunnel_band(node: &'static NodeLayout, handle: DiagramHandle) -> impl IntoView {
	let style = move || {
		let active = handle.is_active(node.id);
		handle.theme.with_value(|theme| theme.tunnel_css(active))
	};
	view! {
		<div
			id=node.dom_id()
			class="tunnel-band"
			style=style
			on:click=move |_: MouseEvent| handle.select(node.id, node.anchor)
		>
			<span class="node-icon">{node.icon}</span>
			<span class="node-label">{node.label}</span>
			<span class="node-icon">"↓"</span>
		</div>
	}
}

fn info_card(handle: DiagramHandle) -> impl IntoView {
	let (background, border, heading) = handle.theme.with_value(|theme| {
		(
			theme.saas.panel.to_css(),
			theme.saas.border.to_css(),
			theme.saas.heading().to_css(),
		)
	});
	view! {
		<div class="info-card" style=format!("background: {background}; border: 1px solid {border};")>
			<span class="info-icon" style=format!("color: {heading};")>"ⓘ"</span>
			<div>
				<h3 style=format!("color: {heading};")>"Understanding the Architecture"</h3>
				<p>
					"The architecture consists of a SaaS platform and components deployed in the customer environment. "
					"The components communicate securely to enforce authorization policies across your applications and services. "
					"Click on any component in the diagram below to learn more about its role in the architecture."
				</p>
			</div>
		</div>
	}
}

fn legend(handle: DiagramHandle) -> impl IntoView {
	let entries = handle.theme.with_value(|theme| {
		[
			("●", theme.saas.accent, "SaaS Components"),
			("●", theme.customer.accent, "Customer Environment"),
			("●", theme.managed.accent, "Managed Services"),
			("⛁", theme.redis, "REDIS Storage"),
			("⛁", theme.postgres, "Postgres Storage"),
			("🛡", theme.teal, "Authorization Components"),
		]
	});
	let items = entries
		.into_iter()
		.map(|(glyph, color, label)| {
			view! {
				<div class="legend-item">
					<span class="legend-swatch" style=format!("color: {};", color.to_css())>{glyph}</span>
					<span>{label}</span>
				</div>
			}
		})
		.collect_view();

	view! {
		<div class="legend">
			<h3 class="panel-title">"Component Legend"</h3>
			<div class="legend-grid">{items}</div>
		</div>
	}
}
