//! Positioned tooltip showing the selected component's descriptor.

use leptos::prelude::*;

use super::layout::TooltipPlacement;
use super::state::SelectionState;

fn relation_list(heading: &'static str, items: Vec<String>) -> Option<impl IntoView> {
	(!items.is_empty()).then(|| {
		let items = items
			.into_iter()
			.map(|item| view! { <li>{item}</li> })
			.collect_view();
		view! {
			<div class="tooltip-section">
				<h5>{heading}</h5>
				<ul>{items}</ul>
			</div>
		}
	})
}

/// Tooltip box for the selected node.
///
/// Hidden whenever `tooltip_visible` is false. The close glyph only hides the
/// box; the node stays selected.
#[component]
pub fn ComponentTooltip(
	selection: RwSignal<SelectionState>,
	#[prop(into)] docs_url: String,
	#[prop(default = true)] detailed: bool,
) -> impl IntoView {
	let docs_url = StoredValue::new(docs_url);
	let placement = move || {
		selection.with(|state| TooltipPlacement::for_anchor(state.tooltip_position).to_css())
	};
	let title = move || selection.with(|state| state.tooltip_content.title.clone());
	let description = move || selection.with(|state| state.tooltip_content.description.clone());
	let relations = move || {
		detailed.then(|| {
			let content = selection.with(|state| state.tooltip_content.clone());
			view! {
				{relation_list("Connects to", content.connects_to)}
				{relation_list("Incoming", content.data_flow.incoming)}
				{relation_list("Outgoing", content.data_flow.outgoing)}
			}
		})
	};

	view! {
		<Show when=move || selection.with(|state| state.tooltip_visible)>
			<div class="tooltip" style=placement>
				<div class="tooltip-header">
					<h4>{title}</h4>
					<button
						class="tooltip-close"
						on:click=move |_| selection.update(|state| state.dismiss_tooltip())
					>
						"✕"
					</button>
				</div>
				<p class="tooltip-description">{description}</p>
				{relations}
				<div class="tooltip-footer">
					<a
						href=move || docs_url.get_value()
						target="_blank"
						rel="noopener noreferrer"
					>
						"Learn more ↗"
					</a>
				</div>
			</div>
		</Show>
	}
}
