//! Sidebar index: one entry per node, grouped by zone, plus resource links.

use leptos::prelude::*;
use web_sys::MouseEvent;

use super::layout::INDEX;
use super::state::SelectionState;
use super::theme::Theme;

const RESOURCES: [&str; 3] = ["Documentation", "Deployment Guide", "API Reference"];

#[component]
pub fn IndexSidebar(
	selection: RwSignal<SelectionState>,
	#[prop(into)] docs_url: String,
) -> impl IntoView {
	let theme = Theme::default();

	let groups = INDEX
		.iter()
		.map(|group| {
			let zone = theme.zone(group.zone);
			let (accent, heading) = (zone.accent.to_css(), zone.heading().to_css());
			let entries = group
				.entries
				.iter()
				.map(|&(id, label)| {
					let active = move || selection.with(|state| state.is_active(id));
					view! {
						<li>
							<a
								href="#"
								class="index-entry"
								class:active=active
								on:click=move |ev: MouseEvent| {
									ev.prevent_default();
									selection.update(|state| state.select_via_index(id));
								}
							>
								{label}
							</a>
						</li>
					}
				})
				.collect_view();

			view! {
				<div class="index-group" style=format!("border-left: 4px solid {accent};")>
					<h4 style=format!("color: {heading};")>{group.heading}</h4>
					<ul>{entries}</ul>
				</div>
			}
		})
		.collect_view();

	let resources = RESOURCES
		.into_iter()
		.map(|label| {
			view! {
				<li>
					<a href=docs_url.clone() target="_blank" rel="noopener noreferrer">
						"↗ "
						{label}
					</a>
				</li>
			}
		})
		.collect_view();

	view! {
		<aside class="sidebar">
			<h3 class="panel-title">"Architecture Components"</h3>
			{groups}
			<div class="resources">
				<h4>"Resources"</h4>
				<ul>{resources}</ul>
			</div>
		</aside>
	}
}
