//! Descriptor table mapping node identifiers to tooltip text.
//!
//! The built-in table holds one entry for every node in the diagram. It is
//! built once at start-up (optionally patched by page configuration) and is
//! read-only afterwards.

use std::collections::HashMap;

use log::warn;
use serde::Deserialize;

use super::types::{ComponentDescriptor, DataFlow};

/// Raw table row: (id, title, description, connects to, incoming, outgoing).
type Entry = (
	&'static str,
	&'static str,
	&'static str,
	&'static [&'static str],
	&'static [&'static str],
	&'static [&'static str],
);

const ENTRIES: [Entry; 15] = [
	(
		"lb",
		"Load Balancer",
		"Distributes incoming traffic across multiple servers to ensure high availability and reliability.",
		&["OAuth", "PAP Services", "Cloud PDP"],
		&["Administrator and API traffic over HTTPS", "Agent connections from customer environments"],
		&["Routed requests to OAuth, PAP and Cloud PDP"],
	),
	(
		"oauth",
		"OAuth",
		"Handles authentication and provides secure tokens for authorization, enabling secure access to protected resources.",
		&["Load Balancer", "PAP Services", "Identity Provider (IDP)"],
		&["Token requests", "Federated identity assertions from the IDP"],
		&["Access tokens", "Token validation results"],
	),
	(
		"pap",
		"Policy Administration Point (PAP)",
		"Central management system for defining, storing, and managing access policies. Serves as the policy source of truth.",
		&["Postgres DB", "REDIS Store", "Agent Server", "Cloud PDP"],
		&["Policy authoring from the admin UI and APIs", "Agent registration and heartbeats"],
		&["Policy and configuration updates to agents", "Policy definitions persisted to Postgres"],
	),
	(
		"cloudPdp",
		"Cloud PDP",
		"Policy Decision Point in the cloud that evaluates access requests against policies and returns permit/deny decisions.",
		&["PAP Services", "REDIS Store", "Load Balancer"],
		&["Authorization requests", "Policy snapshots from the PAP"],
		&["Permit/deny decisions"],
	),
	(
		"postgres",
		"PostgreSQL Database",
		"Stores policy definitions, configurations, and administrative data for the platform.",
		&["PAP Services"],
		&["Policy and configuration writes"],
		&["Policy definitions and tenant configuration"],
	),
	(
		"saasRedis",
		"REDIS Cache (SaaS)",
		"High-performance cache used by services to optimize policy evaluation and decision-making.",
		&["PAP Services", "Cloud PDP"],
		&["Compiled policies", "Cached decision data"],
		&["Low-latency lookups for policy evaluation"],
	),
	(
		"tunnel",
		"Secured Communication Tunnel",
		"Encrypted connection between SaaS and customer environment that ensures secure and private data transfer.",
		&["Agent Server", "Agent"],
		&["Policy and configuration updates from the SaaS platform"],
		&["Agent status and audit events to the SaaS platform"],
	),
	(
		"agent",
		"Agent",
		"Lightweight component deployed in the customer environment that handles policy enforcement and communicates with the SaaS platform.",
		&["Secured Communication Tunnel", "PDP", "PIP Operator", "REDIS Store"],
		&["Policy updates through the secured tunnel"],
		&["Policies to the local PDP", "Status reports to the Agent Server"],
	),
	(
		"pip",
		"PIP Operator",
		"Policy Information Point that gathers additional attributes and contextual information needed for policy evaluation.",
		&["PDP", "Customer Data Stores", "Identity Provider (IDP)"],
		&["Attribute queries from the PDP"],
		&["User and resource attributes fetched from customer data stores"],
	),
	(
		"pdp",
		"Policy Decision Point",
		"Evaluates access requests against established policies and determines whether access should be granted or denied.",
		&["Agent", "PIP Operator", "Authorizers", "REDIS Store"],
		&["Authorization requests from authorizers", "Policies from the agent"],
		&["Permit/deny decisions", "Attribute lookups to the PIP"],
	),
	(
		"authorizers",
		"Authorizers",
		"Components that enforce authorization decisions at various access points within the customer environment.",
		&["PDP", "Customer Apps/Services"],
		&["Access attempts from applications and gateways"],
		&["Authorization requests to the PDP", "Enforced allow/deny outcomes"],
	),
	(
		"dataStores",
		"Customer Data Stores",
		"Customer databases and data repositories that may require access control and policy enforcement.",
		&["PIP Operator", "Authorizers"],
		&["Filtered queries from authorizers"],
		&["Attribute data to the PIP"],
	),
	(
		"customerApps",
		"Customer Apps/Services",
		"Applications and services that integrate with authorization for access control capabilities.",
		&["Authorizers", "Identity Provider (IDP)"],
		&["User requests"],
		&["Access checks through authorizers"],
	),
	(
		"idp",
		"Identity Provider (IDP)",
		"Manages user identities and authentication, providing verified identity information to the authorization system.",
		&["OAuth", "PIP Operator", "Customer Apps/Services"],
		&["Authentication requests"],
		&["Identity tokens and user attributes"],
	),
	(
		"customerRedis",
		"Customer REDIS Store",
		"Customer-managed REDIS instance used for high-performance caching and data access.",
		&["Agent", "PDP"],
		&["Policy and decision cache writes"],
		&["Cached policies and attributes for fast evaluation"],
	),
];

fn owned(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

/// Partial replacement for one table entry, supplied by page configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptorOverride {
	pub id: String,
	pub title: Option<String>,
	pub description: Option<String>,
	pub connects_to: Option<Vec<String>>,
	pub data_flow: Option<DataFlow>,
}

/// Read-only lookup from node identifier to descriptor.
#[derive(Clone, Debug)]
pub struct DescriptorTable {
	entries: HashMap<String, ComponentDescriptor>,
}

impl DescriptorTable {
	/// The built-in table with one entry per diagram node.
	pub fn builtin() -> Self {
		let entries = ENTRIES
			.iter()
			.map(|&(id, title, description, connects_to, incoming, outgoing)| {
				let descriptor = ComponentDescriptor {
					id: id.to_string(),
					title: title.to_string(),
					description: description.to_string(),
					connects_to: owned(connects_to),
					data_flow: DataFlow {
						incoming: owned(incoming),
						outgoing: owned(outgoing),
					},
				};
				(id.to_string(), descriptor)
			})
			.collect();
		Self { entries }
	}

	/// Built-in table patched with configuration overrides.
	///
	/// Overrides naming an unknown id are logged and skipped, so the table
	/// never grows beyond the nodes the diagram can show.
	pub fn with_overrides(overrides: &[DescriptorOverride]) -> Self {
		let mut table = Self::builtin();
		for patch in overrides {
			let Some(entry) = table.entries.get_mut(&patch.id) else {
				warn!("authz-architecture: ignoring override for unknown component '{}'", patch.id);
				continue;
			};
			if let Some(title) = &patch.title {
				entry.title = title.clone();
			}
			if let Some(description) = &patch.description {
				entry.description = description.clone();
			}
			if let Some(connects_to) = &patch.connects_to {
				entry.connects_to = connects_to.clone();
			}
			if let Some(data_flow) = &patch.data_flow {
				entry.data_flow = data_flow.clone();
			}
		}
		table
	}

	pub fn get(&self, id: &str) -> Option<&ComponentDescriptor> {
		self.entries.get(id)
	}

	/// Descriptor for `id`, or the placeholder when the id is unknown.
	pub fn lookup(&self, id: &str) -> ComponentDescriptor {
		self.get(id)
			.cloned()
			.unwrap_or_else(ComponentDescriptor::placeholder)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Default for DescriptorTable {
	fn default() -> Self {
		Self::builtin()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn builtin_table_has_fifteen_unique_entries() {
		let table = DescriptorTable::builtin();
		assert_eq!(table.len(), 15);
		for (id, ..) in ENTRIES {
			assert_eq!(table.get(id).map(|d| d.id.as_str()), Some(id));
		}
	}

	#[test]
	fn pap_links_to_postgres() {
		let pap = DescriptorTable::builtin().lookup("pap");
		assert_eq!(pap.title, "Policy Administration Point (PAP)");
		assert!(pap.connects_to.iter().any(|c| c == "Postgres DB"));
		assert!(!pap.data_flow.is_empty());
	}

	#[test]
	fn unknown_id_yields_placeholder() {
		let table = DescriptorTable::builtin();
		assert_eq!(table.get("gateway"), None);
		assert_eq!(table.lookup("gateway"), ComponentDescriptor::placeholder());
	}

	#[test]
	fn override_patches_only_given_fields() {
		let original = DescriptorTable::builtin().lookup("idp");
		let table = DescriptorTable::with_overrides(&[DescriptorOverride {
			id: "idp".to_string(),
			title: Some("Okta".to_string()),
			..Default::default()
		}]);
		let patched = table.lookup("idp");
		assert_eq!(patched.title, "Okta");
		assert_eq!(patched.description, original.description);
		assert_eq!(patched.connects_to, original.connects_to);
		assert_eq!(patched.data_flow, original.data_flow);
	}

	#[test]
	fn override_for_unknown_id_is_ignored() {
		let table = DescriptorTable::with_overrides(&[DescriptorOverride {
			id: "gateway".to_string(),
			title: Some("API Gateway".to_string()),
			..Default::default()
		}]);
		assert_eq!(table.len(), 15);
		assert_eq!(table.get("gateway"), None);
	}
}
