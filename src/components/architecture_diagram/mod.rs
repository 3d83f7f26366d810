//! Interactive architecture diagram of the authorization platform.
//!
//! Renders the SaaS platform, the customer environment and the customer's
//! managed services as clickable nodes. Clicking a node opens a positioned
//! tooltip with the node's descriptor:
//! - Title and description
//! - Related components ("connects to")
//! - Incoming and outgoing data flow
//!
//! The sidebar index highlights a node and scrolls it into view without
//! opening the tooltip.
//!
//! # Example
//!
//! ```ignore
//! use authz_architecture::components::architecture_diagram::{ArchitectureDiagram, DescriptorTable};
//!
//! view! {
//!     <ArchitectureDiagram
//!         table=DescriptorTable::builtin()
//!         docs_url="https://docs.example.com/architecture"
//!     />
//! }
//! ```

mod catalog;
mod component;
pub mod layout;
mod sidebar;
mod state;
pub mod theme;
mod tooltip;
mod types;

pub use catalog::{DescriptorOverride, DescriptorTable};
pub use component::ArchitectureDiagram;
pub use state::SelectionState;
pub use types::{ComponentDescriptor, DataFlow, TooltipPosition, Zone};
