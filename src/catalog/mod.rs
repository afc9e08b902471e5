//! Role catalog, target levels, and roadmap text

pub mod roadmap;
pub mod roles;
pub mod targets;

pub use roadmap::roadmap_for;
pub use roles::{CatalogError, RoleCatalog};
pub use targets::{TargetLevels, DEFAULT_TARGET};
