//! Units module
//!
//! Static unit, container and density tables plus unit-token resolution.

pub mod catalog;
pub mod containers;
pub mod density;
pub mod resolver;

pub use catalog::{Category, ContainerKind, UnitCategory, UnitDef, CATEGORIES};
pub use containers::{container_volume, find_convention, ContainerConvention, METRIC};
pub use density::find_density;
pub use resolver::{find_category, find_unit, get_si, resolve_unit, unit_key, ResolvedUnit};
