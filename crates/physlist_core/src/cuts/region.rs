//! Region provider contract and an in-memory implementation.

use std::collections::BTreeMap;

/// Name of the region that receives override thresholds.
pub const SENSITIVE_REGION: &str = "SensitiveRegion";

/// Per-species production thresholds (canonical length), keyed by species name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductionCuts {
    cuts: BTreeMap<String, f64>,
}

impl ProductionCuts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_production_cut(&mut self, value: f64, species: &str) {
        self.cuts.insert(species.to_string(), value);
    }

    pub fn production_cut(&self, species: &str) -> Option<f64> {
        self.cuts.get(species).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.cuts.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

/// Named spatial partition with optional override thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub name: String,
    pub production_cuts: Option<ProductionCuts>,
}

impl Region {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            production_cuts: None,
        }
    }
}

/// Geometry-side region lookup consumed by the cut engine.
pub trait RegionStore {
    fn region_count(&self) -> usize;
    fn region_mut(&mut self, name: &str) -> Option<&mut Region>;
}

/// Region store backed by a vector, used by the CLI and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegionStore {
    regions: Vec<Region>,
}

impl InMemoryRegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding only the default world region.
    pub fn with_world() -> Self {
        let mut store = Self::new();
        store.add_region("DefaultRegionForTheWorld");
        store
    }

    /// Adds a region unless one with the same name exists.
    pub fn add_region(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.region(&name).is_none() {
            self.regions.push(Region::new(name));
        }
    }

    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.name == name)
    }
}

impl RegionStore for InMemoryRegionStore {
    fn region_count(&self) -> usize {
        self.regions.len()
    }

    fn region_mut(&mut self, name: &str) -> Option<&mut Region> {
        self.regions.iter_mut().find(|region| region.name == name)
    }
}
