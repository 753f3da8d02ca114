//! Particle catalog.
//!
//! # Responsibility
//! - Own every registered species and its process pipeline.
//! - Provide an ordered, restartable enumeration over all species.
//!
//! # Invariants
//! - Species names are unique; registering a duplicate name is a no-op.
//! - Enumeration order is registration order and never changes.

mod definitions;

pub use definitions::definitions_for;

use crate::model::particle::{ParticleFamily, ParticleSpecies, SpeciesDefinition};
use log::trace;

/// Ordered collection of all known species.
#[derive(Debug, Clone, Default)]
pub struct ParticleCatalog {
    species: Vec<ParticleSpecies>,
}

impl ParticleCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with every built-in family constructed.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for family in ParticleFamily::ALL {
            catalog.construct_family(family);
        }
        catalog
    }

    /// Registers the built-in definitions of one family.
    ///
    /// Returns how many species were newly added.
    pub fn construct_family(&mut self, family: ParticleFamily) -> usize {
        let added = definitions_for(family)
            .iter()
            .filter(|definition| self.register(definition))
            .count();
        trace!(
            "event=family_constructed module=catalog family={} added={}",
            family.as_str(),
            added
        );
        added
    }

    /// Registers one species. Returns `false` when the name is taken.
    pub fn register(&mut self, definition: &SpeciesDefinition) -> bool {
        if self.find(definition.name).is_some() {
            return false;
        }
        self.species.push(ParticleSpecies::new(definition));
        true
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    /// Starts a fresh enumeration from the first species.
    pub fn iter(&self) -> impl Iterator<Item = &ParticleSpecies> {
        self.species.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ParticleSpecies> {
        self.species.iter_mut()
    }

    pub fn find(&self, name: &str) -> Option<&ParticleSpecies> {
        self.species.iter().find(|species| species.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ParticleSpecies> {
        self.species.iter_mut().find(|species| species.name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.species.iter().map(ParticleSpecies::name).collect()
    }
}
