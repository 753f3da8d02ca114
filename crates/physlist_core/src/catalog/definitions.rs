//! Built-in species definitions, grouped by family.
//!
//! Masses in MeV, lifetimes in ns (negative: stable), charges in units of e.

use crate::model::particle::{ParticleFamily, SpeciesDefinition};

const fn def(
    name: &'static str,
    family: ParticleFamily,
    pdg_encoding: i32,
    mass: f64,
    charge: f64,
    pdg_lifetime: f64,
    short_lived: bool,
) -> SpeciesDefinition {
    SpeciesDefinition {
        name,
        family,
        pdg_encoding,
        mass,
        charge,
        pdg_lifetime,
        short_lived,
    }
}

use ParticleFamily::{Baryon, Boson, Ion, Lepton, Meson, ShortLived};

const BOSONS: &[SpeciesDefinition] = &[
    def("gamma", Boson, 22, 0.0, 0.0, -1.0, false),
    def("opticalphoton", Boson, -22, 0.0, 0.0, -1.0, false),
    def("geantino", Boson, 0, 0.0, 0.0, -1.0, false),
    def("chargedgeantino", Boson, 0, 0.0, 1.0, -1.0, false),
];

const LEPTONS: &[SpeciesDefinition] = &[
    def("e-", Lepton, 11, 0.510_998_95, -1.0, -1.0, false),
    def("e+", Lepton, -11, 0.510_998_95, 1.0, -1.0, false),
    def("mu-", Lepton, 13, 105.658_375_5, -1.0, 2196.98, false),
    def("mu+", Lepton, -13, 105.658_375_5, 1.0, 2196.98, false),
    def("tau-", Lepton, 15, 1776.86, -1.0, 290.3e-6, false),
    def("tau+", Lepton, -15, 1776.86, 1.0, 290.3e-6, false),
    def("nu_e", Lepton, 12, 0.0, 0.0, -1.0, false),
    def("anti_nu_e", Lepton, -12, 0.0, 0.0, -1.0, false),
    def("nu_mu", Lepton, 14, 0.0, 0.0, -1.0, false),
    def("anti_nu_mu", Lepton, -14, 0.0, 0.0, -1.0, false),
];

const MESONS: &[SpeciesDefinition] = &[
    def("pi+", Meson, 211, 139.570_39, 1.0, 26.033, false),
    def("pi-", Meson, -211, 139.570_39, -1.0, 26.033, false),
    def("pi0", Meson, 111, 134.976_8, 0.0, 8.52e-8, false),
    def("kaon+", Meson, 321, 493.677, 1.0, 12.38, false),
    def("kaon-", Meson, -321, 493.677, -1.0, 12.38, false),
    def("kaon0L", Meson, 130, 497.611, 0.0, 51.16, false),
    def("kaon0S", Meson, 310, 497.611, 0.0, 0.089_54, false),
    def("eta", Meson, 221, 547.862, 0.0, 5.0e-10, false),
];

const BARYONS: &[SpeciesDefinition] = &[
    def("proton", Baryon, 2212, 938.272_088, 1.0, -1.0, false),
    def("anti_proton", Baryon, -2212, 938.272_088, -1.0, -1.0, false),
    def("neutron", Baryon, 2112, 939.565_42, 0.0, 878.4e9, false),
    def("anti_neutron", Baryon, -2112, 939.565_42, 0.0, 878.4e9, false),
    def("lambda", Baryon, 3122, 1115.683, 0.0, 0.263_2, false),
    def("sigma+", Baryon, 3222, 1189.37, 1.0, 0.080_18, false),
    def("sigma-", Baryon, 3112, 1197.449, -1.0, 0.147_9, false),
];

const IONS: &[SpeciesDefinition] = &[
    def("deuteron", Ion, 1_000_010_020, 1875.613, 1.0, -1.0, false),
    def("triton", Ion, 1_000_010_030, 2808.921, 1.0, -1.0, false),
    def("He3", Ion, 1_000_020_030, 2808.391, 2.0, -1.0, false),
    def("alpha", Ion, 1_000_020_040, 3727.379, 2.0, -1.0, false),
    def("GenericIon", Ion, 0, 931.494, 1.0, -1.0, false),
];

const SHORT_LIVED: &[SpeciesDefinition] = &[
    def("delta++", ShortLived, 2224, 1232.0, 2.0, 0.0, true),
    def("rho0", ShortLived, 113, 775.26, 0.0, 0.0, true),
    def("u_quark", ShortLived, 2, 2.16, 2.0 / 3.0, 0.0, true),
    def("gluon", ShortLived, 21, 0.0, 0.0, 0.0, true),
];

/// Definitions constructed for one family, in construction order.
pub fn definitions_for(family: ParticleFamily) -> &'static [SpeciesDefinition] {
    match family {
        ParticleFamily::Boson => BOSONS,
        ParticleFamily::Lepton => LEPTONS,
        ParticleFamily::Meson => MESONS,
        ParticleFamily::Baryon => BARYONS,
        ParticleFamily::Ion => IONS,
        ParticleFamily::ShortLived => SHORT_LIVED,
    }
}
