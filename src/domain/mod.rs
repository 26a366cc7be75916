// Domain layer: the demo container, languages and their comment rules, strip results.
// No external dependencies beyond std/serde.

pub mod language;
pub mod model;
pub mod ports;
