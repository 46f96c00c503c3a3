//! Manifest decoding adapters.

mod yaml;

pub use yaml::YamlManifestParser;
