//! In-memory package.json
//!
//! Phases merge into one manifest; the pipeline serializes it once at the end.

use crate::error::Result;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const DEPENDENCIES: &str = "dependencies";
pub const DEV_DEPENDENCIES: &str = "devDependencies";
pub const SCRIPTS: &str = "scripts";

/// Dependency and script declarations of the generated project
#[derive(Debug, Clone, PartialEq)]
pub struct PackageManifest {
    fields: Map<String, Value>,
    modified: bool,
}

impl PackageManifest {
    /// Start from an existing package.json, or from nothing
    pub fn parse(existing: Option<&str>) -> Result<Self> {
        let fields = match existing {
            Some(text) if !text.trim().is_empty() => serde_json::from_str(text)?,
            _ => Map::new(),
        };
        Ok(Self {
            fields,
            modified: false,
        })
    }

    /// Insert a top-level field only when it is absent
    pub fn set_default(&mut self, key: &str, value: impl Into<Value>) {
        if !self.fields.contains_key(key) {
            self.fields.insert(key.to_string(), value.into());
            self.modified = true;
        }
    }

    pub fn add_dependencies(&mut self, deps: &[(&str, &str)]) {
        self.merge_sorted(DEPENDENCIES, deps);
    }

    pub fn add_dev_dependencies(&mut self, deps: &[(&str, &str)]) {
        self.merge_sorted(DEV_DEPENDENCIES, deps);
    }

    /// Add scripts; a later phase may redefine the command of an existing script
    pub fn add_scripts(&mut self, scripts: &[(&str, &str)]) {
        let section = self.section_mut(SCRIPTS);
        let mut changed = false;
        for (name, command) in scripts {
            let value = Value::String(command.to_string());
            if section.get(*name) != Some(&value) {
                section.insert(name.to_string(), value);
                changed = true;
            }
        }
        self.modified |= changed;
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn dependency(&self, name: &str) -> Option<&str> {
        self.entry(DEPENDENCIES, name)
    }

    pub fn dev_dependency(&self, name: &str) -> Option<&str> {
        self.entry(DEV_DEPENDENCIES, name)
    }

    pub fn script(&self, name: &str) -> Option<&str> {
        self.entry(SCRIPTS, name)
    }

    /// Whether any phase changed the manifest since it was parsed
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Two-space indented JSON with a trailing newline
    pub fn to_json_string(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&self.fields)?;
        out.push('\n');
        Ok(out)
    }

    fn entry(&self, section: &str, name: &str) -> Option<&str> {
        self.fields
            .get(section)
            .and_then(|s| s.get(name))
            .and_then(Value::as_str)
    }

    fn section_mut(&mut self, key: &str) -> &mut Map<String, Value> {
        let slot = self
            .fields
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        match slot {
            Value::Object(map) => map,
            _ => unreachable!("section was just replaced with an object"),
        }
    }

    fn merge_sorted(&mut self, key: &str, deps: &[(&str, &str)]) {
        let section = self.section_mut(key);
        let mut sorted: BTreeMap<String, Value> = std::mem::take(section).into_iter().collect();
        let mut changed = false;
        for (name, version) in deps {
            let value = Value::String(version.to_string());
            if sorted.get(*name) != Some(&value) {
                sorted.insert(name.to_string(), value);
                changed = true;
            }
        }
        *section = sorted.into_iter().collect();
        self.modified |= changed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_earlier_keys() {
        let mut manifest = PackageManifest::parse(None).unwrap();
        manifest.add_dependencies(&[("next", "^16.0.1"), ("react", "^19.2.0")]);
        manifest.add_dependencies(&[("@prisma/client", "^5.7.0")]);

        assert_eq!(manifest.dependency("next"), Some("^16.0.1"));
        assert_eq!(manifest.dependency("react"), Some("^19.2.0"));
        assert_eq!(manifest.dependency("@prisma/client"), Some("^5.7.0"));
    }

    #[test]
    fn test_existing_fields_are_preserved() {
        let existing = r#"{"name":"legacy","version":"2.0.0","dependencies":{"left-pad":"1.0.0"}}"#;
        let mut manifest = PackageManifest::parse(Some(existing)).unwrap();
        manifest.set_default("name", "demo");
        manifest.set_default("version", "0.1.0");
        manifest.add_dependencies(&[("next", "^16.0.1")]);

        assert_eq!(manifest.get("name").and_then(Value::as_str), Some("legacy"));
        assert_eq!(manifest.get("version").and_then(Value::as_str), Some("2.0.0"));
        assert_eq!(manifest.dependency("left-pad"), Some("1.0.0"));
        assert_eq!(manifest.dependency("next"), Some("^16.0.1"));
    }

    #[test]
    fn test_dependencies_serialize_sorted() {
        let mut manifest = PackageManifest::parse(None).unwrap();
        manifest.add_dependencies(&[("zod", "^3.24.1"), ("axios", "^1.7.9")]);
        let json = manifest.to_json_string().unwrap();
        let axios = json.find("axios").unwrap();
        let zod = json.find("zod").unwrap();
        assert!(axios < zod);
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn test_scripts_may_be_redefined_but_not_dropped() {
        let mut manifest = PackageManifest::parse(None).unwrap();
        manifest.add_scripts(&[("dev", "next dev"), ("lint", "next lint")]);
        manifest.add_scripts(&[("dev", "next dev --turbo")]);

        assert_eq!(manifest.script("dev"), Some("next dev --turbo"));
        assert_eq!(manifest.script("lint"), Some("next lint"));
    }

    #[test]
    fn test_unchanged_manifest_is_not_modified() {
        let existing = r#"{"dependencies":{"next":"^16.0.1"}}"#;
        let mut manifest = PackageManifest::parse(Some(existing)).unwrap();
        manifest.add_dependencies(&[("next", "^16.0.1")]);
        assert!(!manifest.is_modified());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(PackageManifest::parse(Some("{ not json")).is_err());
    }
}
