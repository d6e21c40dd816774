//! Comparing the current catalog against a previously released one.
//!
//! Only used for reporting; nothing here affects the generated file.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use altv_natives_core::{Catalog, normalize};

use crate::error::GenerateError;

/// Result of comparing the current natives against the previous release.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffReport {
    /// Natives in the current catalog.
    pub total: usize,
    /// Whether a previous catalog was found at all.
    pub has_previous: bool,
    /// Normalized names absent from the previous catalog, in catalog order.
    pub new_names: Vec<String>,
}

/// Normalized names of every native, in catalog order.
pub fn collect_names(catalog: &Catalog) -> Vec<String> {
    catalog.natives().map(|n| normalize(&n.name)).collect()
}

/// Names from `current` that are not in `previous`.
pub fn diff(current: &[String], previous: &HashSet<String>) -> Vec<String> {
    current
        .iter()
        .filter(|name| !previous.contains(*name))
        .cloned()
        .collect()
}

/// Normalized names from a previously cached catalog.
///
/// Returns `None` if the file does not exist.
pub fn load_previous_names(path: &Path) -> Result<Option<HashSet<String>>, GenerateError> {
    if !path.exists() {
        return Ok(None);
    }
    let bytes = fs::read(path).map_err(GenerateError::at(path))?;
    let catalog = Catalog::from_slice(&bytes)?;
    Ok(Some(collect_names(&catalog).into_iter().collect()))
}

/// Build the report for `catalog` against the catalog stored at `previous_path`.
pub fn report(catalog: &Catalog, previous_path: &Path) -> Result<DiffReport, GenerateError> {
    let current = collect_names(catalog);
    let previous = load_previous_names(previous_path)?;
    let has_previous = previous.is_some();
    let new_names = diff(&current, &previous.unwrap_or_default());

    Ok(DiffReport {
        total: current.len(),
        has_previous,
        new_names,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_diff_keeps_current_order() {
        let current = names(&["wait", "playerPedId", "getEntityCoords", "setEntityCoords"]);
        let previous: HashSet<String> = names(&["wait", "getEntityCoords"]).into_iter().collect();
        assert_eq!(
            diff(&current, &previous),
            names(&["playerPedId", "setEntityCoords"])
        );
    }

    #[test]
    fn test_diff_against_empty_is_everything() {
        let current = names(&["wait", "playerPedId"]);
        assert_eq!(diff(&current, &HashSet::new()), current);
    }

    #[test]
    fn test_previous_names_are_normalized() {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("natives.release-old.json");
        std::fs::write(
            &old,
            r#"{"PLAYER":{"0x1":{"name":"_PLAYER_PED_ID","params":[],"results":"Ped"}}}"#,
        )
        .unwrap();

        let previous = load_previous_names(&old).unwrap().unwrap();
        assert!(previous.contains("playerPedId"));
    }

    #[test]
    fn test_report_without_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::parse(
            r#"{"SYSTEM":{"0x1":{"name":"WAIT","params":[],"results":"void"}}}"#,
        )
        .unwrap();

        let report = report(&catalog, &dir.path().join("missing.json")).unwrap();
        assert_eq!(report.total, 1);
        assert!(!report.has_previous);
        assert_eq!(report.new_names, names(&["wait"]));
    }
}
