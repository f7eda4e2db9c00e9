//! Artifact table - the release artifacts batch mode knows about
//!
//! Each project maps to an ordered list of paths relative to the project's
//! checkout. `{version}` is replaced with the release version.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ProjectName, ReleaseVersion};

pub const VERSION_PLACEHOLDER: &str = "{version}";

/// Artifact templates of a single project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactSpec {
    /// Lowercase project name
    pub project: &'static str,
    pub templates: &'static [&'static str],
}

impl ArtifactSpec {
    /// Substitute `version` into every template, in table order.
    pub fn render(&self, version: &ReleaseVersion) -> Vec<String> {
        self.templates
            .iter()
            .map(|t| t.replace(VERSION_PLACEHOLDER, version.as_str()))
            .collect()
    }
}

const BUILTIN: &[ArtifactSpec] = &[
    ArtifactSpec {
        project: "samba",
        templates: &[
            "web/war/target/admin.web-{version}.war",
            "studentgui/target/studentgui.portal-{version}.war",
            "database/target/database-{version}-database.zip",
        ],
    },
    ArtifactSpec {
        project: "bris",
        templates: &[
            "admin/target/bris-admin-{version}.war",
            "service/target/bris-service-{version}.war",
            "portal/target/bris-portal-{version}.war",
            "database/target/database-{version}-database.zip",
        ],
    },
];

/// Lookup table from project name to artifact templates
#[derive(Debug, Clone, Copy)]
pub struct ArtifactTable {
    specs: &'static [ArtifactSpec],
}

impl ArtifactTable {
    /// The table compiled into the binary
    pub fn builtin() -> Self {
        Self { specs: BUILTIN }
    }

    /// Case-insensitive lookup
    pub fn get(&self, project: &ProjectName) -> Option<&'static ArtifactSpec> {
        let key = project.lower();
        self.specs.iter().find(|spec| spec.project == key)
    }

    /// Lowercase names of every supported project, in table order
    pub fn projects(&self) -> impl Iterator<Item = &'static str> {
        self.specs.iter().map(|spec| spec.project)
    }

    /// Absolute source paths for `project` at `version`.
    ///
    /// Returns `None` when the project has no entry.
    pub fn resolve(
        &self,
        project: &ProjectName,
        version: &ReleaseVersion,
        working_dir: &Path,
    ) -> Option<Vec<PathBuf>> {
        let spec = self.get(project)?;
        Some(
            spec.render(version)
                .into_iter()
                .map(|rel| working_dir.join(rel))
                .collect(),
        )
    }
}

impl Default for ArtifactTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str) -> ProjectName {
        ProjectName::new(name).unwrap()
    }

    #[test]
    fn samba_resolves_three_artifacts_in_order() {
        let files = ArtifactTable::builtin()
            .resolve(&project("samba"), &"2.7.3".into(), Path::new("/work"))
            .unwrap();
        assert_eq!(
            files,
            vec![
                PathBuf::from("/work/web/war/target/admin.web-2.7.3.war"),
                PathBuf::from("/work/studentgui/target/studentgui.portal-2.7.3.war"),
                PathBuf::from("/work/database/target/database-2.7.3-database.zip"),
            ]
        );
    }

    #[test]
    fn bris_resolves_four_artifacts() {
        let files = ArtifactTable::builtin()
            .resolve(&project("bris"), &"5.1".into(), Path::new("/w"))
            .unwrap();
        assert_eq!(files.len(), 4);
        assert_eq!(files[0], PathBuf::from("/w/admin/target/bris-admin-5.1.war"));
        assert_eq!(
            files[3],
            PathBuf::from("/w/database/target/database-5.1-database.zip")
        );
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let table = ArtifactTable::builtin();
        assert!(table.get(&project("SAMBA")).is_some());
        assert!(table.get(&project("Bris")).is_some());
    }

    #[test]
    fn unknown_project_resolves_to_none() {
        let table = ArtifactTable::builtin();
        assert!(table
            .resolve(&project("helse"), &"1.0".into(), Path::new("/w"))
            .is_none());
    }

    #[test]
    fn every_template_carries_the_placeholder() {
        for spec in BUILTIN {
            for template in spec.templates {
                assert!(template.contains(VERSION_PLACEHOLDER), "{template}");
            }
        }
    }

    #[test]
    fn projects_lists_table_order() {
        let names: Vec<_> = ArtifactTable::builtin().projects().collect();
        assert_eq!(names, vec!["samba", "bris"]);
    }
}
