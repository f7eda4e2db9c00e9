//! Stage Use Case
//!
//! Orchestrates the staging flow:
//! 1. Check the deployment volume is mounted
//! 2. Resolve the version (argument or descriptor)
//! 3. Provision `<PROJECT>/<YEAR>/<DATE>--<version>`
//! 4. Resolve the files to copy (single file or artifact table)
//! 5. Copy each file, confirming overwrites
//!
//! The first fatal error stops the run; nothing is rolled back.

use std::path::Path;
use std::sync::Arc;

use crate::config::StagingConfig;
use crate::domain::entities::ArtifactTable;
use crate::domain::ports::{
    AutoConfirmer, ConfirmPrompt, Confirmer, FileSystem, NoopEventSink, StageEvent,
    StageEventSink,
};
use crate::domain::services::resolve_version;
use crate::domain::value_objects::{
    DeclinePolicy, DestinationPath, Invocation, ReleaseVersion, UnknownProjectPolicy,
};
use crate::error::{StageError, StageResult};

use super::options::StageOptions;
use super::result::StageReport;

/// Stage use case - parameterized by its file system port.
pub struct StageUseCase<FS>
where
    FS: FileSystem,
{
    file_system: FS,
    config: StagingConfig,
    artifacts: ArtifactTable,
}

impl<FS> StageUseCase<FS>
where
    FS: FileSystem,
{
    pub fn new(file_system: FS, config: StagingConfig, artifacts: ArtifactTable) -> Self {
        Self {
            file_system,
            config,
            artifacts,
        }
    }

    pub fn config(&self) -> &StagingConfig {
        &self.config
    }

    pub fn file_system(&self) -> &FS {
        &self.file_system
    }

    /// Run without prompts or progress output (every question is answered yes).
    pub fn execute(
        &self,
        invocation: &Invocation,
        options: &StageOptions,
    ) -> StageResult<StageReport> {
        self.execute_full(
            invocation,
            options,
            Arc::new(NoopEventSink),
            Arc::new(AutoConfirmer),
        )
    }

    /// Run with progress events and an operator (or scripted) confirmer.
    pub fn execute_full(
        &self,
        invocation: &Invocation,
        options: &StageOptions,
        events: Arc<dyn StageEventSink>,
        confirmer: Arc<dyn Confirmer>,
    ) -> StageResult<StageReport> {
        self.check_mount(events.as_ref())?;

        let version = self.resolve_version(invocation, events.as_ref())?;
        let destination = DestinationPath::new(&self.config, &invocation.project, &version);
        let mut report = StageReport::new(destination.clone(), version.clone());

        self.provision(&destination, &mut report, events.as_ref(), confirmer.as_ref())?;

        let sources = match &invocation.file {
            Some(file) => vec![file.clone()],
            None => {
                match self
                    .artifacts
                    .resolve(&invocation.project, &version, &self.config.working_dir)
                {
                    Some(files) => files,
                    None => {
                        events.on_event(StageEvent::UnsupportedProject {
                            project: invocation.project.upper(),
                        });
                        if options.unknown_project == UnknownProjectPolicy::Fail {
                            return Err(StageError::UnsupportedProject {
                                project: invocation.project.upper(),
                            });
                        }
                        report.unsupported_project = true;
                        Vec::new()
                    }
                }
            }
        };

        for source in &sources {
            self.copy_file(
                source,
                &destination,
                options.on_decline,
                &mut report,
                events.as_ref(),
                confirmer.as_ref(),
            )?;
        }

        Ok(report)
    }

    fn check_mount(&self, events: &dyn StageEventSink) -> StageResult<()> {
        let mount_point = self.config.mount_point();
        events.on_event(StageEvent::CheckingVolume {
            volume: self.config.volume_name.clone(),
            mount_point: mount_point.clone(),
        });

        if !self.file_system.is_dir(&mount_point) {
            return Err(StageError::VolumeNotMounted {
                volume: self.config.volume_name.clone(),
                mount_point,
            });
        }
        Ok(())
    }

    fn resolve_version(
        &self,
        invocation: &Invocation,
        events: &dyn StageEventSink,
    ) -> StageResult<ReleaseVersion> {
        if let Some(version) = &invocation.version {
            events.on_event(StageEvent::VersionResolved {
                version: version.to_string(),
                from_descriptor: false,
            });
            return Ok(version.clone());
        }

        let descriptor = self.config.descriptor_path();
        events.on_event(StageEvent::ReadingVersion {
            descriptor: descriptor.clone(),
        });
        let version = resolve_version(&self.file_system, &descriptor)?;
        events.on_event(StageEvent::VersionResolved {
            version: version.to_string(),
            from_descriptor: true,
        });
        Ok(version)
    }

    /// Ensure the three destination levels exist, top-down.
    ///
    /// Only the project level asks first; year and release folders are
    /// created as needed.
    fn provision(
        &self,
        destination: &DestinationPath,
        report: &mut StageReport,
        events: &dyn StageEventSink,
        confirmer: &dyn Confirmer,
    ) -> StageResult<()> {
        events.on_event(StageEvent::Navigating {
            destination: destination.release_dir(),
        });

        let [project_dir, year_dir, release_dir] = destination.levels();

        if !self.file_system.is_dir(&project_dir) {
            events.on_event(StageEvent::DirectoryMissing {
                path: project_dir.clone(),
            });
            let answer = confirmer.confirm(&ConfirmPrompt::CreateDirectory { path: &project_dir });
            if !answer.is_accepted() {
                return Err(StageError::DirectoryCreationDeclined { path: project_dir });
            }
            self.create_dir(&project_dir, report, events)?;
        }

        for dir in [year_dir, release_dir] {
            if !self.file_system.is_dir(&dir) {
                self.create_dir(&dir, report, events)?;
            }
        }
        Ok(())
    }

    fn create_dir(
        &self,
        path: &Path,
        report: &mut StageReport,
        events: &dyn StageEventSink,
    ) -> StageResult<()> {
        self.file_system
            .create_dir(path)
            .map_err(|source| StageError::DirectoryCreationFailed {
                path: path.to_path_buf(),
                source,
            })?;
        events.on_event(StageEvent::DirectoryCreated {
            path: path.to_path_buf(),
        });
        report.created_dirs.push(path.to_path_buf());
        Ok(())
    }

    fn copy_file(
        &self,
        source: &Path,
        destination: &DestinationPath,
        on_decline: DeclinePolicy,
        report: &mut StageReport,
        events: &dyn StageEventSink,
        confirmer: &dyn Confirmer,
    ) -> StageResult<()> {
        events.on_event(StageEvent::CopyStarted {
            source: source.to_path_buf(),
        });

        if !self.file_system.is_file(source) {
            return Err(StageError::SourceFileNotFound {
                path: source.to_path_buf(),
            });
        }

        let target = destination.target_for(source);
        if self.file_system.exists(&target) {
            events.on_event(StageEvent::FileExists {
                target: target.clone(),
            });
            let answer = confirmer.confirm(&ConfirmPrompt::ReplaceFile { path: &target });
            if !answer.is_accepted() {
                return match on_decline {
                    DeclinePolicy::Skip => {
                        events.on_event(StageEvent::FileSkipped {
                            target: target.clone(),
                        });
                        report.skipped.push(target);
                        Ok(())
                    }
                    DeclinePolicy::Abort => Err(StageError::OverwriteDeclined { path: target }),
                };
            }
        }

        self.file_system
            .copy(source, &target)
            .map_err(|err| StageError::CopyFailed {
                from: source.to_path_buf(),
                to: target.clone(),
                source: err,
            })?;
        events.on_event(StageEvent::FileCopied {
            source: source.to_path_buf(),
            target: target.clone(),
        });
        report.copied.push(target);
        Ok(())
    }
}
