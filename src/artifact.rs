// Copyright 2025 Chisomo Makombo Sakala
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use crate::error::RunError;
use std::fmt;
use std::path::Path;
use std::path::PathBuf;

/// Suffix appended to the final name of a packaged bootable jar.
pub const BOOTABLE_SUFFIX: &str = "bootable";

/// Purpose tag used when the `run` goal resolves its artifact.
pub const RUN_PURPOSE: &str = "run";

/// Identity and layout of the project that produced the bootable jar.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectContext {
  /// Directory the build output directory is resolved against.
  pub base_dir: PathBuf,
  pub group_id: String,
  pub artifact_id: String,
  pub version: String,
  /// Overrides the `<artifact_id>-<version>` base name of packaged files.
  pub final_name: Option<String>,
  /// Build output directory, relative to `base_dir` unless absolute.
  pub build_directory: PathBuf,
}

impl ProjectContext {
  /// `group:artifact`, as shown when the goal is skipped.
  pub fn id(&self) -> String {
    format!("{}:{}", self.group_id, self.artifact_id)
  }

  pub fn output_directory(&self) -> PathBuf {
    self.base_dir.join(&self.build_directory)
  }

  /// The name the package step gives the bootable jar by default.
  pub fn default_artifact_name(&self) -> Result<String, RunError> {
    let final_name = match &self.final_name {
      Some(name) if !name.is_empty() => name.clone(),
      _ => {
        if self.artifact_id.is_empty() || self.version.is_empty() {
          return Err(RunError::UnknownArtifactName);
        }
        format!("{}-{}", self.artifact_id, self.version)
      }
    };

    Ok(format!("{final_name}-{BOOTABLE_SUFFIX}.jar"))
  }

  /// Where the bootable jar is expected to be. Existence is not checked.
  pub fn candidate_artifact_path(&self, jar_file_name: Option<&str>) -> Result<PathBuf, RunError> {
    let name = match jar_file_name {
      Some(name) if !name.is_empty() => name.to_string(),
      _ => self.default_artifact_name()?,
    };

    Ok(self.output_directory().join(name))
  }
}

/// A bootable jar known to exist on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactLocation {
  pub path: PathBuf,
  /// `group:artifact:version`, for diagnostics only.
  pub coordinates: String,
  pub purpose: String,
}

impl fmt::Display for ArtifactLocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} ({})", self.path.display(), self.coordinates)
  }
}

/// Locates the bootable jar for `purpose`.
///
/// An explicit `jar_file_name` is looked up in the project's output
/// directory; otherwise the default packaged name is used. A missing file is
/// fatal: it means the project was never packaged.
pub fn resolve_artifact(
  jar_file_name: Option<&str>,
  project: &ProjectContext,
  purpose: &str,
) -> Result<ArtifactLocation, RunError> {
  let path = project.candidate_artifact_path(jar_file_name)?;

  if !is_file(&path) {
    return Err(RunError::ArtifactNotFound {
      purpose: purpose.to_string(),
      path,
    });
  }

  tracing::debug!(path = %path.display(), purpose, "Resolved bootable jar");

  Ok(ArtifactLocation {
    path,
    coordinates: format!(
      "{}:{}:{}",
      project.group_id, project.artifact_id, project.version
    ),
    purpose: purpose.to_string(),
  })
}

fn is_file(path: &Path) -> bool {
  path.metadata().map(|m| m.is_file()).unwrap_or(false)
}
