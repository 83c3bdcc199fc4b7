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
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error enum for the bootable-run library.
#[derive(Error, Debug)]
pub enum BootrunError {
  #[error("Configuration error")]
  Config(#[from] ConfigError),

  #[error("Run goal failed")]
  Run(#[from] RunError),
}

/// Errors related to configuration loading (src/config.rs).
#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("Config file not found: {0}")]
  ConfigFileNotFound(PathBuf),

  #[error("Failed to extract settings: {0}")]
  Extract(#[source] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
  fn from(err: figment::Error) -> Self {
    ConfigError::Extract(Box::new(err))
  }
}

/// Errors raised while resolving and launching the bootable jar.
///
/// None of these are retried: each one aborts the goal.
#[derive(Error, Debug)]
pub enum RunError {
  #[error(
    "Cannot derive the bootable jar name: set `final_name`, or both `artifact_id` and `version`, or pass --jar-file-name"
  )]
  UnknownArtifactName,

  #[error(
    "Cannot {purpose} without a bootable jar: no file at {}. Package the project before invoking {purpose}",
    .path.display()
  )]
  ArtifactNotFound { purpose: String, path: PathBuf },

  #[error("Failed to start process {}", .program.display())]
  ProcessLaunch {
    program: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to wait for process {}", .program.display())]
  ProcessWait {
    program: PathBuf,
    #[source]
    source: std::io::Error,
  },
}
