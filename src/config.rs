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
use crate::artifact::ProjectContext;
use crate::cli::RunArgs;
use crate::error::ConfigError;
use crate::options::LaunchOptions;
use figment::Figment;
use figment::providers::Format;
use figment::providers::Json;
use figment::providers::Serialized;
use figment::providers::Toml;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;
use std::path::PathBuf;

/// Config file looked up in the project directory when --config is absent.
pub const DEFAULT_CONFIG_FILE: &str = "bootrun.toml";

// --- Default Values ---
fn default_build_directory() -> PathBuf {
  PathBuf::from("target")
}

/// Settings as read from the config file and the command line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
  pub skip: bool,
  pub jvm_arguments: Vec<String>,
  pub arguments: Vec<String>,
  pub jvm_arguments_props: Option<String>,
  pub arguments_props: Option<String>,
  pub jar_file_name: Option<String>,
  pub java_home: Option<PathBuf>,
  pub project: ProjectSettings,
}

/// The `[project]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSettings {
  pub group_id: String,
  pub artifact_id: String,
  pub version: String,
  pub final_name: Option<String>,
  pub build_directory: PathBuf,
}

impl Default for ProjectSettings {
  fn default() -> Self {
    ProjectSettings {
      group_id: String::new(),
      artifact_id: String::new(),
      version: String::new(),
      final_name: None,
      build_directory: default_build_directory(),
    }
  }
}

/// Values given on the command line. Only the ones actually set are
/// serialized, so everything else falls through to the config file.
#[derive(Debug, Default, Serialize)]
struct CliOverrides {
  #[serde(skip_serializing_if = "Option::is_none")]
  skip: Option<bool>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  jvm_arguments: Vec<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  arguments: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  jvm_arguments_props: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  arguments_props: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  jar_file_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  java_home: Option<PathBuf>,
  project: ProjectOverrides,
}

#[derive(Debug, Default, Serialize)]
struct ProjectOverrides {
  #[serde(skip_serializing_if = "Option::is_none")]
  group_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  artifact_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  version: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  final_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  build_directory: Option<PathBuf>,
}

/// Layers the command line over the config file and extracts [`Settings`].
///
/// An explicit `config_file` must exist. Without one, `bootrun.toml` in
/// `project_dir` is used if present.
fn load_settings(
  project_dir: &Path,
  config_file: Option<&Path>,
  overrides: CliOverrides,
) -> Result<Settings, ConfigError> {
  let mut figment = Figment::new();

  let config_file = match config_file {
    Some(path) if !path.is_file() => {
      return Err(ConfigError::ConfigFileNotFound(path.to_path_buf()));
    }
    Some(path) => Some(path.to_path_buf()),
    None => Some(project_dir.join(DEFAULT_CONFIG_FILE)).filter(|path| path.is_file()),
  };

  if let Some(path) = config_file {
    tracing::debug!(path = %path.display(), "Loading config file");
    let is_json = path
      .extension()
      .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    figment = if is_json {
      figment.merge(Json::file(path))
    } else {
      figment.merge(Toml::file(path))
    };
  }

  let settings = figment
    .merge(Serialized::defaults(overrides))
    .extract::<Settings>()?;

  Ok(settings)
}

/// Fully resolved configuration for one run of the goal.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
  pub skip: bool,
  pub options: LaunchOptions,
  pub jar_file_name: Option<String>,
  pub java_home: Option<PathBuf>,
  pub project: ProjectContext,
}

impl RunConfig {
  pub fn from_settings(settings: Settings, project_dir: PathBuf) -> Self {
    let Settings {
      skip,
      jvm_arguments,
      arguments,
      jvm_arguments_props,
      arguments_props,
      jar_file_name,
      java_home,
      project,
    } = settings;

    RunConfig {
      skip,
      options: LaunchOptions {
        jvm_arguments,
        arguments,
        jvm_arguments_props,
        arguments_props,
      },
      jar_file_name,
      java_home,
      project: ProjectContext {
        base_dir: project_dir,
        group_id: project.group_id,
        artifact_id: project.artifact_id,
        version: project.version,
        final_name: project.final_name,
        build_directory: project.build_directory,
      },
    }
  }
}

impl TryFrom<RunArgs> for RunConfig {
  type Error = ConfigError;

  fn try_from(
    RunArgs {
      skip,
      project_dir,
      config,
      jvm_arguments,
      jvm_arguments_props,
      arguments_props,
      jar_file_name,
      java_home,
      group_id,
      artifact_id,
      project_version,
      final_name,
      build_dir,
      arguments,
    }: RunArgs,
  ) -> Result<Self, Self::Error> {
    let overrides = CliOverrides {
      skip: skip.then_some(true),
      jvm_arguments,
      arguments,
      jvm_arguments_props,
      arguments_props,
      jar_file_name,
      java_home,
      project: ProjectOverrides {
        group_id,
        artifact_id,
        version: project_version,
        final_name,
        build_directory: build_dir,
      },
    };

    let settings = load_settings(&project_dir, config.as_deref(), overrides)?;

    Ok(RunConfig::from_settings(settings, project_dir))
  }
}
