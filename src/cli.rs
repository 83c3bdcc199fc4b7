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
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about = "Runs a packaged bootable jar")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
  /// Run the bootable jar in the foreground and wait for it to exit.
  Run(RunArgs),
}

#[derive(Debug, Args)]
pub struct RunArgs {
  /// Do nothing.
  #[arg(long, env = "BOOTRUN_RUN_SKIP")]
  pub skip: bool,

  /// Project directory. The build directory and the default config file are
  /// resolved against it.
  #[arg(long, default_value = ".")]
  pub project_dir: PathBuf,

  /// Config file (TOML, or JSON with a `.json` extension).
  /// Defaults to `<project-dir>/bootrun.toml` when that file exists.
  #[arg(long, env = "BOOTRUN_CONFIG")]
  pub config: Option<PathBuf>,

  /// A JVM option. Repeat for more.
  #[arg(long = "jvm-argument", value_name = "OPTION", allow_hyphen_values = true)]
  pub jvm_arguments: Vec<String>,

  /// Whitespace-separated JVM options, appended after --jvm-argument values.
  #[arg(
    long,
    env = "BOOTRUN_JVM_ARGUMENTS",
    value_name = "OPTIONS",
    allow_hyphen_values = true
  )]
  pub jvm_arguments_props: Option<String>,

  /// Whitespace-separated program arguments, appended after the trailing arguments.
  #[arg(
    long,
    env = "BOOTRUN_ARGUMENTS",
    value_name = "ARGUMENTS",
    allow_hyphen_values = true
  )]
  pub arguments_props: Option<String>,

  /// File name of the bootable jar inside the build directory, when it was
  /// packaged under a custom name.
  #[arg(long, env = "BOOTRUN_RUN_JAR_FILE_NAME")]
  pub jar_file_name: Option<String>,

  /// Java installation used to launch the jar. Falls back to JAVA_HOME, then PATH.
  #[arg(long, env = "BOOTRUN_JAVA_HOME")]
  pub java_home: Option<PathBuf>,

  #[arg(long)]
  pub group_id: Option<String>,

  #[arg(long)]
  pub artifact_id: Option<String>,

  #[arg(long)]
  pub project_version: Option<String>,

  /// Base name of packaged files. Defaults to `<artifact-id>-<project-version>`.
  #[arg(long)]
  pub final_name: Option<String>,

  /// Build output directory holding the bootable jar.
  #[arg(long)]
  pub build_dir: Option<PathBuf>,

  /// Arguments passed to the bootable jar.
  #[arg(last = true)]
  pub arguments: Vec<String>,
}
