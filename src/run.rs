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
use crate::artifact::RUN_PURPOSE;
use crate::artifact::resolve_artifact;
use crate::cli::RunArgs;
use crate::command::LaunchCommand;
use crate::command::java_executable;
use crate::config::RunConfig;
use crate::error::BootrunError;
use crate::error::RunError;
use crate::launcher::ProcessLauncher;
use crate::launcher::ProcessOutcome;
use std::path::Path;
use std::path::PathBuf;
use tracing::Instrument;

/// Resolves the command-line arguments into a [`RunConfig`] and runs the goal.
pub async fn run_from_args<L: ProcessLauncher>(
  args: RunArgs,
  launcher: &L,
) -> Result<Option<ProcessOutcome>, BootrunError> {
  let config = RunConfig::try_from(args)?;
  Ok(run_goal(config, launcher).await?)
}

/// Runs the bootable jar described by `config` and blocks until it exits.
///
/// Returns `Ok(None)` when the goal is skipped. Any exit code counts as
/// success; only failing to find the jar or to start and wait for the
/// process is an error.
pub async fn run_goal<L: ProcessLauncher>(
  config: RunConfig,
  launcher: &L,
) -> Result<Option<ProcessOutcome>, RunError> {
  let RunConfig {
    skip,
    options,
    jar_file_name,
    java_home,
    project,
  } = config;

  if skip {
    tracing::debug!("Skipping run of {}", project.id());
    return Ok(None);
  }

  let span = tracing::info_span!("run", project = %project.id());

  async {
    let prepared = options.prepare();
    let artifact = resolve_artifact(jar_file_name.as_deref(), &project, RUN_PURPOSE)?;
    tracing::info!("Running bootable jar {}", artifact);

    let java = java_executable(java_home.as_deref());
    let outcome = launch_and_wait(
      launcher,
      java,
      &artifact.path,
      &prepared.jvm_arguments,
      &prepared.arguments,
    )
    .await?;

    Ok::<_, RunError>(Some(outcome))
  }
  .instrument(span)
  .await
}

/// Assembles the `java -jar` command line and waits for the single child.
pub async fn launch_and_wait<L: ProcessLauncher>(
  launcher: &L,
  java: PathBuf,
  artifact: &Path,
  jvm_arguments: &[String],
  arguments: &[String],
) -> Result<ProcessOutcome, RunError> {
  let command = LaunchCommand::bootable_jar(java, artifact, jvm_arguments, arguments);
  tracing::info!("Launching: {}", command);

  let outcome = launcher.launch(&command).await?;

  match outcome.code {
    Some(0) => tracing::info!("Bootable jar exited cleanly"),
    _ => tracing::warn!(code = ?outcome.code, "Bootable jar ended ({})", outcome),
  }

  Ok(outcome)
}
