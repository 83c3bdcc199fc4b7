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
use crate::command::LaunchCommand;
use crate::error::RunError;
use std::fmt;
use std::future::Future;
use std::process::ExitStatus;
use std::process::Stdio;
use tokio::process::Command;

/// How the child process ended. Reported, never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessOutcome {
  /// `None` when the child was terminated by a signal.
  pub code: Option<i32>,
}

impl From<ExitStatus> for ProcessOutcome {
  fn from(status: ExitStatus) -> Self {
    ProcessOutcome {
      code: status.code(),
    }
  }
}

impl fmt::Display for ProcessOutcome {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.code {
      Some(code) => write!(f, "exit code {code}"),
      None => write!(f, "terminated by signal"),
    }
  }
}

/// Starts a command and waits for it to terminate.
pub trait ProcessLauncher {
  fn launch(
    &self,
    command: &LaunchCommand,
  ) -> impl Future<Output = Result<ProcessOutcome, RunError>> + Send;
}

/// Launches real OS processes that share the caller's console.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
  async fn launch(&self, command: &LaunchCommand) -> Result<ProcessOutcome, RunError> {
    let mut cmd = Command::new(&command.program);
    cmd
      .args(&command.args)
      .stdin(Stdio::inherit())
      .stdout(Stdio::inherit())
      .stderr(Stdio::inherit());

    tracing::debug!(cmd = ?cmd, "Spawning bootable jar");
    let mut child = cmd.spawn().map_err(|source| RunError::ProcessLaunch {
      program: command.program.clone(),
      source,
    })?;

    let status = child.wait().await.map_err(|source| RunError::ProcessWait {
      program: command.program.clone(),
      source,
    })?;

    Ok(ProcessOutcome::from(status))
  }
}
