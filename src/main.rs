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
use Commands::Run;
use anyhow::Result;
use bootable_run::cli::Cli;
use bootable_run::cli::Commands;
use bootable_run::launcher::SystemLauncher;
use bootable_run::logging::setup_tracing;
use bootable_run::run::run_from_args;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
  let _log_guard = setup_tracing()?;

  let Cli { command } = Cli::parse();

  match command {
    Run(run_args) => {
      if let Some(outcome) = run_from_args(run_args, &SystemLauncher).await? {
        tracing::info!("Run complete ({}).", outcome);
      }
    }
  }

  Ok(())
}
