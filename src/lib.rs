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

//! # bootable-run
//!
//! `bootable-run` runs a packaged bootable jar in the foreground: it merges
//! the configured JVM options and program arguments, locates the jar in the
//! project's build directory, launches `java -jar` with the caller's console,
//! and waits for the process to exit.
//!
//! This crate contains the library logic for the `bootrun` CLI.
//!
//! ## Core Modules
//!
//! * [`run`]: The `run_goal` entry point: skip gate, option merging, artifact
//!   resolution, launch and wait.
//! * [`options`]: Merges whitespace-delimited option strings into option lists.
//! * [`artifact`]: Resolves the bootable jar from the project context.
//! * [`command`]: Defines the `LaunchCommand` and locates the `java` executable.
//! * [`launcher`]: The `ProcessLauncher` seam and its OS-backed implementation.
//! * [`config`]: Layers the command line over the config file into a `RunConfig`.
//! * [`cli`]: Defines the `clap`-based command-line interface.
//! * [`error`]: Defines the custom error types for the library.
//! * [`logging`]: Provides the `setup_tracing` utility.

pub mod artifact;
pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod launcher;
pub mod logging;
pub mod options;
pub mod run;
