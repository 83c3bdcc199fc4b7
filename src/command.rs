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
use std::env;
use std::ffi::OsString;
use std::fmt;
use std::path::Path;
use std::path::PathBuf;

/// Holds the executable and the full argument vector for one launch.
///
/// Built once from the merged options and consumed by a single
/// [`ProcessLauncher::launch`](crate::launcher::ProcessLauncher::launch).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchCommand {
  /// The `java` executable to run.
  pub program: PathBuf,

  /// JVM options, then `-jar <artifact>`, then program arguments.
  pub args: Vec<OsString>,
}

impl LaunchCommand {
  /// `<java> <jvm_arguments...> -jar <artifact> <arguments...>`
  pub fn bootable_jar(
    java: PathBuf,
    artifact: &Path,
    jvm_arguments: &[String],
    arguments: &[String],
  ) -> Self {
    let mut args: Vec<OsString> = Vec::with_capacity(jvm_arguments.len() + arguments.len() + 2);
    args.extend(jvm_arguments.iter().map(OsString::from));
    args.push(OsString::from("-jar"));
    args.push(artifact.as_os_str().to_os_string());
    args.extend(arguments.iter().map(OsString::from));

    LaunchCommand {
      program: java,
      args,
    }
  }
}

impl fmt::Display for LaunchCommand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.program.display())?;
    for arg in &self.args {
      write!(f, " {}", arg.to_string_lossy())?;
    }
    Ok(())
  }
}

/// Picks the `java` executable.
///
/// A configured Java home wins, then `JAVA_HOME`, then `java` from `PATH`.
pub fn java_executable(java_home: Option<&Path>) -> PathBuf {
  match java_home {
    Some(home) => java_under(home),
    None => match env::var_os("JAVA_HOME") {
      Some(home) if !home.is_empty() => java_under(Path::new(&home)),
      _ => PathBuf::from("java"),
    },
  }
}

fn java_under(home: &Path) -> PathBuf {
  ensure_exe_suffix(home.join("bin").join("java"))
}

/// Appends ".exe" to a path on Windows.
fn ensure_exe_suffix(path: PathBuf) -> PathBuf {
  #[cfg(target_os = "windows")]
  {
    if path.extension().is_none() {
      let mut p = path.into_os_string();
      p.push(".exe");
      return PathBuf::from(p);
    }
  }
  path
}
