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
use assert_cmd::cargo;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;
use tempfile::tempdir;

use fs_extra::dir::CopyOptions;
use fs_extra::dir::copy;
use std::fs;

/// Copies the `demo-app` fixture project into a fresh temp dir.
fn demo_project() -> (TempDir, PathBuf) {
  let temp = tempdir().unwrap();
  let options = CopyOptions::new();
  copy("tests/fixtures/demo-app", temp.path(), &options).unwrap();
  let project_dir = temp.path().join("demo-app");
  (temp, project_dir)
}

fn bootrun() -> Command {
  let mut cmd = Command::new(cargo::cargo_bin!("bootrun"));
  cmd
    .env("CLICOLOR", "0")
    .env("NO_COLOR", "1")
    .env_remove("BOOTRUN_RUN_SKIP")
    .env_remove("BOOTRUN_JVM_ARGUMENTS")
    .env_remove("BOOTRUN_ARGUMENTS")
    .env_remove("BOOTRUN_RUN_JAR_FILE_NAME")
    .env_remove("BOOTRUN_JAVA_HOME")
    .env_remove("BOOTRUN_CONFIG")
    .env_remove("BOOTRUN_LOG_FILE")
    .env_remove("JAVA_HOME");
  cmd
}

/// A fake Java home whose `bin/java` is a shell script running `body`.
#[cfg(unix)]
fn fake_java_home(parent: &Path, body: &str) -> PathBuf {
  use std::os::unix::fs::PermissionsExt;

  let home = parent.join("jdk");
  let java = home.join("bin").join("java");
  fs::create_dir_all(home.join("bin")).unwrap();
  fs::write(&java, format!("#!/bin/sh\n{body}\n")).unwrap();
  fs::set_permissions(&java, fs::Permissions::from_mode(0o755)).unwrap();
  home
}

#[test]
fn test_skip_does_nothing() {
  let temp = tempdir().unwrap();

  bootrun()
    .arg("run")
    .arg("--project-dir")
    .arg(temp.path())
    .arg("--artifact-id")
    .arg("never-packaged")
    .env("BOOTRUN_RUN_SKIP", "true")
    .env("RUST_LOG", "debug")
    .assert()
    .success()
    .stderr(predicate::str::contains("Skipping run of :never-packaged"))
    .stderr(predicate::str::contains("Launching").not());
}

#[test]
fn test_missing_artifact_fails() {
  let (_temp, project_dir) = demo_project();
  let expected = project_dir.join("build").join("custom.jar");

  bootrun()
    .arg("run")
    .arg("--project-dir")
    .arg(&project_dir)
    .arg("--jar-file-name")
    .arg("custom.jar")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Cannot run without a bootable jar"))
    .stderr(predicate::str::contains(expected.display().to_string()))
    .stderr(predicate::str::contains("Launching").not());
}

#[test]
fn test_missing_java_fails() {
  let (temp, project_dir) = demo_project();

  bootrun()
    .arg("run")
    .arg("--project-dir")
    .arg(&project_dir)
    .arg("--java-home")
    .arg(temp.path().join("no-such-jdk"))
    .assert()
    .failure()
    .stderr(predicate::str::contains("Failed to start process"));
}

#[cfg(unix)]
#[test]
fn test_run_passes_merged_command_line() {
  let (temp, project_dir) = demo_project();
  let java_home = fake_java_home(temp.path(), r#"echo "$@""#);
  let jar = project_dir.join("build").join("demo-app-1.0.0-bootable.jar");

  bootrun()
    .arg("run")
    .arg("--project-dir")
    .arg(&project_dir)
    .arg("--java-home")
    .arg(&java_home)
    .arg("--")
    .arg("--admin-only")
    .env("BOOTRUN_JVM_ARGUMENTS", "-Dfoo=bar  -Dbaz=qux")
    .env("BOOTRUN_ARGUMENTS", "-b 0.0.0.0")
    .assert()
    .success()
    .stdout(predicate::str::contains(format!(
      "-Xmx512m -Dfoo=bar -Dbaz=qux -jar {} --admin-only -b 0.0.0.0",
      jar.display()
    )))
    .stderr(predicate::str::contains("Run complete (exit code 0)"));
}

#[cfg(unix)]
#[test]
fn test_jar_file_name_override() {
  let (temp, project_dir) = demo_project();
  let java_home = fake_java_home(temp.path(), r#"echo "$@""#);
  let custom = project_dir.join("build").join("custom.jar");
  fs::write(&custom, "custom jar").unwrap();

  bootrun()
    .arg("run")
    .arg("--project-dir")
    .arg(&project_dir)
    .arg("--java-home")
    .arg(&java_home)
    .env("BOOTRUN_RUN_JAR_FILE_NAME", "custom.jar")
    .assert()
    .success()
    .stdout(predicate::str::contains(format!("-jar {}", custom.display())))
    .stdout(predicate::str::contains("demo-app-1.0.0-bootable.jar").not());
}

#[cfg(unix)]
#[test]
fn test_failing_jar_still_succeeds() {
  let (temp, project_dir) = demo_project();
  let java_home = fake_java_home(temp.path(), "exit 1");

  bootrun()
    .arg("run")
    .arg("--project-dir")
    .arg(&project_dir)
    .arg("--java-home")
    .arg(&java_home)
    .assert()
    .success()
    .stderr(predicate::str::contains("Run complete (exit code 1)"));
}

#[test]
fn test_unusable_log_file_is_an_error() {
  let temp = tempdir().unwrap();
  let blocker = temp.path().join("blocker");
  fs::write(&blocker, "not a directory").unwrap();

  bootrun()
    .arg("run")
    .arg("--skip")
    .env("BOOTRUN_LOG_FILE", blocker.join("bootrun.log"))
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("Failed to open log file"))
    .stderr(predicate::str::contains("panicked").not());
}

#[cfg(unix)]
#[test]
fn test_java_home_env_is_the_fallback() {
  let (temp, project_dir) = demo_project();
  let java_home = fake_java_home(temp.path(), r#"echo "JAVA_HOME_JAVA $@""#);

  bootrun()
    .arg("run")
    .arg("--project-dir")
    .arg(&project_dir)
    .env("JAVA_HOME", &java_home)
    .assert()
    .success()
    .stdout(predicate::str::contains("JAVA_HOME_JAVA -Xmx512m -jar"));
}

#[cfg(unix)]
#[test]
fn test_java_from_path_without_java_home() {
  let (temp, project_dir) = demo_project();
  let java_home = fake_java_home(temp.path(), r#"echo "PATH_JAVA $@""#);
  let mut path = std::ffi::OsString::from(java_home.join("bin"));
  if let Some(host_path) = std::env::var_os("PATH") {
    path.push(":");
    path.push(host_path);
  }

  bootrun()
    .arg("run")
    .arg("--project-dir")
    .arg(&project_dir)
    .env("PATH", path)
    .assert()
    .success()
    .stdout(predicate::str::contains("PATH_JAVA -Xmx512m -jar"));
}
