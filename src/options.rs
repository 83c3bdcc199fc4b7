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

/// Launch options as configured, before the raw strings are merged in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaunchOptions {
  /// JVM options, passed before `-jar`.
  pub jvm_arguments: Vec<String>,

  /// Arguments passed to the bootable jar itself.
  pub arguments: Vec<String>,

  /// Whitespace-delimited JVM options from the environment or the command line.
  pub jvm_arguments_props: Option<String>,

  /// Whitespace-delimited program arguments from the environment or the command line.
  pub arguments_props: Option<String>,
}

/// The two merged token sequences, ready for command assembly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreparedOptions {
  pub jvm_arguments: Vec<String>,
  pub arguments: Vec<String>,
}

impl LaunchOptions {
  pub fn prepare(self) -> PreparedOptions {
    prepare_options(
      self.jvm_arguments,
      self.jvm_arguments_props.as_deref(),
      self.arguments,
      self.arguments_props.as_deref(),
    )
  }
}

/// Appends the tokens of each raw string to its structured list.
///
/// Tokens are separated by runs of ASCII whitespace. There is no quoting, so
/// `"-Dname=a b"` yields the two tokens `-Dname=a` and `b`.
pub fn prepare_options(
  mut jvm_arguments: Vec<String>,
  jvm_arguments_props: Option<&str>,
  mut arguments: Vec<String>,
  arguments_props: Option<&str>,
) -> PreparedOptions {
  append_tokens(&mut jvm_arguments, jvm_arguments_props);
  append_tokens(&mut arguments, arguments_props);

  PreparedOptions {
    jvm_arguments,
    arguments,
  }
}

fn append_tokens(target: &mut Vec<String>, raw: Option<&str>) {
  if let Some(raw) = raw {
    target.extend(raw.split_ascii_whitespace().map(str::to_string));
  }
}
