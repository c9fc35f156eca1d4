// Copyright (c) The testlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use camino::{Utf8Path, Utf8PathBuf};
use std::{collections::HashMap, ffi::OsString, fmt, process::Command};

/// A captured test run under `fixtures/logs/<name>`, along with the report it should produce.
pub struct LogFixture {
    dir: Utf8PathBuf,
}

impl LogFixture {
    pub fn new(name: &str) -> Self {
        let dir = Utf8Path::new(env!("CARGO_MANIFEST_DIR"))
            .parent()
            .expect("testlog crate is in a workspace")
            .join("fixtures/logs")
            .join(name);
        assert!(dir.is_dir(), "fixture directory {dir} exists");
        Self { dir }
    }

    pub fn stdout_path(&self) -> Utf8PathBuf {
        self.dir.join("stdout.txt")
    }

    pub fn stderr_path(&self) -> Utf8PathBuf {
        self.dir.join("stderr.txt")
    }

    pub fn expected_json(&self) -> String {
        std::fs::read_to_string(self.dir.join("expected.json"))
            .expect("expected.json is readable")
    }
}

/// Runs the `testlog` binary built for this test.
#[derive(Default)]
pub struct TestlogCli {
    current_dir: Option<Utf8PathBuf>,
    args: Vec<String>,
    envs: HashMap<OsString, OsString>,
}

impl TestlogCli {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn args(&mut self, args: impl IntoIterator<Item = impl Into<String>>) -> &mut Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(&mut self, dir: impl Into<Utf8PathBuf>) -> &mut Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn env(&mut self, k: impl Into<OsString>, v: impl Into<OsString>) -> &mut Self {
        self.envs.insert(k.into(), v.into());
        self
    }

    pub fn output(&self) -> TestlogOutput {
        let mut command = Command::new(env!("CARGO_BIN_EXE_testlog"));
        command
            .args(&self.args)
            .env_remove("TESTLOG_LOG")
            .env("TESTLOG_COLOR", "never")
            .envs(&self.envs);
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }

        let output = command.output().expect("testlog binary runs");
        TestlogOutput {
            args: self.args.clone(),
            exit_code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        }
    }
}

pub struct TestlogOutput {
    args: Vec<String>,
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl TestlogOutput {
    pub fn stdout_as_str(&self) -> &str {
        std::str::from_utf8(&self.stdout).expect("stdout is valid UTF-8")
    }

    pub fn stderr_as_str(&self) -> &str {
        std::str::from_utf8(&self.stderr).expect("stderr is valid UTF-8")
    }
}

impl fmt::Display for TestlogOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "command: testlog {}", self.args.join(" "))?;
        writeln!(f, "exit code: {:?}", self.exit_code)?;
        writeln!(f, "--- stdout ---\n{}", String::from_utf8_lossy(&self.stdout))?;
        write!(f, "--- stderr ---\n{}", String::from_utf8_lossy(&self.stderr))
    }
}
