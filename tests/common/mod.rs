//! Shared testing harness for `jsite` integration tests.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_fs::TempDir;

/// External commands the workflow shells out to; each gets a fake on `$PATH`
/// that logs its invocation and succeeds.
const FAKE_BINARIES: &[&str] = &["joomla", "service", "mysql", "unzip"];

/// Isolated environment for CLI exercises: a temp `$HOME`, a web root, an
/// optional Apache configuration root, and fake collaborator binaries.
pub(crate) struct TestContext {
    root: TempDir,
    www: PathBuf,
    bin_dir: PathBuf,
    log_file: PathBuf,
    apache_dir: PathBuf,
}

impl TestContext {
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let www = root.path().join("www");
        fs::create_dir_all(&www).expect("Failed to create test web root");

        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_file = root.path().join("commands.log");

        for name in FAKE_BINARIES {
            let script_path = bin_dir.join(name);
            let script = format!(
                "#!/bin/sh\necho \"{} $@\" >> \"{}\"\nexit 0\n",
                name,
                log_file.to_string_lossy()
            );
            fs::write(&script_path, script).expect("Failed to write fake binary");

            let mut perms =
                fs::metadata(&script_path).expect("Failed to get metadata").permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&script_path, perms).expect("Failed to set permissions");
        }

        let apache_dir = root.path().join("apache2").join("sites-available");

        Self { root, www, bin_dir, log_file, apache_dir }
    }

    /// Build a command for invoking the compiled `jsite` binary.
    ///
    /// The manifest URL points at a closed local port so no test touches
    /// the network unless it overrides `JSITE_MANIFEST_URL` itself.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("jsite").expect("Failed to locate jsite binary");
        let path = format!(
            "{}:{}",
            self.bin_dir.display(),
            std::env::var("PATH").unwrap_or_default()
        );
        cmd.env("HOME", self.root.path())
            .env("PATH", path)
            .env("JSITE_APACHE_DIR", &self.apache_dir)
            .env("JSITE_MANIFEST_URL", "http://127.0.0.1:1/webinstaller.xml");
        cmd
    }

    /// `jsite create <site> --www <test web root>` plus extra arguments.
    pub(crate) fn create_site(&self, site: &str, extra: &[&str]) -> Command {
        let mut cmd = self.cli();
        cmd.arg("create").arg(site).arg("--www").arg(&self.www);
        cmd.args(extra);
        cmd
    }

    /// Everything the fake collaborator binaries were invoked with, one
    /// line per call.
    pub(crate) fn command_log(&self) -> String {
        fs::read_to_string(&self.log_file).unwrap_or_default()
    }

    pub(crate) fn root(&self) -> &TempDir {
        &self.root
    }

    pub(crate) fn www(&self) -> &Path {
        &self.www
    }

    /// Create the Apache configuration root so the vhost step finds a host
    /// manager.
    pub(crate) fn enable_apache(&self) {
        fs::create_dir_all(&self.apache_dir).expect("Failed to create apache dir");
    }

    pub(crate) fn apache_dir(&self) -> &Path {
        &self.apache_dir
    }

    pub(crate) fn sites_enabled_dir(&self) -> PathBuf {
        self.apache_dir.parent().expect("apache dir has a parent").join("sites-enabled")
    }

    /// Path of the shared plugin cache inside the emulated `$HOME`.
    pub(crate) fn plugin_cache_dir(&self) -> PathBuf {
        self.root.path().join(".jsite").join("cache")
    }
}
