//! Integration tests for the `fl` binary.
//!
//! These tests exercise the full CLI against real git repositories created
//! with the git command line.

use std::path::Path;
use std::process::Command as StdCommand;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command for running the binary, isolated from the user's config.
fn fl(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fl").unwrap();
    cmd.env_remove("FORGELINK_CONFIG")
        .env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home);
    cmd
}

fn run_git(dir: &Path, args: &[&str]) {
    let status = StdCommand::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .expect("failed to run git");
    assert!(status.success(), "git {:?} failed", args);
}

// =============================================================================
// Test Fixtures
// =============================================================================

/// A repository on `main` with a committed file and an origin remote.
struct TestRepo {
    dir: TempDir,
    home: TempDir,
}

impl TestRepo {
    fn new(remote: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        run_git(dir.path(), &["init", "-b", "main"]);
        run_git(dir.path(), &["config", "user.email", "test@example.com"]);
        run_git(dir.path(), &["config", "user.name", "Test User"]);

        std::fs::create_dir_all(dir.path().join("src")).unwrap();
        std::fs::write(dir.path().join("src/main.c"), "int main(void) { return 0; }\n").unwrap();
        std::fs::write(dir.path().join("README.md"), "# Test Repo\n").unwrap();
        run_git(dir.path(), &["add", "."]);
        run_git(dir.path(), &["commit", "-m", "Initial commit"]);
        run_git(dir.path(), &["remote", "add", "origin", remote]);

        Self { dir, home }
    }

    /// Make `main` track `<remote>/<branch>` without fetching.
    fn track(&self, remote: &str, branch: &str) {
        run_git(self.path(), &["config", "branch.main.remote", remote]);
        run_git(
            self.path(),
            &["config", "branch.main.merge", &format!("refs/heads/{}", branch)],
        );
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn fl(&self) -> Command {
        let mut cmd = fl(self.home.path());
        cmd.current_dir(self.path());
        cmd
    }

    fn write_repo_config(&self, contents: &str) {
        let dir = self.path().join(".git/forgelink");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), contents).unwrap();
    }
}

mod url_command {
    use super::*;

    #[test]
    fn blob_url_for_tracked_branch() {
        let repo = TestRepo::new("git@github.com:octo/cat.git");
        repo.track("origin", "main");

        repo.fl()
            .args(["url", "blob", "src/main.c"])
            .assert()
            .success()
            .stdout("https://raw.githubusercontent.com/octo/cat/main/src/main.c\n");
    }

    #[test]
    fn upstream_branch_name_is_used() {
        let repo = TestRepo::new("git@gitlab.com:octo/cat.git");
        repo.track("origin", "dev");

        repo.fl()
            .args(["url", "blame", "README.md"])
            .assert()
            .success()
            .stdout("https://gitlab.com/octo/cat/-/blame/dev/README.md\n");
    }

    #[test]
    fn no_upstream_links_without_branch() {
        let repo = TestRepo::new("https://codeberg.org/octo/cat");

        repo.fl()
            .args(["url", "log", "README.md"])
            .assert()
            .success()
            .stdout("https://codeberg.org/octo/cat/commits/branch/README.md\n");
    }

    #[test]
    fn branch_flag_overrides_upstream() {
        let repo = TestRepo::new("https://git.sr.ht/~octo/cat");
        repo.track("origin", "main");

        repo.fl()
            .args(["url", "tree", "src/main.c", "--branch", "release"])
            .assert()
            .success()
            .stdout("https://git.sr.ht/~octo/cat/tree/release/item/src/main.c\n");
    }

    #[test]
    fn file_relative_to_subdirectory() {
        let repo = TestRepo::new("https://github.com/octo/cat");
        repo.track("origin", "main");

        repo.fl()
            .current_dir(repo.path().join("src"))
            .args(["url", "plain", "main.c"])
            .assert()
            .success()
            .stdout("https://github.com/octo/cat/blob/main/src/main.c?plain=1\n");
    }

    #[test]
    fn repository_root_without_file() {
        let repo = TestRepo::new("https://github.com/octo/cat.git");
        repo.track("origin", "main");

        repo.fl()
            .args(["url", "log"])
            .assert()
            .success()
            .stdout("https://github.com/octo/cat/commits/main\n");
    }

    #[test]
    fn remote_flag_selects_remote() {
        let repo = TestRepo::new("https://github.com/octo/cat");
        run_git(repo.path(), &["remote", "add", "upstream", "git@gitlab.com:up/cat.git"]);

        repo.fl()
            .args(["url", "tree", "README.md", "--remote", "upstream", "--branch", "main"])
            .assert()
            .success()
            .stdout("https://gitlab.com/up/cat/-/blob/main/README.md\n");
    }

    #[test]
    fn json_output() {
        let repo = TestRepo::new("git@github.com:octo/cat.git");
        repo.track("origin", "main");

        repo.fl()
            .args(["url", "blame", "README.md", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"forge\": \"github\""))
            .stdout(predicate::str::contains("\"host\": \"github.com\""))
            .stdout(predicate::str::contains("\"resource\": \"blame\""))
            .stdout(predicate::str::contains(
                "\"url\": \"https://github.com/octo/cat/blame/main/README.md\"",
            ));
    }

    #[test]
    fn repo_config_registers_host_and_branch() {
        let repo = TestRepo::new("git@git.example.com:team/app.git");
        repo.write_repo_config(
            r#"
            branch = "trunk"

            [[forges]]
            host = "git.example.com"
            kind = "gitea"
            "#,
        );

        repo.fl()
            .args(["url", "blob", "src/main.c"])
            .assert()
            .success()
            .stdout("https://git.example.com/team/app/raw/branch/trunk/src/main.c\n");
    }

    #[test]
    fn unknown_forge_fails() {
        let repo = TestRepo::new("https://example.com/foo/bar");

        repo.fl()
            .args(["url", "blob", "README.md"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no registered forge"));
    }

    #[test]
    fn unsupported_type_fails() {
        let repo = TestRepo::new("https://git.sr.ht/~octo/cat");

        repo.fl()
            .args(["url", "edit", "README.md"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("sourcehut does not support 'edit'"));
    }

    #[test]
    fn missing_file_fails() {
        let repo = TestRepo::new("https://github.com/octo/cat");

        repo.fl()
            .args(["url", "blob", "nope.c"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("nope.c"));
    }

    #[test]
    fn not_a_repository_fails() {
        let dir = TempDir::new().unwrap();

        fl(dir.path())
            .current_dir(dir.path())
            .args(["url", "log"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to open repository"));
    }

    #[test]
    fn debug_logs_go_to_stderr() {
        let repo = TestRepo::new("https://github.com/octo/cat");
        repo.track("origin", "main");

        repo.fl()
            .args(["--debug", "url", "log"])
            .assert()
            .success()
            .stdout("https://github.com/octo/cat/commits/main\n")
            .stderr(predicate::str::contains("[debug] remote 'origin'"));
    }
}

mod resolve_command {
    use super::*;

    #[test]
    fn resolves_without_repository() {
        let home = TempDir::new().unwrap();

        fl(home.path())
            .current_dir(home.path())
            .args([
                "resolve",
                "https://git.sr.ht/~octo/cat",
                "tree",
                "--branch",
                "master",
                "--path",
                "a/b.py",
            ])
            .assert()
            .success()
            .stdout("https://git.sr.ht/~octo/cat/tree/master/item/a/b.py\n");
    }

    #[test]
    fn leading_separator_is_stripped() {
        let home = TempDir::new().unwrap();

        fl(home.path())
            .args([
                "resolve",
                "git@gitlab.com:octo/cat.git",
                "blame",
                "--branch",
                "dev",
                "--path",
                "/lib/x.rb",
            ])
            .assert()
            .success()
            .stdout("https://gitlab.com/octo/cat/-/blame/dev/lib/x.rb\n");
    }

    #[test]
    fn malformed_remote_fails() {
        let home = TempDir::new().unwrap();

        fl(home.path())
            .args(["resolve", "ftp://example.com/x", "log"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("malformed remote"));
    }
}

mod other_commands {
    use super::*;

    #[test]
    fn forges_lists_builtin_hosts() {
        let home = TempDir::new().unwrap();

        fl(home.path())
            .current_dir(home.path())
            .arg("forges")
            .assert()
            .success()
            .stdout(predicate::str::contains("github.com"))
            .stdout(predicate::str::contains("git.sr.ht"))
            .stdout(predicate::str::contains("log, tree, blob, blame"));
    }

    #[test]
    fn forges_includes_global_config_hosts() {
        let home = TempDir::new().unwrap();
        let config_dir = home.path().join("forgelink");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(
            config_dir.join("config.toml"),
            "[[forges]]\nhost = \"cgit.example.org\"\nkind = \"cgit\"\n",
        )
        .unwrap();

        fl(home.path())
            .current_dir(home.path())
            .args(["forges", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"host\": \"cgit.example.org\""));
    }

    #[test]
    fn completion_bash() {
        let home = TempDir::new().unwrap();

        fl(home.path())
            .args(["completion", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("fl"));
    }

    #[test]
    fn version_flag_works() {
        let home = TempDir::new().unwrap();

        fl(home.path())
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("forgelink"));
    }
}
