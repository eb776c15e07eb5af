#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use punchclock::models::user::{User, stored_hash};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ADMIN: &str = "boss";
pub const ADMIN_PW: &str = "s3cret";
pub const WORKER: &str = "morty";
pub const WORKER_PW: &str = "aw-jeez";

/// An isolated HOME with its own config, users file and data dir.
pub struct Sandbox {
    pub home: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("temp home"),
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.home.path().join("data")
    }

    pub fn users_file(&self) -> PathBuf {
        self.home.path().join(".punchclock").join("users.json")
    }

    /// `punchclock` with HOME pointed at the sandbox and no inherited login.
    pub fn pc(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("punchclock");
        cmd.env("HOME", self.home.path())
            .env("APPDATA", self.home.path())
            .env_remove("PUNCHCLOCK_USER")
            .env_remove("PUNCHCLOCK_PASSWORD")
            .env_remove("PUNCHCLOCK_LOG")
            .arg("--data-dir")
            .arg(self.data_dir());
        cmd
    }

    pub fn as_user(&self, user: &str, password: &str) -> Command {
        let mut cmd = self.pc();
        cmd.args(["--user", user, "--password", password]);
        cmd
    }

    pub fn as_admin(&self) -> Command {
        self.as_user(ADMIN, ADMIN_PW)
    }

    pub fn as_worker(&self) -> Command {
        self.as_user(WORKER, WORKER_PW)
    }

    /// Run `init` and install an admin (hashed password) and a worker
    /// (plaintext password).
    pub fn init(&self) {
        self.pc()
            .args(["init", "--admin", ADMIN, "--admin-password", ADMIN_PW])
            .assert()
            .success();

        let users = vec![
            User {
                username: ADMIN.into(),
                password: stored_hash(ADMIN_PW),
                preferred_first_name: "Boss".into(),
                is_admin: true,
            },
            User {
                username: WORKER.into(),
                password: WORKER_PW.into(),
                preferred_first_name: "Morty".into(),
                is_admin: false,
            },
        ];
        write(
            &self.users_file(),
            &serde_json::to_string_pretty(&users).expect("users json"),
        );
    }

    pub fn punch_file(&self, user: &str) -> PathBuf {
        self.data_dir().join(format!("{user}-punches.json"))
    }
}

pub fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, content).expect("write file");
}
