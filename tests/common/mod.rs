use assert_cmd::Command;
use tempfile::TempDir;

pub fn aptledger_cmd() -> Command {
    let mut cmd = Command::cargo_bin("aptledger").unwrap();
    cmd.env_remove("APTLEDGER_ROOT");
    cmd.env_remove("APTLEDGER_LOG");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Fresh ledger in a temp directory
#[allow(dead_code)]
pub fn init_ledger() -> TempDir {
    let temp = TempDir::new().unwrap();
    aptledger_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}
