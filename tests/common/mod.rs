use assert_cmd::Command;

pub fn crmtidy_cmd() -> Command {
    let mut cmd = Command::cargo_bin("crmtidy").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}
