use assert_cmd::Command;

pub fn annotext_cmd() -> Command {
    let mut cmd = Command::cargo_bin("annotext").unwrap();
    cmd.env_remove("ANNOTEXT_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
