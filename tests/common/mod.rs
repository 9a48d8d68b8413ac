use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().to_path_buf();
        Self { _tmp: tmp, dir }
    }

    pub fn write_log(&self, name: &str, lines: &[String]) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, lines.join("\n") + "\n").expect("write fixture log");
        path
    }

    pub fn cmd(&self) -> Command {
        Command::cargo_bin("seqcheck").expect("binary builds")
    }
}

pub fn boat_line(name: &str, seq: i64) -> String {
    format!(
        r#"{{"boat":{{"name":"{name}","sequenceNumber":{seq},"lat":48.8534,"lon":-3.9842}},"rssi":-71}}"#
    )
}

pub fn plain_line(seq: i64) -> String {
    format!(r#"{{"sequenceNumber":{seq},"speed":4.2}}"#)
}
