use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};

fn jella(dir: &Path, args: &[&str]) -> Child {
    Command::new(env!("CARGO_BIN_EXE_jella"))
        .arg("--config")
        .arg(dir.join("absent.yaml"))
        .arg("--root")
        .arg(dir)
        .args(args)
        .env_remove("JELLA_PORT")
        .env_remove("JELLA_ROOT")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap()
}

fn wait_with_timeout(child: &mut Child, limit: Duration) -> ExitStatus {
    let start = Instant::now();
    loop {
        if let Some(status) = child.try_wait().unwrap() {
            return status;
        }
        if start.elapsed() > limit {
            let _ = child.kill();
            panic!("jella did not exit within {limit:?}");
        }
        thread::sleep(Duration::from_millis(20));
    }
}

#[test]
fn test_stdin_eof_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = jella(dir.path(), &["--port", "0", "--stop-on-stdin-eof"]);

    drop(child.stdin.take());

    let status = wait_with_timeout(&mut child, Duration::from_secs(10));
    assert_eq!(status.code(), Some(0));
}

#[test]
fn test_invalid_port_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = jella(dir.path(), &["--port", "70000"]);

    let status = wait_with_timeout(&mut child, Duration::from_secs(10));
    assert_eq!(status.code(), Some(2));
}

#[test]
fn test_tls_failure_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let cert = dir.path().join("missing.crt");
    let key = dir.path().join("missing.key");
    let mut child = jella(
        dir.path(),
        &[
            "--port",
            "0",
            "--https",
            "true",
            "--cert",
            cert.to_str().unwrap(),
            "--key",
            key.to_str().unwrap(),
        ],
    );

    let status = wait_with_timeout(&mut child, Duration::from_secs(10));
    assert_eq!(status.code(), Some(3));
}
