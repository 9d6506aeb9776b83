#![cfg(unix)]

use pioneer_tools::harness::{EngineHarness, HarnessError};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Writes an executable shell script standing in for the engine.
fn fake_engine(name: &str, body: &str) -> PathBuf {
    let dir = Path::new("target/fake_engine");
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

#[test]
fn full_perft_session() {
    // Prompt is deliberately not newline-terminated, as the real engine
    // prints it.
    let engine = fake_engine(
        "ok.sh",
        "#!/bin/sh\n\
         printf 'Pioneer move generator\\nPioneerV4.0>'\n\
         read cmd\n\
         printf 'a2a3: 4\\na2a4: 5\\nTotal Moves: 9\\n'\n\
         read cmd\n\
         exit 3\n",
    );

    let mut h = EngineHarness::spawn(engine.to_str().unwrap()).unwrap();
    h.wait_for_prompt().unwrap();
    let records = h.capture_perft(6).unwrap();
    assert_eq!(records, vec!["a2a3: 4", "a2a4: 5"]);
    let status = h.quit().unwrap();
    assert_eq!(status.code(), Some(3));
}

#[test]
fn engine_dying_before_sentinel_is_an_error() {
    let engine = fake_engine(
        "dies.sh",
        "#!/bin/sh\n\
         printf 'PioneerV4.0>'\n\
         read cmd\n\
         printf 'a2a3: 4\\n'\n\
         exit 1\n",
    );

    let mut h = EngineHarness::spawn(engine.to_str().unwrap()).unwrap();
    h.wait_for_prompt().unwrap();
    let err = h.capture_perft(6).unwrap_err();
    assert!(matches!(err, HarnessError::EngineExited));
}

#[test]
fn empty_output_line_is_an_error() {
    let engine = fake_engine(
        "blank.sh",
        "#!/bin/sh\n\
         printf 'PioneerV4.0>'\n\
         read cmd\n\
         printf 'a2a3: 4\\n\\nTotal Moves: 9\\n'\n\
         read cmd\n",
    );

    let mut h = EngineHarness::spawn(engine.to_str().unwrap()).unwrap();
    h.wait_for_prompt().unwrap();
    assert!(matches!(
        h.capture_perft(6),
        Err(HarnessError::EngineExited)
    ));
}

#[test]
fn silent_engine_times_out_when_configured() {
    let engine = fake_engine(
        "slow.sh",
        "#!/bin/sh\n\
         printf 'PioneerV4.0>'\n\
         read cmd\n\
         sleep 5\n",
    );

    let mut h = EngineHarness::spawn(engine.to_str().unwrap()).unwrap();
    h.set_timeout(Some(Duration::from_millis(200)));
    h.wait_for_prompt().unwrap();
    let err = h.capture_perft(6).unwrap_err();
    assert!(matches!(err, HarnessError::Timeout));
    // Drop kills the still-sleeping child.
}

#[test]
fn missing_engine_fails_to_spawn() {
    let err = EngineHarness::spawn("target/fake_engine/does_not_exist").unwrap_err();
    assert!(matches!(err, HarnessError::Spawn { .. }));
}
