use std::process::Command;
use tempfile::tempdir;

fn bin() -> String {
    env!("CARGO_BIN_EXE_oxirle").to_string()
}

#[test]
fn cli_expand_from_argument() {
    let out = Command::new(bin())
        .args(["expand", "4,2,-3,5,1,2,5,9"])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim(),
        "2 2 2 2 5 1 2 9 9 9 9 9"
    );
}

#[test]
fn cli_expand_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("encoded.bin");
    // Same sample, as raw two's-complement bytes (-3 == 0xFD).
    std::fs::write(&path, [4u8, 2, 0xFD, 5, 1, 2, 5, 9]).unwrap();

    let out = Command::new(bin())
        .args(["expand", "--input"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout).trim(),
        "2 2 2 2 5 1 2 9 9 9 9 9"
    );
}

#[test]
fn cli_view_walks_the_window() {
    let out = Command::new(bin())
        .args([
            "view",
            "--width",
            "5",
            "--steps",
            "rrll",
            "4,2,-3,5,1,2,5,9",
        ])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0].trim(), "2 2 2 2 5");
    assert_eq!(lines[1], "r 2 2 2 5 1");
    assert_eq!(lines[2], "r 2 2 5 1 2");
    assert_eq!(lines[3], "l 2 2 2 5 1");
    assert_eq!(lines[4], "l 2 2 2 2 5");
}

#[test]
fn cli_view_marks_boundary_steps() {
    let out = Command::new(bin())
        .args(["view", "--width", "4", "--steps", "l", "2,7"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.lines().nth(1).unwrap().ends_with("(boundary)"));
}

#[test]
fn cli_info_json_stats() {
    let out = Command::new(bin())
        .args(["--json", "info", "4,2,-3,5,1,2,5,9"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("\"runs\":3"), "stdout: {stdout}");
    assert!(stdout.contains("\"virtual_len\":12"), "stdout: {stdout}");
    assert!(stdout.contains("\"stored_literals\":5"), "stdout: {stdout}");
}

#[test]
fn cli_demo_prints_sample_session() {
    let out = Command::new(bin()).arg("demo").output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Encoded: 4 2 -3 5 1 2 5 9"));
    assert!(stdout.contains("Decoded: 2 2 2 2 5 1 2 9 9 9 9 9"));
    assert!(stdout.contains("2 fwd, 2 back (window 5):"));
    assert!(stdout.contains("To end, back to begin (window 8):"));
}

#[test]
fn cli_rejects_malformed_encoding() {
    let out = Command::new(bin()).args(["expand", "0"]).output().unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("malformed encoding"), "stderr: {stderr}");
}

#[test]
fn cli_rejects_truncated_encoding() {
    let out = Command::new(bin()).args(["info", "3"]).output().unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("truncated encoding"), "stderr: {stderr}");
}

#[test]
fn cli_rejects_bad_step_script() {
    let out = Command::new(bin())
        .args(["view", "--steps", "rx", "1,1"])
        .output()
        .unwrap();
    assert!(!out.status.success());
}
