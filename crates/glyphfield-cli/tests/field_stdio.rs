use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_field(args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_glyphfield-cli"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn glyphfield-cli");

    child
        .stdin
        .as_mut()
        .expect("stdin handle")
        .write_all(input)
        .expect("write stdin");

    child.wait_with_output().expect("wait for glyphfield-cli")
}

fn lcg_next(x: &mut u64) -> u64 {
    // deterministic, not crypto
    *x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
    *x
}

fn binary_bitmap(len: usize, seed: u64) -> Vec<u8> {
    let mut s = seed;
    (0..len).map(|_| ((lcg_next(&mut s) >> 33) & 1) as u8).collect()
}

#[test]
fn uniform_background_bitmap_yields_zero_bytes() {
    let out = run_field(
        &["field", "4", "4", "1", "1", "2", "1", "0", "0", "--quiet"],
        &[0u8; 16],
    );

    assert!(
        out.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&out.stderr)
    );
    assert_eq!(out.stdout, vec![0u8; 16]);
}

#[test]
fn single_pixel_bitmap_matches_golden_bytes() {
    let mut bitmap = vec![0u8; 16];
    bitmap[2 * 4 + 2] = 1;

    let out = run_field(
        &["field", "4", "4", "1", "1", "3", "1", "0", "0", "--quiet"],
        &bitmap,
    );

    assert!(
        out.status.success(),
        "stderr:\n{}",
        String::from_utf8_lossy(&out.stderr)
    );

    #[rustfmt::skip]
    let expected: Vec<u8> = vec![
         7, 32, 42, 32,
        32, 67, 85, 67,
        42, 85, 170, 85,
        32, 67, 85, 67,
    ];
    assert_eq!(out.stdout, expected);
}

#[test]
fn identical_invocations_are_byte_identical() {
    // 5x4 cells, 3x2 grid, clamp=2, scale=2, padding=1x1.
    let bitmap = binary_bitmap(5 * 4 * 3 * 2, 0x1234_5678_9abc_def0);
    let args = ["field", "5", "4", "3", "2", "2", "2", "1", "1", "--quiet"];

    let a = run_field(&args, &bitmap);
    let b = run_field(&args, &bitmap);

    assert!(a.status.success());
    assert!(b.status.success());
    assert_eq!(a.stdout.len(), 72); // 2 rows * 3 lines * 3 cells * 4 samples
    assert_eq!(a.stdout, b.stdout, "field output differed across runs");
}

#[test]
fn progress_and_summary_go_to_stderr() {
    let out = run_field(&["field", "4", "4", "1", "1", "2", "1", "0", "0"], &[0u8; 16]);

    assert!(out.status.success());
    assert_eq!(out.stdout, vec![0u8; 16], "stderr chatter must not leak into stdout");

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Char line 0: "), "stderr:\n{stderr}");
    assert!(stderr.contains("field ok:"), "stderr:\n{stderr}");
    assert!(stderr.contains("fingerprint="), "stderr:\n{stderr}");
}

#[test]
fn wrong_argument_count_prints_usage_and_fails() {
    let out = run_field(&["field", "4", "4", "1"], &[]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.to_lowercase().contains("usage"), "stderr:\n{stderr}");
}

#[test]
fn short_stdin_fails() {
    let out = run_field(
        &["field", "4", "4", "1", "1", "2", "1", "0", "0", "--quiet"],
        &[0u8; 4],
    );

    assert!(!out.status.success());
}
