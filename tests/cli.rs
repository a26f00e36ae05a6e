use pretty_assertions::assert_eq;
use std::process::{Command, Output};

fn run() -> Output {
    Command::new(env!("CARGO_BIN_EXE_stride-primes"))
        .env_remove("RUST_LOG")
        .output()
        .expect("binary should run")
}

#[test]
fn prints_prime_count() {
    let output = run();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "84\n");
    assert_eq!(String::from_utf8_lossy(&output.stderr), "");
}

#[test]
fn output_is_stable() {
    assert_eq!(run().stdout, run().stdout);
}

#[test]
fn logging_stays_off_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_stride-primes"))
        .env("RUST_LOG", "trace")
        .output()
        .expect("binary should run");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "84\n");
    assert!(!output.stderr.is_empty());
}
