use assert_cmd::Command;
use predicates::str::contains as str_contains;
use std::io::Write;
use tempfile::Builder;

#[allow(deprecated)]
fn cli() -> Command {
    let mut cmd = Command::cargo_bin("cli").expect("cli binary");
    cmd.env("RUST_LOG", "off");
    cmd
}

fn run_cli(script: &str) -> assert_cmd::assert::Assert {
    cli().arg("--no-open").write_stdin(script.to_string()).assert()
}

#[test]
fn cli_add_and_show_reports_critical_path() {
    run_cli("add A 2 -\nadd B 5\nadd C 3 A,B\nshow\nquit\n")
        .success()
        .stdout(str_contains("Critical path: B - C"))
        .stdout(str_contains("Project finish: 8"));
}

#[test]
fn cli_reports_unknown_predecessor() {
    run_cli("add X 1 Y\nquit\n")
        .success()
        .stdout(str_contains("unknown predecessor 'Y'"));
}

#[test]
fn cli_reports_extra_comma() {
    run_cli("add A 1\nadd B 1 A,\nquit\n")
        .success()
        .stdout(str_contains("extra comma"));
}

#[test]
fn guided_mode_reprompts_until_predecessors_exist() {
    let script = "2\nA\n3\n-\nB\n2\nZ\nA\n1\n0\n";
    cli()
        .args(["--guided", "--no-open"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(str_contains("unknown predecessor 'Z'"))
        .stdout(str_contains("Critical path: A - B"))
        .stdout(str_contains("Exiting..."));
}

#[test]
fn cli_graph_command_writes_html() {
    let out = Builder::new().suffix(".html").tempfile().unwrap();
    let path = out.path().to_string_lossy().to_string();
    run_cli(&format!("add A 1\ngraph {path}\nquit\n"))
        .success()
        .stdout(str_contains("written"));
    let html = std::fs::read_to_string(out.path()).unwrap();
    assert!(html.contains("vis.Network"));
}

#[test]
fn cli_loads_input_file_at_startup() {
    let mut input = Builder::new().suffix(".csv").tempfile().unwrap();
    input
        .write_all(b"name,duration,predecessors\nA,3,-\nB,2,A\n")
        .unwrap();
    input.flush().unwrap();

    cli()
        .arg("--no-open")
        .arg("--input")
        .arg(input.path())
        .write_stdin("critical\nquit\n")
        .assert()
        .success()
        .stdout(str_contains("Critical path: A - B"));
}
