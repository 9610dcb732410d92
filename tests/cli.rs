use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use rust_xlsxwriter::Workbook;
use tempfile::tempdir;

fn pathfinder_exp(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pathfinder-exp"))
        .args(args)
        .env_remove("PATHFINDER_EXP_ALL")
        .env_remove("RUST_LOG")
        .output()
        .expect("binary runs")
}

fn arg(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}

#[test]
fn prints_rows_and_totals_on_success() {
    let dir = tempdir().expect("temporary directory");
    let path = dir.path().join("log.csv");
    fs::write(&path, "Characters,Total\n\"Alice, Bob\",10\nBob,5\n").expect("written");

    let output = pathfinder_exp(&[arg(&path)]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).expect("utf-8"),
        concat!(
            "{\"Characters\":[\"Alice\",\"Bob\"],\"Total\":10.0}\n",
            "{\"Characters\":[\"Bob\"],\"Total\":5.0}\n",
            "Character  Total\n",
            "Alice         10\n",
            "Bob           15\n",
        )
    );
}

#[test]
fn missing_file_exits_with_error() {
    let dir = tempdir().expect("temporary directory");
    let path = dir.path().join("absent.csv");

    let output = pathfinder_exp(&[arg(&path)]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("utf-8");
    assert!(
        stderr.starts_with("error: input file not found:"),
        "stderr was {stderr:?}"
    );
}

#[test]
fn mixed_sentinel_row_exits_with_error() {
    let dir = tempdir().expect("temporary directory");
    let path = dir.path().join("log.csv");
    fs::write(&path, "Characters,Total\n\"All, Alice\",10\n").expect("written");

    let output = pathfinder_exp(&[arg(&path)]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).expect("utf-8");
    assert!(
        stderr.starts_with("error: row 1 references unknown character 'All'"),
        "stderr was {stderr:?}"
    );
}

#[test]
fn sheet_flag_selects_worksheet() {
    let dir = tempdir().expect("temporary directory");
    let path = dir.path().join("log.xlsx");

    let mut workbook = Workbook::new();
    workbook.add_worksheet().write_string(0, 0, "cover").expect("cell");
    let sheet = workbook.add_worksheet();
    sheet.set_name("Sessions").expect("sheet named");
    sheet.write_string(0, 0, "Characters").expect("header");
    sheet.write_string(0, 1, "Total").expect("header");
    sheet.write_string(1, 0, "All").expect("cell");
    sheet.write_number(1, 1, 3.0).expect("cell");
    sheet.write_string(2, 0, "Cara").expect("cell");
    sheet.write_number(2, 1, 2.0).expect("cell");
    workbook.save(&path).expect("workbook saved");

    let output = pathfinder_exp(&[arg(&path), "--sheet", "Sessions", "--no-rows"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8(output.stdout).expect("utf-8"),
        "Character  Total\nCara           5\n"
    );
}
