#![allow(dead_code)]

use acceptance_runner::RunSettings;
use std::path::{Path, PathBuf};

pub fn settings_in(root: &Path, runner: &str) -> RunSettings {
    RunSettings {
        runner: runner.to_string(),
        suite: root.join("suite").display().to_string(),
        results_dir: root.join("results").display().to_string(),
        publish_dir: root.join("docs").display().to_string(),
        ..RunSettings::default()
    }
}

pub fn sorted_file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Writes a shell script that behaves like the runner: it creates the three
/// requested files under --outputdir, records its variables, then exits with `exit_code`.
#[cfg(unix)]
pub fn write_fake_runner(dir: &Path, exit_code: i32) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = format!(
        r#"#!/bin/sh
outdir=""
report=""
log=""
output=""
while [ $# -gt 0 ]; do
  case "$1" in
    --outputdir) outdir="$2"; shift 2 ;;
    --report) report="$2"; shift 2 ;;
    --log) log="$2"; shift 2 ;;
    --output) output="$2"; shift 2 ;;
    --variable) echo "$2" >> "$outdir/variables.txt"; shift 2 ;;
    *) echo "$1" > "$outdir/suite.txt"; shift ;;
  esac
done
echo "<html>report</html>" > "$outdir/$report"
echo "<html>log</html>" > "$outdir/$log"
echo "<robot/>" > "$outdir/$output"
exit {exit_code}
"#
    );

    let path = dir.join(format!("fake-robot-{exit_code}.sh"));
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
