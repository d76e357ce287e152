use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Timestamp shared by the results directory and every artifact of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RunStamp(String);

impl RunStamp {
    pub fn now() -> Self {
        Self::from_datetime(Local::now().naive_local())
    }

    pub fn from_datetime(at: NaiveDateTime) -> Self {
        Self(at.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Report,
    Log,
    Output,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 3] = [ArtifactKind::Report, ArtifactKind::Log, ArtifactKind::Output];

    fn stem(self) -> &'static str {
        match self {
            ArtifactKind::Report => "report",
            ArtifactKind::Log => "log",
            ArtifactKind::Output => "output",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            ArtifactKind::Report | ArtifactKind::Log => "html",
            ArtifactKind::Output => "xml",
        }
    }

    /// File name the runner writes for a given run, e.g. `report_20250101_120000.html`.
    pub fn run_file_name(self, stamp: &RunStamp) -> String {
        format!("{}_{}.{}", self.stem(), stamp, self.extension())
    }

    /// Fixed name under the publishing directory.
    pub fn published_file_name(self) -> String {
        format!("{}.{}", self.stem(), self.extension())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactNames {
    pub report: String,
    pub log: String,
    pub output: String,
}

impl ArtifactNames {
    pub fn for_stamp(stamp: &RunStamp) -> Self {
        Self {
            report: ArtifactKind::Report.run_file_name(stamp),
            log: ArtifactKind::Log.run_file_name(stamp),
            output: ArtifactKind::Output.run_file_name(stamp),
        }
    }

    pub fn get(&self, kind: ArtifactKind) -> &str {
        match kind {
            ArtifactKind::Report => &self.report,
            ArtifactKind::Log => &self.log,
            ArtifactKind::Output => &self.output,
        }
    }
}

/// Everything needed to launch one runner invocation.
#[derive(Debug, Clone, Serialize)]
pub struct RunPlan {
    pub stamp: RunStamp,
    pub program: String,
    pub suite: PathBuf,
    pub results_dir: PathBuf,
    pub publish_dir: PathBuf,
    pub artifacts: ArtifactNames,
    pub base_url: String,
    pub headless: bool,
}

impl RunPlan {
    pub fn artifact_path(&self, kind: ArtifactKind) -> PathBuf {
        self.results_dir.join(self.artifacts.get(kind))
    }

    pub fn published_path(&self, kind: ArtifactKind) -> PathBuf {
        self.publish_dir.join(kind.published_file_name())
    }

    /// Arguments passed to the runner, in the order it expects them.
    pub fn runner_args(&self) -> Vec<String> {
        vec![
            "--outputdir".to_string(),
            path_arg(&self.results_dir),
            "--report".to_string(),
            self.artifacts.report.clone(),
            "--log".to_string(),
            self.artifacts.log.clone(),
            "--output".to_string(),
            self.artifacts.output.clone(),
            "--variable".to_string(),
            format!("BASE_URL:{}", self.base_url),
            "--variable".to_string(),
            format!("HEADLESS:{}", self.headless),
            path_arg(&self.suite),
        ]
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerExit {
    /// `None` when the process was killed by a signal.
    pub code: Option<i32>,
}

impl RunnerExit {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub stamp: RunStamp,
    pub results_dir: PathBuf,
    pub published: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_stamp() -> RunStamp {
        let at = NaiveDate::from_ymd_opt(2025, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 2)
            .unwrap();
        RunStamp::from_datetime(at)
    }

    fn sample_plan() -> RunPlan {
        let stamp = fixed_stamp();
        RunPlan {
            artifacts: ArtifactNames::for_stamp(&stamp),
            results_dir: PathBuf::from("results").join(format!("run_{}", stamp)),
            stamp,
            program: "robot".to_string(),
            suite: PathBuf::from("tests"),
            publish_dir: PathBuf::from("docs"),
            base_url: "http://localhost:8000".to_string(),
            headless: true,
        }
    }

    #[test]
    fn test_stamp_is_zero_padded() {
        assert_eq!(fixed_stamp().as_str(), "20250307_090502");
    }

    #[test]
    fn test_artifact_names_for_fixed_stamp() {
        let names = ArtifactNames::for_stamp(&fixed_stamp());
        assert_eq!(names.report, "report_20250307_090502.html");
        assert_eq!(names.log, "log_20250307_090502.html");
        assert_eq!(names.output, "output_20250307_090502.xml");
    }

    #[test]
    fn test_published_names_are_fixed() {
        let published: Vec<String> = ArtifactKind::ALL
            .iter()
            .map(|kind| kind.published_file_name())
            .collect();
        assert_eq!(published, vec!["report.html", "log.html", "output.xml"]);
    }

    #[test]
    fn test_runner_args_order() {
        let plan = sample_plan();
        let results_dir = PathBuf::from("results")
            .join("run_20250307_090502")
            .to_string_lossy()
            .into_owned();
        assert_eq!(
            plan.runner_args(),
            vec![
                "--outputdir",
                results_dir.as_str(),
                "--report",
                "report_20250307_090502.html",
                "--log",
                "log_20250307_090502.html",
                "--output",
                "output_20250307_090502.xml",
                "--variable",
                "BASE_URL:http://localhost:8000",
                "--variable",
                "HEADLESS:true",
                "tests",
            ]
        );
    }

    #[test]
    fn test_headless_false_is_rendered() {
        let mut plan = sample_plan();
        plan.headless = false;
        assert!(plan.runner_args().contains(&"HEADLESS:false".to_string()));
    }

    #[test]
    fn test_runner_exit_success() {
        assert!(RunnerExit { code: Some(0) }.success());
        assert!(!RunnerExit { code: Some(3) }.success());
        assert!(!RunnerExit { code: None }.success());
    }
}
