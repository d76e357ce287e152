use super::Overrides;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "acceptance-runner")]
#[command(about = "Run the acceptance suite and publish the latest report")]
pub struct CliConfig {
    /// Application URL passed to the suite as BASE_URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,

    /// Test runner executable
    #[arg(long, value_name = "PROGRAM")]
    pub runner: Option<String>,

    /// Test suite directory
    #[arg(long, value_name = "DIR")]
    pub suite: Option<String>,

    /// Root under which run_<timestamp> directories are created
    #[arg(long, value_name = "DIR")]
    pub results_dir: Option<String>,

    /// Static-hosting directory that receives the latest report
    #[arg(long, value_name = "DIR")]
    pub publish_dir: Option<String>,

    /// Run the browser headless
    #[arg(long, value_name = "BOOL")]
    pub headless: Option<bool>,

    /// Print the planned invocation as JSON without running anything
    #[arg(long)]
    pub dry_run: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            runner: self.runner.clone(),
            suite: self.suite.clone(),
            results_dir: self.results_dir.clone(),
            publish_dir: self.publish_dir.clone(),
            headless: self.headless,
        }
    }
}
