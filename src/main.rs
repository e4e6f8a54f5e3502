use std::path::PathBuf;
use std::process::ExitCode;

use navbar::script::{self, Session};

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let Some(path) = std::env::args().nth(1).map(PathBuf::from) else {
        eprintln!("usage: navbar <session.json>");
        return ExitCode::from(2);
    };

    let reports = match Session::load(&path).and_then(|session| script::run(&session)) {
        Ok(reports) => reports,
        Err(e) => {
            tracing::error!(error = %e, path = %path.display(), "session failed");
            return ExitCode::FAILURE;
        }
    };

    for report in &reports {
        match serde_json::to_string(report) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                tracing::error!(error = %e, step = report.step, "failed to serialize report");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
