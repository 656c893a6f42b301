//! Completion signal, sent once after every outcome is in.

use crate::orchestrator::{OutcomeStatus, RunReport};
use crate::process::{run_tool, ToolError};

const SUMMARY: &str = "Download Complete";

/// Delivers a short desktop message.
pub trait Notifier {
    fn notify(&self, summary: &str, body: &str) -> Result<(), ToolError>;
}

/// `notify-send <summary> <body>`.
#[derive(Debug, Clone)]
pub struct NotifySend {
    program: String,
}

impl Default for NotifySend {
    fn default() -> Self {
        Self {
            program: "notify-send".to_string(),
        }
    }
}

impl Notifier for NotifySend {
    fn notify(&self, summary: &str, body: &str) -> Result<(), ToolError> {
        run_tool(&self.program, [summary, body]).map(|_| ())
    }
}

/// Message body for a finished run.
pub fn completion_body(report: &RunReport) -> String {
    let failed = report.count(OutcomeStatus::Failed);
    if failed == 0 {
        "All videos have been downloaded.".to_string()
    } else {
        format!("{} of {} downloads failed.", failed, report.len())
    }
}

/// Sends the completion notification. Failure is logged, never returned:
/// the run's result does not depend on it.
pub fn notify_completion(notifier: &dyn Notifier, report: &RunReport) {
    let body = completion_body(report);
    match notifier.notify(SUMMARY, &body) {
        Ok(()) => tracing::debug!("completion notification sent"),
        Err(e) => tracing::warn!("error sending notification: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogEntry;
    use crate::identity::title_fingerprint;
    use crate::orchestrator::Outcome;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<(String, String)>>);

    impl Notifier for Recorder {
        fn notify(&self, summary: &str, body: &str) -> Result<(), ToolError> {
            self.0
                .borrow_mut()
                .push((summary.to_string(), body.to_string()));
            Ok(())
        }
    }

    struct Broken;

    impl Notifier for Broken {
        fn notify(&self, _: &str, _: &str) -> Result<(), ToolError> {
            Err(ToolError::Failed {
                program: "notify-send".to_string(),
                code: Some(1),
                stderr: "no session bus".to_string(),
            })
        }
    }

    fn report_with(statuses: &[OutcomeStatus]) -> RunReport {
        let outcomes = statuses
            .iter()
            .enumerate()
            .map(|(i, status)| {
                let entry = CatalogEntry::new(format!("https://x/{}", i), format!("t{}", i));
                Outcome {
                    index: i,
                    fingerprint: title_fingerprint(&entry.title),
                    entry,
                    status: *status,
                    error: None,
                }
            })
            .collect();
        RunReport { outcomes }
    }

    #[test]
    fn sends_once_with_summary() {
        let recorder = Recorder::default();
        let report = report_with(&[OutcomeStatus::Succeeded, OutcomeStatus::Skipped]);
        notify_completion(&recorder, &report);
        let sent = recorder.0.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "Download Complete");
        assert_eq!(sent[0].1, "All videos have been downloaded.");
    }

    #[test]
    fn body_mentions_failures() {
        let report = report_with(&[
            OutcomeStatus::Succeeded,
            OutcomeStatus::Failed,
            OutcomeStatus::Failed,
        ]);
        assert_eq!(completion_body(&report), "2 of 3 downloads failed.");
    }

    #[test]
    fn notifier_failure_is_swallowed() {
        notify_completion(&Broken, &report_with(&[]));
    }
}
