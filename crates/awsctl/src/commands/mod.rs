//! Command handlers

pub mod dynamodb;
pub mod profile;
pub mod s3;
pub mod scenario;

use awsctl_core::{ProgressCallback, ProgressEvent};
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner wired to the core progress callback, used while waiting on a
/// resource to settle
pub(crate) fn spinner_progress() -> (ProgressBar, ProgressCallback) {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed_precise}]")
            .unwrap(),
    );

    let pb_clone = pb.clone();
    let callback = Box::new(move |event: ProgressEvent| match event {
        ProgressEvent::Started { resource } => {
            pb_clone.set_message(format!("Waiting for {resource}"));
        }
        ProgressEvent::Polling { resource, status } => {
            pb_clone.set_message(format!("{resource}: {status}"));
        }
        ProgressEvent::Completed { resource } => {
            pb_clone.finish_with_message(format!("{resource}: ready"));
        }
        ProgressEvent::TimedOut { resource } => {
            pb_clone.finish_with_message(format!("{resource}: timed out"));
        }
    }) as ProgressCallback;

    (pb, callback)
}
