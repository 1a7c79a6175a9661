use super::{core::check_for_update, types::UpdateStatus};
use crate::config::UpdateConfig;
use std::{sync::mpsc::Sender, thread};

/// Fire-and-forget release check. May overlap a packaging run.
pub fn run_async(config: UpdateConfig, sender: Sender<UpdateStatus>) {
    thread::spawn(move || {
        let _ = sender.send(UpdateStatus::Checking);
        let _ = sender.send(check_for_update(&config));
    });
}
