use std::sync::OnceLock;
use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

pub struct SpinnerHandle {
    spinner: ProgressBar,
    tx: Sender<String>,
}

impl SpinnerHandle {
    pub fn send_to_queue(&self, message: String) {
        let _ = self.tx.send(message);
    }

    pub fn finish_and_clear(&self) {
        self.spinner.finish_and_clear();
    }
}

static SPINNER: OnceLock<SpinnerHandle> = OnceLock::new();

pub fn get_spinner() -> &'static SpinnerHandle {
    SPINNER.get_or_init(init_spinner)
}

fn init_spinner() -> SpinnerHandle {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .unwrap()
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));

    let (tx, rx) = mpsc::channel::<String>();
    let pb_clone = pb.clone();

    // A queue thread owns the message updates so thousands of probe
    // callbacks never contend on the progress bar itself; only the newest
    // queued message is shown.
    thread::spawn(move || {
        while let Ok(mut msg) = rx.recv() {
            if pb_clone.is_finished() {
                break;
            }
            while let Ok(newer_msg) = rx.try_recv() {
                msg = newer_msg;
            }
            pb_clone.set_message(msg);
        }
    });

    SpinnerHandle { spinner: pb, tx }
}

pub fn report_probe_progress(count: usize) {
    get_spinner().send_to_queue(format!(
        "Probed {} ports so far...",
        count.to_string().green().bold()
    ));
}

pub fn finish() {
    if let Some(handle) = SPINNER.get() {
        handle.finish_and_clear();
    }
}
