// SPDX-License-Identifier: MPL-2.0
//! Command-line demo: raises one notification and follows it until it leaves
//! the screen.

use batch_notify::config;
use batch_notify::diagnostics::{
    default_export_directory, generate_default_filename, DiagnosticsCollector,
};
use batch_notify::error::{Error, Result};
use batch_notify::infrastructure::TokioScheduler;
use batch_notify::notifications::{Level, Notification, NotificationOptions, NotificationService};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

const HELP: &str = "\
Raise a toast notification and print the live and persisted collections.

USAGE:
  batch-notify [OPTIONS] TITLE MESSAGE

OPTIONS:
  --config PATH        Settings file (default: platform config dir)
  --level LEVEL        info, success, warn or error [default: info]
  --auto-dismiss MS    Auto-dismiss delay; 0 disables it
  --persist BOOL       Keep the notification in history once dismissed
  --report PATH        Write a diagnostics report (file or directory)
  --save-report        Write a diagnostics report to the documents directory
  -h, --help           Print this help
";

struct Args {
    config: Option<PathBuf>,
    level: Level,
    auto_dismiss_ms: Option<u64>,
    persist: Option<bool>,
    report: Option<PathBuf>,
    save_report: bool,
    title: String,
    message: String,
}

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    match parse_args(args).and_then(run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("batch-notify: {err}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(mut args: pico_args::Arguments) -> Result<Args> {
    let parsed = Args {
        config: args.opt_value_from_str("--config")?,
        level: args
            .opt_value_from_str::<_, Level>("--level")?
            .unwrap_or_default(),
        auto_dismiss_ms: args.opt_value_from_str("--auto-dismiss")?,
        persist: args.opt_value_from_str("--persist")?,
        report: args.opt_value_from_str("--report")?,
        save_report: args.contains("--save-report"),
        title: args.free_from_str()?,
        message: args.free_from_str()?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(Error::Usage(format!(
            "unexpected arguments: {:?}",
            remaining
        )));
    }
    Ok(parsed)
}

fn run(args: Args) -> Result<()> {
    let settings = match &args.config {
        Some(path) if path.exists() => config::load_from_path(path)?,
        Some(_) => config::Config::default(),
        None => config::load()?,
    };

    let mut collector = DiagnosticsCollector::new(settings.buffer_capacity());
    let runtime = tokio::runtime::Runtime::new()?;
    let scheduler = TokioScheduler::new(runtime.handle().clone());
    let service =
        NotificationService::with_defaults(Arc::new(scheduler), settings.notification_defaults())
            .with_diagnostics(collector.handle());

    runtime.block_on(follow(&service, &args));

    collector.process_pending();
    let target = report_target(
        args.report.as_deref(),
        args.save_report.then(default_export_directory),
    )?;
    if let Some(path) = target {
        let written = collector.export_to_file(&path)?;
        println!("diagnostics: {} event(s) written to {}", collector.len(), written.display());
    }
    Ok(())
}

/// Where to write the diagnostics report, if anywhere.
///
/// An explicit directory gets a timestamped file name. The `--save-report`
/// directory is created when missing and always gets one.
fn report_target(explicit: Option<&Path>, save_dir: Option<PathBuf>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        let path = if path.is_dir() {
            path.join(generate_default_filename())
        } else {
            path.to_path_buf()
        };
        return Ok(Some(path));
    }

    let Some(dir) = save_dir else {
        return Ok(None);
    };
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(&dir)?;
    }
    Ok(Some(dir.join(generate_default_filename())))
}

async fn follow(service: &NotificationService, args: &Args) {
    let mut live = service.subscribe_live();

    let mut options = NotificationOptions::new();
    if let Some(millis) = args.auto_dismiss_ms {
        options = options.auto_dismiss_ms(millis);
    }
    if let Some(persist) = args.persist {
        options = options.persist(persist);
    }

    let title = args.title.as_str();
    let message = args.message.as_str();
    let notification = match args.level {
        Level::Info => service.info(title, message, options),
        Level::Success => service.success(title, message, options),
        Level::Warning => service.warn(title, message, options),
        Level::Error => service.error(title, message, options),
    };
    print_snapshot("live", &live.borrow_and_update());

    if notification.auto_dismiss().is_disabled() {
        // Nothing will take it down; play the part of the close button
        // moving it out of view.
        service.dismiss(&notification, true);
        print_snapshot("live", &live.borrow_and_update());
    }

    while !service.live().is_empty() {
        if live.changed().await.is_err() {
            break;
        }
        print_snapshot("live", &live.borrow_and_update());
    }

    print_snapshot("persisted", &service.persisted());
}

fn print_snapshot(label: &str, notifications: &[Notification]) {
    println!("[{label}] {} notification(s)", notifications.len());
    for n in notifications {
        println!(
            "  {} {:<7} {} {}: {}",
            n.created_at().format("%H:%M:%S"),
            n.level(),
            n.id(),
            n.title(),
            n.message()
        );
    }
}
