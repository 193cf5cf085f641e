//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the Ctrl-C handler and
//! dispatches the subcommand to the `FileSystem` engine.

use anyhow::{Context, Result};
use std::io::Write;
use std::ops::ControlFlow;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};
use tracing::{debug, error};

use portable_fs::cli::{Args, Command};
use portable_fs::config::{default_config_path, load_config_from_env, load_config_from_xml_path};
use portable_fs::output as out;
use portable_fs::{Config, FileSystem, FsError, shutdown};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<ExitCode> {
    // Handled before logging init so nothing else is printed.
    if let Command::ConfigPath = args.command {
        return Ok(print_config_path());
    }

    let mut cfg = match &args.config {
        Some(path) => load_config_from_xml_path(path)?,
        None => load_config_from_env()?.unwrap_or_default(),
    };
    args.apply_overrides(&mut cfg);

    let guard_opt = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json_logs).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    // Dropping the guard on interrupt flushes the file appender.
    let guard_slot = Arc::new(Mutex::new(guard_opt));
    {
        let guard_slot = Arc::clone(&guard_slot);
        ctrlc::set_handler(move || {
            shutdown::request();
            out::print_warn("Received interrupt; stopping...");
            if let Ok(mut g) = guard_slot.lock() {
                let _ = g.take();
            }
        })
        .context("install Ctrl-C handler")?;
    }

    debug!(?args, "starting pfs");
    let result = dispatch(&args, &cfg);

    if let Ok(mut g) = guard_slot.lock() {
        let _ = g.take();
    }

    match result {
        Ok(code) => Ok(code),
        Err(e) => {
            match e.downcast_ref::<FsError>() {
                Some(fs_err) => {
                    error!(class = ?fs_err.class(), path = fs_err.path(), "{}", fs_err);
                    out::print_error(&fs_err.to_string());
                }
                None => out::print_error(&format!("{e:#}")),
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_config_path() -> ExitCode {
    match default_config_path() {
        Some(p) => {
            out::print_user(&p.display().to_string());
            ExitCode::SUCCESS
        }
        None => {
            out::print_error("Could not determine a config path");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(args: &Args, cfg: &Config) -> Result<ExitCode> {
    let mut fs = FileSystem::with_options(cfg.options.clone());
    if let Some(dir) = &args.cwd {
        fs.change_cwd(dir)?;
    }

    match &args.command {
        Command::Exists { path } => {
            return Ok(if fs.path_exists(path) { ExitCode::SUCCESS } else { ExitCode::FAILURE });
        }
        Command::Info { path, json } => {
            let meta = fs.metadata(path);
            if !meta.exists {
                return Err(FsError::NotFound { path: path.clone() }.into());
            }
            if *json {
                out::print_user(&serde_json::to_string(&meta)?);
            } else {
                out::print_user(&out::format_metadata(path, &meta));
            }
        }
        Command::Scan { path, recurse, limit, json } => {
            let mut seen = 0usize;
            let mut failed: Option<serde_json::Error> = None;
            fs.scan_directory(path, *recurse, |entry| {
                if *json {
                    match serde_json::to_string(entry) {
                        Ok(line) => out::print_user(&line),
                        Err(e) => {
                            failed = Some(e);
                            return ControlFlow::Break(());
                        }
                    }
                } else {
                    out::print_user(&out::format_entry(entry));
                }
                seen += 1;
                if limit.is_some_and(|n| seen >= n) {
                    return ControlFlow::Break(());
                }
                shutdown::flow()
            })?;
            if let Some(e) = failed {
                return Err(e.into());
            }
            debug!(entries = seen, "scan finished");
        }
        Command::Mkdir { path } => {
            fs.ensure_directory(path)?;
            out::print_success(&format!("directory ready: {path}"));
        }
        Command::Rm { path } => {
            fs.delete_recursive(path)?;
            out::print_success(&format!("removed {path}"));
        }
        Command::Cp { from, to, parents } => {
            fs.copy_file(from, to, *parents)?;
            out::print_success(&format!("copied {from} -> {to}"));
        }
        Command::Mv { from, to } => {
            fs.move_file(from, to)?;
            out::print_success(&format!("moved {from} -> {to}"));
        }
        Command::Touch { path, time } => {
            fs.touch_file(path, *time)?;
            out::print_success(&format!("set modification time of {path} to {time}"));
        }
        Command::Cat { path } => {
            let data = fs.read_file(path)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&data).context("write to stdout")?;
            stdout.flush().context("flush stdout")?;
        }
        Command::ConfigPath => return Ok(print_config_path()),
    }
    Ok(ExitCode::SUCCESS)
}
