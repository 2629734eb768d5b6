//! Headless host for the shell controller.
//!
//! Reads one command per line from stdin and drives a [`Session`] backed by
//! JSON files in the data directory. An attached [`UiSurface`] mirrors every
//! notification so the printed state is what a UI would render.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::mpsc;

use serde_json::Value;

use molecule::kernel::services::adapters::{
    config_file, ensure_config_file, ensure_data_dir, load_config, local_storage_file,
    preferences_file, ConfigService, JsonFileStore,
};
use molecule::kernel::services::Notification;
use molecule::kernel::shortcuts::{shortcut_action, workspace_shortcut};
use molecule::kernel::{
    Action, NavigationCommand, PreferenceKey, Session, SessionError, UiSurface, WorkspaceId,
};

mod logging;

type HostSession = Session<JsonFileStore, JsonFileStore>;

#[derive(Debug, Clone, PartialEq)]
enum HostCommand {
    Add,
    Switch(SwitchTarget),
    Key(String),
    Set { name: String, value: Value },
    Get(String),
    Reset,
    List,
    Nav(NavigationCommand),
    Visited(String),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
enum SwitchTarget {
    Position(usize),
    Id(WorkspaceId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    fn exit_code(self) -> u8 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }
}

enum HostEvent {
    Line(String),
    Eof,
    Signal(TerminationSignal),
}

fn parse_command(line: &str) -> Result<Option<HostCommand>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "add" => HostCommand::Add,
        "switch" => HostCommand::Switch(parse_switch_target(rest)?),
        "key" if !rest.is_empty() => HostCommand::Key(rest.to_string()),
        "set" => {
            let (name, raw) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "usage: set <name> <json>".to_string())?;
            let value = serde_json::from_str(raw.trim()).map_err(|e| format!("bad value: {e}"))?;
            HostCommand::Set {
                name: name.to_string(),
                value,
            }
        }
        "get" if !rest.is_empty() => HostCommand::Get(rest.to_string()),
        "reset" => HostCommand::Reset,
        "list" | "ls" => HostCommand::List,
        "nav" => HostCommand::Nav(parse_navigation(rest)?),
        "visited" if !rest.is_empty() => HostCommand::Visited(rest.to_string()),
        "help" | "?" => HostCommand::Help,
        "quit" | "exit" | "q" => HostCommand::Quit,
        other => return Err(format!("unknown command: {other}")),
    };
    Ok(Some(command))
}

fn parse_switch_target(raw: &str) -> Result<SwitchTarget, String> {
    if let Ok(position) = raw.parse::<usize>() {
        if position == 0 {
            return Err("positions start at 1".to_string());
        }
        return Ok(SwitchTarget::Position(position - 1));
    }
    raw.parse::<WorkspaceId>()
        .map(SwitchTarget::Id)
        .map_err(|e| format!("bad workspace id: {e}"))
}

fn parse_navigation(raw: &str) -> Result<NavigationCommand, String> {
    let (verb, arg) = match raw.split_once(char::is_whitespace) {
        Some((verb, arg)) => (verb, arg.trim()),
        None => (raw, ""),
    };
    let command = match verb.to_ascii_lowercase().as_str() {
        "back" => NavigationCommand::GoBack,
        "forward" => NavigationCommand::GoForward,
        "reload" => NavigationCommand::Reload,
        "home" => NavigationCommand::GoHome,
        "copy-url" => NavigationCommand::CopyUrl,
        "load" if !arg.is_empty() => NavigationCommand::LoadUrl(arg.to_string()),
        "zoom" => NavigationCommand::SetZoomFactor(
            arg.parse().map_err(|_| format!("bad zoom factor: {arg}"))?,
        ),
        "find" if !arg.is_empty() => NavigationCommand::FindInPage {
            text: arg.to_string(),
            forward: true,
        },
        "find-prev" if !arg.is_empty() => NavigationCommand::FindInPage {
            text: arg.to_string(),
            forward: false,
        },
        "stop-find" => NavigationCommand::StopFindInPage,
        "devtools" => NavigationCommand::ToggleDevTools,
        other => return Err(format!("unknown navigation command: {other}")),
    };
    Ok(command)
}

fn resolve_data_dir(config_dir: Option<PathBuf>) -> io::Result<PathBuf> {
    let data_dir = ensure_data_dir().or_else(|_| -> io::Result<PathBuf> {
        let dir = std::env::temp_dir().join("molecule");
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    })?;
    match config_dir {
        Some(dir) => {
            std::fs::create_dir_all(&dir)?;
            Ok(dir)
        }
        None => Ok(data_dir),
    }
}

fn open_session(data_dir: &Path, config: ConfigService) -> Result<HostSession, SessionError> {
    let preferences = JsonFileStore::open(preferences_file(data_dir))?;
    let local_storage = JsonFileStore::open(local_storage_file(data_dir))?;
    Session::open(preferences, local_storage, config.into_config())
}

fn spawn_stdin_reader(tx: mpsc::Sender<HostEvent>) {
    std::thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(HostEvent::Line(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    tracing::warn!(%err, "stdin read failed");
                    break;
                }
            }
        }
        let _ = tx.send(HostEvent::Eof);
    });
}

#[cfg(unix)]
fn install_termination_signals(tx: mpsc::Sender<HostEvent>) -> io::Result<()> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::spawn(move || {
        for sig in signals.forever() {
            let signal = match sig {
                SIGINT => TerminationSignal::SigInt,
                SIGTERM => TerminationSignal::SigTerm,
                _ => continue,
            };
            if tx.send(HostEvent::Signal(signal)).is_err() {
                return;
            }
        }
    });
    Ok(())
}

#[cfg(not(unix))]
fn install_termination_signals(_tx: mpsc::Sender<HostEvent>) -> io::Result<()> {
    Ok(())
}

/// Runs one command. Returns `false` when the host should stop.
fn execute(
    session: &mut HostSession,
    command: HostCommand,
    out: &mut impl Write,
) -> io::Result<bool> {
    let result = match command {
        HostCommand::Add => session.add_workspace().map(|outcome| match outcome.added() {
            Some(id) => tracing::info!(%id, "workspace added"),
            None => tracing::info!("workspace not added"),
        }),
        HostCommand::Switch(SwitchTarget::Position(index)) => session
            .dispatch(Action::ActivateWorkspaceAt { index })
            .map(|_| ()),
        HostCommand::Switch(SwitchTarget::Id(id)) => session.set_active_workspace(id),
        HostCommand::Key(combo) => match shortcut_action(&combo) {
            Some(action) => session.dispatch(action).map(|_| ()),
            None => {
                writeln!(out, "no shortcut bound to {combo}")?;
                Ok(())
            }
        },
        HostCommand::Set { name, value } => session.set_preference_by_name(&name, value),
        HostCommand::Get(name) => {
            match name.parse::<PreferenceKey>() {
                Ok(key) => writeln!(out, "{key} = {}", session.preference(key))?,
                Err(err) => writeln!(out, "{err}")?,
            }
            Ok(())
        }
        HostCommand::Reset => session.reset_preferences(),
        HostCommand::List => {
            print_workspaces(session, out)?;
            Ok(())
        }
        HostCommand::Nav(NavigationCommand::GoHome) => {
            let url = session.home_url().to_string();
            route(session, NavigationCommand::LoadUrl(url), out)?;
            Ok(())
        }
        HostCommand::Nav(command) => {
            route(session, command, out)?;
            Ok(())
        }
        HostCommand::Visited(url) => session.record_last_page(&url),
        HostCommand::Help => {
            print_help(out)?;
            Ok(())
        }
        HostCommand::Quit => return Ok(false),
    };

    if let Err(err) = result {
        tracing::warn!(%err, "command failed");
        writeln!(out, "error: {err}")?;
    }
    Ok(true)
}

fn route(session: &HostSession, command: NavigationCommand, out: &mut impl Write) -> io::Result<()> {
    match session.route(command) {
        Some(routed) => writeln!(out, "-> {}: {:?}", routed.workspace, routed.command),
        None => writeln!(out, "no foreground view"),
    }
}

fn print_workspaces(session: &HostSession, out: &mut impl Write) -> io::Result<()> {
    let active = session.active_workspace();
    for (index, workspace) in session.workspaces().iter().enumerate() {
        let marker = if workspace.identifier == active { '*' } else { ' ' };
        let shortcut = workspace_shortcut(index).unwrap_or_default();
        let partition = session
            .router()
            .view(workspace.identifier)
            .map(|view| view.partition.as_str())
            .unwrap_or("-");
        writeln!(
            out,
            "{marker} {:>2} {shortcut:<7} {partition}",
            workspace.name
        )?;
    }
    Ok(())
}

fn print_surface(surface: &mut UiSurface, out: &mut impl Write) -> io::Result<()> {
    if surface.pump() == 0 {
        return Ok(());
    }
    for report in surface.take_reports() {
        match report {
            Notification::WorkspaceCapacityReached { limit } => {
                writeln!(out, "workspace limit of {limit} reached")?
            }
            Notification::WorkspaceRejected { id } => writeln!(out, "no workspace {id}")?,
            Notification::PreferenceRejected { key, expected } => {
                writeln!(out, "{key} expects {expected}")?
            }
            _ => {}
        }
    }
    let active = surface
        .workspaces()
        .iter()
        .find(|w| surface.is_active(w.identifier))
        .map(|w| w.name.as_str())
        .unwrap_or("-");
    writeln!(
        out,
        "[{} workspaces, active {active}, dark {}, bar {}]",
        surface.workspaces().len(),
        surface.preferences().dark_theme,
        surface.preferences().workspace_bar_position.as_str(),
    )
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "commands: add | switch <n|id> | key <combo> | set <name> <json> | get <name> | reset | list | nav <cmd> | visited <url> | quit"
    )
}

fn main() -> ExitCode {
    let Ok(default_dir) = resolve_data_dir(None) else {
        eprintln!("molecule: cannot create a data directory");
        return ExitCode::FAILURE;
    };
    let config_path = config_file(&default_dir);
    if let Err(err) = ensure_config_file(&config_path) {
        eprintln!("molecule: cannot write {}: {err}", config_path.display());
    }
    let early = load_config(&config_path).unwrap_or_default();
    let data_dir = match resolve_data_dir(early.data_dir.clone()) {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("molecule: data directory unavailable: {err}");
            return ExitCode::FAILURE;
        }
    };

    let _logging = logging::init(&data_dir, early.log_filter.as_deref());
    let config = ConfigService::load(&config_path);

    let mut session = match open_session(&data_dir, config) {
        Ok(session) => session,
        Err(err) => {
            tracing::error!(%err, "session failed to open");
            eprintln!("molecule: {err}");
            return ExitCode::FAILURE;
        }
    };
    let mut surface = session.attach_surface();

    let (tx, rx) = mpsc::channel();
    if let Err(err) = install_termination_signals(tx.clone()) {
        tracing::warn!(%err, "signal handlers not installed");
    }
    spawn_stdin_reader(tx);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = writeln!(out, "start url: {}", session.start_url());
    let _ = print_workspaces(&session, &mut out);

    while let Ok(event) = rx.recv() {
        match event {
            HostEvent::Line(line) => match parse_command(&line) {
                Ok(Some(command)) => match execute(&mut session, command, &mut out) {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(err) => {
                        tracing::error!(%err, "stdout closed");
                        break;
                    }
                },
                Ok(None) => {}
                Err(msg) => {
                    let _ = writeln!(out, "{msg}");
                }
            },
            HostEvent::Eof => break,
            HostEvent::Signal(signal) => {
                tracing::info!(?signal, "terminating");
                return ExitCode::from(signal.exit_code());
            }
        }
        let _ = print_surface(&mut surface, &mut out);
        let _ = out.flush();
    }

    tracing::info!("session closed");
    ExitCode::SUCCESS
}

#[cfg(test)]
#[path = "../tests/unit/host_commands.rs"]
mod tests;
