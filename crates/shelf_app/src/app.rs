use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use shelf_core::{update, AppState, AppViewModel, CollectionState, Lifecycle, MovieId, Msg};
use shelf_engine::EngineHandle;
use shelf_logging::{shelf_debug, shelf_info, shelf_warn};

use crate::config::AppConfig;
use crate::effects::EffectRunner;
use crate::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(20);
const HELP: &str = "commands: refresh <id> | dismiss | quit";

pub struct RunOptions {
    /// Movies to refresh as soon as the library is ready.
    pub refresh: Vec<MovieId>,
    pub once: bool,
}

pub fn run(config: AppConfig, options: RunOptions) -> anyhow::Result<()> {
    config.validate()?;
    let engine =
        EngineHandle::new(config.client_settings()).context("failed to set up library client")?;

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    if !options.once {
        println!("{HELP}");
        spawn_command_reader(msg_tx);
    }

    let mut shell = Shell {
        state: AppState::with_notification_timeout(config.notification_timeout()),
        runner: EffectRunner::new(engine),
        queued_refreshes: options.refresh,
    };

    shell.dispatch(Msg::Mounted);
    loop {
        let mut inbox = shell.runner.poll();
        inbox.extend(msg_rx.try_iter());
        let idle_tick = inbox.is_empty();
        for msg in inbox {
            shell.dispatch(msg);
        }
        shell.issue_queued_refreshes();

        if shell.state.lifecycle() == Lifecycle::TornDown {
            break;
        }
        if options.once && shell.state.is_idle() && shell.queued_refreshes.is_empty() {
            let failed = matches!(shell.state.collection(), CollectionState::Error(_));
            shell.dispatch(Msg::Teardown);
            if failed {
                anyhow::bail!("library could not be loaded");
            }
            break;
        }
        if idle_tick {
            thread::sleep(POLL_INTERVAL);
        }
    }

    shelf_info!("shelf exited");
    Ok(())
}

struct Shell {
    state: AppState,
    runner: EffectRunner,
    queued_refreshes: Vec<MovieId>,
}

impl Shell {
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let view = state.view();
        let was_dirty = state.consume_dirty();
        self.state = state;

        self.runner.run(effects);
        if was_dirty {
            print_view(&view);
        }
    }

    /// Refreshes requested on the command line wait for the library to settle.
    fn issue_queued_refreshes(&mut self) {
        if self.queued_refreshes.is_empty() {
            return;
        }
        match self.state.collection() {
            CollectionState::Loading => {}
            CollectionState::Error(_) => {
                shelf_warn!(
                    "Dropping {} queued refreshes; library failed to load",
                    self.queued_refreshes.len()
                );
                self.queued_refreshes.clear();
            }
            CollectionState::Ready(_) => {
                for movie_id in std::mem::take(&mut self.queued_refreshes) {
                    self.dispatch(Msg::RefreshClicked { movie_id });
                }
            }
        }
    }
}

fn print_view(view: &AppViewModel) {
    let mut out = io::stdout().lock();
    let mut write = || -> io::Result<()> {
        writeln!(out)?;
        for line in ui::render::render(view) {
            writeln!(out, "{line}")?;
        }
        out.flush()
    };
    if let Err(err) = write() {
        shelf_warn!("Failed to write view: {}", err);
    }
}

fn spawn_command_reader(msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_command(&line) {
                Ok(Some(msg)) => {
                    let quit = msg == Msg::Teardown;
                    if msg_tx.send(msg).is_err() || quit {
                        return;
                    }
                }
                Ok(None) => {}
                Err(err) => println!("{err}\n{HELP}"),
            }
        }
        shelf_debug!("stdin closed");
        let _ = msg_tx.send(Msg::Teardown);
    });
}

/// Parses one line of user input. Blank lines are `Ok(None)`.
pub(crate) fn parse_command(line: &str) -> Result<Option<Msg>, String> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let msg = match command.to_ascii_lowercase().as_str() {
        "refresh" | "r" => {
            let raw = words.next().ok_or_else(|| "refresh needs a movie id".to_string())?;
            let movie_id = raw
                .parse::<MovieId>()
                .map_err(|_| format!("not a movie id: {raw}"))?;
            Msg::RefreshClicked { movie_id }
        }
        "dismiss" | "d" => Msg::NotificationDismissed,
        "quit" | "q" | "exit" => Msg::Teardown,
        other => return Err(format!("unknown command: {other}")),
    };
    if let Some(extra) = words.next() {
        return Err(format!("unexpected argument: {extra}"));
    }
    Ok(Some(msg))
}
