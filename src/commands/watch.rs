//! Long-running view: re-renders on every published change, recomputes OS mode on
//! filesystem events and takes single-key commands from stdin. Closing stdin does
//! not end the view; `q` or Ctrl-C does.

use crate::commands::{mode_updated_message, WorkspaceOptions};
use crate::core::{
    error::Result,
    print_error, print_info, print_success,
    record::Mode,
    render_grouped_view, Session, ViewChange,
};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::{broadcast, mpsc};

const HELP: &str = "Commands: [t] toggle sort  [o] OS mode  [g] Git mode  [r] refresh  [q] quit";

/// Whether any path of the event lies outside excluded directories
fn is_relevant(event: &Event, roots: &[PathBuf], excluded: &BTreeSet<String>) -> bool {
    if matches!(event.kind, EventKind::Access(_)) {
        return false;
    }
    event
        .paths
        .iter()
        .any(|path| !in_excluded_dir(path, roots, excluded))
}

/// Checks only the components below the owning root, so a root that itself
/// lives under a directory named like an excluded one still gets events.
fn in_excluded_dir(path: &Path, roots: &[PathBuf], excluded: &BTreeSet<String>) -> bool {
    let relative = roots
        .iter()
        .find_map(|root| path.strip_prefix(root).ok())
        .unwrap_or(path);

    relative.parent().is_some_and(|dir| {
        dir.components()
            .any(|c| c.as_os_str().to_str().is_some_and(|name| excluded.contains(name)))
    })
}

fn render(session: &Session) {
    println!(
        "\n{}",
        render_grouped_view(&session.grouped_view(), session.mode(), session.direction())
    );
}

fn spawn_recompute(session: &Arc<Session>, fs_triggered: bool) {
    let session = Arc::clone(session);
    tokio::spawn(async move {
        if fs_triggered {
            session.notify_fs_change().await;
        } else {
            session.refresh().await;
        }
    });
}

pub async fn execute_watch(options: WorkspaceOptions) -> Result<()> {
    let config = options.resolve_config()?;
    let workspace = options.workspace()?;
    let session = Arc::new(Session::with_git(workspace, &config));

    let (fs_tx, fs_rx) = mpsc::unbounded_channel::<()>();
    let excluded = config.excluded_dirs.clone();
    let roots = session.workspace().roots().to_vec();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) if is_relevant(&event, &roots, &excluded) => {
            let _ = fs_tx.send(());
        }
        Ok(_) => {}
        Err(e) => log::warn!("File watcher error: {e}"),
    })?;
    for root in session.workspace().roots() {
        watcher.watch(root, RecursiveMode::Recursive)?;
        log::debug!("Watching {}", root.display());
    }

    print_info(HELP);
    watch_loop(session, fs_rx, BufReader::new(tokio::io::stdin())).await
}

/// Drive the live view until `q` or Ctrl-C. Closed input only stops command
/// reading; file changes keep being followed.
async fn watch_loop<R>(
    session: Arc<Session>,
    mut fs_rx: mpsc::UnboundedReceiver<()>,
    input: R,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut changes = session.subscribe();
    let mut lines = input.lines();
    let mut input_open = true;

    spawn_recompute(&session, false);

    loop {
        tokio::select! {
            Some(()) = fs_rx.recv() => {
                // Coalesce a burst of events into one recompute
                while fs_rx.try_recv().is_ok() {}
                spawn_recompute(&session, true);
            }
            change = changes.recv() => match change {
                Ok(ViewChange::Replaced { mode, .. }) if mode == session.mode() => render(&session),
                Ok(ViewChange::Resorted { .. }) | Err(broadcast::error::RecvError::Lagged(_)) => {
                    render(&session)
                }
                Ok(_) => {}
                Err(broadcast::error::RecvError::Closed) => break,
            },
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    log::debug!("Command input closed, following file changes only");
                    input_open = false;
                    continue;
                };
                match line.trim() {
                    "t" => {
                        let direction = session.toggle_sort_direction();
                        print_info(&format!("Sorting order: {}", direction.label()));
                    }
                    "o" | "g" => {
                        let mode = if line.trim() == "o" { Mode::Os } else { Mode::Git };
                        session.switch_mode(mode).await;
                        print_success(mode_updated_message(mode));
                    }
                    "r" => spawn_recompute(&session, false),
                    "q" => break,
                    "" => {}
                    other => {
                        print_error(&format!("Unknown command '{other}'"));
                        print_info(HELP);
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    Ok(())
}
