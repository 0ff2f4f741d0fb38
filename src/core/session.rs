//! The aggregation session: mode, sort direction and one ranked set per mode.
//!
//! All engine operations go through a [`Session`], which can be shared behind an
//! `Arc` between the host's command handlers and its file-watcher trigger.
//! Ranked sets are swapped whole under a write lock, so readers only ever see a
//! complete set. Overlapping recomputes of the same mode are resolved by ticket:
//! each pass takes the next ticket for its mode and is published only if no newer
//! pass has started meanwhile.

use crate::core::{
    config::LatrConfig,
    git::{GitBackend, VcsBackend},
    history::{historical_content, HistoricalContent},
    os_source::collect_os_records,
    ranking::RankedSet,
    record::{FileRecord, Mode, SortDirection},
    vcs_source::collect_vcs_records,
    view::{group_by_directory, DirectoryGroup},
    walker::WalkOptions,
    workspace::Workspace,
    Result,
};
use futures::future::join_all;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;

const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// Notification sent to subscribers after the live view changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewChange {
    /// A recompute published a new ranked set for `mode`
    Replaced { mode: Mode, len: usize },
    /// The active set was re-sorted under `direction`
    Resorted { direction: SortDirection },
    /// The active mode changed; a recompute follows
    ModeSwitched { mode: Mode },
}

struct SessionState {
    mode: Mode,
    direction: SortDirection,
    sets: [Arc<RankedSet>; 2],
}

pub struct Session {
    workspace: Workspace,
    walk_options: WalkOptions,
    associations: BTreeMap<String, String>,
    backend: Arc<dyn VcsBackend>,
    state: RwLock<SessionState>,
    tickets: [AtomicU64; 2],
    changes: broadcast::Sender<ViewChange>,
}

impl Session {
    pub fn new(workspace: Workspace, config: &LatrConfig, backend: Arc<dyn VcsBackend>) -> Self {
        let direction = config.sort_direction();
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);

        Self {
            workspace,
            walk_options: WalkOptions::new(config.excluded_dirs.clone(), config.follow_symlinks),
            associations: config.associations.clone(),
            backend,
            state: RwLock::new(SessionState {
                mode: config.default_mode,
                direction,
                sets: [
                    Arc::new(RankedSet::empty(direction)),
                    Arc::new(RankedSet::empty(direction)),
                ],
            }),
            tickets: [AtomicU64::new(0), AtomicU64::new(0)],
            changes,
        }
    }

    /// Session backed by the `git` binary and libgit2.
    pub fn with_git(workspace: Workspace, config: &LatrConfig) -> Self {
        let backend = Arc::new(GitBackend::new(config.git_timeout()));
        Self::new(workspace, config, backend)
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn mode(&self) -> Mode {
        self.state.read().mode
    }

    pub fn direction(&self) -> SortDirection {
        self.state.read().direction
    }

    pub fn ranked_set(&self, mode: Mode) -> Arc<RankedSet> {
        Arc::clone(&self.state.read().sets[mode.slot()])
    }

    pub fn active_set(&self) -> Arc<RankedSet> {
        let state = self.state.read();
        Arc::clone(&state.sets[state.mode.slot()])
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ViewChange> {
        self.changes.subscribe()
    }

    fn notify(&self, change: ViewChange) {
        // No subscribers is fine
        let _ = self.changes.send(change);
    }

    /// Re-run collection, merge, dedup and sort for `mode`.
    ///
    /// Returns the published set, or `None` when a newer recompute of the same
    /// mode started while this one was in flight and this result was dropped.
    pub async fn recompute(&self, mode: Mode) -> Option<Arc<RankedSet>> {
        let ticket = self.begin(mode);
        let per_root = self.collect(mode).await;
        let built = RankedSet::build(per_root, self.direction());
        self.publish(mode, ticket, built)
    }

    fn begin(&self, mode: Mode) -> u64 {
        self.tickets[mode.slot()].fetch_add(1, Ordering::SeqCst) + 1
    }

    fn publish(&self, mode: Mode, ticket: u64, built: RankedSet) -> Option<Arc<RankedSet>> {
        let published = {
            let mut state = self.state.write();
            if self.tickets[mode.slot()].load(Ordering::SeqCst) != ticket {
                log::debug!("Dropping superseded {mode} recompute (ticket {ticket})");
                return None;
            }

            let set = if built.direction() == state.direction {
                built
            } else {
                built.resorted(state.direction)
            };
            let set = Arc::new(set);
            state.sets[mode.slot()] = Arc::clone(&set);
            set
        };

        log::debug!("Published {} {mode} records", published.len());
        self.notify(ViewChange::Replaced {
            mode,
            len: published.len(),
        });
        Some(published)
    }

    async fn collect(&self, mode: Mode) -> Vec<Vec<FileRecord>> {
        let roots = self.workspace.roots();
        match mode {
            Mode::Os => {
                join_all(roots.iter().map(|root| async move {
                    collect_os_records(root, &self.walk_options)
                        .await
                        .unwrap_or_else(|e| {
                            log::error!("Error reading folder {}: {e}", root.display());
                            Vec::new()
                        })
                }))
                .await
            }
            Mode::Git => {
                join_all(roots.iter().map(|root| async move {
                    collect_vcs_records(self.backend.as_ref(), root)
                        .await
                        .unwrap_or_else(|e| {
                            log::error!("Error fetching Git files for folder {}: {e}", root.display());
                            Vec::new()
                        })
                }))
                .await
            }
        }
    }

    /// Flip the sort direction and re-sort the active set without re-collecting.
    pub fn toggle_sort_direction(&self) -> SortDirection {
        let direction = {
            let mut state = self.state.write();
            state.direction = state.direction.flipped();
            let slot = state.mode.slot();
            let resorted = state.sets[slot].resorted(state.direction);
            state.sets[slot] = Arc::new(resorted);
            state.direction
        };

        self.notify(ViewChange::Resorted { direction });
        direction
    }

    /// Make `mode` active and recompute it. The other mode's set is kept as is.
    pub async fn switch_mode(&self, mode: Mode) -> Option<Arc<RankedSet>> {
        self.state.write().mode = mode;
        self.notify(ViewChange::ModeSwitched { mode });
        self.recompute(mode).await
    }

    /// Recompute whichever mode is active.
    pub async fn refresh(&self) -> Option<Arc<RankedSet>> {
        self.recompute(self.mode()).await
    }

    /// Filesystem change trigger: only OS mode follows raw file events.
    pub async fn notify_fs_change(&self) -> Option<Arc<RankedSet>> {
        match self.mode() {
            Mode::Os => self.recompute(Mode::Os).await,
            Mode::Git => None,
        }
    }

    pub fn grouped_view(&self) -> Vec<DirectoryGroup> {
        group_by_directory(&self.active_set())
    }

    pub async fn historical_content(&self, path: &Path) -> Result<HistoricalContent> {
        historical_content(
            self.backend.as_ref(),
            &self.workspace,
            path,
            &self.associations,
        )
        .await
    }
}
