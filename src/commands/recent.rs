use crate::commands::{mode_updated_message, WorkspaceOptions};
use crate::core::{
    error::Result,
    print_success,
    record::{Mode, SortDirection},
    render_grouped_view,
    view::DirectoryGroup,
    Session,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GroupedViewReport {
    pub mode: Mode,
    pub direction: SortDirection,
    pub roots: Vec<std::path::PathBuf>,
    pub groups: Vec<DirectoryGroup>,
}

pub async fn execute_recent(options: WorkspaceOptions, json: bool) -> Result<()> {
    let config = options.resolve_config()?;
    let workspace = options.workspace()?;
    let mode = config.default_mode;

    let session = Session::with_git(workspace, &config);
    session.switch_mode(mode).await;
    let groups = session.grouped_view();

    if json {
        let report = GroupedViewReport {
            mode,
            direction: session.direction(),
            roots: session.workspace().roots().to_vec(),
            groups,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print!(
        "{}",
        render_grouped_view(&groups, session.mode(), session.direction())
    );
    print_success(mode_updated_message(mode));
    Ok(())
}
