use crate::commands::WorkspaceOptions;
use crate::core::{error::Result, print_success, Session};
use colored::*;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Print (or save) a file's content as of the commit that added it
pub async fn execute_history(
    path: &Path,
    options: WorkspaceOptions,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = options.resolve_config()?;
    let workspace = options.workspace()?;
    let session = Session::with_git(workspace, &config);

    let found = session.historical_content(path).await?;
    let short_commit = &found.commit[..found.commit.len().min(7)];

    if let Some(output) = output {
        std::fs::write(&output, &found.content)?;
        print_success(&format!(
            "Saved {} @ {} ({}) to {}",
            found.relative,
            short_commit,
            found.language,
            output.display()
        ));
        return Ok(());
    }

    eprintln!(
        "{} {} @ {} ({})",
        "═══".bright_blue().bold(),
        found.relative.bright_blue().bold(),
        short_commit.yellow(),
        found.language.bright_black()
    );

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&found.content)?;
    stdout.flush()?;
    Ok(())
}
