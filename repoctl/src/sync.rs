use std::sync::Arc;

use anyhow::Result;
use repoctl_core::{change::PreviewArtifact, repository::RepoId};
use repoctl_github::GitHubClient;
use repoctl_reconcile::{Executor, Outcome, Reconciler, TracingLogger};

use crate::{settings, Options, SyncArgs};

/// Run the `apply` or `preview` command.
pub(crate) async fn sync(options: &Options, args: &SyncArgs, executor: Executor) -> Result<()> {
    let settings = settings::load(&args.settings)?;
    let client = GitHubClient::new(&repoctl_github::Config {
        api_url: options.api_url.clone(),
        token: options.token.clone(),
        ..Default::default()
    })?;
    let reconciler = Reconciler::new(Arc::new(client), Arc::new(TracingLogger), executor);

    tracing::info!(repo = %args.repo, mode = ?executor, "Reconciling archive settings");
    let outcomes = reconciler.reconcile(&args.repo, &settings).await?;

    match executor {
        Executor::Preview => println!("{}", preview_json(&outcomes)?),
        Executor::Apply => eprintln!("{}", apply_summary(&args.repo, &outcomes)),
    }
    Ok(())
}

fn preview_json(outcomes: &[Outcome]) -> Result<String> {
    let artifacts: Vec<&PreviewArtifact> = outcomes
        .iter()
        .filter_map(|o| match o {
            Outcome::Previewed(a) => Some(a),
            Outcome::Applied { .. } => None,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&artifacts)?)
}

fn apply_summary(repo: &RepoId, outcomes: &[Outcome]) -> String {
    if outcomes.is_empty() {
        return format!("Nothing to do for {}", repo);
    }
    outcomes
        .iter()
        .map(|o| match o {
            Outcome::Applied { repo, response, .. } => {
                let verb = if response.archived { "archived" } else { "unarchived" };
                format!("{} {}", verb, repo)
            }
            Outcome::Previewed(a) => format!("would change {}: {}", a.resource, a.change.msg),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
