mod application;
mod logging;
mod settings;
mod sync;

use application::{handle_result, runtime};
use clap::{CommandFactory as _, Parser, Subcommand};
use repoctl_core::repository::RepoId;
use repoctl_reconcile::Executor;

fn main() {
    let args = Args::parse();
    handle_result(run_args(args));
}

fn run_args(args: Args) -> anyhow::Result<()> {
    match &args.command {
        Commands::Apply(subargs) => {
            logging::set_up(to_logging_options(&args.options))?;
            runtime().block_on(sync::sync(&args.options, subargs, Executor::Apply))
        }
        Commands::Preview(subargs) => {
            logging::set_up(to_logging_options(&args.options))?;
            runtime().block_on(sync::sync(&args.options, subargs, Executor::Preview))
        }
        Commands::GenerateMan => (|| {
            let cmd = Args::command();
            let man = clap_mangen::Man::new(cmd);
            let mut buffer: Vec<u8> = Default::default();
            man.render(&mut buffer)?;
            println!("{}", String::from_utf8(buffer)?);
            Ok(())
        })(),
        Commands::GenerateMarkdown => {
            let opts = clap_markdown::MarkdownOptions::new().show_footer(false);
            let markdown: String = clap_markdown::help_markdown_custom::<Args>(&opts);
            println!("{}", markdown);
            Ok(())
        }
        Commands::GenerateCompletion { shell } => {
            let mut cmd = Args::command();
            clap_complete::generate(*shell, &mut cmd, "repoctl", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn to_logging_options(options: &Options) -> logging::Options {
    logging::Options {
        verbose: options.verbose,
        color: options.color,
    }
}

/// repoctl: keep repository settings in line with a settings file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    options: Options,
}

#[derive(Parser, Debug, Clone)]
struct Options {
    #[arg(short, long, global = true, default_value = "false")]
    verbose: bool,

    /// Use ANSI colors in log output
    #[arg(long, global = true, default_value = "false")]
    color: bool,

    /// Base URL of the GitHub REST API
    #[arg(long, global = true, env = "GITHUB_API_URL", default_value = repoctl_github::DEFAULT_API_URL)]
    api_url: String,

    /// Token used to authenticate with the GitHub API
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

/// Arguments shared by `apply` and `preview`.
#[derive(clap::Args, Debug)]
pub(crate) struct SyncArgs {
    /// The repository to reconcile, as OWNER/NAME
    #[arg(long)]
    repo: RepoId,

    /// The settings file holding the desired state
    #[arg(long, default_value = ".github/settings.yml")]
    settings: std::path::PathBuf,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply changes so that the repository is in the desired state
    #[command()]
    Apply(SyncArgs),

    /// Show the changes `apply` would make, without making them
    #[command()]
    Preview(SyncArgs),

    /// Generate markdown documentation for repoctl
    #[command(hide = true)]
    GenerateMarkdown,

    /// Generate a manpage for repoctl
    #[command(hide = true)]
    GenerateMan,

    /// Generate shell completion for repoctl
    #[command(hide = true)]
    GenerateCompletion {
        /// The shell to generate completion for
        #[arg(long)]
        shell: clap_complete::Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_preview() {
        let args = Args::try_parse_from([
            "repoctl",
            "preview",
            "--repo",
            "octo/hello-world",
            "--api-url",
            "https://ghe.example.com/api/v3",
        ])
        .unwrap();
        match args.command {
            Commands::Preview(sub) => {
                assert_eq!(sub.repo, RepoId::new("octo", "hello-world"));
                assert_eq!(sub.settings, std::path::PathBuf::from(".github/settings.yml"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(args.options.api_url, "https://ghe.example.com/api/v3");
    }

    #[test]
    fn reject_malformed_repo() {
        for repo in ["no-slash", "octo/a?x", "octo/.."] {
            assert!(
                Args::try_parse_from(["repoctl", "apply", "--repo", repo]).is_err(),
                "accepted {:?}",
                repo
            );
        }
    }
}
