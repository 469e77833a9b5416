use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bump_tag::cli::run_workflow;
use bump_tag::config::{self, Inputs};
use bump_tag::{source, ui, validation};

#[derive(clap::Parser)]
#[command(
    name = "bump-tag",
    version,
    about = "Compute the next semantic version tag from the existing tags of a repository"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, env = "INPUT_PREFIX", help = "Tag prefix, e.g. 'v'")]
    prefix: Option<String>,

    #[arg(long, env = "INPUT_SUFFIX", help = "Tag suffix, e.g. 'beta'")]
    suffix: Option<String>,

    #[arg(
        short,
        long,
        env = "INPUT_BUMP",
        help = "none, patch, minor, major, prerelease, prepatch, preminor or premajor"
    )]
    bump: Option<String>,

    #[arg(
        long,
        env = "INPUT_REPLACE_SUFFIX",
        help = "'true' to render the result with --new-suffix"
    )]
    replace_suffix: Option<String>,

    #[arg(long, env = "INPUT_COPY_FROM", help = "Alias of --replace-suffix")]
    copy_from: Option<String>,

    #[arg(long, env = "INPUT_NEW_SUFFIX", help = "Suffix used when replacing")]
    new_suffix: Option<String>,

    #[arg(long, env = "INPUT_TARGET_SUFFIX", help = "Alias of --new-suffix")]
    target_suffix: Option<String>,

    #[arg(long, env = "INPUT_SELECTION", help = "Tag selection policy: latest or priority")]
    selection: Option<String>,

    #[arg(long, env = "INPUT_SOURCE", help = "Tag source: auto, git or github")]
    source: Option<String>,

    #[arg(long, help = "Local repository path")]
    path: Option<String>,

    #[arg(long, env = "GITHUB_REPOSITORY", help = "GitHub repository as owner/repo")]
    repository: Option<String>,

    #[arg(long, env = "GITHUB_API_URL", help = "GitHub API base URL")]
    api_url: Option<String>,

    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true, help = "GitHub token")]
    github_token: Option<String>,

    #[arg(short, long, help = "Log engine decisions to stderr")]
    verbose: bool,
}

impl Args {
    fn inputs(&self) -> Inputs {
        Inputs {
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            bump: self.bump.clone(),
            replace_suffix: self.replace_suffix.clone(),
            copy_from: self.copy_from.clone(),
            new_suffix: self.new_suffix.clone(),
            target_suffix: self.target_suffix.clone(),
            selection: self.selection.clone(),
            source: self.source.clone(),
            path: self.path.clone(),
            repository: self.repository.clone(),
            api_url: self.api_url.clone(),
            github_token: self.github_token.clone(),
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?.apply_inputs(&args.inputs())?;
    // Opening a source can fail on its own; configuration errors must surface first.
    validation::validate(&config)?;
    let tag_source = source::from_config(&config.source)?;
    ui::display_status(&format!("Reading tags from {}", tag_source.describe()));

    let result = run_workflow(&config, tag_source.as_ref())?;
    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }

    ui::display_selection(&result.latest_tag, &result.updated_tag);
    ui::emit_output(ui::UPDATED_TAG_OUTPUT, &result.updated_tag.full_tag)?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
