//! CLI entry point - the composition root.
//!
//! `serve` and `paths` run without a client; every other command is
//! dispatched with a bootstrapped `CliContext`. `links` and `settings` must
//! also pass the auth gate.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use homedash_cli::handlers::{self, auth::AuthSettingsEdits, links::LinkEdits, serve::ServeArgs};
use homedash_cli::{
    AuthCommand, AuthSettingsCommand, Cli, CliConfig, CliContext, CliError, Commands,
    LinkOrderCommand, LinksCommand, SettingsCommand, bootstrap, ensure_authenticated,
};
use homedash_core::{DashboardSettingsUpdate, LinkDraft};

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads `env` fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Serve {
            port,
            data_dir,
            static_dir,
            allowed_origins,
        } => {
            let args = ServeArgs {
                port,
                data_dir,
                static_dir,
                allowed_origins,
            };
            handlers::serve::execute(args).await
        }
        Commands::Paths => handlers::paths::execute(cli.cache_dir.as_deref()),
        Commands::Links { command } => {
            let ctx = bootstrap(CliConfig::new(cli.api_url, cli.cache_dir)?).await?;
            ensure_authenticated(&ctx).await?;
            run_links(&ctx, command).await
        }
        Commands::Settings { command } => {
            let ctx = bootstrap(CliConfig::new(cli.api_url, cli.cache_dir)?).await?;
            ensure_authenticated(&ctx).await?;
            run_settings(&ctx, command).await
        }
        Commands::Auth { command } => {
            let ctx = bootstrap(CliConfig::new(cli.api_url, cli.cache_dir)?).await?;
            run_auth(&ctx, command).await
        }
    }
}

async fn run_links(ctx: &CliContext, command: LinksCommand) -> anyhow::Result<()> {
    match command {
        LinksCommand::List { sort, view, search } => {
            handlers::links::list(ctx, sort, view, search.as_deref()).await
        }
        LinksCommand::Add {
            name,
            url,
            description,
            image_url,
        } => {
            let draft = LinkDraft {
                name,
                url,
                description,
                image_url,
            };
            handlers::links::add(ctx, draft).await
        }
        LinksCommand::Update {
            id,
            name,
            url,
            description,
            image_url,
        } => {
            let edits = LinkEdits {
                name,
                url,
                description,
                image_url,
            };
            handlers::links::update(ctx, &id, edits).await
        }
        LinksCommand::Remove { id } => handlers::links::remove(ctx, &id).await,
        LinksCommand::Order { command } => match command {
            LinkOrderCommand::Show => handlers::links::show_order(ctx).await,
            LinkOrderCommand::Set { ids } => handlers::links::set_order(ctx, ids).await,
        },
        LinksCommand::Move { id, position } => {
            handlers::links::move_link(ctx, &id, position).await
        }
    }
}

async fn run_settings(ctx: &CliContext, command: SettingsCommand) -> anyhow::Result<()> {
    match command {
        SettingsCommand::Show => handlers::settings::show(ctx).await,
        SettingsCommand::Set {
            title,
            subtitle,
            primary_color,
            background_color,
        } => {
            let update = DashboardSettingsUpdate {
                title,
                subtitle,
                primary_color,
                background_color,
            };
            handlers::settings::set(ctx, update).await
        }
    }
}

async fn run_auth(ctx: &CliContext, command: AuthCommand) -> anyhow::Result<()> {
    match command {
        AuthCommand::Login { username, password } => {
            handlers::auth::login(ctx, username, password).await
        }
        AuthCommand::Logout => {
            handlers::auth::logout(ctx);
            Ok(())
        }
        AuthCommand::Status => handlers::auth::status(ctx).await,
        AuthCommand::Settings { command } => match command {
            AuthSettingsCommand::Show => handlers::auth::show_settings(ctx).await,
            AuthSettingsCommand::Set {
                enable,
                disable,
                username,
                password,
            } => {
                let edits = AuthSettingsEdits::from_flags(enable, disable, username, password);
                handlers::auth::set_settings(ctx, edits).await
            }
        },
    }
}
