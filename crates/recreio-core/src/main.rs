//! `recreio` - drive the account forms from a terminal

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use recreio_client::{Account, AuthStatus, Endpoint, HttpTransport};
use recreio_core::{logging, AccountForm, ConsoleHost, SiteConfig, SubmissionPipeline};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// Subcommand that fills and submits one account form
struct AccountCommand {
    name: &'static str,
    about: &'static str,
    form: AccountForm,
    /// Control ids, also used as flag names
    fields: &'static [(&'static str, &'static str)],
}

static ACCOUNT_COMMANDS: [AccountCommand; 7] = [
    AccountCommand {
        name: "register",
        about: "Create an account",
        form: AccountForm::Register,
        fields: &[
            ("name", "Display name"),
            ("email", "E-mail address"),
            ("password", "Password"),
            ("confirm-password", "Password again"),
        ],
    },
    AccountCommand {
        name: "login",
        about: "Start a session",
        form: AccountForm::Login,
        fields: &[("email", "E-mail address"), ("password", "Password")],
    },
    AccountCommand {
        name: "logout",
        about: "End the session",
        form: AccountForm::Logout,
        fields: &[],
    },
    AccountCommand {
        name: "update-name",
        about: "Change the display name",
        form: AccountForm::UpdateName,
        fields: &[("name", "New display name")],
    },
    AccountCommand {
        name: "update-email",
        about: "Change the e-mail address",
        form: AccountForm::UpdateEmail,
        fields: &[("email", "New e-mail address")],
    },
    AccountCommand {
        name: "update-password",
        about: "Change the password",
        form: AccountForm::UpdatePassword,
        fields: &[
            ("current-password", "Current password"),
            ("new-password", "New password"),
            ("confirm-new-password", "New password again"),
        ],
    },
    AccountCommand {
        name: "delete-account",
        about: "Delete the account",
        form: AccountForm::DeleteAccount,
        fields: &[("password", "Password")],
    },
];

fn cli() -> Command {
    let mut cli = Command::new("recreio")
        .version(recreio_core::VERSION)
        .about("Recreio account forms from the terminal")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .value_name("URL")
                .help("API base URL (overrides config and RECREIO_BASE_URL)"),
        )
        .arg(
            Arg::new("cookie")
                .long("cookie")
                .value_name("HEADER")
                .help("Cookie header of an existing session"),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECS")
                .value_parser(value_parser!(u64))
                .help("Request timeout in seconds"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .action(ArgAction::SetTrue)
                .help("Log as JSON lines on stderr"),
        );

    for command in &ACCOUNT_COMMANDS {
        let subcommand = command.fields.iter().fold(
            Command::new(command.name).about(command.about),
            |subcommand, (id, help)| {
                subcommand.arg(Arg::new(*id).long(*id).required(true).help(*help))
            },
        );
        cli = cli.subcommand(subcommand);
    }

    cli.subcommand(Command::new("status").about("Show whether the session is authenticated"))
        .subcommand(Command::new("whoami").about("Show the account of the session"))
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<SiteConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SiteConfig::new(),
    }
    .with_env_overrides();

    if let Some(url) = matches.get_one::<String>("base-url") {
        config = config.with_base_url(url.clone());
    }
    if let Some(cookie) = matches.get_one::<String>("cookie") {
        config = config.with_cookie(cookie.clone());
    }
    if let Some(secs) = matches.get_one::<u64>("timeout") {
        config = config.with_timeout_secs(*secs);
    }
    Ok(config)
}

async fn submit_account(
    pipeline: &SubmissionPipeline,
    host: &ConsoleHost,
    command: &AccountCommand,
    args: &ArgMatches,
) -> anyhow::Result<ExitCode> {
    let spec = command.form.spec();
    let mut form = spec.build_form()?;
    for (id, _) in command.fields {
        let value = args.get_one::<String>(id).cloned().unwrap_or_default();
        form.input(id, value)?;
    }

    let report = pipeline.submit(&mut form, &spec).await;

    for field in form.controls().iter() {
        if let Some(message) = field.shown_message() {
            println!("[{}] {message}", field.id());
        }
    }
    println!("resultado: {}", report.kind);

    Ok(if host.location().is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn run(matches: &ArgMatches) -> anyhow::Result<ExitCode> {
    logging::init(matches.get_flag("log-json"))?;
    let config = load_config(matches)?;

    let transport = HttpTransport::new(&config.client).context("failed to build HTTP client")?;
    let host = Arc::new(ConsoleHost::new());
    let pipeline = SubmissionPipeline::new(Arc::new(transport), host.clone(), config.messages);

    match matches.subcommand() {
        Some(("status", _)) => {
            let status: AuthStatus = pipeline.dispatcher().fetch(Endpoint::AUTH_STATUS).await?;
            println!("autenticado: {}", if status.authenticated { "sim" } else { "não" });
            Ok(ExitCode::SUCCESS)
        }
        Some(("whoami", _)) => {
            let account: Account = pipeline.dispatcher().fetch(Endpoint::MY_ACCOUNT).await?;
            println!("nome: {}", account.name);
            println!("e-mail: {}", account.email);
            Ok(ExitCode::SUCCESS)
        }
        Some((name, args)) => match ACCOUNT_COMMANDS.iter().find(|c| c.name == name) {
            Some(command) => submit_account(&pipeline, &host, command, args).await,
            None => anyhow::bail!("unknown command '{name}'"),
        },
        None => anyhow::bail!("no command given"),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let matches = cli().get_matches();
    match run(&matches).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("erro: {err:#}");
            ExitCode::FAILURE
        }
    }
}
