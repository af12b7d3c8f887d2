mod config;
mod error;
mod output;

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use access::{Account, RoleName, RoleRequirement, Session};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::{Config, Format};
use error::{Error, Result};

const CONFIG_FILE: &str = "rolegate.toml";

/// Exit code for a denied route or unmet role guard.
const DENIED: u8 = 2;

#[derive(Parser)]
#[command(name = "rolegate")]
#[command(about = "Resolve dashboard roles, navigation, and route access for an account", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON user record to resolve ('-' reads stdin). Omit for an anonymous account.
    #[arg(short, long, global = true)]
    account: Option<PathBuf>,

    /// Config file (defaults to ./rolegate.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(short, long, global = true, value_enum)]
    format: Option<Format>,

    /// Treat the request as having no verified session
    #[arg(long, global = true)]
    unauthenticated: bool,

    #[command(flatten)]
    flags: FlagArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Account flags set directly on the command line, OR-ed with the account file.
#[derive(Args)]
struct FlagArgs {
    #[arg(long, global = true)]
    superuser: bool,
    #[arg(long, global = true)]
    admin: bool,
    #[arg(long, global = true)]
    staff: bool,
    #[arg(long, global = true)]
    staff_account: bool,
    #[arg(long, global = true)]
    volunteer: bool,
}

impl FlagArgs {
    fn any(&self) -> bool {
        self.superuser || self.admin || self.staff || self.staff_account || self.volunteer
    }

    fn account(&self) -> Account {
        Account {
            is_superuser: self.superuser,
            is_admin_account: self.admin,
            is_staff: self.staff,
            is_staff_account: self.staff_account,
            is_volunteer: self.volunteer,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the account's role
    Role,
    /// Print the account's permission set
    Permissions,
    /// Print the navigation tree
    Nav,
    /// Check access to a dashboard route
    Check {
        /// Route path, matched exactly
        route: String,
    },
    /// Print the profile badge summary
    Badge,
    /// List the route table
    Routes,
    /// Check the account against a role guard
    Guard {
        /// Required role (repeatable)
        #[arg(short, long = "role")]
        roles: Vec<RoleName>,
        /// Require every listed role instead of any
        #[arg(long)]
        all: bool,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_tracing(&config.log_level);

    let format = cli.format.unwrap_or(config.output.format);
    let out = Printer {
        format,
        pretty: config.output.pretty,
    };

    let account = load_account(cli.account.as_deref(), &cli.flags)?;
    let session = if cli.unauthenticated {
        Some(Session::unauthenticated("no verified session"))
    } else {
        account.map(Session::Authenticated)
    };
    tracing::debug!(?account, authenticated = !cli.unauthenticated, "loaded account");

    match cli.command {
        Commands::Role => {
            let role = access::resolve_role(verified_account(session.as_ref())?);
            out.print(&role, || role.to_string())?;
        }
        Commands::Permissions => {
            let perms = access::resolve_permissions(verified_account(session.as_ref())?);
            out.print(&perms, || output::permissions(&perms))?;
        }
        Commands::Nav => {
            let tree = match &session {
                Some(session) => session.navigation()?,
                None => access::build_navigation(None),
            };
            out.print(&tree, || output::navigation(&tree))?;
        }
        Commands::Check { route } => {
            let decision = match &session {
                Some(session) => session.check_route(&route),
                None => access::check_route_access(&route, None),
            };
            out.print(&decision, || output::decision(&route, &decision))?;
            if !decision.has_access {
                return Ok(ExitCode::from(DENIED));
            }
        }
        Commands::Badge => {
            let badge = match &session {
                Some(session) => session.badge(),
                None => Some(access::role_badge(None)),
            };
            match badge {
                Some(badge) => out.print(&badge, || output::badge(&badge))?,
                None => out.print(&serde_json::Value::Null, || "(not authenticated)".to_string())?,
            }
        }
        Commands::Routes => {
            let table = access::routes();
            let rows: Vec<_> = table
                .iter()
                .map(|(path, requirement)| serde_json::json!({ "route": path, "requires": requirement }))
                .collect();
            out.print(&rows, || output::routes(table))?;
        }
        Commands::Guard { roles, all } => {
            let requirement = if all {
                RoleRequirement::all(roles)
            } else {
                RoleRequirement::any(roles)
            };
            let satisfied = match &session {
                Some(session) => session.satisfies(&requirement),
                None => requirement.is_satisfied_by(None),
            };
            let label = if satisfied { "satisfied" } else { "not satisfied" };
            out.print(&serde_json::json!({ "satisfied": satisfied }), || label.to_string())?;
            if !satisfied {
                return Ok(ExitCode::from(DENIED));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// The session's account, refusing sessions that failed validation.
fn verified_account(session: Option<&Session>) -> Result<Option<&Account>> {
    match session {
        Some(Session::Unauthenticated { reason }) => {
            Err(access::Error::NotAuthenticated(reason.clone()).into())
        }
        Some(session) => Ok(session.account()),
        None => Ok(None),
    }
}

struct Printer {
    format: Format,
    pretty: bool,
}

impl Printer {
    fn print(&self, value: &impl serde::Serialize, text: impl FnOnce() -> String) -> Result<()> {
        match self.format {
            Format::Json => println!("{}", output::json(value, self.pretty)?),
            Format::Text => println!("{}", text()),
        }
        Ok(())
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Ok(Config::load(path)?),
        None if Path::new(CONFIG_FILE).exists() => Ok(Config::load(CONFIG_FILE)?),
        None => Ok(Config::default_config()),
    }
}

/// Read the account from a file, stdin, and/or flags. `None` when nothing
/// identifies an account; a `null` record counts as nothing.
fn load_account(path: Option<&Path>, flags: &FlagArgs) -> Result<Option<Account>> {
    let from_file = match path {
        Some(path) if path == Path::new("-") => {
            let mut json = String::new();
            io::stdin().read_to_string(&mut json)?;
            Account::parse_optional(&json)?
        }
        Some(path) if !path.exists() => {
            return Err(Error::AccountNotFound {
                path: path.to_path_buf(),
            });
        }
        Some(path) => Account::load_optional(path)?,
        None => None,
    };

    let from_flags = flags.any().then(|| flags.account());

    Ok(match (from_file, from_flags) {
        (Some(file), Some(flags)) => Some(file.merge(flags)),
        (file, flags) => file.or(flags),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_flags() -> FlagArgs {
        FlagArgs {
            superuser: false,
            admin: false,
            staff: false,
            staff_account: false,
            volunteer: false,
        }
    }

    fn write_record(name: &str, json: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("rolegate-{}-{name}.json", std::process::id()));
        std::fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn test_null_record_loads_as_no_account() {
        let path = write_record("null", "null");
        let account = load_account(Some(&path), &no_flags()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(account, None);
        assert!(access::resolve_permissions(account.as_ref()).granted().is_empty());
    }

    #[test]
    fn test_null_record_with_flags_uses_flags() {
        let path = write_record("null-flags", "null");
        let flags = FlagArgs {
            volunteer: true,
            ..no_flags()
        };
        let account = load_account(Some(&path), &flags).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(account, Some(Account::volunteer()));
    }

    #[test]
    fn test_array_record_is_rejected() {
        let path = write_record("array", "[true]");
        let result = load_account(Some(&path), &no_flags());
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(Error::Access(access::Error::Parse(_)))));
    }
}
