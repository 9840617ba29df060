//! User Service - operator CLI for user accounts and schema management.

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use domain::{CreateUser, UserRole};
use user_service_lib::config::UserServiceConfig;
use user_service_lib::token::{JwtProvider, TokenProvider};
use user_service_lib::MigrateAction;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User account management service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateCommands,
    },
    /// User account commands
    Users {
        #[command(subcommand)]
        command: UserCommands,
    },
}

#[derive(Subcommand)]
enum MigrateCommands {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset database and run all migrations
    Fresh,
}

#[derive(Subcommand)]
enum UserCommands {
    /// List all users as JSON lines
    List,
    /// Create a user
    Create {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "USER_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long, default_value = "customer")]
        role: UserRole,
    },
    /// Show a single user
    Show(Lookup),
    /// Resolve the profile behind a bearer token
    Profile {
        #[arg(long)]
        token: String,
    },
    /// Issue a token for an existing user
    Token {
        #[arg(long)]
        email: String,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct Lookup {
    #[arg(long)]
    id: Option<Uuid>,
    #[arg(long)]
    email: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate { action } => {
            let migrate_action = match action {
                MigrateCommands::Up => MigrateAction::Up,
                MigrateCommands::Down => MigrateAction::Down,
                MigrateCommands::Status => MigrateAction::Status,
                MigrateCommands::Fresh => MigrateAction::Fresh,
            };
            let database = UserServiceConfig::database_from_env();
            let status = user_service_lib::run_migrations(&database, migrate_action).await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        Commands::Users { command } => run_user_command(command).await?,
    }

    Ok(())
}

async fn run_user_command(command: UserCommands) -> Result<(), Box<dyn std::error::Error>> {
    let config = UserServiceConfig::from_env()?;
    let service = user_service_lib::connect_service(&config).await?;

    match command {
        UserCommands::List => {
            for user in service.get_all_users().await? {
                println!("{}", serde_json::to_string(&user)?);
            }
        }
        UserCommands::Create {
            first_name,
            last_name,
            email,
            password,
            role,
        } => {
            let user = service
                .create_user(CreateUser {
                    first_name,
                    last_name,
                    email,
                    password,
                    role,
                })
                .await?;
            println!("{}", serde_json::to_string(&user)?);
        }
        UserCommands::Show(Lookup { id, email }) => {
            let user = match (id, email) {
                (Some(id), _) => service.find_user_by_id(id).await?,
                (None, Some(email)) => service.get_user_by_email(&email).await?,
                (None, None) => return Err("either --id or --email is required".into()),
            };
            println!("{}", serde_json::to_string(&user)?);
        }
        UserCommands::Profile { token } => {
            let profile = service.get_user_profile_by_token(&token).await?;
            println!("{}", serde_json::to_string_pretty(&profile)?);
        }
        UserCommands::Token { email } => {
            let user = service.get_user_by_email(&email).await?;
            let token = JwtProvider::new(config.jwt.clone()).generate_token(&user)?;
            println!("{}", token);
        }
    }

    Ok(())
}
