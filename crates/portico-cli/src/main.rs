use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use portico_auth::create_access_token;
use portico_config::{DatabaseConfig, JwtConfig};
use portico_db::{PgPool, PgUserStore, UserStore, init_db_pool, schema};
use portico_models::CreateUserDto;
use uuid::Uuid;
use validator::Validate;

#[derive(Parser)]
#[command(name = "portico-cli")]
#[command(about = "Portico CLI - Administrative tools for Portico", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the users and profiles tables if they do not exist
    InitSchema,
    /// Create a user account
    CreateUser {
        /// Email address
        #[arg(short = 'e', long)]
        email: String,

        /// Grant administrator rights
        #[arg(long)]
        admin: bool,
    },
    /// Print a bearer token for an existing user
    IssueToken {
        /// UUID of the user the token is for
        #[arg(short = 'u', long)]
        user_id: Uuid,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();
    let pool = init_db_pool(&DatabaseConfig::from_env()).await?;

    match cli.command {
        Commands::InitSchema => handle_init_schema(&pool).await,
        Commands::CreateUser { email, admin } => handle_create_user(&pool, email, admin).await,
        Commands::IssueToken { user_id } => handle_issue_token(pool, user_id).await,
    }
}

async fn handle_init_schema(pool: &PgPool) -> anyhow::Result<()> {
    schema::ensure_schema(pool).await?;
    println!("✅ Schema is up to date (users, profiles)");
    Ok(())
}

async fn handle_create_user(pool: &PgPool, email: String, is_admin: bool) -> anyhow::Result<()> {
    let dto = CreateUserDto { email, is_admin };
    dto.validate().context("Invalid user")?;

    schema::ensure_schema(pool).await?;

    match portico_db::users::create_user(pool, dto).await {
        Ok(user) => {
            println!("✅ User created successfully!");
            println!("   UUID: {}", user.uuid);
            println!("   Email: {}", user.email);
            println!("   Admin: {}", user.is_admin);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Error creating user: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_issue_token(pool: PgPool, user_id: Uuid) -> anyhow::Result<()> {
    let users = PgUserStore::new(pool);
    if let Err(e) = users.find_user_by_id(user_id).await {
        eprintln!("❌ Cannot issue token: {}", e);
        std::process::exit(1);
    }

    let token = create_access_token(user_id, &JwtConfig::from_env())
        .context("Failed to sign token")?;
    println!("{token}");
    Ok(())
}
