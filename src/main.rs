/// Userhub - user management backend
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use userhub::{
    config::AppConfig,
    db,
    models::{NewUser, ADMIN_ROLE_ID},
    router::create_router,
    services::AuthService,
    state::AppState,
    store::{PgUserStore, UserStore},
};

#[derive(Parser)]
#[command(name = "userhub")]
#[command(about = "User management backend with JWT authentication", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create an admin account
    CreateAdmin {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "userhub=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => serve().await?,
        Commands::CreateAdmin {
            name,
            email,
            password,
        } => create_admin(&name, &email, &password).await?,
        Commands::ListUsers => list_users().await?,
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing::info!("Starting {}", config.app.name);
    tracing::info!("Environment: {}", config.app.env);

    let pool = db::connect(&config.database).await?;
    db::run_migrations(&pool).await?;

    let store: Arc<dyn UserStore> = Arc::new(PgUserStore::new(pool));
    let auth_service = Arc::new(AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.token_ttl_hours,
    ));

    let state = AppState::new(store, Arc::clone(&auth_service));
    let app = create_router(state, auth_service);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn create_admin(name: &str, email: &str, password: &str) -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    config.validate()?;

    let pool = db::connect(&config.database).await?;
    db::run_migrations(&pool).await?;

    let store = PgUserStore::new(pool);
    let auth_service = AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.token_ttl_hours,
    );

    let password_hash = auth_service.hash_password(password)?;
    let user = store
        .create(NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            role_id: Some(ADMIN_ROLE_ID),
        })
        .await?;

    tracing::info!("Created admin account {} ({})", user.id, user.email);

    Ok(())
}

async fn list_users() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    config.validate()?;

    let pool = db::connect(&config.database).await?;
    db::run_migrations(&pool).await?;

    let store = PgUserStore::new(pool);
    let users = store.get_all().await?;

    println!("Users:");
    for user in users {
        println!("  {} - {} <{}> (role {})", user.id, user.name, user.email, user.role_id);
    }

    Ok(())
}
