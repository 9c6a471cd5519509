use anyhow::Context;
use clap::{Parser, Subcommand};
use cloudcenter::{ApiClient, Collection, Credentials, Resource};
use serde::Serialize;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Manage CloudCenter tenants, users and their billing resources.
#[derive(Parser)]
#[command(name = "cloudcenterctl", version)]
struct Cli {
    /// Base URL of the CloudCenter API
    #[arg(long, env = "CLOUDCENTER_URL")]
    url: String,

    #[arg(long, env = "CLOUDCENTER_USERNAME")]
    username: String,

    /// API secret for the given username
    #[arg(long, env = "CLOUDCENTER_SECRET", hide_env_values = true)]
    secret: String,

    /// Accept self-signed TLS certificates
    #[arg(long)]
    insecure: bool,

    /// Per-request timeout, in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    resource: ResourceCommand,
}

#[derive(Subcommand)]
enum ResourceCommand {
    Users {
        #[command(subcommand)]
        action: UserAction,
    },
    Tenants {
        #[command(subcommand)]
        action: Action,
    },
    Contracts {
        #[arg(long)]
        tenant: String,
        #[command(subcommand)]
        action: Action,
    },
    Bundles {
        #[arg(long)]
        tenant: String,
        #[command(subcommand)]
        action: Action,
    },
    Plans {
        #[arg(long)]
        tenant: String,
        #[command(subcommand)]
        action: Action,
    },
    ActivationProfiles {
        #[arg(long)]
        tenant: String,
        #[command(subcommand)]
        action: Action,
    },
}

/// Operations every resource supports.
#[derive(Subcommand)]
enum Action {
    /// List the first page of records
    List,
    Get { id: String },
    /// Create a record from its JSON representation
    Create { json: String },
    /// Replace a record from its JSON representation, which must carry its id
    Update { json: String },
    Delete { id: String },
}

#[derive(Subcommand)]
enum UserAction {
    #[command(flatten)]
    Common(Action),
    /// Find a user by email address (first page only)
    FindByEmail { email: String },
    /// Delete a user by email address (first page only)
    DeleteByEmail { email: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = ApiClient::builder()
        .base_url(cli.url)
        .credentials(Credentials::new(cli.username, cli.secret))
        .accept_invalid_certs(cli.insecure)
        .timeout(Duration::from_secs(cli.timeout))
        .build()
        .context("unable to configure client")?;

    match cli.resource {
        ResourceCommand::Users { action } => match action {
            UserAction::Common(action) => perform(client.users(), action).await,
            UserAction::FindByEmail { email } => {
                print(&client.users().find_by_email(&email).await?)
            }
            UserAction::DeleteByEmail { email } => {
                client.users().delete_by_email(&email).await?;
                Ok(())
            }
        },
        ResourceCommand::Tenants { action } => perform(client.tenants(), action).await,
        ResourceCommand::Contracts { tenant, action } => {
            perform(client.contracts(&tenant), action).await
        }
        ResourceCommand::Bundles { tenant, action } => {
            perform(client.bundles(&tenant), action).await
        }
        ResourceCommand::Plans { tenant, action } => perform(client.plans(&tenant), action).await,
        ResourceCommand::ActivationProfiles { tenant, action } => {
            perform(client.activation_profiles(&tenant), action).await
        }
    }
}

/// Runs one of the common operations against a collection, printing
/// whatever comes back as JSON.
async fn perform<R>(collection: Collection<'_, R>, action: Action) -> anyhow::Result<()>
where
    R: Resource,
{
    match action {
        Action::List => print(&collection.list().await?),
        Action::Get { id } => print(&collection.get(&id).await?),
        Action::Create { json } => {
            let record: R = serde_json::from_str(&json)
                .with_context(|| format!("invalid {} JSON", R::KIND))?;
            print(&collection.create(&record).await?)
        }
        Action::Update { json } => {
            let record: R = serde_json::from_str(&json)
                .with_context(|| format!("invalid {} JSON", R::KIND))?;
            print(&collection.update(&record).await?)
        }
        Action::Delete { id } => {
            collection.delete(&id).await?;
            Ok(())
        }
    }
}

fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
