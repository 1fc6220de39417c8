//! User Directory Administration CLI
//!
//! Drives a running user directory server over HTTP: list, inspect, create,
//! update and delete users from the command line.

use clap::{Args, Parser, Subcommand};
use dotenv::dotenv;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::json;

use user_directory::{config::DEFAULT_API_TOKEN, User, UserId};

/// User directory administration CLI
#[derive(Parser)]
#[command(name = "user-admin", about = "User directory administration CLI", version)]
struct Cli {
    /// Base URL of the user directory server
    #[arg(long, env = "USER_API_URL", default_value = "http://localhost:3000")]
    base_url: String,

    /// Bearer token sent in the Authorization header
    #[arg(long, env = "API_TOKEN", default_value = DEFAULT_API_TOKEN)]
    token: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List users one page at a time
    List(ListArgs),
    /// Get user details
    Get(IdArgs),
    /// Create a new user
    Create(UserArgs),
    /// Replace a user's name and email
    Update(UpdateArgs),
    /// Delete a user
    Delete(IdArgs),
}

#[derive(Args)]
struct ListArgs {
    /// Page number (1-based)
    #[arg(short, long)]
    page: Option<i32>,

    /// Users per page
    #[arg(short = 's', long)]
    page_size: Option<i32>,
}

#[derive(Args)]
struct IdArgs {
    /// User ID
    id: UserId,
}

#[derive(Args)]
struct UserArgs {
    /// Display name
    #[arg(short, long)]
    name: String,

    /// Email address
    #[arg(short, long)]
    email: String,
}

#[derive(Args)]
struct UpdateArgs {
    /// User ID
    id: UserId,

    #[command(flatten)]
    user: UserArgs,
}

struct ApiClient {
    client: Client,
    base_url: String,
    token: String,
}

impl ApiClient {
    fn new(base_url: String, token: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, Box<dyn std::error::Error>> {
        let response = request.bearer_auth(&self.token).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| value["error"].as_str().map(str::to_string))
            .unwrap_or(body);

        Err(match status {
            StatusCode::NOT_FOUND => "User not found".into(),
            _ if detail.is_empty() => format!("Request failed with {}", status).into(),
            _ => format!("Request failed with {}: {}", status, detail).into(),
        })
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let api = ApiClient::new(cli.base_url, cli.token);

    match cli.command {
        Commands::List(args) => list_users(&api, args).await?,
        Commands::Get(args) => get_user(&api, args).await?,
        Commands::Create(args) => create_user(&api, args).await?,
        Commands::Update(args) => update_user(&api, args).await?,
        Commands::Delete(args) => delete_user(&api, args).await?,
    }

    Ok(())
}

fn print_user(user: &User) {
    println!("   ID: {}", user.id);
    println!("   Name: {}", user.name);
    println!("   Email: {}", user.email);
}

async fn list_users(api: &ApiClient, args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut query = Vec::new();
    if let Some(page) = args.page {
        query.push(("page", page));
    }
    if let Some(page_size) = args.page_size {
        query.push(("pageSize", page_size));
    }

    let request = api.client.get(api.url("/users")).query(&query);
    let users: Vec<User> = api.send(request).await?.json().await?;

    if users.is_empty() {
        println!("No users found.");
        return Ok(());
    }

    println!("{:<6} {:<30} {}", "ID", "NAME", "EMAIL");
    for user in &users {
        println!("{:<6} {:<30} {}", user.id, user.name, user.email);
    }

    Ok(())
}

async fn get_user(api: &ApiClient, args: IdArgs) -> Result<(), Box<dyn std::error::Error>> {
    let request = api.client.get(api.url(&format!("/users/{}", args.id)));
    let user: User = api.send(request).await?.json().await?;

    println!("User Details:");
    print_user(&user);
    Ok(())
}

async fn create_user(api: &ApiClient, args: UserArgs) -> Result<(), Box<dyn std::error::Error>> {
    let request = api
        .client
        .post(api.url("/users"))
        .json(&json!({ "name": args.name, "email": args.email }));
    let response = api.send(request).await?;

    let location = response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let user: User = response.json().await?;

    println!("User created successfully!");
    print_user(&user);
    if let Some(location) = location {
        println!("   Location: {}", location);
    }
    Ok(())
}

async fn update_user(api: &ApiClient, args: UpdateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let request = api
        .client
        .put(api.url(&format!("/users/{}", args.id)))
        .json(&json!({ "name": args.user.name, "email": args.user.email }));
    let user: User = api.send(request).await?.json().await?;

    println!("User updated successfully!");
    print_user(&user);
    Ok(())
}

async fn delete_user(api: &ApiClient, args: IdArgs) -> Result<(), Box<dyn std::error::Error>> {
    let request = api.client.delete(api.url(&format!("/users/{}", args.id)));
    api.send(request).await?;

    println!("User {} deleted.", args.id);
    Ok(())
}
