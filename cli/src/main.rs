use clap::{Args, Parser, Subcommand};
use emoji_client::net::types::{
    EmojiCreate, EmojiQuery, EmojiSort, EmojiUpdate, LoginRequest, RegisterRequest,
};
use emoji_client::net::transport::HttpTransport;
use emoji_client::state::storage::{FileStorage, TokenStorage};
use emoji_client::{ApiClient, ApiError, ClientConfig, EmojiFeed, Session, SessionStore};
use serde::Serialize;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not signed in; run `emoji login` first")]
    NotSignedIn,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "emoji", about = "Emoji catalog API CLI")]
struct Cli {
    #[arg(long, env = "EMOJI_API_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    #[arg(long, env = "EMOJI_API_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Directory holding the persisted session token.
    #[arg(long, env = "EMOJI_TOKEN_DIR", default_value = ".emoji-session")]
    token_dir: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    List(ListArgs),
    Submit(SubmitArgs),
    Update(UpdateArgs),
    Delete {
        id: i64,
    },
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        display_name: Option<String>,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    Whoami,
    ResetRequest {
        #[arg(long)]
        email: String,
    },
    ResetConfirm {
        #[arg(long)]
        token: String,
        #[arg(long)]
        new_password: String,
    },
}

#[derive(Args, Debug)]
struct ListArgs {
    #[arg(long)]
    search: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    sort: Option<EmojiSort>,
    #[arg(long)]
    limit: Option<u32>,
    #[arg(long)]
    offset: Option<u32>,
}

#[derive(Args, Debug)]
struct SubmitArgs {
    #[arg(long)]
    symbol: String,
    #[arg(long)]
    title: String,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long = "keyword")]
    keywords: Vec<String>,
    #[arg(long)]
    submitter_email: Option<String>,
}

#[derive(Args, Debug)]
struct UpdateArgs {
    id: i64,
    #[arg(long)]
    symbol: Option<String>,
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long = "keyword")]
    keywords: Option<Vec<String>>,
}

impl From<ListArgs> for EmojiQuery {
    fn from(args: ListArgs) -> Self {
        Self {
            search: args.search,
            category: args.category,
            sort: args.sort,
            limit: args.limit,
            offset: args.offset,
        }
    }
}

impl From<SubmitArgs> for EmojiCreate {
    fn from(args: SubmitArgs) -> Self {
        Self {
            symbol: args.symbol,
            title: args.title,
            description: args.description,
            category: args.category,
            keywords: args.keywords,
            submitter_email: args.submitter_email,
        }
    }
}

impl UpdateArgs {
    fn into_parts(self) -> (i64, EmojiUpdate) {
        let update = EmojiUpdate {
            symbol: self.symbol,
            title: self.title,
            description: self.description,
            category: self.category,
            keywords: self.keywords,
        };
        (self.id, update)
    }
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(error) = run(cli).await {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ClientConfig { request_timeout_secs: cli.timeout_secs, ..ClientConfig::new(&cli.base_url) };
    let api = ApiClient::from_config(&config)?;
    let session = SessionStore::load(FileStorage::new(&cli.token_dir));

    match cli.command {
        Command::List(args) => run_list(&api, &session, args).await,
        Command::Submit(args) => {
            let token = session.token();
            let created = api.submit_emoji(&args.into(), Some(token.as_str())).await?;
            print_json(&created)
        }
        Command::Update(args) => {
            let token = session.token();
            let (id, update) = args.into_parts();
            let updated = api.update_emoji(id, &update, Some(token.as_str())).await?;
            print_json(&updated)
        }
        Command::Delete { id } => {
            let token = session.token();
            api.delete_emoji(id, Some(token.as_str())).await?;
            println!("deleted {id}");
            Ok(())
        }
        Command::Register { email, password, display_name } => {
            let user = api
                .register_user(&RegisterRequest { email, password, display_name })
                .await?;
            print_json(&user)
        }
        Command::Login { email, password } => run_login(&api, &session, email, password).await,
        Command::Logout => {
            run_logout(&session);
            println!("signed out");
            Ok(())
        }
        Command::Whoami => run_whoami(&api, &session).await,
        Command::ResetRequest { email } => {
            let reply = api.request_password_reset(&email).await?;
            print_json(&reply)
        }
        Command::ResetConfirm { token, new_password } => {
            let reply = api.confirm_password_reset(&token, &new_password).await?;
            print_json(&reply)
        }
    }
}

async fn run_list<T: HttpTransport, S: TokenStorage>(
    api: &ApiClient<T>,
    session: &SessionStore<S>,
    args: ListArgs,
) -> Result<(), CliError> {
    let token = session.token();
    let feed = api.fetch_emojis(Some(token.as_str()), &args.into()).await;
    if let Some(notice) = fallback_notice(&feed) {
        eprintln!("{notice}");
    }
    print_json(feed.page())
}

fn fallback_notice(feed: &EmojiFeed) -> Option<&'static str> {
    feed.is_fallback()
        .then_some("warning: backend unavailable, showing bundled emojis")
}

/// The token is stored as soon as login succeeds. A failed profile lookup
/// only leaves the user unknown until the next `whoami`.
async fn run_login<T: HttpTransport, S: TokenStorage>(
    api: &ApiClient<T>,
    session: &SessionStore<S>,
    email: String,
    password: String,
) -> Result<(), CliError> {
    let token = api.login_user(&LoginRequest { email, password }).await?.access_token;
    let user = match api.fetch_current_user(Some(token.as_str())).await {
        Ok(user) => user,
        Err(error) => {
            tracing::warn!(%error, "signed in but failed to load profile");
            None
        }
    };
    session.set_session(Session::new(token, user));
    tracing::info!("session stored");
    print_json(&session.user())
}

fn run_logout<S: TokenStorage>(session: &SessionStore<S>) {
    session.sign_out();
}

async fn run_whoami<T: HttpTransport, S: TokenStorage>(
    api: &ApiClient<T>,
    session: &SessionStore<S>,
) -> Result<(), CliError> {
    let token = session.token();
    let Some(user) = api.fetch_current_user(Some(token.as_str())).await? else {
        return Err(CliError::NotSignedIn);
    };
    session.set_session(Session::new(token, Some(user.clone())));
    print_json(&user)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
