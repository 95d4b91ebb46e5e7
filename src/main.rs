use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use wirecase::{casing::KeyCase, cli, config, error, utils};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Convert camelCase / PascalCase identifiers to snake_case
    Snake(SnakeOptions),

    /// Convert snake_case identifiers to camelCase or PascalCase
    Hump(HumpOptions),

    /// Rewrite the keys of a JSON document into the wire convention
    Encode(EncodeOptions),

    /// Rewrite the keys of a wire JSON document into the application convention
    Decode(DecodeOptions),

    /// POST a JSON document to the configured API with the standard encoding
    Post(PostOptions),

    /// Run the local mock wire API
    Serve(ServeOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SnakeOptions {
    /// Identifiers to convert
    #[clap(required = true)]
    identifiers: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct HumpOptions {
    /// Target case (camel or pascal)
    #[clap(long, default_value = "camel", value_parser = utils::parse_key_case)]
    case: KeyCase,

    /// Identifiers to convert
    #[clap(required = true)]
    identifiers: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct EncodeOptions {
    /// JSON file to read; stdin when omitted or `-`
    file: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct DecodeOptions {
    /// Target case for keys (camel or pascal)
    #[clap(long, default_value = "camel", value_parser = utils::parse_key_case)]
    case: KeyCase,

    /// JSON file to read; stdin when omitted or `-`
    file: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct PostOptions {
    /// Endpoint path, e.g. /api/user/get_user_schedule_1
    path: String,

    /// JSON request body; stdin when omitted or `-`
    file: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Bind address; defaults to WIRECASE_SERVER_ADDRESS or 127.0.0.1:8080
    #[clap(long)]
    addr: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Snake(opt) => cli::snake(opt.identifiers),
        Command::Hump(opt) => cli::hump(opt.identifiers, opt.case),
        Command::Encode(opt) => cli::encode(opt.file).await,
        Command::Decode(opt) => cli::decode(opt.file, opt.case).await,
        Command::Post(opt) => cli::post(opt.path, opt.file).await,
        Command::Serve(opt) => cli::serve(opt.addr).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
