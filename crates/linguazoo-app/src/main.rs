use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use linguazoo_config::Config;
use linguazoo_core::{AnimalClassifier, AnimalValidator, GameEntryResolver};
use linguazoo_dictionary::FreeDictionaryClient;
use linguazoo_store::{CollectionStore, JsonFileStore, seed_collection};
use linguazoo_translator::MyMemoryTranslator;
use linguazoo_types::Language;
use tracing_subscriber::EnvFilter;

mod commands;
mod play;

#[derive(Parser)]
#[command(name = "linguazoo", version, about = "Two-language animal guessing game")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,

    /// Answer yes to confirmation prompts
    #[arg(long, global = true)]
    yes: bool,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Validate a word and add it to the collection
    Add {
        word: String,
        /// Clue for the bot opponent; merged idempotently on duplicates
        #[arg(long)]
        clue: Option<String>,
        #[arg(long, value_enum, default_value_t = LangArg::Ind)]
        lang: LangArg,
    },
    /// Remove an animal from the collection
    Delete { word: String },
    /// Show the collection
    List {
        #[arg(long, value_enum, default_value_t = LangArg::Ind)]
        lang: LangArg,
    },
    /// Run the entry resolver for a word and print the decision
    Check {
        word: String,
        #[arg(long, value_enum, default_value_t = LangArg::Ind)]
        lang: LangArg,
    },
    /// Play a hangman round
    Play {
        /// Word to host with; random when omitted
        #[arg(long)]
        word: Option<String>,
        #[arg(long)]
        clue: Option<String>,
        #[arg(long, value_enum, default_value_t = LangArg::Ind)]
        lang: LangArg,
    },
    /// Write the collection as a portable document
    Export { path: Option<PathBuf> },
    /// Replace the collection with an exported document
    Import { path: PathBuf },
    /// Replace the collection with the starter zoo
    Reset,
}

#[derive(Clone, Copy, ValueEnum)]
enum LangArg {
    Ind,
    Eng,
}

impl From<LangArg> for Language {
    fn from(arg: LangArg) -> Language {
        match arg {
            LangArg::Ind => Language::Indonesian,
            LangArg::Eng => Language::English,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::new();

    let store = JsonFileStore::new(&config.store.path);
    seed_if_empty(&store)?;

    let resolver = build_resolver(&config);

    match cli.command {
        CliCommand::Add { word, clue, lang } => {
            commands::add(&store, &resolver, &word, clue, lang.into(), cli.yes).await
        }
        CliCommand::Delete { word } => commands::delete(&store, &word, cli.yes),
        CliCommand::List { lang } => commands::list(&store, lang.into()),
        CliCommand::Check { word, lang } => {
            commands::check(&store, &resolver, &word, lang.into()).await
        }
        CliCommand::Play { word, clue, lang } => {
            play::run(&store, &resolver, word, clue, lang.into()).await
        }
        CliCommand::Export { path } => commands::export(&store, path),
        CliCommand::Import { path } => commands::import(&store, &path, cli.yes),
        CliCommand::Reset => commands::reset(&store, cli.yes),
    }
}

fn build_resolver(config: &Config) -> GameEntryResolver {
    let translator = Arc::new(MyMemoryTranslator::new(config));
    let dictionary = Arc::new(FreeDictionaryClient::new(config));
    let validator = AnimalValidator::new(translator, dictionary, AnimalClassifier::default());

    GameEntryResolver::new(validator)
}

/// First launch behavior: an absent or empty store gets the starter zoo.
fn seed_if_empty(store: &JsonFileStore) -> Result<()> {
    let collection = store.load().context("failed to load collection")?;

    if collection.is_empty() {
        let seed = seed_collection();
        store.save(&seed).context("failed to seed collection")?;
        tracing::info!(count = seed.len(), "seeded starter collection");
    }

    Ok(())
}
