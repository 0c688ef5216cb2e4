use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use linguazoo_core::flow::{AddFlow, Rejection};
use linguazoo_core::{Command, GameEntryDecision, GameEntryResolver, InvalidReason, apply};
use linguazoo_store::{
    CollectionStore, JsonFileStore, export_document, import_document, seed_collection,
};
use linguazoo_types::{AnimalCollection, Language};

pub async fn add(
    store: &JsonFileStore,
    resolver: &GameEntryResolver,
    word: &str,
    clue: Option<String>,
    language: Language,
    assume_yes: bool,
) -> Result<()> {
    let collection = store.load().context("failed to load collection")?;

    // Duplicates never re-validate; at most the clue is merged.
    if let Some(record) = collection.find(language, word) {
        let name = record.name_id.clone();
        println!("\"{}\" is already in the zoo.", record.name_in(language));

        if let Some(clue) = clue {
            let next = apply(&collection, Command::AddClue { name, clue })?;
            store.save(&next).context("failed to save collection")?;
            println!("Clue saved.");
        }
        return Ok(());
    }

    let flow = AddFlow::Idle.begin()?;
    let decision = resolver.resolve_entry(word, language, &collection).await;
    let flow = flow.on_decision(decision)?;

    match flow {
        AddFlow::Confirming(ref pending) => {
            if !pending.savable {
                println!(
                    "\"{}\" looks like a real animal, but only Indonesian entries \
                     can be saved. You can still play it with `linguazoo play`.",
                    pending.name
                );
                return Ok(());
            }

            let translation = pending.translation.as_deref().unwrap_or("?");
            let question = format!(
                "Add \"{}\" ({}) to the zoo? [y/N] ",
                pending.name, translation
            );
            if !confirm(&question, assume_yes)? {
                flow.cancel()?;
                println!("Cancelled, nothing saved.");
                return Ok(());
            }

            let (_, record) = flow.confirm()?;
            let record = record.context("confirmed animal had no record to save")?;
            let name = record.name_id.clone();

            let mut next = apply(&collection, Command::Add(record))?;
            if let Some(clue) = clue {
                next = apply(&next, Command::AddClue { name: name.clone(), clue })?;
            }
            store.save(&next).context("failed to save collection")?;
            println!("\"{}\" joined the zoo ({} animals).", name, next.len());
        }
        AddFlow::Rejected(rejection) => print_rejection(&rejection, language),
        AddFlow::NetworkBlocked => print_network_blocked(),
        _ => {}
    }

    Ok(())
}

pub async fn check(
    store: &JsonFileStore,
    resolver: &GameEntryResolver,
    word: &str,
    language: Language,
) -> Result<()> {
    let collection = store.load().context("failed to load collection")?;
    let decision = resolver.resolve_entry(word, language, &collection).await;

    match decision {
        GameEntryDecision::ExistingInCurrentLanguage(record) => {
            println!(
                "\"{}\" is already in the zoo ({} / {}).",
                record.name_in(language),
                record.name_id,
                record.name_en
            );
        }
        GameEntryDecision::LanguageMismatch {
            name_in_current_language,
        } => match name_in_current_language {
            Some(name) => println!(
                "That word is in the other language. In {} it is \"{}\".",
                language.display_name(),
                name
            ),
            None => println!(
                "Looks like a real animal, but in the other language. \
                 Flip the language toggle and try again."
            ),
        },
        GameEntryDecision::NewValidAnimal {
            name,
            translation,
            savable,
        } => {
            match translation {
                Some(translation) => println!("\"{}\" is a new animal ({}).", name, translation),
                None => println!("\"{}\" is a new animal.", name),
            }
            if !savable {
                println!("It can be played but not saved (no reverse translation).");
            }
        }
        GameEntryDecision::Invalid(reason) => print_invalid(&reason),
        GameEntryDecision::NetworkUnavailable => print_network_blocked(),
    }

    Ok(())
}

pub fn list(store: &JsonFileStore, language: Language) -> Result<()> {
    let collection = store.load().context("failed to load collection")?;

    if collection.is_empty() {
        println!("The zoo is empty. Add an animal first!");
        return Ok(());
    }

    for record in collection.records() {
        let name = record.name_in(language);
        let other = record.name_in(language.other());
        if record.clues.is_empty() {
            println!("{name}  ({other})");
        } else {
            println!("{name}  ({other})  clues: {}", record.clues.join("; "));
        }
    }
    println!("Total: {}", collection.len());

    Ok(())
}

pub fn delete(store: &JsonFileStore, word: &str, assume_yes: bool) -> Result<()> {
    let collection = store.load().context("failed to load collection")?;

    let question = format!("Say goodbye to \"{}\"? [y/N] ", word.trim().to_uppercase());
    if !confirm(&question, assume_yes)? {
        println!("Cancelled, nothing deleted.");
        return Ok(());
    }

    let next = apply(&collection, Command::Delete(word.to_string()))?;
    store.save(&next).context("failed to save collection")?;
    println!("Deleted. {} animals left.", next.len());

    Ok(())
}

pub fn export(store: &JsonFileStore, path: Option<std::path::PathBuf>) -> Result<()> {
    let collection = store.load().context("failed to load collection")?;
    let document = export_document(&collection);

    match path {
        Some(path) => {
            std::fs::write(&path, document)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Exported {} animals to {}.", collection.len(), path.display());
        }
        None => println!("{document}"),
    }

    Ok(())
}

pub fn import(store: &JsonFileStore, path: &Path, assume_yes: bool) -> Result<()> {
    let document = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let imported = import_document(&document)?;

    let question = format!(
        "Replace the whole collection with {} animals from {}? [y/N] ",
        imported.len(),
        path.display()
    );
    if !confirm(&question, assume_yes)? {
        println!("Cancelled, collection unchanged.");
        return Ok(());
    }

    replace(store, imported)
}

pub fn reset(store: &JsonFileStore, assume_yes: bool) -> Result<()> {
    if !confirm(
        "Empty the zoo and start over with the starter animals? [y/N] ",
        assume_yes,
    )? {
        println!("Cancelled, collection unchanged.");
        return Ok(());
    }

    replace(store, seed_collection())
}

fn replace(store: &JsonFileStore, next: AnimalCollection) -> Result<()> {
    let collection = store.load().context("failed to load collection")?;
    let next = apply(&collection, Command::Replace(next))?;
    store.save(&next).context("failed to save collection")?;
    println!("Done. The zoo now has {} animals.", next.len());

    Ok(())
}

fn print_rejection(rejection: &Rejection, language: Language) {
    match rejection {
        Rejection::AlreadyKnown(record) => {
            println!("\"{}\" is already in the zoo.", record.name_in(language));
        }
        Rejection::LanguageMismatch(Some(name)) => {
            println!(
                "That word is in the other language. In {} it is \"{}\".",
                language.display_name(),
                name
            );
        }
        Rejection::LanguageMismatch(None) => {
            println!(
                "Looks like a real animal, but in the other language. \
                 Flip the language toggle and try again."
            );
        }
        Rejection::Invalid(reason) => print_invalid(reason),
    }
}

fn print_invalid(reason: &InvalidReason) {
    match reason {
        InvalidReason::EmptyInput => println!("Type an animal name first."),
        InvalidReason::Blacklisted => {
            println!("That names the whole category. Try a specific animal, like KUCING.")
        }
        InvalidReason::NotInDictionary => {
            println!("Hmm, the dictionary doesn't know that word. Check the spelling?")
        }
        InvalidReason::NotAnAnimal => {
            println!("Hmm, that doesn't seem to be an animal. Check it and try again!")
        }
    }
}

// Never word a connectivity problem as a content verdict.
fn print_network_blocked() {
    println!("Couldn't reach the dictionary service. Check your connection and try again.");
}

fn confirm(question: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    print!("{question}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();

    Ok(answer == "y" || answer == "yes" || answer == "ya")
}
