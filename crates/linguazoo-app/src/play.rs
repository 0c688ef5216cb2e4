use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use linguazoo_core::game::{self, Guess};
use linguazoo_core::{GameEntryDecision, GameEntryResolver, GameRound};
use linguazoo_store::{CollectionStore, JsonFileStore};
use linguazoo_types::Language;

const MAX_WRONG: usize = 6;

/// Host one hangman round on stdin/stdout. A supplied word goes through
/// the entry resolver first, exactly like the add flow; a missing word
/// picks a random animal from the collection.
pub async fn run(
    store: &JsonFileStore,
    resolver: &GameEntryResolver,
    word: Option<String>,
    clue: Option<String>,
    language: Language,
) -> Result<()> {
    let collection = store.load().context("failed to load collection")?;

    let round = match word {
        Some(word) => {
            let decision = resolver.resolve_entry(&word, language, &collection).await;
            match decision {
                GameEntryDecision::ExistingInCurrentLanguage(record) => {
                    let clue = clue.or_else(|| record.clues.first().cloned());
                    Some(GameRound::new(
                        record.name_in(language),
                        clue.as_deref().unwrap_or(""),
                    ))
                }
                GameEntryDecision::NewValidAnimal { name, .. } => {
                    Some(GameRound::new(&name, clue.as_deref().unwrap_or("")))
                }
                GameEntryDecision::LanguageMismatch {
                    name_in_current_language: Some(name),
                } => {
                    println!("That word is in the other language; playing \"{name}\" instead.");
                    Some(GameRound::new(&name, clue.as_deref().unwrap_or("")))
                }
                GameEntryDecision::LanguageMismatch {
                    name_in_current_language: None,
                } => {
                    println!("That word seems to be in the other language. Flip the toggle.");
                    None
                }
                GameEntryDecision::Invalid(_) => {
                    println!("That doesn't seem to be an animal. Pick another word.");
                    None
                }
                GameEntryDecision::NetworkUnavailable => {
                    println!(
                        "Couldn't reach the dictionary service. Check your connection \
                         and try again."
                    );
                    None
                }
            }
        }
        None => game::pick_random(&collection, None).map(|record| {
            let clue = record.clues.first().cloned();
            GameRound::new(record.name_in(language), clue.as_deref().unwrap_or(""))
        }),
    };

    let Some(mut round) = round else {
        if collection.is_empty() {
            println!("The zoo is empty. Add an animal first!");
        }
        return Ok(());
    };

    if !round.clue().is_empty() {
        println!("Clue: {}", round.clue());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!(
            "\n{}   (wrong: {}/{})",
            round.masked(),
            round.wrong_guesses().len(),
            MAX_WRONG
        );
        print!("Guess a letter: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let Some(letter) = line.trim().chars().next() else {
            continue;
        };

        match round.guess(letter) {
            Guess::Hit => println!("Yes, there is a {}!", letter.to_ascii_uppercase()),
            Guess::Miss => println!("No {} in this one.", letter.to_ascii_uppercase()),
            Guess::Repeat => println!("Already tried that one."),
        }

        if round.is_won() {
            println!("\n{}  — you got it!", round.word());
            break;
        }

        if round.is_lost(MAX_WRONG) {
            println!("\nOut of guesses! It was {}.", round.word());
            break;
        }
    }

    Ok(())
}
