/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes three top-level command modules:

- `chat`     — Interactive story session
- `generate` — Generate a single story from a prompt
- `list`     — List previously generated stories

These handlers are thin presentation adapters over the library core:
the API client and the session state container.
*/

use crate::api::{StoryApiClient, StoryBackend};
use crate::clipboard;
use crate::config::Config;
use crate::error::{FabulaError, Result};
use crate::session::{GenerateOutcome, StorySession};
use crate::story::{filter_stories, Story};

use colored::Colorize;
use prettytable::{format, Table};

// Special commands parser for the interactive session
pub mod special_commands;

/// Print a story with its prompt and creation time
fn print_story(story: &Story) {
    println!("\n{}", format!("# {}", story.prompt).bold());
    println!("{}", format!("({})", story.created_at.format("%Y-%m-%d %H:%M")).dimmed());
    println!("\n{}\n", story.story);
}

/// Render a story collection as a bordered table
fn print_story_table(stories: &[&Story]) {
    if stories.is_empty() {
        println!("{}", "No stories found.".yellow());
        return;
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BORDERS_ONLY);

    table.add_row(prettytable::row![
        "#".bold(),
        "ID".bold(),
        "Prompt".bold(),
        "Story".bold(),
        "Created".bold()
    ]);

    for (idx, story) in stories.iter().enumerate() {
        table.add_row(prettytable::row![
            idx + 1,
            story.id.to_string().cyan(),
            truncate_chars(&story.prompt, 30),
            truncate_chars(&story.story, 60),
            story.created_at.format("%Y-%m-%d %H:%M")
        ]);
    }

    table.printstd();
}

/// Truncate to at most `max` characters, appending an ellipsis
///
/// Counts characters rather than bytes so multi-byte text (the backend
/// generates Hebrew stories) is never split mid-character.
fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut)
}

// Interactive session handler
pub mod chat {
    //! Interactive story session.
    //!
    //! Runs a readline-based loop: a plain line of input is a topic and
    //! triggers generation, while `/`-prefixed special commands inspect
    //! or manage the session.

    use super::*;
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    use crate::commands::special_commands::{parse_special_command, print_help, SpecialCommand};

    /// Start the interactive story session
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    pub async fn run_chat(config: Config) -> Result<()> {
        let client = StoryApiClient::new(&config.api)?;
        let mut session = StorySession::new(client);

        // Initial snapshot. A failure here is log-only; the session
        // starts with an empty collection and stays usable.
        session.refresh().await;

        let mut rl = DefaultEditor::new()?;
        print_welcome_banner(session.state.stories.len());

        loop {
            match rl.readline("fabula >> ") {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }

                    rl.add_history_entry(trimmed)?;

                    match parse_special_command(trimmed) {
                        Ok(SpecialCommand::List) => {
                            print_story_table(&session.state.filtered(""));
                            continue;
                        }
                        Ok(SpecialCommand::Filter(query)) => {
                            print_story_table(&session.state.filtered(&query));
                            continue;
                        }
                        Ok(SpecialCommand::Copy(index)) => {
                            handle_copy(&session.state.stories, session.state.latest.as_ref(), index);
                            continue;
                        }
                        Ok(SpecialCommand::Refresh) => {
                            if session.refresh().await {
                                println!(
                                    "{}",
                                    format!("Fetched {} stories", session.state.stories.len())
                                        .green()
                                );
                            } else {
                                println!(
                                    "{}",
                                    "Could not reach the backend; keeping the current list."
                                        .yellow()
                                );
                            }
                            continue;
                        }
                        Ok(SpecialCommand::Help) => {
                            print_help();
                            continue;
                        }
                        Ok(SpecialCommand::Exit) => break,
                        Ok(SpecialCommand::None) => {
                            // A plain line is a topic prompt.
                        }
                        Err(e) => {
                            eprintln!("{}", e.to_string().red());
                            continue;
                        }
                    }

                    println!("{}", format!("Generating a story about {:?}...", trimmed).cyan());
                    match session.generate(trimmed).await {
                        GenerateOutcome::Generated(story) => print_story(&story),
                        GenerateOutcome::Failed(message) => {
                            eprintln!("{}", format!("Error: {}", message).red());
                        }
                        GenerateOutcome::EmptyPrompt | GenerateOutcome::Busy => {}
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {:?}", err);
                    break;
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Copy a story's text to the clipboard, best effort
    ///
    /// `index` is 1-based into the collection (newest first); without an
    /// index the most recently generated story is copied. Clipboard
    /// failures are swallowed.
    fn handle_copy(stories: &[Story], latest: Option<&Story>, index: Option<usize>) {
        let story = match index {
            Some(n) => stories.get(n - 1),
            None => latest,
        };

        match story {
            Some(story) => {
                if clipboard::copy_text(&story.story) {
                    println!("{}", format!("Copied story #{}", story.id).green());
                }
            }
            None => println!("{}", "No story to copy yet.".yellow()),
        }
    }

    /// Display the welcome banner at session start
    fn print_welcome_banner(story_count: usize) {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║                  Fabula - AI Story Session                   ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");
        println!("Stories on record: {}", story_count);
        println!("Type a topic to generate a story, '/help' for commands, 'exit' to quit\n");
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        fn story(id: i64, prompt: &str) -> Story {
            Story {
                id,
                prompt: prompt.to_string(),
                story: format!("A story about {}.", prompt),
                created_at: NaiveDate::from_ymd_opt(2026, 8, 25)
                    .unwrap()
                    .and_hms_opt(10, 0, 0)
                    .unwrap(),
            }
        }

        #[test]
        fn test_print_welcome_banner_smoke() {
            print_welcome_banner(0);
            print_welcome_banner(20);
        }

        #[test]
        fn test_handle_copy_without_stories() {
            // No stories and no latest result; must not panic.
            handle_copy(&[], None, None);
            handle_copy(&[], None, Some(3));
        }

        #[test]
        fn test_handle_copy_index_out_of_range() {
            let stories = vec![story(1, "cats")];
            handle_copy(&stories, None, Some(5));
        }
    }
}

// One-shot generation handler
pub mod generate {
    //! One-shot story generation.

    use super::*;

    /// Generate a single story and print it
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    /// * `prompt` - Topic to generate a story about
    /// * `json` - Print the raw story object as JSON instead of text
    pub async fn run_generate(config: Config, prompt: String, json: bool) -> Result<()> {
        let trimmed = prompt.trim();
        if trimmed.is_empty() {
            return Err(FabulaError::Config("prompt is empty after trimming".to_string()).into());
        }

        let client = StoryApiClient::new(&config.api)?;
        match client.generate_story(trimmed).await {
            Ok(story) => {
                if json {
                    println!("{}", serde_json::to_string_pretty(&story)?);
                } else {
                    print_story(&story);
                }
                Ok(())
            }
            Err(e) => {
                let banner = match e.downcast_ref::<FabulaError>() {
                    Some(fe) => fe.banner_text(),
                    None => e.to_string(),
                };
                eprintln!("{}", format!("Error: {}", banner).red());
                Err(e)
            }
        }
    }

}

// Listing handler
pub mod list {
    //! Fetch and render the story collection.

    use super::*;

    /// List stored stories, optionally filtered
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    /// * `query` - Optional case-insensitive substring filter
    /// * `json` - Print the stories as JSON instead of a table
    pub async fn run_list(config: Config, query: Option<String>, json: bool) -> Result<()> {
        let client = StoryApiClient::new(&config.api)?;

        // One-shot listing has no prior view to fall back on, so a
        // failure here propagates instead of being swallowed.
        let stories = client.list_stories().await?;

        let query = query.unwrap_or_default();
        let visible = filter_stories(&stories, &query);

        if json {
            println!("{}", serde_json::to_string_pretty(&visible)?);
        } else {
            print_story_table(&visible);
            if !query.trim().is_empty() {
                println!(
                    "{}",
                    format!("{} of {} stories match {:?}", visible.len(), stories.len(), query)
                        .dimmed()
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_short_string() {
        assert_eq!(truncate_chars("short", 30), "short");
    }

    #[test]
    fn test_truncate_chars_long_string() {
        let out = truncate_chars("abcdefghij", 8);
        assert_eq!(out, "abcde...");
        assert_eq!(out.chars().count(), 8);
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        // Hebrew text: must cut on character boundaries, not bytes.
        let text = "סיפור קצר על דרקונים בעברית";
        let out = truncate_chars(text, 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_print_story_table_empty_smoke() {
        print_story_table(&[]);
    }
}
