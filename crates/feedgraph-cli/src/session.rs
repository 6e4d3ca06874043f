//! The interactive menu.
//!
//! A [`Session`] owns the [`Registry`] and talks to any `BufRead`/`Write`
//! pair, so the binary hands it stdin/stdout and tests hand it byte buffers.

use std::io::{self, BufRead, Write};

use feedgraph_engine::Registry;
use feedgraph_settings::FeedgraphSettings;
use tracing::{debug, info};

use crate::commands::{self, CommandError};
use crate::render;

const PROMPT_MENU: &str = "Enter menu: ";
const PROMPT_SETUP: &str = "Setup social graph: ";
const PROMPT_ACTION: &str = "Enter user Actions: ";
const PROMPT_DISPLAY: &str = "Display activity for: ";

/// One entry of the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// Add a follow edge.
    Setup,
    /// Upload or like.
    Action,
    /// Show one account's feed.
    Display,
    /// Show the most-liked photos.
    Trending,
    /// Leave the session.
    Exit,
}

impl MenuChoice {
    /// Parse the number typed at the menu prompt.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Setup),
            "2" => Some(Self::Action),
            "3" => Some(Self::Display),
            "4" => Some(Self::Trending),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }

    /// Stable name for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Action => "action",
            Self::Display => "display",
            Self::Trending => "trending",
            Self::Exit => "exit",
        }
    }
}

/// Menu loop over a registry.
pub struct Session<R, W> {
    input: R,
    output: W,
    registry: Registry,
    title: String,
    trending_limit: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// New session with an empty registry.
    pub fn new(input: R, output: W, settings: &FeedgraphSettings) -> Self {
        Self {
            input,
            output,
            registry: Registry::new(),
            title: settings.menu.title.clone(),
            trending_limit: settings.trending.limit,
        }
    }

    /// Start from an existing registry instead of an empty one.
    #[must_use]
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// The graph built so far.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Consume the session, returning its registry and output sink.
    pub fn into_parts(self) -> (Registry, W) {
        (self.registry, self.output)
    }

    /// Run until the user picks Exit or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt(PROMPT_MENU)? else {
                info!("input closed, ending session");
                return Ok(());
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                debug!(input = %line, "invalid menu choice");
                write!(self.output, "\ninvalid menu\n")?;
                continue;
            };
            debug!(choice = choice.as_str(), "menu selection");

            let outcome = match choice {
                MenuChoice::Setup => {
                    let Some(line) = self.prompt(PROMPT_SETUP)? else {
                        return Ok(());
                    };
                    commands::handle_setup(&mut self.registry, &line).map(|()| String::new())
                }
                MenuChoice::Action => {
                    let Some(line) = self.prompt(PROMPT_ACTION)? else {
                        return Ok(());
                    };
                    commands::handle_action(&mut self.registry, &line).map(|()| String::new())
                }
                MenuChoice::Display => {
                    let Some(line) = self.prompt(PROMPT_DISPLAY)? else {
                        return Ok(());
                    };
                    render::render_activities(&self.registry, &line)
                }
                MenuChoice::Trending => {
                    Ok(render::render_trending(&self.registry, self.trending_limit))
                }
                MenuChoice::Exit => {
                    write!(self.output, "\nGood bye!\n")?;
                    self.output.flush()?;
                    return Ok(());
                }
            };
            self.report(outcome)?;
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "{}\n\n1. Setup\n2. Action\n3. Display\n4. Trending\n5. Exit",
            self.title
        )
    }

    /// Print `text` and read one line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Errors get a trailing blank line; results are printed as-is.
    fn report(&mut self, outcome: Result<String, CommandError>) -> io::Result<()> {
        match outcome {
            Ok(text) => writeln!(self.output, "{text}"),
            Err(err) => {
                debug!(kind = err.error_kind(), error = %err, "command failed");
                writeln!(self.output, "{err}\n")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run(script: &str) -> (Registry, String) {
        let mut session = Session::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::<u8>::new(),
            &FeedgraphSettings::default(),
        );
        session.run().unwrap();
        let (registry, out) = session.into_parts();
        (registry, String::from_utf8(out).unwrap())
    }

    #[test]
    fn menu_choices_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Setup));
        assert_eq!(MenuChoice::parse(" 5 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn exit_says_goodbye() {
        let (_, out) = run("5\n");
        assert!(out.starts_with("Activity Reporter\n\n1. Setup\n"));
        assert!(out.ends_with("Enter menu: \nGood bye!\n"));
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        let (reg, out) = run("1\nAlice follows Bob\n");
        assert_eq!(reg.len(), 2);
        assert!(!out.contains("Good bye!"));
    }

    #[test]
    fn unknown_choice_is_reported() {
        let (_, out) = run("9\n5\n");
        assert!(out.contains("Enter menu: \ninvalid menu\n"));
    }

    #[test]
    fn errors_are_followed_by_a_blank_line() {
        let (_, out) = run("2\nnobody uploaded photo\n5\n");
        assert!(out.contains("Enter user Actions: unknown user nobody\n\n"));
    }

    #[test]
    fn resumes_an_existing_graph() {
        let mut reg = Registry::new();
        commands::handle_setup(&mut reg, "Bob follows Alice").unwrap();
        let session = Session::new(Cursor::new(Vec::<u8>::new()), Vec::<u8>::new(), &FeedgraphSettings::default())
            .with_registry(reg);
        assert!(session.registry().has_followed("Bob", "Alice"));
    }

    #[test]
    fn crlf_input_is_accepted() {
        let (reg, _) = run("1\r\nAlice follows Bob\r\n5\r\n");
        assert!(reg.has_followed("Alice", "Bob"));
    }
}
