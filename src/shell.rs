//! Interactive session: reads line commands, drives the controller and
//! re-renders the view after every change.

use std::io::Write;
use std::str::FromStr;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::client::PortfolioApi;
use crate::render::render_view;
use crate::view::{Applied, Controller, Phase};

pub const HELP: &str = "\
Commands:
  skill <name>    toggle the project filter for a skill
  search <text>   search projects and skills
  type <text>     set the search text without submitting it
  search | clear  reset to the full project list
  retry           retry a failed profile load
  reload          fetch the profile again
  health          check the backend
  help            show this message
  quit            leave
";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Skill(String),
    Search(String),
    Type(String),
    Retry,
    Reload,
    Health,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("unknown command `{0}`; type `help` for a list")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ParseError::Empty);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "skill" | "s" => {
                if rest.is_empty() {
                    Err(ParseError::MissingArgument("skill"))
                } else {
                    Ok(Self::Skill(rest.to_string()))
                }
            }
            "search" | "/" => Ok(Self::Search(rest.to_string())),
            "clear" => Ok(Self::Search(String::new())),
            "type" => Ok(Self::Type(rest.to_string())),
            "retry" => Ok(Self::Retry),
            "reload" => Ok(Self::Reload),
            "health" => Ok(Self::Health),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

/// Run a session until `quit` or end of input.
///
/// Input is held while the profile is loading. At end of input the session
/// waits for outstanding fetches and renders the final view.
pub async fn run<A, R, W>(
    controller: &mut Controller<A>,
    input: R,
    out: &mut W,
) -> std::io::Result<()>
where
    A: PortfolioApi,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    controller.mount();
    write_view(controller, out)?;

    let mut lines = input.lines();
    loop {
        let accepting = controller.state().phase() != &Phase::Loading;
        tokio::select! {
            line = lines.next_line(), if accepting => {
                let Some(line) = line? else {
                    controller.settle().await;
                    write_view(controller, out)?;
                    break;
                };
                match line.parse::<Command>() {
                    Ok(Command::Quit) => break,
                    Ok(command) => {
                        if execute(controller, command, out).await? {
                            write_view(controller, out)?;
                        }
                    }
                    Err(ParseError::Empty) => {}
                    Err(e) => writeln!(out, "{}", e)?,
                }
            }
            Some(applied) = controller.process_next() => {
                if applied != Applied::Stale {
                    write_view(controller, out)?;
                }
            }
            else => break,
        }
    }

    Ok(())
}

/// Apply one command. Returns whether the view should be redrawn.
pub async fn execute<A, W>(
    controller: &mut Controller<A>,
    command: Command,
    out: &mut W,
) -> std::io::Result<bool>
where
    A: PortfolioApi,
    W: Write,
{
    match command {
        Command::Skill(name) => {
            let known = controller
                .state()
                .profile()
                .is_some_and(|p| p.skill(&name).is_some());
            if !known {
                writeln!(out, "No skill named `{}`", name)?;
                return Ok(false);
            }
            controller.select_skill(&name);
        }
        Command::Search(text) => controller.search(text),
        Command::Type(text) => controller.set_search_text(text),
        Command::Retry => {
            if !controller.retry() {
                writeln!(out, "Nothing to retry")?;
                return Ok(false);
            }
        }
        Command::Reload => controller.reload(),
        Command::Health => {
            match controller.api().health_check().await {
                Ok(health) => writeln!(out, "{}: {}", health.status, health.message)?,
                Err(e) => writeln!(out, "{}", e)?,
            }
            return Ok(false);
        }
        Command::Help => {
            write!(out, "{}", HELP)?;
            return Ok(false);
        }
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

fn write_view<A: PortfolioApi, W: Write>(
    controller: &Controller<A>,
    out: &mut W,
) -> std::io::Result<()> {
    writeln!(out, "{}", render_view(controller.state()))?;
    out.flush()
}
