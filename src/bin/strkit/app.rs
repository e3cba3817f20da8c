use std::io::{self, IsTerminal, Read, Write};

use crate::{bootstrap::BootStrap, clap_app};
use clap::ArgMatches;
use nu_ansi_term::Color::Yellow;
use strkit::{
    cards::{card_at, card_id},
    cipher::rot13,
    debug,
    error::*,
    rectangle::rectangle,
    string_utils,
    template::{extract_name, GreetingRenderer},
    transforms::TransformManager,
};

pub struct App {
    pub matches: ArgMatches,
}

/// Text taken either from the command line or from the standard input
struct Input {
    text: String,
    from_stdin: bool,
}

impl App {
    pub fn new() -> Result<Self> {
        #[cfg(windows)]
        let _ = nu_ansi_term::enable_ansi_support();

        let interactive_output = std::io::stdout().is_terminal();

        Ok(App {
            matches: Self::matches(interactive_output)?,
        })
    }

    pub fn matches(interactive_output: bool) -> Result<ArgMatches> {
        Ok(clap_app::build_app(interactive_output).get_matches())
    }

    /// Retrieves the text joining the values of the given argument, or the
    /// whole standard input when the argument is missing.
    fn read_input(args: &ArgMatches, id: &str) -> Result<Input> {
        match args.get_many::<String>(id) {
            Some(values) => Ok(Input {
                text: values.map(|s| s.as_str()).collect::<Vec<_>>().join(" "),
                from_stdin: false,
            }),
            None => {
                let mut text = String::new();
                io::stdin().lock().read_to_string(&mut text)?;
                Ok(Input {
                    text,
                    from_stdin: true,
                })
            }
        }
    }

    /// Writes the transformed text. Text read from stdin already carries its
    /// own line endings and is written verbatim.
    fn write_output(output: &mut dyn Write, text: &str, from_stdin: bool) -> Result<()> {
        if from_stdin {
            write!(output, "{}", text)?;
        } else {
            writeln!(output, "{}", text)?;
        }
        Ok(())
    }

    /// Fetches a required string argument (guaranteed by clap)
    fn required<'a>(args: &'a ArgMatches, id: &str) -> Result<&'a str> {
        args.get_one::<String>(id)
            .map(|s| s.as_str())
            .ok_or_else(|| Error::ArgsProcessingError(format!("missing argument \"{}\"", id)))
    }

    /// Reports a non fatal problem on stderr
    fn warn(message: &str) {
        eprintln!("{}", Yellow.paint(message));
    }

    /// Start the application, bootstraps the configuration and runs the selected subcommand.
    ///
    /// # Returns
    /// `Ok(true)` on success, `Ok(false)` if the command produced no result
    /// (e.g. unknown card), or the error that stopped the command.
    pub fn start(&self) -> Result<bool> {
        let bootstrap = BootStrap::new(
            self.matches
                .get_one::<String>("config")
                .map(|s| s.as_str()),
        )?;
        let config = bootstrap.get_config();

        let stdout = io::stdout();
        let mut output = stdout.lock();

        let (name, args) = self
            .matches
            .subcommand()
            .ok_or_else(|| Error::ArgsProcessingError("no subcommand supplied".to_string()))?;
        debug!("Running subcommand \"{}\"", name);

        match name {
            "rot13" => {
                let input = Self::read_input(args, "text")?;
                Self::write_output(&mut output, &rot13(&input.text), input.from_stdin)?;
            }
            "apply" => {
                let names: Vec<&String> = args
                    .get_many::<String>("transform")
                    .map(|v| v.collect())
                    .unwrap_or_default();
                let input = Self::read_input(args, "text")?;
                let result = TransformManager::get().apply(&names, &input.text)?;
                Self::write_output(&mut output, &result, input.from_stdin)?;
            }
            "transforms" => {
                for name in TransformManager::get().share().names() {
                    writeln!(output, "{}", name)?;
                }
            }
            "concat" => {
                let result = string_utils::concatenate(
                    Self::required(args, "first")?,
                    Self::required(args, "second")?,
                );
                writeln!(output, "{}", result)?;
            }
            "length" => {
                let text = Self::required(args, "text")?;
                let length = if args.get_flag("graphemes") {
                    string_utils::grapheme_length(text)
                } else {
                    string_utils::length(text)
                };
                writeln!(output, "{}", length)?;
            }
            "greet" => {
                let pattern = args
                    .get_one::<String>("pattern")
                    .map(|s| s.as_str())
                    .unwrap_or(&config.defaults.greeting);
                let greeting = GreetingRenderer::new(pattern)
                    .with_vars(&config.vars)
                    .render(
                        Self::required(args, "first_name")?,
                        Self::required(args, "last_name")?,
                    )?;
                writeln!(output, "{}", greeting)?;
            }
            "extract-name" => {
                writeln!(output, "{}", extract_name(Self::required(args, "greeting")?)?)?;
            }
            "first-char" => match string_utils::first_char(Self::required(args, "text")?) {
                Some(c) => writeln!(output, "{}", c)?,
                None => {
                    Self::warn("The text is empty");
                    return Ok(false);
                }
            },
            "trim" => {
                writeln!(
                    output,
                    "{}",
                    string_utils::trim_whitespace(Self::required(args, "text")?)
                )?;
            }
            "repeat" => {
                let count = args.get_one::<usize>("count").copied().unwrap_or(1);
                writeln!(
                    output,
                    "{}",
                    string_utils::repeat(Self::required(args, "text")?, count)?
                )?;
            }
            "remove-first" => {
                let result = string_utils::remove_first_occurrence(
                    Self::required(args, "text")?,
                    Self::required(args, "value")?,
                );
                writeln!(output, "{}", result)?;
            }
            "unbracket" => {
                writeln!(
                    output,
                    "{}",
                    string_utils::unbracket_tag(Self::required(args, "tag")?)
                )?;
            }
            "upper" => {
                writeln!(
                    output,
                    "{}",
                    string_utils::to_upper(Self::required(args, "text")?)
                )?;
            }
            "emails" => {
                let separator = args
                    .get_one::<String>("separator")
                    .map(|s| s.as_str())
                    .unwrap_or(&config.defaults.email_separator);
                for email in string_utils::split_list(Self::required(args, "list")?, separator) {
                    writeln!(output, "{}", email)?;
                }
            }
            "rect" => {
                let width = args
                    .get_one::<usize>("width")
                    .copied()
                    .unwrap_or(config.defaults.rect_width);
                let height = args
                    .get_one::<usize>("height")
                    .copied()
                    .unwrap_or(config.defaults.rect_height);
                write!(output, "{}", rectangle(width, height)?)?;
            }
            "card-id" => {
                let card = Self::required(args, "card")?;
                if args.get_flag("reverse") {
                    let index = card.parse::<usize>().map_err(|e| {
                        Error::ArgsProcessingError(format!("invalid card index \"{}\": {}", card, e))
                    })?;
                    match card_at(index) {
                        Some(token) => writeln!(output, "{}", token)?,
                        None => {
                            Self::warn(&format!("No card at index {}", index));
                            return Ok(false);
                        }
                    }
                } else {
                    match card_id(card) {
                        Some(id) => writeln!(output, "{}", id)?,
                        None => {
                            Self::warn(&format!("Unknown card \"{}\"", card));
                            return Ok(false);
                        }
                    }
                }
            }
            "is-string" => {
                let value: serde_json::Value = serde_json::from_str(Self::required(args, "json")?)?;
                writeln!(output, "{}", string_utils::is_string(&value))?;
            }
            other => {
                return Err(Error::ArgsProcessingError(format!(
                    "unknown subcommand \"{}\"",
                    other
                )));
            }
        }

        output.flush()?;
        Ok(true)
    }
}
