use clap::{
    arg,
    builder::{styling::AnsiColor, Styles},
    crate_description, crate_name, crate_version, value_parser, ArgAction, ColorChoice, Command,
};

fn env_no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|x| !x.is_empty())
}

// Builds the application command line interface defining the commands, subcommands
// and arguments
pub fn build_app(interactive_output: bool) -> Command {
    let color_when = if interactive_output && !env_no_color() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default())
        .usage(AnsiColor::Green.on_default())
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default());

    Command::new(crate_name!())
    .styles(styles)
    .version(crate_version!())
    .about(crate_description!())
    .color(color_when)
    .subcommand_required(true)
    .arg_required_else_help(true)
    .arg(
        arg!(--config <FILE> "Configuration file to use")
        .long_help(
            "Explicitly sets the configuration file. Defaults to strkit.toml inside \
                    the configuration directory ($STRKIT_CONFIG_DIR).",
        )
        .global(true),
    )
    .subcommand(
        Command::new("rot13")
        .about("Encodes or decodes the text with the ROT13 cipher.")
        .long_about(
            "Shifts every ASCII letter 13 positions keeping its case. Any other character \
                    is left untouched. Applying it twice returns the original text. \
                    Reads from the standard input when no text is given.",
        )
        .arg(arg!([text] ... "The text to encode")),
    )
    .subcommand(
        Command::new("apply")
        .about("Applies a chain of transforms to the text.")
        .long_about(
            "Applies the given transforms in the same order they are specified. \
                    Use the transforms subcommand to list the available names. \
                    Reads from the standard input when no text is given.",
        )
        .arg(
            arg!(-t --transform <NAME> "Transform to apply")
            .required(true)
            .action(ArgAction::Append),
        )
        .arg(arg!([text] ... "The text to transform")),
    )
    .subcommand(Command::new("transforms").about("Lists the available transforms."))
    .subcommand(
        Command::new("concat")
        .about("Concatenates two strings.")
        .arg(arg!(<first> "The first string"))
        .arg(arg!(<second> "The second string")),
    )
    .subcommand(
        Command::new("length")
        .about("Counts the characters of the text.")
        .arg(arg!(<text> "The text to measure"))
        .arg(
            arg!(-g --graphemes "Counts user-perceived characters instead of code points"),
        ),
    )
    .subcommand(
        Command::new("greet")
        .about("Renders a greeting for the given name.")
        .long_about(
            "Renders the greeting pattern (default: \"Hello, {{ first_name }} {{ last_name }}!\"). \
                    The pattern can be changed in the configuration file or with --pattern.",
        )
        .arg(arg!(<first_name> "The first name"))
        .arg(arg!(<last_name> "The last name"))
        .arg(arg!(-p --pattern <PATTERN> "Greeting pattern to render")),
    )
    .subcommand(
        Command::new("extract-name")
        .about("Extracts the name from a \"Hello, <name>!\" greeting.")
        .arg(arg!(<greeting> "The greeting")),
    )
    .subcommand(
        Command::new("first-char")
        .about("Prints the first character of the text.")
        .arg(arg!(<text> "The text")),
    )
    .subcommand(
        Command::new("trim")
        .about("Removes leading and trailing whitespace.")
        .arg(arg!(<text> "The text to trim")),
    )
    .subcommand(
        Command::new("repeat")
        .about("Repeats the text the given number of times.")
        .arg(arg!(<text> "The text to repeat"))
        .arg(arg!(<count> "Number of repetitions").value_parser(value_parser!(usize))),
    )
    .subcommand(
        Command::new("remove-first")
        .about("Removes the first occurrence of a value inside the text.")
        .arg(arg!(<text> "The text"))
        .arg(arg!(<value> "The value to remove")),
    )
    .subcommand(
        Command::new("unbracket")
        .about("Removes the angle brackets from a tag.")
        .arg(arg!(<tag> "The tag, e.g. <div>")),
    )
    .subcommand(
        Command::new("upper")
        .about("Converts the text to upper case.")
        .arg(arg!(<text> "The text to convert")),
    )
    .subcommand(
        Command::new("emails")
        .about("Splits a list of e-mails, one per line.")
        .arg(arg!(<list> "The e-mail list"))
        .arg(
            arg!(-s --separator <SEP> "Separator between e-mails")
            .long_help("Explicitly sets the list separator (defaults to \";\")."),
        ),
    )
    .subcommand(
        Command::new("rect")
        .about("Draws a rectangle using box drawing characters.")
        .arg(arg!([width] "Width of the rectangle").value_parser(value_parser!(usize)))
        .arg(arg!([height] "Height of the rectangle").value_parser(value_parser!(usize))),
    )
    .subcommand(
        Command::new("card-id")
        .about("Prints the index of a card in a standard 52-card deck.")
        .arg(arg!(<card> "The card, e.g. A♣ or 10♥"))
        .arg(arg!(-r --reverse "Prints the card at the given index instead")),
    )
    .subcommand(
        Command::new("is-string")
        .about("Checks whether the JSON value is a string.")
        .arg(arg!(<json> "The JSON value, e.g. '\"test\"' or '[]'")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_app() {
        build_app(false).debug_assert();
    }

    #[test]
    fn test_apply_collects_transforms_in_order() {
        let matches = build_app(false)
            .try_get_matches_from(["strkit", "apply", "-t", "trim", "-t", "rot13", "abc"])
            .unwrap();
        let (name, args) = matches.subcommand().unwrap();
        assert_eq!(name, "apply");
        let transforms: Vec<&String> = args.get_many::<String>("transform").unwrap().collect();
        assert_eq!(transforms, ["trim", "rot13"]);
    }

    #[test]
    fn test_repeat_rejects_invalid_count() {
        assert!(build_app(false)
            .try_get_matches_from(["strkit", "repeat", "A", "five"])
            .is_err());
    }
}
