use std::io::Write;
use strum_macros::Display;
use thiserror::Error;

#[derive(Debug, Display)]
pub enum ConfigType {
    #[strum(serialize = "Main config")]
    MAIN,
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("error processing args. Cause : {0}")]
    ArgsProcessingError(String),
    #[error("unable to read configuration file {file:?}. Cause : {cause}")]
    ConfigReadError { file: String, cause: String },
    #[error("unable to parse {location} file {file:?}. Cause : {cause}")]
    SerdeTomlError {
        location: ConfigType,
        file: String,
        cause: String,
    },
    #[error("JSON parsing error: {0}")]
    JsonError(String),
    #[error(transparent)]
    Io(#[from] ::std::io::Error),
    #[error("unable to interpolate variable. Cause : {cause}")]
    InterpolationError { location: ConfigType, cause: String },
    #[error("unable to render template. Cause : {0}")]
    TemplateRenderError(String),
    #[error("text {0:?} does not match the greeting \"Hello, <name>!\"")]
    TemplateMismatch(String),
    #[error("rectangle must be at least 2x2 (got {width}x{height})")]
    InvalidRectangle { width: usize, height: usize },
    #[error("unknown transform \"{0}\"")]
    UnknownTransform(String),
    #[error("{0}")]
    Msg(String),
}

impl From<&'static str> for Error {
    fn from(s: &'static str) -> Self {
        Error::Msg(s.to_owned())
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::JsonError(error.to_string())
    }
}

impl From<tera::Error> for Error {
    fn from(error: tera::Error) -> Self {
        use std::error::Error as StdError;

        let mut error_msg = error.to_string();
        if let Some(source) = error.source() {
            error_msg.push_str("\nCaused by: ");
            error_msg.push_str(&source.to_string());
        }
        Error::TemplateRenderError(error_msg)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn default_error_handler(error: &Error, output: &mut dyn Write) {
    use nu_ansi_term::Color::Red;

    match error {
        Error::Io(io_error) if io_error.kind() == ::std::io::ErrorKind::BrokenPipe => {
            ::std::process::exit(0);
        }
        Error::ConfigReadError { file: _, cause: _ }
        | Error::SerdeTomlError {
            location: _,
            file: _,
            cause: _,
        }
        | Error::InterpolationError {
            location: _,
            cause: _,
        } => {
            writeln!(output, "{}: {}", Red.paint("[config error]"), error).ok();
        }
        Error::TemplateRenderError(_) | Error::TemplateMismatch(_) => {
            writeln!(output, "{}: {}", Red.paint("[template error]"), error).ok();
        }
        Error::ArgsProcessingError(_) | Error::InvalidRectangle { .. } => {
            writeln!(output, "{}: {}", Red.paint("[args error]"), error).ok();
        }
        _ => {
            writeln!(output, "{}: {}", Red.paint("[strkit error]"), error).ok();
        }
    };
}
