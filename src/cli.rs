//! Command-line parsing

use crate::engine::Algorithm;
use crate::errors::SortvizError;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Parsed command-line flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub headless: Option<Algorithm>,
    pub help: bool,
}

/// Parse flags, excluding the program name
pub fn parse_args<I>(args: I) -> Result<CliArgs, SortvizError>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => parsed.help = true,
            "--seed" => {
                let value = expect_value(&mut args, &arg)?;
                let seed = value
                    .parse()
                    .map_err(|_| SortvizError::InvalidValue {
                        flag: arg.clone(),
                        value: value.clone(),
                    })?;
                parsed.seed = Some(seed);
            }
            "--log" => {
                parsed.log_file = Some(PathBuf::from(expect_value(&mut args, &arg)?));
            }
            "--headless" => {
                let value = expect_value(&mut args, &arg)?;
                let algorithm = Algorithm::from_name(&value.to_ascii_lowercase())
                    .ok_or_else(|| SortvizError::InvalidValue {
                        flag: arg.clone(),
                        value: value.clone(),
                    })?;
                parsed.headless = Some(algorithm);
            }
            other => {
                return Err(SortvizError::UnknownArgument {
                    arg: other.to_string(),
                })
            }
        }
    }

    Ok(parsed)
}

fn expect_value<I>(args: &mut I, flag: &str) -> Result<String, SortvizError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or_else(|| SortvizError::MissingValue {
        flag: flag.to_string(),
    })
}

/// Create (or truncate) the `--log` target
pub fn open_log_file(path: &Path) -> Result<File, SortvizError> {
    Ok(File::create(path)?)
}

/// Usage text shown for `--help` and argument errors
pub fn usage(program_name: &str) -> String {
    format!(
        "Usage: {program} [--seed <n>] [--log <file>] [--headless <bubble|selection|merge>]\n\
         \n\
         Options:\n\
         \x20 --seed <n>        Generate bars from a fixed seed\n\
         \x20 --log <file>      Write log output to <file>\n\
         \x20 --headless <alg>  Run one sort without the TUI and print a summary\n\
         \x20 -h, --help        Show this message\n\
         \n\
         Keys: g new set, b bubble sort, s selection sort, m merge sort, q quit\n",
        program = program_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, SortvizError> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_no_args() {
        assert_eq!(parse(&[]).unwrap(), CliArgs::default());
    }

    #[test]
    fn test_all_flags() {
        let args = parse(&["--seed", "17", "--log", "viz.log", "--headless", "Merge"]).unwrap();

        assert_eq!(args.seed, Some(17));
        assert_eq!(args.log_file, Some(PathBuf::from("viz.log")));
        assert_eq!(args.headless, Some(Algorithm::Merge));
        assert!(!args.help);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            parse(&["--seed"]),
            Err(SortvizError::MissingValue { ref flag }) if flag == "--seed"
        ));
        assert!(matches!(
            parse(&["--seed", "abc"]),
            Err(SortvizError::InvalidValue { ref value, .. }) if value == "abc"
        ));
        assert!(matches!(
            parse(&["--headless", "quick"]),
            Err(SortvizError::InvalidValue { .. })
        ));
        assert!(matches!(
            parse(&["--fast"]),
            Err(SortvizError::UnknownArgument { ref arg }) if arg == "--fast"
        ));
    }

    #[test]
    fn test_unwritable_log_file() {
        let path = std::env::temp_dir()
            .join("sortviz-missing-dir")
            .join("nested")
            .join("viz.log");

        let err = open_log_file(&path).unwrap_err();

        assert!(matches!(err, SortvizError::Io(_)));
        assert!(!err.is_usage_error());
    }

    #[test]
    fn test_log_file_is_created() {
        let path = std::env::temp_dir().join(format!("sortviz-{}.log", std::process::id()));

        assert!(open_log_file(&path).is_ok());
        assert!(path.exists());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_usage_mentions_flags() {
        let text = usage("sortviz");
        assert!(text.starts_with("Usage: sortviz"));
        assert!(text.contains("--headless"));
    }
}
