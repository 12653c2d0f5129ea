use crate::FailResult;
use crate::checks::{CheckConfig, run_math_checks};
use crate::logging::GlobalLogger;

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        for cause in e.iter_chain() {
            error!("{}", cause);
        }

        if std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            error!("{}", e.backtrace());
        }
        std::process::exit(1);
    });
}

/// Arguments that configure the global logger.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoggingArgs {
    pub log_path: Option<PathBuf>,
    pub verbosity: i32,
}

impl LoggingArgs {
    pub fn logger(&self) -> GlobalLogger {
        let mut logger = GlobalLogger::default();
        if let Some(path) = &self.log_path {
            logger.path(path);
        }
        logger.verbosity(self.verbosity);
        logger
    }
}

fn check_app<'a, 'b>() -> clap::App<'a, 'b> {
    clap::App::new("geodesy-math-check")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run the self-checks of the geodesy math library and print a report.")
        .args(&[
            clap::Arg::with_name("epsilon")
                .long("epsilon")
                .takes_value(true)
                .value_name("EPS")
                .help("absolute tolerance for comparing floats [default: 1e-5]"),
            clap::Arg::with_name("log")
                .long("log")
                .takes_value(true)
                .value_name("FILE")
                .help("also write the log to this file"),
            clap::Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("log everything the geodesy crates have to say"),
        ])
}

fn parse_check_args<I, T>(args: I) -> FailResult<(LoggingArgs, CheckConfig)>
where
    I: IntoIterator<Item=T>,
    T: Into<OsString> + Clone,
{
    let m = check_app().get_matches_from_safe(args)?;

    let logging = LoggingArgs {
        log_path: m.value_of_os("log").map(PathBuf::from),
        verbosity: m.occurrences_of("verbose") as i32,
    };

    let mut config = CheckConfig::default();
    if let Some(s) = m.value_of("epsilon") {
        let epsilon: f64 = s.parse()?;
        if !(epsilon.is_finite() && epsilon >= 0.0) {
            bail!("--epsilon must be finite and non-negative (got {})", s);
        }
        config.epsilon = epsilon;
    }
    Ok((logging, config))
}

pub fn geodesy_math_check() {
    wrap_result_main(|| {
        let (logging, config) = match parse_check_args(std::env::args_os()) {
            Ok(args) => args,
            // --help and --version land here too
            Err(e) => match e.downcast::<clap::Error>() {
                Ok(e) => e.exit(),
                Err(e) => return Err(e),
            },
        };
        logging.logger().apply()?;

        let report = run_math_checks(&config);
        print!("{}", report);

        if !report.all_passed() {
            bail!("{} of {} checks failed", report.failed(), report.total());
        }
        Ok(())
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let (logging, config) = parse_check_args(&["geodesy-math-check"]).unwrap();
        assert_eq!(logging, LoggingArgs::default());
        assert_eq!(config, CheckConfig::default());
    }

    #[test]
    fn all_args() {
        let (logging, config) = parse_check_args(&[
            "geodesy-math-check", "--epsilon", "1e-3", "--log", "out.log", "-vv",
        ]).unwrap();
        assert_eq!(config.epsilon, 1e-3);
        assert_eq!(logging.log_path, Some(PathBuf::from("out.log")));
        assert_eq!(logging.verbosity, 2);
    }

    #[test]
    fn bad_epsilon() {
        assert!(parse_check_args(&["geodesy-math-check", "--epsilon", "abc"]).is_err());
        assert!(parse_check_args(&["geodesy-math-check", "--epsilon", "-1"]).is_err());
        assert!(parse_check_args(&["geodesy-math-check", "--epsilon", "inf"]).is_err());
        assert!(parse_check_args(&["geodesy-math-check", "--bogus"]).is_err());
    }

    #[test]
    fn help_is_a_clap_error() {
        let e = parse_check_args(&["geodesy-math-check", "--help"]).unwrap_err();
        let e = e.downcast::<clap::Error>().unwrap();
        assert_eq!(e.kind, clap::ErrorKind::HelpDisplayed);
        assert!(e.message.contains("--epsilon <EPS>"), "{}", e.message);
        assert!(e.message.contains("--log <FILE>"), "{}", e.message);
    }
}
