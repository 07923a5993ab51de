//! Property-based tests for command resolution.
//!
//! These tests use proptest to verify that the shorthand and unknown-command
//! paths hold across randomly generated argument vectors.

use std::path::PathBuf;
use std::sync::Arc;

use proptest::prelude::*;

use yamlresume::cli::commands::standard_registry;
use yamlresume::cli::shorthand::{self, Shorthand, ShorthandFlags};
use yamlresume::cli::{Dispatcher, Invocation};
use yamlresume::core::config::Config;
use yamlresume::core::types::ResumeSource;
use yamlresume::toolchain::mock::MockToolchain;
use yamlresume::ui::output::{Captured, Console};

const OPERATIONS: &[&str] = &["new", "build", "dev", "languages", "templates", "validate"];

/// Strategy for file stems that cannot be mistaken for flags.
fn stem() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_][a-zA-Z0-9_.-]{0,15}"
}

/// Strategy for a resume extension in arbitrary letter case.
fn resume_extension() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["yml", "yaml", "json"]),
        prop::collection::vec(any::<bool>(), 4),
    )
        .prop_map(|(ext, upper)| {
            ext.chars()
                .zip(upper)
                .map(|(c, u)| if u { c.to_ascii_uppercase() } else { c })
                .collect()
        })
}

/// Strategy for tokens that are neither operations nor resume paths.
fn unknown_token() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_][a-zA-Z0-9_.]{0,15}".prop_filter("must not resolve to anything", |token| {
        !OPERATIONS.contains(&token.as_str())
            && token != "help"
            && !ResumeSource::has_resume_extension(token)
    })
}

/// Strategy for long flags the root command does not define.
fn unknown_long_flag() -> impl Strategy<Value = String> {
    "--[a-z][a-z-]{1,12}".prop_filter("must not be a root flag", |flag| {
        !matches!(
            flag.as_str(),
            "--verbose" | "--no-pdf" | "--no-validate" | "--help" | "--version"
        )
    })
}

fn dispatcher(toolchain: &MockToolchain) -> (Dispatcher, Captured) {
    let (console, captured) = Console::capture();
    let dispatcher = Dispatcher::new(standard_registry())
        .with_config(Config::default())
        .with_toolchain(Arc::new(toolchain.clone()))
        .with_console(console)
        .with_verbosity_hook(|_| {});
    (dispatcher, captured)
}

proptest! {
    #[test]
    fn resume_paths_resolve_to_shorthand(stem in stem(), ext in resume_extension()) {
        let file = format!("{}.{}", stem, ext);
        let toolchain = MockToolchain::new();

        let (dispatcher, _) = dispatcher(&toolchain);
        let invocation = dispatcher.resolve(["yamlresume", file.as_str()]).unwrap();

        match invocation {
            Invocation::Shorthand(shorthand) => {
                prop_assert_eq!(shorthand.file, PathBuf::from(&file));
                prop_assert!(shorthand.pdf);
                prop_assert!(shorthand.validate);
            }
            other => prop_assert!(false, "expected shorthand, got {:?}", other),
        }
    }

    #[test]
    fn unknown_tokens_fail_without_running(token in unknown_token()) {
        let toolchain = MockToolchain::new();
        let (dispatcher, captured) = dispatcher(&toolchain);

        let outcome = dispatcher.dispatch(["yamlresume", token.as_str()]);

        prop_assert_eq!(outcome.code(), 1);
        let err = captured.stderr();
        let expected = format!("unknown command '{}'", token);
        prop_assert!(err.contains(&expected));
        prop_assert!(toolchain.calls().is_empty());
    }

    #[test]
    fn unknown_leading_flags_never_block_shorthand(
        flags in prop::collection::vec(unknown_long_flag(), 1..4),
        stem in stem(),
    ) {
        let file = format!("{}.yml", stem);
        let toolchain = MockToolchain::new();
        let (dispatcher, _) = dispatcher(&toolchain);

        let mut argv = vec!["yamlresume".to_string()];
        argv.extend(flags.iter().cloned());
        argv.push(file.clone());

        match dispatcher.resolve(argv) {
            Ok(Invocation::Shorthand(shorthand)) => {
                prop_assert_eq!(shorthand.file, PathBuf::from(&file));
                prop_assert_eq!(shorthand.ignored, flags);
            }
            other => prop_assert!(false, "expected shorthand, got {:?}", other),
        }
    }

    #[test]
    fn trailing_flags_toggle_build_options(
        no_pdf in any::<bool>(),
        no_validate in any::<bool>(),
        verbose in any::<bool>(),
    ) {
        let mut tokens = vec!["resume.yml".to_string()];
        if no_pdf {
            tokens.push("--no-pdf".to_string());
        }
        if no_validate {
            tokens.push("--no-validate".to_string());
        }
        if verbose {
            tokens.push("--verbose".to_string());
        }

        match shorthand::resolve(&tokens, ShorthandFlags::default()) {
            Some(Shorthand::Build(invocation)) => {
                prop_assert_eq!(invocation.pdf, !no_pdf);
                prop_assert_eq!(invocation.validate, !no_validate);
                prop_assert_eq!(invocation.verbose, verbose);
                prop_assert!(invocation.ignored.is_empty());
            }
            other => prop_assert!(false, "expected build, got {:?}", other),
        }
    }
}
