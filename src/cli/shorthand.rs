//! cli::shorthand
//!
//! Resolution of the bare-file form, `yamlresume resume.yml`, as an implicit
//! `build`.
//!
//! # Rules
//!
//! - The first unmatched positional token is a resume path iff it ends with
//!   `.yml`, `.yaml` or `.json`, ignoring case. The file is not inspected.
//! - `--no-pdf`, `--no-validate` and `-v`/`--verbose` are honored before or
//!   after the file. Any other flag before the file, and any other token
//!   after it, is ignored.
//! - A token of any other shape is an unknown command.
//! - A file name that is not valid UTF-8 is matched on its lossy form and
//!   built from the original path.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::core::types::{BuildOptions, ResumeSource};

/// Flags already parsed before the positional token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShorthandFlags {
    pub pdf: bool,
    pub validate: bool,
    pub verbose: bool,
}

impl Default for ShorthandFlags {
    fn default() -> Self {
        Self {
            pdf: true,
            validate: true,
            verbose: false,
        }
    }
}

/// An implicit build request inferred from a bare file argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShorthandInvocation {
    pub file: PathBuf,
    pub pdf: bool,
    pub validate: bool,
    pub verbose: bool,
    /// Tokens around the file that were not recognized.
    pub ignored: Vec<String>,
}

impl ShorthandInvocation {
    pub fn source(&self) -> ResumeSource {
        ResumeSource::new(&self.file)
    }

    pub fn options(&self) -> BuildOptions {
        BuildOptions {
            pdf: self.pdf,
            validate: self.validate,
        }
    }
}

/// Outcome of resolving a bare positional token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shorthand {
    /// Run the build action.
    Build(ShorthandInvocation),
    /// The token is neither an operation nor a resume path.
    UnknownCommand(String),
}

/// Resolve `tokens` (the unmatched positional and everything after it).
///
/// Returns `None` when there is no token at all.
pub fn resolve(tokens: &[String], flags: ShorthandFlags) -> Option<Shorthand> {
    let (file, rest) = tokens.split_first()?;

    if !ResumeSource::has_resume_extension(file) {
        return Some(Shorthand::UnknownCommand(file.clone()));
    }

    let mut invocation = ShorthandInvocation {
        file: PathBuf::from(file),
        pdf: flags.pdf,
        validate: flags.validate,
        verbose: flags.verbose,
        ignored: Vec::new(),
    };

    for token in rest {
        match token.as_str() {
            "--no-pdf" => invocation.pdf = false,
            "--no-validate" => invocation.validate = false,
            "-v" | "--verbose" => invocation.verbose = true,
            other => invocation.ignored.push(other.to_string()),
        }
    }

    Some(Shorthand::Build(invocation))
}

/// Argument vector as handed to clap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedArgs {
    pub args: Vec<OsString>,
    /// The file token as given, when argv takes the bare-file form.
    pub file: Option<PathBuf>,
    /// Unrecognized flags removed from before the file.
    pub ignored: Vec<String>,
}

impl PreparedArgs {
    fn unchanged(args: Vec<OsString>) -> Self {
        Self {
            args,
            file: None,
            ignored: Vec::new(),
        }
    }
}

fn is_flag(arg: &OsString) -> bool {
    let arg = arg.to_string_lossy();
    arg.len() > 1 && arg.starts_with('-')
}

/// Rewrite `args` (including the binary name) for the bare-file form.
///
/// clap rejects unknown flags ahead of the first positional, so when that
/// positional is a resume path the flags `is_known_flag` rejects are moved
/// to [`PreparedArgs::ignored`]. A file token that is not valid UTF-8 is
/// replaced by its lossy form. Any other argv is returned unchanged.
pub fn prepare(args: Vec<OsString>, is_known_flag: impl Fn(&str) -> bool) -> PreparedArgs {
    let Some(index) = args.iter().skip(1).position(|arg| !is_flag(arg)).map(|i| i + 1) else {
        return PreparedArgs::unchanged(args);
    };
    if args[1..index].iter().any(|arg| arg == "--") {
        return PreparedArgs::unchanged(args);
    }

    let lossy = args[index].to_string_lossy().into_owned();
    if !ResumeSource::has_resume_extension(&lossy) {
        return PreparedArgs::unchanged(args);
    }
    let file = PathBuf::from(&args[index]);

    let mut prepared = Vec::with_capacity(args.len());
    let mut ignored = Vec::new();
    for (i, arg) in args.into_iter().enumerate() {
        if i == index {
            prepared.push(OsString::from(&lossy));
        } else if i == 0 || i > index {
            prepared.push(arg);
        } else {
            let flag = arg.to_string_lossy().into_owned();
            if is_known_flag(&flag) {
                prepared.push(arg);
            } else {
                ignored.push(flag);
            }
        }
    }

    PreparedArgs {
        args: prepared,
        file: Some(file),
        ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn build(items: &[&str]) -> ShorthandInvocation {
        match resolve(&tokens(items), ShorthandFlags::default()) {
            Some(Shorthand::Build(invocation)) => invocation,
            other => panic!("expected build, got {:?}", other),
        }
    }

    #[test]
    fn no_tokens_resolves_to_nothing() {
        assert_eq!(resolve(&[], ShorthandFlags::default()), None);
    }

    #[test]
    fn resume_file_defaults_to_full_build() {
        let invocation = build(&["resume.yml"]);
        assert_eq!(invocation.file, PathBuf::from("resume.yml"));
        assert!(invocation.pdf);
        assert!(invocation.validate);
        assert!(!invocation.verbose);
    }

    #[test]
    fn no_pdf_flag() {
        let invocation = build(&["resume.yaml", "--no-pdf"]);
        assert_eq!(
            invocation.options(),
            BuildOptions {
                pdf: false,
                validate: true
            }
        );
    }

    #[test]
    fn no_validate_flag() {
        let invocation = build(&["resume.json", "--no-validate"]);
        assert_eq!(
            invocation.options(),
            BuildOptions {
                pdf: true,
                validate: false
            }
        );
    }

    #[test]
    fn both_flags() {
        let invocation = build(&["resume.yml", "--no-validate", "--no-pdf"]);
        assert!(!invocation.pdf);
        assert!(!invocation.validate);
    }

    #[test]
    fn leading_flags_are_kept() {
        let flags = ShorthandFlags {
            pdf: false,
            validate: true,
            verbose: true,
        };
        match resolve(&tokens(&["resume.yml"]), flags) {
            Some(Shorthand::Build(invocation)) => {
                assert!(!invocation.pdf);
                assert!(invocation.verbose);
            }
            other => panic!("expected build, got {:?}", other),
        }
    }

    #[test]
    fn trailing_verbose_is_honored() {
        assert!(build(&["resume.yml", "-v"]).verbose);
        assert!(build(&["resume.yml", "--verbose"]).verbose);
    }

    #[test]
    fn unrecognized_trailing_tokens_are_ignored() {
        let invocation = build(&["resume.yml", "--watch", "extra"]);
        assert!(invocation.pdf);
        assert!(invocation.validate);
        assert_eq!(invocation.ignored, tokens(&["--watch", "extra"]));
    }

    #[test]
    fn other_names_are_unknown_commands() {
        for name in ["frobnicate", "resume.txt", "Build", "resume.yml.bak"] {
            assert_eq!(
                resolve(&tokens(&[name, "--no-pdf"]), ShorthandFlags::default()),
                Some(Shorthand::UnknownCommand(name.to_string()))
            );
        }
    }

    #[test]
    fn extension_match_ignores_case() {
        assert_eq!(build(&["CV.YAML"]).file, PathBuf::from("CV.YAML"));
        assert_eq!(build(&["cv.Json"]).file, PathBuf::from("cv.Json"));
    }

    fn os(items: &[&str]) -> Vec<OsString> {
        items.iter().map(OsString::from).collect()
    }

    fn known(flag: &str) -> bool {
        matches!(flag, "-v" | "--verbose" | "--no-pdf" | "--no-validate")
    }

    #[test]
    fn unknown_leading_flags_are_removed() {
        let prepared = prepare(
            os(&["yamlresume", "--frobnicate", "--no-pdf", "-x", "resume.yml", "--fast"]),
            known,
        );
        assert_eq!(
            prepared.args,
            os(&["yamlresume", "--no-pdf", "resume.yml", "--fast"])
        );
        assert_eq!(prepared.ignored, tokens(&["--frobnicate", "-x"]));
        assert_eq!(prepared.file, Some(PathBuf::from("resume.yml")));
    }

    #[test]
    fn argv_without_resume_path_is_unchanged() {
        for argv in [
            os(&["yamlresume", "--frobnicate", "build", "resume.yml"]),
            os(&["yamlresume", "--frobnicate", "frobnicate"]),
            os(&["yamlresume", "--frobnicate"]),
            os(&["yamlresume", "--", "resume.yml"]),
            os(&["yamlresume"]),
        ] {
            let prepared = prepare(argv.clone(), known);
            assert_eq!(prepared, PreparedArgs::unchanged(argv));
        }
    }

    #[test]
    fn dash_alone_is_a_positional() {
        let argv = os(&["yamlresume", "--frobnicate", "-", "resume.yml"]);
        assert_eq!(prepare(argv.clone(), known).args, argv);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_file_keeps_original_path() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"r\xe9sum\xe9.yml".to_vec());
        let prepared = prepare(
            vec![OsString::from("yamlresume"), raw.clone(), OsString::from("--no-pdf")],
            known,
        );

        assert_eq!(prepared.file, Some(PathBuf::from(raw)));
        let handed = prepared.args[1].to_str().unwrap();
        assert!(handed.ends_with(".yml"));
        assert_eq!(prepared.args[2], OsString::from("--no-pdf"));
    }
}
