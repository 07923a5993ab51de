//! cli::args
//!
//! Root command definition.
//!
//! # Global Flags
//!
//! - `--help` / `-h`: Show help
//! - `--version` / `-V`: Show version
//! - `--verbose` / `-v`: Verbose output, available on all commands
//!
//! # Shorthand Flags
//!
//! `--no-pdf` and `--no-validate` at the top level apply to the bare-file
//! form only; each operation declares its own copies.
//!
//! Operations are attached from the [`Registry`], and unmatched positionals
//! are accepted as external subcommands so the shorthand resolver can
//! inspect them. [`RootFlags`] lists what the root accepts ahead of that
//! positional; anything else there is dropped before parsing.

use clap::{value_parser, Args, Command};

use crate::engine::Registry;

/// Name of the binary, used in help and usage.
pub const BIN_NAME: &str = "yamlresume";

const BANNER: &str = r"
 __   __ _    __  __ _     ____
 \ \ / // \  |  \/  | |   |  _ \ ___  ___ _   _ _ __ ___   ___
  \ V // _ \ | |\/| | |   | |_) / _ \/ __| | | | '_ ` _ \ / _ \
   | |/ ___ \| |  | | |___|  _ <  __/\__ \ |_| | | | | | |  __/
   |_/_/   \_\_|  |_|_____|_| \_\___||___/\__,_|_| |_| |_|\___|
";

const AFTER_HELP: &str = "\
SHORTHAND:
    yamlresume resume.yml               # same as: yamlresume build resume.yml
    yamlresume resume.yml --no-pdf      # only generate resume.tex
    yamlresume resume.json --no-validate";

/// Flags parsed at the top level, independent of the chosen operation.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only generate TeX file without PDF (shorthand form)
    #[arg(long = "no-pdf")]
    pub no_pdf: bool,

    /// Skip resume schema validation (shorthand form)
    #[arg(long = "no-validate")]
    pub no_validate: bool,
}

/// Build the root command with every registered operation attached.
pub fn root_command(registry: &Registry) -> Command {
    let root = Command::new(BIN_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("YAMLResume: Resume as Code in YAML")
        .long_about(format!("YAMLResume: Resume as Code in YAML\n{}", BANNER))
        .override_usage(format!(
            "{bin} [OPTIONS] [FILE]\n       {bin} [OPTIONS] <COMMAND>",
            bin = BIN_NAME
        ))
        .after_help(AFTER_HELP)
        .allow_external_subcommands(true)
        .external_subcommand_value_parser(value_parser!(String));

    registry
        .iter()
        .fold(GlobalArgs::augment_args(root), |cmd, op| {
            cmd.subcommand(op.command())
        })
}

/// Flag spellings the root command accepts, including help and version.
#[derive(Debug, Clone, Default)]
pub struct RootFlags {
    longs: Vec<String>,
    shorts: Vec<char>,
}

impl RootFlags {
    pub fn of(cmd: &Command) -> Self {
        let mut cmd = cmd.clone();
        cmd.build();

        let mut flags = Self::default();
        for arg in cmd.get_arguments() {
            if let Some(long) = arg.get_long() {
                flags.longs.push(long.to_string());
            }
            if let Some(short) = arg.get_short() {
                flags.shorts.push(short);
            }
        }
        flags
    }

    /// Whether `token` is `--name`, `--name=value`, `-x` or a cluster `-xy`
    /// made only of accepted flags.
    pub fn accepts(&self, token: &str) -> bool {
        if let Some(long) = token.strip_prefix("--") {
            let name = long.split_once('=').map_or(long, |(name, _)| name);
            return self.longs.iter().any(|known| known == name);
        }
        match token.strip_prefix('-') {
            Some(cluster) if !cluster.is_empty() => {
                cluster.chars().all(|c| self.shorts.contains(&c))
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::standard_registry;
    use clap::FromArgMatches;

    #[test]
    fn root_command_is_well_formed() {
        root_command(&standard_registry()).debug_assert();
    }

    #[test]
    fn registered_operations_are_subcommands() {
        let cmd = root_command(&standard_registry());
        let names: Vec<_> = cmd.get_subcommands().map(|c| c.get_name()).collect();
        assert_eq!(
            names,
            vec!["new", "build", "dev", "languages", "templates", "validate"]
        );
    }

    #[test]
    fn unmatched_positional_becomes_external() {
        let matches = root_command(&standard_registry())
            .try_get_matches_from([BIN_NAME, "resume.yml", "--no-pdf"])
            .unwrap();
        let (name, ext) = matches.subcommand().unwrap();
        assert_eq!(name, "resume.yml");
        let rest: Vec<String> = ext
            .get_many::<String>("")
            .unwrap()
            .cloned()
            .collect();
        assert_eq!(rest, vec!["--no-pdf"]);
    }

    #[test]
    fn leading_shorthand_flags_parse_at_top_level() {
        let matches = root_command(&standard_registry())
            .try_get_matches_from([BIN_NAME, "-v", "--no-validate", "resume.yml"])
            .unwrap();
        let globals = GlobalArgs::from_arg_matches(&matches).unwrap();
        assert!(globals.verbose);
        assert!(globals.no_validate);
        assert!(!globals.no_pdf);
    }

    #[test]
    fn root_flags_cover_declared_and_builtin_flags() {
        let flags = RootFlags::of(&root_command(&standard_registry()));
        for token in ["-v", "--verbose", "--no-pdf", "--no-validate", "-h", "--help", "-V"] {
            assert!(flags.accepts(token), "{} should be accepted", token);
        }
        assert!(flags.accepts("-vh"));
    }

    #[test]
    fn root_flags_reject_everything_else() {
        let flags = RootFlags::of(&root_command(&standard_registry()));
        for token in ["--frobnicate", "-x", "-vx", "--no-pdfs", "-", "--", "resume.yml"] {
            assert!(!flags.accepts(token), "{} should be rejected", token);
        }
    }
}
