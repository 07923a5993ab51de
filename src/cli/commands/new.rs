//! new command - Create a starter resume

use std::path::PathBuf;

use async_trait::async_trait;
use clap::{ArgMatches, Args, FromArgMatches};

use crate::engine::{ActionResult, Context, Operation};
use crate::ui::output;

#[derive(Args, Debug)]
pub struct NewArgs {
    /// File to create
    #[arg(value_name = "FILENAME", default_value = "resume.yml")]
    pub filename: PathBuf,

    /// Template to start from (see `yamlresume templates list`)
    #[arg(short, long, value_name = "TEMPLATE")]
    pub template: Option<String>,
}

/// The `new` operation.
pub struct New;

#[async_trait]
impl Operation for New {
    fn name(&self) -> &'static str {
        "new"
    }

    fn command(&self) -> clap::Command {
        NewArgs::augment_args(clap::Command::new(self.name()))
            .about("Create a new resume")
    }

    async fn run(&self, ctx: &Context, matches: &ArgMatches) -> ActionResult {
        let args = NewArgs::from_arg_matches(matches)?;

        ctx.toolchain
            .scaffold(ctx, &args.filename, args.template.as_deref())
            .await?;

        let file = args.filename.display();
        ctx.console.success(format!("Created {}", file));
        ctx.console.print("Next steps:");
        ctx.console.print(output::format_list(
            &[
                format!("edit {}", file),
                format!("yamlresume build {}", file),
            ],
            "  ",
        ));
        Ok(())
    }
}
