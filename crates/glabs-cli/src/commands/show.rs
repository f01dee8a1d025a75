//! `glabs show`: print a resolved assignment

use std::fmt;
use std::path::Path;

use colored::{ColoredString, Colorize};
use glabs_config::{AssignmentConfig, AssignmentResolver, Mode};

use crate::context::load_store;
use crate::error::Result;

/// Resolve `course`/`assignment` from the file at `config_path` and print it.
pub fn run_show(
    config_path: &Path,
    course: &str,
    assignment: &str,
    only: &[String],
    json: bool,
) -> Result<()> {
    let store = load_store(config_path)?;
    let config = AssignmentResolver::new(&store).resolve_only(course, assignment, only)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print!("{}", render(&config));
    }

    Ok(())
}

/// Human-readable summary of an assignment.
struct Summary<'a>(&'a AssignmentConfig);

fn label(name: &str) -> ColoredString {
    format!("{:<20}", format!("{name}:")).dimmed()
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = self.0;

        writeln!(f, "{}", config.key().bold())?;
        writeln!(f, "  {}{}", label("path"), config.path)?;
        writeln!(f, "  {}{}", label("description"), config.description)?;
        writeln!(f, "  {}{}", label("per"), config.mode)?;
        writeln!(
            f,
            "  {}{} ({})",
            label("access level"),
            config.access_level,
            config.access_level.value()
        )?;
        writeln!(
            f,
            "  {}{}",
            label("container registry"),
            config.container_registry
        )?;

        match &config.startercode {
            Some(startercode) => {
                writeln!(f, "  {}", "startercode:".dimmed())?;
                writeln!(f, "    {}{}", label("url"), startercode.url)?;
                writeln!(f, "    {}{}", label("from branch"), startercode.from_branch)?;
                writeln!(f, "    {}{}", label("to branch"), startercode.to_branch)?;
                writeln!(
                    f,
                    "    {}{}",
                    label("protect to branch"),
                    startercode.protect_to_branch
                )?;
            }
            None => writeln!(f, "  {}{}", label("startercode"), "none".dimmed())?,
        }

        match config.mode {
            Mode::PerStudent => {
                let heading = format!("students ({}):", config.students.len());
                writeln!(f, "  {}", heading.dimmed())?;
                for student in &config.students {
                    writeln!(f, "    - {student}")?;
                }
            }
            Mode::PerGroup => {
                let heading = format!("groups ({}):", config.groups.len());
                writeln!(f, "  {}", heading.dimmed())?;
                for group in &config.groups {
                    writeln!(f, "    - {}: {}", group.name.cyan(), group.members.join(", "))?;
                }
            }
        }

        if config.is_empty() {
            let what = if config.mode.is_per_group() {
                "groups"
            } else {
                "students"
            };
            writeln!(f, "  {} no {what} to provision", "warning:".yellow().bold())?;
        }

        Ok(())
    }
}

fn render(config: &AssignmentConfig) -> String {
    Summary(config).to_string()
}
