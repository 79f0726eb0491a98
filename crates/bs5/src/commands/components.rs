//! `bs5 components` command implementation.

use std::io::Write;

use bs5_components::COMPONENT_NAMES;
use clap::Args;

use crate::error::CliError;

/// Arguments for the components command.
#[derive(Args)]
pub(crate) struct ComponentsArgs {
    /// Print names in alphabetical order instead of catalogue order.
    #[arg(long)]
    sorted: bool,
}

impl ComponentsArgs {
    /// Execute the components command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let mut stdout = std::io::stdout().lock();
        for name in component_names(self.sorted) {
            writeln!(stdout, "{name}")?;
        }
        Ok(())
    }
}

fn component_names(sorted: bool) -> Vec<&'static str> {
    let mut names = COMPONENT_NAMES.to_vec();
    if sorted {
        names.sort_unstable();
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_order_starts_with_accordion() {
        let names = component_names(false);
        assert_eq!(names.first(), Some(&"Accordion"));
        assert_eq!(names.last(), Some(&"Html"));
    }

    #[test]
    fn test_sorted_names() {
        let names = component_names(true);
        assert!(names.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(names.contains(&"Tabs"));
        assert!(names.contains(&"PageItem"));
    }
}
