use std::fmt;

use crate::presentation::view_models::InitViewModel;
use crate::presentation::view_models::common::{ViewMode, ViewOptions};

pub struct InitView<'a> {
    data: &'a InitViewModel,
    options: ViewOptions,
}

impl<'a> InitView<'a> {
    pub fn new(data: &'a InitViewModel, options: ViewOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for InitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = self.data;

        if self.options.mode == ViewMode::Minimal {
            return writeln!(f, "{}", d.config_path.display());
        }

        let action = if d.overwritten { "Overwrote" } else { "Created" };
        writeln!(f, "{} {}", action, d.config_path.display())?;
        writeln!(
            f,
            "  {} model profile(s), {} comparison row(s), token ratio {}",
            d.model_count, d.comparison_count, d.token_ratio
        )?;

        if self.options.mode == ViewMode::Verbose {
            writeln!(f)?;
            writeln!(
                f,
                "Entries in this file replace built-in rows with the same id or name."
            )?;
            writeln!(
                f,
                "Set replace_builtin = true to use only the rows listed in the file."
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn created() -> InitViewModel {
        InitViewModel {
            config_path: "/tmp/greenmind/config.toml".into(),
            overwritten: false,
            model_count: 6,
            comparison_count: 6,
            token_ratio: 1.3,
        }
    }

    #[test]
    fn test_standard_view() {
        let out = InitView::new(&created(), ViewOptions::plain(ViewMode::Standard)).to_string();
        assert_eq!(
            out,
            "Created /tmp/greenmind/config.toml\n  6 model profile(s), 6 comparison row(s), token ratio 1.3\n"
        );
    }

    #[test]
    fn test_overwrite_wording() {
        let vm = InitViewModel {
            overwritten: true,
            ..created()
        };
        let out = InitView::new(&vm, ViewOptions::plain(ViewMode::Compact)).to_string();
        assert!(out.starts_with("Overwrote "));
    }
}
