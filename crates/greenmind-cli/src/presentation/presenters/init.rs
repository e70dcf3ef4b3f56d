use crate::hints::cmd;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, InitViewModel, StatusBadge};
use greenmind_engine::TokenApproximation;
use greenmind_runtime::Config;
use std::path::Path;

pub fn present_init(
    config_path: &Path,
    config: &Config,
    overwritten: bool,
) -> CommandResultViewModel<InitViewModel> {
    let content = InitViewModel {
        config_path: config_path.to_path_buf(),
        overwritten,
        model_count: config.models.len(),
        comparison_count: config.comparison.len(),
        token_ratio: config
            .token_ratio
            .unwrap_or(TokenApproximation::DEFAULT_RATIO),
    };

    let label = if overwritten {
        "Config overwritten"
    } else {
        "Config written"
    };

    CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success(label))
        .with_suggestion(
            Guidance::new("Edit the tables, then check what the calculator sees")
                .with_command(cmd::MODELS),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_come_from_the_written_config() {
        let result = present_init(Path::new("/tmp/config.toml"), &Config::template(), false);

        assert_eq!(result.content.model_count, 6);
        assert_eq!(result.content.comparison_count, 6);
        assert_eq!(result.content.token_ratio, 1.3);
        assert_eq!(result.badge.unwrap().label, "Config written");
    }
}
