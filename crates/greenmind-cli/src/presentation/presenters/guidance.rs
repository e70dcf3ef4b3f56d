use crate::presentation::view_models::{CommandResultViewModel, GuidanceViewModel};
use std::path::Path;

pub fn present_guidance(config_path: Option<&Path>) -> CommandResultViewModel<GuidanceViewModel> {
    let content = GuidanceViewModel {
        config_path: config_path.map(|path| path.display().to_string()),
        config_exists: config_path.is_some_and(Path::exists),
    };

    CommandResultViewModel::new(content)
}
