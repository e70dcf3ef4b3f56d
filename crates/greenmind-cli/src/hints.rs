pub mod cmd {
    pub const MODELS: &str = "greenmind models";
    pub const ESTIMATE_EXAMPLE: &str = "greenmind estimate --model gpt-3.5-turbo --words 50 --usage 10";
    pub const COMPARE: &str = "greenmind compare";
    pub const COMPARE_BY_CO2: &str = "greenmind compare --sort co2";
    pub const COMPARE_EXPORT: &str = "greenmind compare --export ranking.csv";
    pub const RECOMMEND: &str = "greenmind recommend";
    pub const INIT: &str = "greenmind init";
}

pub mod fmt {
    pub fn estimate_for(model_id: &str) -> String {
        format!("greenmind estimate --model {} --words 50 --usage 10", model_id)
    }

    pub fn recommend_category(slug: &str) -> String {
        format!("greenmind recommend --category {}", slug)
    }
}
