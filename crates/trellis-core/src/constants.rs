/// Trellis system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// RRF smoothing constant. Higher k reduces the influence of any single list.
pub const DEFAULT_RRF_K: u32 = 60;

/// Approximate characters per token used for context budgeting.
pub const CHARS_PER_TOKEN: usize = 4;

/// Minimum token length considered for direct title matching.
pub const TITLE_TOKEN_MIN_LEN: usize = 3;

/// Maximum number of direct title-match hits returned.
pub const TITLE_MATCH_LIMIT: usize = 5;

/// Character budget for the navigator's region/tag summary prompt.
pub const NAVIGATOR_PROMPT_BUDGET: usize = 1500;

/// Stopwords excluded from title-token and keyword matching.
pub const STOPWORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "out", "has", "his", "how", "its", "may", "new", "now", "old", "see", "two", "who",
    "did", "get", "him", "with", "from", "this", "that", "what", "when", "where", "which", "about",
    "show", "find", "tell",
];
