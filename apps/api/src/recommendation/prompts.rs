// All LLM prompt templates for the recommendation pipeline.

/// Title recommendation prompt. Replace `{genre}` and `{reference_clause}` before sending.
/// `{reference_clause}` is either empty or `REFERENCE_CLAUSE_TEMPLATE` filled in.
pub const RECOMMEND_PROMPT_TEMPLATE: &str = r#"You are a video game expert. Recommend 5 {genre} games{reference_clause}.

Requirements:
- Only list game titles (one per line)
- No descriptions, ratings, or extra text
- Focus on critically acclaimed games
- Include both classic and modern titles

Format:
1. Game Title
2. Game Title
..."#;

/// Appended after the genre when the user names a game they like. Replace `{reference}`.
pub const REFERENCE_CLAUSE_TEMPLATE: &str = " similar to {reference}";

/// Description prompt. Replace `{games}` with the raw titles list.
pub const DESCRIBE_PROMPT_TEMPLATE: &str = r#"You are a gaming expert. Here are the recommended games:

{games}

For each game listed above, provide a concise description (1-2 sentences).

Format:
**Game Title**: [Description]

Note: Only describe the games from this list. Do not add any other games."#;
