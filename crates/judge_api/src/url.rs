/// Default base URL for the judge channel.
pub const DEFAULT_JUDGE_BASE_URL: &str = "ws://127.0.0.1:8000";

/// Build the duplex session endpoint for one contest problem.
///
/// Normalization rules:
/// 1) empty input falls back to `DEFAULT_JUDGE_BASE_URL`
/// 2) `http`/`https` map to `ws`/`wss`; a bare host defaults to `ws`
/// 3) `/contests/<contest>/problems/<problem>/ws` is appended
pub fn session_url(base_url: &str, contest_id: &str, problem_id: &str) -> String {
    let base = if base_url.trim().is_empty() {
        DEFAULT_JUDGE_BASE_URL
    } else {
        base_url.trim()
    };

    let trimmed = base.trim_end_matches('/');
    let base = if let Some(rest) = trimmed.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = trimmed.strip_prefix("http://") {
        format!("ws://{rest}")
    } else if trimmed.starts_with("ws://") || trimmed.starts_with("wss://") {
        trimmed.to_string()
    } else {
        format!("ws://{trimmed}")
    };

    format!("{base}/contests/{contest_id}/problems/{problem_id}/ws")
}
