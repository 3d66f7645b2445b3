//! Prompt text for conversational frame search.

use super::models::FrameRecord;

/// System instruction for frame search.
pub const FRAME_SEARCH_INSTRUCTION: &str = r#"You are an assistant that helps designers find screens in a Figma file.
You receive a search query and a JSON list of frames. Each frame has a name, the text it contains, its size and position, and how many direct children it has.
Pick the frames that best answer the query, most relevant first. Skip frames that do not match at all.

Respond strictly as JSON: an array of objects with this schema and nothing else, no prose and no markdown:
[
  { "name": "<exact frame name>", "reason": "<one sentence on why it matches>", "confidence": "High" | "Medium" | "Low" }
]
Return [] when no frame matches."#;

/// User message embedding the query and the serialized frames.
pub fn frame_search_content(query: &str, frames: &[FrameRecord]) -> String {
    let serialized = serde_json::to_string_pretty(frames).unwrap_or_default();
    format!(
        "Search query: {}\n\nFrames ({}):\n{}",
        query.trim(),
        frames.len(),
        serialized
    )
}
