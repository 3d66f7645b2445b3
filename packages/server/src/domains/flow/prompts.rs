//! Prompt text for user-journey analysis.

use super::models::DiagramPayload;

/// System instruction for flow analysis.
pub const FLOW_ANALYSIS_INSTRUCTION: &str = "You are a senior UX researcher analyzing user-journey diagrams. \
You receive a set of labeled steps and directed edges (connectors). \
Examine each step's label for domain clues (for example food delivery, cab booking, meeting scheduling). \
From those labels, infer the domain context, the user's primary goal and a related sub-goal. \
Then focus on user motivations and emotional arcs when making suggestions. \
Respond strictly as JSON.";

/// Task list and output schema appended after the rendered diagram.
const FLOW_ANALYSIS_TASKS: &str = r#"Based on those labels:

TASK 1: Extract
  - "context" (for example "Food-delivery app onboarding")
  - "goal" (primary user objective, quote the label that inspired it)
  - "subGoal" (secondary benefit or intent)
  - "extractedKeywords" (an expansive list of domain words, synonyms included)

TASK 2: Write a 2-3 sentence "overview" that ties together context, goal and emotional arc.

TASK 3: For each step, identify
  - a pain point in the user's motivation ("pain")
  - one "suggestion" grounded in a relevant Growth.Design principle
  - the principle name and a one-line blurb
  - a "severity" (high, medium or low)
  - the original "label" for clarity

TASK 4: List "keyTakeaways" for the flow as a whole.

Respond strictly as JSON following this schema, with no text outside the JSON:
{
  "context": "...",
  "goal": "...",
  "subGoal": "...",
  "extractedKeywords": ["..."],
  "overview": "...",
  "steps": [
    {
      "stepId": "...",
      "label": "...",
      "pain": "...",
      "suggestion": "...",
      "principle": { "name": "...", "blurb": "..." },
      "severity": "high" | "medium" | "low"
    }
  ],
  "keyTakeaways": [
    { "message": "...", "severity": "high" | "medium" | "low" }
  ]
}"#;

pub fn flow_analysis_content(payload: &DiagramPayload) -> String {
    format!(
        "Step labels:\n{}\n\nConnectors:\n{}\n\nNotes from the diagram:\n{}\n\n{}",
        render_steps(payload),
        render_connectors(payload),
        render_notes(payload),
        FLOW_ANALYSIS_TASKS
    )
}

/// Numbered list: `1. [stepId] label (goal: blurb)`
fn render_steps(payload: &DiagramPayload) -> String {
    if payload.steps.is_empty() {
        return "(none)".to_string();
    }
    payload
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let mut line = format!("{}. [{}] {}", i + 1, step.step_id, step.label.trim());
            if let Some(blurb) = step.goal_blurb.as_deref().filter(|b| !b.trim().is_empty()) {
                line.push_str(&format!(" (goal: {})", blurb.trim()));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_connectors(payload: &DiagramPayload) -> String {
    if payload.connectors.is_empty() {
        return "(none)".to_string();
    }
    payload
        .connectors
        .iter()
        .map(|c| format!("- {} -> {}", c.from, c.to))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_notes(payload: &DiagramPayload) -> String {
    let notes: Vec<String> = payload
        .free_text
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| format!("- {}", t))
        .collect();
    if notes.is_empty() {
        "(none)".to_string()
    } else {
        notes.join("\n")
    }
}
