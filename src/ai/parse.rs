// Turning a free-text model response into validated quiz questions.

use serde_json::Value;

use crate::models::QuizQuestion;

pub const DEFAULT_EXPLANATION: &str = "No explanation provided.";

/// Pull a JSON array out of a raw model response.
///
/// Stage one slices from the first `[` to the last `]` — models often wrap
/// the array in prose. Stage two parses the whole response. Neither parsing
/// means the response is unusable and the caller falls back.
pub fn extract_question_array(raw: &str) -> Option<Vec<Value>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let (Some(start), Some(end)) = (raw.find('['), raw.rfind(']')) {
        if start < end {
            if let Ok(Value::Array(items)) = serde_json::from_str(&raw[start..=end]) {
                return Some(items);
            }
        }
    }

    match serde_json::from_str(raw) {
        Ok(Value::Array(items)) => Some(items),
        _ => None,
    }
}

/// Validate one parsed item, independently of the rest of the batch.
///
/// Requires a non-empty `question`, exactly four `options`, and an `answer`
/// that matches one option verbatim — or is a single `A`–`D` label mapping to
/// options 0..=3. Anything else drops the item. A missing explanation is
/// replaced with a fixed default.
pub fn clean_question(item: &Value) -> Option<QuizQuestion> {
    let obj = item.as_object()?;

    let question = obj.get("question")?.as_str()?.trim();
    if question.is_empty() {
        return None;
    }

    let options: Vec<String> = obj
        .get("options")?
        .as_array()?
        .iter()
        .map(|o| o.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()?;
    if options.len() != 4 {
        return None;
    }

    let raw_answer = obj.get("answer")?.as_str()?;
    if raw_answer.is_empty() {
        return None;
    }

    let answer = if options.iter().any(|o| o == raw_answer) {
        raw_answer.to_string()
    } else {
        let idx = match raw_answer.trim() {
            "A" => 0,
            "B" => 1,
            "C" => 2,
            "D" => 3,
            _ => return None,
        };
        options[idx].clone()
    };

    let explanation = obj
        .get("explanation")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .unwrap_or(DEFAULT_EXPLANATION)
        .to_string();

    Some(QuizQuestion {
        question: question.to_string(),
        options,
        answer,
        explanation,
    })
}
