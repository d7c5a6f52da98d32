use super::{Metric, MetricScore, ScoreReport};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

fn brace_span() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Greedy: first '{' through last '}'.
    RE.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("static brace regex"))
}

/// Read judge output into a [`ScoreReport`]. Never fails.
///
/// The largest brace-delimited span is parsed as a JSON object (the whole text
/// when there are no braces). If that does not yield an object of metric
/// objects, every metric gets the same entry with null score and confidence
/// and the raw text as evidence.
pub fn coerce(text: &str) -> ScoreReport {
    let candidate = brace_span().find(text).map_or(text, |m| m.as_str());

    match read_report(candidate) {
        Ok(report) => {
            debug!(candidate_len = candidate.len(), "judge output parsed");
            report
        }
        Err(reason) => {
            warn!(
                reason,
                text_len = text.len(),
                "judge output unreadable; using fallback scores"
            );
            ScoreReport::fallback(text)
        }
    }
}

fn read_report(candidate: &str) -> Result<ScoreReport, &'static str> {
    let data: Value = serde_json::from_str(candidate).map_err(|_| "invalid json")?;
    let obj = data.as_object().ok_or("top-level value is not an object")?;

    let mut entries: [Arc<MetricScore>; 5] = Default::default();
    for metric in Metric::ALL {
        let score = read_entry(lookup(obj, metric.name()))?;
        entries[metric.index()] = Arc::new(score);
    }
    Ok(ScoreReport::from_entries(entries))
}

/// Exact key first, then any key equal to `name` once trimmed and lower-cased.
/// Falsy values count as missing.
fn lookup<'a>(obj: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    obj.get(name).filter(|v| is_truthy(v)).or_else(|| {
        obj.iter()
            .find(|(k, v)| k.trim().to_lowercase() == name && is_truthy(v))
            .map(|(_, v)| v)
    })
}

fn read_entry(entry: Option<&Value>) -> Result<MetricScore, &'static str> {
    let fields = match entry {
        None => return Ok(MetricScore::empty()),
        Some(Value::Object(fields)) => fields,
        Some(_) => return Err("metric entry is not an object"),
    };

    let evidence = match fields.get("evidence") {
        Some(Value::String(s)) => s.clone(),
        Some(v) if is_truthy(v) => v.to_string(),
        _ => String::new(),
    };

    Ok(MetricScore {
        score: fields.get("score").cloned().unwrap_or(Value::Null),
        confidence: fields.get("confidence").cloned().unwrap_or(Value::Null),
        evidence,
    })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn empty() -> MetricScore {
        MetricScore::empty()
    }

    #[test]
    fn single_metric_object_fills_the_rest_with_empty_entries() {
        let report = coerce(r#"{"fluency":{"score":4,"confidence":0.8,"evidence":"ok"}}"#);
        assert!(!report.is_fallback());
        assert_eq!(
            report.get(Metric::Fluency),
            &MetricScore {
                score: json!(4),
                confidence: json!(0.8),
                evidence: "ok".to_string(),
            }
        );
        for metric in &Metric::ALL[1..] {
            assert_eq!(report.get(*metric), &empty(), "metric {}", metric);
        }
    }

    #[test]
    fn prose_falls_back_with_one_shared_entry() {
        let report = coerce("I cannot comply.");
        assert!(report.is_fallback());
        let expected = MetricScore::unreadable("I cannot comply.");
        for metric in Metric::ALL {
            assert_eq!(report.get(metric), &expected);
            assert!(Arc::ptr_eq(
                report.entry(Metric::Fluency),
                report.entry(metric)
            ));
        }
    }

    #[test]
    fn empty_text_still_has_all_keys() {
        let report = coerce("");
        assert!(report.is_fallback());
        assert_eq!(report.iter().count(), 5);
        assert_eq!(report.get(Metric::Frustration).evidence, "");
    }

    #[test]
    fn json_embedded_in_prose_is_extracted() {
        let text = "Sure! Here is my assessment:\n```json\n{\n  \"coherence\": {\"score\": 3, \"confidence\": 0.6, \"evidence\": \"drifts\"}\n}\n```\nLet me know.";
        let report = coerce(text);
        assert!(!report.is_fallback());
        assert_eq!(report.get(Metric::Coherence).score, json!(3));
        assert_eq!(report.get(Metric::Coherence).evidence, "drifts");
    }

    #[test]
    fn brace_span_is_greedy_across_objects() {
        // First '{' to last '}' is not valid JSON here.
        let text = r#"{"fluency": {"score": 1}} and also {"coherence": {"score": 2}}"#;
        let report = coerce(text);
        assert!(report.is_fallback());
        assert_eq!(report.get(Metric::Fluency).evidence, text);
    }

    #[test]
    fn full_report_round_trips_all_metrics() {
        let text = json!({
            "fluency": {"score": 4, "confidence": 0.9, "evidence": "natural phrasing"},
            "coherence": {"score": 5, "confidence": 0.8, "evidence": "on topic"},
            "complexity": {"score": 2, "confidence": 0.7, "evidence": "short sentences"},
            "engagement": {"score": 3, "confidence": 0.6, "evidence": "asks questions"},
            "frustration": {"score": 0, "confidence": 0.5, "evidence": "none"}
        })
        .to_string();
        let report = coerce(&text);
        let scores: Vec<_> = report.iter().map(|(_, s)| s.score.as_i64()).collect();
        assert_eq!(scores, vec![Some(4), Some(5), Some(2), Some(3), Some(0)]);
    }

    #[test]
    fn out_of_range_and_non_numeric_values_pass_through() {
        let report =
            coerce(r#"{"fluency": {"score": 9, "confidence": "high", "evidence": "x"}}"#);
        let fluency = report.get(Metric::Fluency);
        assert_eq!(fluency.score, json!(9));
        assert_eq!(fluency.confidence, json!("high"));
    }

    #[test]
    fn keys_match_after_trim_and_lowercase() {
        let report = coerce(r#"{" Fluency ": {"score": 2}, "ENGAGEMENT": {"score": 5}}"#);
        assert_eq!(report.get(Metric::Fluency).score, json!(2));
        assert_eq!(report.get(Metric::Engagement).score, json!(5));
    }

    #[test]
    fn exact_key_wins_over_variant() {
        let report = coerce(r#"{"Fluency": {"score": 1}, "fluency": {"score": 3}}"#);
        assert_eq!(report.get(Metric::Fluency).score, json!(3));
    }

    #[test]
    fn falsy_metric_entries_become_empty() {
        let report = coerce(r#"{"fluency": null, "coherence": 0, "complexity": {}, "engagement": ""}"#);
        assert!(!report.is_fallback());
        for metric in Metric::ALL {
            assert_eq!(report.get(metric), &empty());
        }
    }

    #[test]
    fn truthy_non_object_entry_falls_back() {
        let text = r#"{"fluency": "great", "coherence": {"score": 3}}"#;
        let report = coerce(text);
        assert!(report.is_fallback());
        assert_eq!(report.get(Metric::Coherence).evidence, text);
    }

    #[test]
    fn non_object_json_falls_back() {
        for text in ["[1, 2, 3]", "42", "\"text\"", "null"] {
            assert!(coerce(text).is_fallback(), "input {}", text);
        }
    }

    #[test]
    fn evidence_defaults_and_renders_non_strings() {
        let report = coerce(
            r#"{
                "fluency": {"score": 1, "evidence": null},
                "coherence": {"score": 1, "evidence": 0},
                "complexity": {"score": 1, "evidence": ["a", "b"]},
                "engagement": {"score": 1}
            }"#,
        );
        assert_eq!(report.get(Metric::Fluency).evidence, "");
        assert_eq!(report.get(Metric::Coherence).evidence, "");
        assert_eq!(report.get(Metric::Complexity).evidence, r#"["a","b"]"#);
        assert_eq!(report.get(Metric::Engagement).evidence, "");
    }

    #[test]
    fn missing_score_fields_are_null() {
        let report = coerce(r#"{"fluency": {"evidence": "only words"}}"#);
        let fluency = report.get(Metric::Fluency);
        assert_eq!(fluency.score, Value::Null);
        assert_eq!(fluency.confidence, Value::Null);
        assert_eq!(fluency.evidence, "only words");
    }
}
