//! Prompt template for fortune generation

use crate::fortune::tables::LuckyPick;

/// Template for the daily fortune prompt
pub struct PromptTemplate;

impl PromptTemplate {
    /// Build the generation prompt for one day.
    ///
    /// Asks for a JSON-only reply so the caller can extract
    /// `{"fortune": ..., "tip": ...}` without scraping prose.
    pub fn fortune(date_string: &str, pick: &LuckyPick) -> String {
        format!(
            r#"You are a riichi mahjong fortune teller.

Today's date: {date}
Lucky tile: {tile}
Lucky yaku: {yaku}

Write two things:

1. Today's mahjong fortune (one or two short sentences):
   - friendly, encouraging tone
   - concrete play advice tied to an aggressive, defensive, balanced, or intuitive style

2. Today's tip (one short sentence):
   - practical riichi mahjong advice

Good example:
fortune: "Your instincts are sharp today. Trust your discard reads and push for the win."
tip: "Watch the discards around your lucky tile before committing."

Reply with JSON only:
{{
  "fortune": "...",
  "tip": "..."
}}"#,
            date = date_string,
            tile = pick.tile,
            yaku = pick.yaku,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mentions_the_picks() {
        let pick = LuckyPick {
            tile: "5-man",
            yaku: "riichi",
        };
        let prompt = PromptTemplate::fortune("2026-8-6", &pick);
        assert!(prompt.contains("2026-8-6"));
        assert!(prompt.contains("5-man"));
        assert!(prompt.contains("riichi"));
    }

    #[test]
    fn test_prompt_requests_json_shape() {
        let pick = LuckyPick {
            tile: "east",
            yaku: "tanyao",
        };
        let prompt = PromptTemplate::fortune("2026-1-1", &pick);
        assert!(prompt.contains("\"fortune\""));
        assert!(prompt.contains("\"tip\""));
    }
}
