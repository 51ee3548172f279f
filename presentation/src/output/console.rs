//! Console output formatter for daily fortunes

use colored::Colorize;
use fortune_domain::Fortune;

/// Formats a [`Fortune`] for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the fortune as a console card
    pub fn format(fortune: &Fortune) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n",
            format!("=== Mahjong Fortune: {} ===", fortune.date)
                .cyan()
                .bold()
        ));
        output.push('\n');

        output.push_str(&format!("{}\n\n", fortune.fortune));

        output.push_str(&format!(
            "{} {}\n",
            "Lucky tile:".yellow().bold(),
            fortune.lucky_tile
        ));
        output.push_str(&format!(
            "{} {}\n\n",
            "Lucky yaku:".yellow().bold(),
            fortune.lucky_yaku
        ));

        output.push_str(&format!("{} {}\n", "Tip:".green().bold(), fortune.tip));

        output.push_str(&format!("\n{}\n", format!("({})", fortune.model).dimmed()));

        output
    }

    /// Format as JSON, matching the original endpoint's response shape
    pub fn format_json(fortune: &Fortune) -> String {
        serde_json::to_string_pretty(fortune).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format as a plain share card for pasting into chats
    pub fn format_share(fortune: &Fortune) -> String {
        format!(
            "🎴 Mahjong Fortune {date}\n\n💬 {fortune}\n🀄 Lucky tile: {tile}\n🎯 Lucky yaku: {yaku}\n💡 {tip}\n\n#mahjong #fortune",
            date = fortune.date,
            fortune = fortune.fortune,
            tile = fortune.lucky_tile,
            yaku = fortune.lucky_yaku,
            tip = fortune.tip,
        )
    }
}
