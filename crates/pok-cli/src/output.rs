//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use pok_domain::{Claim, ClaimKey, ClaimRecord, JournalEntry, RegistryMetadata};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Digest characters shown in table cells.
const DIGEST_WIDTH: usize = 16;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format claims output.
    pub fn format_claims(&self, claims: &[Claim]) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_claims_json(claims),
            OutputFormat::Table => self.format_claims_table(claims),
            OutputFormat::Quiet => Ok(claims
                .iter()
                .map(|c| c.key.digest.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_claims_json(&self, claims: &[Claim]) -> Result<String> {
        let json_claims: Vec<serde_json::Value> = claims
            .iter()
            .map(|c| {
                let mut value = record_json(&c.record);
                value["claimant"] = c.key.claimant.as_str().into();
                value["digest"] = c.key.digest.as_str().into();
                value
            })
            .collect();

        Ok(serde_json::to_string_pretty(&json_claims)?)
    }

    fn format_claims_table(&self, claims: &[Claim]) -> Result<String> {
        if claims.is_empty() {
            return Ok(self.colorize("No claims found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Claimant", "Digest", "Claims", "Message", "On behalf of"]);

        for claim in claims {
            builder.push_record([
                claim.key.claimant.to_string(),
                truncate(claim.key.digest.as_str(), DIGEST_WIDTH),
                describe_assertions(&claim.record),
                claim.record.message.clone().unwrap_or_default(),
                claim.record.on_behalf_of.clone().unwrap_or_default(),
            ]);
        }

        Ok(self.render(builder))
    }

    /// Format journal entries.
    pub fn format_history(&self, entries: &[JournalEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json_entries: Vec<serde_json::Value> = entries
                    .iter()
                    .map(|e| {
                        serde_json::json!({
                            "id": e.id.to_string(),
                            "operation": e.operation.as_str(),
                            "claimant": e.key.claimant.as_str(),
                            "digest": e.key.digest.as_str(),
                            "record": e.record.as_ref().map(record_json),
                            "recorded_at": e.recorded_at,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json_entries)?)
            }
            OutputFormat::Table => {
                if entries.is_empty() {
                    return Ok(self.colorize("No history found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Recorded at", "Operation", "Claimant", "Digest", "Claims"]);

                for entry in entries {
                    builder.push_record([
                        entry.recorded_at.to_string(),
                        entry.operation.as_str().to_string(),
                        entry.key.claimant.to_string(),
                        truncate(entry.key.digest.as_str(), DIGEST_WIDTH),
                        entry
                            .record
                            .as_ref()
                            .map(describe_assertions)
                            .unwrap_or_default(),
                    ]);
                }

                Ok(self.render(builder))
            }
            OutputFormat::Quiet => Ok(entries
                .iter()
                .map(|e| e.id.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format registry metadata.
    pub fn format_metadata(&self, metadata: &RegistryMetadata) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let map: serde_json::Map<String, serde_json::Value> = metadata
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.into()))
                    .collect();
                Ok(serde_json::to_string_pretty(&map)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Key", "Value"]);
                for (key, value) in metadata.iter() {
                    builder.push_record([key, value]);
                }
                Ok(self.render(builder))
            }
            OutputFormat::Quiet => Ok(metadata.name().unwrap_or_default().to_string()),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format claim recording result.
    pub fn claim_recorded(&self, key: &ClaimKey) -> String {
        self.success(&format!("Claim recorded: {}", key))
    }

    /// Format bulk operation result.
    pub fn bulk_result(&self, operation: &str, count: usize) -> String {
        self.success(&format!("{} {} claim(s)", operation, count))
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn record_json(record: &ClaimRecord) -> serde_json::Value {
    serde_json::json!({
        "claims_origination": record.claims_origination,
        "claims_copyright": record.claims_copyright,
        "claims_innovation": record.claims_innovation,
        "message": record.message,
        "on_behalf_of": record.on_behalf_of,
    })
}

/// Comma-separated assertion names, or "knowledge" when none are made.
pub fn describe_assertions(record: &ClaimRecord) -> String {
    let kinds = record.assertions();
    if kinds.is_empty() {
        return "knowledge".to_string();
    }
    kinds
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut short: String = text.chars().take(width).collect();
    short.push('…');
    short
}

#[cfg(test)]
mod tests {
    use super::*;
    use pok_domain::Operation;

    fn create_test_claim() -> Claim {
        Claim::new(
            ClaimKey::new("tz1alice", "3dc1115d86910942af0d1b0bee7183e45a9f2b777f503f895546254ffdcb5017"),
            ClaimRecord::new(false, true, true).with_message("msg"),
        )
    }

    #[test]
    fn test_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_claims(&[create_test_claim()]).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["claimant"], "tz1alice");
        assert_eq!(parsed[0]["claims_copyright"], true);
        assert_eq!(parsed[0]["message"], "msg");
        assert!(parsed[0]["on_behalf_of"].is_null());
    }

    #[test]
    fn test_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_claims(&[create_test_claim()]).unwrap();
        assert_eq!(
            output,
            "3dc1115d86910942af0d1b0bee7183e45a9f2b777f503f895546254ffdcb5017"
        );
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_claims(&[create_test_claim()]).unwrap();
        assert!(output.contains("Claimant"));
        assert!(output.contains("copyright, innovation"));
        assert!(output.contains("3dc1115d86910942…"));
    }

    #[test]
    fn test_empty_claims() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_claims(&[]).unwrap();
        assert!(output.contains("No claims found"));
    }

    #[test]
    fn test_history_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let entries = vec![JournalEntry::withdraw(ClaimKey::new("tz1alice", "abc2"), 1000)];
        let output = formatter.format_history(&entries).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["operation"], Operation::Withdraw.as_str());
        assert!(parsed[0]["record"].is_null());
        assert_eq!(parsed[0]["recorded_at"], 1000);
    }

    #[test]
    fn test_metadata_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_metadata(&RegistryMetadata::default()).unwrap();
        assert!(output.contains("Proof of Knowledge"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }

    #[test]
    fn test_describe_knowledge_only() {
        assert_eq!(describe_assertions(&ClaimRecord::default()), "knowledge");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("ドキュメント", 3), "ドキュ…");
        assert_eq!(truncate("abc", 3), "abc");
    }
}
