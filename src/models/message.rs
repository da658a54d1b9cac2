use serde::Deserialize;

/// Token usage block attached to assistant messages in the transcript.
///
/// Counters may be absent or `null`; both count as zero.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MessageUsage {
    pub input_tokens: Option<u64>,
    pub cache_creation_input_tokens: Option<u64>,
    pub cache_read_input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
}

impl MessageUsage {
    fn counters(&self) -> [u64; 4] {
        [
            self.input_tokens.unwrap_or(0),
            self.cache_creation_input_tokens.unwrap_or(0),
            self.cache_read_input_tokens.unwrap_or(0),
            self.output_tokens.unwrap_or(0),
        ]
    }

    pub fn has_usage(&self) -> bool {
        self.counters().iter().any(|&n| n > 0)
    }

    pub fn total(&self) -> u64 {
        self.counters().iter().fold(0u64, |acc, &n| acc.saturating_add(n))
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct MessageObj {
    pub usage: Option<MessageUsage>,
}

/// One line of the JSONL transcript. Only the fields needed for token
/// accounting are decoded; everything else is ignored.
#[derive(Deserialize, Debug, Default)]
pub struct TranscriptLine {
    pub r#type: Option<String>,
    pub message: Option<MessageObj>,
}

impl TranscriptLine {
    pub fn is_assistant(&self) -> bool {
        self.r#type.as_deref() == Some("assistant")
    }

    pub fn usage(&self) -> MessageUsage {
        self.message
            .as_ref()
            .and_then(|m| m.usage)
            .unwrap_or_default()
    }
}
