//! Chat-side types: incoming command invocations, outgoing replies and the command catalog.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── Interactions ───────────────────────────────────────────────────────────────

/// A decoded application-command invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub data: CommandData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandData {
    pub name: String,
    #[serde(default)]
    pub options: Vec<CommandOptionValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOptionValue {
    pub name: String,
    pub value: Value,
}

impl Interaction {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            data: CommandData {
                name: name.into(),
                options: Vec::new(),
            },
        }
    }

    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.options.push(CommandOptionValue {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    fn option(&self, name: &str) -> Option<&Value> {
        self.data
            .options
            .iter()
            .find(|opt| opt.name == name)
            .map(|opt| &opt.value)
    }

    pub fn string_option(&self, name: &str) -> Option<&str> {
        self.option(name)?.as_str()
    }

    pub fn integer_option(&self, name: &str) -> Option<i64> {
        self.option(name)?.as_i64()
    }
}

// ── Replies ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Reply {
    Text { content: String },
    Embed(Embed),
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Reply::Text {
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub filename: String,
    #[serde(with = "hex::serde")]
    pub data: Vec<u8>,
}

impl Attachment {
    /// URL an embed uses to reference this attachment.
    pub fn url(&self) -> String {
        format!("attachment://{}", self.filename)
    }
}

impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("filename", &self.filename)
            .field("len", &self.data.len())
            .finish()
    }
}

// ── Command catalog ────────────────────────────────────────────────────────────

pub const SPAM_BUTTON_OPTION: &str = "button";
pub const SPAM_AMOUNT_OPTION: &str = "spam-amount";
pub const SPAM_MIN: i64 = 2;
pub const SPAM_MAX: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    String,
    Integer,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommandOption {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: OptionKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
}

const SIMPLE_COMMANDS: [(&str, &str); 13] = [
    ("l", "Hit the left button"),
    ("r", "Hit the right button"),
    ("u", "Hit the up button"),
    ("d", "Hit the down button"),
    ("a", "Hit the A button"),
    ("b", "Hit the B button"),
    ("start", "Hit the Start button"),
    ("select", "Hit the Select button"),
    ("screen", "Get current screen"),
    ("party-count", "See how many pokemon you currently have in the party"),
    ("ball-count", "See how many pokeballs you currently have in total"),
    ("trainer", "See general trainer description"),
    ("help", "Display help dialogue"),
];

/// Every command the bridge answers to, in registration order.
pub fn commands() -> Vec<CommandDefinition> {
    let mut defs: Vec<_> = SIMPLE_COMMANDS
        .iter()
        .map(|&(name, description)| CommandDefinition {
            name,
            description,
            options: Vec::new(),
        })
        .collect();
    defs.push(CommandDefinition {
        name: "spam",
        description: "Spam a button multiple times. Dialogues go bye bye!",
        options: vec![
            CommandOption {
                name: SPAM_BUTTON_OPTION,
                description: "Button to spam (l,r,d,u,a,b,start,select)",
                kind: OptionKind::String,
                required: true,
                min_value: None,
                max_value: None,
            },
            CommandOption {
                name: SPAM_AMOUNT_OPTION,
                description: "Amount to press button",
                kind: OptionKind::Integer,
                required: true,
                min_value: Some(SPAM_MIN),
                max_value: Some(SPAM_MAX),
            },
        ],
    });
    defs
}
