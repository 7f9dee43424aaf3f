//! Wire models for the state stream.
//!
//! Every struct here derives `Deserialize` with `#[serde(default)]` so an
//! arbitrary partial snapshot parses without error: the backend is free to
//! omit any module's section on a given tick, and absence always means
//! "empty", never "invalid".

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ConsoleError, Result};

// ── StateSnapshot ─────────────────────────────────────────────────────────────

/// One full state message.
///
/// A snapshot fully replaces all panel-derived views; there is no
/// merge/patch semantics between consecutive snapshots.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StateSnapshot {
    pub camera: ModuleHealth,
    pub yolo: YoloState,
    pub system: SystemState,
    pub usb: UsbState,
    pub self_update: ModuleHealth,
    pub thoughts: ThoughtsState,
    pub vision_model: VisionState,
    pub chat: Vec<ChatMessage>,
    /// Server-side send time, opaque to the client.
    pub timestamp: String,
}

/// Fixed set of modules shown in the sentinel panel, in display order.
pub const SENTINEL_MODULES: [&str; 7] = [
    "camera",
    "yolo",
    "system",
    "usb",
    "self_update",
    "thoughts",
    "vision_model",
];

impl StateSnapshot {
    /// Parse a raw UTF-8 JSON payload from the state socket.
    pub fn parse(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(ConsoleError::from)
    }

    /// Health of a named module.
    ///
    /// Unknown names report [`HealthState::Idle`], the same as a module the
    /// backend simply did not include.
    pub fn module_health(&self, name: &str) -> HealthState {
        match name {
            "camera" => self.camera.health(),
            "yolo" => HealthState::classify(&self.yolo.status, self.yolo.error.as_deref()),
            "system" => HealthState::classify(&self.system.status, self.system.error.as_deref()),
            "usb" => HealthState::classify(&self.usb.status, self.usb.error.as_deref()),
            "self_update" => self.self_update.health(),
            "thoughts" => {
                HealthState::classify(&self.thoughts.status, self.thoughts.error.as_deref())
            }
            "vision_model" => HealthState::classify(
                &self.vision_model.status,
                self.vision_model.error.as_deref(),
            ),
            _ => HealthState::Idle,
        }
    }
}

// ── Health ────────────────────────────────────────────────────────────────────

/// A bare `{status, error}` module section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModuleHealth {
    pub status: String,
    pub error: Option<String>,
}

impl ModuleHealth {
    pub fn health(&self) -> HealthState {
        HealthState::classify(&self.status, self.error.as_deref())
    }
}

/// The three display states of a module indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthState {
    Active,
    Error(String),
    Idle,
}

impl HealthState {
    /// Classify a raw status string and optional error message.
    ///
    /// An error message wins over any status; `"active"` maps to `Active`;
    /// everything else (including an absent module, which deserializes to
    /// empty strings) is `Idle`.
    pub fn classify(status: &str, error: Option<&str>) -> Self {
        match error {
            Some(e) if !e.is_empty() => HealthState::Error(e.to_string()),
            _ if status == "error" => HealthState::Error(String::new()),
            _ if status == "active" => HealthState::Active,
            _ => HealthState::Idle,
        }
    }
}

// ── Detections ────────────────────────────────────────────────────────────────

/// Object-detection telemetry from the state stream.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct YoloState {
    pub status: String,
    pub error: Option<String>,
    pub detections: Vec<Detection>,
    pub last_scan: String,
    pub scene_changed: bool,
}

/// One detected object in source-image pixel coordinates.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Detection {
    pub object: String,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    /// `[x1, y1, x2, y2]` in source-image pixels.
    pub bbox: [f64; 4],
}

// ── Telemetry ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SystemState {
    pub status: String,
    pub error: Option<String>,
    pub data: SystemData,
}

/// Raw telemetry values.
///
/// CPU and RAM arrive as either JSON numbers or numeric strings and are
/// parsed by [`crate::formatting::parse_metric`]; the rest are opaque
/// pass-through strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SystemData {
    pub cpu: Value,
    pub ram: Value,
    pub ram_used_gb: Value,
    pub ram_total_gb: Value,
    pub disk_free: Value,
    pub temp: Value,
    pub battery: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UsbState {
    pub status: String,
    pub error: Option<String>,
    pub devices: Vec<Value>,
    pub last_event: String,
}

// ── Thoughts ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThoughtsState {
    pub status: String,
    pub error: Option<String>,
    /// Whatever window the backend considers "recent"; the client does no
    /// trimming of its own.
    pub recent: Vec<Thought>,
}

/// Speak-likelihood threshold above which a thought is highlighted.
pub const SPEAK_HIGHLIGHT: f64 = 0.6;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Thought {
    pub timestamp: String,
    pub category: String,
    pub content: String,
    pub speak_score: f64,
}

impl Thought {
    pub fn is_highlighted(&self) -> bool {
        self.speak_score > SPEAK_HIGHLIGHT
    }
}

// ── Vision ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VisionState {
    pub status: String,
    pub error: Option<String>,
    pub description: String,
    pub last_update: String,
}

// ── Chat ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChatMessage {
    pub source: String,
    pub message: String,
    /// ISO-8601, opaque to the client beyond time-of-day formatting.
    pub timestamp: String,
}

impl ChatMessage {
    pub fn source_kind(&self) -> ChatSource {
        ChatSource::from_tag(&self.source)
    }
}

/// Closed enumeration of chat message origins.
///
/// The wire carries free-form tags; anything outside the known set falls
/// into [`ChatSource::Unknown`] rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSource {
    User,
    Max,
    Tool,
    MaxThought,
    Sys,
    Error,
    Unknown,
}

impl ChatSource {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "USER" => ChatSource::User,
            "MAX" => ChatSource::Max,
            "TOOL" => ChatSource::Tool,
            "MAX_THOUGHT" => ChatSource::MaxThought,
            "SYS" => ChatSource::Sys,
            "ERROR" => ChatSource::Error,
            _ => ChatSource::Unknown,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ChatSource::User => "🧑",
            ChatSource::Max => "🤖",
            ChatSource::Tool => "🔧",
            ChatSource::MaxThought => "💭",
            ChatSource::Sys => "⚙",
            ChatSource::Error => "‼",
            ChatSource::Unknown => "•",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChatSource::User => "YOU",
            ChatSource::Max => "MAX",
            ChatSource::Tool => "TOOL",
            ChatSource::MaxThought => "THOUGHT",
            ChatSource::Sys => "SYS",
            ChatSource::Error => "ERR",
            ChatSource::Unknown => "???",
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
