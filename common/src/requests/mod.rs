use serde_json::{Map, Value};
use std::fmt;
use std::num::NonZeroU64;

/// Identifier of a board item ("pulse").
///
/// Always a positive integer. It is interpolated into the upload mutation, so only
/// digits can ever reach the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(NonZeroU64);

impl ItemId {
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(ItemId)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// Accepts a JSON number or a string of digits. Zero counts as absent.
    pub fn from_json(value: &Value) -> Option<Self> {
        let raw = match value {
            Value::Number(n) => n.as_u64()?,
            Value::String(s) => s.trim().parse::<u64>().ok()?,
            _ => return None,
        };
        Self::new(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What an incoming webhook body asks of us.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookPayload {
    /// Subscription handshake: the value must be echoed back untouched.
    Challenge(Value),
    /// A board event, `{ "event": { "pulseId": ... } }`. `None` when no usable id was sent.
    Event(Option<ItemId>),
}

impl WebhookPayload {
    /// Classifies a decoded JSON object. A `challenge` key wins over anything else
    /// in the body, even when its value is `null`.
    pub fn interpret(body: &Map<String, Value>) -> Self {
        if let Some(challenge) = body.get("challenge") {
            return WebhookPayload::Challenge(challenge.clone());
        }
        let item_id = body
            .get("event")
            .and_then(|event| event.get("pulseId"))
            .and_then(ItemId::from_json);
        WebhookPayload::Event(item_id)
    }
}
