pub mod breakdown;
pub mod engine;
pub mod guidance;
pub mod meeting;
pub mod weights;
pub mod whatif;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub use breakdown::explain;
pub use engine::{score, score_batch};
pub use whatif::simulate_whatif;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Meeting,
    Email,
    Async,
}

impl Channel {
    /// Also the tie-break order: earlier channels win equal percentages.
    pub const ALL: [Channel; 3] = [Channel::Meeting, Channel::Email, Channel::Async];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            Self::Meeting => "meeting",
            Self::Email => "email",
            Self::Async => "async",
        };
        write!(f, "{display}")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Meeting,
    Email,
    AsyncMessage,
    CancelMeeting,
    NoAction,
}

impl Recommendation {
    pub fn as_slug(&self) -> &'static str {
        match self {
            Self::Meeting => "meeting",
            Self::Email => "email",
            Self::AsyncMessage => "async_message",
            Self::CancelMeeting => "cancel_meeting",
            Self::NoAction => "no_action",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Meeting => "Schedule a meeting",
            Self::Email => "Send an email",
            Self::AsyncMessage => "Post an async message",
            Self::CancelMeeting => "Cancel the meeting",
            Self::NoAction => "No action needed",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Meeting => "calendar",
            Self::Email => "mail",
            Self::AsyncMessage => "message-square",
            Self::CancelMeeting => "calendar-x",
            Self::NoAction => "check-circle",
        }
    }
}

impl From<Channel> for Recommendation {
    fn from(channel: Channel) -> Self {
        match channel {
            Channel::Meeting => Self::Meeting,
            Channel::Email => Self::Email,
            Channel::Async => Self::AsyncMessage,
        }
    }
}

impl Display for Recommendation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_slug())
    }
}

/// Normalized channel percentages.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ChannelScores {
    pub meeting: f64,
    pub email: f64,
    #[serde(rename = "async")]
    pub async_message: f64,
}

impl ChannelScores {
    pub fn from_values(values: [f64; 3]) -> Self {
        Self {
            meeting: values[Channel::Meeting.index()],
            email: values[Channel::Email.index()],
            async_message: values[Channel::Async.index()],
        }
    }

    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Meeting => self.meeting,
            Channel::Email => self.email,
            Channel::Async => self.async_message,
        }
    }

    pub fn total(&self) -> f64 {
        self.meeting + self.email + self.async_message
    }

    /// Channels by descending percentage. The sort is stable over
    /// `Channel::ALL`, so ties keep meeting before email before async.
    pub fn ranked(&self) -> [(Channel, f64); 3] {
        let mut ranked = Channel::ALL.map(|channel| (channel, self.get(channel)));
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    /// Difference between the top two channels.
    pub fn lead(&self) -> f64 {
        let ranked = self.ranked();
        ranked[0].1 - ranked[1].1
    }

    pub fn rounded(&self) -> Self {
        Self {
            meeting: round_one_decimal(self.meeting),
            email: round_one_decimal(self.email),
            async_message: round_one_decimal(self.async_message),
        }
    }
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Everything the engine decides for one answer set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResult {
    pub recommendation: Recommendation,
    pub confidence_score: u8,
    pub rationale: String,
    pub meeting_length: u32,
    pub meeting_cadence: Option<String>,
    pub participants: Vec<String>,
    pub time_saved_minutes: u32,
    pub best_practices: String,
    pub scores: ChannelScores,
}
