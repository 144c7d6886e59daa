//! Protocol module - JSON event envelope
//!
//! Every message has an `event` name and, for `update_screen`, a `data` grid
//! of tile codes. Decoding validates the grid so downstream code only ever
//! sees well-formed [`Screen`]s.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Screen, ScreenError, ViewerEvent, UPDATE_SCREEN_EVENT};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid event envelope: {0}")]
    Json(#[source] serde_json::Error),
    #[error("update_screen event without data")]
    MissingData,
    #[error("screen data is not a grid of tile codes: {0}")]
    Payload(#[source] serde_json::Error),
    #[error("invalid screen: {0}")]
    Screen(#[from] ScreenError),
}

#[derive(Debug, Deserialize)]
struct Envelope {
    event: String,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct WireEvent<'a> {
    event: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Vec<Vec<u8>>>,
}

/// Decode one text frame.
///
/// # Examples
///
/// ```
/// use tile_viewer_adapter::decode_event;
/// use tile_viewer_adapter::types::{Tile, ViewerEvent};
///
/// let ev = decode_event(r#"{"event":"update_screen","data":[[0,3]]}"#).unwrap();
/// match ev {
///     ViewerEvent::UpdateScreen(screen) => assert_eq!(screen.get(1, 0), Some(Tile::Mario)),
///     other => panic!("unexpected {:?}", other),
/// }
/// ```
pub fn decode_event(text: &str) -> Result<ViewerEvent, DecodeError> {
    let envelope: Envelope = serde_json::from_str(text).map_err(DecodeError::Json)?;

    if envelope.event != UPDATE_SCREEN_EVENT {
        return Ok(ViewerEvent::Unknown(envelope.event));
    }

    let data = envelope.data.ok_or(DecodeError::MissingData)?;
    let codes: Vec<Vec<u8>> = serde_json::from_value(data).map_err(DecodeError::Payload)?;
    Ok(ViewerEvent::UpdateScreen(Screen::from_codes(codes)?))
}

/// Encode an event in the producer's wire format.
pub fn encode_event(event: &ViewerEvent) -> Result<String, serde_json::Error> {
    let wire = match event {
        ViewerEvent::UpdateScreen(screen) => WireEvent {
            event: UPDATE_SCREEN_EVENT,
            data: Some(screen.to_codes()),
        },
        ViewerEvent::Unknown(name) => WireEvent {
            event: name,
            data: None,
        },
    };
    serde_json::to_string(&wire)
}
