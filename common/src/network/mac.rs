//! # Hardware Address Parsing
//!
//! Strict textual MAC handling for the wake path.
//!
//! The accepted form is exactly six colon-separated two-hex-digit segments
//! (`AA:BB:CC:DD:EE:FF`), case-insensitive. Anything else — wrong segment
//! count, wrong segment width, a non-hex character — is a [`MacParseError`].
//! A wake frame built from a padded or truncated address is silently wrong
//! on the wire, so nothing here coerces.

use pnet::util::MacAddr;
use thiserror::Error;

const SEGMENT_COUNT: usize = 6;
const SEGMENT_WIDTH: usize = 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MacParseError {
    #[error("expected {SEGMENT_COUNT} colon-separated segments, found {0}")]
    WrongSegmentCount(usize),
    #[error("segment '{0}' is not a two-digit hex pair")]
    MalformedSegment(String),
}

/// Parses colon-separated MAC text into a [`MacAddr`].
pub fn parse_mac(text: &str) -> Result<MacAddr, MacParseError> {
    let segments: Vec<&str> = text.split(':').collect();
    if segments.len() != SEGMENT_COUNT {
        return Err(MacParseError::WrongSegmentCount(segments.len()));
    }

    let mut octets: [u8; SEGMENT_COUNT] = [0u8; SEGMENT_COUNT];
    for (octet, segment) in octets.iter_mut().zip(&segments) {
        *octet = parse_segment(segment)?;
    }

    Ok(MacAddr::new(
        octets[0], octets[1], octets[2], octets[3], octets[4], octets[5],
    ))
}

/// Parses one `XX` segment. Rejects anything `u8::from_str_radix` would
/// quietly tolerate (signs, wrong width) before handing over.
fn parse_segment(segment: &str) -> Result<u8, MacParseError> {
    let well_formed: bool =
        segment.len() == SEGMENT_WIDTH && segment.chars().all(|c| c.is_ascii_hexdigit());

    if !well_formed {
        return Err(MacParseError::MalformedSegment(segment.to_string()));
    }

    u8::from_str_radix(segment, 16)
        .map_err(|_| MacParseError::MalformedSegment(segment.to_string()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
