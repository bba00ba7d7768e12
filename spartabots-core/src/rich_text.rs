//! Inline link markup for card copy.
//!
//! Links are written `[href](label)`. Anything that does not parse as a link is kept as text.

use alloc::vec::Vec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Link { href: &'a str, label: &'a str },
}

pub fn parse(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();

    let mut rest = text;
    // start of text that has not been pushed yet
    let mut literal_start = 0;
    let mut offset = 0;

    while let Some(open) = rest.find('[') {
        let after_open = &rest[open + 1..];

        let Some((href, label, consumed)) = parse_link(after_open) else {
            // not a link. skip the bracket and keep looking
            offset += open + 1;
            rest = after_open;
            continue;
        };

        let link_start = offset + open;
        if link_start > literal_start {
            segments.push(Segment::Text(&text[literal_start..link_start]));
        }

        segments.push(Segment::Link { href, label });

        offset = link_start + 1 + consumed;
        literal_start = offset;
        rest = &text[offset..];
    }

    if literal_start < text.len() {
        segments.push(Segment::Text(&text[literal_start..]));
    }

    segments
}

/// `href](label)` -> (href, label, bytes consumed)
fn parse_link(s: &str) -> Option<(&str, &str, usize)> {
    let close = s.find("](")?;
    let href = &s[..close];

    if href.trim().is_empty() || href.contains('[') {
        return None;
    }

    let after = &s[close + 2..];
    let end = after.find(')')?;
    let label = &after[..end];

    if label.is_empty() {
        return None;
    }

    Some((href, label, close + 2 + end + 1))
}
