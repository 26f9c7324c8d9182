// src/core/sanitize.rs

/// Decode entities that survive the HTML parser.
///
/// The site double-encodes some names (`Bats &amp;#038; Balls`), so after
/// parsing a literal `&#038;` can still show up in text.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        // Entities are short; anything longer is a bare ampersand.
        let decoded = tail
            .char_indices()
            .take(12)
            .find(|&(_, c)| c == ';')
            .and_then(|(semi, _)| decode_one(&tail[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((ch, semi)) => {
                out.push(ch);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_one(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "nbsp" => Some(' '),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "ndash" => Some('–'),
        "rsquo" => Some('’'),
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Entity-decode, then collapse whitespace.
pub fn clean_text(s: &str) -> String {
    normalize_ws(&decode_entities(s))
}

/// `https://site/event/4411/` → `4411`
pub fn last_path_segment(url: &str) -> &str {
    let trimmed = url.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Filesystem-friendly stem for export files.
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() || ch == '—' { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("report") } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_named_and_numeric() {
        assert_eq!(decode_entities("Bats &#038; Balls"), "Bats & Balls");
        assert_eq!(decode_entities("Sluggers&nbsp;II"), "Sluggers II");
        assert_eq!(decode_entities("Men&#8217;s"), "Men’s");
        assert_eq!(decode_entities("A &#x26; B"), "A & B");
    }

    #[test]
    fn bare_ampersand_survives() {
        assert_eq!(decode_entities("Pub & Grill"), "Pub & Grill");
        assert_eq!(decode_entities("R&D;"), "R&D;");
    }

    #[test]
    fn clean_collapses_whitespace() {
        assert_eq!(clean_text("  Big \n\t Hitters&nbsp; "), "Big Hitters");
    }

    #[test]
    fn last_segment_strips_trailing_slash() {
        assert_eq!(last_path_segment("https://x.org/event/4411/"), "4411");
        assert_eq!(last_path_segment("https://x.org/event/4411"), "4411");
    }

    #[test]
    fn filename_stem() {
        assert_eq!(sanitize_filename("Monday Mens — Summer 2024"), "Monday_Mens_Summer_2024");
        assert_eq!(sanitize_filename("???"), "report");
    }
}
