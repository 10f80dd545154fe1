// SPDX-License-Identifier: MPL-2.0
//! Display formatting for prices, mileage, and listing descriptions.

/// Formats a price the way the listing site does: ISO code, a space, then the
/// amount rounded to whole units with `,` thousands separators.
///
/// ```
/// use showroom::catalog::format::format_price;
/// assert_eq!(format_price(85_000.0, "AED"), "AED 85,000");
/// ```
pub fn format_price(price: f64, currency: &str) -> String {
    let rounded = price.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = group_thousands(&format!("{:.0}", rounded.abs()));
    let code = currency.trim();
    if code.is_empty() {
        format!("{sign}{digits}")
    } else {
        format!("{sign}{} {digits}", code.to_uppercase())
    }
}

/// Formats a distance with en-US grouping and at most three fraction digits.
///
/// ```
/// use showroom::catalog::format::format_mileage;
/// assert_eq!(format_mileage(120_500.0), "120,500");
/// assert_eq!(format_mileage(1_234.5), "1,234.5");
/// ```
pub fn format_mileage(km: f64) -> String {
    let sign = if km < 0.0 { "-" } else { "" };
    let fixed = format!("{:.3}", km.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((&fixed, ""));
    let fraction = fraction.trim_end_matches('0');
    let whole = group_thousands(whole);
    if fraction.is_empty() {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{fraction}")
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Converts seller HTML into plain paragraphs for a text widget.
///
/// Block-level closers and `<br>` become line breaks, list items get a
/// bullet, common entities are decoded, and runs of blank lines collapse to
/// one.
pub fn html_to_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        out.push_str(&decode_entities(&rest[..start]));
        let Some(end) = rest[start..].find('>') else {
            // Unterminated tag: keep the remainder as text.
            out.push_str(&decode_entities(&rest[start..]));
            rest = "";
            break;
        };
        let tag = rest[start + 1..start + end].trim().to_ascii_lowercase();
        apply_tag(&tag, &mut out);
        rest = &rest[start + end + 1..];
    }
    out.push_str(&decode_entities(rest));

    normalize_whitespace(&out)
}

fn apply_tag(tag: &str, out: &mut String) {
    let name = tag
        .trim_start_matches('/')
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or("");
    let closing = tag.starts_with('/');

    match name {
        "br" => out.push('\n'),
        "li" if !closing => out.push_str("\n• "),
        "p" | "div" | "ul" | "ol" | "li" | "tr" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            out.push('\n');
        }
        _ => {}
    }
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

fn normalize_whitespace(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut previous_blank = true;

    for line in text.lines() {
        let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ");
        let blank = collapsed.is_empty();
        if blank && previous_blank {
            continue;
        }
        lines.push(collapsed);
        previous_blank = blank;
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}
