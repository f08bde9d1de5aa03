/// The ICU token table.
///
/// Keys are complete ICU tokens, values are their Moment.js spellings. An
/// empty value means Moment.js has no way to express the token, and the
/// token is dropped from the output.
///
/// The table is total over ICU's reserved alphabet: every letter ICU
/// reserves appears here at least at width one, so a reserved letter can
/// never leak into the output as if it were literal text. Matching always
/// prefers the longest key at a given position (see [`longest_match`]), so
/// the order of entries carries no meaning.
const ICU_TO_MOMENT: &[(&str, &str)] = &[
    ("G", ""), // era (Anno Domini)
    ("Y", "Y"), // year of "week of year"
    ("y", ""),
    ("yyyy", "YYYY"), // 4 digit year, e.g. 2014
    ("yy", "YY"), // 2 digit year, e.g. 14
    ("u", ""), // extended year
    ("U", ""), // cyclic year name
    ("r", ""), // related Gregorian year
    ("Q", "Q"), // quarter number
    ("QQ", ""), // quarter number, zero padded
    ("QQQ", ""), // quarter abbreviation, e.g. Q2
    ("QQQQ", "Qo"), // quarter spelled out, e.g. 2nd quarter
    ("QQQQQ", ""),
    ("q", ""), // stand-alone quarter, all widths unsupported
    ("qq", ""),
    ("qqq", ""),
    ("qqqq", ""),
    ("qqqqq", ""),
    ("M", "M"), // month number
    ("MM", "MM"), // month number, zero padded
    ("MMM", "MMM"), // month abbreviation, e.g. Jan
    ("MMMM", "MMMM"), // month spelled out, e.g. January
    ("MMMMM", ""),
    ("L", ""), // stand-alone month, all widths unsupported
    ("LL", ""),
    ("LLL", ""),
    ("LLLL", ""),
    ("LLLLL", ""),
    ("w", "w"), // week of year
    ("ww", "ww"), // week of year, zero padded
    ("W", ""), // week of month
    ("d", "D"), // day of month
    ("dd", "DD"), // day of month, zero padded
    ("D", "DDD"), // day of year
    ("F", "Do"), // day of week in month, e.g. 2nd Wednesday in July
    ("g", ""), // modified Julian day
    ("E", "ddd"), // weekday abbreviation, e.g. Sun
    ("EE", "ddd"),
    ("EEE", "ddd"),
    ("EEEE", "dddd"), // weekday spelled out, e.g. Sunday
    ("EEEEE", ""),
    ("EEEEEE", "dd"), // weekday, two letters, e.g. Su
    ("e", "E"), // weekday number, ISO 8601 (1=Mon..7=Sun)
    ("ee", ""),
    ("eee", "ddd"),
    ("eeee", "dddd"),
    ("eeeee", ""),
    ("eeeeee", "dd"),
    ("c", "E"), // stand-alone weekday number, ISO 8601
    ("cc", "E"),
    ("ccc", "ddd"),
    ("cccc", "dddd"),
    ("ccccc", ""),
    ("cccccc", "dd"),
    ("a", "a"), // am/pm marker
    ("h", "h"), // hour, 1-12
    ("hh", "hh"), // hour, 01-12
    ("H", "H"), // hour, 0-23
    ("HH", "HH"), // hour, 00-23
    ("k", "k"), // hour, 1-24
    ("kk", "kk"), // hour, 01-24
    ("K", ""), // hour, 0-11
    ("KK", ""),
    ("m", "m"), // minute
    ("mm", "mm"), // minute, zero padded
    ("s", "s"), // second
    ("ss", "ss"), // second, zero padded
    ("S", "S"), // fractional second
    ("SS", "SS"),
    ("SSS", "SSS"),
    ("SSSS", "SSSS"),
    ("A", ""), // millisecond of day
    ("z", "z"), // time zone abbreviation
    ("zz", "zz"),
    ("zzz", ""),
    ("zzzz", ""), // time zone spelled out
    ("Z", "Z"), // offset from GMT, e.g. -08:00
    ("ZZ", "ZZ"), // offset from GMT, e.g. -0800
    ("ZZZ", ""),
    ("ZZZZ", ""), // long localized GMT, e.g. GMT-08:00
    ("ZZZZZ", ""), // ISO 8601 extended offset
    ("O", ""), // short localized GMT, e.g. GMT-8
    ("OOOO", ""), // long localized GMT, e.g. GMT-08:00
    ("v", ""), // generic non-location zone name
    ("vvvv", ""),
    ("V", ""), // time zone id, short
    ("VV", ""), // time zone id, long
    ("VVV", ""), // time zone exemplar city
    ("VVVV", ""), // generic location zone name
    ("X", ""), // ISO 8601 offset with Z for zero, all widths unsupported
    ("XX", ""),
    ("XXX", ""),
    ("XXXX", ""),
    ("XXXXX", ""),
    ("x", ""), // ISO 8601 offset without Z for zero, all widths unsupported
    ("xx", ""),
    ("xxx", ""),
    ("xxxx", ""),
    ("xxxxx", ""),
];

/// Translates a date/time format pattern from the [ICU dialect] into an
/// equivalent [Moment.js] pattern.
///
/// Tokens that Moment.js cannot express are dropped from the output.
/// Characters outside ICU's reserved alphabet, such as the separators `-`,
/// `/`, `:` and spaces, pass through unchanged.
///
/// Text between single quotes is literal: it is re-emitted with every
/// character escaped so that Moment.js renders it verbatim instead of
/// interpreting it as display tokens. A doubled single quote stands for one
/// literal quote character, whether it appears inside a quoted run or
/// outside of one. A quote that never closes is not treated as a quoted
/// run at all; it is copied through literally along with whatever follows
/// it.
///
/// This routine is total. It never fails, and any input string, including
/// the empty string, produces some output string.
///
/// # Example
///
/// ```
/// use moment_fmt::convert::icu_to_moment;
///
/// assert_eq!(icu_to_moment("yyyy-MM-dd"), "YYYY-MM-DD");
/// assert_eq!(icu_to_moment("EEEE, MMMM d, yyyy"), "dddd, MMMM D, YYYY");
/// assert_eq!(icu_to_moment("d 'of' MMMM"), r"D \o\f MMMM");
/// ```
///
/// [ICU dialect]: https://unicode.org/reports/tr35/tr35-dates.html#Date_Field_Symbol_Table
/// [Moment.js]: https://momentjs.com/docs/#/displaying/
pub fn icu_to_moment(pattern: &str) -> String {
    let quoted = quoted_runs(pattern);
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while let Some(ch) = rest.chars().next() {
        if let Some((token, replacement)) = longest_match(rest, &quoted) {
            if replacement.is_empty() {
                trace!(
                    "dropping ICU token {token:?} with \
                     no Moment.js equivalent",
                );
            }
            out.push_str(replacement);
            rest = &rest[token.len()..];
        } else {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }
    out
}

/// Finds the longest key matching a prefix of `rest`, searching the quoted
/// runs found in this pattern and then the static token table.
///
/// Preferring the longest key at every position is a correctness
/// requirement, not an optimization: it is what keeps a run like `QQQQ`
/// resolving to its own mapping instead of four copies of the mapping for
/// `Q`. Quoted run entries win over a static token of the same length,
/// although their keys start with a quote and so never actually collide.
fn longest_match<'t>(
    rest: &str,
    quoted: &'t [(String, String)],
) -> Option<(&'t str, &'t str)> {
    let mut best: Option<(&'t str, &'t str)> = None;
    for (text, escaped) in quoted.iter() {
        if rest.starts_with(text.as_str())
            && best.map_or(true, |(token, _)| text.len() > token.len())
        {
            best = Some((text.as_str(), escaped.as_str()));
        }
    }
    for &(token, replacement) in ICU_TO_MOMENT.iter() {
        if rest.starts_with(token)
            && best.map_or(true, |(prev, _)| token.len() > prev.len())
        {
            best = Some((token, replacement));
        }
    }
    best
}

/// Locates the quoted literal runs in `pattern`.
///
/// Each entry maps a run's original text, delimiters included, to its
/// content re-emitted with every character escaped for Moment.js. A doubled
/// quote outside a run is one literal quote character. A quote that never
/// closes starts no run; it is left for the token scan to copy through.
fn quoted_runs(pattern: &str) -> Vec<(String, String)> {
    let mut runs: Vec<(String, String)> = Vec::new();
    let mut at = 0;
    while let Some(found) = pattern[at..].find('\'') {
        let quote = at + found;
        if pattern[quote + 1..].starts_with('\'') {
            insert_run(&mut runs, "''", escape_literal("'"));
            at = quote + 2;
            continue;
        }
        let Some((end, content)) = close_run(pattern, quote + 1) else {
            break;
        };
        insert_run(&mut runs, &pattern[quote..end], escape_literal(&content));
        at = end;
    }
    runs
}

/// Scans the body of a quoted run starting just past its opening quote.
///
/// Returns the byte offset one past the closing quote, together with the
/// run's literal content. A doubled quote inside the run collapses to one
/// quote character of content. Returns `None` when the run never closes.
fn close_run(pattern: &str, start: usize) -> Option<(usize, String)> {
    let mut content = String::new();
    let mut chars = pattern[start..].char_indices().peekable();
    while let Some((offset, ch)) = chars.next() {
        if ch != '\'' {
            content.push(ch);
            continue;
        }
        if let Some(&(_, '\'')) = chars.peek() {
            chars.next();
            content.push('\'');
            continue;
        }
        return Some((start + offset + 1, content));
    }
    None
}

/// Records a quoted run, ignoring a run whose text was already seen. (The
/// same quoted text always escapes to the same replacement.)
fn insert_run(runs: &mut Vec<(String, String)>, text: &str, escaped: String) {
    if runs.iter().any(|(existing, _)| existing == text) {
        return;
    }
    runs.push((text.to_string(), escaped));
}

/// Re-emits `text` with every character escaped so that Moment.js treats
/// it as literal text rather than display tokens.
fn escape_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for ch in text.chars() {
        out.push('\\');
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_dates() {
        let f = |pattern: &str| icu_to_moment(pattern);

        insta::assert_snapshot!(f("yyyy-MM-dd"), @"YYYY-MM-DD");
        insta::assert_snapshot!(f("dd.MM.yy"), @"DD.MM.YY");
        insta::assert_snapshot!(f("M/d/yy"), @"M/D/YY");
        insta::assert_snapshot!(f("EEEE, MMMM d, yyyy"), @"dddd, MMMM D, YYYY");
        insta::assert_snapshot!(f("EEE, dd MMM"), @"ddd, DD MMM");
    }

    #[test]
    fn ok_times() {
        let f = |pattern: &str| icu_to_moment(pattern);

        insta::assert_snapshot!(f("HH:mm:ss"), @"HH:mm:ss");
        insta::assert_snapshot!(f("h:mm a"), @"h:mm a");
        insta::assert_snapshot!(f("HH:mm:ss.SSS Z"), @"HH:mm:ss.SSS Z");
        insta::assert_snapshot!(f("yyyy-MM-dd HH:mm"), @"YYYY-MM-DD HH:mm");
    }

    #[test]
    fn ok_empty() {
        assert_eq!(icu_to_moment(""), "");
    }

    // A token run must resolve to its own table entry, never to repeated
    // applications of a shorter entry's mapping.
    #[test]
    fn ok_longest_match_wins() {
        assert_eq!(icu_to_moment("Q"), "Q");
        assert_eq!(icu_to_moment("QQQQ"), "Qo");
        assert_eq!(icu_to_moment("QQQQQ"), "");
        assert_eq!(icu_to_moment("EEEEEE"), "dd");
        // A width with no entry of its own falls apart into the longest
        // entries that do exist: `yyy` is `yy` followed by `y`.
        assert_eq!(icu_to_moment("yyy"), "YY");
        // And a fifth `S` past `SSSS` is picked up by the width-one entry.
        assert_eq!(icu_to_moment("SSSSS"), "SSSSS");
    }

    #[test]
    fn ok_quoted_literal_text() {
        assert_eq!(
            icu_to_moment("'literal text' yyyy"),
            r"\l\i\t\e\r\a\l\ \t\e\x\t YYYY",
        );
        assert_eq!(icu_to_moment("d 'of' MMMM"), r"D \o\f MMMM");
        // Quoted content is never scanned for tokens.
        assert_eq!(icu_to_moment("'yyyy'"), r"\y\y\y\y");
        // The same run twice resolves to the same replacement twice.
        assert_eq!(icu_to_moment("'x' h 'x'"), r"\x h \x");
    }

    #[test]
    fn ok_doubled_quote() {
        // A doubled quote is one literal quote character, inside a quoted
        // run or out.
        assert_eq!(icu_to_moment("''"), r"\'");
        assert_eq!(icu_to_moment("'o''clock'"), r"\o\'\c\l\o\c\k");
        assert_eq!(icu_to_moment("h 'o''clock' a"), r"h \o\'\c\l\o\c\k a");
    }

    #[test]
    fn ok_unterminated_quote() {
        // A dangling quote starts no literal run. It is copied through and
        // the text after it is scanned for tokens as usual: here `a` and
        // `c` are reserved while `b` is not.
        assert_eq!(icu_to_moment("'abc"), "'abE");
        assert_eq!(icu_to_moment("yyyy 'p"), "YYYY 'p");
    }

    #[test]
    fn ok_era_and_year_tokens() {
        assert_eq!(icu_to_moment("G"), "");
        assert_eq!(icu_to_moment("Y"), "Y");
        assert_eq!(icu_to_moment("y"), "");
        assert_eq!(icu_to_moment("yy"), "YY");
        assert_eq!(icu_to_moment("yyyy"), "YYYY");
        assert_eq!(icu_to_moment("u"), "");
        assert_eq!(icu_to_moment("U"), "");
        assert_eq!(icu_to_moment("r"), "");
    }

    #[test]
    fn ok_quarter_tokens() {
        assert_eq!(icu_to_moment("Q"), "Q");
        assert_eq!(icu_to_moment("QQ"), "");
        assert_eq!(icu_to_moment("QQQ"), "");
        assert_eq!(icu_to_moment("QQQQ"), "Qo");
        assert_eq!(icu_to_moment("QQQQQ"), "");
        assert_eq!(icu_to_moment("q"), "");
        assert_eq!(icu_to_moment("qq"), "");
        assert_eq!(icu_to_moment("qqq"), "");
        assert_eq!(icu_to_moment("qqqq"), "");
        assert_eq!(icu_to_moment("qqqqq"), "");
    }

    #[test]
    fn ok_month_tokens() {
        assert_eq!(icu_to_moment("M"), "M");
        assert_eq!(icu_to_moment("MM"), "MM");
        assert_eq!(icu_to_moment("MMM"), "MMM");
        assert_eq!(icu_to_moment("MMMM"), "MMMM");
        assert_eq!(icu_to_moment("MMMMM"), "");
        assert_eq!(icu_to_moment("L"), "");
        assert_eq!(icu_to_moment("LL"), "");
        assert_eq!(icu_to_moment("LLL"), "");
        assert_eq!(icu_to_moment("LLLL"), "");
        assert_eq!(icu_to_moment("LLLLL"), "");
    }

    #[test]
    fn ok_week_and_day_tokens() {
        assert_eq!(icu_to_moment("w"), "w");
        assert_eq!(icu_to_moment("ww"), "ww");
        assert_eq!(icu_to_moment("W"), "");
        assert_eq!(icu_to_moment("d"), "D");
        assert_eq!(icu_to_moment("dd"), "DD");
        assert_eq!(icu_to_moment("D"), "DDD");
        assert_eq!(icu_to_moment("F"), "Do");
        assert_eq!(icu_to_moment("g"), "");
    }

    #[test]
    fn ok_weekday_tokens() {
        assert_eq!(icu_to_moment("E"), "ddd");
        assert_eq!(icu_to_moment("EE"), "ddd");
        assert_eq!(icu_to_moment("EEE"), "ddd");
        assert_eq!(icu_to_moment("EEEE"), "dddd");
        assert_eq!(icu_to_moment("EEEEE"), "");
        assert_eq!(icu_to_moment("EEEEEE"), "dd");
        assert_eq!(icu_to_moment("e"), "E");
        assert_eq!(icu_to_moment("ee"), "");
        assert_eq!(icu_to_moment("eee"), "ddd");
        assert_eq!(icu_to_moment("eeee"), "dddd");
        assert_eq!(icu_to_moment("eeeee"), "");
        assert_eq!(icu_to_moment("eeeeee"), "dd");
        assert_eq!(icu_to_moment("c"), "E");
        assert_eq!(icu_to_moment("cc"), "E");
        assert_eq!(icu_to_moment("ccc"), "ddd");
        assert_eq!(icu_to_moment("cccc"), "dddd");
        assert_eq!(icu_to_moment("ccccc"), "");
        assert_eq!(icu_to_moment("cccccc"), "dd");
    }

    #[test]
    fn ok_clock_tokens() {
        assert_eq!(icu_to_moment("a"), "a");
        assert_eq!(icu_to_moment("h"), "h");
        assert_eq!(icu_to_moment("hh"), "hh");
        assert_eq!(icu_to_moment("H"), "H");
        assert_eq!(icu_to_moment("HH"), "HH");
        assert_eq!(icu_to_moment("k"), "k");
        assert_eq!(icu_to_moment("kk"), "kk");
        assert_eq!(icu_to_moment("K"), "");
        assert_eq!(icu_to_moment("KK"), "");
        assert_eq!(icu_to_moment("m"), "m");
        assert_eq!(icu_to_moment("mm"), "mm");
        assert_eq!(icu_to_moment("s"), "s");
        assert_eq!(icu_to_moment("ss"), "ss");
        assert_eq!(icu_to_moment("S"), "S");
        assert_eq!(icu_to_moment("SS"), "SS");
        assert_eq!(icu_to_moment("SSS"), "SSS");
        assert_eq!(icu_to_moment("SSSS"), "SSSS");
        assert_eq!(icu_to_moment("A"), "");
    }

    #[test]
    fn ok_zone_tokens() {
        assert_eq!(icu_to_moment("z"), "z");
        assert_eq!(icu_to_moment("zz"), "zz");
        assert_eq!(icu_to_moment("zzz"), "");
        assert_eq!(icu_to_moment("zzzz"), "");
        assert_eq!(icu_to_moment("Z"), "Z");
        assert_eq!(icu_to_moment("ZZ"), "ZZ");
        assert_eq!(icu_to_moment("ZZZ"), "");
        assert_eq!(icu_to_moment("ZZZZ"), "");
        assert_eq!(icu_to_moment("ZZZZZ"), "");
        assert_eq!(icu_to_moment("O"), "");
        assert_eq!(icu_to_moment("OOOO"), "");
        assert_eq!(icu_to_moment("v"), "");
        assert_eq!(icu_to_moment("vvvv"), "");
        assert_eq!(icu_to_moment("V"), "");
        assert_eq!(icu_to_moment("VV"), "");
        assert_eq!(icu_to_moment("VVV"), "");
        assert_eq!(icu_to_moment("VVVV"), "");
        assert_eq!(icu_to_moment("X"), "");
        assert_eq!(icu_to_moment("XX"), "");
        assert_eq!(icu_to_moment("XXX"), "");
        assert_eq!(icu_to_moment("XXXX"), "");
        assert_eq!(icu_to_moment("XXXXX"), "");
        assert_eq!(icu_to_moment("x"), "");
        assert_eq!(icu_to_moment("xx"), "");
        assert_eq!(icu_to_moment("xxx"), "");
        assert_eq!(icu_to_moment("xxxx"), "");
        assert_eq!(icu_to_moment("xxxxx"), "");
    }

    quickcheck::quickcheck! {
        // A pattern with no reserved characters and no quotes is its own
        // translation.
        fn prop_literal_passthrough(pattern: String) -> bool {
            let literal: String = pattern
                .chars()
                .filter(|&ch| ch != '\'' && !is_reserved(ch))
                .collect();
            icu_to_moment(&literal) == literal
        }
    }

    fn is_reserved(ch: char) -> bool {
        ICU_TO_MOMENT.iter().any(|&(token, _)| token.contains(ch))
    }
}
