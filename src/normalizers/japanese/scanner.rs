use super::dictionary::UserDictionary;
use super::reading::MAX_VALUE;
use super::rules::{LargeUnit, GROUP_MAX};

/// Map full-width digits (０-９) to ASCII; every other char is unchanged.
pub fn normalize_width(ch: char) -> char {
    match ch {
        '０'..='９' => char::from_digit(ch as u32 - '０' as u32, 10).unwrap_or(ch),
        _ => ch,
    }
}

/// An Arabic-numeral quantity found in the input, possibly chained across
/// several units (`1億2000万`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumeralSpan {
    /// The span exactly as written in the input.
    pub raw: String,
    pub value: u64,
    /// Unit closing the span, if it ends in one.
    pub unit: Option<LargeUnit>,
    /// Byte offsets into the input.
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// Text copied to the output untouched.
    Literal(&'a str),
    /// A dictionary hit, read verbatim.
    Override {
        raw: &'a str,
        start: usize,
        end: usize,
        reading: &'a str,
    },
    Numeral(NumeralSpan),
}

/// Kanji that take part in writing numbers. A digit run touching one of
/// these is mixed notation (or a magnitude beyond 兆) and is left alone.
fn is_kanji_numeral(ch: char) -> bool {
    matches!(
        ch,
        '〇' | '一'
            | '二'
            | '三'
            | '四'
            | '五'
            | '六'
            | '七'
            | '八'
            | '九'
            | '十'
            | '百'
            | '千'
            | '万'
            | '億'
            | '兆'
            | '京'
            | '垓'
    )
}

/// Separators that join digit runs into decimals, phone numbers, times and dates.
fn is_connector(ch: char) -> bool {
    matches!(
        ch,
        '.' | ',' | '-' | ':' | '/' | '．' | '，' | '－' | '：' | '／' | '‐' | '−'
    )
}

/// Chars that make a digit run part of a word or identifier.
fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || ch == '_'
        || matches!(ch, 'Ａ'..='Ｚ' | 'ａ'..='ｚ' | '＿')
}

/// The input as width-normalized chars with their byte offsets.
struct Cursor<'a> {
    text: &'a str,
    chars: Vec<(usize, char)>,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        let chars = text
            .char_indices()
            .map(|(idx, ch)| (idx, normalize_width(ch)))
            .collect();
        Self { text, chars }
    }

    fn len(&self) -> usize {
        self.chars.len()
    }

    fn get(&self, i: usize) -> Option<char> {
        self.chars.get(i).map(|&(_, ch)| ch)
    }

    fn before(&self, i: usize) -> Option<char> {
        i.checked_sub(1).and_then(|prev| self.get(prev))
    }

    fn digit(&self, i: usize) -> Option<u8> {
        self.get(i)
            .and_then(|ch| ch.to_digit(10))
            .map(|d| d as u8)
    }

    fn is_digit(&self, i: usize) -> bool {
        self.digit(i).is_some()
    }

    /// Byte offset of char `i`; the text length past the end.
    fn byte(&self, i: usize) -> usize {
        self.chars.get(i).map_or(self.text.len(), |&(idx, _)| idx)
    }

    fn slice(&self, from: usize, to: usize) -> &'a str {
        &self.text[self.byte(from)..self.byte(to)]
    }

    fn chars_from(&self, i: usize) -> impl Iterator<Item = char> + '_ {
        self.chars[i..].iter().map(|&(_, ch)| ch)
    }
}

/// One digit run of a chain and the unit that closes it.
#[derive(Debug, Clone, Copy)]
struct Link {
    value: Option<u64>,
    width: usize,
    leading_zero: bool,
    unit: Option<LargeUnit>,
}

enum Scan {
    Span(NumeralSpan, usize),
    PassThrough(usize),
}

/// Split `text` into literal text, dictionary hits and numeral spans.
///
/// Adjacent literal text is merged, so literals and rewritten spans alternate.
pub fn tokenize<'a>(
    text: &'a str,
    dictionary: &'a UserDictionary,
    read_standalone: bool,
) -> Vec<Token<'a>> {
    let cursor = Cursor::new(text);
    let mut tokens = Vec::new();
    let mut literal_from = 0usize;
    let mut i = 0usize;

    while i < cursor.len() {
        let mid_run = i > 0 && cursor.is_digit(i - 1);
        if !mid_run {
            if let Some((len, reading)) = dictionary_hit(&cursor, dictionary, i) {
                let (start, end) = (cursor.byte(i), cursor.byte(i + len));
                push_literal(&mut tokens, text, literal_from, start);
                log::debug!("Dictionary override {:?} -> {reading}", &text[start..end]);
                tokens.push(Token::Override {
                    raw: &text[start..end],
                    start,
                    end,
                    reading,
                });
                i += len;
                literal_from = end;
                continue;
            }

            if cursor.is_digit(i) {
                match scan_numeral(&cursor, dictionary, i, read_standalone) {
                    Scan::Span(span, next) => {
                        push_literal(&mut tokens, text, literal_from, span.start);
                        literal_from = span.end;
                        tokens.push(Token::Numeral(span));
                        i = next;
                    }
                    Scan::PassThrough(next) => {
                        log::debug!("Passing through {:?}", cursor.slice(i, next));
                        i = next;
                    }
                }
                continue;
            }
        }
        i += 1;
    }

    push_literal(&mut tokens, text, literal_from, text.len());
    tokens
}

/// Longest dictionary entry starting at `i` that does not end inside a link:
/// an entry ending on a digit must not be followed by a digit, 千 or a unit.
fn dictionary_hit<'d>(
    cursor: &Cursor<'_>,
    dictionary: &'d UserDictionary,
    i: usize,
) -> Option<(usize, &'d str)> {
    dictionary.longest_match(cursor.chars_from(i), |len| {
        let last = i + len - 1;
        let continues = cursor.get(last + 1).is_some_and(|next| {
            next.is_ascii_digit() || next == '千' || LargeUnit::from_char(next).is_some()
        });
        !(cursor.is_digit(last) && continues)
    })
}

fn push_literal<'a>(tokens: &mut Vec<Token<'a>>, text: &'a str, from: usize, to: usize) {
    if to > from {
        tokens.push(Token::Literal(&text[from..to]));
    }
}

/// Read a chain of digit runs and units starting at `start`.
///
/// The chain stops before a later link that has a dictionary entry, so the
/// entry can be applied to that link on its own.
fn scan_numeral(
    cursor: &Cursor<'_>,
    dictionary: &UserDictionary,
    start: usize,
    read_standalone: bool,
) -> Scan {
    let mut links: Vec<Link> = Vec::new();
    let mut i = start;

    loop {
        if !links.is_empty() && dictionary_hit(cursor, dictionary, i).is_some() {
            break;
        }
        let run_start = i;
        let mut value = Some(0u64);
        while let Some(d) = cursor.digit(i) {
            value = value
                .and_then(|v| v.checked_mul(10))
                .and_then(|v| v.checked_add(u64::from(d)));
            i += 1;
        }
        if i == run_start {
            break;
        }

        let width = i - run_start;
        let leading_zero = width > 1 && cursor.digit(run_start) == Some(0);

        // 3千万: a lone digit times 千, only directly before a large unit.
        if width == 1
            && cursor.get(i) == Some('千')
            && cursor.get(i + 1).and_then(LargeUnit::from_char).is_some()
        {
            value = value.map(|v| v * 1000);
            i += 1;
        }

        let unit = cursor.get(i).and_then(LargeUnit::from_char);
        links.push(Link {
            value,
            width,
            leading_zero,
            unit,
        });
        match unit {
            Some(_) => i += 1,
            None => break,
        }
    }

    let end = i;
    let pass = Scan::PassThrough(end);

    if !left_boundary_ok(cursor, start) || !right_boundary_ok(cursor, end, &links) {
        return pass;
    }

    let has_unit = links.iter().any(|link| link.unit.is_some());
    if !has_unit && !read_standalone {
        return pass;
    }

    let Some(value) = chain_value(&links) else {
        return pass;
    };
    if value == 0 && (has_unit || links[0].width != 1) {
        return pass;
    }

    Scan::Span(
        NumeralSpan {
            raw: cursor.slice(start, end).to_string(),
            value,
            unit: links.last().and_then(|link| link.unit),
            start: cursor.byte(start),
            end: cursor.byte(end),
        },
        end,
    )
}

fn left_boundary_ok(cursor: &Cursor<'_>, start: usize) -> bool {
    match cursor.before(start) {
        None => true,
        Some(prev) if is_word_char(prev) || is_kanji_numeral(prev) => false,
        Some(prev) if is_connector(prev) => !(start >= 2 && cursor.is_digit(start - 2)),
        Some(_) => true,
    }
}

fn right_boundary_ok(cursor: &Cursor<'_>, end: usize, links: &[Link]) -> bool {
    let ends_in_unit = links.last().is_some_and(|link| link.unit.is_some());
    match cursor.get(end) {
        None => true,
        Some(next) if is_kanji_numeral(next) => false,
        Some(_) if ends_in_unit => true,
        Some(next) if is_word_char(next) => false,
        Some(next) if is_connector(next) => !cursor.is_digit(end + 1),
        Some(_) => true,
    }
}

/// Total value of a well-formed chain, `None` if the chain is ambiguous.
fn chain_value(links: &[Link]) -> Option<u64> {
    let first = links.first()?;
    if first.leading_zero {
        return None;
    }

    let mut total = 0u64;
    let mut previous: Option<LargeUnit> = None;
    for (idx, link) in links.iter().enumerate() {
        let value = link.value?;
        if idx > 0 && (link.width > 4 || value > u64::from(GROUP_MAX)) {
            return None;
        }
        if let (Some(prev), Some(unit)) = (previous, link.unit) {
            if unit >= prev {
                return None;
            }
        }
        let scaled = value.checked_mul(link.unit.map_or(1, LargeUnit::multiplier))?;
        total = total.checked_add(scaled)?;
        previous = link.unit;
    }

    (total <= MAX_VALUE).then_some(total)
}

#[cfg(test)]
mod tests {
    use super::{normalize_width, tokenize, NumeralSpan, Token};
    use crate::normalizers::japanese::dictionary::UserDictionary;
    use crate::normalizers::japanese::rules::LargeUnit;

    fn spans(text: &str) -> Vec<NumeralSpan> {
        let dictionary = UserDictionary::new();
        tokenize(text, &dictionary, true)
            .into_iter()
            .filter_map(|token| match token {
                Token::Numeral(span) => Some(span),
                _ => None,
            })
            .collect()
    }

    fn values(text: &str) -> Vec<u64> {
        spans(text).iter().map(|span| span.value).collect()
    }

    #[test]
    fn maps_full_width_digits() {
        assert_eq!(normalize_width('５'), '5');
        assert_eq!(normalize_width('０'), '0');
        assert_eq!(normalize_width('万'), '万');
    }

    #[test]
    fn extracts_unit_spans_with_offsets() {
        let text = "予算は1000万円です";
        let found = spans(text);
        assert_eq!(found.len(), 1);
        let span = &found[0];
        assert_eq!(span.raw, "1000万");
        assert_eq!(span.value, 10_000_000);
        assert_eq!(span.unit, Some(LargeUnit::Man));
        assert_eq!(&text[span.start..span.end], "1000万");
    }

    #[test]
    fn chains_units_into_one_quantity() {
        assert_eq!(values("1億2000万人"), vec![120_000_000]);
        assert_eq!(values("2兆3億"), vec![2_000_300_000_000]);
        assert_eq!(values("1万5000円"), vec![15_000]);
        assert_eq!(values("12345万"), vec![123_450_000]);
    }

    #[test]
    fn reads_full_width_spans_and_keeps_raw_text() {
        let found = spans("１０００万");
        assert_eq!(found[0].value, 10_000_000);
        assert_eq!(found[0].raw, "１０００万");
    }

    #[test]
    fn accepts_mixed_kanji_thousands() {
        assert_eq!(values("3千万"), vec![30_000_000]);
        assert_eq!(values("1千億"), vec![100_000_000_000]);
        assert!(values("千万").is_empty());
        assert!(values("3千円").is_empty());
    }

    #[test]
    fn rejects_malformed_chains() {
        assert!(values("1万2億").is_empty());
        assert!(values("1億12345万").is_empty());
        assert!(values("0500万").is_empty());
        assert!(values("0万").is_empty());
        assert!(values("1万3千").is_empty());
    }

    #[test]
    fn rejects_magnitudes_beyond_chou() {
        assert!(values("1京").is_empty());
        assert!(values("1兆京").is_empty());
        assert!(values("10000兆").is_empty());
        assert!(values("12345678901234567").is_empty());
        assert_eq!(values("9999兆"), vec![9_999_000_000_000_000]);
    }

    #[test]
    fn leaves_identifiers_and_joined_runs_alone() {
        assert!(values("ID A100").is_empty());
        assert!(values("100km").is_empty());
        assert!(values("03-1234-5678").is_empty());
        assert!(values("3.14").is_empty());
        assert!(values("1.5億").is_empty());
        assert!(values("1,000").is_empty());
        assert!(values("12:30").is_empty());
        assert!(values("2024/01/01").is_empty());
    }

    #[test]
    fn bare_runs_are_read_next_to_counters() {
        assert_eq!(values("1000"), vec![1000]);
        assert_eq!(values("合計 42 件"), vec![42]);
        assert_eq!(values("「7」。"), vec![7]);
        assert_eq!(values("1000円"), vec![1000]);
        assert_eq!(values("5000円と30人"), vec![5000, 30]);
        assert_eq!(values("第3"), vec![3]);
        assert!(values("007").is_empty());
    }

    #[test]
    fn bare_runs_can_be_switched_off() {
        let dictionary = UserDictionary::new();
        let tokens = tokenize("42 と 1万", &dictionary, false);
        let found: Vec<_> = tokens
            .iter()
            .filter_map(|token| match token {
                Token::Numeral(span) => Some(span.value),
                _ => None,
            })
            .collect();
        assert_eq!(found, vec![10_000]);
    }

    #[test]
    fn standalone_zero_only() {
        assert_eq!(values("0"), vec![0]);
        assert!(values("00").is_empty());
    }

    #[test]
    fn dictionary_is_tried_before_rules() {
        let dictionary = UserDictionary::from_entries([("1000万", "せんまん")]);
        let tokens = tokenize("約1000万人", &dictionary, true);
        assert_eq!(
            tokens,
            vec![
                Token::Literal("約"),
                Token::Override {
                    raw: "1000万",
                    start: "約".len(),
                    end: "約1000万".len(),
                    reading: "せんまん",
                },
                Token::Literal("人"),
            ]
        );
    }

    #[test]
    fn dictionary_keys_must_cover_whole_digit_runs() {
        let dictionary = UserDictionary::from_entries([("100", "ひゃく"), ("000万", "せんまん")]);
        let tokens = tokenize("1000万", &dictionary, true);
        assert_eq!(tokens.len(), 1);
        assert!(matches!(&tokens[0], Token::Numeral(span) if span.value == 10_000_000));

        let tokens = tokenize("100万", &dictionary, true);
        assert_eq!(tokens.len(), 1);
        assert!(matches!(&tokens[0], Token::Numeral(span) if span.value == 1_000_000));

        let tokens = tokenize("100円", &dictionary, true);
        assert!(matches!(&tokens[0], Token::Override { raw: "100", .. }));
    }

    #[test]
    fn dictionary_entry_splits_a_chain_at_its_link() {
        let dictionary = UserDictionary::from_entries([("2000万", "ふたせんまん")]);
        let tokens = tokenize("1億2000万人", &dictionary, true);
        assert_eq!(tokens.len(), 3);
        assert!(matches!(&tokens[0], Token::Numeral(span) if span.raw == "1億"));
        assert!(matches!(
            &tokens[1],
            Token::Override { raw: "2000万", reading: "ふたせんまん", .. }
        ));
        assert_eq!(tokens[2], Token::Literal("人"));
    }

    #[test]
    fn literals_cover_the_whole_input() {
        let dictionary = UserDictionary::new();
        let text = "A100と1億と03-1234";
        let rebuilt: String = tokenize(text, &dictionary, true)
            .iter()
            .map(|token| match token {
                Token::Literal(s) => s.to_string(),
                Token::Override { raw, .. } => raw.to_string(),
                Token::Numeral(span) => span.raw.clone(),
            })
            .collect();
        assert_eq!(rebuilt, text);
    }
}
