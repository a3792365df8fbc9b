use loctag_core::{
    admits_element, admits_file, location_id, relative_path, ElementOccurrence, SourcePosition,
    TagConfig, UNKNOWN_LOCATION,
};

/// One element tagged during a scan: its tag name and the identifier
/// that was (or would be) injected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedElement {
    pub tag_name: String,
    pub id: String,
}

/// Line-oriented source scanner for the lexical tagger.
///
/// Holds the per-file context (relative path, attribute name) and
/// accumulates the tagging decisions made while transforming.
///
/// Follows the same shape as a tokenizing scanner: `Vec<char>` lines
/// for index-based navigation, position bookkeeping in characters, and
/// candidate classification against the preceding text only — no
/// lookahead past the current line.
pub struct Scanner<'a> {
    config: &'a TagConfig,
    relative_path: String,
    attribute: String,
    marker: String,
    tagged: Vec<TaggedElement>,
}

/// Transform `source`, injecting a location attribute into every
/// eligible opening tag. Returns the input unchanged when the file is
/// not admitted.
pub fn tag_source(source: &str, config: &TagConfig) -> String {
    Scanner::new(config).transform(source)
}

/// Dry run: the elements [`tag_source`] would tag, without the output.
pub fn scan_source(source: &str, config: &TagConfig) -> Vec<TaggedElement> {
    let mut scanner = Scanner::new(config);
    scanner.transform(source);
    scanner.into_tagged()
}

impl<'a> Scanner<'a> {
    /// Create a scanner for one file's transform.
    pub fn new(config: &'a TagConfig) -> Self {
        let attribute = config.attribute_name();
        let marker = format!("{attribute}=");
        Self {
            config,
            relative_path: relative_path(&config.filename, config.project_root.as_deref()),
            attribute,
            marker,
            tagged: Vec::new(),
        }
    }

    /// Transform the whole source buffer.
    ///
    /// Lines are split on `\n` and joined back with `\n`; a trailing
    /// `\r` rides along as line content, so CRLF files pass through
    /// intact.
    pub fn transform(&mut self, source: &str) -> String {
        if !admits_file(self.config) {
            return source.to_string();
        }
        if self.config.debug && self.relative_path == UNKNOWN_LOCATION {
            tracing::warn!(
                filename = %self.config.filename,
                "could not resolve file path; using sentinel"
            );
        }

        let lines: Vec<String> = source
            .split('\n')
            .enumerate()
            .map(|(index, line)| self.tag_line(line, index + 1))
            .collect();
        lines.join("\n")
    }

    /// The tagging decisions accumulated so far.
    pub fn tagged(&self) -> &[TaggedElement] {
        &self.tagged
    }

    /// Consume the scanner, returning its tagging decisions.
    pub fn into_tagged(self) -> Vec<TaggedElement> {
        self.tagged
    }

    /// Rewrite one line, tagging every accepted candidate on it.
    fn tag_line(&mut self, line: &str, line_number: usize) -> String {
        // A line already carrying the attribute was tagged by a
        // previous run; leave it untouched.
        if line.contains(&self.marker) {
            return line.to_string();
        }

        let chars: Vec<char> = line.chars().collect();
        let mut out = String::with_capacity(line.len() + 32);
        let mut pos = 0;

        while pos < chars.len() {
            if chars[pos] != '<' {
                out.push(chars[pos]);
                pos += 1;
                continue;
            }
            let Some(name_end) = candidate_name_end(&chars, pos) else {
                out.push('<');
                pos += 1;
                continue;
            };
            let tag_name: String = chars[pos + 1..name_end].iter().collect();
            if !self.accepts(&chars, pos, name_end, &tag_name, line_number) {
                out.push('<');
                pos += 1;
                continue;
            }

            // Column is the 1-based character offset of `<`.
            let id = location_id(&self.relative_path, line_number, pos + 1);
            out.push('<');
            out.push_str(&tag_name);
            out.push(' ');
            out.push_str(&self.attribute);
            out.push_str("=\"");
            out.push_str(&id);
            out.push('"');
            if self.config.debug {
                tracing::debug!(tag = %tag_name, %id, "tagged element");
            }
            self.tagged.push(TaggedElement { tag_name, id });
            pos = name_end;
        }

        out
    }

    /// Classify a candidate: lexical context first, then the shared
    /// element-level policy.
    fn accepts(
        &self,
        chars: &[char],
        open: usize,
        name_end: usize,
        tag_name: &str,
        line_number: usize,
    ) -> bool {
        let prefix = &chars[..open];
        if inside_string(prefix) || inside_comment(prefix) || in_type_position(prefix) {
            return false;
        }

        let occurrence = ElementOccurrence {
            tag_name: tag_name.to_string(),
            attribute_names: Vec::new(),
            position: SourcePosition::new(line_number, open + 1),
            self_closing: is_self_closing(chars, name_end),
        };
        admits_element(self.config, &occurrence)
    }
}

/// Find the end of a candidate tag name: `<` followed by a
/// lowercase-led identifier, followed by whitespace, `>`, or `/`.
/// Returns the index one past the last name character.
///
/// A name that runs to the end of the line (a multi-line opening tag)
/// is not a candidate.
fn candidate_name_end(chars: &[char], open: usize) -> Option<usize> {
    let first = *chars.get(open + 1)?;
    if !first.is_ascii_lowercase() {
        return None;
    }
    let mut end = open + 2;
    while end < chars.len()
        && (chars[end].is_ascii_lowercase() || chars[end].is_ascii_digit() || chars[end] == '-')
    {
        end += 1;
    }
    match chars.get(end) {
        Some(&c) if c.is_whitespace() || c == '>' || c == '/' => Some(end),
        _ => None,
    }
}

/// Whether the tag body closes with `/>` on this line. Informational;
/// a tag left open at end of line reports `false`.
fn is_self_closing(chars: &[char], name_end: usize) -> bool {
    let mut i = name_end;
    while i < chars.len() && chars[i] != '>' {
        i += 1;
    }
    i < chars.len() && chars[i - 1] == '/'
}

/// Odd parity of any unescaped quote style means the candidate sits
/// inside a string or template literal.
fn inside_string(prefix: &[char]) -> bool {
    unescaped_count(prefix, '"') % 2 != 0
        || unescaped_count(prefix, '\'') % 2 != 0
        || unescaped_count(prefix, '`') % 2 != 0
}

fn unescaped_count(prefix: &[char], quote: char) -> usize {
    let mut count = 0;
    let mut escaped = false;
    for &c in prefix {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            count += 1;
        }
    }
    count
}

/// A `//` before the candidate, or a `/*` opener with no later `*/`,
/// puts the candidate in comment context.
fn inside_comment(prefix: &[char]) -> bool {
    if prefix.windows(2).any(|w| w[0] == '/' && w[1] == '/') {
        return true;
    }
    match prefix.windows(2).rposition(|w| w[0] == '/' && w[1] == '*') {
        Some(open) => !prefix[open + 2..]
            .windows(2)
            .any(|w| w[0] == '*' && w[1] == '/'),
        None => false,
    }
}

/// A trailing `:`, `&`, `extends`, or `typeof` means the `<` opens a
/// type expression, not markup.
fn in_type_position(prefix: &[char]) -> bool {
    let mut end = prefix.len();
    while end > 0 && prefix[end - 1].is_whitespace() {
        end -= 1;
    }
    let trimmed = &prefix[..end];
    if matches!(trimmed.last(), Some(&':') | Some(&'&')) {
        return true;
    }
    ends_with_word(trimmed, "extends") || ends_with_word(trimmed, "typeof")
}

fn ends_with_word(chars: &[char], word: &str) -> bool {
    let len = word.chars().count();
    if chars.len() < len {
        return false;
    }
    chars[chars.len() - len..].iter().copied().eq(word.chars())
}
