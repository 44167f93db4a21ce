use tablewright_core::{
    schema::{PartitionDescriptor, PartitionScheme, PartitionSlot, SlotOptions, SubpartitionSlot},
    Error, Result,
};

/// The catch-all boundary marker.
const CATCH_ALL: &str = "MAXVALUE";

/// Extracts the partitioning state from a table's rendered definition
/// text.
///
/// An absent or malformed partition clause resolves to the empty
/// descriptor: "not partitioned" is the common, non-exceptional case.
pub fn extract_partitions(definition: &str) -> PartitionDescriptor {
    try_extract_partitions(definition).unwrap_or_default()
}

/// The fallible extraction. [`extract_partitions`] resolves errors to
/// the empty descriptor; this entry point surfaces them.
pub fn try_extract_partitions(definition: &str) -> Result<PartitionDescriptor> {
    let Some(clause) = locate_clause(definition) else {
        return Ok(PartitionDescriptor::default());
    };

    let mut s = Scanner::new(clause);

    if !(s.eat_keyword("PARTITION") && s.eat_keyword("BY")) {
        return Err(Error::parse("expected PARTITION BY"));
    }
    let (method, expression) = parse_method(&mut s)?;

    let mut declared_count = None;
    let mut subscheme: Option<PartitionScheme> = None;
    let mut sub_count = None;
    let mut slots = Vec::new();

    loop {
        if s.is_done() {
            break;
        }

        if s.eat_keyword("PARTITIONS") {
            declared_count =
                Some(s.take_number().ok_or_else(|| Error::parse("expected partition count"))?);
        } else if s.eat_keyword("SUBPARTITIONS") {
            sub_count = Some(
                s.take_number()
                    .ok_or_else(|| Error::parse("expected subpartition count"))?,
            );
        } else if s.eat_keyword("SUBPARTITION") {
            if !s.eat_keyword("BY") {
                return Err(Error::parse("expected BY after SUBPARTITION"));
            }
            let (sub_method, sub_expression) = parse_method(&mut s)?;
            subscheme = Some(PartitionScheme {
                method: sub_method,
                expression: sub_expression,
                count: 0,
            });
        } else if s.peek() == Some('(') {
            let inner = s.take_parenthesized()?;
            slots = parse_slots(inner)?;
        } else {
            return Err(Error::parse(format!(
                "unexpected token near `{}`",
                s.rest_snippet()
            )));
        }
    }

    // The explicit declared count wins; otherwise count the enumerated
    // slots. Undeclared positions are filled with synthesized defaults.
    let count = declared_count.unwrap_or(slots.len());
    let mut partitions = Vec::with_capacity(count);
    for i in 0..count {
        let slot = slots
            .get(i)
            .cloned()
            .unwrap_or_else(|| PartitionSlot::default_at(i));
        partitions.push(slot);
    }

    let subscheme = subscheme.map(|mut scheme| {
        scheme.count = sub_count.unwrap_or_else(|| {
            slots
                .first()
                .map(|slot| slot.subpartitions.len())
                .unwrap_or(0)
        });
        scheme
    });

    if let Some(sub) = &subscheme {
        if sub.count > 1 {
            for slot in &mut partitions {
                while slot.subpartitions.len() < sub.count {
                    let filler = SubpartitionSlot::default_at(&slot.name, slot.subpartitions.len());
                    slot.subpartitions.push(filler);
                }
                slot.subpartitions.truncate(sub.count);
            }
        }
    }

    Ok(PartitionDescriptor {
        scheme: PartitionScheme {
            method,
            expression,
            count,
        },
        subscheme,
        partitions,
    })
}

/// Finds the partition clause in the definition text, stripping the
/// version-comment wrapper the store's definition renderer emits.
fn locate_clause(definition: &str) -> Option<&str> {
    let upper = definition.to_ascii_uppercase();
    let mut from = 0;
    while let Some(rel) = upper[from..].find("PARTITION BY") {
        let idx = from + rel;
        let boundary = idx == 0 || {
            let prev = upper.as_bytes()[idx - 1];
            !prev.is_ascii_alphanumeric() && prev != b'_'
        };
        if boundary {
            let clause = definition[idx..].trim_end();
            let clause = clause.strip_suffix("*/").unwrap_or(clause);
            return Some(clause.trim_end());
        }
        from = idx + 1;
    }
    None
}

/// Parses a method token (everything up to the clause's first `(`) and
/// its parenthesized expression.
fn parse_method(s: &mut Scanner<'_>) -> Result<(String, String)> {
    let mut words = Vec::new();
    loop {
        if s.peek() == Some('(') {
            break;
        }
        match s.take_ident() {
            Some(word) => words.push(word.to_ascii_uppercase()),
            None => return Err(Error::parse("expected partition method")),
        }
        if words.len() > 3 {
            return Err(Error::parse("partition method token too long"));
        }
    }
    if words.is_empty() {
        return Err(Error::parse("expected partition method"));
    }
    let expression = s.take_parenthesized()?.to_string();
    Ok((words.join(" "), expression))
}

fn parse_slots(src: &str) -> Result<Vec<PartitionSlot>> {
    let mut s = Scanner::new(src);
    let mut slots: Vec<PartitionSlot> = Vec::new();

    loop {
        if s.is_done() {
            break;
        }
        if !slots.is_empty() && !s.eat_char(',') {
            return Err(Error::parse("expected `,` between partition slots"));
        }
        if !s.eat_keyword("PARTITION") {
            return Err(Error::parse("expected PARTITION"));
        }
        let name = s
            .take_ident()
            .ok_or_else(|| Error::parse("expected partition name"))?;
        let mut slot = PartitionSlot {
            name,
            ..Default::default()
        };

        if s.eat_keyword("VALUES") {
            let (value_type, value) = parse_boundary(&mut s)?;
            slot.value_type = value_type;
            slot.value = value;
        }

        slot.options = parse_options(&mut s)?;

        if s.peek() == Some('(') {
            let inner = s.take_parenthesized()?;
            slot.subpartitions = parse_subslots(inner)?;
        }

        slots.push(slot);
    }

    Ok(slots)
}

/// Parses the boundary after `VALUES`: the value-type token up to the
/// boundary expression. A raw boundary that is exactly the catch-all
/// marker appends the literal ` MAXVALUE` suffix to the token and clears
/// the value expression.
fn parse_boundary(s: &mut Scanner<'_>) -> Result<(String, String)> {
    let mut words: Vec<String> = Vec::new();
    loop {
        if s.peek() == Some('(') {
            break;
        }
        let Some(word) = s.take_ident() else {
            return Err(Error::parse("expected boundary after VALUES"));
        };
        let word = word.to_ascii_uppercase();
        if word == CATCH_ALL {
            return Ok((catch_all_type(&words), String::new()));
        }
        words.push(word);
        if words.len() > 3 {
            return Err(Error::parse("boundary token too long"));
        }
    }
    if words.is_empty() {
        return Err(Error::parse("expected boundary token"));
    }
    let value = s.take_parenthesized()?.trim().to_string();
    if value.eq_ignore_ascii_case(CATCH_ALL) {
        return Ok((catch_all_type(&words), String::new()));
    }
    Ok((words.join(" "), value))
}

fn catch_all_type(words: &[String]) -> String {
    if words.is_empty() {
        CATCH_ALL.to_string()
    } else {
        format!("{} {CATCH_ALL}", words.join(" "))
    }
}

fn parse_options(s: &mut Scanner<'_>) -> Result<SlotOptions> {
    let mut options = SlotOptions::default();

    loop {
        match s.peek() {
            None | Some(',') | Some('(') | Some(')') => break,
            _ => {}
        }

        if s.eat_keyword("STORAGE") {
            // `STORAGE ENGINE` — the ENGINE branch picks it up.
            continue;
        }

        if s.eat_keyword("ENGINE") {
            s.eat_char('=');
            options.engine = s
                .take_ident()
                .ok_or_else(|| Error::parse("expected engine name"))?;
        } else if s.eat_keyword("COMMENT") {
            s.eat_char('=');
            options.comment = s
                .take_quoted()
                .ok_or_else(|| Error::parse("expected quoted comment"))?;
        } else if s.eat_keyword("DATA") {
            if !s.eat_keyword("DIRECTORY") {
                return Err(Error::parse("expected DIRECTORY after DATA"));
            }
            s.eat_char('=');
            options.data_directory = s
                .take_quoted()
                .ok_or_else(|| Error::parse("expected quoted directory"))?;
        } else if s.eat_keyword("INDEX") {
            if !s.eat_keyword("DIRECTORY") {
                return Err(Error::parse("expected DIRECTORY after INDEX"));
            }
            s.eat_char('=');
            options.index_directory = s
                .take_quoted()
                .ok_or_else(|| Error::parse("expected quoted directory"))?;
        } else if s.eat_keyword("MIN_ROWS") {
            s.eat_char('=');
            options.min_rows = s
                .take_number()
                .ok_or_else(|| Error::parse("expected row count"))?
                .to_string();
        } else if s.eat_keyword("MAX_ROWS") {
            s.eat_char('=');
            options.max_rows = s
                .take_number()
                .ok_or_else(|| Error::parse("expected row count"))?
                .to_string();
        } else if s.eat_keyword("TABLESPACE") {
            s.eat_char('=');
            options.tablespace = s
                .take_quoted()
                .or_else(|| s.take_ident())
                .ok_or_else(|| Error::parse("expected tablespace name"))?;
        } else if s.eat_keyword("NODEGROUP") {
            s.eat_char('=');
            options.node_group = s
                .take_ident()
                .ok_or_else(|| Error::parse("expected node group"))?;
        } else {
            return Err(Error::parse(format!(
                "unknown slot option near `{}`",
                s.rest_snippet()
            )));
        }
    }

    Ok(options)
}

fn parse_subslots(src: &str) -> Result<Vec<SubpartitionSlot>> {
    let mut s = Scanner::new(src);
    let mut slots: Vec<SubpartitionSlot> = Vec::new();

    loop {
        if s.is_done() {
            break;
        }
        if !slots.is_empty() && !s.eat_char(',') {
            return Err(Error::parse("expected `,` between subpartition slots"));
        }
        if !s.eat_keyword("SUBPARTITION") {
            return Err(Error::parse("expected SUBPARTITION"));
        }
        let name = s
            .take_ident()
            .ok_or_else(|| Error::parse("expected subpartition name"))?;
        let options = parse_options(&mut s)?;
        slots.push(SubpartitionSlot { name, options });
    }

    Ok(slots)
}

/// A small cursor over the clause text. Tokens are consumed with
/// case-insensitive keyword matching; quoting and paren balancing follow
/// the store's definition renderer output.
struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn rest_snippet(&self) -> String {
        self.rest().trim_start().chars().take(24).collect()
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.rest().chars().next() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn is_done(&mut self) -> bool {
        self.skip_ws();
        self.pos >= self.src.len()
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_ws();
        self.rest().chars().next()
    }

    fn eat_char(&mut self, want: char) -> bool {
        if self.peek() == Some(want) {
            self.pos += want.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes `keyword` case-insensitively when it is the next whole
    /// word.
    fn eat_keyword(&mut self, keyword: &str) -> bool {
        self.skip_ws();
        let rest = self.rest();
        let Some(head) = rest.get(..keyword.len()) else {
            return false;
        };
        if !head.eq_ignore_ascii_case(keyword) {
            return false;
        }
        let boundary = rest[keyword.len()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric() && c != '_');
        if boundary {
            self.pos += keyword.len();
        }
        boundary
    }

    /// A bare or backquoted identifier.
    fn take_ident(&mut self) -> Option<String> {
        self.skip_ws();
        let rest = self.rest();
        let first = rest.chars().next()?;

        if first == '`' {
            let inner = &rest[1..];
            let mut out = String::new();
            let mut i = 0;
            while i < inner.len() {
                if inner.as_bytes()[i] == b'`' {
                    if inner.as_bytes().get(i + 1) == Some(&b'`') {
                        out.push('`');
                        i += 2;
                        continue;
                    }
                    self.pos += 1 + i + 1;
                    return Some(out);
                }
                let c = inner[i..].chars().next()?;
                out.push(c);
                i += c.len_utf8();
            }
            return None;
        }

        if !first.is_alphanumeric() && first != '_' && first != '$' {
            return None;
        }
        let end = rest
            .find(|c: char| !c.is_alphanumeric() && c != '_' && c != '$')
            .unwrap_or(rest.len());
        self.pos += end;
        Some(rest[..end].to_string())
    }

    fn take_number(&mut self) -> Option<usize> {
        self.skip_ws();
        let rest = self.rest();
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if end == 0 {
            return None;
        }
        let n = rest[..end].parse().ok()?;
        self.pos += end;
        Some(n)
    }

    /// A single- or double-quoted string, unescaped, with the
    /// surrounding quotes stripped.
    fn take_quoted(&mut self) -> Option<String> {
        self.skip_ws();
        let rest = self.rest();
        let quote = rest.chars().next().filter(|c| *c == '\'' || *c == '"')?;
        let inner = &rest[1..];
        let mut out = String::new();
        let mut i = 0;
        while i < inner.len() {
            let c = inner[i..].chars().next()?;
            if c == '\\' {
                if let Some(escaped) = inner[i + 1..].chars().next() {
                    out.push(escaped);
                    i += 1 + escaped.len_utf8();
                    continue;
                }
            }
            if c == quote {
                if inner[i + 1..].starts_with(quote) {
                    out.push(quote);
                    i += 2;
                    continue;
                }
                self.pos += 1 + i + 1;
                return Some(out);
            }
            out.push(c);
            i += c.len_utf8();
        }
        None
    }

    /// The text inside the next balanced parenthesized group, quotes
    /// respected.
    fn take_parenthesized(&mut self) -> Result<&'a str> {
        self.skip_ws();
        let rest = self.rest();
        if !rest.starts_with('(') {
            return Err(Error::parse("expected `(`"));
        }

        let mut depth = 0usize;
        let mut in_quote: Option<char> = None;
        let mut escaped = false;
        for (i, c) in rest.char_indices() {
            if let Some(q) = in_quote {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == q {
                    in_quote = None;
                }
                continue;
            }
            match c {
                '\'' | '"' | '`' => in_quote = Some(c),
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        self.pos += i + 1;
                        return Ok(rest[1..i].trim());
                    }
                }
                _ => {}
            }
        }

        Err(Error::parse("unbalanced parentheses"))
    }
}
