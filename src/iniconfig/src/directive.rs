//! Directive filtering and the fixed replacement block.
//!
//! `building.ini` files are line-oriented: each directive line starts
//! with a `$TOKEN`, optionally followed by a value. The tool never
//! parses beyond the first token of each line.

/// Directive prefixes removed from every processed file.
///
/// `$NAME_STR` is listed before `$NAME` so the longer prefix is tried
/// first; both belong to the same name-directive family.
pub const BLOCKLIST: &[&str] = &[
    "$COST_WORK",
    "$COST_RESOURCE",
    "$NO_LIFESPAN",
    "$HEATING_DISABLE",
    "$WATERSEWAGE_DISABLE",
    "$WASTE_WORKERS_DISABLE",
    "$WASTE_CUSTOMERS_DISABLE",
    "$COUNT_LIMIT",
    "$ELETRIC_WITHOUT_WORKING_FACTOR",
    "$ELETRIC_WITHOUT_LIGHTING_FACTOR",
    "$NAME_STR",
    "$NAME",
];

/// The fixed directive block spliced into every processed file.
///
/// `ELETRIC` is the game's own spelling, not a typo to fix here.
pub const FREE_BUILDING_BLOCK: &[&str] = &[
    "$NO_LIFESPAN",
    "$HEATING_DISABLE",
    "$WATERSEWAGE_DISABLE",
    "$WASTE_WORKERS_DISABLE",
    "$WASTE_CUSTOMERS_DISABLE",
    "$COUNT_LIMIT 999",
    "$ELETRIC_WITHOUT_WORKING_FACTOR 1",
    "$ELETRIC_WITHOUT_LIGHTING_FACTOR 1",
];

/// Result of running [`filter_directives`] over a file's lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredIni {
    /// Surviving lines, original order preserved.
    pub lines: Vec<String>,
    /// The first removed `$NAME_STR`/`$NAME` line, verbatim, if any.
    pub name_line: Option<String>,
}

/// First whitespace-delimited token of a line, or `""` for blank lines.
pub fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}

/// Whether a line's first token matches one of the blocklist prefixes.
pub fn is_blocklisted(line: &str) -> bool {
    let token = first_token(line);
    BLOCKLIST.iter().any(|prefix| token.starts_with(prefix))
}

fn is_name_directive(line: &str) -> bool {
    first_token(line).starts_with("$NAME")
}

/// Remove every blocklisted line, keeping the rest in order.
///
/// The first name directive encountered is captured separately so the
/// caller can re-emit it (Mode A keeps the original display name).
/// Absence of any matching line is valid and leaves `name_line` empty.
pub fn filter_directives(lines: &[String]) -> FilteredIni {
    let mut survivors = Vec::with_capacity(lines.len());
    let mut name_line = None;

    for line in lines {
        if is_blocklisted(line) {
            if name_line.is_none() && is_name_directive(line) {
                name_line = Some(line.clone());
            }
        } else {
            survivors.push(line.clone());
        }
    }

    FilteredIni {
        lines: survivors,
        name_line,
    }
}

/// Assemble the output file: name directive (if any), the fixed block,
/// then the surviving lines.
///
/// Every directive in [`FREE_BUILDING_BLOCK`] is itself blocklisted,
/// so filtering an already-composed file strips the previous block
/// before the new one is spliced in. Reapplying the edit is therefore
/// a content no-op.
pub fn compose(name_line: Option<&str>, rest: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(rest.len() + FREE_BUILDING_BLOCK.len() + 1);
    if let Some(name) = name_line {
        out.push(name.to_string());
    }
    out.extend(FREE_BUILDING_BLOCK.iter().map(|s| (*s).to_string()));
    out.extend(rest.iter().cloned());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_filter_removes_blocklisted_lines() {
        let input = lines(&[
            "$TYPE_SHOP",
            "$COST_WORK 10",
            "$STORAGE_AREA 4",
            "$COUNT_LIMIT 5",
            "$ELETRIC_WITHOUT_WORKING_FACTOR 0.5",
        ]);

        let filtered = filter_directives(&input);

        assert_eq!(filtered.lines, lines(&["$TYPE_SHOP", "$STORAGE_AREA 4"]));
        assert!(filtered.lines.iter().all(|l| !is_blocklisted(l)));
        assert!(filtered.name_line.is_none());
    }

    #[test]
    fn test_filter_preserves_order_of_survivors() {
        let input = lines(&["$C 1", "$NO_LIFESPAN", "$A 2", "$COST_RESOURCE x", "$B 3"]);

        let filtered = filter_directives(&input);

        assert_eq!(filtered.lines, lines(&["$C 1", "$A 2", "$B 3"]));
    }

    #[test]
    fn test_filter_captures_first_name_directive() {
        let input = lines(&["$TYPE_SHOP", "$NAME_STR \"Old Shop\"", "$NAME_STR \"Second\""]);

        let filtered = filter_directives(&input);

        assert_eq!(filtered.name_line.as_deref(), Some("$NAME_STR \"Old Shop\""));
        assert_eq!(filtered.lines, lines(&["$TYPE_SHOP"]));
    }

    #[test]
    fn test_bare_name_directive_is_also_removed() {
        let input = lines(&["$NAME 4210", "$TYPE_FARM"]);

        let filtered = filter_directives(&input);

        assert_eq!(filtered.name_line.as_deref(), Some("$NAME 4210"));
        assert_eq!(filtered.lines, lines(&["$TYPE_FARM"]));
    }

    #[test]
    fn test_empty_input_is_valid() {
        let filtered = filter_directives(&[]);
        assert!(filtered.lines.is_empty());
        assert!(filtered.name_line.is_none());
    }

    #[test]
    fn test_compose_places_name_then_block() {
        let rest = lines(&["$TYPE_SHOP"]);
        let out = compose(Some("$NAME_STR \"Foo\""), &rest);

        assert_eq!(out[0], "$NAME_STR \"Foo\"");
        assert_eq!(&out[1..9], FREE_BUILDING_BLOCK
            .iter()
            .map(|s| (*s).to_string())
            .collect::<Vec<_>>()
            .as_slice());
        assert_eq!(out[9], "$TYPE_SHOP");
    }

    #[test]
    fn test_compose_without_name_starts_with_block() {
        let out = compose(None, &lines(&["$TYPE_FARM"]));
        assert_eq!(out[0], "$NO_LIFESPAN");
        assert_eq!(out.len(), FREE_BUILDING_BLOCK.len() + 1);
    }

    #[test]
    fn test_reapplying_filter_and_compose_is_stable() {
        let input = lines(&["$NAME_STR \"Foo\"", "$TYPE_SHOP", "$COST_WORK 10"]);

        let first = filter_directives(&input);
        let once = compose(first.name_line.as_deref(), &first.lines);

        let second = filter_directives(&once);
        let twice = compose(second.name_line.as_deref(), &second.lines);

        assert_eq!(once, twice);
    }
}
