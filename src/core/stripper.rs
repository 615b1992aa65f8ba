use crate::domain::model::{AnchorCheck, AnchorMismatch, ExclusionRange, ExclusionSet};
use crate::utils::error::{Result, StripError};

/// Splits text after every `\n`, keeping each line's terminator attached.
///
/// `\r\n` stays intact because the split happens after the `\n`. A trailing
/// line without a terminator is returned as-is, and empty input yields no lines.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}

/// Checks every anchor and returns all mismatches together.
///
/// An anchor pointing past the end of the file is a mismatch with no found text.
pub fn validate_anchors(lines: &[&str], anchors: &[AnchorCheck]) -> Result<()> {
    let mismatches: Vec<AnchorMismatch> = anchors
        .iter()
        .filter_map(|anchor| {
            let line = lines.get(anchor.index).copied();
            match line {
                Some(line) if line.contains(anchor.contains.as_str()) => {
                    tracing::debug!(index = anchor.index, marker = %anchor.contains, "anchor matched");
                    None
                }
                found => Some(AnchorMismatch {
                    index: anchor.index,
                    expected: anchor.contains.clone(),
                    found: found.map(str::to_string),
                    label: anchor.label.clone(),
                }),
            }
        })
        .collect();

    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(StripError::AnchorMismatch { mismatches })
    }
}

pub fn compute_exclusion_set(ranges: &[ExclusionRange]) -> ExclusionSet {
    ranges.iter().collect()
}

/// Keeps lines whose index is not excluded, in original order.
pub fn filter_lines<'a>(lines: &[&'a str], exclusions: &ExclusionSet) -> Vec<&'a str> {
    lines
        .iter()
        .enumerate()
        .filter(|(index, _)| !exclusions.contains(*index))
        .map(|(_, line)| *line)
        .collect()
}

pub fn join_lines(lines: &[&str]) -> String {
    lines.concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keeps_terminators() {
        let lines = split_lines("a\nb\r\nc");
        assert_eq!(lines, vec!["a\n", "b\r\n", "c"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_lone_carriage_return_is_not_a_terminator() {
        assert_eq!(split_lines("a\rb\n"), vec!["a\rb\n"]);
    }

    #[test]
    fn test_split_then_join_is_byte_identical() {
        let content = "export const t = {\r\n  en: {\n\n  },\n}";
        assert_eq!(join_lines(&split_lines(content)), content);
    }

    #[test]
    fn test_validate_anchors_accepts_substring_match() {
        let lines = vec!["const x = {\n", "  ru: {\n", "  }\n"];
        let anchors = vec![AnchorCheck::new(1, "ru: {")];
        assert!(validate_anchors(&lines, &anchors).is_ok());
    }

    #[test]
    fn test_validate_anchors_collects_every_mismatch() {
        let lines = vec!["  zz: {\n", "  pt: {\n"];
        let anchors = vec![
            AnchorCheck::new(0, "ru: {"),
            AnchorCheck::new(1, "pt: {"),
            AnchorCheck::new(5, "ms: {").with_label("ms"),
        ];

        let err = validate_anchors(&lines, &anchors).unwrap_err();
        let StripError::AnchorMismatch { mismatches } = err else {
            panic!("expected anchor mismatch");
        };

        assert_eq!(mismatches.len(), 2);
        assert_eq!(mismatches[0].index, 0);
        assert_eq!(mismatches[0].found.as_deref(), Some("  zz: {\n"));
        assert_eq!(mismatches[1].index, 5);
        assert_eq!(mismatches[1].found, None);
        assert_eq!(mismatches[1].label.as_deref(), Some("ms"));
    }

    #[test]
    fn test_exclusion_set_size_for_disjoint_ranges() {
        let ranges = vec![
            ExclusionRange::new(942, 1132),
            ExclusionRange::new(752, 847),
            ExclusionRange::new(190, 480),
        ];
        let set = compute_exclusion_set(&ranges);
        assert_eq!(set.len(), 190 + 95 + 290);
        assert!(set.contains(190));
        assert!(!set.contains(480));
        assert!(set.contains(1131));
        assert!(!set.contains(1132));
    }

    #[test]
    fn test_reversed_range_contributes_nothing() {
        let set = compute_exclusion_set(&[ExclusionRange::new(10, 5)]);
        assert!(set.is_empty());
    }

    #[test]
    fn test_filter_preserves_order_and_ignores_out_of_range_indices() {
        let lines = vec!["0\n", "1\n", "2\n", "3\n"];
        let set = compute_exclusion_set(&[ExclusionRange::new(1, 3), ExclusionRange::new(10, 20)]);
        assert_eq!(filter_lines(&lines, &set), vec!["0\n", "3\n"]);
    }

    #[test]
    fn test_range_far_past_end_of_file_removes_only_existing_lines() {
        let lines = vec!["en: {\n", "  a,\n", "  b,\n", "}"];
        let set = compute_exclusion_set(&[ExclusionRange::new(2, 30_000_000)]);
        assert_eq!(filter_lines(&lines, &set), vec!["en: {\n", "  a,\n"]);
    }
}
