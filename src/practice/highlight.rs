//! Splits a base text into plain and marked fragments.
//!
//! Used twice: the optimized essay marks every designated phrase occurrence
//! (each mark becomes a drag source), and the reading passage marks only the
//! highlight sentences currently sitting in a reading slot.

/// A renderable run of the base text. Every fragment borrows from the
/// original text, so occurrences of the same mark stay distinct slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    Plain(&'a str),
    Marked(&'a str),
}

impl<'a> Fragment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Fragment::Plain(text) | Fragment::Marked(text) => text,
        }
    }
}

/// Split `text` by the `marks` that are also present in `active`, in the
/// order `marks` lists them. Inactive marks are left as plain text. Already
/// marked fragments are never split again, so an earlier mark wins where two
/// marks overlap. Empty runs are dropped from the output.
pub fn split_marked<'a, M, A>(text: &'a str, marks: &[M], active: &[A]) -> Vec<Fragment<'a>>
where
    M: AsRef<str>,
    A: AsRef<str>,
{
    let mut parts = vec![Fragment::Plain(text)];
    for mark in marks {
        let mark = mark.as_ref();
        if mark.is_empty() || !active.iter().any(|a| a.as_ref() == mark) {
            continue;
        }
        let mut next = Vec::with_capacity(parts.len());
        for part in parts {
            match part {
                Fragment::Marked(_) => next.push(part),
                Fragment::Plain(run) => {
                    let mut rest = run;
                    while let Some(pos) = rest.find(mark) {
                        next.push(Fragment::Plain(&rest[..pos]));
                        next.push(Fragment::Marked(&rest[pos..pos + mark.len()]));
                        rest = &rest[pos + mark.len()..];
                    }
                    next.push(Fragment::Plain(rest));
                }
            }
        }
        parts = next;
    }
    parts.retain(|fragment| !fragment.text().is_empty());
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_marks_stay_plain() {
        let fragments = split_marked("one two three", &["two"], &[] as &[&str]);
        assert_eq!(fragments, vec![Fragment::Plain("one two three")]);
    }

    #[test]
    fn active_mark_is_cut_out() {
        let fragments = split_marked("one two three", &["two"], &["two"]);
        assert_eq!(
            fragments,
            vec![
                Fragment::Plain("one "),
                Fragment::Marked("two"),
                Fragment::Plain(" three"),
            ]
        );
    }

    #[test]
    fn every_occurrence_is_marked_individually() {
        let fragments = split_marked("ab ab ab", &["ab"], &["ab"]);
        let marked: Vec<_> = fragments
            .iter()
            .filter(|f| matches!(f, Fragment::Marked(_)))
            .collect();
        assert_eq!(marked.len(), 3);
        assert_eq!(
            fragments,
            vec![
                Fragment::Marked("ab"),
                Fragment::Plain(" "),
                Fragment::Marked("ab"),
                Fragment::Plain(" "),
                Fragment::Marked("ab"),
            ]
        );
    }

    #[test]
    fn marks_apply_in_list_order_without_resplitting() {
        // "bc" overlaps the "abc" mark; since "abc" is applied first the
        // later mark must not split the already marked fragment.
        let fragments = split_marked("x abc y bc z", &["abc", "bc"], &["abc", "bc"]);
        assert_eq!(
            fragments,
            vec![
                Fragment::Plain("x "),
                Fragment::Marked("abc"),
                Fragment::Plain(" y "),
                Fragment::Marked("bc"),
                Fragment::Plain(" z"),
            ]
        );
    }

    #[test]
    fn mark_at_text_boundaries() {
        let fragments = split_marked("end", &["end"], &["end"]);
        assert_eq!(fragments, vec![Fragment::Marked("end")]);
    }

    #[test]
    fn owned_actives_work_too() {
        let active = vec!["two".to_string()];
        let fragments = split_marked("one two", &["two"], &active);
        assert_eq!(
            fragments,
            vec![Fragment::Plain("one "), Fragment::Marked("two")]
        );
    }
}
