//! Segmentation of marked-up text.

use crate::markup::MarkKind;

/// Split marked text before every opening delimiter and after every closing
/// delimiter.
///
/// Tagged fragments keep their delimiters so they can be classified by their
/// first character. Fragments are returned in reading order and are never
/// empty.
pub fn split_marked(marked: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;

    for (idx, c) in marked.char_indices() {
        if MarkKind::from_open(c).is_some() {
            if idx > start {
                fragments.push(&marked[start..idx]);
            }
            start = idx;
        } else if MarkKind::from_close(c).is_some() {
            let end = idx + c.len_utf8();
            fragments.push(&marked[start..end]);
            start = end;
        }
    }

    if start < marked.len() {
        fragments.push(&marked[start..]);
    }

    fragments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(kind: MarkKind, s: &str) -> String {
        format!("{}{}{}", kind.open(), s, kind.close())
    }

    #[test]
    fn test_plain_text_is_one_fragment() {
        assert_eq!(split_marked("stir well"), vec!["stir well"]);
        assert!(split_marked("").is_empty());
    }

    #[test]
    fn test_splits_in_reading_order() {
        let flour = tagged(MarkKind::Entity, "flour");
        let cups = tagged(MarkKind::Measurement, "2 cups");
        let temp = tagged(MarkKind::Temperature, "400F");
        let marked = format!("add {} {}, bake at {}", cups, flour, temp);

        assert_eq!(
            split_marked(&marked),
            vec![
                "add ",
                cups.as_str(),
                " ",
                flour.as_str(),
                ", bake at ",
                temp.as_str()
            ]
        );
    }

    #[test]
    fn test_adjacent_tags() {
        let a = tagged(MarkKind::Measurement, "2 cups");
        let b = tagged(MarkKind::Entity, "flour");
        let marked = format!("{}{}", a, b);
        assert_eq!(split_marked(&marked), vec![a.as_str(), b.as_str()]);
    }
}
