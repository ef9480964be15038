use super::*;

// === Text Views ===

#[test]
fn str_split_first_item_handles_multibyte() {
    assert_eq!("λx".split_first_item(), Some(('λ', "x")));
    assert_eq!("".split_first_item(), None);
}

#[test]
fn str_split_while_stops_at_first_mismatch() {
    assert_eq!("abc123".split_while(char::is_alphabetic), ("abc", "123"));
    assert_eq!("123".split_while(char::is_alphabetic), ("", "123"));
    assert_eq!("abc".split_while(char::is_alphabetic), ("abc", ""));
}

#[test]
fn str_split_count_counts_chars_not_bytes() {
    assert_eq!("λμν".split_count(2), Some(("λμ", "ν")));
    assert_eq!("ab".split_count(2), Some(("ab", "")));
    assert_eq!("ab".split_count(3), None);
    assert_eq!("ab".split_count(0), Some(("", "ab")));
}

#[test]
fn str_strip_literal() {
    assert_eq!("true2".strip_literal("true"), Some(("true", "2")));
    assert_eq!("tru".strip_literal("true"), None);
}

#[test]
fn str_split_at_offset_clamps() {
    assert_eq!("abc".split_at_offset(1), ("a", "bc"));
    assert_eq!("abc".split_at_offset(10), ("abc", ""));
}

#[test]
fn str_split_at_offset_rounds_down_to_char_boundary() {
    // Byte 1 is inside 'λ'.
    assert_eq!("λx".split_at_offset(1), ("", "λx"));
    assert_eq!("aλ".split_at_offset(2), ("a", "λ"));
    assert_eq!("aλ".split_at_offset(3), ("aλ", ""));
}

#[test]
fn str_offset_to_suffix() {
    let text = "key: value";
    let (_, rest) = text.split_at_offset(5);
    assert_eq!(text.offset_to(rest), 5);
}

// === Slice Views ===

#[test]
fn slice_views_mirror_text_views() {
    let items: &[u8] = &[1, 2, 3, 4];
    assert_eq!(items.split_first_item(), Some((1, &items[1..])));
    assert_eq!(items.split_while(|b| b < 3), (&items[..2], &items[2..]));
    assert_eq!(items.split_count(4), Some((items, &items[4..])));
    assert_eq!(items.split_count(5), None);
    assert_eq!(items.strip_literal(&[1, 2]), Some((&items[..2], &items[2..])));
    assert!(items.contains_item(4));
    assert!(!items.contains_item(9));
}

#[test]
fn empty_views() {
    let items: &[u8] = &[];
    assert!(items.is_empty_input());
    assert!("".is_empty_input());
    assert_eq!(items.first_item(), None);
    assert_eq!("".first_item(), None);
}
