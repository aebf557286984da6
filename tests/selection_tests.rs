use workday_timeline::selection::Selection;

#[test]
fn toggle_adds_and_removes() {
    let mut selection = Selection::new();
    assert!(selection.toggle(4));
    assert!(selection.toggle(2));
    assert_eq!(selection.ids(), &[4, 2]);
    assert_eq!(selection.anchor(), Some(2));

    assert!(!selection.toggle(2));
    assert_eq!(selection.ids(), &[4]);
    assert_eq!(selection.anchor(), Some(4));
}

#[test]
fn range_follows_display_order_in_both_directions() {
    let order = [10, 30, 20, 50, 40];
    let mut selection = Selection::new();
    selection.select_only(20);

    selection.select_range(40, &order);
    assert_eq!(selection.ids(), &[20, 50, 40]);

    selection.select_range(10, &order);
    assert_eq!(selection.ids(), &[10, 30, 20]);
    assert_eq!(selection.anchor(), Some(20));
}

#[test]
fn range_without_anchor_selects_single_item() {
    let mut selection = Selection::new();
    selection.select_range(30, &[10, 30, 20]);
    assert_eq!(selection.ids(), &[30]);
    assert_eq!(selection.anchor(), Some(30));
}

#[test]
fn range_to_hidden_row_falls_back_to_single_selection() {
    let mut selection = Selection::new();
    selection.select_only(10);
    selection.select_range(99, &[10, 30, 20]);
    assert_eq!(selection.ids(), &[99]);
}

#[test]
fn clear_resets_anchor() {
    let mut selection = Selection::new();
    selection.toggle(1);
    selection.clear();
    assert!(selection.is_empty());
    assert_eq!(selection.anchor(), None);
}
