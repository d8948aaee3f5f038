use super::*;

fn open_count(acc: &Accordion) -> usize {
    acc.flags().into_iter().filter(|f| *f).count()
}

#[test]
fn all_closed_markup_starts_closed() {
    let acc = Accordion::from_open_flags(&[false, false, false]);
    assert_eq!(acc.len(), 3);
    assert_eq!(acc.open_index(), None);
}

#[test]
fn markup_with_several_open_keeps_first() {
    let acc = Accordion::from_open_flags(&[false, true, true]);
    assert_eq!(acc.open_index(), Some(1));
    assert_eq!(acc.flags(), vec![false, true, false]);
}

#[test]
fn click_opens_closed_item() {
    let mut acc = Accordion::from_open_flags(&[false, false]);
    acc.click(1);
    assert_eq!(acc.flags(), vec![false, true]);
}

#[test]
fn click_other_item_closes_previous() {
    let mut acc = Accordion::from_open_flags(&[true, false, false]);
    acc.click(2);
    assert_eq!(acc.flags(), vec![false, false, true]);
}

#[test]
fn clicking_sole_open_item_closes_it() {
    let mut acc = Accordion::from_open_flags(&[false, true]);
    acc.click(1);
    assert_eq!(acc.open_index(), None);
}

#[test]
fn out_of_range_click_is_ignored() {
    let mut acc = Accordion::from_open_flags(&[true]);
    acc.click(5);
    assert_eq!(acc.open_index(), Some(0));
}

#[test]
fn empty_accordion() {
    let mut acc = Accordion::from_open_flags(&[]);
    assert!(acc.is_empty());
    acc.click(0);
    assert_eq!(acc.open_index(), None);
}

#[test]
fn at_most_one_open_for_any_click_sequence() {
    let mut acc = Accordion::from_open_flags(&[false; 4]);
    // Deterministic pseudo-random sequence covering repeats and switches.
    let mut seed: u32 = 7;
    for _ in 0..500 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let index = (seed >> 16) as usize % 4;
        let was_open = acc.is_open(index);
        acc.click(index);
        assert!(open_count(&acc) <= 1);
        assert_eq!(acc.is_open(index), !was_open);
    }
}
