use super::*;
use crate::core::ModelEntity;
use std::rc::Rc;

fn entities(names: &[&str]) -> (Vec<Rc<ModelEntity>>, Vec<EntityHandle>) {
    let owned: Vec<_> = names.iter().map(|n| ModelEntity::shared(*n, [])).collect();
    let handles = owned.iter().map(EntityHandle::new).collect();
    (owned, handles)
}

fn layer_of(handles: &[EntityHandle]) -> SelectionLayer {
    let mut layer = SelectionLayer::new();
    for h in handles {
        layer.push(h.clone());
    }
    layer
}

#[test]
fn test_insert_past_end_pads_with_holes() {
    let (_owned, h) = entities(&["A", "B", "C"]);
    let mut layer = layer_of(&h[..2]);

    layer.insert(4, h[2].clone());

    assert_eq!(layer.len(), 5);
    assert_eq!(layer.count(), 3);
    assert_eq!(
        layer.raw(),
        vec![Some(h[0].clone()), Some(h[1].clone()), None, None, Some(h[2].clone())]
    );
    assert_eq!(layer.to_vec(), vec![h[0].clone(), h[1].clone(), h[2].clone()]);
    assert_eq!(layer.at(2), None);
    assert_eq!(layer.at(4), Some(&h[2]));
}

#[test]
fn test_insert_inside_shifts_tail() {
    let (_owned, h) = entities(&["A", "B", "C"]);
    let mut layer = layer_of(&[h[0].clone(), h[2].clone()]);

    layer.insert(1, h[1].clone());

    assert_eq!(layer.to_vec(), h);
    assert_eq!(layer.at(2), Some(&h[2]));
}

#[test]
fn test_replace_returns_displaced_handle() {
    let (_owned, h) = entities(&["A", "B", "C", "D"]);
    let mut layer = layer_of(&h[..3]);

    let displaced = layer.replace(1, h[3].clone());

    assert_eq!(displaced, Some(h[1].clone()));
    assert_eq!(layer.to_vec(), vec![h[0].clone(), h[3].clone(), h[2].clone()]);
    assert!(!layer.contains(&h[1]));
    assert!(layer.contains(&h[3]));
}

#[test]
fn test_replace_past_end_is_ignored() {
    let (_owned, h) = entities(&["A", "B"]);
    let mut layer = layer_of(&h[..1]);

    assert_eq!(layer.replace(3, h[1].clone()), None);
    assert_eq!(layer.to_vec(), vec![h[0].clone()]);
}

#[test]
fn test_remove_at_shifts_following_slots_and_holes() {
    let (_owned, h) = entities(&["A", "B", "C"]);
    let mut layer = layer_of(&h[..2]);
    layer.insert(3, h[2].clone());

    let removed = layer.remove_at(0);

    assert_eq!(removed, Some(h[0].clone()));
    assert_eq!(
        layer.raw(),
        vec![Some(h[1].clone()), None, Some(h[2].clone())]
    );
    assert_eq!(layer.remove_at(17), None);
}

#[test]
fn test_remove_at_hole_shifts_without_result() {
    let (_owned, h) = entities(&["A", "B"]);
    let mut layer = layer_of(&h[..1]);
    layer.insert(2, h[1].clone());

    assert_eq!(layer.remove_at(1), None);
    assert_eq!(layer.raw(), vec![Some(h[0].clone()), Some(h[1].clone())]);
}

#[test]
fn test_pop_last_takes_last_occupied_slot() {
    let (_owned, h) = entities(&["A", "B"]);
    let mut layer = layer_of(&h[..1]);
    layer.insert(3, h[1].clone());

    assert_eq!(layer.pop_last(), Some(h[1].clone()));
    assert_eq!(layer.raw(), vec![Some(h[0].clone()), None, None]);
    assert_eq!(layer.pop_last(), Some(h[0].clone()));
    assert!(layer.is_empty());
    assert_eq!(layer.pop_last(), None);
}

#[test]
fn test_remove_all_drops_every_occurrence() {
    let (_owned, h) = entities(&["A", "B"]);
    let mut layer = layer_of(&[h[0].clone(), h[1].clone(), h[0].clone()]);

    assert_eq!(layer.remove_all(&h[0]), 2);
    assert_eq!(layer.to_vec(), vec![h[1].clone()]);
    assert!(!layer.contains(&h[0]));
    assert_eq!(layer.remove_all(&h[0]), 0);
}

#[test]
fn test_duplicate_membership_survives_single_removal() {
    let (_owned, h) = entities(&["A"]);
    let mut layer = layer_of(&[h[0].clone(), h[0].clone()]);

    layer.remove_at(0);

    assert!(layer.contains(&h[0]));
    assert_eq!(layer.count(), 1);
}

#[test]
fn test_clear_resets_holes() {
    let (_owned, h) = entities(&["A"]);
    let mut layer = SelectionLayer::new();
    layer.insert(5, h[0].clone());

    layer.clear();

    assert_eq!(layer.len(), 0);
    assert!(layer.raw().is_empty());
    assert!(!layer.contains(&h[0]));
}

#[test]
fn test_insert_at_max_index_is_ignored() {
    let (_owned, h) = entities(&["A", "B"]);
    let mut layer = layer_of(&h[..1]);

    assert!(!layer.insert(usize::MAX, h[1].clone()));

    assert_eq!(layer.len(), 1);
    assert_eq!(layer.raw(), vec![Some(h[0].clone())]);
    assert!(!layer.contains(&h[1]));
}

#[test]
fn test_huge_pad_is_ignored_and_layer_stays_usable() {
    let (_owned, h) = entities(&["A", "B"]);
    let mut layer = SelectionLayer::new();

    assert!(!layer.insert(usize::MAX - 1, h[0].clone()));
    assert!(layer.push(h[1].clone()));

    assert_eq!(layer.len(), 1);
    assert_eq!(layer.raw(), vec![Some(h[1].clone())]);
}

#[test]
fn test_layer_is_bounded_by_max_slots() {
    let (_owned, h) = entities(&["A", "B", "C"]);
    let mut layer = SelectionLayer::new();

    assert!(layer.insert(MAX_SLOTS - 1, h[0].clone()));
    assert_eq!(layer.len(), MAX_SLOTS);
    assert_eq!(layer.at(MAX_SLOTS - 1), Some(&h[0]));

    assert!(!layer.push(h[1].clone()));
    assert!(!layer.insert(0, h[2].clone()));
    assert_eq!(layer.raw().len(), MAX_SLOTS);
    assert_eq!(layer.to_vec(), vec![h[0].clone()]);
}
