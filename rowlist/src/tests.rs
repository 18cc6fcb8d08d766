use crate::*;

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::cmp;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }
}

fn text_fill(slot: &mut String, record: &String) {
    slot.clear();
    slot.push_str(record);
}

fn windowed(row_height: u32, viewport_height: u32) -> RowList<String, String> {
    RowList::new(
        String::new(),
        RowListOptions::new(row_height, text_fill).with_viewport_height(viewport_height),
    )
}

fn counted(row_height: u32, viewport_height: u32) -> (RowList<String, String>, Arc<AtomicUsize>) {
    let refreshes = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&refreshes);
    let list = RowList::new(
        String::new(),
        RowListOptions::new(row_height, text_fill)
            .with_viewport_height(viewport_height)
            .with_on_refresh(Some(move |_: &RowList<String, String>| {
                counter.fetch_add(1, Ordering::Relaxed);
            })),
    );
    (list, refreshes)
}

fn records(n: usize) -> Vec<String> {
    (0..n).map(|i| i.to_string()).collect()
}

fn expected_pool_len(entry_count: usize, row_height: u32, viewport_height: u32) -> usize {
    if row_height == 0 {
        return 0;
    }
    cmp::min(entry_count, (viewport_height / row_height) as usize)
}

fn assert_invariants(l: &RowList<String, String>) {
    let g = l.geometry();
    assert_eq!(
        l.pool().len(),
        expected_pool_len(l.len(), g.row_height, g.viewport_height)
    );
    assert!(l.offset() <= l.max_offset());
    assert!(l.window().end <= l.len() || l.pool().is_empty());
    for (i, slot) in l.slots().iter().enumerate() {
        assert_eq!(slot, &(l.offset() + i).to_string());
    }
}

#[test]
fn empty_store_allocates_no_slots() {
    let mut l = windowed(10, 100);
    l.refresh();
    assert_eq!(l.pool().len(), 0);
    assert_eq!(l.offset(), 0);
    assert_eq!(l.max_offset(), 0);
    assert!(l.window().is_empty());
}

#[test]
fn pool_is_bounded_by_entry_count() {
    let mut l = windowed(10, 100);
    l.extend(records(5));
    assert_eq!(l.pool().len(), 5);
    assert_eq!(l.offset(), 0);
    assert_eq!(l.max_offset(), 0);
    assert_eq!(l.slots(), &["0", "1", "2", "3", "4"]);

    // Already at the maximum: a forward wheel tick is a no-op.
    l.on_wheel(1);
    assert_eq!(l.offset(), 0);
}

#[test]
fn pool_is_bounded_by_viewport() {
    let mut l = windowed(10, 100);
    l.extend(records(100));
    assert_eq!(l.pool().len(), 10);
    assert_eq!(l.max_offset(), 90);
    assert_eq!(l.window(), Window { start: 0, end: 10 });
}

#[test]
fn rows_that_fit_floors_partial_rows() {
    let g = RowGeometry::new(10, 95);
    assert_eq!(g.rows_that_fit(), 9);
    assert_eq!(g.needed_rows(4), 4);
    assert_eq!(g.needed_rows(400), 9);
}

#[test]
fn scroll_extent_uses_wide_arithmetic() {
    let g = RowGeometry::new(4096, 100);
    assert_eq!(g.scroll_extent(2_000_000), 8_192_000_000);
}

#[test]
fn zero_row_height_never_divides() {
    let g = RowGeometry::new(0, 100);
    assert_eq!(g.rows_that_fit(), 0);
    assert_eq!(g.needed_rows(50), 0);
    assert_eq!(g.scroll_extent(50), 0);
    assert_eq!(g.offset_for_thumb(1234), 0);
}

#[test]
fn offset_for_thumb_rounds_half_up() {
    let g = RowGeometry::new(10, 100);
    assert_eq!(g.offset_for_thumb(0), 0);
    assert_eq!(g.offset_for_thumb(44), 4);
    assert_eq!(g.offset_for_thumb(45), 5);
    assert_eq!(g.offset_for_thumb(955), 96);
}

#[test]
fn wheel_steps_rows_and_clamps() {
    let mut l = windowed(10, 100);
    l.extend(records(100));

    l.on_wheel(1);
    assert_eq!(l.offset(), 3);
    l.on_wheel(1);
    assert_eq!(l.offset(), 6);
    l.on_wheel(-1);
    assert_eq!(l.offset(), 3);

    for _ in 0..40 {
        l.on_wheel(1);
    }
    assert_eq!(l.offset(), 90);
    assert_eq!(l.slots(), &["90", "91", "92", "93", "94", "95", "96", "97", "98", "99"]);

    for _ in 0..40 {
        l.on_wheel(-1);
    }
    assert_eq!(l.offset(), 0);
}

#[test]
fn wheel_step_is_configurable() {
    let mut l = RowList::new(
        String::new(),
        RowListOptions::new(10, text_fill)
            .with_viewport_height(100)
            .with_wheel_step(5),
    );
    l.extend(records(100));
    l.on_wheel(1);
    assert_eq!(l.offset(), 5);
}

#[test]
fn zero_wheel_delta_changes_nothing_but_still_refreshes() {
    let (mut l, refreshes) = counted(10, 100);
    l.extend(records(20));
    let before = refreshes.load(Ordering::Relaxed);
    l.on_wheel(0);
    assert_eq!(l.offset(), 0);
    assert_eq!(refreshes.load(Ordering::Relaxed), before + 1);
}

#[test]
fn scrollbar_position_rounds_then_clamps() {
    let mut l = windowed(10, 100);
    l.extend(records(100));

    l.on_scrollbar_position(955);
    assert_eq!(l.offset(), 90);

    l.on_scrollbar_position(444);
    assert_eq!(l.offset(), 44);

    l.on_scrollbar_position(0);
    assert_eq!(l.offset(), 0);
}

#[test]
fn wheel_and_scrollbar_resolve_through_the_same_offset() {
    let mut l = windowed(10, 100);
    l.extend(records(100));

    l.on_scrollbar_position(500);
    assert_eq!(l.offset(), 50);
    l.on_wheel(1);
    assert_eq!(l.offset(), 53);
    l.on_scrollbar_position(100);
    assert_eq!(l.offset(), 10);
    l.on_wheel(-1);
    assert_eq!(l.offset(), 7);
    assert_invariants(&l);
}

#[test]
fn viewport_shrink_releases_trailing_slots_only() {
    let mut l = windowed(10, 100);
    l.extend(records(100));
    l.set_offset_clamped(50);
    assert_eq!(l.slots()[0], "50");
    assert_eq!(l.slots()[9], "59");

    let delta = l.set_viewport_height(60);
    assert_eq!(delta, PoolDelta::Shrank(4));
    assert_eq!(l.pool().len(), 6);
    assert_eq!(l.offset(), 50);
    assert_eq!(l.slots(), &["50", "51", "52", "53", "54", "55"]);
}

#[test]
fn viewport_grow_adds_cloned_slots() {
    let mut l = windowed(10, 60);
    l.extend(records(100));
    l.set_offset_clamped(50);
    assert_eq!(l.pool().len(), 6);

    let delta = l.set_viewport_height(100);
    assert_eq!(delta, PoolDelta::Grew(4));
    assert_eq!(l.pool().len(), 10);
    assert_eq!(l.offset(), 50);
    assert_eq!(l.slots(), &["50", "51", "52", "53", "54", "55", "56", "57", "58", "59"]);
}

#[test]
fn viewport_grow_reclamps_a_now_invalid_offset() {
    let mut l = windowed(10, 60);
    l.extend(records(100));
    l.set_offset_clamped(94);
    assert_eq!(l.offset(), 94);

    // 10 rows now fit, so the old offset would leave the window hanging
    // past the end.
    l.set_viewport_height(100);
    assert_eq!(l.offset(), 90);
    assert_invariants(&l);
}

#[test]
fn extend_fires_exactly_one_refresh() {
    let (mut l, refreshes) = counted(10, 100);
    l.extend(records(100_000));
    assert_eq!(l.len(), 100_000);
    assert_eq!(refreshes.load(Ordering::Relaxed), 1);
}

#[test]
fn per_record_append_refreshes_each_time() {
    let (mut l, refreshes) = counted(10, 100);
    for r in records(5) {
        l.push(r);
    }
    assert_eq!(refreshes.load(Ordering::Relaxed), 5);
}

#[test]
fn one_by_one_matches_bulk() {
    let mut a = windowed(10, 100);
    for r in records(250) {
        a.push(r);
    }

    let mut b = windowed(10, 100);
    b.extend(records(250));

    assert_eq!(a.len(), b.len());
    assert_eq!(a.offset(), b.offset());
    assert_eq!(a.pool().len(), b.pool().len());
    assert_eq!(a.slots(), b.slots());
    assert_eq!(a.max_offset(), b.max_offset());
}

#[test]
fn refresh_is_idempotent() {
    let mut l = windowed(10, 100);
    l.extend(records(100));
    l.set_offset_clamped(42);

    let snapshot: Vec<String> = l.slots().to_vec();
    l.refresh();
    assert_eq!(l.slots(), snapshot.as_slice());
    l.refresh();
    assert_eq!(l.slots(), snapshot.as_slice());
}

#[test]
fn batch_update_coalesces_refreshes() {
    let (mut l, refreshes) = counted(10, 100);
    l.extend(records(50));
    assert_eq!(refreshes.load(Ordering::Relaxed), 1);

    l.batch_update(|l| {
        l.on_wheel(1);
        l.set_viewport_height(80);
        l.on_wheel(1);
    });
    assert_eq!(refreshes.load(Ordering::Relaxed), 2);
    assert_eq!(l.offset(), 6);
    assert_eq!(l.pool().len(), 8);
    assert_invariants(&l);
}

#[test]
fn batch_update_nests() {
    let (mut l, refreshes) = counted(10, 100);
    l.batch_update(|l| {
        l.extend(records(30));
        l.batch_update(|l| l.on_wheel(1));
        l.on_wheel(1);
    });
    assert_eq!(refreshes.load(Ordering::Relaxed), 1);
    assert_eq!(l.offset(), 6);
}

#[test]
fn batch_update_without_mutation_skips_refresh() {
    let (mut l, refreshes) = counted(10, 100);
    l.batch_update(|_| {});
    assert_eq!(refreshes.load(Ordering::Relaxed), 0);
}

#[test]
fn scroll_direction_tracks_offset_changes() {
    let mut l = windowed(10, 100);
    l.extend(records(100));
    assert_eq!(l.scroll_direction(), None);

    l.on_wheel(1);
    assert_eq!(l.scroll_direction(), Some(ScrollDirection::Forward));
    l.on_wheel(-1);
    assert_eq!(l.scroll_direction(), Some(ScrollDirection::Backward));

    // Clamped-to-equal movement keeps the last direction.
    l.on_wheel(-1);
    assert_eq!(l.offset(), 0);
    assert_eq!(l.scroll_direction(), Some(ScrollDirection::Backward));
}

#[test]
fn scrollbar_hidden_when_content_fits() {
    let mut l = windowed(10, 100);
    l.extend(records(5));
    assert_eq!(l.scroll_extent(), 50);
    assert!(l.scrollbar_hidden());

    l.extend(records(5));
    assert_eq!(l.scroll_extent(), 100);
    assert!(l.scrollbar_hidden());

    l.push("10".to_string());
    assert_eq!(l.scroll_extent(), 110);
    assert!(!l.scrollbar_hidden());
}

#[test]
fn zero_viewport_height_keeps_engine_safe() {
    let mut l = windowed(10, 0);
    l.extend(records(10));
    assert_eq!(l.pool().len(), 0);
    assert!(l.window().is_empty());

    l.on_wheel(1);
    l.on_scrollbar_position(55);
    assert!(l.offset() <= l.max_offset());
}

#[test]
fn offset_survives_a_viewport_collapse() {
    let mut l = windowed(10, 100);
    l.extend(records(100));
    l.set_offset_clamped(50);

    l.set_viewport_height(0);
    assert_eq!(l.pool().len(), 0);
    assert_eq!(l.offset(), 50);

    l.set_viewport_height(100);
    assert_eq!(l.pool().len(), 10);
    assert_eq!(l.offset(), 50);
    assert_eq!(l.slots()[0], "50");
}

#[test]
fn store_lookup_past_end_is_none() {
    let mut l = windowed(10, 100);
    l.extend(records(10));
    assert!(l.store().get(9).is_some());
    assert!(l.store().get(10).is_none());
    assert!(l.store().get(1000).is_none());
}

#[test]
fn window_reports_the_visible_range() {
    let mut l = windowed(10, 100);
    l.extend(records(100));
    l.set_offset_clamped(50);

    let w = l.window();
    assert_eq!(w, Window { start: 50, end: 60 });
    assert_eq!(w.len(), 10);
    assert!(w.contains(50));
    assert!(w.contains(59));
    assert!(!w.contains(60));
    assert!(!w.contains(49));
}

#[test]
fn randomized_event_stream_preserves_invariants() {
    let mut rng = Lcg::new(0x5eed_c0de);
    let mut l = windowed(10, 100);
    let mut next_record = 0usize;

    for _ in 0..1_500 {
        match rng.gen_range_usize(0, 5) {
            0 => {
                let n = rng.gen_range_usize(0, 40);
                l.extend((0..n).map(|_| {
                    let r = next_record.to_string();
                    next_record += 1;
                    r
                }));
            }
            1 => {
                l.push(next_record.to_string());
                next_record += 1;
            }
            2 => {
                let delta = if rng.gen_range_usize(0, 2) == 0 { 1 } else { -1 };
                l.on_wheel(delta);
            }
            3 => {
                let extent = l.scroll_extent().saturating_add(100);
                l.on_scrollbar_position(rng.gen_range_u64(0, extent));
            }
            _ => {
                l.set_viewport_height(rng.gen_range_u32(0, 300));
            }
        }
        assert_invariants(&l);
    }
}
