// Example: windowing a 100k-record store with wheel and scrollbar input.
use rowlist::{RowList, RowListOptions};

fn main() {
    let mut list = RowList::new(
        String::new(),
        RowListOptions::new(16, |slot: &mut String, record: &String| {
            slot.clear();
            slot.push_str(record);
        })
        .with_viewport_height(160),
    );

    list.extend((0..100_000).map(|i| format!("record {i}")));
    println!(
        "entries={} pool={} extent={}px",
        list.len(),
        list.pool().len(),
        list.scroll_extent()
    );

    list.on_wheel(1);
    println!("after wheel tick: window={:?}", list.window());

    // Drag the scrollbar thumb most of the way down.
    list.on_scrollbar_position(1_500_000);
    println!(
        "after scrollbar drag: offset={} first_visible={:?}",
        list.offset(),
        list.slots().first()
    );
}
