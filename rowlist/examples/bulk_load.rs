// Example: a bulk load costs one refresh cycle, not one per record.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rowlist::{RowList, RowListOptions};

fn counting_list(refreshes: Arc<AtomicUsize>) -> RowList<String, String> {
    RowList::new(
        String::new(),
        RowListOptions::new(16, |slot: &mut String, record: &String| {
            slot.clear();
            slot.push_str(record);
        })
        .with_viewport_height(160)
        .with_on_refresh(Some(move |_: &RowList<String, String>| {
            refreshes.fetch_add(1, Ordering::Relaxed);
        })),
    )
}

fn main() {
    let bulk_refreshes = Arc::new(AtomicUsize::new(0));
    let mut bulk = counting_list(Arc::clone(&bulk_refreshes));
    bulk.extend((0..100_000).map(|i| format!("record {i}")));

    let single_refreshes = Arc::new(AtomicUsize::new(0));
    let mut one_by_one = counting_list(Arc::clone(&single_refreshes));
    for i in 0..1_000 {
        one_by_one.push(format!("record {i}"));
    }

    println!(
        "bulk: {} records, {} refresh cycle(s)",
        bulk.len(),
        bulk_refreshes.load(Ordering::Relaxed)
    );
    println!(
        "one-by-one: {} records, {} refresh cycle(s)",
        one_by_one.len(),
        single_refreshes.load(Ordering::Relaxed)
    );
}
