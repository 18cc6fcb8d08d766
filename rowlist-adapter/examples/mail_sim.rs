// Example: a simulated mail-list host bulk-loading 100k records, then
// scrolling with wheel ticks and a scrollbar drag.
use std::collections::BTreeMap;

use rowlist::RowListOptions;
use rowlist_adapter::{HostSurface, ListController, TextRow, fill_fields};

struct SimSurface {
    template: Option<TextRow>,
    height: u32,
    scroll_extent: u64,
    scrollbar_hidden: bool,
}

impl HostSurface for SimSurface {
    type Slot = TextRow;

    fn take_row_template(&mut self) -> Option<TextRow> {
        self.template.take()
    }

    fn has_header(&self) -> bool {
        true
    }

    fn available_height(&self) -> u32 {
        self.height
    }

    fn measure_row(&self, _slot: &TextRow) -> u32 {
        18
    }

    fn set_scroll_extent(&mut self, extent: u64) {
        self.scroll_extent = extent;
    }

    fn set_scrollbar_hidden(&mut self, hidden: bool) {
        self.scrollbar_hidden = hidden;
    }
}

fn record(i: usize) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("from".to_string(), "Fred Flintstone".to_string()),
        ("to".to_string(), "Wilma Flintstone".to_string()),
        ("subject".to_string(), format!("Yabba dabba doo! the {}. time", i + 1)),
        ("date".to_string(), format!("{}-03-01", 1970 + i % 50)),
    ])
}

fn print_visible(c: &ListController<BTreeMap<String, String>, SimSurface>) {
    println!("window {:?}:", c.list().window());
    for slot in c.list().slots().iter().take(3) {
        println!(
            "  {:20} | {}",
            slot.text("from").unwrap_or(""),
            slot.text("subject").unwrap_or("")
        );
    }
}

fn main() {
    let surface = SimSurface {
        template: Some(TextRow::new(["from", "to", "subject", "date"])),
        height: 180,
        scroll_extent: 0,
        scrollbar_hidden: true,
    };
    let mut c = ListController::new(surface, RowListOptions::new(0, fill_fields))
        .expect("simulated surface is well-formed");

    c.append_chunked((0..100_000).map(record), 10_000, || {
        println!("...chunk loaded, event loop breathes");
    });
    println!(
        "loaded {} records, pool of {} slots, scrollbar extent {}px",
        c.list().len(),
        c.list().pool().len(),
        c.surface().scroll_extent
    );

    c.on_wheel(1);
    print_visible(&c);

    // Drag the thumb to the very end of the content proxy.
    c.on_scrollbar_position(c.surface().scroll_extent);
    print_visible(&c);
}
