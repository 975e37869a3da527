//! Rendering helpers shared by view tests.

use crate::model::trip::fixtures::trip;
use crate::model::{Pagination, Trip, TripPage};
use ratatui::buffer::Buffer;

/// Convert a buffer to text, one line per row, keeping every row.
pub(crate) fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut lines = Vec::with_capacity(area.height as usize);

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line);
    }

    lines.join("\n")
}

/// Page of fixture trips named `Trip 0`, `Trip 1`, ...
pub(crate) fn page_of(count: usize, current_page: u32, total_pages: u32) -> TripPage {
    TripPage {
        data: (0..count).map(|i| trip(&format!("Trip {i}"))).collect::<Vec<Trip>>(),
        pagination: Pagination {
            total_pages,
            current_page,
        },
    }
}
