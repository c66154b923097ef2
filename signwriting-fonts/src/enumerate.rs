//! Walking the character map by glyph kind.

use crate::ttx::{CmapEntry, GlyphTable};

/// Which half of the character map to visit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Partition {
    /// Glyphs without the extension marker
    Base,
    /// Glyphs whose names carry the extension marker
    Extension,
}

impl Partition {
    fn contains(self, entry: &CmapEntry) -> bool {
        entry.class().is_extension() == (self == Partition::Extension)
    }
}

/// Iterate over the character map entries in one partition, in map order.
///
/// This borrows the table, so it can be called again to restart.
pub fn enumerate<'a>(
    table: &'a GlyphTable,
    partition: Partition,
) -> impl Iterator<Item = &'a CmapEntry> + 'a {
    table
        .cmap()
        .iter()
        .filter(move |entry| partition.contains(entry))
}
