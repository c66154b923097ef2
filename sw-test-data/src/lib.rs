//! test data shared between the signwriting-fonts crates.

pub mod ttx {
    /// A trimmed SignWriting dump.
    ///
    /// Contains the reserved glyphs, one latin glyph, one symbol, a marker,
    /// the box and two number glyphs, one of them with the stray space after
    /// the marker that some exporters produce.
    pub static SMALL: &str = include_str!("../test_data/ttx/small.ttx");

    /// A 500x500 box outline for `SWM`.
    pub static BOX_TEMPLATE: &str = include_str!("../../resources/boxes/M.xml");
}

pub mod vtp {
    /// The project generated for [`crate::ttx::SMALL`] with one group and no
    /// lookups.
    pub static SMALL_ONE_GROUP: &str = include_str!("../test_data/vtp/small_one_group.vtp");
}
