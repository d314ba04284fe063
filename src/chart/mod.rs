pub mod layout;

pub use layout::{
    CellLine, ChartCell, ChartLayout, ChartRow, Shift, VerticalAlign, build_layout, layout_cell,
};
