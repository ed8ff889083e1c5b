pub mod text;

pub use text::{DISPLAY_BINS, DISPLAY_HEIGHT, DisplayHistogram, render_sample};
