pub mod cli;
pub mod errors;
pub mod histogram;
pub mod logging;
pub mod output_dir;
pub mod path_resolver;
pub mod pipeline;
pub mod plot;
pub mod profiler;
pub mod settings;


pub use errors::{HistogramError, Result};
pub use histogram::{compute_channel_histograms, Channel, ChannelHistogram, ChannelHistograms};
pub use output_dir::{ensure_output_dir, ensure_output_dir_in};
pub use path_resolver::{normalize_path, resolve_absolute, validate};
pub use pipeline::{plot_color_histogram, run};
pub use plot::render_and_save;
pub use settings::Settings;
