pub mod bands;
pub mod cli;
pub mod ctx;
pub mod dataset;
pub mod io;
pub mod math;
pub mod overlay;
pub mod pipeline;
pub mod schema;
pub mod thresholds;
