pub use crate::error::Error;

pub use color_eyre::eyre::{Context, Result};
